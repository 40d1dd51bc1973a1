use crate::storage_types::LoanStatus;
use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

pub const LOAN: Symbol = symbol_short!("loan");
pub const CREATED: Symbol = symbol_short!("created");
pub const PAYMENT: Symbol = symbol_short!("payment");
pub const STATUS: Symbol = symbol_short!("status");
pub const LEDGER: Symbol = symbol_short!("ledger");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LoanCreatedEvent {
    pub loan_id: u64,
    pub borrower: Address,
    pub principal: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaymentMadeEvent {
    pub loan_id: u64,
    pub borrower: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LoanStatusChangedEvent {
    pub loan_id: u64,
    pub status: LoanStatus,
}

pub(crate) fn loan_created(e: &Env, loan_id: u64, borrower: Address, principal: i128) {
    e.events().publish(
        (LOAN, CREATED),
        LoanCreatedEvent {
            loan_id,
            borrower,
            principal,
        },
    );
}

pub(crate) fn payment_made(e: &Env, loan_id: u64, borrower: Address, amount: i128) {
    e.events().publish(
        (LOAN, PAYMENT),
        PaymentMadeEvent {
            loan_id,
            borrower,
            amount,
        },
    );
}

pub(crate) fn status_changed(e: &Env, loan_id: u64, status: LoanStatus) {
    e.events()
        .publish((LOAN, STATUS), LoanStatusChangedEvent { loan_id, status });
}

pub(crate) fn paused(e: &Env, admin: Address) {
    e.events().publish((LEDGER, symbol_short!("paused")), admin);
}

pub(crate) fn unpaused(e: &Env, admin: Address) {
    e.events()
        .publish((LEDGER, symbol_short!("unpaused")), admin);
}

pub(crate) fn set_admin(e: &Env, admin: Address, new_admin: Address) {
    e.events()
        .publish((LEDGER, symbol_short!("set_admin")), (admin, new_admin));
}

pub(crate) fn withdrawn(e: &Env, to: Address, amount: i128) {
    e.events()
        .publish((LEDGER, symbol_short!("withdraw")), (to, amount));
}
