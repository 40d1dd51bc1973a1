use soroban_sdk::{contracttype, Address, String};

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

// Loans run for months, keep their records alive well past a term payment.
pub(crate) const LOAN_BUMP_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
pub(crate) const LOAN_LIFETIME_THRESHOLD: u32 = LOAN_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub(crate) const DAY_IN_SECONDS: u64 = 24 * 60 * 60;
pub(crate) const WEEK_IN_SECONDS: u64 = 7 * DAY_IN_SECONDS;
pub(crate) const MONTH_IN_SECONDS: u64 = 30 * DAY_IN_SECONDS;

pub(crate) const MAX_REFERENCE_LEN: u32 = 128;

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LoanStatus {
    Pending = 0,
    Active = 1,
    Paid = 2,
    Defaulted = 3,
}

/// A cooler loan as stored by the ledger. Amounts use the settlement
/// token's 6 decimals, dates are ledger timestamps in seconds.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Loan {
    pub id: u64,
    pub borrower: Address,
    pub principal: i128,
    /// basis points
    pub interest_rate: u32,
    pub term_months: u32,
    pub weekly_payment: i128,
    pub collateral_serial: String,
    pub collateral_type: String,
    pub total_paid: i128,
    pub remaining_balance: i128,
    pub next_payment_due: u64,
    pub start_date: u64,
    pub end_date: u64,
    pub status: LoanStatus,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Payment {
    pub id: u64,
    pub loan_id: u64,
    pub amount: i128,
    pub timestamp: u64,
    /// external reference supplied by the payer
    pub reference: String,
    /// ledger sequence the settlement transfer landed in
    pub ledger: u32,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    SettlementToken,
    Paused,
    LoanCounter,
    PaymentCounter,
    Loan(u64),
    LoanPaymentCount(u64),
    LoanPayment(u64, u32),
    BorrowerLoans(Address),
}
