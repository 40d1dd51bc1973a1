//! Dylets cooler loan ledger
use crate::access::{authorize, Operation};
use crate::admin::{
    extend_instance, has_administrator, is_paused, read_administrator, read_settlement_token,
    require_not_paused, write_administrator, write_paused, write_settlement_token,
};
use crate::amount::check_positive_amount;
use crate::errors::Error;
use crate::events;
use crate::loan::{
    append_borrower_loan, append_payment, apply_payment, bump_loan_count, bump_payment_count,
    check_reference, is_late, read_borrower_loans, read_loan, read_loan_count, read_payment_count,
    read_payments, write_loan, LoanTerms,
};
use crate::settlement::{Settlement, TokenSettlement};
use crate::storage_types::{Loan, LoanStatus, Payment};
use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Vec};

fn require_admin(e: &Env, caller: &Address, op: Operation) -> Result<(), Error> {
    caller.require_auth();
    let admin = read_administrator(e)?;
    authorize(&admin, caller, op, None)
}

#[contract]
pub struct LoanLedger;

#[contractimpl]
impl LoanLedger {
    pub fn initialize(e: Env, admin: Address, settlement_token: Address) -> Result<(), Error> {
        if has_administrator(&e) {
            return Err(Error::AlreadyInitialized);
        }
        write_administrator(&e, &admin);
        write_settlement_token(&e, &settlement_token);
        write_paused(&e, false);
        extend_instance(&e);
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    pub fn create_loan(
        e: Env,
        caller: Address,
        borrower: Address,
        principal: i128,
        interest_rate: u32,
        term_months: u32,
        weekly_payment: i128,
        collateral_serial: String,
        collateral_type: String,
    ) -> Result<u64, Error> {
        require_admin(&e, &caller, Operation::CreateLoan)?;
        require_not_paused(&e)?;

        let terms = LoanTerms {
            borrower: borrower.clone(),
            principal,
            interest_rate,
            term_months,
            weekly_payment,
            collateral_serial,
            collateral_type,
        };
        let loan_id = read_loan_count(&e);
        let loan = terms.into_loan(loan_id, e.ledger().timestamp())?;
        bump_loan_count(&e)?;
        write_loan(&e, &loan);
        append_borrower_loan(&e, &borrower, loan_id);
        extend_instance(&e);

        log!(&e, "loan {} created for {}", loan_id, borrower);
        events::loan_created(&e, loan_id, borrower, principal);
        Ok(loan_id)
    }

    pub fn make_payment(
        e: Env,
        caller: Address,
        loan_id: u64,
        amount: i128,
        reference: String,
    ) -> Result<u64, Error> {
        caller.require_auth();
        let admin = read_administrator(&e)?;
        let loan = read_loan(&e, loan_id).ok();
        authorize(&admin, &caller, Operation::MakePayment, loan.as_ref())?;
        let loan = loan.ok_or(Error::NotFound)?;
        require_not_paused(&e)?;
        check_positive_amount(amount)?;
        check_reference(&reference)?;

        let (updated, became_paid) = apply_payment(&loan, amount)?;
        let payment_id = read_payment_count(&e);
        let token = read_settlement_token(&e)?;

        // nothing is written until the transfer has settled
        let receipt = TokenSettlement::new(&e, &token).transfer_in(&caller, amount)?;

        bump_payment_count(&e)?;
        write_loan(&e, &updated);
        append_payment(
            &e,
            &Payment {
                id: payment_id,
                loan_id,
                amount,
                timestamp: e.ledger().timestamp(),
                reference,
                ledger: receipt.ledger,
            },
        )?;
        extend_instance(&e);

        log!(
            &e,
            "loan {} paid {}, remaining {}",
            loan_id,
            amount,
            updated.remaining_balance
        );
        events::payment_made(&e, loan_id, caller, amount);
        if became_paid {
            events::status_changed(&e, loan_id, LoanStatus::Paid);
        }
        Ok(payment_id)
    }

    pub fn mark_as_default(e: Env, caller: Address, loan_id: u64) -> Result<(), Error> {
        require_admin(&e, &caller, Operation::MarkAsDefault)?;
        require_not_paused(&e)?;

        let mut loan = read_loan(&e, loan_id)?;
        loan.status = LoanStatus::Defaulted;
        write_loan(&e, &loan);

        log!(&e, "loan {} marked as default", loan_id);
        events::status_changed(&e, loan_id, LoanStatus::Defaulted);
        Ok(())
    }

    pub fn withdraw(e: Env, caller: Address, amount: i128, to: Address) -> Result<(), Error> {
        require_admin(&e, &caller, Operation::Withdraw)?;
        require_not_paused(&e)?;
        check_positive_amount(amount)?;

        let token = read_settlement_token(&e)?;
        let settlement = TokenSettlement::new(&e, &token);
        if settlement.balance_of(&e.current_contract_address()) < amount {
            return Err(Error::InsufficientCustodyBalance);
        }
        settlement.transfer_out(&to, amount)?;
        extend_instance(&e);

        log!(&e, "withdrew {} to {}", amount, to);
        events::withdrawn(&e, to, amount);
        Ok(())
    }

    pub fn pause(e: Env, caller: Address) -> Result<(), Error> {
        require_admin(&e, &caller, Operation::Pause)?;
        require_not_paused(&e)?;

        write_paused(&e, true);
        extend_instance(&e);
        events::paused(&e, caller);
        Ok(())
    }

    pub fn unpause(e: Env, caller: Address) -> Result<(), Error> {
        require_admin(&e, &caller, Operation::Unpause)?;
        if !is_paused(&e) {
            return Err(Error::NotPaused);
        }

        write_paused(&e, false);
        extend_instance(&e);
        events::unpaused(&e, caller);
        Ok(())
    }

    pub fn set_admin(e: Env, caller: Address, new_admin: Address) -> Result<(), Error> {
        require_admin(&e, &caller, Operation::SetAdmin)?;
        require_not_paused(&e)?;

        write_administrator(&e, &new_admin);
        extend_instance(&e);
        events::set_admin(&e, caller, new_admin);
        Ok(())
    }

    pub fn get_loan(e: Env, loan_id: u64) -> Result<Loan, Error> {
        read_loan(&e, loan_id)
    }

    pub fn get_borrower_loans(e: Env, borrower: Address) -> Vec<u64> {
        read_borrower_loans(&e, &borrower)
    }

    pub fn get_loan_payments(e: Env, loan_id: u64) -> Result<Vec<Payment>, Error> {
        read_loan(&e, loan_id)?;
        Ok(read_payments(&e, loan_id))
    }

    pub fn is_payment_late(e: Env, loan_id: u64) -> Result<bool, Error> {
        let loan = read_loan(&e, loan_id)?;
        Ok(is_late(&loan, e.ledger().timestamp()))
    }

    pub fn loan_count(e: Env) -> u64 {
        read_loan_count(&e)
    }

    pub fn admin(e: Env) -> Result<Address, Error> {
        read_administrator(&e)
    }

    pub fn settlement_token(e: Env) -> Result<Address, Error> {
        read_settlement_token(&e)
    }

    pub fn paused(e: Env) -> bool {
        is_paused(&e)
    }

    pub fn custody_balance(e: Env) -> Result<i128, Error> {
        let token = read_settlement_token(&e)?;
        Ok(TokenSettlement::new(&e, &token).balance_of(&e.current_contract_address()))
    }
}
