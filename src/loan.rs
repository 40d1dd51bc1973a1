use crate::amount;
use crate::errors::Error;
use crate::storage_types::{
    DataKey, Loan, LoanStatus, Payment, LOAN_BUMP_AMOUNT, LOAN_LIFETIME_THRESHOLD,
    MAX_REFERENCE_LEN, MONTH_IN_SECONDS, WEEK_IN_SECONDS,
};
use soroban_sdk::{Address, Env, String, Vec};

pub(crate) struct LoanTerms {
    pub borrower: Address,
    pub principal: i128,
    pub interest_rate: u32,
    pub term_months: u32,
    pub weekly_payment: i128,
    pub collateral_serial: String,
    pub collateral_type: String,
}

impl LoanTerms {
    pub fn validate(&self) -> Result<(), Error> {
        amount::check_positive_amount(self.principal)?;
        amount::check_positive_amount(self.weekly_payment)?;
        if self.term_months == 0 {
            return Err(Error::InvalidTerm);
        }
        Ok(())
    }

    /// Builds the record of a fresh loan. Loans go live on creation, there
    /// is no separate activation step.
    pub fn into_loan(self, id: u64, now: u64) -> Result<Loan, Error> {
        self.validate()?;
        let term = (self.term_months as u64)
            .checked_mul(MONTH_IN_SECONDS)
            .ok_or(Error::Overflow)?;
        Ok(Loan {
            id,
            borrower: self.borrower,
            principal: self.principal,
            interest_rate: self.interest_rate,
            term_months: self.term_months,
            weekly_payment: self.weekly_payment,
            collateral_serial: self.collateral_serial,
            collateral_type: self.collateral_type,
            total_paid: 0,
            remaining_balance: self.principal,
            next_payment_due: now.checked_add(WEEK_IN_SECONDS).ok_or(Error::Overflow)?,
            start_date: now,
            end_date: now.checked_add(term).ok_or(Error::Overflow)?,
            status: LoanStatus::Active,
        })
    }
}

/// Applies an accepted payment to a copy of the loan. Returns the updated
/// record and whether it just became paid. Nothing is written here, the
/// caller commits once the transfer has settled.
pub(crate) fn apply_payment(loan: &Loan, payment: i128) -> Result<(Loan, bool), Error> {
    if loan.status != LoanStatus::Active {
        return Err(Error::LoanNotActive);
    }
    amount::check_positive_amount(payment)?;
    if payment > loan.remaining_balance {
        return Err(Error::InvalidAmount);
    }

    let mut next = loan.clone();
    next.total_paid = amount::add(loan.total_paid, payment)?;
    next.remaining_balance = amount::sub(loan.principal, next.total_paid)?;
    // fixed weekly cadence, independent of when the payment arrives
    next.next_payment_due = loan
        .next_payment_due
        .checked_add(WEEK_IN_SECONDS)
        .ok_or(Error::Overflow)?;

    let became_paid = next.total_paid >= next.principal;
    if became_paid {
        next.status = LoanStatus::Paid;
    }
    Ok((next, became_paid))
}

pub(crate) fn is_late(loan: &Loan, now: u64) -> bool {
    now > loan.next_payment_due
}

fn extend_persistent(e: &Env, key: &DataKey) {
    e.storage()
        .persistent()
        .extend_ttl(key, LOAN_LIFETIME_THRESHOLD, LOAN_BUMP_AMOUNT);
}

pub(crate) fn read_loan_count(e: &Env) -> u64 {
    e.storage()
        .instance()
        .get(&DataKey::LoanCounter)
        .unwrap_or(0)
}

// ids start at 0 and are never reused
pub(crate) fn bump_loan_count(e: &Env) -> Result<(), Error> {
    let count = read_loan_count(e).checked_add(1).ok_or(Error::Overflow)?;
    e.storage().instance().set(&DataKey::LoanCounter, &count);
    Ok(())
}

pub(crate) fn read_payment_count(e: &Env) -> u64 {
    e.storage()
        .instance()
        .get(&DataKey::PaymentCounter)
        .unwrap_or(0)
}

pub(crate) fn bump_payment_count(e: &Env) -> Result<(), Error> {
    let count = read_payment_count(e)
        .checked_add(1)
        .ok_or(Error::Overflow)?;
    e.storage().instance().set(&DataKey::PaymentCounter, &count);
    Ok(())
}

pub(crate) fn read_loan(e: &Env, loan_id: u64) -> Result<Loan, Error> {
    let key = DataKey::Loan(loan_id);
    let loan: Loan = e.storage().persistent().get(&key).ok_or(Error::NotFound)?;
    extend_persistent(e, &key);
    Ok(loan)
}

pub(crate) fn write_loan(e: &Env, loan: &Loan) {
    let key = DataKey::Loan(loan.id);
    e.storage().persistent().set(&key, loan);
    extend_persistent(e, &key);
}

pub(crate) fn read_borrower_loans(e: &Env, borrower: &Address) -> Vec<u64> {
    let key = DataKey::BorrowerLoans(borrower.clone());
    match e.storage().persistent().get::<_, Vec<u64>>(&key) {
        Some(ids) => {
            extend_persistent(e, &key);
            ids
        }
        None => Vec::new(e),
    }
}

pub(crate) fn append_borrower_loan(e: &Env, borrower: &Address, loan_id: u64) {
    let key = DataKey::BorrowerLoans(borrower.clone());
    let mut ids = read_borrower_loans(e, borrower);
    ids.push_back(loan_id);
    e.storage().persistent().set(&key, &ids);
    extend_persistent(e, &key);
}

pub(crate) fn check_reference(reference: &String) -> Result<(), Error> {
    if reference.len() > MAX_REFERENCE_LEN {
        return Err(Error::ReferenceTooLong);
    }
    Ok(())
}

pub(crate) fn read_loan_payment_count(e: &Env, loan_id: u64) -> u32 {
    e.storage()
        .persistent()
        .get(&DataKey::LoanPaymentCount(loan_id))
        .unwrap_or(0)
}

// one entry per payment, indexed from 0 within the loan
pub(crate) fn read_payments(e: &Env, loan_id: u64) -> Vec<Payment> {
    let mut payments = Vec::new(e);
    for i in 0..read_loan_payment_count(e, loan_id) {
        let key = DataKey::LoanPayment(loan_id, i);
        if let Some(payment) = e.storage().persistent().get::<_, Payment>(&key) {
            extend_persistent(e, &key);
            payments.push_back(payment);
        }
    }
    payments
}

pub(crate) fn append_payment(e: &Env, payment: &Payment) -> Result<(), Error> {
    let index = read_loan_payment_count(e, payment.loan_id);
    let count = index.checked_add(1).ok_or(Error::Overflow)?;

    let key = DataKey::LoanPayment(payment.loan_id, index);
    e.storage().persistent().set(&key, payment);
    extend_persistent(e, &key);

    let count_key = DataKey::LoanPaymentCount(payment.loan_id);
    e.storage().persistent().set(&count_key, &count);
    extend_persistent(e, &count_key);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amount::UNIT;
    use soroban_sdk::testutils::Address as _;

    fn terms(e: &Env) -> LoanTerms {
        LoanTerms {
            borrower: Address::generate(e),
            principal: 350 * UNIT,
            interest_rate: 1200,
            term_months: 12,
            weekly_payment: 8_750_000,
            collateral_serial: String::from_str(e, "RS-50L-2024-001"),
            collateral_type: String::from_str(e, "RejSola Standard 50L"),
        }
    }

    #[test]
    fn new_loan_is_active_with_full_balance() {
        let e = Env::default();
        let loan = terms(&e).into_loan(0, 1_000).unwrap();

        assert_eq!(loan.status, LoanStatus::Active);
        assert_eq!(loan.remaining_balance, 350 * UNIT);
        assert_eq!(loan.total_paid, 0);
        assert_eq!(loan.next_payment_due, 1_000 + WEEK_IN_SECONDS);
        assert_eq!(loan.end_date, 1_000 + 12 * MONTH_IN_SECONDS);
    }

    #[test]
    fn bad_terms_are_rejected() {
        let e = Env::default();

        let mut t = terms(&e);
        t.principal = 0;
        assert_eq!(t.into_loan(0, 0), Err(Error::InvalidAmount));

        let mut t = terms(&e);
        t.weekly_payment = -1;
        assert_eq!(t.into_loan(0, 0), Err(Error::InvalidAmount));

        let mut t = terms(&e);
        t.term_months = 0;
        assert_eq!(t.into_loan(0, 0), Err(Error::InvalidTerm));

        assert_eq!(terms(&e).into_loan(0, u64::MAX), Err(Error::Overflow));
    }

    #[test]
    fn payment_keeps_cadence_and_balance() {
        let e = Env::default();
        let loan = terms(&e).into_loan(0, 0).unwrap();

        let (next, paid) = apply_payment(&loan, 8_750_000).unwrap();
        assert!(!paid);
        assert_eq!(next.total_paid, 8_750_000);
        assert_eq!(next.remaining_balance, 350 * UNIT - 8_750_000);
        assert_eq!(next.next_payment_due, 2 * WEEK_IN_SECONDS);
        // the input record is untouched
        assert_eq!(loan.total_paid, 0);
    }

    #[test]
    fn full_payment_marks_paid() {
        let e = Env::default();
        let loan = terms(&e).into_loan(0, 0).unwrap();

        let (next, paid) = apply_payment(&loan, 350 * UNIT).unwrap();
        assert!(paid);
        assert_eq!(next.status, LoanStatus::Paid);
        assert_eq!(next.remaining_balance, 0);

        assert_eq!(apply_payment(&next, 1), Err(Error::LoanNotActive));
    }

    #[test]
    fn overpayment_and_zero_are_invalid() {
        let e = Env::default();
        let loan = terms(&e).into_loan(0, 0).unwrap();

        assert_eq!(
            apply_payment(&loan, 350 * UNIT + 1),
            Err(Error::InvalidAmount)
        );
        assert_eq!(apply_payment(&loan, 0), Err(Error::InvalidAmount));
    }

    #[test]
    fn long_references_are_rejected() {
        let e = Env::default();
        let ok = String::from_str(&e, "0x5f2c9a1e");
        let long = String::from_bytes(&e, &[b'a'; MAX_REFERENCE_LEN as usize + 1]);

        assert_eq!(check_reference(&ok), Ok(()));
        assert_eq!(check_reference(&long), Err(Error::ReferenceTooLong));
    }

    #[test]
    fn late_only_after_due_date() {
        let e = Env::default();
        let loan = terms(&e).into_loan(0, 0).unwrap();

        assert!(!is_late(&loan, WEEK_IN_SECONDS));
        assert!(is_late(&loan, WEEK_IN_SECONDS + 1));
    }
}
