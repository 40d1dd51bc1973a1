//! Who may call what. The administrator holds every ledger level
//! operation; paying a loan is reserved to that loan's borrower.
use crate::errors::Error;
use crate::storage_types::Loan;
use soroban_sdk::Address;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Operation {
    CreateLoan,
    MarkAsDefault,
    Pause,
    Unpause,
    Withdraw,
    SetAdmin,
    MakePayment,
}

impl Operation {
    pub fn is_admin_only(self) -> bool {
        !matches!(self, Operation::MakePayment)
    }
}

/// Authorization predicate. `caller` must already have been proven with
/// `require_auth`; this only decides whether the identity is allowed.
pub fn authorize(
    admin: &Address,
    caller: &Address,
    op: Operation,
    loan: Option<&Loan>,
) -> Result<(), Error> {
    if op.is_admin_only() {
        if caller != admin {
            return Err(Error::Unauthorized);
        }
        return Ok(());
    }

    let loan = loan.ok_or(Error::NotFound)?;
    if *caller != loan.borrower {
        return Err(Error::Unauthorized);
    }
    Ok(())
}
