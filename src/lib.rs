#![no_std]

mod access;
mod admin;
mod amount;
mod contract;
mod errors;
mod events;
mod loan;
mod settlement;
mod storage_types;
mod test_token;

pub use crate::access::{authorize, Operation};
pub use crate::amount::{DECIMALS, UNIT};
pub use crate::contract::{LoanLedger, LoanLedgerClient};
pub use crate::errors::Error;
pub use crate::events::{LoanCreatedEvent, LoanStatusChangedEvent, PaymentMadeEvent};
pub use crate::settlement::{Receipt, Settlement, TokenSettlement};
pub use crate::storage_types::{Loan, LoanStatus, Payment};
