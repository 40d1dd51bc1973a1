use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 100,
    NotInitialized = 101,
    Unauthorized = 102,
    NotFound = 103,
    SystemPaused = 104,
    NotPaused = 105,
    InvalidAmount = 106,
    InvalidTerm = 107,
    Overflow = 108,
    Underflow = 109,
    TransferFailed = 110,
    InsufficientCustodyBalance = 111,
    LoanNotActive = 112,
    ReferenceTooLong = 113,
}
