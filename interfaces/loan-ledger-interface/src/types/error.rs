use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 0,
    Uninitialized = 1,

    InvalidLoanAmount = 100,
    InvalidPrice = 101,
    InvalidDuration = 102,
    InvalidCollateralizationRatio = 103,
    InvalidAmount = 104,
    InvalidRewardFee = 105,
    RepaymentExceedsTotalDue = 106,

    Unauthorized = 200,
    NotBorrower = 201,

    LoanNotFound = 300,
    LoanAlreadyFunded = 301,
    LoanNotActive = 302,

    InsufficientCollateral = 400,
    InsufficientAllowance = 401,
    InsufficientBalance = 402,

    NotOverdueOrSufficientlyCollateralized = 500,

    MathOverflowError = 600,
}

/// Failure category a caller can branch on without knowing every code
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Lifecycle,
    InvalidInput,
    PermissionDenied,
    StateConflict,
    InsufficientFunds,
    NotEligible,
    Arithmetic,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::AlreadyInitialized | Error::Uninitialized => ErrorKind::Lifecycle,
            Error::InvalidLoanAmount
            | Error::InvalidPrice
            | Error::InvalidDuration
            | Error::InvalidCollateralizationRatio
            | Error::InvalidAmount
            | Error::InvalidRewardFee
            | Error::RepaymentExceedsTotalDue => ErrorKind::InvalidInput,
            Error::Unauthorized | Error::NotBorrower => ErrorKind::PermissionDenied,
            Error::LoanNotFound | Error::LoanAlreadyFunded | Error::LoanNotActive => {
                ErrorKind::StateConflict
            }
            Error::InsufficientCollateral
            | Error::InsufficientAllowance
            | Error::InsufficientBalance => ErrorKind::InsufficientFunds,
            Error::NotOverdueOrSufficientlyCollateralized => ErrorKind::NotEligible,
            Error::MathOverflowError => ErrorKind::Arithmetic,
        }
    }
}
