use soroban_sdk::{contracttype, Address};

use super::interest_mode::InterestMode;

/// Loan terms fixed at request time, including the interest mode in force then.
/// `lender` and `funded_at` are set once on funding.
#[derive(Clone, Debug, PartialEq, Eq)]
#[contracttype]
pub struct LoanCore {
    pub borrower: Address,
    pub lender: Option<Address>,
    pub principal: i128,
    pub collateral: i128,
    pub max_interest_rate_bps: u32,
    pub duration: u64,
    pub requested_at: u64,
    pub funded_at: Option<u64>,
    pub interest_mode: InterestMode,
}

impl LoanCore {
    pub fn due_at(&self) -> Option<u64> {
        self.requested_at.checked_add(self.duration)
    }
}
