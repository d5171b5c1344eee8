use soroban_sdk::contracttype;

use super::loan_state::LoanState;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[contracttype]
pub struct LoanStatus {
    pub repaid_amount: i128,
    pub active: bool,
    pub repaid: bool,
    pub defaulted: bool,
}

impl LoanStatus {
    pub fn state(&self) -> LoanState {
        if self.repaid {
            LoanState::Repaid
        } else if self.defaulted {
            LoanState::Defaulted
        } else if self.active {
            LoanState::Active
        } else {
            LoanState::Requested
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.repaid || self.defaulted
    }
}
