use soroban_sdk::contracttype;

#[contracttype]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterestMode {
    /// Interest keeps accruing linearly after the loan term ends
    Uncapped,
    /// Interest stops accruing once the loan term ends
    CappedAtTerm,
}

impl InterestMode {
    pub fn is_capped(&self) -> bool {
        matches!(self, InterestMode::CappedAtTerm)
    }
}
