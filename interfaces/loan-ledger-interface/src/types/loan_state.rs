use soroban_sdk::contracttype;

#[contracttype]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoanState {
    Requested,
    Active,
    Repaid,
    Defaulted,
}
