use soroban_sdk::contracttype;

/// Amount due on a loan at the time of the query, before subtracting repayments
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[contracttype]
pub struct LoanPayment {
    pub total: i128,
    pub principal: i128,
    pub interest: i128,
}
