use soroban_sdk::{contracttype, Address};

use super::interest_mode::InterestMode;

#[derive(Clone, Debug, PartialEq, Eq)]
#[contracttype]
pub struct LedgerConfig {
    /// Asset lent and repaid
    pub stable_asset: Address,
    /// Volatile asset locked as collateral
    pub collateral_asset: Address,
    /// Percentage of the principal value to cover by collateral, 120 - 120%
    pub collateralization_ratio: u32,
    pub minimum_loan_amount: i128,
    /// Share of the interest retained by the protocol on full repayment, in basis points
    pub reward_fee_bps: u32,
    pub interest_mode: InterestMode,
}
