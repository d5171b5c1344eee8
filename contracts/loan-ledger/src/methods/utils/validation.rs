use common::{BPS_DENOMINATOR, MIN_COLLATERALIZATION_RATIO};
use loan_ledger_interface::types::error::Error;
use loan_ledger_interface::types::ledger_config::LedgerConfig;
use loan_ledger_interface::types::loan_core::LoanCore;
use loan_ledger_interface::types::loan_status::LoanStatus;
use soroban_sdk::{assert_with_error, panic_with_error, Address, Env};

use crate::storage::{has_owner, read_owner};

pub fn require_owner_not_exist(env: &Env) {
    if has_owner(env) {
        panic_with_error!(env, Error::AlreadyInitialized);
    }
}

pub fn require_owner(env: &Env, who: &Address) -> Result<(), Error> {
    who.require_auth();

    let owner = read_owner(env)?;
    assert_with_error!(env, *who == owner, Error::Unauthorized);

    Ok(())
}

pub fn require_valid_config(env: &Env, config: &LedgerConfig) {
    require_valid_collateralization_ratio(env, config.collateralization_ratio);
    require_valid_minimum_loan_amount(env, config.minimum_loan_amount);
    require_valid_reward_fee(env, config.reward_fee_bps);
}

pub fn require_valid_collateralization_ratio(env: &Env, ratio: u32) {
    assert_with_error!(
        env,
        ratio >= MIN_COLLATERALIZATION_RATIO,
        Error::InvalidCollateralizationRatio
    );
}

pub fn require_valid_minimum_loan_amount(env: &Env, amount: i128) {
    assert_with_error!(env, amount > 0, Error::InvalidLoanAmount);
}

pub fn require_valid_reward_fee(env: &Env, reward_fee_bps: u32) {
    assert_with_error!(
        env,
        reward_fee_bps <= BPS_DENOMINATOR,
        Error::InvalidRewardFee
    );
}

pub fn require_valid_price(env: &Env, price: i128) {
    assert_with_error!(env, price > 0, Error::InvalidPrice);
}

pub fn require_positive_amount(env: &Env, amount: i128) {
    assert_with_error!(env, amount > 0, Error::InvalidAmount);
}

pub fn require_borrower(env: &Env, who: &Address, loan_core: &LoanCore) {
    assert_with_error!(env, *who == loan_core.borrower, Error::NotBorrower);
}

pub fn require_not_funded(env: &Env, loan_core: &LoanCore, loan_status: &LoanStatus) {
    assert_with_error!(
        env,
        loan_core.lender.is_none() && !loan_status.active && !loan_status.is_terminal(),
        Error::LoanAlreadyFunded
    );
}

pub fn require_active(env: &Env, loan_status: &LoanStatus) {
    assert_with_error!(
        env,
        loan_status.active && !loan_status.is_terminal(),
        Error::LoanNotActive
    );
}
