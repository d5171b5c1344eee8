use loan_ledger_interface::types::error::Error;
use soroban_sdk::{assert_with_error, log, Address, Env};

use crate::event;
use crate::storage::{
    read_config, read_loan_core, read_loan_status, read_native_price, write_loan_status,
};
use crate::types::asset_transfer::AssetTransfer;

use super::utils::collateral::collateral_value;
use super::utils::loan_payment::{loan_payment, remaining_due};
use super::utils::validation::require_active;

/// Permissionless. The loan must be past its term and its collateral must be
/// worth less than the remaining debt at the current price.
pub fn liquidate_overdue_loan(env: &Env, who: &Address, loan_id: u64) -> Result<(), Error> {
    who.require_auth();

    let config = read_config(env)?;
    let price = read_native_price(env)?;
    let loan_core = read_loan_core(env, loan_id)?;
    let mut loan_status = read_loan_status(env, loan_id)?;
    let now = env.ledger().timestamp();

    require_active(env, &loan_status);

    let lender = loan_core.lender.clone().ok_or(Error::LoanNotActive)?;
    let due_at = loan_core.due_at().ok_or(Error::MathOverflowError)?;

    let payment = loan_payment(&loan_core, now)?;
    let remaining = remaining_due(&payment, loan_status.repaid_amount)?;
    let value = collateral_value(env, loan_core.collateral, price)?;

    assert_with_error!(
        env,
        now > due_at && value < remaining,
        Error::NotOverdueOrSufficientlyCollateralized
    );

    AssetTransfer::new(env, &config.collateral_asset).push(&lender, loan_core.collateral);
    AssetTransfer::new(env, &config.stable_asset).push(&lender, loan_status.repaid_amount);

    loan_status.active = false;
    loan_status.defaulted = true;
    write_loan_status(env, loan_id, &loan_status);

    log!(env, "loan liquidated", loan_id, value, remaining);

    event::loan_liquidated(env, loan_id, &lender, loan_core.collateral);

    Ok(())
}
