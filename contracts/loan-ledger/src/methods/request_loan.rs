use loan_ledger_interface::types::error::Error;
use loan_ledger_interface::types::loan_core::LoanCore;
use loan_ledger_interface::types::loan_status::LoanStatus;
use soroban_sdk::{assert_with_error, log, Address, Env};

use crate::event;
use crate::storage::{
    next_loan_id, read_config, read_native_price, write_loan_core, write_loan_status,
};
use crate::types::asset_transfer::AssetTransfer;

use super::utils::collateral::required_collateral;

pub fn request_loan(
    env: &Env,
    who: &Address,
    principal: i128,
    max_interest_rate_bps: u32,
    duration: u64,
    supplied_collateral: i128,
) -> Result<u64, Error> {
    who.require_auth();

    let config = read_config(env)?;
    let price = read_native_price(env)?;
    let now = env.ledger().timestamp();

    assert_with_error!(
        env,
        principal >= config.minimum_loan_amount,
        Error::InvalidLoanAmount
    );
    assert_with_error!(env, duration > 0, Error::InvalidDuration);

    let collateral = required_collateral(env, principal, config.collateralization_ratio, price)?;
    assert_with_error!(
        env,
        supplied_collateral >= collateral,
        Error::InsufficientCollateral
    );

    let excess = supplied_collateral
        .checked_sub(collateral)
        .ok_or(Error::MathOverflowError)?;

    let collateral_asset = AssetTransfer::new(env, &config.collateral_asset);
    collateral_asset.receive(who, supplied_collateral);
    collateral_asset.push(who, excess);

    let loan_id = next_loan_id(env)?;

    write_loan_core(
        env,
        loan_id,
        &LoanCore {
            borrower: who.clone(),
            lender: None,
            principal,
            collateral,
            max_interest_rate_bps,
            duration,
            requested_at: now,
            funded_at: None,
            interest_mode: config.interest_mode,
        },
    );
    write_loan_status(env, loan_id, &LoanStatus::default());

    log!(env, "loan requested", loan_id, collateral, excess);

    event::loan_requested(
        env,
        loan_id,
        who,
        principal,
        collateral,
        max_interest_rate_bps,
        duration,
    );

    Ok(loan_id)
}
