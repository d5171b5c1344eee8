use common::BpsMath;
use loan_ledger_interface::types::error::Error;
use soroban_sdk::{log, Address, Env};

use crate::event;
use crate::storage::{
    add_reward_pool, read_config, read_loan_core, read_loan_status, write_loan_status,
};
use crate::types::asset_transfer::AssetTransfer;

use super::utils::loan_payment::{loan_payment, remaining_due};
use super::utils::validation::{require_active, require_borrower};

pub fn repay_loan_with_reward(env: &Env, who: &Address, loan_id: u64) -> Result<(), Error> {
    who.require_auth();

    let config = read_config(env)?;
    let loan_core = read_loan_core(env, loan_id)?;
    let mut loan_status = read_loan_status(env, loan_id)?;
    let now = env.ledger().timestamp();

    require_active(env, &loan_status);
    require_borrower(env, who, &loan_core);

    let lender = loan_core.lender.clone().ok_or(Error::LoanNotActive)?;

    let payment = loan_payment(&loan_core, now)?;
    let remaining = remaining_due(&payment, loan_status.repaid_amount)?;

    let (settled, reward, lender_part) = do_settle(
        loan_status.repaid_amount,
        remaining,
        payment.interest,
        config.reward_fee_bps,
    )?;

    let stable_asset = AssetTransfer::new(env, &config.stable_asset);
    stable_asset.pull(who, remaining);
    stable_asset.push(&lender, lender_part);

    AssetTransfer::new(env, &config.collateral_asset)
        .push(&loan_core.borrower, loan_core.collateral);

    add_reward_pool(env, reward)?;

    loan_status.repaid_amount = settled;
    loan_status.active = false;
    loan_status.repaid = true;
    write_loan_status(env, loan_id, &loan_status);

    log!(env, "loan repaid", loan_id, settled, reward);

    event::loan_repaid(env, loan_id, &loan_core.borrower, settled);
    event::reward_collected(env, loan_id, reward);

    Ok(())
}

/// Returns
/// i128: everything the ledger holds for the loan after the final payment
/// i128: protocol reward retained from the interest
/// i128: lender's share of the settled amount
fn do_settle(
    repaid_amount: i128,
    remaining: i128,
    interest: i128,
    reward_fee_bps: u32,
) -> Result<(i128, i128, i128), Error> {
    let settled = repaid_amount
        .checked_add(remaining)
        .ok_or(Error::MathOverflowError)?;
    let reward = interest
        .bps_mul_floor(reward_fee_bps)
        .ok_or(Error::MathOverflowError)?;
    let lender_part = settled
        .checked_sub(reward)
        .ok_or(Error::MathOverflowError)?;

    Ok((settled, reward, lender_part))
}
