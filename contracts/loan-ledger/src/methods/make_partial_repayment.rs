use loan_ledger_interface::types::error::Error;
use soroban_sdk::{assert_with_error, Address, Env};

use crate::event;
use crate::storage::{read_config, read_loan_core, read_loan_status, write_loan_status};
use crate::types::asset_transfer::AssetTransfer;

use super::utils::loan_payment::loan_payment;
use super::utils::validation::{require_active, require_borrower, require_positive_amount};

/// Repaid funds stay with the ledger until the loan is settled or liquidated
pub fn make_partial_repayment(
    env: &Env,
    who: &Address,
    loan_id: u64,
    amount: i128,
) -> Result<(), Error> {
    who.require_auth();

    require_positive_amount(env, amount);

    let config = read_config(env)?;
    let loan_core = read_loan_core(env, loan_id)?;
    let mut loan_status = read_loan_status(env, loan_id)?;
    let now = env.ledger().timestamp();

    require_active(env, &loan_status);
    require_borrower(env, who, &loan_core);

    let payment = loan_payment(&loan_core, now)?;
    let repaid_amount = loan_status
        .repaid_amount
        .checked_add(amount)
        .ok_or(Error::MathOverflowError)?;

    assert_with_error!(
        env,
        repaid_amount <= payment.total,
        Error::RepaymentExceedsTotalDue
    );

    AssetTransfer::new(env, &config.stable_asset).pull(who, amount);

    loan_status.repaid_amount = repaid_amount;
    write_loan_status(env, loan_id, &loan_status);

    event::partial_repayment(env, loan_id, who, amount);

    Ok(())
}
