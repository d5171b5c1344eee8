use loan_ledger_interface::types::error::Error;
use loan_ledger_interface::types::loan_payment::LoanPayment;
use loan_ledger_interface::types::loan_state::LoanState;
use soroban_sdk::Env;

use crate::storage::{read_config, read_loan_core, read_loan_status, read_native_price};

use super::utils::collateral::{collateral_value, required_collateral};
use super::utils::loan_payment::loan_payment;

pub fn get_required_collateral_amount(env: &Env, principal: i128) -> Result<i128, Error> {
    let config = read_config(env)?;
    let price = read_native_price(env)?;

    required_collateral(env, principal, config.collateralization_ratio, price)
}

pub fn get_collateral_value(env: &Env, collateral: i128) -> Result<i128, Error> {
    let price = read_native_price(env)?;

    collateral_value(env, collateral, price)
}

/// Settled loans have nothing left to pay
pub fn get_total_loan_payment(env: &Env, loan_id: u64) -> Result<LoanPayment, Error> {
    let loan_core = read_loan_core(env, loan_id)?;
    let loan_status = read_loan_status(env, loan_id)?;

    if loan_status.is_terminal() {
        return Err(Error::LoanNotActive);
    }

    loan_payment(&loan_core, env.ledger().timestamp())
}

pub fn loan_state(env: &Env, loan_id: u64) -> Result<LoanState, Error> {
    read_loan_status(env, loan_id).map(|status| status.state())
}
