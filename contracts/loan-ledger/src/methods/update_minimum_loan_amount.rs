use loan_ledger_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::{read_config, write_config};

use super::utils::validation::{require_owner, require_valid_minimum_loan_amount};

pub fn update_minimum_loan_amount(env: &Env, who: &Address, amount: i128) -> Result<(), Error> {
    require_owner(env, who)?;
    require_valid_minimum_loan_amount(env, amount);

    let mut config = read_config(env)?;
    config.minimum_loan_amount = amount;
    write_config(env, &config);

    event::minimum_loan_amount_updated(env, amount);

    Ok(())
}
