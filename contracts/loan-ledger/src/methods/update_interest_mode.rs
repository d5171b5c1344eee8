use loan_ledger_interface::types::error::Error;
use loan_ledger_interface::types::interest_mode::InterestMode;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::{read_config, write_config};

use super::utils::validation::require_owner;

/// Existing loans keep the mode they were requested under
pub fn update_interest_mode(env: &Env, who: &Address, mode: InterestMode) -> Result<(), Error> {
    require_owner(env, who)?;

    let mut config = read_config(env)?;
    config.interest_mode = mode;
    write_config(env, &config);

    event::interest_mode_updated(env, mode);

    Ok(())
}
