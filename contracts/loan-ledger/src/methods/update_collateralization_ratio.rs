use loan_ledger_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::{read_config, write_config};

use super::utils::validation::{require_owner, require_valid_collateralization_ratio};

/// Applies to loans requested afterwards, stored collateral is never recomputed
pub fn update_collateralization_ratio(env: &Env, who: &Address, ratio: u32) -> Result<(), Error> {
    require_owner(env, who)?;
    require_valid_collateralization_ratio(env, ratio);

    let mut config = read_config(env)?;
    config.collateralization_ratio = ratio;
    write_config(env, &config);

    event::collateralization_ratio_updated(env, ratio);

    Ok(())
}
