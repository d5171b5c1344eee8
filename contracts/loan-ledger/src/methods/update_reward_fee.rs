use loan_ledger_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::{read_config, write_config};

use super::utils::validation::{require_owner, require_valid_reward_fee};

pub fn update_reward_fee(env: &Env, who: &Address, reward_fee_bps: u32) -> Result<(), Error> {
    require_owner(env, who)?;
    require_valid_reward_fee(env, reward_fee_bps);

    let mut config = read_config(env)?;
    config.reward_fee_bps = reward_fee_bps;
    write_config(env, &config);

    event::reward_fee_updated(env, reward_fee_bps);

    Ok(())
}
