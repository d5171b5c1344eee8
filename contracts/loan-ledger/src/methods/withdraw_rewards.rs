use loan_ledger_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::{read_config, read_reward_pool, write_reward_pool};
use crate::types::asset_transfer::AssetTransfer;

use super::utils::validation::require_owner;

pub fn withdraw_rewards(env: &Env, who: &Address, to: &Address) -> Result<i128, Error> {
    require_owner(env, who)?;

    let config = read_config(env)?;
    let amount = read_reward_pool(env);

    AssetTransfer::new(env, &config.stable_asset).push(to, amount);

    write_reward_pool(env, 0);

    event::rewards_withdrawn(env, to, amount);

    Ok(amount)
}
