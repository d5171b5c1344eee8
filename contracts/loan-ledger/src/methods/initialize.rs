use loan_ledger_interface::types::error::Error;
use loan_ledger_interface::types::ledger_config::LedgerConfig;
use soroban_sdk::{log, Address, Env};

use crate::event;
use crate::storage::{write_config, write_native_price, write_owner, write_reward_pool};

use super::utils::validation::{
    require_owner_not_exist, require_valid_config, require_valid_price,
};

pub fn initialize(
    env: &Env,
    owner: &Address,
    config: &LedgerConfig,
    initial_price: i128,
) -> Result<(), Error> {
    require_owner_not_exist(env);
    require_valid_config(env, config);
    require_valid_price(env, initial_price);

    write_owner(env, owner);
    write_config(env, config);
    write_native_price(env, initial_price);
    write_reward_pool(env, 0);

    log!(env, "ledger initialized", initial_price);

    event::initialized(env, owner, config, initial_price);

    Ok(())
}
