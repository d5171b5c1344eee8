use loan_ledger_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::write_native_price;

use super::utils::validation::{require_owner, require_valid_price};

pub fn update_native_usdt_price(env: &Env, who: &Address, price: i128) -> Result<(), Error> {
    require_owner(env, who)?;
    require_valid_price(env, price);

    write_native_price(env, price);

    event::price_updated(env, price);

    Ok(())
}
