use loan_ledger_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::write_owner;

use super::utils::validation::require_owner;

pub fn transfer_ownership(env: &Env, who: &Address, new_owner: &Address) -> Result<(), Error> {
    require_owner(env, who)?;

    write_owner(env, new_owner);

    event::ownership_transferred(env, who, new_owner);

    Ok(())
}
