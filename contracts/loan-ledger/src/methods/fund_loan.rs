use loan_ledger_interface::types::error::Error;
use soroban_sdk::{log, Address, Env};

use crate::event;
use crate::storage::{
    read_config, read_loan_core, read_loan_status, write_loan_core, write_loan_status,
};
use crate::types::asset_transfer::AssetTransfer;

use super::utils::validation::require_not_funded;

pub fn fund_loan(env: &Env, who: &Address, loan_id: u64) -> Result<(), Error> {
    who.require_auth();

    let config = read_config(env)?;
    let mut loan_core = read_loan_core(env, loan_id)?;
    let mut loan_status = read_loan_status(env, loan_id)?;
    let now = env.ledger().timestamp();

    require_not_funded(env, &loan_core, &loan_status);

    let stable_asset = AssetTransfer::new(env, &config.stable_asset);
    stable_asset.pull(who, loan_core.principal);
    stable_asset.push(&loan_core.borrower, loan_core.principal);

    loan_core.lender = Some(who.clone());
    loan_core.funded_at = Some(now);
    loan_status.active = true;

    write_loan_core(env, loan_id, &loan_core);
    write_loan_status(env, loan_id, &loan_status);

    log!(env, "loan funded", loan_id, now);

    event::loan_funded(env, loan_id, who);
    event::loan_disbursed(env, loan_id, &loan_core.borrower, loan_core.principal);

    Ok(())
}
