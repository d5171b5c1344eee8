use loan_ledger_interface::types::error::Error;
use loan_ledger_interface::types::ledger_config::LedgerConfig;
use loan_ledger_interface::types::loan_core::LoanCore;
use loan_ledger_interface::types::loan_status::LoanStatus;
use soroban_sdk::{contracttype, Address, Env};

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;

pub(crate) const LOW_LOAN_DATA_BUMP_LEDGERS: u32 = 30 * DAY_IN_LEDGERS; // 30 days
pub(crate) const HIGH_LOAN_DATA_BUMP_LEDGERS: u32 = 60 * DAY_IN_LEDGERS; // 60 days

pub(crate) const LOW_INSTANCE_BUMP_LEDGERS: u32 = DAY_IN_LEDGERS; // 1 day
pub(crate) const HIGH_INSTANCE_BUMP_LEDGERS: u32 = 7 * DAY_IN_LEDGERS; // 7 days

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Owner,
    Config,
    NativePrice,
    RewardPool,
    LoanCounter,
    LoanCore(u64),
    LoanStatus(u64),
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);
}

pub fn has_owner(env: &Env) -> bool {
    bump_instance(env);

    env.storage().instance().has(&DataKey::Owner)
}

pub fn write_owner(env: &Env, owner: &Address) {
    bump_instance(env);

    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn read_owner(env: &Env) -> Result<Address, Error> {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(Error::Uninitialized)
}

pub fn write_config(env: &Env, config: &LedgerConfig) {
    bump_instance(env);

    env.storage().instance().set(&DataKey::Config, config);
}

pub fn read_config(env: &Env) -> Result<LedgerConfig, Error> {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::Uninitialized)
}

pub fn write_native_price(env: &Env, price: i128) {
    bump_instance(env);

    env.storage().instance().set(&DataKey::NativePrice, &price);
}

pub fn read_native_price(env: &Env) -> Result<i128, Error> {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::NativePrice)
        .ok_or(Error::Uninitialized)
}

pub fn read_reward_pool(env: &Env) -> i128 {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::RewardPool)
        .unwrap_or(0)
}

pub fn write_reward_pool(env: &Env, amount: i128) {
    bump_instance(env);

    env.storage().instance().set(&DataKey::RewardPool, &amount);
}

pub fn add_reward_pool(env: &Env, amount: i128) -> Result<i128, Error> {
    let pool = read_reward_pool(env)
        .checked_add(amount)
        .ok_or(Error::MathOverflowError)?;

    write_reward_pool(env, pool);

    Ok(pool)
}

pub fn read_loan_counter(env: &Env) -> u64 {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::LoanCounter)
        .unwrap_or(0)
}

/// Identifiers start at 1 and are never reused
pub fn next_loan_id(env: &Env) -> Result<u64, Error> {
    let loan_id = read_loan_counter(env)
        .checked_add(1)
        .ok_or(Error::MathOverflowError)?;

    env.storage().instance().set(&DataKey::LoanCounter, &loan_id);

    Ok(loan_id)
}

pub fn read_loan_core(env: &Env, loan_id: u64) -> Result<LoanCore, Error> {
    let key = DataKey::LoanCore(loan_id);
    let loan_core = env.storage().persistent().get(&key);

    if loan_core.is_some() {
        env.storage().persistent().extend_ttl(
            &key,
            LOW_LOAN_DATA_BUMP_LEDGERS,
            HIGH_LOAN_DATA_BUMP_LEDGERS,
        );
    }

    loan_core.ok_or(Error::LoanNotFound)
}

pub fn write_loan_core(env: &Env, loan_id: u64, loan_core: &LoanCore) {
    let key = DataKey::LoanCore(loan_id);
    env.storage().persistent().set(&key, loan_core);
    env.storage().persistent().extend_ttl(
        &key,
        LOW_LOAN_DATA_BUMP_LEDGERS,
        HIGH_LOAN_DATA_BUMP_LEDGERS,
    );
}

pub fn read_loan_status(env: &Env, loan_id: u64) -> Result<LoanStatus, Error> {
    let key = DataKey::LoanStatus(loan_id);
    let loan_status = env.storage().persistent().get(&key);

    if loan_status.is_some() {
        env.storage().persistent().extend_ttl(
            &key,
            LOW_LOAN_DATA_BUMP_LEDGERS,
            HIGH_LOAN_DATA_BUMP_LEDGERS,
        );
    }

    loan_status.ok_or(Error::LoanNotFound)
}

pub fn write_loan_status(env: &Env, loan_id: u64, loan_status: &LoanStatus) {
    let key = DataKey::LoanStatus(loan_id);
    env.storage().persistent().set(&key, loan_status);
    env.storage().persistent().extend_ttl(
        &key,
        LOW_LOAN_DATA_BUMP_LEDGERS,
        HIGH_LOAN_DATA_BUMP_LEDGERS,
    );
}
