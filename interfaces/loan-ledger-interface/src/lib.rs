#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Address, Env};
use types::error::Error;
use types::interest_mode::InterestMode;
use types::ledger_config::LedgerConfig;
use types::loan_core::LoanCore;
use types::loan_payment::LoanPayment;
use types::loan_state::LoanState;
use types::loan_status::LoanStatus;

pub mod types;

pub struct Spec;

/// Interface for the collateralized peer-to-peer loan ledger
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "LoanLedgerClient")]
pub trait LoanLedgerTrait {
    fn initialize(
        env: Env,
        owner: Address,
        config: LedgerConfig,
        initial_price: i128,
    ) -> Result<(), Error>;

    fn version() -> u32;

    /// Locks collateral for a new loan request and returns its identifier.
    /// Collateral supplied above the required amount is refunded.
    fn request_loan(
        env: Env,
        who: Address,
        principal: i128,
        max_interest_rate_bps: u32,
        duration: u64,
        supplied_collateral: i128,
    ) -> Result<u64, Error>;

    fn fund_loan(env: Env, who: Address, loan_id: u64) -> Result<(), Error>;

    fn make_partial_repayment(
        env: Env,
        who: Address,
        loan_id: u64,
        amount: i128,
    ) -> Result<(), Error>;

    fn repay_loan_with_reward(env: Env, who: Address, loan_id: u64) -> Result<(), Error>;

    fn liquidate_overdue_loan(env: Env, who: Address, loan_id: u64) -> Result<(), Error>;

    fn update_collateralization_ratio(env: Env, who: Address, ratio: u32) -> Result<(), Error>;

    fn update_minimum_loan_amount(env: Env, who: Address, amount: i128) -> Result<(), Error>;

    fn update_native_usdt_price(env: Env, who: Address, price: i128) -> Result<(), Error>;

    fn update_reward_fee(env: Env, who: Address, reward_fee_bps: u32) -> Result<(), Error>;

    fn update_interest_mode(env: Env, who: Address, mode: InterestMode) -> Result<(), Error>;

    fn transfer_ownership(env: Env, who: Address, new_owner: Address) -> Result<(), Error>;

    fn withdraw_rewards(env: Env, who: Address, to: Address) -> Result<i128, Error>;

    fn get_required_collateral_amount(env: Env, principal: i128) -> Result<i128, Error>;

    fn get_collateral_value(env: Env, collateral: i128) -> Result<i128, Error>;

    fn get_total_loan_payment(env: Env, loan_id: u64) -> Result<LoanPayment, Error>;

    fn loans_core(env: Env, loan_id: u64) -> Result<LoanCore, Error>;

    fn loans_status(env: Env, loan_id: u64) -> Result<LoanStatus, Error>;

    fn loan_state(env: Env, loan_id: u64) -> Result<LoanState, Error>;

    fn loan_count(env: Env) -> u64;

    fn owner(env: Env) -> Result<Address, Error>;

    fn collateralization_ratio(env: Env) -> Result<u32, Error>;

    fn minimum_loan_amount(env: Env) -> Result<i128, Error>;

    fn reward_fee(env: Env) -> Result<u32, Error>;

    fn reward_pool(env: Env) -> i128;

    fn get_native_price(env: Env) -> Result<i128, Error>;

    fn stable_asset(env: Env) -> Result<Address, Error>;

    fn collateral_asset(env: Env) -> Result<Address, Error>;

    fn ledger_configuration(env: Env) -> Result<LedgerConfig, Error>;
}
