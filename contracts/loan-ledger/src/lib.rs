#![deny(warnings)]
#![no_std]

use loan_ledger_interface::types::{
    error::Error, interest_mode::InterestMode, ledger_config::LedgerConfig, loan_core::LoanCore,
    loan_payment::LoanPayment, loan_state::LoanState, loan_status::LoanStatus,
};
use loan_ledger_interface::LoanLedgerTrait;
use methods::{
    fund_loan::fund_loan,
    initialize::initialize,
    liquidate_overdue_loan::liquidate_overdue_loan,
    loan_views::{
        get_collateral_value, get_required_collateral_amount, get_total_loan_payment, loan_state,
    },
    make_partial_repayment::make_partial_repayment,
    repay_loan_with_reward::repay_loan_with_reward,
    request_loan::request_loan,
    transfer_ownership::transfer_ownership,
    update_collateralization_ratio::update_collateralization_ratio,
    update_interest_mode::update_interest_mode,
    update_minimum_loan_amount::update_minimum_loan_amount,
    update_native_usdt_price::update_native_usdt_price,
    update_reward_fee::update_reward_fee,
    withdraw_rewards::withdraw_rewards,
};
use soroban_sdk::{contract, contractimpl, Address, Env};

use crate::storage::*;

mod event;
mod methods;
mod storage;
#[cfg(test)]
mod tests;
mod types;

#[contract]
pub struct LoanLedger;

#[contractimpl]
impl LoanLedgerTrait for LoanLedger {
    fn initialize(
        env: Env,
        owner: Address,
        config: LedgerConfig,
        initial_price: i128,
    ) -> Result<(), Error> {
        initialize(&env, &owner, &config, initial_price)
    }

    fn version() -> u32 {
        1
    }

    fn request_loan(
        env: Env,
        who: Address,
        principal: i128,
        max_interest_rate_bps: u32,
        duration: u64,
        supplied_collateral: i128,
    ) -> Result<u64, Error> {
        request_loan(
            &env,
            &who,
            principal,
            max_interest_rate_bps,
            duration,
            supplied_collateral,
        )
    }

    fn fund_loan(env: Env, who: Address, loan_id: u64) -> Result<(), Error> {
        fund_loan(&env, &who, loan_id)
    }

    fn make_partial_repayment(
        env: Env,
        who: Address,
        loan_id: u64,
        amount: i128,
    ) -> Result<(), Error> {
        make_partial_repayment(&env, &who, loan_id, amount)
    }

    fn repay_loan_with_reward(env: Env, who: Address, loan_id: u64) -> Result<(), Error> {
        repay_loan_with_reward(&env, &who, loan_id)
    }

    fn liquidate_overdue_loan(env: Env, who: Address, loan_id: u64) -> Result<(), Error> {
        liquidate_overdue_loan(&env, &who, loan_id)
    }

    fn update_collateralization_ratio(env: Env, who: Address, ratio: u32) -> Result<(), Error> {
        update_collateralization_ratio(&env, &who, ratio)
    }

    fn update_minimum_loan_amount(env: Env, who: Address, amount: i128) -> Result<(), Error> {
        update_minimum_loan_amount(&env, &who, amount)
    }

    fn update_native_usdt_price(env: Env, who: Address, price: i128) -> Result<(), Error> {
        update_native_usdt_price(&env, &who, price)
    }

    fn update_reward_fee(env: Env, who: Address, reward_fee_bps: u32) -> Result<(), Error> {
        update_reward_fee(&env, &who, reward_fee_bps)
    }

    fn update_interest_mode(env: Env, who: Address, mode: InterestMode) -> Result<(), Error> {
        update_interest_mode(&env, &who, mode)
    }

    fn transfer_ownership(env: Env, who: Address, new_owner: Address) -> Result<(), Error> {
        transfer_ownership(&env, &who, &new_owner)
    }

    fn withdraw_rewards(env: Env, who: Address, to: Address) -> Result<i128, Error> {
        withdraw_rewards(&env, &who, &to)
    }

    fn get_required_collateral_amount(env: Env, principal: i128) -> Result<i128, Error> {
        get_required_collateral_amount(&env, principal)
    }

    fn get_collateral_value(env: Env, collateral: i128) -> Result<i128, Error> {
        get_collateral_value(&env, collateral)
    }

    fn get_total_loan_payment(env: Env, loan_id: u64) -> Result<LoanPayment, Error> {
        get_total_loan_payment(&env, loan_id)
    }

    fn loans_core(env: Env, loan_id: u64) -> Result<LoanCore, Error> {
        read_loan_core(&env, loan_id)
    }

    fn loans_status(env: Env, loan_id: u64) -> Result<LoanStatus, Error> {
        read_loan_status(&env, loan_id)
    }

    fn loan_state(env: Env, loan_id: u64) -> Result<LoanState, Error> {
        loan_state(&env, loan_id)
    }

    fn loan_count(env: Env) -> u64 {
        read_loan_counter(&env)
    }

    fn owner(env: Env) -> Result<Address, Error> {
        read_owner(&env)
    }

    fn collateralization_ratio(env: Env) -> Result<u32, Error> {
        read_config(&env).map(|config| config.collateralization_ratio)
    }

    fn minimum_loan_amount(env: Env) -> Result<i128, Error> {
        read_config(&env).map(|config| config.minimum_loan_amount)
    }

    fn reward_fee(env: Env) -> Result<u32, Error> {
        read_config(&env).map(|config| config.reward_fee_bps)
    }

    fn reward_pool(env: Env) -> i128 {
        read_reward_pool(&env)
    }

    fn get_native_price(env: Env) -> Result<i128, Error> {
        read_native_price(&env)
    }

    fn stable_asset(env: Env) -> Result<Address, Error> {
        read_config(&env).map(|config| config.stable_asset)
    }

    fn collateral_asset(env: Env) -> Result<Address, Error> {
        read_config(&env).map(|config| config.collateral_asset)
    }

    fn ledger_configuration(env: Env) -> Result<LedgerConfig, Error> {
        read_config(&env)
    }
}
