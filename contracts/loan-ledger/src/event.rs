use loan_ledger_interface::types::interest_mode::InterestMode;
use loan_ledger_interface::types::ledger_config::LedgerConfig;
use soroban_sdk::{Address, Env, Symbol};

pub(crate) fn initialized(e: &Env, owner: &Address, config: &LedgerConfig, price: i128) {
    let topics = (Symbol::new(e, "initialize"), owner.clone());
    e.events().publish(
        topics,
        (
            config.stable_asset.clone(),
            config.collateral_asset.clone(),
            config.collateralization_ratio,
            config.minimum_loan_amount,
            config.reward_fee_bps,
            price,
        ),
    );
}

pub(crate) fn loan_requested(
    e: &Env,
    loan_id: u64,
    borrower: &Address,
    principal: i128,
    collateral: i128,
    max_interest_rate_bps: u32,
    duration: u64,
) {
    let topics = (Symbol::new(e, "loan_requested"), loan_id);
    e.events().publish(
        topics,
        (
            borrower.clone(),
            principal,
            collateral,
            max_interest_rate_bps,
            duration,
        ),
    );
}

pub(crate) fn loan_funded(e: &Env, loan_id: u64, lender: &Address) {
    let topics = (Symbol::new(e, "loan_funded"), loan_id);
    e.events().publish(topics, lender.clone());
}

pub(crate) fn loan_disbursed(e: &Env, loan_id: u64, borrower: &Address, amount: i128) {
    let topics = (Symbol::new(e, "loan_disbursed"), loan_id);
    e.events().publish(topics, (borrower.clone(), amount));
}

pub(crate) fn partial_repayment(e: &Env, loan_id: u64, who: &Address, amount: i128) {
    let topics = (Symbol::new(e, "partial_repayment"), loan_id);
    e.events().publish(topics, (who.clone(), amount));
}

pub(crate) fn loan_repaid(e: &Env, loan_id: u64, borrower: &Address, total: i128) {
    let topics = (Symbol::new(e, "loan_repaid"), loan_id);
    e.events().publish(topics, (borrower.clone(), total));
}

pub(crate) fn reward_collected(e: &Env, loan_id: u64, reward: i128) {
    let topics = (Symbol::new(e, "reward_collected"), loan_id);
    e.events().publish(topics, reward);
}

pub(crate) fn loan_liquidated(e: &Env, loan_id: u64, lender: &Address, collateral: i128) {
    let topics = (Symbol::new(e, "loan_liquidated"), loan_id);
    e.events().publish(topics, (lender.clone(), collateral));
}

pub(crate) fn rewards_withdrawn(e: &Env, to: &Address, amount: i128) {
    let topics = (Symbol::new(e, "rewards_withdrawn"), to.clone());
    e.events().publish(topics, amount);
}

pub(crate) fn collateralization_ratio_updated(e: &Env, ratio: u32) {
    let topics = (Symbol::new(e, "collat_ratio_updated"),);
    e.events().publish(topics, ratio);
}

pub(crate) fn minimum_loan_amount_updated(e: &Env, amount: i128) {
    let topics = (Symbol::new(e, "min_loan_updated"),);
    e.events().publish(topics, amount);
}

pub(crate) fn price_updated(e: &Env, price: i128) {
    let topics = (Symbol::new(e, "price_updated"),);
    e.events().publish(topics, price);
}

pub(crate) fn reward_fee_updated(e: &Env, reward_fee_bps: u32) {
    let topics = (Symbol::new(e, "reward_fee_updated"),);
    e.events().publish(topics, reward_fee_bps);
}

pub(crate) fn interest_mode_updated(e: &Env, mode: InterestMode) {
    let topics = (Symbol::new(e, "interest_mode_updated"),);
    e.events().publish(topics, mode);
}

pub(crate) fn ownership_transferred(e: &Env, previous_owner: &Address, new_owner: &Address) {
    let topics = (Symbol::new(e, "ownership_transferred"), previous_owner.clone());
    e.events().publish(topics, new_owner.clone());
}
