pub mod fund_loan;
pub mod initialize;
pub mod liquidate_overdue_loan;
pub mod loan_views;
pub mod make_partial_repayment;
pub mod repay_loan_with_reward;
pub mod request_loan;
pub mod transfer_ownership;
pub mod update_collateralization_ratio;
pub mod update_interest_mode;
pub mod update_minimum_loan_amount;
pub mod update_native_usdt_price;
pub mod update_reward_fee;
pub mod withdraw_rewards;

pub mod utils;
