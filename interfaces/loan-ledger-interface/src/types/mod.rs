pub mod error;
pub mod interest_mode;
pub mod ledger_config;
pub mod loan_core;
pub mod loan_payment;
pub mod loan_state;
pub mod loan_status;
