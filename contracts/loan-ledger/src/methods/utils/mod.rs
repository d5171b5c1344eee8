pub mod collateral;
pub mod get_elapsed_time;
pub mod loan_payment;
pub mod validation;
