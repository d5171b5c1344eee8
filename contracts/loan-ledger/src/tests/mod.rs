pub mod initialize;
pub mod total_loan_payment;
