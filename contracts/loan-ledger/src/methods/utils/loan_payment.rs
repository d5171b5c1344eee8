use loan_ledger_interface::types::error::Error;
use loan_ledger_interface::types::loan_core::LoanCore;
use loan_ledger_interface::types::loan_payment::LoanPayment;

use super::get_elapsed_time::get_elapsed_time;

/// Principal plus interest accrued since funding, repayments not subtracted.
/// An unfunded loan owes its principal only.
pub fn loan_payment(loan_core: &LoanCore, current_time: u64) -> Result<LoanPayment, Error> {
    let elapsed = loan_core
        .funded_at
        .map_or(0, |funded_at| get_elapsed_time(current_time, funded_at));

    let accrual = common::total_due(
        loan_core.principal,
        loan_core.max_interest_rate_bps,
        elapsed,
        loan_core.duration,
        loan_core.interest_mode.is_capped(),
    )
    .ok_or(Error::MathOverflowError)?;

    Ok(LoanPayment {
        total: accrual.total,
        principal: accrual.principal,
        interest: accrual.interest,
    })
}

/// What is still owed after repayments, never negative
pub fn remaining_due(payment: &LoanPayment, repaid_amount: i128) -> Result<i128, Error> {
    payment
        .total
        .checked_sub(repaid_amount)
        .map(|remaining| remaining.max(0))
        .ok_or(Error::MathOverflowError)
}
