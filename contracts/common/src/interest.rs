use crate::{mul_div_floor, BPS_DENOMINATOR};

/// Amount owed on a loan at some moment, before subtracting repayments
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq)]
pub struct Accrual {
    pub total: i128,
    pub principal: i128,
    pub interest: i128,
}

/// Returns the number of seconds interest is charged for.
/// With `capped_at_term` accrual stops at the nominal loan duration.
pub fn accrual_period(elapsed: u64, duration: u64, capped_at_term: bool) -> u64 {
    if capped_at_term {
        elapsed.min(duration)
    } else {
        elapsed
    }
}

/// Linear interest over `period` seconds where `rate_bps` is charged per `duration`.
/// interest = principal * rate_bps * period / (BPS_DENOMINATOR * duration)
pub fn accrued_interest(principal: i128, rate_bps: u32, period: u64, duration: u64) -> Option<i128> {
    if duration == 0 {
        return None;
    }

    let numerator = i128::from(rate_bps).checked_mul(i128::from(period))?;
    let denominator = i128::from(BPS_DENOMINATOR).checked_mul(i128::from(duration))?;

    mul_div_floor(principal, numerator, denominator)
}

pub fn total_due(
    principal: i128,
    rate_bps: u32,
    elapsed: u64,
    duration: u64,
    capped_at_term: bool,
) -> Option<Accrual> {
    let period = accrual_period(elapsed, duration, capped_at_term);
    let interest = accrued_interest(principal, rate_bps, period, duration)?;

    Some(Accrual {
        total: principal.checked_add(interest)?,
        principal,
        interest,
    })
}
