use soroban_fixed_point_math::FixedPoint;

use crate::{BPS_DENOMINATOR, PERCENT_DENOMINATOR};

pub trait BpsMath<T: Into<i128>> {
    /// result = self * bps / BPS_DENOMINATOR, rounded toward zero
    fn bps_mul_floor(self, bps: T) -> Option<i128>;
}

impl<T: Into<i128>, V: Into<i128>> BpsMath<T> for V {
    fn bps_mul_floor(self, bps: T) -> Option<i128> {
        Into::<i128>::into(self).fixed_mul_floor(bps.into(), BPS_DENOMINATOR.into())
    }
}

pub trait PercentMath<T: Into<i128>> {
    /// result = self * percent / PERCENT_DENOMINATOR, rounded toward zero
    fn percent_mul_floor(self, percent: T) -> Option<i128>;
}

impl<T: Into<i128>, V: Into<i128>> PercentMath<T> for V {
    fn percent_mul_floor(self, percent: T) -> Option<i128> {
        Into::<i128>::into(self).fixed_mul_floor(percent.into(), PERCENT_DENOMINATOR.into())
    }
}

/// floor(x * y / denominator) for non-negative `x`, `y` and positive `denominator`.
///
/// `x` is split into `q * denominator + r` so that only `q * y` and `r * y` are
/// formed. Fails only when the result itself does not fit in i128, or when
/// `r * y` overflows, which needs `denominator * y` beyond i128.
pub fn mul_div_floor(x: i128, y: i128, denominator: i128) -> Option<i128> {
    if x < 0 || y < 0 || denominator <= 0 {
        return x.fixed_mul_floor(y, denominator);
    }

    let quotient = x / denominator;
    let remainder = x % denominator;

    let whole = quotient.checked_mul(y)?;
    let fraction = remainder.checked_mul(y)? / denominator;

    whole.checked_add(fraction)
}
