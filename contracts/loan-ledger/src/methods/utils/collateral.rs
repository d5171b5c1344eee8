use common::{PercentMath, WAD};
use loan_ledger_interface::types::error::Error;
use soroban_sdk::{Env, I256};

/// collateral = principal * ratio / 100 / price
///
/// Each division truncates toward zero, the product with the 18-decimal scale
/// is widened to 256 bits.
pub fn required_collateral(
    env: &Env,
    principal: i128,
    collateralization_ratio: u32,
    price: i128,
) -> Result<i128, Error> {
    if price <= 0 {
        return Err(Error::InvalidPrice);
    }

    let covered_value = principal
        .percent_mul_floor(collateralization_ratio)
        .ok_or(Error::MathOverflowError)?;

    mul_div_floor(env, covered_value, WAD, price)
}

/// Stable-asset value of `collateral` at `price`
pub fn collateral_value(env: &Env, collateral: i128, price: i128) -> Result<i128, Error> {
    if price <= 0 {
        return Err(Error::InvalidPrice);
    }

    mul_div_floor(env, collateral, price, WAD)
}

fn mul_div_floor(env: &Env, x: i128, y: i128, denominator: i128) -> Result<i128, Error> {
    I256::from_i128(env, x)
        .mul(&I256::from_i128(env, y))
        .div(&I256::from_i128(env, denominator))
        .to_i128()
        .ok_or(Error::MathOverflowError)
}
