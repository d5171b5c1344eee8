#![deny(warnings)]
#![no_std]

mod interest;
mod math;

pub use interest::*;
pub use math::*;

/// Scale of every asset amount and price: 18 fractional decimal digits
pub const WAD: i128 = 1_000_000_000_000_000_000;

/// Basis points representation, 1% - 100, 100% - 10_000
pub const BPS_DENOMINATOR: u32 = 10_000;

/// Collateralization ratio representation, 100% - 100
pub const PERCENT_DENOMINATOR: u32 = 100;

/// Collateral must cover at least the principal
pub const MIN_COLLATERALIZATION_RATIO: u32 = PERCENT_DENOMINATOR;
