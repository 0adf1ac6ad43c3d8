//! The central rounding policy for day counts.
//!
//! Every day count the engine produces or compares is a
//! [`Decimal`] scaled to two places with half-up rounding. Summation
//! boundaries go through [`round_days`] so repeated calculations of the
//! same inputs stay bit-identical.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places every day count is scaled to.
pub const DAY_SCALE: u32 = 2;

/// Rounds a day count to [`DAY_SCALE`] places, half-up.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::round_days;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_days(Decimal::new(12345, 3)), Decimal::new(1235, 2)); // 12.345 -> 12.35
/// assert_eq!(round_days(Decimal::new(25, 1)), Decimal::new(250, 2));    // 2.5 -> 2.50
/// ```
pub fn round_days(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DAY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}
