//! Money conversion between API decimals and stored minor units.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts travel as `rust_decimal::Decimal` and are stored as whole paise
//! (`BIGINT`), which keeps the schema identical on Postgres and SQLite.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Number of fractional digits kept for every monetary amount.
pub const MINOR_UNIT_SCALE: u32 = 2;

/// Errors converting a decimal amount to minor units.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// The amount does not fit in a 64-bit count of minor units.
    #[error("Amount out of range: {0}")]
    OutOfRange(Decimal),
}

/// Rounds an amount to two fractional digits, half away from zero.
#[must_use]
pub fn normalize(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MINOR_UNIT_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Converts a decimal amount to whole minor units (paise).
///
/// # Errors
///
/// Returns `MoneyError::OutOfRange` if the amount cannot be represented.
pub fn to_minor_units(amount: Decimal) -> Result<i64, MoneyError> {
    normalize(amount)
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|scaled| scaled.to_i64())
        .ok_or(MoneyError::OutOfRange(amount))
}

/// Converts stored minor units back to a decimal amount.
#[must_use]
pub fn from_minor_units(units: i64) -> Decimal {
    Decimal::new(units, MINOR_UNIT_SCALE)
}

#[cfg(test)]
#[path = "money_tests.rs"]
mod tests;
