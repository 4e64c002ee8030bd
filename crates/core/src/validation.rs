//! Field-level input validation shared by every resource.
//!
//! Checks are limited to presence and sign. Field names are reported the way
//! callers spell them in request bodies.

use chrono::NaiveDate;
use nirmaan_shared::types::{normalize, to_minor_units};
use rust_decimal::Decimal;
use thiserror::Error;

/// Input validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Required text was empty or whitespace.
    #[error("{field} must not be empty")]
    Empty {
        /// Offending field.
        field: &'static str,
    },

    /// Amount was zero or negative.
    #[error("{field} must be a positive number")]
    NotPositive {
        /// Offending field.
        field: &'static str,
    },

    /// Amount was negative.
    #[error("{field} must not be negative")]
    Negative {
        /// Offending field.
        field: &'static str,
    },

    /// Amount too large to store.
    #[error("{field} is out of range")]
    OutOfRange {
        /// Offending field.
        field: &'static str,
    },

    /// Date did not parse as `YYYY-MM-DD`.
    #[error("{field} must be a date in YYYY-MM-DD format")]
    InvalidDate {
        /// Offending field.
        field: &'static str,
    },
}

/// Returns the trimmed text, rejecting blank input.
pub fn require_text(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(trimmed.to_string())
}

/// Returns the amount rounded to paise, rejecting anything not above zero.
pub fn require_positive(field: &'static str, amount: Decimal) -> Result<Decimal, ValidationError> {
    let amount = require_storable(field, amount)?;
    if amount <= Decimal::ZERO {
        return Err(ValidationError::NotPositive { field });
    }
    Ok(amount)
}

/// Returns the amount rounded to paise, rejecting anything below zero.
pub fn require_non_negative(
    field: &'static str,
    amount: Decimal,
) -> Result<Decimal, ValidationError> {
    let amount = require_storable(field, amount)?;
    if amount < Decimal::ZERO {
        return Err(ValidationError::Negative { field });
    }
    Ok(amount)
}

/// Parses a `YYYY-MM-DD` calendar date.
pub fn require_date(field: &'static str, value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate { field })
}

fn require_storable(field: &'static str, amount: Decimal) -> Result<Decimal, ValidationError> {
    to_minor_units(amount).map_err(|_| ValidationError::OutOfRange { field })?;
    Ok(normalize(amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case("Ram", "Ram")]
    #[case("  Shyam  ", "Shyam")]
    fn test_require_text_trims(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(require_text("name", input).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn test_require_text_rejects_blank(#[case] input: &str) {
        assert_eq!(
            require_text("name", input),
            Err(ValidationError::Empty { field: "name" })
        );
    }

    #[rstest]
    #[case(dec!(0))]
    #[case(dec!(-1))]
    #[case(dec!(0.004))]
    fn test_require_positive_rejects(#[case] amount: Decimal) {
        assert_eq!(
            require_positive("amount", amount),
            Err(ValidationError::NotPositive { field: "amount" })
        );
    }

    #[test]
    fn test_require_positive_rounds_to_paise() {
        assert_eq!(require_positive("amount", dec!(10.005)).unwrap(), dec!(10.01));
        assert_eq!(require_positive("amount", dec!(0.01)).unwrap(), dec!(0.01));
    }

    #[test]
    fn test_require_positive_out_of_range() {
        assert_eq!(
            require_positive("amount", Decimal::MAX),
            Err(ValidationError::OutOfRange { field: "amount" })
        );
    }

    #[test]
    fn test_require_non_negative() {
        assert_eq!(require_non_negative("totalPay", dec!(0)).unwrap(), dec!(0));
        assert_eq!(
            require_non_negative("totalPay", dec!(4500)).unwrap(),
            dec!(4500)
        );
        assert_eq!(
            require_non_negative("totalPay", dec!(-0.5)),
            Err(ValidationError::Negative { field: "totalPay" })
        );
    }

    #[rstest]
    #[case("2024-01-01", true)]
    #[case(" 2024-02-29 ", true)]
    #[case("2023-02-29", false)]
    #[case("01/01/2024", false)]
    #[case("", false)]
    fn test_require_date(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(require_date("date", input).is_ok(), ok);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::NotPositive { field: "dailyWage" }.to_string(),
            "dailyWage must be a positive number"
        );
        assert_eq!(
            ValidationError::InvalidDate { field: "date" }.to_string(),
            "date must be a date in YYYY-MM-DD format"
        );
    }
}
