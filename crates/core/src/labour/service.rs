//! Labour service for validation and roster aggregates.

use nirmaan_shared::types::LabourRow;
use rust_decimal::Decimal;

use super::types::{NewWorker, PayrollTotals};
use crate::validation::{ValidationError, require_non_negative, require_positive, require_text};

/// Labour service for business logic.
pub struct LabourService;

impl LabourService {
    /// Validates a worker before insert.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Empty` for a blank name and
    /// `ValidationError::NotPositive` for a wage that is not above zero.
    pub fn validate_new_worker(
        name: &str,
        daily_wage: Decimal,
    ) -> Result<NewWorker, ValidationError> {
        Ok(NewWorker {
            name: require_text("name", name)?,
            daily_wage: require_positive("dailyWage", daily_wage)?,
        })
    }

    /// Validates a total-pay overwrite.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Negative` if the amount is below zero.
    pub fn validate_total_pay(total_pay: Decimal) -> Result<Decimal, ValidationError> {
        require_non_negative("totalPay", total_pay)
    }

    /// Computes the roster totals.
    #[must_use]
    pub fn payroll_totals(rows: &[LabourRow]) -> PayrollTotals {
        rows.iter().fold(PayrollTotals::default(), |mut acc, row| {
            acc.total_pay += row.total_pay;
            acc.headcount += 1;
            if row.is_present {
                acc.present_count += 1;
                acc.present_daily_wages += row.daily_wage;
            }
            acc
        })
    }
}
