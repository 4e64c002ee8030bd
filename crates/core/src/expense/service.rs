//! Expense service.

use chrono::NaiveDate;
use nirmaan_shared::types::ExpenseRow;
use rust_decimal::Decimal;

use crate::validation::{ValidationError, require_date, require_positive, require_text};

/// A validated expense ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExpense {
    /// Trimmed, non-empty category.
    pub category: String,
    /// Positive amount in paise precision.
    pub amount: Decimal,
    /// Calendar date of the outflow.
    pub expense_date: NaiveDate,
}

/// Expense service for business logic.
pub struct ExpenseService;

impl ExpenseService {
    /// Validates an expense before insert.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` naming the first bad field.
    pub fn validate_new_expense(
        category: &str,
        amount: Decimal,
        date: &str,
    ) -> Result<NewExpense, ValidationError> {
        Ok(NewExpense {
            category: require_text("category", category)?,
            amount: require_positive("amount", amount)?,
            expense_date: require_date("date", date)?,
        })
    }

    /// Sums expense amounts.
    #[must_use]
    pub fn total(rows: &[ExpenseRow]) -> Decimal {
        rows.iter().map(|row| row.amount).sum()
    }
}
