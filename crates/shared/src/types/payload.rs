//! Wire payloads for the `/api` surface.
//!
//! Request bodies use camelCase keys; row payloads keep the snake_case column
//! names. Monetary values travel as JSON numbers.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{ExpenseId, LabourId};

/// Response for `GET /budget`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummaryResponse {
    /// Authoritative project budget, 0 when none was set.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_budget: Decimal,
    /// Sum of all expense amounts.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_expenses: Decimal,
    /// `total_budget - total_expenses`.
    #[serde(with = "rust_decimal::serde::float")]
    pub remaining_budget: Decimal,
    /// Share of the budget consumed, 0 when the budget is 0.
    #[serde(with = "rust_decimal::serde::float")]
    pub utilization_percent: Decimal,
    /// Last time the budget was written.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Request body for `PUT /budget`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBudgetRequest {
    /// New total budget.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_budget: Decimal,
}

/// A labour row as returned by `GET /labour`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabourRow {
    /// Row ID.
    pub id: LabourId,
    /// Worker name.
    pub name: String,
    /// Daily wage.
    #[serde(with = "rust_decimal::serde::float")]
    pub daily_wage: Decimal,
    /// Attendance flag.
    pub is_present: bool,
    /// Accumulated pay owed.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_pay: Decimal,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Request body for `POST /labour`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLabourRequest {
    /// Worker name.
    pub name: String,
    /// Daily wage.
    #[serde(with = "rust_decimal::serde::float")]
    pub daily_wage: Decimal,
}

/// Request body for `PUT /labour/{id}/attendance`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRequest {
    /// New attendance flag.
    pub is_present: bool,
}

/// Request body for `PUT /labour/{id}/total-pay`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalPayRequest {
    /// New total pay.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_pay: Decimal,
}

/// An expense row as returned by `GET /expenses`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRow {
    /// Row ID.
    pub id: ExpenseId,
    /// Expense category.
    pub category: String,
    /// Amount spent.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// Calendar date of the expense.
    pub expense_date: NaiveDate,
    /// Insert timestamp.
    pub created_at: DateTime<Utc>,
}

/// Request body for `POST /expenses`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateExpenseRequest {
    /// Expense category.
    pub category: String,
    /// Amount spent.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
}

/// Response for create endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedResponse<I> {
    /// ID of the new row.
    pub id: I,
    /// Always `true`.
    pub success: bool,
}

impl<I> CreatedResponse<I> {
    /// Wraps a freshly created ID.
    pub const fn new(id: I) -> Self {
        Self { id, success: true }
    }
}

/// Response for update and delete endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResponse {
    /// Always `true`.
    pub success: bool,
}

impl SuccessResponse {
    /// The only success value.
    pub const OK: Self = Self { success: true };
}

/// Error response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_budget_summary_serializes_numbers_in_camel_case() {
        let summary = BudgetSummaryResponse {
            total_budget: dec!(100000),
            total_expenses: dec!(20000),
            remaining_budget: dec!(80000),
            utilization_percent: dec!(20),
            updated_at: None,
        };

        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["totalBudget"], json!(100_000.0));
        assert_eq!(value["remainingBudget"], json!(80_000.0));
        assert!(value["updatedAt"].is_null());
    }

    #[test]
    fn test_create_labour_request_accepts_integer_wage() {
        let req: CreateLabourRequest =
            serde_json::from_value(json!({"name": "Ram", "dailyWage": 500})).unwrap();
        assert_eq!(req.name, "Ram");
        assert_eq!(req.daily_wage, dec!(500));
    }

    #[test]
    fn test_create_labour_request_rejects_missing_wage() {
        let result = serde_json::from_value::<CreateLabourRequest>(json!({"name": "Ram"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_created_response_shape() {
        let value = serde_json::to_value(CreatedResponse::new(LabourId::from_raw(3))).unwrap();
        assert_eq!(value, json!({"id": 3, "success": true}));
    }

    #[test]
    fn test_expense_row_round_trips_date() {
        let row: ExpenseRow = serde_json::from_value(json!({
            "id": 1,
            "category": "Cement",
            "amount": 20000,
            "expense_date": "2024-01-01",
            "created_at": "2024-01-01T10:00:00Z"
        }))
        .unwrap();
        assert_eq!(row.expense_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(row.amount, dec!(20000));
    }
}
