//! Common types used across the application.

pub mod id;
pub mod money;
pub mod payload;

pub use id::*;
pub use money::{MINOR_UNIT_SCALE, MoneyError, from_minor_units, normalize, to_minor_units};
pub use payload::{
    AttendanceRequest, BudgetSummaryResponse, CreateExpenseRequest, CreateLabourRequest,
    CreatedResponse, ErrorBody, ExpenseRow, LabourRow, SuccessResponse, TotalPayRequest,
    UpdateBudgetRequest,
};
