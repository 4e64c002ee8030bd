//! Error responses.
//!
//! Every failure leaves the API as `{"error": <code>, "message": <text>}`.
//! Storage failures are logged here and reported with a generic message.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use nirmaan_core::ValidationError;
use nirmaan_db::repositories::{BudgetError, ExpenseError, LabourError};
use nirmaan_shared::{AppError, types::MoneyError};
use serde_json::json;
use tracing::error;

/// Error returned by every handler.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl ApiError {
    /// The wrapped application error.
    #[must_use]
    pub const fn inner(&self) -> &AppError {
        &self.0
    }

    /// HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            error!(error = %self.0, "Request failed");
        }

        (
            status,
            Json(json!({
                "error": self.0.error_code(),
                "message": self.0.public_message(),
            })),
        )
            .into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(AppError::Validation(err.to_string()))
    }
}

impl From<MoneyError> for ApiError {
    fn from(err: MoneyError) -> Self {
        Self(AppError::Validation(err.to_string()))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        // Bodies cut off by the request limit surface as a buffering failure.
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return Self(AppError::PayloadTooLarge(rejection.body_text()));
        }
        Self(AppError::Validation(rejection.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self(AppError::Validation(rejection.body_text()))
    }
}

impl From<BudgetError> for ApiError {
    fn from(err: BudgetError) -> Self {
        match err {
            BudgetError::Money(e) => e.into(),
            BudgetError::Database(e) => Self(AppError::Database(e.to_string())),
        }
    }
}

impl From<LabourError> for ApiError {
    fn from(err: LabourError) -> Self {
        match err {
            LabourError::NotFound(id) => Self(AppError::NotFound(format!("Worker {id} not found"))),
            LabourError::Money(e) => e.into(),
            LabourError::Database(e) => Self(AppError::Database(e.to_string())),
        }
    }
}

impl From<ExpenseError> for ApiError {
    fn from(err: ExpenseError) -> Self {
        match err {
            ExpenseError::NotFound(id) => {
                Self(AppError::NotFound(format!("Expense {id} not found")))
            }
            ExpenseError::Money(e) => e.into(),
            ExpenseError::Database(e) => Self(AppError::Database(e.to_string())),
        }
    }
}
