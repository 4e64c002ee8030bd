//! Expense routes.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{delete, get},
};
use nirmaan_core::expense::ExpenseService;
use nirmaan_shared::types::{
    CreateExpenseRequest, CreatedResponse, ExpenseId, ExpenseRow, SuccessResponse,
};
use tracing::info;

use crate::{
    AppState,
    error::ApiError,
    extractors::{ApiJson, ApiPath},
};

/// Creates the expense routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/expenses", get(list_expenses).post(create_expense))
        .route("/expenses/{id}", delete(delete_expense))
}

/// GET /expenses
async fn list_expenses(State(state): State<AppState>) -> Result<Json<Vec<ExpenseRow>>, ApiError> {
    let rows = state.expenses().list().await?;
    Ok(Json(rows))
}

/// POST /expenses
async fn create_expense(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateExpenseRequest>,
) -> Result<(StatusCode, Json<CreatedResponse<ExpenseId>>), ApiError> {
    let expense = ExpenseService::validate_new_expense(&req.category, req.amount, &req.date)?;
    let (category, amount) = (expense.category.clone(), expense.amount);

    let id = state.expenses().create(expense).await?;
    info!(expense_id = %id, category = %category, amount = %amount, "Expense recorded");

    Ok((StatusCode::CREATED, Json(CreatedResponse::new(id))))
}

/// DELETE /expenses/{id}
async fn delete_expense(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<ExpenseId>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state.expenses().delete(id).await?;
    info!(expense_id = %id, "Expense removed");

    Ok(Json(SuccessResponse::OK))
}
