//! Project budget routes.

use axum::{Json, Router, extract::State, routing::get};
use nirmaan_core::budget::BudgetService;
use nirmaan_db::repositories::BudgetSnapshot;
use nirmaan_shared::types::{BudgetSummaryResponse, SuccessResponse, UpdateBudgetRequest};
use tracing::info;

use crate::{AppState, error::ApiError, extractors::ApiJson};

/// Creates the budget routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/budget", get(get_budget).put(update_budget))
}

fn summary_response(snapshot: BudgetSnapshot) -> BudgetSummaryResponse {
    let summary = snapshot.summary;
    BudgetSummaryResponse {
        total_budget: summary.total_budget,
        total_expenses: summary.total_expenses,
        remaining_budget: summary.remaining_budget,
        utilization_percent: summary.utilization_percent,
        updated_at: snapshot.updated_at,
    }
}

/// GET /budget
async fn get_budget(
    State(state): State<AppState>,
) -> Result<Json<BudgetSummaryResponse>, ApiError> {
    let snapshot = state.budgets().snapshot().await?;
    Ok(Json(summary_response(snapshot)))
}

/// PUT /budget
async fn update_budget(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<UpdateBudgetRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let total_budget = BudgetService::validate_total_budget(req.total_budget)?;

    let budget = state.budgets().set_total(total_budget).await?;
    info!(budget_id = budget.id, total_budget = %total_budget, "Budget updated");

    Ok(Json(SuccessResponse::OK))
}
