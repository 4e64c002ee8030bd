//! Labour roster routes.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{delete, get, put},
};
use nirmaan_core::labour::LabourService;
use nirmaan_shared::types::{
    AttendanceRequest, CreateLabourRequest, CreatedResponse, LabourId, LabourRow, SuccessResponse,
    TotalPayRequest,
};
use tracing::info;

use crate::{
    AppState,
    error::ApiError,
    extractors::{ApiJson, ApiPath},
};

/// Creates the labour routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/labour", get(list_labour).post(create_labour))
        .route("/labour/{id}", delete(delete_labour))
        .route("/labour/{id}/attendance", put(update_attendance))
        .route("/labour/{id}/total-pay", put(update_total_pay))
}

/// GET /labour
async fn list_labour(State(state): State<AppState>) -> Result<Json<Vec<LabourRow>>, ApiError> {
    let rows = state.labour().list().await?;
    Ok(Json(rows))
}

/// POST /labour
async fn create_labour(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateLabourRequest>,
) -> Result<(StatusCode, Json<CreatedResponse<LabourId>>), ApiError> {
    let worker = LabourService::validate_new_worker(&req.name, req.daily_wage)?;

    let id = state.labour().create(worker).await?;
    info!(labour_id = %id, "Worker added");

    Ok((StatusCode::CREATED, Json(CreatedResponse::new(id))))
}

/// PUT /labour/{id}/attendance
async fn update_attendance(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<LabourId>,
    ApiJson(req): ApiJson<AttendanceRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state.labour().set_attendance(id, req.is_present).await?;
    info!(labour_id = %id, is_present = req.is_present, "Attendance updated");

    Ok(Json(SuccessResponse::OK))
}

/// PUT /labour/{id}/total-pay
async fn update_total_pay(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<LabourId>,
    ApiJson(req): ApiJson<TotalPayRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let total_pay = LabourService::validate_total_pay(req.total_pay)?;

    state.labour().set_total_pay(id, total_pay).await?;
    info!(labour_id = %id, total_pay = %total_pay, "Total pay updated");

    Ok(Json(SuccessResponse::OK))
}

/// DELETE /labour/{id}
async fn delete_labour(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<LabourId>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state.labour().delete(id).await?;
    info!(labour_id = %id, "Worker removed");

    Ok(Json(SuccessResponse::OK))
}
