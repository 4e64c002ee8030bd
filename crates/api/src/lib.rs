//! HTTP API layer with Axum routes and extractors.
//!
//! This crate provides:
//! - REST API routes under `/api`
//! - JSON and path extractors with uniform error bodies
//! - Mapping from domain and storage errors to HTTP responses

pub mod error;
pub mod extractors;
pub mod routes;

use axum::{Router, extract::DefaultBodyLimit};
use nirmaan_db::{BudgetRepository, ExpenseRepository, LabourRepository};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<DatabaseConnection>,
}

impl AppState {
    /// Wraps a connection pool.
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db: Arc::new(db) }
    }

    pub(crate) fn budgets(&self) -> BudgetRepository {
        BudgetRepository::new(self.db.as_ref().clone())
    }

    pub(crate) fn labour(&self) -> LabourRepository {
        LabourRepository::new(self.db.as_ref().clone())
    }

    pub(crate) fn expenses(&self) -> ExpenseRepository {
        ExpenseRepository::new(self.db.as_ref().clone())
    }
}

/// Creates the main application router.
///
/// Request bodies larger than `body_limit` bytes are rejected with a 413
/// `payload_too_large` error body, whether or not `Content-Length` is sent.
pub fn create_router(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .nest("/api", routes::api_routes())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
