//! Client side of the Nirmaan dashboard.
//!
//! This crate provides:
//! - `ApiClient`, a typed wrapper over the `/api` surface
//! - Resource stores that hold fetched state and re-fetch after mutations
//! - Form state with presence checks
//! - Plain-text renderers for the budget, labour and expense panels

pub mod api;
pub mod form;
pub mod store;
pub mod view;

pub use api::{ApiClient, ClientError};
pub use store::{BudgetStore, Dashboard, ExpenseStore, LabourStore};
