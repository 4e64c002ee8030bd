//! Project budget summary and utilization.

pub mod service;
pub mod types;


pub use service::BudgetService;
pub use types::BudgetSummary;
