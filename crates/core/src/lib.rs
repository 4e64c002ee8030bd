//! Core business logic for Nirmaan.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All validation rules and derived values live here.
//!
//! # Modules
//!
//! - `budget` - Budget summary and utilization
//! - `labour` - Worker validation, attendance, payroll totals
//! - `expense` - Expense validation and totals
//! - `validation` - Field-level presence and sign checks

pub mod budget;
pub mod expense;
pub mod labour;
pub mod validation;

pub use validation::ValidationError;
