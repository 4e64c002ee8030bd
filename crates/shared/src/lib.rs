//! Shared types, errors, and configuration for Nirmaan.
//!
//! This crate provides common types used by the server and the dashboard client:
//! - Money conversion between decimals and stored minor units
//! - Typed IDs for labour, expense, and budget rows
//! - Wire payloads for the `/api` surface
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
