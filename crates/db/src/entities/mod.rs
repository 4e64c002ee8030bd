//! `SeaORM` entity definitions.
//!
//! Monetary columns hold whole paise (`BIGINT`); see `nirmaan_shared::types::money`.

pub mod expenses;
pub mod labour;
pub mod project_budget;
