//! Budget repository for the project budget record.
//!
//! The budget is a single logical record. Reads take the most recently
//! updated row; writes go through `set_total`, which updates that row or
//! creates it when the table is empty.

use chrono::{DateTime, Utc};
use nirmaan_core::budget::{BudgetService, BudgetSummary};
use nirmaan_shared::types::{MoneyError, from_minor_units, to_minor_units};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set,
};

use super::expense::ExpenseRepository;
use crate::entities::project_budget;

/// Error types for budget operations.
#[derive(Debug, thiserror::Error)]
pub enum BudgetError {
    /// Amount cannot be stored.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Budget summary plus the write timestamp of the authoritative row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetSnapshot {
    /// Derived totals.
    pub summary: BudgetSummary,
    /// When the budget was last set, if ever.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Budget repository.
#[derive(Debug, Clone)]
pub struct BudgetRepository {
    db: DatabaseConnection,
}

impl BudgetRepository {
    /// Creates a new budget repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the authoritative budget row, if one exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn current(&self) -> Result<Option<project_budget::Model>, BudgetError> {
        let budget = project_budget::Entity::find()
            .order_by_desc(project_budget::Column::UpdatedAt)
            .order_by_desc(project_budget::Column::Id)
            .one(&self.db)
            .await?;
        Ok(budget)
    }

    /// Computes the budget summary against the current expense total.
    ///
    /// # Errors
    ///
    /// Returns an error if either query fails.
    pub async fn snapshot(&self) -> Result<BudgetSnapshot, BudgetError> {
        let budget = self.current().await?;
        let total_expenses = ExpenseRepository::new(self.db.clone())
            .total_amount()
            .await?;

        let summary = BudgetService::summarize(
            budget
                .as_ref()
                .map(|b| from_minor_units(b.total_budget_paise)),
            total_expenses,
        );

        Ok(BudgetSnapshot {
            summary,
            updated_at: budget.map(|b| b.updated_at.to_utc()),
        })
    }

    /// Sets the project budget, creating the record on first use.
    ///
    /// The caller validates the amount. Concurrent writers: last write wins.
    ///
    /// The lookup and the insert are separate statements, so racing first
    /// writes on an empty table can each insert a row. `current` still picks
    /// a single authoritative row and later writes update only that one.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount cannot be stored or the write fails.
    pub async fn set_total(
        &self,
        total_budget: Decimal,
    ) -> Result<project_budget::Model, BudgetError> {
        let paise = to_minor_units(total_budget)?;
        let now = Utc::now().into();

        let model = match self.current().await? {
            Some(existing) => {
                let mut active: project_budget::ActiveModel = existing.into();
                active.total_budget_paise = Set(paise);
                active.updated_at = Set(now);
                active.update(&self.db).await?
            }
            None => {
                project_budget::ActiveModel {
                    total_budget_paise: Set(paise),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                }
                .insert(&self.db)
                .await?
            }
        };

        Ok(model)
    }
}

#[cfg(test)]
#[path = "budget_tests.rs"]
mod tests;
