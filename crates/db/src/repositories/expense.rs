//! Expense repository.

use chrono::Utc;
use nirmaan_core::expense::NewExpense;
use nirmaan_shared::types::{ExpenseId, ExpenseRow, MINOR_UNIT_SCALE, MoneyError, to_minor_units};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, QuerySelect, Set,
};

use crate::entities::expenses;

/// Error types for expense operations.
#[derive(Debug, thiserror::Error)]
pub enum ExpenseError {
    /// No expense with this ID.
    #[error("Expense not found: {0}")]
    NotFound(ExpenseId),

    /// Amount cannot be stored.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Expense repository.
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    db: DatabaseConnection,
}

impl ExpenseRepository {
    /// Creates a new expense repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all expenses, newest date first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self) -> Result<Vec<ExpenseRow>, ExpenseError> {
        let rows = expenses::Entity::find()
            .order_by_desc(expenses::Column::ExpenseDate)
            .order_by_desc(expenses::Column::Id)
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(ExpenseRow::from).collect())
    }

    /// Records an expense and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount cannot be stored or the insert fails.
    pub async fn create(&self, input: NewExpense) -> Result<ExpenseId, ExpenseError> {
        let expense = expenses::ActiveModel {
            category: Set(input.category),
            amount_paise: Set(to_minor_units(input.amount)?),
            expense_date: Set(input.expense_date),
            created_at: Set(Utc::now().into()),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(ExpenseId::from_raw(expense.id))
    }

    /// Deletes an expense.
    ///
    /// # Errors
    ///
    /// Returns `ExpenseError::NotFound` if no row matched.
    pub async fn delete(&self, id: ExpenseId) -> Result<(), ExpenseError> {
        let result = expenses::Entity::delete_by_id(id.into_inner())
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(ExpenseError::NotFound(id));
        }

        Ok(())
    }

    /// Sums every expense amount. 0 when there are none.
    ///
    /// Each stored amount fits in `i64` paise but their sum may not, so the
    /// total is accumulated as `i128` instead of by the database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails or the total exceeds the
    /// decimal range.
    pub async fn total_amount(&self) -> Result<Decimal, DbErr> {
        let amounts: Vec<i64> = expenses::Entity::find()
            .select_only()
            .column(expenses::Column::AmountPaise)
            .into_tuple()
            .all(&self.db)
            .await?;

        let paise: i128 = amounts.into_iter().map(i128::from).sum();
        Decimal::try_from_i128_with_scale(paise, MINOR_UNIT_SCALE)
            .map_err(|e| DbErr::Custom(format!("expense total out of range: {e}")))
    }
}
