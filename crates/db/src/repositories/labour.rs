//! Labour repository for the worker roster.
//!
//! Attendance and total pay are independent partial updates; each touches
//! only its own column plus `updated_at`.

use chrono::Utc;
use nirmaan_core::labour::NewWorker;
use nirmaan_shared::types::{LabourId, LabourRow, MoneyError, to_minor_units};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, prelude::DateTimeWithTimeZone, sea_query::Expr,
};

use crate::entities::labour;

/// Error types for labour operations.
#[derive(Debug, thiserror::Error)]
pub enum LabourError {
    /// No worker with this ID.
    #[error("Worker not found: {0}")]
    NotFound(LabourId),

    /// Amount cannot be stored.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Labour repository.
#[derive(Debug, Clone)]
pub struct LabourRepository {
    db: DatabaseConnection,
}

impl LabourRepository {
    /// Creates a new labour repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all workers alphabetically.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self) -> Result<Vec<LabourRow>, LabourError> {
        let rows = labour::Entity::find()
            .order_by_asc(labour::Column::Name)
            .order_by_asc(labour::Column::Id)
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(LabourRow::from).collect())
    }

    /// Finds a worker by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find(&self, id: LabourId) -> Result<Option<LabourRow>, LabourError> {
        let row = labour::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await?;
        Ok(row.map(LabourRow::from))
    }

    /// Adds a worker, present and with nothing owed yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the wage cannot be stored or the insert fails.
    pub async fn create(&self, input: NewWorker) -> Result<LabourId, LabourError> {
        let now: DateTimeWithTimeZone = Utc::now().into();

        let worker = labour::ActiveModel {
            name: Set(input.name),
            daily_wage_paise: Set(to_minor_units(input.daily_wage)?),
            is_present: Set(true),
            total_pay_paise: Set(0),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(LabourId::from_raw(worker.id))
    }

    /// Overwrites the attendance flag.
    ///
    /// # Errors
    ///
    /// Returns `LabourError::NotFound` if no row matched.
    pub async fn set_attendance(&self, id: LabourId, is_present: bool) -> Result<(), LabourError> {
        let now: DateTimeWithTimeZone = Utc::now().into();

        let result = labour::Entity::update_many()
            .col_expr(labour::Column::IsPresent, Expr::value(is_present))
            .col_expr(labour::Column::UpdatedAt, Expr::value(now))
            .filter(labour::Column::Id.eq(id.into_inner()))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(LabourError::NotFound(id));
        }

        Ok(())
    }

    /// Overwrites the accumulated pay.
    ///
    /// # Errors
    ///
    /// Returns `LabourError::NotFound` if no row matched.
    pub async fn set_total_pay(&self, id: LabourId, total_pay: Decimal) -> Result<(), LabourError> {
        let paise = to_minor_units(total_pay)?;
        let now: DateTimeWithTimeZone = Utc::now().into();

        let result = labour::Entity::update_many()
            .col_expr(labour::Column::TotalPayPaise, Expr::value(paise))
            .col_expr(labour::Column::UpdatedAt, Expr::value(now))
            .filter(labour::Column::Id.eq(id.into_inner()))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(LabourError::NotFound(id));
        }

        Ok(())
    }

    /// Removes a worker.
    ///
    /// # Errors
    ///
    /// Returns `LabourError::NotFound` if no row matched.
    pub async fn delete(&self, id: LabourId) -> Result<(), LabourError> {
        let result = labour::Entity::delete_by_id(id.into_inner())
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(LabourError::NotFound(id));
        }

        Ok(())
    }
}
