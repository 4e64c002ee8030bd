//! `SeaORM` Entity for expenses table.

use nirmaan_shared::types::{ExpenseId, ExpenseRow, from_minor_units};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub category: String,
    pub amount_paise: i64,
    pub expense_date: Date,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ExpenseRow {
    fn from(model: Model) -> Self {
        Self {
            id: ExpenseId::from_raw(model.id),
            category: model.category,
            amount: from_minor_units(model.amount_paise),
            expense_date: model.expense_date,
            created_at: model.created_at.to_utc(),
        }
    }
}
