//! `SeaORM` Entity for labour table.

use nirmaan_shared::types::{LabourId, LabourRow, from_minor_units};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "labour")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub daily_wage_paise: i64,
    pub is_present: bool,
    pub total_pay_paise: i64,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for LabourRow {
    fn from(model: Model) -> Self {
        Self {
            id: LabourId::from_raw(model.id),
            name: model.name,
            daily_wage: from_minor_units(model.daily_wage_paise),
            is_present: model.is_present,
            total_pay: from_minor_units(model.total_pay_paise),
            updated_at: model.updated_at.to_utc(),
        }
    }
}
