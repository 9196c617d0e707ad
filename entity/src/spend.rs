use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{CurrencySuccessor, SpendTargetKind};

/// `target_id` points at `technology.id` or `expenditure.id` depending on
/// `target_kind`, so there is no foreign key on it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "spend")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Double")]
    pub amount: f64,
    pub successor: CurrencySuccessor,
    pub date_of_update: Date,
    pub expenditure_type: String,
    pub target_kind: SpendTargetKind,
    pub target_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
