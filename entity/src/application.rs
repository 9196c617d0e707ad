use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{ApplicationStatus, ApplicationType};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "application")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub application_type: ApplicationType,
    pub status: ApplicationStatus,
    pub implementation_date: Option<Date>,
    pub line_of_business_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::line_of_business::Entity",
        from = "Column::LineOfBusinessId",
        to = "super::line_of_business::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    LineOfBusiness,
    #[sea_orm(has_many = "super::technology::Entity")]
    Technology,
    #[sea_orm(has_many = "super::expenditure::Entity")]
    Expenditure,
    #[sea_orm(has_many = "super::budget::Entity")]
    Budget,
}

impl Related<super::line_of_business::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LineOfBusiness.def()
    }
}

impl Related<super::technology::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Technology.def()
    }
}

impl Related<super::expenditure::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Expenditure.def()
    }
}

impl Related<super::budget::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Budget.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
