use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::ProcessStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "business_process")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub start_date: Option<Date>,
    pub expected_end_date: Option<Date>,
    pub end_date: Option<Date>,
    pub status: ProcessStatus,
    pub capability_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::capability::Entity",
        from = "Column::CapabilityId",
        to = "super::capability::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Capability,
    #[sea_orm(has_many = "super::activity::Entity")]
    Activity,
}

impl Related<super::capability::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Capability.def()
    }
}

impl Related<super::activity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Activity.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
