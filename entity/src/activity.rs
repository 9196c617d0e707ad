use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::ResourcesRequired;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "activity")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub resources_required: ResourcesRequired,
    pub business_process_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::business_process::Entity",
        from = "Column::BusinessProcessId",
        to = "super::business_process::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    BusinessProcess,
}

impl Related<super::business_process::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BusinessProcess.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
