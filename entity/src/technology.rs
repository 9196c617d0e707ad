use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "technology")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub application_id: i32,
    pub technology_stack_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::application::Entity",
        from = "Column::ApplicationId",
        to = "super::application::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Application,
    #[sea_orm(
        belongs_to = "super::technology_stack::Entity",
        from = "Column::TechnologyStackId",
        to = "super::technology_stack::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    TechnologyStack,
}

impl Related<super::application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Application.def()
    }
}

impl Related<super::technology_stack::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TechnologyStack.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
