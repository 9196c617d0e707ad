use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "capability")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub description: String,
    pub business_function_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::business_function::Entity",
        from = "Column::BusinessFunctionId",
        to = "super::business_function::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    BusinessFunction,
    #[sea_orm(has_many = "super::business_process::Entity")]
    BusinessProcess,
}

impl Related<super::business_function::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BusinessFunction.def()
    }
}

impl Related<super::business_process::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BusinessProcess.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
