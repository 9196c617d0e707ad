use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::BusinessFunctionType;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "business_function")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub function_type: BusinessFunctionType,
    pub line_of_business_id: i32,
    pub employee_id: Option<i32>,
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
    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::EmployeeId",
        to = "super::employee::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Employee,
    #[sea_orm(has_many = "super::capability::Entity")]
    Capability,
}

impl Related<super::line_of_business::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LineOfBusiness.def()
    }
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl Related<super::capability::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Capability.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
