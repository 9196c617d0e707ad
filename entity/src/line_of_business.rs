use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "line_of_business")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub organizational_unit_id: i32,
    pub employee_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::organizational_unit::Entity",
        from = "Column::OrganizationalUnitId",
        to = "super::organizational_unit::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    OrganizationalUnit,
    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::EmployeeId",
        to = "super::employee::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Employee,
    #[sea_orm(has_many = "super::business_function::Entity")]
    BusinessFunction,
    #[sea_orm(has_many = "super::application::Entity")]
    Application,
}

impl Related<super::organizational_unit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrganizationalUnit.def()
    }
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl Related<super::business_function::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BusinessFunction.def()
    }
}

impl Related<super::application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Application.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
