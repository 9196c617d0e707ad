use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "company")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::organizational_unit::Entity")]
    OrganizationalUnit,
}

impl Related<super::organizational_unit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrganizationalUnit.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
