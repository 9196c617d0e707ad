use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

pub struct CapabilityRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CapabilityRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        business_function_id: i32,
        description: String,
    ) -> Result<entity::capability::Model, DbErr> {
        let capability = entity::capability::ActiveModel {
            description: ActiveValue::Set(description),
            business_function_id: ActiveValue::Set(business_function_id),
            ..Default::default()
        };

        capability.insert(self.db).await
    }

    pub async fn get_all_for_company(
        &self,
        company_id: i32,
    ) -> Result<Vec<entity::capability::Model>, DbErr> {
        entity::prelude::Capability::find()
            .join(
                JoinType::InnerJoin,
                entity::capability::Relation::BusinessFunction.def(),
            )
            .join(
                JoinType::InnerJoin,
                entity::business_function::Relation::LineOfBusiness.def(),
            )
            .join(
                JoinType::InnerJoin,
                entity::line_of_business::Relation::OrganizationalUnit.def(),
            )
            .filter(entity::organizational_unit::Column::CompanyId.eq(company_id))
            .order_by_asc(entity::capability::Column::Id)
            .all(self.db)
            .await
    }
}
