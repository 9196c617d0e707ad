use entity::sea_orm_active_enums::ResourcesRequired;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

pub struct ActivityRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ActivityRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        business_process_id: i32,
        name: String,
        resources_required: ResourcesRequired,
    ) -> Result<entity::activity::Model, DbErr> {
        let activity = entity::activity::ActiveModel {
            name: ActiveValue::Set(name),
            resources_required: ActiveValue::Set(resources_required),
            business_process_id: ActiveValue::Set(business_process_id),
            ..Default::default()
        };

        activity.insert(self.db).await
    }

    pub async fn get_all_for_company(
        &self,
        company_id: i32,
    ) -> Result<Vec<entity::activity::Model>, DbErr> {
        entity::prelude::Activity::find()
            .join(
                JoinType::InnerJoin,
                entity::activity::Relation::BusinessProcess.def(),
            )
            .join(
                JoinType::InnerJoin,
                entity::business_process::Relation::Capability.def(),
            )
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
            .order_by_asc(entity::activity::Column::Id)
            .all(self.db)
            .await
    }
}
