use chrono::NaiveDate;
use entity::sea_orm_active_enums::ProcessStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

/// Fields of a business process taken from a spreadsheet row
#[derive(Clone, Debug, PartialEq)]
pub struct NewBusinessProcess {
    pub name: String,
    pub start_date: Option<NaiveDate>,
    pub expected_end_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: ProcessStatus,
}

pub struct BusinessProcessRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BusinessProcessRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        capability_id: i32,
        process: NewBusinessProcess,
    ) -> Result<entity::business_process::Model, DbErr> {
        let business_process = entity::business_process::ActiveModel {
            name: ActiveValue::Set(process.name),
            start_date: ActiveValue::Set(process.start_date),
            expected_end_date: ActiveValue::Set(process.expected_end_date),
            end_date: ActiveValue::Set(process.end_date),
            status: ActiveValue::Set(process.status),
            capability_id: ActiveValue::Set(capability_id),
            ..Default::default()
        };

        business_process.insert(self.db).await
    }

    pub async fn get_all_for_company(
        &self,
        company_id: i32,
    ) -> Result<Vec<entity::business_process::Model>, DbErr> {
        entity::prelude::BusinessProcess::find()
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
            .order_by_asc(entity::business_process::Column::Id)
            .all(self.db)
            .await
    }
}
