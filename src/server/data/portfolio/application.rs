use chrono::NaiveDate;
use entity::sea_orm_active_enums::{ApplicationStatus, ApplicationType};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

/// Fields of an application taken from a spreadsheet row
#[derive(Clone, Debug, PartialEq)]
pub struct NewApplication {
    pub name: String,
    pub description: Option<String>,
    pub application_type: ApplicationType,
    pub status: ApplicationStatus,
    pub implementation_date: Option<NaiveDate>,
}

pub struct ApplicationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ApplicationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        line_of_business_id: i32,
        application: NewApplication,
    ) -> Result<entity::application::Model, DbErr> {
        let application = entity::application::ActiveModel {
            name: ActiveValue::Set(application.name),
            description: ActiveValue::Set(application.description),
            application_type: ActiveValue::Set(application.application_type),
            status: ActiveValue::Set(application.status),
            implementation_date: ActiveValue::Set(application.implementation_date),
            line_of_business_id: ActiveValue::Set(line_of_business_id),
            ..Default::default()
        };

        application.insert(self.db).await
    }

    /// Applications owned by any line of business of the company, ordered by id
    pub async fn get_all_for_company(
        &self,
        company_id: i32,
    ) -> Result<Vec<entity::application::Model>, DbErr> {
        entity::prelude::Application::find()
            .join(
                JoinType::InnerJoin,
                entity::application::Relation::LineOfBusiness.def(),
            )
            .join(
                JoinType::InnerJoin,
                entity::line_of_business::Relation::OrganizationalUnit.def(),
            )
            .filter(entity::organizational_unit::Column::CompanyId.eq(company_id))
            .order_by_asc(entity::application::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::application::Model>, DbErr> {
        entity::prelude::Application::find()
            .order_by_asc(entity::application::Column::Id)
            .all(self.db)
            .await
    }
}
