use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

/// Fields of an expenditure taken from a spreadsheet row
#[derive(Clone, Debug, PartialEq)]
pub struct NewExpenditure {
    pub description: Option<String>,
    pub expenditure_type: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

pub struct ExpenditureRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ExpenditureRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        application_id: i32,
        expenditure: NewExpenditure,
    ) -> Result<entity::expenditure::Model, DbErr> {
        let expenditure = entity::expenditure::ActiveModel {
            description: ActiveValue::Set(expenditure.description),
            start_date: ActiveValue::Set(expenditure.start_date),
            end_date: ActiveValue::Set(expenditure.end_date),
            expenditure_type: ActiveValue::Set(expenditure.expenditure_type),
            application_id: ActiveValue::Set(application_id),
            ..Default::default()
        };

        expenditure.insert(self.db).await
    }

    pub async fn get_all_for_company(
        &self,
        company_id: i32,
    ) -> Result<Vec<entity::expenditure::Model>, DbErr> {
        entity::prelude::Expenditure::find()
            .join(
                JoinType::InnerJoin,
                entity::expenditure::Relation::Application.def(),
            )
            .join(
                JoinType::InnerJoin,
                entity::application::Relation::LineOfBusiness.def(),
            )
            .join(
                JoinType::InnerJoin,
                entity::line_of_business::Relation::OrganizationalUnit.def(),
            )
            .filter(entity::organizational_unit::Column::CompanyId.eq(company_id))
            .order_by_asc(entity::expenditure::Column::Id)
            .all(self.db)
            .await
    }
}
