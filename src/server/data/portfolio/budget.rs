use entity::sea_orm_active_enums::CurrencySuccessor;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

pub struct BudgetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BudgetRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        application_id: i32,
        year: i32,
        amount: f64,
        successor: CurrencySuccessor,
    ) -> Result<entity::budget::Model, DbErr> {
        let budget = entity::budget::ActiveModel {
            amount: ActiveValue::Set(amount),
            year: ActiveValue::Set(year),
            successor: ActiveValue::Set(successor),
            application_id: ActiveValue::Set(application_id),
            ..Default::default()
        };

        budget.insert(self.db).await
    }

    pub async fn get_all_for_company(
        &self,
        company_id: i32,
    ) -> Result<Vec<entity::budget::Model>, DbErr> {
        entity::prelude::Budget::find()
            .join(
                JoinType::InnerJoin,
                entity::budget::Relation::Application.def(),
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
            .order_by_asc(entity::budget::Column::Id)
            .all(self.db)
            .await
    }

    /// Returns `None` if the budget does not exist.
    pub async fn update_amount(
        &self,
        id: i32,
        amount: f64,
        successor: CurrencySuccessor,
    ) -> Result<Option<entity::budget::Model>, DbErr> {
        let Some(budget) = entity::prelude::Budget::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut budget = budget.into_active_model();
        budget.amount = ActiveValue::Set(amount);
        budget.successor = ActiveValue::Set(successor);

        Ok(Some(budget.update(self.db).await?))
    }
}
