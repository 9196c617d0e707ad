use chrono::NaiveDate;
use entity::sea_orm_active_enums::{CurrencySuccessor, SpendTargetKind};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::spend::SpendTarget;

pub struct SpendRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SpendRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        target: SpendTarget,
        expenditure_type: String,
        amount: f64,
        successor: CurrencySuccessor,
        date_of_update: NaiveDate,
    ) -> Result<entity::spend::Model, DbErr> {
        let spend = entity::spend::ActiveModel {
            amount: ActiveValue::Set(amount),
            successor: ActiveValue::Set(successor),
            date_of_update: ActiveValue::Set(date_of_update),
            expenditure_type: ActiveValue::Set(expenditure_type),
            target_kind: ActiveValue::Set(target.kind()),
            target_id: ActiveValue::Set(target.id()),
            ..Default::default()
        };

        spend.insert(self.db).await
    }

    /// Spend rows attributed to any of `target_ids` of the given kind, ordered by id
    pub async fn get_all_for_targets(
        &self,
        target_kind: SpendTargetKind,
        target_ids: Vec<i32>,
    ) -> Result<Vec<entity::spend::Model>, DbErr> {
        if target_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Spend::find()
            .filter(entity::spend::Column::TargetKind.eq(target_kind))
            .filter(entity::spend::Column::TargetId.is_in(target_ids))
            .order_by_asc(entity::spend::Column::Id)
            .all(self.db)
            .await
    }

    /// Overwrite amount and unit, `date_of_update` is left as is
    ///
    /// Returns `None` if the spend does not exist.
    pub async fn update_amount(
        &self,
        id: i32,
        amount: f64,
        successor: CurrencySuccessor,
    ) -> Result<Option<entity::spend::Model>, DbErr> {
        let Some(spend) = entity::prelude::Spend::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut spend = spend.into_active_model();
        spend.amount = ActiveValue::Set(amount);
        spend.successor = ActiveValue::Set(successor);

        Ok(Some(spend.update(self.db).await?))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use entity::sea_orm_active_enums::{CurrencySuccessor, SpendTargetKind};
    use portfolio_test_utils::prelude::*;

    use super::SpendRepository;
    use crate::server::model::spend::SpendTarget;

    async fn setup() -> Result<TestContext, TestError> {
        TestBuilder::new()
            .with_table(entity::prelude::Spend)
            .build()
            .await
    }

    fn date(year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, 1, 15).unwrap_or_default()
    }

    /// Expect only spend of the requested kind and targets
    #[tokio::test]
    async fn filters_by_target_kind_and_id() -> Result<(), TestError> {
        let test = setup().await?;
        let repo = SpendRepository::new(&test.db);

        let technology_spend = repo
            .create(
                SpendTarget::Technology(1),
                "INFRA".to_string(),
                10.0,
                CurrencySuccessor::Raw,
                date(2026),
            )
            .await?;
        repo.create(
            SpendTarget::Expenditure(1),
            "Hosting".to_string(),
            5.0,
            CurrencySuccessor::K,
            date(2026),
        )
        .await?;
        repo.create(
            SpendTarget::Technology(2),
            "LICENSE".to_string(),
            3.0,
            CurrencySuccessor::M,
            date(2026),
        )
        .await?;

        let result = repo
            .get_all_for_targets(SpendTargetKind::Technology, vec![1])
            .await?;

        assert_eq!(result, vec![technology_spend]);

        Ok(())
    }

    /// Expect no query and no rows for an empty target list
    #[tokio::test]
    async fn returns_empty_for_no_targets() -> Result<(), TestError> {
        let test = setup().await?;
        let repo = SpendRepository::new(&test.db);

        let result = repo
            .get_all_for_targets(SpendTargetKind::Expenditure, Vec::new())
            .await?;

        assert!(result.is_empty());

        Ok(())
    }

    /// Expect amount and unit to change while the update date stays untouched
    #[tokio::test]
    async fn updates_amount_without_touching_date() -> Result<(), TestError> {
        let test = setup().await?;
        let repo = SpendRepository::new(&test.db);
        let spend = repo
            .create(
                SpendTarget::Technology(1),
                "INFRA".to_string(),
                10.0,
                CurrencySuccessor::Raw,
                date(2024),
            )
            .await?;

        let updated = repo
            .update_amount(spend.id, 2.0, CurrencySuccessor::M)
            .await?;

        let updated = updated.ok_or(sea_orm::DbErr::RecordNotFound("spend".to_string()))?;
        assert_eq!(updated.amount, 2.0);
        assert_eq!(updated.successor, CurrencySuccessor::M);
        assert_eq!(updated.date_of_update, date(2024));

        Ok(())
    }
}
