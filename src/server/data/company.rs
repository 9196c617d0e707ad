use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

pub struct CompanyRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CompanyRepository<'a, C> {
    /// Creates a new instance of [`CompanyRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, name: String) -> Result<entity::company::Model, DbErr> {
        let company = entity::company::ActiveModel {
            name: ActiveValue::Set(name),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        company.insert(self.db).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::company::Model>, DbErr> {
        entity::prelude::Company::find_by_id(id).one(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::company::Model>, DbErr> {
        entity::prelude::Company::find()
            .order_by_asc(entity::company::Column::Id)
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use portfolio_test_utils::prelude::*;

    use super::CompanyRepository;

    /// Expect created companies to be returned by id and in the full listing
    #[tokio::test]
    async fn creates_and_finds_company() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Company)
            .build()
            .await?;
        let repo = CompanyRepository::new(&test.db);

        let acme = repo.create("Acme".to_string()).await?;
        let globex = repo.create("Globex".to_string()).await?;

        let found = repo.find_by_id(acme.id).await?;
        assert_eq!(found.map(|c| c.name), Some("Acme".to_string()));

        let all = repo.get_all().await?;
        let ids: Vec<i32> = all.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![acme.id, globex.id]);

        Ok(())
    }

    /// Expect None for an unknown company ID
    #[tokio::test]
    async fn returns_none_for_unknown_company() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Company)
            .build()
            .await?;
        let repo = CompanyRepository::new(&test.db);

        let result = repo.find_by_id(42).await?;

        assert!(result.is_none());

        Ok(())
    }

    /// Expect Error when the company table has not been created
    #[tokio::test]
    async fn errors_without_table() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;
        let repo = CompanyRepository::new(&test.db);

        let result = repo.create("Acme".to_string()).await;

        assert!(result.is_err());

        Ok(())
    }
}
