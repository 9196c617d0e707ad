use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

pub struct TechnologyRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TechnologyRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        application_id: i32,
        technology_stack_id: i32,
    ) -> Result<entity::technology::Model, DbErr> {
        let technology = entity::technology::ActiveModel {
            application_id: ActiveValue::Set(application_id),
            technology_stack_id: ActiveValue::Set(technology_stack_id),
            ..Default::default()
        };

        technology.insert(self.db).await
    }

    pub async fn get_all_for_company(
        &self,
        company_id: i32,
    ) -> Result<Vec<entity::technology::Model>, DbErr> {
        entity::prelude::Technology::find()
            .join(
                JoinType::InnerJoin,
                entity::technology::Relation::Application.def(),
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
            .order_by_asc(entity::technology::Column::Id)
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use entity::sea_orm_active_enums::ApplicationStatus;
    use portfolio_test_utils::prelude::*;

    use super::TechnologyRepository;

    /// Expect only links of applications owned by the requested company
    #[tokio::test]
    async fn scopes_links_to_company() -> Result<(), TestError> {
        let test = TestBuilder::new().with_portfolio_tables().build().await?;
        let stack = test
            .portfolio()
            .insert_technology_stack("AWS-1", "CLOUD")
            .await?;
        let repo = TechnologyRepository::new(&test.db);

        let mut links = Vec::new();
        let mut companies = Vec::new();
        for name in ["Acme", "Globex"] {
            let (company, _, lob) = test
                .portfolio()
                .insert_company_hierarchy(name, "People", "HR")
                .await?;
            let application = test
                .portfolio()
                .insert_application(lob.id, "Payroll", ApplicationStatus::Running)
                .await?;

            links.push(repo.create(application.id, stack.id).await?);
            companies.push(company);
        }

        let result = repo.get_all_for_company(companies[0].id).await?;

        assert_eq!(result, vec![links[0].clone()]);

        Ok(())
    }
}
