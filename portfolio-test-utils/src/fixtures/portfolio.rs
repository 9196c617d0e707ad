use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::{
    ApplicationStatus, ApplicationType, BusinessFunctionType, CurrencySuccessor, ProcessStatus,
    SpendTargetKind,
};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn portfolio<'a>(&'a self) -> PortfolioFixtures<'a> {
        PortfolioFixtures { setup: self }
    }
}

pub struct PortfolioFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> PortfolioFixtures<'a> {
    pub async fn insert_company(&self, name: &str) -> Result<entity::company::Model, TestError> {
        Ok(
            entity::prelude::Company::insert(entity::company::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_employee(
        &self,
        employee_id: &str,
        name: &str,
    ) -> Result<entity::employee::Model, TestError> {
        Ok(
            entity::prelude::Employee::insert(entity::employee::ActiveModel {
                employee_id: ActiveValue::Set(employee_id.to_string()),
                name: ActiveValue::Set(name.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_organizational_unit(
        &self,
        company_id: i32,
        name: &str,
    ) -> Result<entity::organizational_unit::Model, TestError> {
        Ok(entity::prelude::OrganizationalUnit::insert(
            entity::organizational_unit::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                company_id: ActiveValue::Set(company_id),
                employee_id: ActiveValue::Set(None),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_line_of_business(
        &self,
        organizational_unit_id: i32,
        name: &str,
    ) -> Result<entity::line_of_business::Model, TestError> {
        Ok(entity::prelude::LineOfBusiness::insert(
            entity::line_of_business::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                organizational_unit_id: ActiveValue::Set(organizational_unit_id),
                employee_id: ActiveValue::Set(None),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a company together with one organizational unit and one line of business
    pub async fn insert_company_hierarchy(
        &self,
        company: &str,
        organizational_unit: &str,
        line_of_business: &str,
    ) -> Result<
        (
            entity::company::Model,
            entity::organizational_unit::Model,
            entity::line_of_business::Model,
        ),
        TestError,
    > {
        let company = self.insert_company(company).await?;
        let organizational_unit = self
            .insert_organizational_unit(company.id, organizational_unit)
            .await?;
        let line_of_business = self
            .insert_line_of_business(organizational_unit.id, line_of_business)
            .await?;

        Ok((company, organizational_unit, line_of_business))
    }

    pub async fn insert_business_function(
        &self,
        line_of_business_id: i32,
        name: &str,
    ) -> Result<entity::business_function::Model, TestError> {
        Ok(entity::prelude::BusinessFunction::insert(
            entity::business_function::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                function_type: ActiveValue::Set(BusinessFunctionType::Core),
                line_of_business_id: ActiveValue::Set(line_of_business_id),
                employee_id: ActiveValue::Set(None),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_capability(
        &self,
        business_function_id: i32,
        description: &str,
    ) -> Result<entity::capability::Model, TestError> {
        Ok(
            entity::prelude::Capability::insert(entity::capability::ActiveModel {
                description: ActiveValue::Set(description.to_string()),
                business_function_id: ActiveValue::Set(business_function_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_business_process(
        &self,
        capability_id: i32,
        name: &str,
    ) -> Result<entity::business_process::Model, TestError> {
        Ok(entity::prelude::BusinessProcess::insert(
            entity::business_process::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                start_date: ActiveValue::Set(None),
                expected_end_date: ActiveValue::Set(None),
                end_date: ActiveValue::Set(None),
                status: ActiveValue::Set(ProcessStatus::NotStarted),
                capability_id: ActiveValue::Set(capability_id),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_application(
        &self,
        line_of_business_id: i32,
        name: &str,
        status: ApplicationStatus,
    ) -> Result<entity::application::Model, TestError> {
        Ok(
            entity::prelude::Application::insert(entity::application::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                description: ActiveValue::Set(None),
                application_type: ActiveValue::Set(ApplicationType::Web),
                status: ActiveValue::Set(status),
                implementation_date: ActiveValue::Set(None),
                line_of_business_id: ActiveValue::Set(line_of_business_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_technology_stack(
        &self,
        name: &str,
        stack_type: &str,
    ) -> Result<entity::technology_stack::Model, TestError> {
        Ok(entity::prelude::TechnologyStack::insert(
            entity::technology_stack::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                stack_type: ActiveValue::Set(stack_type.to_string()),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_technology(
        &self,
        application_id: i32,
        technology_stack_id: i32,
    ) -> Result<entity::technology::Model, TestError> {
        Ok(
            entity::prelude::Technology::insert(entity::technology::ActiveModel {
                application_id: ActiveValue::Set(application_id),
                technology_stack_id: ActiveValue::Set(technology_stack_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_expenditure(
        &self,
        application_id: i32,
        expenditure_type: &str,
    ) -> Result<entity::expenditure::Model, TestError> {
        Ok(
            entity::prelude::Expenditure::insert(entity::expenditure::ActiveModel {
                description: ActiveValue::Set(None),
                start_date: ActiveValue::Set(None),
                end_date: ActiveValue::Set(None),
                expenditure_type: ActiveValue::Set(expenditure_type.to_string()),
                application_id: ActiveValue::Set(application_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_spend(
        &self,
        target_kind: SpendTargetKind,
        target_id: i32,
        expenditure_type: &str,
        amount: f64,
        successor: CurrencySuccessor,
        date_of_update: NaiveDate,
    ) -> Result<entity::spend::Model, TestError> {
        Ok(
            entity::prelude::Spend::insert(entity::spend::ActiveModel {
                amount: ActiveValue::Set(amount),
                successor: ActiveValue::Set(successor),
                date_of_update: ActiveValue::Set(date_of_update),
                expenditure_type: ActiveValue::Set(expenditure_type.to_string()),
                target_kind: ActiveValue::Set(target_kind),
                target_id: ActiveValue::Set(target_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_budget(
        &self,
        application_id: i32,
        year: i32,
        amount: f64,
        successor: CurrencySuccessor,
    ) -> Result<entity::budget::Model, TestError> {
        Ok(
            entity::prelude::Budget::insert(entity::budget::ActiveModel {
                amount: ActiveValue::Set(amount),
                year: ActiveValue::Set(year),
                successor: ActiveValue::Set(successor),
                application_id: ActiveValue::Set(application_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
