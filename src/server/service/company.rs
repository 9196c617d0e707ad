//! Company management and the company-scoped application listing.

use std::collections::HashMap;

use sea_orm::{ActiveEnum, DatabaseConnection};

use crate::{
    model::company::{ApplicationDto, CompanyDto},
    server::{
        data::{
            company::CompanyRepository,
            organization::line_of_business::LineOfBusinessRepository,
            portfolio::application::ApplicationRepository,
        },
        error::{portfolio::PortfolioError, Error},
        model::db::CompanyModel,
        service::retry::RetryContext,
    },
};

impl From<CompanyModel> for CompanyDto {
    fn from(company: CompanyModel) -> Self {
        Self {
            id: company.id,
            name: company.name,
            created_at: company.created_at,
        }
    }
}

/// Service for company records and the data listed under them.
pub struct CompanyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CompanyService<'a> {
    /// Creates a new instance of CompanyService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a company.
    ///
    /// # Arguments
    /// - `name` - Display name of the company, surrounding whitespace is trimmed
    ///
    /// # Returns
    /// - `Ok(CompanyDto)` - The created company
    /// - `Err(Error::ParseError)` - Name is blank
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_company(&self, name: &str) -> Result<CompanyDto, Error> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::ParseError("company name must not be empty".to_string()));
        }

        let company = CompanyRepository::new(self.db)
            .create(name.to_string())
            .await?;

        tracing::info!("Created company {} with ID {}", company.name, company.id);

        Ok(company.into())
    }

    /// Retrieves all companies ordered by id.
    pub async fn get_companies(&self) -> Result<Vec<CompanyDto>, Error> {
        let ctx = RetryContext::new();

        let db = self.db.clone();

        ctx.execute_with_retry("list companies", || {
            let db = db.clone();

            Box::pin(async move {
                let companies = CompanyRepository::new(&db).get_all().await?;

                Ok(companies.into_iter().map(CompanyDto::from).collect())
            })
        })
        .await
    }

    /// Retrieves a company by id.
    ///
    /// # Returns
    /// - `Ok(Some(CompanyDto))` - Company found
    /// - `Ok(None)` - Company not found in database
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn get_company(&self, company_id: i32) -> Result<Option<CompanyDto>, Error> {
        let ctx = RetryContext::new();

        let db = self.db.clone();

        ctx.execute_with_retry(&format!("get company ID {}", company_id), || {
            let db = db.clone();

            Box::pin(async move {
                let company = CompanyRepository::new(&db).find_by_id(company_id).await?;

                Ok(company.map(CompanyDto::from))
            })
        })
        .await
    }

    /// Retrieves the applications of every line of business in a company.
    ///
    /// # Returns
    /// - `Ok(Vec<ApplicationDto>)` - Applications ordered by id, each with its line of business name
    /// - `Err(Error::PortfolioError(CompanyNotFound))` - Company does not exist
    /// - `Err(Error::PortfolioError(ReferenceNotFound))` - Application points at a missing line of business
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn get_applications(&self, company_id: i32) -> Result<Vec<ApplicationDto>, Error> {
        let ctx = RetryContext::new();

        let db = self.db.clone();

        ctx.execute_with_retry(
            &format!("list applications for company ID {}", company_id),
            || {
                let db = db.clone();

                Box::pin(async move {
                    if CompanyRepository::new(&db)
                        .find_by_id(company_id)
                        .await?
                        .is_none()
                    {
                        return Err(PortfolioError::CompanyNotFound(company_id).into());
                    }

                    let lob_names: HashMap<i32, String> = LineOfBusinessRepository::new(&db)
                        .get_all_for_company(company_id)
                        .await?
                        .into_iter()
                        .map(|lob| (lob.id, lob.name))
                        .collect();

                    let applications = ApplicationRepository::new(&db)
                        .get_all_for_company(company_id)
                        .await?;

                    applications
                        .into_iter()
                        .map(|application| -> Result<ApplicationDto, Error> {
                            let line_of_business = lob_names
                                .get(&application.line_of_business_id)
                                .cloned()
                                .ok_or(PortfolioError::ReferenceNotFound {
                                    kind: "Line of business",
                                    id: application.line_of_business_id,
                                })?;

                            Ok(ApplicationDto {
                                id: application.id,
                                name: application.name,
                                description: application.description,
                                application_type: application.application_type.to_value(),
                                status: application.status.to_value(),
                                line_of_business_id: application.line_of_business_id,
                                line_of_business,
                            })
                        })
                        .collect()
                })
            },
        )
        .await
    }
}
