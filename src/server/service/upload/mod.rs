//! Spreadsheet upload resolver.
//!
//! An upload is processed in three steps:
//! 1. the first worksheet is read and every data row is parsed into a typed row, a malformed
//!    cell aborts the upload before anything is written;
//! 2. a [`NaturalKeyIndex`] of the company's existing records is loaded;
//! 3. rows are applied in order, each one inside its own database transaction. A failing row is
//!    rolled back and aborts the upload, rows committed before it stay committed.
//!
//! Search documents for the records a row created or updated are pushed to the
//! [`SearchMirror`] once its transaction has committed.

pub mod index;
pub mod resolver;
pub mod row;
pub mod sheet;

use chrono::{NaiveDate, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::company::CompanyRepository,
    error::{portfolio::PortfolioError, upload::UploadError, Error},
    model::upload::UploadSummary,
    search::SearchMirror,
    service::upload::{
        index::NaturalKeyIndex,
        resolver::Resolver,
        row::{FunctionalRow, PortfolioRow, UploadRow},
        sheet::Sheet,
    },
};

/// Spreadsheet layouts accepted by the upload endpoints
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadLayout {
    /// Organizational unit, line of business, business function, capability, process, activity
    FunctionalView,
    /// Organizational unit, line of business, application, technology, expenditure, budget
    AppPortfolio,
}

/// Service applying uploaded workbooks to a company's portfolio.
pub struct UploadService<'a> {
    db: &'a DatabaseConnection,
    search: &'a SearchMirror,
}

impl<'a> UploadService<'a> {
    /// Creates a new instance of UploadService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    /// - `search` - Search mirror receiving documents for created and updated records
    pub fn new(db: &'a DatabaseConnection, search: &'a SearchMirror) -> Self {
        Self { db, search }
    }

    /// Applies a functional view workbook to a company.
    ///
    /// # Arguments
    /// - `company_id` - Company the organization hierarchy belongs to
    /// - `bytes` - Raw xlsx, xls or ods file contents
    ///
    /// # Returns
    /// - `Ok(UploadSummary)` - Every row was applied
    /// - `Err(Error::PortfolioError(CompanyNotFound))` - Company does not exist
    /// - `Err(Error::UploadError)` - Workbook unreadable or a row is malformed, nothing was written
    /// - `Err(Error::DbErr)` - A row failed to apply, rows before it remain committed
    pub async fn upload_functional_view(
        &self,
        company_id: i32,
        bytes: Vec<u8>,
    ) -> Result<UploadSummary, Error> {
        self.upload(UploadLayout::FunctionalView, company_id, bytes, Utc::now().date_naive())
            .await
    }

    /// Applies an application portfolio workbook to a company.
    ///
    /// Newly created spend is dated today (UTC). See [`Self::upload_functional_view`] for the
    /// possible results.
    pub async fn upload_app_portfolio(
        &self,
        company_id: i32,
        bytes: Vec<u8>,
    ) -> Result<UploadSummary, Error> {
        self.upload(UploadLayout::AppPortfolio, company_id, bytes, Utc::now().date_naive())
            .await
    }

    /// Applies a workbook of the given layout, dating newly created spend `today`.
    pub async fn upload(
        &self,
        layout: UploadLayout,
        company_id: i32,
        bytes: Vec<u8>,
        today: NaiveDate,
    ) -> Result<UploadSummary, Error> {
        if CompanyRepository::new(self.db)
            .find_by_id(company_id)
            .await?
            .is_none()
        {
            return Err(PortfolioError::CompanyNotFound(company_id).into());
        }

        let rows = parse_rows(layout, bytes)?;

        tracing::info!(
            "Applying {:?} upload of {} rows to company ID {}",
            layout,
            rows.len(),
            company_id
        );

        let mut index = match layout {
            UploadLayout::FunctionalView => {
                NaturalKeyIndex::load_functional_view(self.db, company_id).await?
            }
            UploadLayout::AppPortfolio => {
                NaturalKeyIndex::load_app_portfolio(self.db, company_id).await?
            }
        };

        let mut summary = UploadSummary::default();

        for row in rows.iter() {
            let txn = self.db.begin().await?;

            let result = Resolver::new(&txn, &mut index, company_id, today)
                .apply(row)
                .await;

            let outcome = match result {
                Ok(outcome) => outcome,
                Err(e) => {
                    if let Err(rollback_err) = txn.rollback().await {
                        tracing::error!("Failed to roll back row {}: {}", row.row(), rollback_err);
                    }
                    tracing::warn!(
                        "Aborted {:?} upload for company ID {} at row {} after {} committed rows: {}",
                        layout,
                        company_id,
                        row.row(),
                        summary.rows_processed,
                        e
                    );
                    return Err(e);
                }
            };

            txn.commit().await?;

            self.search.index(outcome.documents).await;
            summary.record(outcome.created, outcome.updated);
        }

        tracing::info!(
            "Finished {:?} upload for company ID {}: {} rows, {} created, {} updated",
            layout,
            company_id,
            summary.rows_processed,
            summary.created,
            summary.updated
        );

        Ok(summary)
    }
}

/// Read and parse every data row of the workbook's first worksheet
pub fn parse_rows(layout: UploadLayout, bytes: Vec<u8>) -> Result<Vec<UploadRow>, UploadError> {
    let sheet = Sheet::open(bytes)?;

    sheet
        .data_rows()
        .map(|row| match layout {
            UploadLayout::FunctionalView => FunctionalRow::parse(&row).map(UploadRow::Functional),
            UploadLayout::AppPortfolio => PortfolioRow::parse(&row).map(UploadRow::Portfolio),
        })
        .collect()
}
