//! Declarative test builder for test setup.
//!
//! This module provides the `TestBuilder` API for configuring test environments before
//! execution. Configuration methods are chained and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Tables are created in the order they were added, followed by any queued companies.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_portfolio_tables: bool,

    // (company, organizational unit, line of business) names
    hierarchies: Vec<(String, String, String)>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_portfolio_tables: false,
            hierarchies: Vec::new(),
        }
    }

    /// Add every table of the portfolio schema.
    ///
    /// Creates the company, employee, organization chain and application portfolio tables.
    pub fn with_portfolio_tables(mut self) -> Self {
        self.include_portfolio_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use portfolio_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), portfolio_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Company)
    ///     .with_table(Employee)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a company with one organizational unit and one line of business during `build()`.
    ///
    /// Requires the portfolio tables.
    pub fn with_company_hierarchy(
        mut self,
        company: impl Into<String>,
        organizational_unit: impl Into<String>,
        line_of_business: impl Into<String>,
    ) -> Self {
        self.hierarchies.push((
            company.into(),
            organizational_unit.into(),
            line_of_business.into(),
        ));
        self
    }

    /// Build the test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Database with tables and queued fixtures in place
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_portfolio_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Company),
                schema.create_table_from_entity(entity::prelude::Employee),
                schema.create_table_from_entity(entity::prelude::OrganizationalUnit),
                schema.create_table_from_entity(entity::prelude::LineOfBusiness),
                schema.create_table_from_entity(entity::prelude::BusinessFunction),
                schema.create_table_from_entity(entity::prelude::Capability),
                schema.create_table_from_entity(entity::prelude::BusinessProcess),
                schema.create_table_from_entity(entity::prelude::Activity),
                schema.create_table_from_entity(entity::prelude::Application),
                schema.create_table_from_entity(entity::prelude::TechnologyStack),
                schema.create_table_from_entity(entity::prelude::Technology),
                schema.create_table_from_entity(entity::prelude::Expenditure),
                schema.create_table_from_entity(entity::prelude::Spend),
                schema.create_table_from_entity(entity::prelude::Budget),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for (company, organizational_unit, line_of_business) in self.hierarchies {
            setup
                .portfolio()
                .insert_company_hierarchy(&company, &organizational_unit, &line_of_business)
                .await?;
        }

        Ok(setup)
    }
}
