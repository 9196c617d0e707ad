//! Find-or-create of the records named by one parsed row.
//!
//! Each record is looked up by its natural key in the [`NaturalKeyIndex`]. A match is reused,
//! otherwise the record is created under the parent resolved just before it. Matched
//! organizational units, lines of business and business functions take over the row's employee
//! when it differs from the stored one, and matched spend and budget records take over a
//! differing amount. Nothing is ever deleted.

use chrono::NaiveDate;
use entity::sea_orm_active_enums::CurrencySuccessor;
use sea_orm::ConnectionTrait;

use crate::{
    model::search::SearchKind,
    server::{
        data::{
            employee::EmployeeRepository,
            organization::{
                activity::ActivityRepository, business_function::BusinessFunctionRepository,
                business_process::BusinessProcessRepository, capability::CapabilityRepository,
                line_of_business::LineOfBusinessRepository,
                organizational_unit::OrganizationalUnitRepository,
            },
            portfolio::{
                application::ApplicationRepository, budget::BudgetRepository,
                expenditure::ExpenditureRepository, spend::SpendRepository,
                technology::TechnologyRepository, technology_stack::TechnologyStackRepository,
            },
        },
        error::{portfolio::PortfolioError, Error},
        model::{
            db::{
                ApplicationModel, BusinessFunctionModel, LineOfBusinessModel,
                OrganizationalUnitModel,
            },
            spend::{technology_expenditure_type, SpendTarget},
        },
        search::SearchDocument,
        service::upload::{
            index::NaturalKeyIndex,
            row::{BudgetCells, EmployeeCell, FunctionalRow, Managed, PortfolioRow, UploadRow},
        },
    },
};

/// What applying one row changed
#[derive(Debug, Default)]
pub struct RowOutcome {
    pub created: usize,
    pub updated: usize,
    /// Mirrored records created or updated by the row
    pub documents: Vec<SearchDocument>,
}

pub struct Resolver<'a, C: ConnectionTrait> {
    db: &'a C,
    index: &'a mut NaturalKeyIndex,
    company_id: i32,
    /// Date stamped on newly created spend
    today: NaiveDate,
    outcome: RowOutcome,
}

impl<'a, C: ConnectionTrait> Resolver<'a, C> {
    pub fn new(db: &'a C, index: &'a mut NaturalKeyIndex, company_id: i32, today: NaiveDate) -> Self {
        Self {
            db,
            index,
            company_id,
            today,
            outcome: RowOutcome::default(),
        }
    }

    pub async fn apply(self, row: &UploadRow) -> Result<RowOutcome, Error> {
        match row {
            UploadRow::Functional(row) => self.apply_functional_row(row).await,
            UploadRow::Portfolio(row) => self.apply_portfolio_row(row).await,
        }
    }

    /// Organizational unit → line of business → business function → capability
    /// → business process → activity
    pub async fn apply_functional_row(mut self, row: &FunctionalRow) -> Result<RowOutcome, Error> {
        let organizational_unit = self
            .resolve_organizational_unit(&row.organizational_unit)
            .await?;
        let line_of_business = self
            .resolve_line_of_business(organizational_unit.id, &row.line_of_business)
            .await?;
        let business_function = self
            .resolve_business_function(line_of_business.id, row)
            .await?;

        let capability_id = match self.index.capability(&row.capability) {
            Some(capability) => capability.id,
            None => {
                let capability = CapabilityRepository::new(self.db)
                    .create(business_function.id, row.capability.clone())
                    .await?;
                tracing::debug!("Created capability {:?} with ID {}", capability.description, capability.id);

                self.outcome.created += 1;
                let id = capability.id;
                self.index.put_capability(capability);
                id
            }
        };

        let Some(cells) = &row.process else {
            return Ok(self.outcome);
        };

        let process_id = match self.index.business_process(&cells.process.name) {
            Some(process) => process.id,
            None => {
                let process = BusinessProcessRepository::new(self.db)
                    .create(capability_id, cells.process.clone())
                    .await?;
                tracing::debug!("Created business process {:?} with ID {}", process.name, process.id);

                self.outcome.created += 1;
                let id = process.id;
                self.index.put_business_process(process);
                id
            }
        };

        if let Some((name, resources_required)) = &cells.activity {
            if self.index.activity(name).is_none() {
                let activity = ActivityRepository::new(self.db)
                    .create(process_id, name.clone(), *resources_required)
                    .await?;
                tracing::debug!("Created activity {:?} with ID {}", activity.name, activity.id);

                self.outcome.created += 1;
                self.index.put_activity(activity);
            }
        }

        Ok(self.outcome)
    }

    /// Organizational unit → line of business → application → technology stack → technology
    /// → technology spend → expenditure → expenditure spend → budget
    pub async fn apply_portfolio_row(mut self, row: &PortfolioRow) -> Result<RowOutcome, Error> {
        let organizational_unit = self
            .resolve_organizational_unit(&row.organizational_unit)
            .await?;
        let line_of_business = self
            .resolve_line_of_business(organizational_unit.id, &row.line_of_business)
            .await?;
        let application = self.resolve_application(line_of_business.id, row).await?;

        if let Some(cells) = &row.technology {
            let (stack_id, stack_type) = match self
                .index
                .technology_stack(&cells.stack_name, &cells.stack_type)
            {
                Some(stack) => (stack.id, stack.stack_type.clone()),
                None => {
                    let stack = TechnologyStackRepository::new(self.db)
                        .create(cells.stack_name.clone(), cells.stack_type.clone())
                        .await?;
                    tracing::debug!("Created technology stack {:?} with ID {}", stack.name, stack.id);

                    self.outcome.created += 1;
                    self.outcome.documents.push(SearchDocument::new(
                        SearchKind::TechnologyStack,
                        stack.id,
                        stack.name.clone(),
                    ));
                    let resolved = (stack.id, stack.stack_type.clone());
                    self.index.put_technology_stack(stack);
                    resolved
                }
            };

            let technology_id = match self.index.technology(application.id, stack_id) {
                Some(technology) => technology.id,
                None => {
                    let technology = TechnologyRepository::new(self.db)
                        .create(application.id, stack_id)
                        .await?;
                    tracing::debug!("Created technology with ID {}", technology.id);

                    self.outcome.created += 1;
                    let id = technology.id;
                    self.index.put_technology(technology);
                    id
                }
            };

            if let Some((amount, successor)) = cells.spend {
                self.upsert_spend(
                    SpendTarget::Technology(technology_id),
                    technology_expenditure_type(&stack_type),
                    amount,
                    successor,
                )
                .await?;
            }
        }

        if let Some(cells) = &row.expenditure {
            let expenditure_id = match self
                .index
                .expenditure(application.id, &cells.expenditure_type)
            {
                Some(expenditure) => expenditure.id,
                None => {
                    let expenditure = ExpenditureRepository::new(self.db)
                        .create(application.id, cells.clone())
                        .await?;
                    tracing::debug!(
                        "Created expenditure {:?} with ID {}",
                        expenditure.expenditure_type,
                        expenditure.id
                    );

                    self.outcome.created += 1;
                    let id = expenditure.id;
                    self.index.put_expenditure(expenditure);
                    id
                }
            };

            if let Some((amount, successor)) = row.expenditure_spend {
                self.upsert_spend(
                    SpendTarget::Expenditure(expenditure_id),
                    &cells.expenditure_type,
                    amount,
                    successor,
                )
                .await?;
            }
        }

        if let Some(budget) = row.budget_to_apply() {
            self.upsert_budget(application.id, budget).await?;
        }

        Ok(self.outcome)
    }

    /// Find or create an employee by external id, `None` when the row names nobody
    async fn resolve_employee(&mut self, employee: Option<&EmployeeCell>) -> Result<Option<i32>, Error> {
        let Some(employee) = employee else {
            return Ok(None);
        };

        if let Some(existing) = self.index.employee(&employee.employee_id) {
            return Ok(Some(existing.id));
        }

        let created = EmployeeRepository::new(self.db)
            .create(employee.employee_id.clone(), employee.name.clone())
            .await?;
        tracing::debug!("Created employee {:?} with ID {}", created.employee_id, created.id);

        self.outcome.created += 1;
        let id = created.id;
        self.index.put_employee(created);

        Ok(Some(id))
    }

    async fn resolve_organizational_unit(
        &mut self,
        cells: &Managed,
    ) -> Result<OrganizationalUnitModel, Error> {
        let employee_id = self.resolve_employee(cells.employee.as_ref()).await?;
        let repo = OrganizationalUnitRepository::new(self.db);

        let (model, changed) = match self.index.organizational_unit(&cells.name).cloned() {
            Some(existing) if employee_id.is_some() && existing.employee_id != employee_id => {
                let updated = repo
                    .update_employee(existing.id, employee_id)
                    .await?
                    .ok_or(PortfolioError::ReferenceNotFound {
                        kind: "Organizational unit",
                        id: existing.id,
                    })?;
                self.outcome.updated += 1;
                (updated, true)
            }
            Some(existing) => (existing, false),
            None => {
                let created = repo
                    .create(self.company_id, cells.name.clone(), employee_id)
                    .await?;
                tracing::debug!("Created organizational unit {:?} with ID {}", created.name, created.id);
                self.outcome.created += 1;
                (created, true)
            }
        };

        if changed {
            self.outcome.documents.push(SearchDocument::new(
                SearchKind::OrganizationalUnit,
                model.id,
                model.name.clone(),
            ));
            self.index.put_organizational_unit(model.clone());
        }

        Ok(model)
    }

    async fn resolve_line_of_business(
        &mut self,
        organizational_unit_id: i32,
        cells: &Managed,
    ) -> Result<LineOfBusinessModel, Error> {
        let employee_id = self.resolve_employee(cells.employee.as_ref()).await?;
        let repo = LineOfBusinessRepository::new(self.db);

        let (model, changed) = match self.index.line_of_business(&cells.name).cloned() {
            Some(existing) if employee_id.is_some() && existing.employee_id != employee_id => {
                let updated = repo
                    .update_employee(existing.id, employee_id)
                    .await?
                    .ok_or(PortfolioError::ReferenceNotFound {
                        kind: "Line of business",
                        id: existing.id,
                    })?;
                self.outcome.updated += 1;
                (updated, true)
            }
            Some(existing) => (existing, false),
            None => {
                let created = repo
                    .create(organizational_unit_id, cells.name.clone(), employee_id)
                    .await?;
                tracing::debug!("Created line of business {:?} with ID {}", created.name, created.id);
                self.outcome.created += 1;
                (created, true)
            }
        };

        if changed {
            self.outcome.documents.push(SearchDocument::new(
                SearchKind::LineOfBusiness,
                model.id,
                model.name.clone(),
            ));
            self.index.put_line_of_business(model.clone());
        }

        Ok(model)
    }

    async fn resolve_business_function(
        &mut self,
        line_of_business_id: i32,
        row: &FunctionalRow,
    ) -> Result<BusinessFunctionModel, Error> {
        let cells = &row.business_function;
        let employee_id = self.resolve_employee(cells.employee.as_ref()).await?;
        let repo = BusinessFunctionRepository::new(self.db);

        let (model, changed) = match self.index.business_function(&cells.name).cloned() {
            Some(existing) if employee_id.is_some() && existing.employee_id != employee_id => {
                let updated = repo
                    .update_employee(existing.id, employee_id)
                    .await?
                    .ok_or(PortfolioError::ReferenceNotFound {
                        kind: "Business function",
                        id: existing.id,
                    })?;
                self.outcome.updated += 1;
                (updated, true)
            }
            Some(existing) => (existing, false),
            None => {
                let created = repo
                    .create(
                        line_of_business_id,
                        cells.name.clone(),
                        row.function_type,
                        employee_id,
                    )
                    .await?;
                tracing::debug!("Created business function {:?} with ID {}", created.name, created.id);
                self.outcome.created += 1;
                (created, true)
            }
        };

        if changed {
            self.outcome.documents.push(SearchDocument::new(
                SearchKind::BusinessFunction,
                model.id,
                model.name.clone(),
            ));
            self.index.put_business_function(model.clone());
        }

        Ok(model)
    }

    async fn resolve_application(
        &mut self,
        line_of_business_id: i32,
        row: &PortfolioRow,
    ) -> Result<ApplicationModel, Error> {
        if let Some(existing) = self.index.application(&row.application.name) {
            return Ok(existing.clone());
        }

        let created = ApplicationRepository::new(self.db)
            .create(line_of_business_id, row.application.clone())
            .await?;
        tracing::debug!("Created application {:?} with ID {}", created.name, created.id);

        self.outcome.created += 1;
        self.outcome.documents.push(SearchDocument::new(
            SearchKind::Application,
            created.id,
            created.name.clone(),
        ));
        self.index.put_application(created.clone());

        Ok(created)
    }

    /// Spend keeps its original `date_of_update` when only the amount changes
    async fn upsert_spend(
        &mut self,
        target: SpendTarget,
        expenditure_type: &str,
        amount: f64,
        successor: CurrencySuccessor,
    ) -> Result<(), Error> {
        let repo = SpendRepository::new(self.db);

        let spend = match self.index.spend(target, expenditure_type) {
            Some(existing) if existing.amount == amount => return Ok(()),
            Some(existing) => {
                let id = existing.id;
                self.outcome.updated += 1;
                repo.update_amount(id, amount, successor)
                    .await?
                    .ok_or(PortfolioError::ReferenceNotFound { kind: "Spend", id })?
            }
            None => {
                let created = repo
                    .create(
                        target,
                        expenditure_type.to_string(),
                        amount,
                        successor,
                        self.today,
                    )
                    .await?;
                tracing::debug!("Created {} spend with ID {} for {:?}", expenditure_type, created.id, target);
                self.outcome.created += 1;
                created
            }
        };

        self.index.put_spend(spend);

        Ok(())
    }

    async fn upsert_budget(&mut self, application_id: i32, cells: &BudgetCells) -> Result<(), Error> {
        let repo = BudgetRepository::new(self.db);

        let budget = match self.index.budget(application_id, cells.year) {
            Some(existing) if existing.amount == cells.amount => return Ok(()),
            Some(existing) => {
                let id = existing.id;
                self.outcome.updated += 1;
                repo.update_amount(id, cells.amount, cells.successor)
                    .await?
                    .ok_or(PortfolioError::ReferenceNotFound { kind: "Budget", id })?
            }
            None => {
                let created = repo
                    .create(application_id, cells.year, cells.amount, cells.successor)
                    .await?;
                tracing::debug!("Created {} budget with ID {}", cells.year, created.id);
                self.outcome.created += 1;
                created
            }
        };

        self.index.put_budget(budget);

        Ok(())
    }
}
