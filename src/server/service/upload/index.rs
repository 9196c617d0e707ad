//! Natural-key lookup tables for one upload.
//!
//! The index is loaded once before the first row is applied and kept current as rows create
//! records. Company-scoped names are matched case-insensitively after trimming. Records are
//! loaded in id order and later inserts replace earlier ones, so when stored data already holds
//! duplicate keys the record with the highest id wins.

use std::collections::HashMap;

use entity::sea_orm_active_enums::SpendTargetKind;
use sea_orm::{ConnectionTrait, DbErr};

use crate::server::{
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
    model::{
        db::{
            ActivityModel, ApplicationModel, BudgetModel, BusinessFunctionModel,
            BusinessProcessModel, CapabilityModel, EmployeeModel, ExpenditureModel,
            LineOfBusinessModel, OrganizationalUnitModel, SpendModel, TechnologyModel,
            TechnologyStackModel,
        },
        spend::SpendTarget,
    },
};

/// Normalized form of a name used as a natural key
pub fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

#[derive(Default)]
pub struct NaturalKeyIndex {
    employees: HashMap<String, EmployeeModel>,
    organizational_units: HashMap<String, OrganizationalUnitModel>,
    lines_of_business: HashMap<String, LineOfBusinessModel>,
    business_functions: HashMap<String, BusinessFunctionModel>,
    capabilities: HashMap<String, CapabilityModel>,
    business_processes: HashMap<String, BusinessProcessModel>,
    activities: HashMap<String, ActivityModel>,
    applications: HashMap<String, ApplicationModel>,
    technology_stacks: HashMap<(String, String), TechnologyStackModel>,
    technologies: HashMap<(i32, i32), TechnologyModel>,
    expenditures: HashMap<(i32, String), ExpenditureModel>,
    spends: HashMap<(SpendTarget, String), SpendModel>,
    budgets: HashMap<(i32, i32), BudgetModel>,
}

impl NaturalKeyIndex {
    /// Load the records a functional view upload for `company_id` resolves against
    pub async fn load_functional_view<C: ConnectionTrait>(
        db: &C,
        company_id: i32,
    ) -> Result<Self, DbErr> {
        let mut index = Self::load_organization(db, company_id).await?;

        for model in BusinessFunctionRepository::new(db)
            .get_all_for_company(company_id)
            .await?
        {
            index.put_business_function(model);
        }
        for model in CapabilityRepository::new(db)
            .get_all_for_company(company_id)
            .await?
        {
            index.put_capability(model);
        }
        for model in BusinessProcessRepository::new(db)
            .get_all_for_company(company_id)
            .await?
        {
            index.put_business_process(model);
        }
        for model in ActivityRepository::new(db)
            .get_all_for_company(company_id)
            .await?
        {
            index.put_activity(model);
        }

        Ok(index)
    }

    /// Load the records an application portfolio upload for `company_id` resolves against
    pub async fn load_app_portfolio<C: ConnectionTrait>(
        db: &C,
        company_id: i32,
    ) -> Result<Self, DbErr> {
        let mut index = Self::load_organization(db, company_id).await?;

        for model in ApplicationRepository::new(db)
            .get_all_for_company(company_id)
            .await?
        {
            index.put_application(model);
        }
        for model in TechnologyStackRepository::new(db).get_all().await? {
            index.put_technology_stack(model);
        }

        let technologies = TechnologyRepository::new(db)
            .get_all_for_company(company_id)
            .await?;
        let expenditures = ExpenditureRepository::new(db)
            .get_all_for_company(company_id)
            .await?;

        let spend_repo = SpendRepository::new(db);
        let mut spends = spend_repo
            .get_all_for_targets(
                SpendTargetKind::Technology,
                technologies.iter().map(|t| t.id).collect(),
            )
            .await?;
        spends.extend(
            spend_repo
                .get_all_for_targets(
                    SpendTargetKind::Expenditure,
                    expenditures.iter().map(|e| e.id).collect(),
                )
                .await?,
        );
        spends.sort_by_key(|spend| spend.id);

        for model in technologies {
            index.put_technology(model);
        }
        for model in expenditures {
            index.put_expenditure(model);
        }
        for model in spends {
            index.put_spend(model);
        }
        for model in BudgetRepository::new(db)
            .get_all_for_company(company_id)
            .await?
        {
            index.put_budget(model);
        }

        Ok(index)
    }

    async fn load_organization<C: ConnectionTrait>(db: &C, company_id: i32) -> Result<Self, DbErr> {
        let mut index = Self::default();

        for model in EmployeeRepository::new(db).get_all().await? {
            index.put_employee(model);
        }
        for model in OrganizationalUnitRepository::new(db)
            .get_all_for_company(company_id)
            .await?
        {
            index.put_organizational_unit(model);
        }
        for model in LineOfBusinessRepository::new(db)
            .get_all_for_company(company_id)
            .await?
        {
            index.put_line_of_business(model);
        }

        Ok(index)
    }

    /// Employees are matched on their exact external id
    pub fn employee(&self, employee_id: &str) -> Option<&EmployeeModel> {
        self.employees.get(employee_id.trim())
    }

    pub fn put_employee(&mut self, model: EmployeeModel) {
        self.employees
            .insert(model.employee_id.trim().to_string(), model);
    }

    pub fn organizational_unit(&self, name: &str) -> Option<&OrganizationalUnitModel> {
        self.organizational_units.get(&name_key(name))
    }

    pub fn put_organizational_unit(&mut self, model: OrganizationalUnitModel) {
        self.organizational_units.insert(name_key(&model.name), model);
    }

    pub fn line_of_business(&self, name: &str) -> Option<&LineOfBusinessModel> {
        self.lines_of_business.get(&name_key(name))
    }

    pub fn put_line_of_business(&mut self, model: LineOfBusinessModel) {
        self.lines_of_business.insert(name_key(&model.name), model);
    }

    pub fn business_function(&self, name: &str) -> Option<&BusinessFunctionModel> {
        self.business_functions.get(&name_key(name))
    }

    pub fn put_business_function(&mut self, model: BusinessFunctionModel) {
        self.business_functions.insert(name_key(&model.name), model);
    }

    pub fn capability(&self, description: &str) -> Option<&CapabilityModel> {
        self.capabilities.get(&name_key(description))
    }

    pub fn put_capability(&mut self, model: CapabilityModel) {
        self.capabilities
            .insert(name_key(&model.description), model);
    }

    pub fn business_process(&self, name: &str) -> Option<&BusinessProcessModel> {
        self.business_processes.get(&name_key(name))
    }

    pub fn put_business_process(&mut self, model: BusinessProcessModel) {
        self.business_processes.insert(name_key(&model.name), model);
    }

    pub fn activity(&self, name: &str) -> Option<&ActivityModel> {
        self.activities.get(&name_key(name))
    }

    pub fn put_activity(&mut self, model: ActivityModel) {
        self.activities.insert(name_key(&model.name), model);
    }

    pub fn application(&self, name: &str) -> Option<&ApplicationModel> {
        self.applications.get(&name_key(name))
    }

    pub fn put_application(&mut self, model: ApplicationModel) {
        self.applications.insert(name_key(&model.name), model);
    }

    /// Stacks are keyed globally on the `name-version` composite and the stack type
    pub fn technology_stack(&self, name: &str, stack_type: &str) -> Option<&TechnologyStackModel> {
        self.technology_stacks
            .get(&(name_key(name), name_key(stack_type)))
    }

    pub fn put_technology_stack(&mut self, model: TechnologyStackModel) {
        self.technology_stacks.insert(
            (name_key(&model.name), name_key(&model.stack_type)),
            model,
        );
    }

    pub fn technology(&self, application_id: i32, stack_id: i32) -> Option<&TechnologyModel> {
        self.technologies.get(&(application_id, stack_id))
    }

    pub fn put_technology(&mut self, model: TechnologyModel) {
        self.technologies
            .insert((model.application_id, model.technology_stack_id), model);
    }

    pub fn expenditure(
        &self,
        application_id: i32,
        expenditure_type: &str,
    ) -> Option<&ExpenditureModel> {
        self.expenditures
            .get(&(application_id, name_key(expenditure_type)))
    }

    pub fn put_expenditure(&mut self, model: ExpenditureModel) {
        self.expenditures.insert(
            (model.application_id, name_key(&model.expenditure_type)),
            model,
        );
    }

    pub fn spend(&self, target: SpendTarget, expenditure_type: &str) -> Option<&SpendModel> {
        self.spends.get(&(target, name_key(expenditure_type)))
    }

    pub fn put_spend(&mut self, model: SpendModel) {
        self.spends.insert(
            (SpendTarget::from(&model), name_key(&model.expenditure_type)),
            model,
        );
    }

    pub fn budget(&self, application_id: i32, year: i32) -> Option<&BudgetModel> {
        self.budgets.get(&(application_id, year))
    }

    pub fn put_budget(&mut self, model: BudgetModel) {
        self.budgets.insert((model.application_id, model.year), model);
    }
}
