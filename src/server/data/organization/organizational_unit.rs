use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

pub struct OrganizationalUnitRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrganizationalUnitRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        company_id: i32,
        name: String,
        employee_id: Option<i32>,
    ) -> Result<entity::organizational_unit::Model, DbErr> {
        let organizational_unit = entity::organizational_unit::ActiveModel {
            name: ActiveValue::Set(name),
            company_id: ActiveValue::Set(company_id),
            employee_id: ActiveValue::Set(employee_id),
            ..Default::default()
        };

        organizational_unit.insert(self.db).await
    }

    /// Organizational units of a company ordered by id
    pub async fn get_all_for_company(
        &self,
        company_id: i32,
    ) -> Result<Vec<entity::organizational_unit::Model>, DbErr> {
        entity::prelude::OrganizationalUnit::find()
            .filter(entity::organizational_unit::Column::CompanyId.eq(company_id))
            .order_by_asc(entity::organizational_unit::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::organizational_unit::Model>, DbErr> {
        entity::prelude::OrganizationalUnit::find()
            .order_by_asc(entity::organizational_unit::Column::Id)
            .all(self.db)
            .await
    }

    /// Set the responsible employee
    ///
    /// Returns `None` if the organizational unit does not exist.
    pub async fn update_employee(
        &self,
        id: i32,
        employee_id: Option<i32>,
    ) -> Result<Option<entity::organizational_unit::Model>, DbErr> {
        let Some(organizational_unit) = entity::prelude::OrganizationalUnit::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut organizational_unit = organizational_unit.into_active_model();
        organizational_unit.employee_id = ActiveValue::Set(employee_id);

        Ok(Some(organizational_unit.update(self.db).await?))
    }
}
