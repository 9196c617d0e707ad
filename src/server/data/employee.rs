use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

pub struct EmployeeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EmployeeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        employee_id: String,
        name: String,
    ) -> Result<entity::employee::Model, DbErr> {
        let employee = entity::employee::ActiveModel {
            employee_id: ActiveValue::Set(employee_id),
            name: ActiveValue::Set(name),
            ..Default::default()
        };

        employee.insert(self.db).await
    }

    /// Employees are shared across companies, so the full table is returned
    pub async fn get_all(&self) -> Result<Vec<entity::employee::Model>, DbErr> {
        entity::prelude::Employee::find()
            .order_by_asc(entity::employee::Column::Id)
            .all(self.db)
            .await
    }
}
