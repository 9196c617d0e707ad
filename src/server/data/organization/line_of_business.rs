use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

pub struct LineOfBusinessRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LineOfBusinessRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        organizational_unit_id: i32,
        name: String,
        employee_id: Option<i32>,
    ) -> Result<entity::line_of_business::Model, DbErr> {
        let line_of_business = entity::line_of_business::ActiveModel {
            name: ActiveValue::Set(name),
            organizational_unit_id: ActiveValue::Set(organizational_unit_id),
            employee_id: ActiveValue::Set(employee_id),
            ..Default::default()
        };

        line_of_business.insert(self.db).await
    }

    /// Lines of business under any organizational unit of the company, ordered by id
    pub async fn get_all_for_company(
        &self,
        company_id: i32,
    ) -> Result<Vec<entity::line_of_business::Model>, DbErr> {
        entity::prelude::LineOfBusiness::find()
            .join(
                JoinType::InnerJoin,
                entity::line_of_business::Relation::OrganizationalUnit.def(),
            )
            .filter(entity::organizational_unit::Column::CompanyId.eq(company_id))
            .order_by_asc(entity::line_of_business::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::line_of_business::Model>, DbErr> {
        entity::prelude::LineOfBusiness::find()
            .order_by_asc(entity::line_of_business::Column::Id)
            .all(self.db)
            .await
    }

    /// Returns `None` if the line of business does not exist.
    pub async fn update_employee(
        &self,
        id: i32,
        employee_id: Option<i32>,
    ) -> Result<Option<entity::line_of_business::Model>, DbErr> {
        let Some(line_of_business) = entity::prelude::LineOfBusiness::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut line_of_business = line_of_business.into_active_model();
        line_of_business.employee_id = ActiveValue::Set(employee_id);

        Ok(Some(line_of_business.update(self.db).await?))
    }
}
