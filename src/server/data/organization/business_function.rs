use entity::sea_orm_active_enums::BusinessFunctionType;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

pub struct BusinessFunctionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BusinessFunctionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        line_of_business_id: i32,
        name: String,
        function_type: BusinessFunctionType,
        employee_id: Option<i32>,
    ) -> Result<entity::business_function::Model, DbErr> {
        let business_function = entity::business_function::ActiveModel {
            name: ActiveValue::Set(name),
            function_type: ActiveValue::Set(function_type),
            line_of_business_id: ActiveValue::Set(line_of_business_id),
            employee_id: ActiveValue::Set(employee_id),
            ..Default::default()
        };

        business_function.insert(self.db).await
    }

    pub async fn get_all_for_company(
        &self,
        company_id: i32,
    ) -> Result<Vec<entity::business_function::Model>, DbErr> {
        entity::prelude::BusinessFunction::find()
            .join(
                JoinType::InnerJoin,
                entity::business_function::Relation::LineOfBusiness.def(),
            )
            .join(
                JoinType::InnerJoin,
                entity::line_of_business::Relation::OrganizationalUnit.def(),
            )
            .filter(entity::organizational_unit::Column::CompanyId.eq(company_id))
            .order_by_asc(entity::business_function::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::business_function::Model>, DbErr> {
        entity::prelude::BusinessFunction::find()
            .order_by_asc(entity::business_function::Column::Id)
            .all(self.db)
            .await
    }

    /// Returns `None` if the business function does not exist.
    pub async fn update_employee(
        &self,
        id: i32,
        employee_id: Option<i32>,
    ) -> Result<Option<entity::business_function::Model>, DbErr> {
        let Some(business_function) = entity::prelude::BusinessFunction::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut business_function = business_function.into_active_model();
        business_function.employee_id = ActiveValue::Set(employee_id);

        Ok(Some(business_function.update(self.db).await?))
    }
}
