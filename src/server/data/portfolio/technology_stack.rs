use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder,
};

pub struct TechnologyStackRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TechnologyStackRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a technology stack, `name` is the `name-version` composite
    pub async fn create(
        &self,
        name: String,
        stack_type: String,
    ) -> Result<entity::technology_stack::Model, DbErr> {
        let technology_stack = entity::technology_stack::ActiveModel {
            name: ActiveValue::Set(name),
            stack_type: ActiveValue::Set(stack_type),
            ..Default::default()
        };

        technology_stack.insert(self.db).await
    }

    /// Technology stacks are shared by all companies
    pub async fn get_all(&self) -> Result<Vec<entity::technology_stack::Model>, DbErr> {
        entity::prelude::TechnologyStack::find()
            .order_by_asc(entity::technology_stack::Column::Id)
            .all(self.db)
            .await
    }
}
