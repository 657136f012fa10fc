use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

pub struct DepartmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DepartmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the full seeded lookup set.
    pub async fn get_all(&self) -> Result<Vec<entity::department::Model>, DbErr> {
        entity::prelude::Department::find().all(self.db).await
    }

    /// Checks whether a department id refers to a seeded row.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        Ok(entity::prelude::Department::find_by_id(id)
            .one(self.db)
            .await?
            .is_some())
    }
}
