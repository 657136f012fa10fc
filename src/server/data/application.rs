use chrono::Utc;
use entity::application::ApplicationStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::application::NewApplication;

pub struct ApplicationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApplicationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new application with status `pending` and a server-assigned
    /// creation timestamp.
    pub async fn create(
        &self,
        params: NewApplication,
    ) -> Result<entity::application::Model, DbErr> {
        entity::application::ActiveModel {
            university_id: ActiveValue::Set(params.university_id),
            full_name: ActiveValue::Set(params.full_name),
            email: ActiveValue::Set(params.email),
            faculty: ActiveValue::Set(params.faculty),
            year: ActiveValue::Set(params.year),
            phone_number: ActiveValue::Set(params.phone_number),
            first_choice: ActiveValue::Set(params.first_choice),
            second_choice: ActiveValue::Set(params.second_choice),
            skills: ActiveValue::Set(params.skills),
            motivation: ActiveValue::Set(params.motivation),
            schedule: ActiveValue::Set(params.schedule),
            status: ActiveValue::Set(ApplicationStatus::Pending),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Returns all applications, newest first. Ties on the creation
    /// timestamp fall back to the id so ordering stays deterministic.
    pub async fn get_all(&self) -> Result<Vec<entity::application::Model>, DbErr> {
        entity::prelude::Application::find()
            .order_by_desc(entity::application::Column::CreatedAt)
            .order_by_desc(entity::application::Column::Id)
            .all(self.db)
            .await
    }

    /// Checks whether an application with this university id already exists.
    pub async fn exists_by_university_id(&self, university_id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Application::find()
            .filter(entity::application::Column::UniversityId.eq(university_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Sets the status of an application. Returns `None` when no row matches
    /// the id.
    pub async fn update_status(
        &self,
        id: i32,
        status: ApplicationStatus,
    ) -> Result<Option<entity::application::Model>, DbErr> {
        let Some(application) = entity::prelude::Application::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::application::ActiveModel = application.into();
        active.status = ActiveValue::Set(status);

        Ok(Some(active.update(self.db).await?))
    }

    /// Deletes an application by id. Returns `false` when no row matched.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Application::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
