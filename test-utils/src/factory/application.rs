use chrono::Utc;
use entity::application::ApplicationStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts an application with defaults for everything but the natural key.
///
/// The referenced department (id 1) must already exist; seed departments
/// first via `factory::department::seed_departments`.
pub async fn create_application(
    db: &DatabaseConnection,
    university_id: &str,
) -> Result<entity::application::Model, DbErr> {
    entity::application::ActiveModel {
        university_id: ActiveValue::Set(university_id.to_string()),
        full_name: ActiveValue::Set("Jane Q Doe".to_string()),
        email: ActiveValue::Set("jane2398765@miuegypt.edu.eg".to_string()),
        faculty: ActiveValue::Set("Computer Science".to_string()),
        year: ActiveValue::Set(1),
        phone_number: ActiveValue::Set("+201012345678".to_string()),
        first_choice: ActiveValue::Set(1),
        second_choice: ActiveValue::Set(None),
        skills: ActiveValue::Set("Rust, public speaking".to_string()),
        motivation: ActiveValue::Set("I want to join the club".to_string()),
        schedule: ActiveValue::Set(None),
        status: ActiveValue::Set(ApplicationStatus::Pending),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_application_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(Department)
            .with_table(Application)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        crate::factory::department::seed_departments(db).await?;

        let application = create_application(db, "2023/37654").await?;

        assert_eq!(application.university_id, "2023/37654");
        assert_eq!(application.status, ApplicationStatus::Pending);
        assert_eq!(application.first_choice, 1);
        assert!(application.second_choice.is_none());

        Ok(())
    }
}
