use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a member with default contact details.
pub async fn create_member(
    db: &DatabaseConnection,
    full_name: &str,
) -> Result<entity::member::Model, DbErr> {
    entity::member::ActiveModel {
        full_name: ActiveValue::Set(full_name.to_string()),
        email: ActiveValue::Set("member1234@miuegypt.edu.eg".to_string()),
        department_id: ActiveValue::Set(None),
        joined_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
