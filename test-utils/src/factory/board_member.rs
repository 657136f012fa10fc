use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a board member with the given name and position.
pub async fn create_board_member(
    db: &DatabaseConnection,
    full_name: &str,
    position: &str,
) -> Result<entity::board_member::Model, DbErr> {
    entity::board_member::ActiveModel {
        full_name: ActiveValue::Set(full_name.to_string()),
        position: ActiveValue::Set(position.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}
