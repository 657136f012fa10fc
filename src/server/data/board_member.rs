use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

pub struct BoardMemberRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BoardMemberRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<entity::board_member::Model>, DbErr> {
        entity::prelude::BoardMember::find()
            .order_by_asc(entity::board_member::Column::Id)
            .all(self.db)
            .await
    }
}
