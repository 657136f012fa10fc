use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

pub struct MemberRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<entity::member::Model>, DbErr> {
        entity::prelude::Member::find()
            .order_by_asc(entity::member::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::member::Model>, DbErr> {
        entity::prelude::Member::find_by_id(id).one(self.db).await
    }

    /// Deletes a member by id. Returns `false` when no row matched.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Member::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
