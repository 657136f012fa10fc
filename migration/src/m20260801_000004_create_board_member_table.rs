use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BoardMember::Table)
                    .if_not_exists()
                    .col(pk_auto(BoardMember::Id))
                    .col(string(BoardMember::FullName))
                    .col(string(BoardMember::Position))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BoardMember::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BoardMember {
    Table,
    Id,
    FullName,
    Position,
}
