use sea_orm_migration::{prelude::*, schema::*};

use super::m20260801_000001_create_department_table::Department;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Application::Table)
                    .if_not_exists()
                    .col(pk_auto(Application::Id))
                    .col(string_uniq(Application::UniversityId))
                    .col(string(Application::FullName))
                    .col(string(Application::Email))
                    .col(string(Application::Faculty))
                    .col(integer(Application::Year))
                    .col(string(Application::PhoneNumber))
                    .col(integer(Application::FirstChoice))
                    .col(integer_null(Application::SecondChoice))
                    .col(text(Application::Skills))
                    .col(text(Application::Motivation))
                    .col(string_null(Application::Schedule))
                    .col(string_len(Application::Status, 16).default("pending"))
                    .col(
                        timestamp(Application::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_application_first_choice")
                            .from(Application::Table, Application::FirstChoice)
                            .to(Department::Table, Department::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_application_second_choice")
                            .from(Application::Table, Application::SecondChoice)
                            .to(Department::Table, Department::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Application::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Application {
    Table,
    Id,
    UniversityId,
    FullName,
    Email,
    Faculty,
    Year,
    PhoneNumber,
    FirstChoice,
    SecondChoice,
    Skills,
    Motivation,
    Schedule,
    Status,
    CreatedAt,
}
