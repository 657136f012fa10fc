use sea_orm_migration::prelude::*;

use super::m20260801_000001_create_department_table::Department;

/// Names inserted in this exact order so the generated ids line up with the
/// fixed department mapping the client ships (1 = Software Development, ...).
const DEPARTMENT_NAMES: [&str; 6] = [
    "Software Development",
    "Technical Training",
    "Media & Content Creation",
    "Public Relations",
    "Human Resources",
    "Event Planning",
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert()
            .into_table(Department::Table)
            .columns([Department::Name])
            .to_owned();

        for name in DEPARTMENT_NAMES {
            insert.values_panic([name.into()]);
        }

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(Query::delete().from_table(Department::Table).to_owned())
            .await
    }
}
