pub use sea_orm_migration::prelude::*;

mod m20260801_000001_create_department_table;
mod m20260801_000002_create_application_table;
mod m20260801_000003_create_member_table;
mod m20260801_000004_create_board_member_table;
mod m20260801_000005_seed_departments;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_department_table::Migration),
            Box::new(m20260801_000002_create_application_table::Migration),
            Box::new(m20260801_000003_create_member_table::Migration),
            Box::new(m20260801_000004_create_board_member_table::Migration),
            Box::new(m20260801_000005_seed_departments::Migration),
        ]
    }
}
