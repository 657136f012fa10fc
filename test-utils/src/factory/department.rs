use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// The fixed department names, in seed order. Inserting them in this order
/// yields the same 1-based ids the production seed migration produces.
pub const DEPARTMENT_NAMES: [&str; 6] = [
    "Software Development",
    "Technical Training",
    "Media & Content Creation",
    "Public Relations",
    "Human Resources",
    "Event Planning",
];

/// Inserts a single department with the given name.
pub async fn create_department(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entity::department::Model, DbErr> {
    entity::department::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Inserts the full fixed department set, mirroring the seed migration.
pub async fn seed_departments(
    db: &DatabaseConnection,
) -> Result<Vec<entity::department::Model>, DbErr> {
    let mut departments = Vec::with_capacity(DEPARTMENT_NAMES.len());
    for name in DEPARTMENT_NAMES {
        departments.push(create_department(db, name).await?);
    }
    Ok(departments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn seeds_departments_with_production_ids() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(Department)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let departments = seed_departments(db).await?;

        assert_eq!(departments.len(), 6);
        assert_eq!(departments[0].id, 1);
        assert_eq!(departments[0].name, "Software Development");
        assert_eq!(departments[5].id, 6);
        assert_eq!(departments[5].name, "Event Planning");

        Ok(())
    }
}
