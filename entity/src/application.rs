use sea_orm::entity::prelude::*;

/// A submitted membership application.
///
/// `university_id` carries a unique constraint so a duplicate submission
/// fails at the store even if two requests race past the pre-insert check.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "application")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub university_id: String,
    pub full_name: String,
    pub email: String,
    pub faculty: String,
    pub year: i32,
    pub phone_number: String,
    pub first_choice: i32,
    pub second_choice: Option<i32>,
    #[sea_orm(column_type = "Text")]
    pub skills: String,
    #[sea_orm(column_type = "Text")]
    pub motivation: String,
    pub schedule: Option<String>,
    pub status: ApplicationStatus,
    pub created_at: DateTimeUtc,
}

/// Review state of an application. Stored as a short string; the default
/// for new rows is `pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum ApplicationStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "approved")]
    Approved,
    #[sea_orm(string_value = "rejected")]
    Rejected,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::department::Entity",
        from = "Column::FirstChoice",
        to = "super::department::Column::Id"
    )]
    FirstChoiceDepartment,
    #[sea_orm(
        belongs_to = "super::department::Entity",
        from = "Column::SecondChoice",
        to = "super::department::Column::Id"
    )]
    SecondChoiceDepartment,
}

impl Related<super::department::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FirstChoiceDepartment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
