use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// One club member row, as returned by the member endpoints.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct MemberDto {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub department_id: Option<i32>,
    pub joined_at: DateTime<Utc>,
}

/// `GET /api/members` envelope.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct MemberListDto {
    pub success: bool,
    pub data: Vec<MemberDto>,
    pub count: usize,
}

/// `GET /api/members/{id}` envelope.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct MemberDetailDto {
    pub success: bool,
    pub data: MemberDto,
}
