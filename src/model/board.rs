use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// One high-board row. `GET /api/board` returns a bare array of these.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct BoardMemberDto {
    pub id: i32,
    pub full_name: String,
    pub position: String,
}
