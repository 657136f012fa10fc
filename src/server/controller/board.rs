use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, board::BoardMemberDto},
    server::{
        data::board_member::BoardMemberRepository, error::AppError,
        model::member::board_member_into_dto, state::AppState,
    },
};

/// Tag for grouping board endpoints in OpenAPI documentation
pub static BOARD_TAG: &str = "board";

/// Get the club's high board. Returns a bare array, matching the public
/// board page's expectations.
#[utoipa::path(
    get,
    path = "/api/board",
    tag = BOARD_TAG,
    responses(
        (status = 200, description = "All board members", body = Vec<BoardMemberDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_board(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let repo = BoardMemberRepository::new(&state.db);

    let board: Vec<BoardMemberDto> = repo
        .get_all()
        .await?
        .into_iter()
        .map(board_member_into_dto)
        .collect();

    Ok(Json(board))
}
