use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        member::{MemberDetailDto, MemberDto, MemberListDto},
    },
    server::{
        data::member::MemberRepository, error::AppError, model::member::member_into_dto,
        state::AppState,
    },
};

/// Tag for grouping member endpoints in OpenAPI documentation
pub static MEMBER_TAG: &str = "member";

/// Get all club members.
#[utoipa::path(
    get,
    path = "/api/members",
    tag = MEMBER_TAG,
    responses(
        (status = 200, description = "All members with a total count", body = MemberListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_members(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let repo = MemberRepository::new(&state.db);

    let data: Vec<MemberDto> = repo
        .get_all()
        .await?
        .into_iter()
        .map(member_into_dto)
        .collect();
    let count = data.len();

    Ok(Json(MemberListDto {
        success: true,
        data,
        count,
    }))
}

/// Get a single member by id.
#[utoipa::path(
    get,
    path = "/api/members/{id}",
    tag = MEMBER_TAG,
    params(
        ("id" = i32, Path, description = "Member id")
    ),
    responses(
        (status = 200, description = "The requested member", body = MemberDetailDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_member(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let repo = MemberRepository::new(&state.db);

    let member = repo
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Member not found".to_string()))?;

    Ok(Json(MemberDetailDto {
        success: true,
        data: member_into_dto(member),
    }))
}

/// Delete a member.
#[utoipa::path(
    delete,
    path = "/api/members/{id}",
    tag = MEMBER_TAG,
    params(
        ("id" = i32, Path, description = "Member id")
    ),
    responses(
        (status = 200, description = "Member deleted", body = MessageDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_member(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let repo = MemberRepository::new(&state.db);

    if !repo.delete(id).await? {
        return Err(AppError::NotFound("Member not found".to_string()));
    }

    Ok(Json(MessageDto::new("Member deleted successfully")))
}
