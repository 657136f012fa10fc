use axum::{
    extract::{FromRequest, Multipart, Path, Request, State},
    http::{header::CONTENT_TYPE, StatusCode},
    response::IntoResponse,
    Json,
};
use std::collections::HashMap;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        application::{
            ApplicationCreatedDto, ApplicationDto, ApplicationListDto, ApplicationReceiptDto,
            CreateApplicationDto, StatusReceiptDto, StatusUpdatedDto, UpdateStatusDto,
        },
    },
    server::{
        error::AppError,
        model::application::{into_dto, status_to_wire},
        service::application::ApplicationService,
        state::AppState,
    },
};

/// Tag for grouping application endpoints in OpenAPI documentation
pub static APPLICATION_TAG: &str = "application";

/// Submit a new membership application.
///
/// Accepts either a JSON body or, for the upload variant, multipart form
/// data carrying the same fields plus a `schedule` PDF. The PDF is stored
/// under the configured upload directory as
/// `StudentSchedule_{university_id}.pdf`.
///
/// # Returns
/// - `201 Created` - Application stored with status `pending`
/// - `400 Bad Request` - A required field is missing or malformed
/// - `409 Conflict` - An application with this university id already exists
/// - `500 Internal Server Error` - Database or filesystem error
#[utoipa::path(
    post,
    path = "/api/applications",
    tag = APPLICATION_TAG,
    request_body = CreateApplicationDto,
    responses(
        (status = 201, description = "Application submitted successfully", body = ApplicationCreatedDto),
        (status = 400, description = "Missing or malformed field", body = ErrorDto),
        (status = 409, description = "Duplicate university id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_application(
    State(state): State<AppState>,
    request: Request,
) -> Result<impl IntoResponse, AppError> {
    let (dto, schedule_pdf) = parse_create_request(request).await?;

    let service = ApplicationService::new(&state.db);

    let created = service.create(dto, schedule_pdf, &state.upload_dir).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApplicationCreatedDto {
            success: true,
            message: "Application submitted successfully".to_string(),
            data: ApplicationReceiptDto {
                application_id: created.id,
                university_id: created.university_id,
                status: status_to_wire(created.status),
            },
        }),
    ))
}

/// Get all submitted applications, newest first.
///
/// # Returns
/// - `200 OK` - All applications with a total count
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/applications",
    tag = APPLICATION_TAG,
    responses(
        (status = 200, description = "All applications, newest first", body = ApplicationListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_applications(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = ApplicationService::new(&state.db);

    let data: Vec<ApplicationDto> = service.list().await?.into_iter().map(into_dto).collect();
    let count = data.len();

    Ok(Json(ApplicationListDto {
        success: true,
        data,
        count,
    }))
}

/// Update the review status of an application (approve/reject).
///
/// The body deserializes into the closed status set, so an unknown status
/// value is rejected before it reaches the store.
///
/// # Returns
/// - `200 OK` - Status updated
/// - `404 Not Found` - No application matches the id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/applications/{id}/status",
    tag = APPLICATION_TAG,
    params(
        ("id" = i32, Path, description = "Application id")
    ),
    request_body = UpdateStatusDto,
    responses(
        (status = 200, description = "Status updated", body = StatusUpdatedDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_application_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ApplicationService::new(&state.db);

    let updated = service
        .update_status(id, payload.status)
        .await?
        .ok_or_else(|| AppError::NotFound("Application not found".to_string()))?;

    Ok(Json(StatusUpdatedDto {
        success: true,
        message: format!("Application {} successfully", payload.status),
        data: StatusReceiptDto {
            application_id: updated.id,
            status: status_to_wire(updated.status),
        },
    }))
}

/// Delete an application.
///
/// # Returns
/// - `200 OK` - Application removed
/// - `404 Not Found` - No application matches the id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/applications/{id}",
    tag = APPLICATION_TAG,
    params(
        ("id" = i32, Path, description = "Application id")
    ),
    responses(
        (status = 200, description = "Application deleted", body = MessageDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_application(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ApplicationService::new(&state.db);

    if !service.delete(id).await? {
        return Err(AppError::NotFound("Application not found".to_string()));
    }

    Ok(Json(MessageDto::new("Application deleted successfully")))
}

/// Parses the create body, branching on content type: multipart for the
/// upload variant, JSON otherwise. Returns the DTO plus the raw PDF bytes
/// when a schedule file was attached.
async fn parse_create_request(
    request: Request,
) -> Result<(CreateApplicationDto, Option<Vec<u8>>), AppError> {
    let content_type = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    if content_type.starts_with("multipart/form-data") {
        let multipart = Multipart::from_request(request, &())
            .await
            .map_err(|err| AppError::BadRequest(err.body_text()))?;
        parse_multipart(multipart).await
    } else {
        let Json(dto) = Json::<CreateApplicationDto>::from_request(request, &())
            .await
            .map_err(|err| AppError::BadRequest(err.body_text()))?;
        Ok((dto, None))
    }
}

/// Collects multipart text fields into a `CreateApplicationDto` and buffers
/// the `schedule` part, rejecting anything that is not a PDF.
async fn parse_multipart(
    mut multipart: Multipart,
) -> Result<(CreateApplicationDto, Option<Vec<u8>>), AppError> {
    let mut fields: HashMap<String, String> = HashMap::new();
    let mut schedule_pdf = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();

        if name == "schedule" {
            let is_pdf = field
                .content_type()
                .map(|mime| mime == "application/pdf")
                .unwrap_or(false);
            if !is_pdf {
                return Err(AppError::BadRequest(
                    "Only PDF files are allowed for the schedule".to_string(),
                ));
            }
            schedule_pdf = Some(field.bytes().await?.to_vec());
        } else {
            fields.insert(name, field.text().await?);
        }
    }

    let text = |key: &str| fields.get(key).cloned().unwrap_or_default();
    // Missing numeric fields parse to 0 here; the service reports them as
    // missing rather than failing the parse.
    let int = |key: &str| {
        fields
            .get(key)
            .and_then(|value| value.parse::<i32>().ok())
            .unwrap_or(0)
    };

    let dto = CreateApplicationDto {
        university_id: text("university_id"),
        full_name: text("full_name"),
        email: text("email"),
        faculty: text("faculty"),
        year: int("year"),
        phone_number: text("phone_number"),
        first_choice: int("first_choice"),
        second_choice: fields
            .get("second_choice")
            .filter(|value| !value.is_empty())
            .and_then(|value| value.parse().ok()),
        skills: text("skills"),
        motivation: text("motivation"),
        schedule: None,
    };

    Ok((dto, schedule_pdf))
}
