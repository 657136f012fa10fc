use crate::{
    client::model::error::ApiError,
    model::api::MessageDto,
    model::application::{
        ApplicationCreatedDto, ApplicationListDto, ApplicationStatus, CreateApplicationDto,
        StatusUpdatedDto, UpdateStatusDto,
    },
};

use super::helper::{delete, get, parse_response, post, put, send_request, serialize_json};

/// Submit a membership application
pub async fn submit_application(
    payload: &CreateApplicationDto,
) -> Result<ApplicationCreatedDto, ApiError> {
    let body = serialize_json(payload)?;

    let response = send_request(post("/api/applications").body(body)).await?;
    parse_response(response).await
}

/// Get all submitted applications, newest first
pub async fn get_applications() -> Result<ApplicationListDto, ApiError> {
    let response = send_request(get("/api/applications")).await?;
    parse_response(response).await
}

/// Approve or reject an application
pub async fn update_application_status(
    application_id: i32,
    status: ApplicationStatus,
) -> Result<StatusUpdatedDto, ApiError> {
    let url = format!("/api/applications/{}/status", application_id);
    let body = serialize_json(&UpdateStatusDto { status })?;

    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}

/// Delete an application
pub async fn delete_application(application_id: i32) -> Result<MessageDto, ApiError> {
    let url = format!("/api/applications/{}", application_id);

    let response = send_request(delete(&url)).await?;
    parse_response(response).await
}
