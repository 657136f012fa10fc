//! Error types and HTTP response handling.
//!
//! Provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. `AppError` is the top-level error
//! type; it implements `IntoResponse` so handlers can simply return
//! `Result<_, AppError>`.

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::config::ConfigError};

/// Top-level application error type.
///
/// Wrapped infrastructure errors (database, I/O, multipart decoding) map to
/// 500 with details logged server-side only; the named variants carry the
/// client-facing message for the 4xx family.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Filesystem error while persisting an uploaded schedule.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Malformed multipart body on the upload variant of create.
    #[error(transparent)]
    MultipartErr(#[from] axum::extract::multipart::MultipartError),

    /// Resource not found. Results in 404 with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request. Results in 400 with the provided message.
    #[error("{0}")]
    BadRequest(String),

    /// Unique-key collision (duplicate university id). Results in 409.
    #[error("{0}")]
    Conflict(String),

    /// Internal error with custom message. The message is logged but a
    /// generic body is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For `Conflict`
/// - 500 Internal Server Error - For everything else, with the detail logged
///   server-side and withheld from the body
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto::new(msg))).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(msg))).into_response()
            }
            Self::Conflict(msg) => {
                (StatusCode::CONFLICT, Json(ErrorDto::new(msg))).into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto::new("Internal server error")),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 response.
///
/// Logs the full error message for debugging but returns a generic body so
/// store errors never reach the client verbatim.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("Internal server error")),
        )
            .into_response()
    }
}
