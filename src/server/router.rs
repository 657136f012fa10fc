use axum::Router;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{application, board, member},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(info(
    title = "MSP Club Application Portal API",
    description = "Membership application submission and administration"
))]
struct ApiDoc;

/// Builds the API router. Everything not matched here falls through to the
/// Dioxus front-end router, which serves the client bundle and its
/// client-side routes.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            application::create_application,
            application::get_all_applications
        ))
        .routes(routes!(application::update_application_status))
        .routes(routes!(application::delete_application))
        .routes(routes!(board::get_board))
        .routes(routes!(member::get_all_members))
        .routes(routes!(member::get_member, member::delete_member))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(CorsLayer::permissive())
}
