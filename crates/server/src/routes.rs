use axum::{
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod users;
pub mod social_media;

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Routes under `/api`, without middleware. Useful for embedding.
pub fn api_router() -> Router<ServerState> {
    Router::new()
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/:id",
            get(users::get_user)
                .put(users::replace_user)
                .patch(users::patch_user)
                .delete(users::delete_user),
        )
        .route(
            "/users/:user_id/social-media",
            get(social_media::list_social_media).post(social_media::create_social_media),
        )
        .route(
            "/users/:user_id/social-media/:id",
            get(social_media::get_social_media)
                .patch(social_media::update_social_media)
                .delete(social_media::delete_social_media),
        )
}

/// Build the full application router: health, docs and the `/api` surface.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .nest("/api", api_router())
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn app() -> Router {
        build_router(ServerState::in_memory(), CorsLayer::very_permissive())
    }

    async fn status_of(method: &str, uri: &str) -> StatusCode {
        let req = Request::builder().method(method).uri(uri).body(Body::empty()).unwrap();
        app().oneshot(req).await.unwrap().status()
    }

    #[tokio::test]
    async fn health_and_docs_are_served() {
        assert_eq!(status_of("GET", "/health").await, StatusCode::OK);
        assert_eq!(status_of("GET", "/api-docs/openapi.json").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn malformed_ids_are_rejected_before_lookup() {
        assert_eq!(status_of("GET", "/api/users/abc").await, StatusCode::BAD_REQUEST);
        assert_eq!(status_of("DELETE", "/api/users/0").await, StatusCode::BAD_REQUEST);
        assert_eq!(status_of("GET", "/api/users/1/social-media/x").await, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_routes_and_methods() {
        assert_eq!(status_of("GET", "/api/nothing").await, StatusCode::NOT_FOUND);
        assert_eq!(status_of("PUT", "/api/users/1/social-media/1").await, StatusCode::METHOD_NOT_ALLOWED);
    }
}
