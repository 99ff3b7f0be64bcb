use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use service::dto::{CreateUserRequest, PatchUserRequest, ReplaceUserRequest, UserResponse};

use crate::{errors::JsonApiError, extract::parse_positive_id, state::ServerState};

#[utoipa::path(
    get, path = "/api/users", tag = "users",
    responses(
        (status = 200, description = "All users with their social media", body = [crate::openapi::UserDoc]),
        (status = 500, description = "Storage Failure")
    )
)]
pub async fn list_users(State(state): State<ServerState>) -> Result<Json<Vec<UserResponse>>, JsonApiError> {
    let list = state.users.list_users().await?;
    info!(count = list.len(), "list users");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/api/users/{id}", tag = "users",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::UserDoc),
        (status = 400, description = "Invalid ID"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_user(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Json<UserResponse>, JsonApiError> {
    let id = parse_positive_id(&id)?;
    Ok(Json(state.users.get_user(id).await?))
}

#[utoipa::path(
    post, path = "/api/users", tag = "users",
    request_body = crate::openapi::CreateUserDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::UserDoc),
        (status = 400, description = "Validation Error")
    )
)]
pub async fn create_user(
    State(state): State<ServerState>,
    body: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), JsonApiError> {
    let Json(input) = body?;
    let created = state.users.create_user(input).await?;
    info!(id = created.id, "created user");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    patch, path = "/api/users/{id}", tag = "users",
    params(("id" = i32, Path, description = "User ID")),
    request_body = crate::openapi::PatchUserDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::UserDoc),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn patch_user(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    body: Result<Json<PatchUserRequest>, JsonRejection>,
) -> Result<Json<UserResponse>, JsonApiError> {
    let id = parse_positive_id(&id)?;
    let Json(input) = body?;
    Ok(Json(state.users.patch_user(id, input).await?))
}

#[utoipa::path(
    put, path = "/api/users/{id}", tag = "users",
    params(("id" = i32, Path, description = "User ID")),
    request_body = crate::openapi::CreateUserDoc,
    responses(
        (status = 200, description = "Replaced", body = crate::openapi::UserDoc),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn replace_user(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    body: Result<Json<ReplaceUserRequest>, JsonRejection>,
) -> Result<Json<UserResponse>, JsonApiError> {
    let id = parse_positive_id(&id)?;
    let Json(input) = body?;
    Ok(Json(state.users.replace_user(id, input).await?))
}

#[utoipa::path(
    delete, path = "/api/users/{id}", tag = "users",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Invalid ID"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete_user(State(state): State<ServerState>, Path(id): Path<String>) -> Result<StatusCode, JsonApiError> {
    let id = parse_positive_id(&id)?;
    state.users.delete_user(id).await?;
    info!(id, "deleted user");
    Ok(StatusCode::NO_CONTENT)
}
