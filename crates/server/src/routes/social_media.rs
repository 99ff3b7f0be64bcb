use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use service::dto::{CreateSocialMediaRequest, PatchSocialMediaRequest, SocialMediaResponse};

use crate::{errors::JsonApiError, extract::parse_positive_id, state::ServerState};

#[utoipa::path(
    get, path = "/api/users/{userId}/social-media", tag = "social-media",
    params(("userId" = i32, Path, description = "Owner user ID")),
    responses(
        (status = 200, description = "Entries owned by the user", body = [crate::openapi::SocialMediaDoc]),
        (status = 400, description = "Invalid ID")
    )
)]
pub async fn list_social_media(
    State(state): State<ServerState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<SocialMediaResponse>>, JsonApiError> {
    let user_id = parse_positive_id(&user_id)?;
    let list = state.social_media.list_for_user(user_id).await?;
    info!(user_id, count = list.len(), "list social media");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/api/users/{userId}/social-media/{id}", tag = "social-media",
    params(
        ("userId" = i32, Path, description = "Owner user ID"),
        ("id" = i32, Path, description = "Social media ID")
    ),
    responses(
        (status = 200, description = "OK", body = crate::openapi::SocialMediaDoc),
        (status = 400, description = "Invalid ID"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_social_media(
    State(state): State<ServerState>,
    Path((user_id, id)): Path<(String, String)>,
) -> Result<Json<SocialMediaResponse>, JsonApiError> {
    let user_id = parse_positive_id(&user_id)?;
    let id = parse_positive_id(&id)?;
    Ok(Json(state.social_media.get_for_user(user_id, id).await?))
}

#[utoipa::path(
    post, path = "/api/users/{userId}/social-media", tag = "social-media",
    params(("userId" = i32, Path, description = "Owner user ID")),
    request_body = crate::openapi::CreateSocialMediaDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::SocialMediaDoc),
        (status = 400, description = "Validation Error or unknown owner")
    )
)]
pub async fn create_social_media(
    State(state): State<ServerState>,
    Path(user_id): Path<String>,
    body: Result<Json<CreateSocialMediaRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SocialMediaResponse>), JsonApiError> {
    let user_id = parse_positive_id(&user_id)?;
    let Json(input) = body?;
    let created = state.social_media.create_for_user(user_id, input).await?;
    info!(user_id, id = created.id, "created social media");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    patch, path = "/api/users/{userId}/social-media/{id}", tag = "social-media",
    params(
        ("userId" = i32, Path, description = "Owner user ID"),
        ("id" = i32, Path, description = "Social media ID")
    ),
    request_body = crate::openapi::PatchSocialMediaDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::SocialMediaDoc),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update_social_media(
    State(state): State<ServerState>,
    Path((user_id, id)): Path<(String, String)>,
    body: Result<Json<PatchSocialMediaRequest>, JsonRejection>,
) -> Result<Json<SocialMediaResponse>, JsonApiError> {
    let user_id = parse_positive_id(&user_id)?;
    let id = parse_positive_id(&id)?;
    let Json(input) = body?;
    Ok(Json(state.social_media.update_for_user(user_id, id, input).await?))
}

#[utoipa::path(
    delete, path = "/api/users/{userId}/social-media/{id}", tag = "social-media",
    params(
        ("userId" = i32, Path, description = "Owner user ID"),
        ("id" = i32, Path, description = "Social media ID")
    ),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete_social_media(
    State(state): State<ServerState>,
    Path((user_id, id)): Path<(String, String)>,
) -> Result<StatusCode, JsonApiError> {
    let user_id = parse_positive_id(&user_id)?;
    let id = parse_positive_id(&id)?;
    state.social_media.delete_for_user(user_id, id).await?;
    info!(user_id, id, "deleted social media");
    Ok(StatusCode::NO_CONTENT)
}
