use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CreateUserDoc {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct PatchUserDoc {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[derive(ToSchema)]
pub struct CreateSocialMediaDoc {
    pub name: String,
    pub url: String,
}

#[derive(ToSchema)]
pub struct PatchSocialMediaDoc {
    pub name: Option<String>,
    pub url: Option<String>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct SocialMediaDoc {
    pub id: i32,
    pub name: String,
    pub url: String,
    pub user_id: i32,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct UserDoc {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub social_media: Vec<SocialMediaDoc>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::users::list_users,
        crate::routes::users::get_user,
        crate::routes::users::create_user,
        crate::routes::users::patch_user,
        crate::routes::users::replace_user,
        crate::routes::users::delete_user,
        crate::routes::social_media::list_social_media,
        crate::routes::social_media::get_social_media,
        crate::routes::social_media::create_social_media,
        crate::routes::social_media::update_social_media,
        crate::routes::social_media::delete_social_media,
    ),
    components(
        schemas(
            HealthResponse,
            CreateUserDoc,
            PatchUserDoc,
            CreateSocialMediaDoc,
            PatchSocialMediaDoc,
            SocialMediaDoc,
            UserDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "users"),
        (name = "social-media")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_resource_path() {
        let doc = ApiDoc::openapi();
        for path in [
            "/health",
            "/api/users",
            "/api/users/{id}",
            "/api/users/{userId}/social-media",
            "/api/users/{userId}/social-media/{id}",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
