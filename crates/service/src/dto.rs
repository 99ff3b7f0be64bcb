//! Request and response shapes exchanged with API clients (camelCase JSON).

use serde::{Deserialize, Serialize};

use models::{social_media, user};

use crate::domain::{NewSocialMedia, NewUser, SocialMediaChanges, UserChanges};
use crate::errors::ServiceError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
}

/// Full replacement carries the same required fields as creation.
pub type ReplaceUserRequest = CreateUserRequest;

impl CreateUserRequest {
    pub fn validate(&self) -> Result<(), ServiceError> {
        user::validate_first_name(&self.first_name)?;
        user::validate_last_name(&self.last_name)?;
        user::validate_phone(&self.phone)?;
        user::validate_email(&self.email)?;
        Ok(())
    }
}

impl From<CreateUserRequest> for NewUser {
    fn from(r: CreateUserRequest) -> Self {
        Self { first_name: r.first_name, last_name: r.last_name, phone: r.phone, email: r.email }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PatchUserRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl PatchUserRequest {
    /// Only supplied fields are checked, with the same rules as creation.
    pub fn validate(&self) -> Result<(), ServiceError> {
        if let Some(v) = &self.first_name { user::validate_first_name(v)?; }
        if let Some(v) = &self.last_name { user::validate_last_name(v)?; }
        if let Some(v) = &self.phone { user::validate_phone(v)?; }
        if let Some(v) = &self.email { user::validate_email(v)?; }
        Ok(())
    }
}

impl From<PatchUserRequest> for UserChanges {
    fn from(r: PatchUserRequest) -> Self {
        Self { first_name: r.first_name, last_name: r.last_name, phone: r.phone, email: r.email }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSocialMediaRequest {
    pub name: String,
    pub url: String,
}

impl CreateSocialMediaRequest {
    pub fn validate(&self) -> Result<(), ServiceError> {
        social_media::validate_name(&self.name)?;
        social_media::validate_url(&self.url)?;
        Ok(())
    }
}

impl From<CreateSocialMediaRequest> for NewSocialMedia {
    fn from(r: CreateSocialMediaRequest) -> Self { Self { name: r.name, url: r.url } }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatchSocialMediaRequest {
    pub name: Option<String>,
    pub url: Option<String>,
}

impl PatchSocialMediaRequest {
    pub fn validate(&self) -> Result<(), ServiceError> {
        if let Some(v) = &self.name { social_media::validate_name(v)?; }
        if let Some(v) = &self.url { social_media::validate_url(v)?; }
        Ok(())
    }
}

impl From<PatchSocialMediaRequest> for SocialMediaChanges {
    fn from(r: PatchSocialMediaRequest) -> Self { Self { name: r.name, url: r.url } }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMediaResponse {
    pub id: i32,
    pub name: String,
    pub url: String,
    pub user_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub social_media: Vec<SocialMediaResponse>,
}
