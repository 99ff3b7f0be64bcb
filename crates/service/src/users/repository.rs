use async_trait::async_trait;

use crate::domain::{NewUser, UserChanges, UserWithSocialMedia};
use crate::errors::ServiceError;

/// Persistence for users. Reads return the social media collection eagerly.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list_with_social_media(&self) -> Result<Vec<UserWithSocialMedia>, ServiceError>;
    async fn find_with_social_media(&self, id: i32) -> Result<Option<UserWithSocialMedia>, ServiceError>;
    async fn exists(&self, id: i32) -> Result<bool, ServiceError>;
    /// Insert and return the assigned id.
    async fn insert(&self, user: NewUser) -> Result<i32, ServiceError>;
    async fn update(&self, id: i32, changes: UserChanges) -> Result<(), ServiceError>;
    /// Remove the user and, through the owner reference, its social media.
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}
