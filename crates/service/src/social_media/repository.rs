use async_trait::async_trait;

use crate::domain::{NewSocialMedia, SocialMedia, SocialMediaChanges};
use crate::errors::ServiceError;

#[async_trait]
pub trait SocialMediaRepository: Send + Sync {
    async fn list_by_user(&self, user_id: i32) -> Result<Vec<SocialMedia>, ServiceError>;
    async fn find(&self, id: i32) -> Result<Option<SocialMedia>, ServiceError>;
    /// Match on both id and owner; an owner mismatch reads as absent.
    async fn find_for_user(&self, user_id: i32, id: i32) -> Result<Option<SocialMedia>, ServiceError>;
    async fn insert(&self, user_id: i32, item: NewSocialMedia) -> Result<i32, ServiceError>;
    async fn update(&self, id: i32, changes: SocialMediaChanges) -> Result<(), ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}
