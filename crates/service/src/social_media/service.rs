use std::sync::Arc;

use tracing::{info, instrument};

use crate::dto::{CreateSocialMediaRequest, PatchSocialMediaRequest, SocialMediaResponse};
use crate::errors::ServiceError;
use crate::mapper;
use crate::social_media::repository::SocialMediaRepository;
use crate::users::repository::UserRepository;

/// Social media operations scoped under an owning user.
///
/// Existence checks and the following write are separate calls; no lock or
/// transaction spans them.
pub struct SocialMediaService<S, U>
where
    S: SocialMediaRepository + ?Sized,
    U: UserRepository + ?Sized,
{
    repo: Arc<S>,
    users: Arc<U>,
}

impl<S, U> SocialMediaService<S, U>
where
    S: SocialMediaRepository + ?Sized,
    U: UserRepository + ?Sized,
{
    pub fn new(repo: Arc<S>, users: Arc<U>) -> Self { Self { repo, users } }

    /// Rows owned by `user_id`; an unknown user simply has none.
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<SocialMediaResponse>, ServiceError> {
        let items = self.repo.list_by_user(user_id).await?;
        Ok(mapper::social_media_responses(items))
    }

    pub async fn get_for_user(&self, user_id: i32, id: i32) -> Result<SocialMediaResponse, ServiceError> {
        self.repo
            .find_for_user(user_id, id)
            .await?
            .map(|sm| mapper::social_media_response(sm, Some(user_id)))
            .ok_or_else(|| ServiceError::social_media_not_found(user_id, id))
    }

    /// The owner must exist; otherwise the payload's reference is invalid and
    /// nothing is written.
    #[instrument(skip(self, input))]
    pub async fn create_for_user(&self, user_id: i32, input: CreateSocialMediaRequest) -> Result<SocialMediaResponse, ServiceError> {
        if !self.users.exists(user_id).await? {
            return Err(ServiceError::unknown_owner(user_id));
        }
        input.validate()?;
        let id = self.repo.insert(user_id, input.into()).await?;
        info!(user_id, social_media_id = id, "social_media_created");
        self.reload(id).await
    }

    #[instrument(skip(self, input))]
    pub async fn update_for_user(
        &self,
        user_id: i32,
        id: i32,
        input: PatchSocialMediaRequest,
    ) -> Result<SocialMediaResponse, ServiceError> {
        input.validate()?;
        self.ensure_owned(user_id, id).await?;
        self.repo.update(id, input.into()).await?;
        info!(user_id, social_media_id = id, "social_media_updated");
        self.reload(id).await
    }

    #[instrument(skip(self))]
    pub async fn delete_for_user(&self, user_id: i32, id: i32) -> Result<(), ServiceError> {
        self.ensure_owned(user_id, id).await?;
        // owner already checked, delete by id alone
        if !self.repo.delete(id).await? {
            return Err(ServiceError::social_media_not_found(user_id, id));
        }
        info!(user_id, social_media_id = id, "social_media_deleted");
        Ok(())
    }

    async fn ensure_owned(&self, user_id: i32, id: i32) -> Result<(), ServiceError> {
        match self.repo.find_for_user(user_id, id).await? {
            Some(_) => Ok(()),
            None => Err(ServiceError::social_media_not_found(user_id, id)),
        }
    }

    async fn reload(&self, id: i32) -> Result<SocialMediaResponse, ServiceError> {
        self.repo
            .find(id)
            .await?
            .map(|sm| mapper::social_media_response(sm, None))
            .ok_or_else(|| ServiceError::Db(format!("social media {id} vanished after write")))
    }
}
