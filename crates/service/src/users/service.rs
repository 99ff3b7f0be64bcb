use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::dto::{CreateUserRequest, PatchUserRequest, ReplaceUserRequest, UserResponse};
use crate::errors::ServiceError;
use crate::mapper;
use crate::users::repository::UserRepository;

/// Application service for user records, independent of web framework.
///
/// Works over any [`UserRepository`], including `dyn UserRepository`.
pub struct UsersService<R: UserRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: UserRepository + ?Sized> UsersService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// All users with their social media, ordered by id. Empty when none exist.
    pub async fn list_users(&self) -> Result<Vec<UserResponse>, ServiceError> {
        let users = self.repo.list_with_social_media().await?;
        debug!(count = users.len(), "listed users");
        Ok(mapper::user_responses(users))
    }

    pub async fn get_user(&self, id: i32) -> Result<UserResponse, ServiceError> {
        self.repo
            .find_with_social_media(id)
            .await?
            .map(mapper::user_response)
            .ok_or_else(|| ServiceError::user_not_found(id))
    }

    /// Validate, persist and return the stored user (empty social media list).
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::{UsersService, dto::CreateUserRequest, repo::InMemoryStore};
    /// let svc = UsersService::new(Arc::new(InMemoryStore::new()));
    /// let input = CreateUserRequest { first_name: "Ana".into(), last_name: "Lopez".into(), phone: "555".into(), email: "ana@x.com".into() };
    /// let user = tokio_test::block_on(svc.create_user(input)).unwrap();
    /// assert_eq!(user.id, 1);
    /// assert!(user.social_media.is_empty());
    /// ```
    #[instrument(skip(self, input))]
    pub async fn create_user(&self, input: CreateUserRequest) -> Result<UserResponse, ServiceError> {
        input.validate()?;
        let id = self.repo.insert(input.into()).await?;
        info!(user_id = id, "user_created");
        self.reload(id).await
    }

    /// Apply only the supplied fields. Missing user fails before any write.
    #[instrument(skip(self, input))]
    pub async fn patch_user(&self, id: i32, input: PatchUserRequest) -> Result<UserResponse, ServiceError> {
        input.validate()?;
        self.ensure_exists(id).await?;
        self.repo.update(id, input.into()).await?;
        info!(user_id = id, "user_patched");
        self.reload(id).await
    }

    /// Overwrite every non-relation field. Social media are left as they are.
    #[instrument(skip(self, input))]
    pub async fn replace_user(&self, id: i32, input: ReplaceUserRequest) -> Result<UserResponse, ServiceError> {
        input.validate()?;
        self.ensure_exists(id).await?;
        let new_user: crate::domain::NewUser = input.into();
        self.repo.update(id, new_user.into()).await?;
        info!(user_id = id, "user_replaced");
        self.reload(id).await
    }

    /// Remove the user; its social media go with it.
    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: i32) -> Result<(), ServiceError> {
        self.ensure_exists(id).await?;
        if !self.repo.delete(id).await? {
            // deleted concurrently between the check and the delete
            return Err(ServiceError::user_not_found(id));
        }
        info!(user_id = id, "user_deleted");
        Ok(())
    }

    async fn ensure_exists(&self, id: i32) -> Result<(), ServiceError> {
        if self.repo.exists(id).await? {
            Ok(())
        } else {
            Err(ServiceError::user_not_found(id))
        }
    }

    async fn reload(&self, id: i32) -> Result<UserResponse, ServiceError> {
        self.repo
            .find_with_social_media(id)
            .await?
            .map(mapper::user_response)
            .ok_or_else(|| ServiceError::Db(format!("user {id} vanished after write")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewSocialMedia;
    use crate::repo::InMemoryStore;
    use crate::social_media::SocialMediaRepository;

    fn ana() -> CreateUserRequest {
        CreateUserRequest { first_name: "Ana".into(), last_name: "Lopez".into(), phone: "555".into(), email: "ana@x.com".into() }
    }

    fn service() -> (Arc<InMemoryStore>, UsersService<InMemoryStore>) {
        let store = Arc::new(InMemoryStore::new());
        (store.clone(), UsersService::new(store))
    }

    #[tokio::test]
    async fn list_is_empty_without_users() {
        let (_, svc) = service();
        assert!(svc.list_users().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_returns_submitted_fields_and_new_id() {
        let (_, svc) = service();
        let created = svc.create_user(ana()).await.unwrap();
        assert!(created.id > 0);
        assert_eq!(created.first_name, "Ana");
        assert_eq!(created.last_name, "Lopez");
        assert_eq!(created.phone, "555");
        assert_eq!(created.email, "ana@x.com");
        assert!(created.social_media.is_empty());
        assert_eq!(svc.get_user(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn create_rejects_invalid_payload_without_persisting() {
        let (_, svc) = service();
        let mut bad = ana();
        bad.email = "not-an-email".into();
        assert!(matches!(svc.create_user(bad).await, Err(ServiceError::Validation(_))));
        let mut blank = ana();
        blank.phone = "".into();
        assert!(matches!(svc.create_user(blank).await, Err(ServiceError::Validation(_))));
        assert!(svc.list_users().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let (_, svc) = service();
        let err = svc.get_user(99).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert_eq!(err.to_string(), "User with id 99 not found");
    }

    #[tokio::test]
    async fn patch_changes_only_supplied_fields() {
        let (_, svc) = service();
        let created = svc.create_user(ana()).await.unwrap();
        let patch = PatchUserRequest { first_name: Some("Juan".into()), ..Default::default() };
        let updated = svc.patch_user(created.id, patch).await.unwrap();
        assert_eq!(updated.first_name, "Juan");
        assert_eq!(updated.last_name, created.last_name);
        assert_eq!(updated.phone, created.phone);
        assert_eq!(updated.email, created.email);
    }

    #[tokio::test]
    async fn empty_patch_returns_current_user() {
        let (_, svc) = service();
        let created = svc.create_user(ana()).await.unwrap();
        let same = svc.patch_user(created.id, PatchUserRequest::default()).await.unwrap();
        assert_eq!(same, created);
    }

    #[tokio::test]
    async fn patch_and_replace_missing_user_are_not_found() {
        let (_, svc) = service();
        let patch = PatchUserRequest { first_name: Some("x".into()), ..Default::default() };
        assert!(matches!(svc.patch_user(99, patch).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.replace_user(99, ana()).await, Err(ServiceError::NotFound(_))));
        assert!(svc.list_users().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn replace_overwrites_fields_and_keeps_social_media() {
        let (store, svc) = service();
        let created = svc.create_user(ana()).await.unwrap();
        SocialMediaRepository::insert(
            store.as_ref(),
            created.id,
            NewSocialMedia { name: "Twitter".into(), url: "https://twitter.com/ana".into() },
        )
        .await
        .unwrap();

        let replacement = CreateUserRequest {
            first_name: "Carlos".into(),
            last_name: "Martinez".into(),
            phone: "123123123".into(),
            email: "carlos@example.com".into(),
        };
        let replaced = svc.replace_user(created.id, replacement).await.unwrap();
        assert_eq!(replaced.id, created.id);
        assert_eq!(replaced.first_name, "Carlos");
        assert_eq!(replaced.email, "carlos@example.com");
        assert_eq!(replaced.social_media.len(), 1);
        assert_eq!(replaced.social_media[0].user_id, created.id);
    }

    #[tokio::test]
    async fn delete_then_lookup_is_not_found() {
        let (_, svc) = service();
        let created = svc.create_user(ana()).await.unwrap();
        svc.delete_user(created.id).await.unwrap();
        assert!(matches!(svc.get_user(created.id).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.delete_user(created.id).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn list_embeds_each_users_social_media() {
        let (store, svc) = service();
        let a = svc.create_user(ana()).await.unwrap();
        let b = svc.create_user(CreateUserRequest { email: "b@x.com".into(), ..ana() }).await.unwrap();
        SocialMediaRepository::insert(store.as_ref(), b.id, NewSocialMedia { name: "GitHub".into(), url: "https://github.com/b".into() })
            .await
            .unwrap();

        let all = svc.list_users().await.unwrap();
        assert_eq!(all.iter().map(|u| u.id).collect::<Vec<_>>(), vec![a.id, b.id]);
        assert!(all[0].social_media.is_empty());
        assert_eq!(all[1].social_media[0].name, "GitHub");
    }
}
