use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, Unchanged,
};

use models::{social_media, user};

use crate::domain::{
    NewSocialMedia, NewUser, SocialMedia, SocialMediaChanges, User, UserChanges, UserWithSocialMedia,
};
use crate::errors::ServiceError;
use crate::social_media::SocialMediaRepository;
use crate::users::UserRepository;

// Row <-> domain mapping. Entities stay storage-shaped; services only see domain structs.

fn user_from_row(m: user::Model) -> User {
    User { id: m.id, first_name: m.first_name, last_name: m.last_name, phone: m.phone, email: m.email }
}

fn social_media_from_row(m: social_media::Model) -> SocialMedia {
    SocialMedia { id: m.id, name: m.name, url: m.url, user_id: m.user_id }
}

fn user_to_row(u: NewUser) -> user::ActiveModel {
    user::ActiveModel {
        first_name: Set(u.first_name),
        last_name: Set(u.last_name),
        phone: Set(u.phone),
        email: Set(u.email),
        ..Default::default()
    }
}

fn user_changes_to_row(id: i32, c: UserChanges) -> user::ActiveModel {
    let mut am = user::ActiveModel { id: Unchanged(id), ..Default::default() };
    if let Some(v) = c.first_name { am.first_name = Set(v); }
    if let Some(v) = c.last_name { am.last_name = Set(v); }
    if let Some(v) = c.phone { am.phone = Set(v); }
    if let Some(v) = c.email { am.email = Set(v); }
    am
}

fn social_media_to_row(user_id: i32, sm: NewSocialMedia) -> social_media::ActiveModel {
    social_media::ActiveModel {
        name: Set(sm.name),
        url: Set(sm.url),
        user_id: Set(user_id),
        ..Default::default()
    }
}

fn social_media_changes_to_row(id: i32, c: SocialMediaChanges) -> social_media::ActiveModel {
    let mut am = social_media::ActiveModel { id: Unchanged(id), ..Default::default() };
    if let Some(v) = c.name { am.name = Set(v); }
    if let Some(v) = c.url { am.url = Set(v); }
    am
}

/// SeaORM-backed user repository.
pub struct SeaOrmUserRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn list_with_social_media(&self) -> Result<Vec<UserWithSocialMedia>, ServiceError> {
        // find_with_related consolidates consecutive rows, so order by the parent key first
        let rows = user::Entity::find()
            .find_with_related(social_media::Entity)
            .order_by_asc(user::Column::Id)
            .order_by_asc(social_media::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(rows
            .into_iter()
            .map(|(u, sms)| UserWithSocialMedia {
                user: user_from_row(u),
                social_media: sms.into_iter().map(social_media_from_row).collect(),
            })
            .collect())
    }

    async fn find_with_social_media(&self, id: i32) -> Result<Option<UserWithSocialMedia>, ServiceError> {
        let Some(found) = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?
        else {
            return Ok(None);
        };
        let sms = found
            .find_related(social_media::Entity)
            .order_by_asc(social_media::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(Some(UserWithSocialMedia {
            user: user_from_row(found),
            social_media: sms.into_iter().map(social_media_from_row).collect(),
        }))
    }

    async fn exists(&self, id: i32) -> Result<bool, ServiceError> {
        let n = user::Entity::find_by_id(id)
            .count(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(n > 0)
    }

    async fn insert(&self, u: NewUser) -> Result<i32, ServiceError> {
        let created = user_to_row(u).insert(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(created.id)
    }

    async fn update(&self, id: i32, changes: UserChanges) -> Result<(), ServiceError> {
        if changes.is_empty() {
            return Ok(());
        }
        user_changes_to_row(id, changes).update(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let res = user::Entity::delete_by_id(id).exec(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(res.rows_affected > 0)
    }
}

/// SeaORM-backed social media repository.
pub struct SeaOrmSocialMediaRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl SocialMediaRepository for SeaOrmSocialMediaRepository {
    async fn list_by_user(&self, user_id: i32) -> Result<Vec<SocialMedia>, ServiceError> {
        let rows = social_media::Entity::find()
            .filter(social_media::Column::UserId.eq(user_id))
            .order_by_asc(social_media::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(rows.into_iter().map(social_media_from_row).collect())
    }

    async fn find(&self, id: i32) -> Result<Option<SocialMedia>, ServiceError> {
        let row = social_media::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(row.map(social_media_from_row))
    }

    async fn find_for_user(&self, user_id: i32, id: i32) -> Result<Option<SocialMedia>, ServiceError> {
        let row = social_media::Entity::find_by_id(id)
            .filter(social_media::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(row.map(social_media_from_row))
    }

    async fn insert(&self, user_id: i32, item: NewSocialMedia) -> Result<i32, ServiceError> {
        let created = social_media_to_row(user_id, item)
            .insert(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(created.id)
    }

    async fn update(&self, id: i32, changes: SocialMediaChanges) -> Result<(), ServiceError> {
        if changes.is_empty() {
            return Ok(());
        }
        social_media_changes_to_row(id, changes)
            .update(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let res = social_media::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(res.rows_affected > 0)
    }
}
