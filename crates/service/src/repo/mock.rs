//! In-memory store implementing both repositories over one shared state, so
//! owner checks and cascade delete behave like the Postgres schema.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::{
    NewSocialMedia, NewUser, SocialMedia, SocialMediaChanges, User, UserChanges, UserWithSocialMedia,
};
use crate::errors::ServiceError;
use crate::social_media::SocialMediaRepository;
use crate::users::UserRepository;

#[derive(Default)]
struct State {
    users: BTreeMap<i32, User>,
    social_media: BTreeMap<i32, SocialMedia>, // key: social media id
    last_user_id: i32,
    last_social_media_id: i32,
}

impl State {
    fn load(&self, user: &User) -> UserWithSocialMedia {
        UserWithSocialMedia {
            user: user.clone(),
            social_media: self.social_media.values().filter(|sm| sm.user_id == user.id).cloned().collect(),
        }
    }
}

#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
}

impl InMemoryStore {
    pub fn new() -> Self { Self::default() }

    fn state(&self) -> Result<MutexGuard<'_, State>, ServiceError> {
        self.state.lock().map_err(|_| ServiceError::Db("in-memory store poisoned".into()))
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn list_with_social_media(&self) -> Result<Vec<UserWithSocialMedia>, ServiceError> {
        let st = self.state()?;
        Ok(st.users.values().map(|u| st.load(u)).collect())
    }

    async fn find_with_social_media(&self, id: i32) -> Result<Option<UserWithSocialMedia>, ServiceError> {
        let st = self.state()?;
        Ok(st.users.get(&id).map(|u| st.load(u)))
    }

    async fn exists(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(self.state()?.users.contains_key(&id))
    }

    async fn insert(&self, u: NewUser) -> Result<i32, ServiceError> {
        let mut st = self.state()?;
        st.last_user_id += 1;
        let id = st.last_user_id;
        st.users.insert(id, User { id, first_name: u.first_name, last_name: u.last_name, phone: u.phone, email: u.email });
        Ok(id)
    }

    async fn update(&self, id: i32, changes: UserChanges) -> Result<(), ServiceError> {
        let mut st = self.state()?;
        let user = st.users.get_mut(&id).ok_or_else(|| ServiceError::Db(format!("no users row with id {id}")))?;
        changes.apply(user);
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let mut st = self.state()?;
        if st.users.remove(&id).is_none() {
            return Ok(false);
        }
        // ON DELETE CASCADE
        st.social_media.retain(|_, sm| sm.user_id != id);
        Ok(true)
    }
}

#[async_trait]
impl SocialMediaRepository for InMemoryStore {
    async fn list_by_user(&self, user_id: i32) -> Result<Vec<SocialMedia>, ServiceError> {
        let st = self.state()?;
        Ok(st.social_media.values().filter(|sm| sm.user_id == user_id).cloned().collect())
    }

    async fn find(&self, id: i32) -> Result<Option<SocialMedia>, ServiceError> {
        Ok(self.state()?.social_media.get(&id).cloned())
    }

    async fn find_for_user(&self, user_id: i32, id: i32) -> Result<Option<SocialMedia>, ServiceError> {
        Ok(self.state()?.social_media.get(&id).filter(|sm| sm.user_id == user_id).cloned())
    }

    async fn insert(&self, user_id: i32, item: NewSocialMedia) -> Result<i32, ServiceError> {
        let mut st = self.state()?;
        if !st.users.contains_key(&user_id) {
            return Err(ServiceError::Db("violates foreign key constraint fk_social_media_user".into()));
        }
        st.last_social_media_id += 1;
        let id = st.last_social_media_id;
        st.social_media.insert(id, SocialMedia { id, name: item.name, url: item.url, user_id });
        Ok(id)
    }

    async fn update(&self, id: i32, changes: SocialMediaChanges) -> Result<(), ServiceError> {
        let mut st = self.state()?;
        let sm = st.social_media.get_mut(&id).ok_or_else(|| ServiceError::Db(format!("no social_media row with id {id}")))?;
        changes.apply(sm);
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(self.state()?.social_media.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(first: &str) -> NewUser {
        NewUser { first_name: first.into(), last_name: "Doe".into(), phone: "1".into(), email: format!("{first}@x.com") }
    }

    #[tokio::test]
    async fn ids_are_sequential_and_never_reused() {
        let store = InMemoryStore::new();
        let a = UserRepository::insert(&store, new_user("a")).await.unwrap();
        let b = UserRepository::insert(&store, new_user("b")).await.unwrap();
        assert_eq!((a, b), (1, 2));
        UserRepository::delete(&store, b).await.unwrap();
        let c = UserRepository::insert(&store, new_user("c")).await.unwrap();
        assert_eq!(c, 3);
    }

    #[tokio::test]
    async fn deleting_user_cascades() {
        let store = InMemoryStore::new();
        let owner = UserRepository::insert(&store, new_user("a")).await.unwrap();
        let other = UserRepository::insert(&store, new_user("b")).await.unwrap();
        let sm = NewSocialMedia { name: "Twitter".into(), url: "https://twitter.com/a".into() };
        let mine = SocialMediaRepository::insert(&store, owner, sm.clone()).await.unwrap();
        let theirs = SocialMediaRepository::insert(&store, other, sm).await.unwrap();

        assert!(UserRepository::delete(&store, owner).await.unwrap());
        assert!(SocialMediaRepository::find(&store, mine).await.unwrap().is_none());
        assert!(SocialMediaRepository::find(&store, theirs).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn insert_rejects_dangling_owner() {
        let store = InMemoryStore::new();
        let sm = NewSocialMedia { name: "Twitter".into(), url: "https://twitter.com/a".into() };
        let res = SocialMediaRepository::insert(&store, 42, sm).await;
        assert!(matches!(res, Err(ServiceError::Db(_))));
    }
}
