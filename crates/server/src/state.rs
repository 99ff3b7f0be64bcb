use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::repo::{InMemoryStore, SeaOrmSocialMediaRepository, SeaOrmUserRepository};
use service::social_media::SocialMediaRepository;
use service::users::UserRepository;
use service::{SocialMediaService, UsersService};

pub type DynUsersService = UsersService<dyn UserRepository>;
pub type DynSocialMediaService = SocialMediaService<dyn SocialMediaRepository, dyn UserRepository>;

/// Shared handler state; services own the repositories, never the reverse.
#[derive(Clone)]
pub struct ServerState {
    pub users: Arc<DynUsersService>,
    pub social_media: Arc<DynSocialMediaService>,
}

impl ServerState {
    pub fn new(users: Arc<dyn UserRepository>, social_media: Arc<dyn SocialMediaRepository>) -> Self {
        Self {
            users: Arc::new(UsersService::new(Arc::clone(&users))),
            social_media: Arc::new(SocialMediaService::new(social_media, users)),
        }
    }

    pub fn from_db(db: DatabaseConnection) -> Self {
        Self::new(
            Arc::new(SeaOrmUserRepository { db: db.clone() }),
            Arc::new(SeaOrmSocialMediaRepository { db }),
        )
    }

    /// Both repositories backed by one in-memory store.
    pub fn in_memory() -> Self {
        let store = Arc::new(InMemoryStore::new());
        Self::new(store.clone(), store)
    }
}
