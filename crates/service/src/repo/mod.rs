//! Repository implementations: SeaORM over Postgres, and an in-memory store
//! for tests and database-less runs.

pub mod seaorm;
pub mod mock;

pub use mock::InMemoryStore;
pub use seaorm::{SeaOrmSocialMediaRepository, SeaOrmUserRepository};
