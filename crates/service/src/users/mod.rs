//! Users: repository abstraction plus the service orchestrating lookups,
//! existence checks and persistence for user records.

pub mod repository;
pub mod service;

pub use repository::UserRepository;
pub use service::UsersService;
