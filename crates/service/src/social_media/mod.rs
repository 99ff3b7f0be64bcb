//! Social media accounts, always addressed through their owning user.

pub mod repository;
pub mod service;

pub use repository::SocialMediaRepository;
pub use service::SocialMediaService;
