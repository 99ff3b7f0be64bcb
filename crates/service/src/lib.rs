//! Service layer providing the user directory's business operations on top of models.
//! - Separates business logic from data access through repository traits.
//! - Reuses validation and entity definitions in `models` crate.
//! - Shapes every result as a response DTO via the mapper.

pub mod errors;
pub mod domain;
pub mod dto;
pub mod mapper;
pub mod repo;
pub mod users;
pub mod social_media;
#[cfg(test)]
pub mod test_support;

pub use social_media::SocialMediaService;
pub use users::UsersService;
