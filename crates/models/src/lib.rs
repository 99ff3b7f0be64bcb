pub mod errors;
pub mod db;
pub mod user;
pub mod social_media;
