//! Shared plumbing for the user directory workspace: logging setup,
//! startup environment checks and small response types.

pub mod types;
pub mod utils;
pub mod env;
