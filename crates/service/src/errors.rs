use thiserror::Error;

use models::errors::ModelError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    /// Payload points at a record that does not exist (e.g. an unknown owner).
    #[error("{0}")]
    InvalidReference(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn user_not_found(id: i32) -> Self { Self::NotFound(format!("User with id {id} not found")) }

    pub fn social_media_not_found(user_id: i32, id: i32) -> Self {
        Self::NotFound(format!("Social media with id {id} not found for user {user_id}"))
    }

    pub fn unknown_owner(user_id: i32) -> Self { Self::InvalidReference(format!("User with id {user_id} not found")) }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::Validation(_) => 1001,
            ServiceError::NotFound(_) => 1003,
            ServiceError::InvalidReference(_) => 1004,
            ServiceError::Db(_) => 1200,
        }
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => ServiceError::Validation(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::errors::require_text;

    #[test]
    fn model_validation_keeps_message_and_code() {
        let err: ServiceError = require_text("phone", "  ").unwrap_err().into();
        assert!(matches!(&err, ServiceError::Validation(m) if m == "phone is required"));
        assert_eq!(err.code(), 1001);
    }
}
