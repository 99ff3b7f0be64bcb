use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use tracing::error;

/// JSON error body: `{"statusCode", "error", "message", "code"?}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub message: Option<String>,
    pub code: Option<u16>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, message: Option<String>) -> Self {
        Self { status, error, message, code: None }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Bad Request", Some(message.into()))
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let mut body = serde_json::json!({
            "statusCode": self.status.as_u16(),
            "error": self.error,
            "message": self.message,
        });
        if let Some(code) = self.code {
            body["code"] = code.into();
        }
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        let code = Some(e.code());
        let (status, title) = match &e {
            ServiceError::Validation(_) | ServiceError::InvalidReference(_) => (StatusCode::BAD_REQUEST, "Bad Request"),
            ServiceError::NotFound(_) => (StatusCode::NOT_FOUND, "Not Found"),
            ServiceError::Db(_) => {
                error!(err = %e, "storage failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        };
        Self { status, error: title, message: Some(e.to_string()), code }
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(r: JsonRejection) -> Self {
        // missing fields and wrong types are client errors too, not 422
        JsonApiError::bad_request(r.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_http_status() {
        assert_eq!(JsonApiError::from(ServiceError::Validation("x".into())).status, StatusCode::BAD_REQUEST);
        assert_eq!(JsonApiError::from(ServiceError::unknown_owner(3)).status, StatusCode::BAD_REQUEST);
        assert_eq!(JsonApiError::from(ServiceError::user_not_found(3)).status, StatusCode::NOT_FOUND);
        assert_eq!(JsonApiError::from(ServiceError::Db("boom".into())).status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn not_found_keeps_message_and_code() {
        let e = JsonApiError::from(ServiceError::social_media_not_found(1, 2));
        assert_eq!(e.message.as_deref(), Some("Social media with id 2 not found for user 1"));
        assert_eq!(e.code, Some(1003));
    }
}
