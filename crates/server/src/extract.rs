//! Path identifier guard: ids must be positive integers that fit the serial
//! column, checked before any service call.

use crate::errors::JsonApiError;

pub const INTEGER_EXPECTED: &str = "Validation failed (integer expected)";
pub const POSITIVE_EXPECTED: &str = "Validation failed (positive integer is expected)";

pub fn parse_positive_id(raw: &str) -> Result<i32, JsonApiError> {
    let value: i64 = raw.parse().map_err(|_| JsonApiError::bad_request(INTEGER_EXPECTED))?;
    if value <= 0 {
        return Err(JsonApiError::bad_request(POSITIVE_EXPECTED));
    }
    i32::try_from(value).map_err(|_| JsonApiError::bad_request(INTEGER_EXPECTED))
}
