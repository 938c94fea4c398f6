//! # REST API Errors
//!
//! One error type for the HTTP surface, mapped onto the service's error
//! taxonomy: bad input 400, type mismatch 422, duplicate identity 409,
//! missing record 404, contradictory parsed filters 422, storage write
//! failure 500. None are retried.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::filter::FilterError;
use crate::nlq::TranslateError;
use crate::store::StoreError;

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// REST API errors
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Request body without a usable `value` field
    #[error("Missing 'value' field")]
    MissingValue,

    /// `value` present but not a string
    #[error("Invalid data type for 'value' (must be string)")]
    ValueNotString,

    /// A record with the same content hash already exists
    #[error("String already exists in the system")]
    Duplicate,

    /// No record with the requested value
    #[error("String does not exist in the system")]
    NotFound,

    /// Invalid structured filter parameter
    #[error(transparent)]
    Filter(#[from] FilterError),

    /// Natural-language query could not be interpreted
    #[error(transparent)]
    Translate(#[from] TranslateError),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Collection could not be persisted
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            ApiError::MissingValue => StatusCode::BAD_REQUEST,
            ApiError::Filter(_) => StatusCode::BAD_REQUEST,
            ApiError::Translate(TranslateError::Conflicting { .. }) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::Translate(_) => StatusCode::BAD_REQUEST,

            // 422 Unprocessable Entity
            ApiError::ValueNotString => StatusCode::UNPROCESSABLE_ENTITY,

            // 409 Conflict
            ApiError::Duplicate => StatusCode::CONFLICT,

            // 404 Not Found
            ApiError::NotFound => StatusCode::NOT_FOUND,

            // 500 Internal Server Error
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::MissingValue.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::ValueNotString.status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(ApiError::Duplicate.status_code(), StatusCode::CONFLICT);
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_filter_errors_are_bad_requests() {
        let err = ApiError::from(FilterError::NotASingleCharacter);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_translate_conflict_is_unprocessable() {
        let err = ApiError::from(TranslateError::Conflicting { min: 10, max: 5 });
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

        let err = ApiError::from(TranslateError::Unparseable);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_error_envelope() {
        let body = ErrorResponse::from(ApiError::Duplicate);
        assert_eq!(body.code, 409);
        assert_eq!(body.error, "String already exists in the system");
    }
}
