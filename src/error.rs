//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    extract::{
        multipart::MultipartError,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// Each variant maps to a specific HTTP status code and error code.
///
/// # Error Categories
///
/// - **Internal Errors**: database and filesystem failures
/// - **Authentication Errors**: missing, unknown, or expired admin tokens and bad credentials
/// - **Resource Errors**: requested articles, categories, or files not found
/// - **Validation Errors**: malformed ids, disallowed uploads, invalid request data
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (e.g., connection error, query error).
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Reading or writing a file on disk failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No bearer token was supplied on an admin route.
    #[error("Missing token")]
    MissingToken,

    /// The bearer token was never issued or has been removed.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The bearer token is older than the session lifetime.
    #[error("Token expired")]
    TokenExpired,

    /// Email or password did not match the admin credentials.
    #[error("Incorrect email or password")]
    InvalidCredentials,

    /// A path id could not be parsed.
    #[error("Invalid id")]
    InvalidId,

    #[error("Article not found")]
    ArticleNotFound,

    #[error("Category not found")]
    CategoryNotFound,

    /// A category with the same slug already exists.
    #[error("Category already exists")]
    CategoryExists,

    #[error("File not found")]
    FileNotFound,

    /// Request body exceeded the configured upload limit.
    #[error("Upload too large")]
    PayloadTooLarge,

    /// Uploaded file is not one of the accepted image types.
    #[error("File type not allowed")]
    UnsupportedFileType,

    /// Request body or parameters are invalid.
    ///
    /// The String contains details about what was invalid.
    #[error("Invalid request")]
    InvalidRequest(String),
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// All errors return JSON in this format:
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
///
/// Internal errors are logged and replaced with a generic message.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::MissingToken => (StatusCode::UNAUTHORIZED, "missing_token", self.to_string()),
            AppError::InvalidToken => (StatusCode::UNAUTHORIZED, "invalid_token", self.to_string()),
            AppError::TokenExpired => (StatusCode::UNAUTHORIZED, "token_expired", self.to_string()),
            AppError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "invalid_credentials",
                self.to_string(),
            ),
            AppError::InvalidId => (StatusCode::BAD_REQUEST, "invalid_id", self.to_string()),
            AppError::ArticleNotFound => {
                (StatusCode::NOT_FOUND, "article_not_found", self.to_string())
            }
            AppError::CategoryNotFound => {
                (StatusCode::NOT_FOUND, "category_not_found", self.to_string())
            }
            AppError::CategoryExists => {
                (StatusCode::BAD_REQUEST, "category_exists", self.to_string())
            }
            AppError::FileNotFound => (StatusCode::NOT_FOUND, "file_not_found", self.to_string()),
            AppError::UnsupportedFileType => (
                StatusCode::BAD_REQUEST,
                "unsupported_file_type",
                self.to_string(),
            ),
            AppError::PayloadTooLarge => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "payload_too_large",
                self.to_string(),
            ),
            AppError::InvalidRequest(ref msg) => {
                (StatusCode::BAD_REQUEST, "invalid_request", msg.clone())
            }
            AppError::Database(ref e) => {
                tracing::error!("database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
            AppError::Io(ref e) => {
                tracing::error!("i/o error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

/// Body-limit failures become 413, anything else is a malformed request.
impl From<MultipartError> for AppError {
    fn from(error: MultipartError) -> Self {
        if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge
        } else {
            AppError::InvalidRequest(format!("Malformed multipart body: {}", error.body_text()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(error: AppError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn auth_errors_are_unauthorized() {
        for error in [
            AppError::MissingToken,
            AppError::InvalidToken,
            AppError::TokenExpired,
            AppError::InvalidCredentials,
        ] {
            let (status, _) = body_json(error).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED);
        }
    }

    #[tokio::test]
    async fn invalid_request_carries_its_message() {
        let (status, body) = body_json(AppError::InvalidRequest("limit too large".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "invalid_request");
        assert_eq!(body["error"]["message"], "limit too large");
    }

    #[tokio::test]
    async fn internal_errors_hide_details() {
        let io = std::io::Error::other("disk on fire");
        let (status, body) = body_json(AppError::Io(io)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "internal_error");
        assert_eq!(body["error"]["message"], "An internal error occurred");
    }

    #[tokio::test]
    async fn oversized_upload_is_413() {
        let (status, body) = body_json(AppError::PayloadTooLarge).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body["error"]["code"], "payload_too_large");
    }

    #[tokio::test]
    async fn not_found_variants_map_to_404() {
        let (status, body) = body_json(AppError::ArticleNotFound).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["message"], "Article not found");
    }
}
