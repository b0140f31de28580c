//! Admin authentication and dashboard payloads.

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/admin/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response returned after a successful login.
///
/// ```json
/// {
///   "token": "9f1c...e2",
///   "message": "Login successful"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Bearer token to send as `Authorization: Bearer <token>`
    pub token: String,
    pub message: String,
}

/// Response of `GET /api/admin/verify`.
#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub valid: bool,
    pub email: String,
}

/// Aggregate blog counters for the admin dashboard.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct BlogStats {
    pub total_articles: i64,
    pub published: i64,
    pub drafts: i64,
    pub categories: i64,
}
