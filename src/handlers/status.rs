//! Status check endpoints.
//!
//! - POST /api/status - Record a status check
//! - GET /api/status - List recorded status checks

use crate::{
    db::DbPool,
    error::AppError,
    extract::AppJson,
    models::status_check::{CreateStatusCheckRequest, StatusCheck},
};
use axum::{Json, extract::State};

/// Record a status check for a client.
///
/// # Request Body
///
/// ```json
/// { "client_name": "frontend" }
/// ```
///
/// # Response (200)
///
/// ```json
/// {
///   "id": "550e8400-...",
///   "client_name": "frontend",
///   "timestamp": "2025-12-21T16:00:00Z"
/// }
/// ```
pub async fn create_status_check(
    State(pool): State<DbPool>,
    AppJson(request): AppJson<CreateStatusCheckRequest>,
) -> Result<Json<StatusCheck>, AppError> {
    let check = sqlx::query_as::<_, StatusCheck>(
        "INSERT INTO status_checks (client_name) VALUES ($1) RETURNING id, client_name, checked_at",
    )
    .bind(request.client_name)
    .fetch_one(&pool)
    .await?;

    Ok(Json(check))
}

/// List status checks, newest first (at most 1000).
pub async fn list_status_checks(
    State(pool): State<DbPool>,
) -> Result<Json<Vec<StatusCheck>>, AppError> {
    let checks = sqlx::query_as::<_, StatusCheck>(
        r#"
        SELECT id, client_name, checked_at
        FROM status_checks
        ORDER BY checked_at DESC
        LIMIT 1000
        "#,
    )
    .fetch_all(&pool)
    .await?;

    Ok(Json(checks))
}
