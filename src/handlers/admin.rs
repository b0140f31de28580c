//! Admin session and dashboard handlers.
//!
//! - POST /api/admin/login - Exchange credentials for a bearer token
//! - GET /api/admin/verify - Check the current token
//! - GET /api/admin/stats - Blog counters

use crate::{
    db::DbPool,
    error::AppError,
    extract::AppJson,
    middleware::auth::AdminContext,
    models::admin::{BlogStats, LoginRequest, LoginResponse, VerifyResponse},
    services::session_service,
    state::AppState,
};
use axum::{Extension, Json, extract::State};

/// Log in as the administrator.
///
/// # Request Body
///
/// ```json
/// { "email": "admin@example.com", "password": "..." }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: `{ "token": "...", "message": "Login successful" }`
/// - **Error (401)**: Email or password incorrect
pub async fn login(
    State(state): State<AppState>,
    AppJson(request): AppJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let token = session_service::login(
        &state.admin,
        &state.sessions,
        &request.email,
        &request.password,
    )
    .await?;

    Ok(Json(LoginResponse {
        token,
        message: "Login successful".to_string(),
    }))
}

/// Confirm the bearer token is still valid.
///
/// Reaching this handler means the auth middleware accepted the token.
pub async fn verify(Extension(admin): Extension<AdminContext>) -> Json<VerifyResponse> {
    Json(VerifyResponse {
        valid: true,
        email: admin.email,
    })
}

/// Article and category counters.
///
/// ```json
/// {
///   "total_articles": 12,
///   "published": 9,
///   "drafts": 3,
///   "categories": 5
/// }
/// ```
pub async fn stats(State(pool): State<DbPool>) -> Result<Json<BlogStats>, AppError> {
    let stats = sqlx::query_as::<_, BlogStats>(
        r#"
        SELECT COUNT(*) AS total_articles,
               COUNT(*) FILTER (WHERE status = 'published') AS published,
               COUNT(*) FILTER (WHERE status = 'draft') AS drafts,
               (SELECT COUNT(*) FROM categories) AS categories
        FROM articles
        "#,
    )
    .fetch_one(&pool)
    .await?;

    Ok(Json(stats))
}
