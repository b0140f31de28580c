//! Admin article management handlers.
//!
//! - GET /api/admin/articles - All articles, optionally filtered by status
//! - POST /api/admin/articles - Create article
//! - GET /api/admin/articles/{id} - Get article for editing
//! - PUT /api/admin/articles/{id} - Partial update
//! - DELETE /api/admin/articles/{id} - Delete article
//!
//! All routes require an admin token. Ids that are not UUIDs get 400.

use crate::{
    db::DbPool,
    error::AppError,
    extract::{AppJson, AppQuery},
    middleware::auth::AdminContext,
    models::article::{AdminArticlesQuery, Article, CreateArticleRequest, UpdateArticleRequest},
    services::article_service,
};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::{Value, json};

/// List every article, drafts included, most recently updated first.
///
/// # Query Parameters
///
/// - `status` (optional): `draft` or `published`
pub async fn list_articles(
    State(pool): State<DbPool>,
    AppQuery(query): AppQuery<AdminArticlesQuery>,
) -> Result<Json<Vec<Article>>, AppError> {
    let articles = article_service::list_all(&pool, query.status).await?;
    Ok(Json(articles))
}

pub async fn get_article(
    State(pool): State<DbPool>,
    Path(id): Path<String>,
) -> Result<Json<Article>, AppError> {
    let id = article_service::parse_id(&id)?;
    let article = article_service::get_by_id(&pool, id).await?;
    Ok(Json(article))
}

/// Create an article.
///
/// # Request Body
///
/// ```json
/// {
///   "title": "Spring tune-up checklist",
///   "content": "...",
///   "excerpt": "Five checks before your first ride",
///   "category": "tips",
///   "tags": ["maintenance"],
///   "status": "draft"
/// }
/// ```
///
/// # Response (201 Created)
///
/// The stored article, including its generated `slug`.
pub async fn create_article(
    State(pool): State<DbPool>,
    Extension(admin): Extension<AdminContext>,
    AppJson(request): AppJson<CreateArticleRequest>,
) -> Result<impl IntoResponse, AppError> {
    let article = article_service::create(&pool, request).await?;
    tracing::debug!("Article {} created by {}", article.id, admin.email);

    Ok((StatusCode::CREATED, Json(article)))
}

/// Update an article. Only fields present in the body change.
pub async fn update_article(
    State(pool): State<DbPool>,
    Path(id): Path<String>,
    AppJson(request): AppJson<UpdateArticleRequest>,
) -> Result<Json<Article>, AppError> {
    let id = article_service::parse_id(&id)?;
    let article = article_service::update(&pool, id, request).await?;
    Ok(Json(article))
}

pub async fn delete_article(
    State(pool): State<DbPool>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let id = article_service::parse_id(&id)?;
    article_service::delete(&pool, id).await?;

    Ok(Json(json!({ "message": "Article deleted" })))
}
