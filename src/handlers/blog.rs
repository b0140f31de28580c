//! Public blog HTTP handlers.
//!
//! This module implements the read-only blog API:
//! - GET /api/blog/articles - Published articles, paginated
//! - GET /api/blog/articles/{slug} - One published article
//! - GET /api/blog/categories - Categories with published article counts
//! - GET /api/blog/recent - Most recent published articles
//!
//! Drafts are never visible here.

use crate::{
    db::DbPool,
    error::AppError,
    extract::AppQuery,
    models::{
        article::{Article, ArticlePage, PublishedArticlesQuery, RecentArticlesQuery},
        category::CategoryWithCount,
    },
    services::{article_service, category_service},
};
use axum::{
    Json,
    extract::{Path, State},
};

/// List published articles.
///
/// # Query Parameters
///
/// - `category` (optional): category slug to filter by
/// - `limit` (default 20, max 100)
/// - `offset` (default 0)
///
/// # Response
///
/// ```json
/// {
///   "articles": [ ... ],
///   "total": 42,
///   "limit": 20,
///   "offset": 0
/// }
/// ```
pub async fn list_articles(
    State(pool): State<DbPool>,
    AppQuery(query): AppQuery<PublishedArticlesQuery>,
) -> Result<Json<ArticlePage>, AppError> {
    let page = article_service::list_published(
        &pool,
        query.category.as_deref().filter(|c| !c.is_empty()),
        query.limit,
        query.offset,
    )
    .await?;

    Ok(Json(page))
}

/// Get a published article by slug.
///
/// Returns 404 for unknown slugs and for drafts.
pub async fn get_article(
    State(pool): State<DbPool>,
    Path(slug): Path<String>,
) -> Result<Json<Article>, AppError> {
    let article = article_service::get_published(&pool, &slug).await?;
    Ok(Json(article))
}

pub async fn list_categories(
    State(pool): State<DbPool>,
) -> Result<Json<Vec<CategoryWithCount>>, AppError> {
    let categories = category_service::list_with_counts(&pool).await?;
    Ok(Json(categories))
}

/// Most recent published articles (`limit` defaults to 5).
pub async fn recent_articles(
    State(pool): State<DbPool>,
    AppQuery(query): AppQuery<RecentArticlesQuery>,
) -> Result<Json<Vec<Article>>, AppError> {
    let articles = article_service::list_recent(&pool, query.limit).await?;
    Ok(Json(articles))
}
