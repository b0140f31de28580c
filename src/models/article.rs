//! Article data models and API request/response types.
//!
//! This module defines:
//! - `Article`: Database entity representing a blog article
//! - `ArticleStatus`: Publication state of an article
//! - `CreateArticleRequest` / `UpdateArticleRequest`: Admin request bodies
//! - `ArticlePage`: Paginated list returned by the public API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Publication state of an article.
///
/// Only `published` articles are visible through the public blog API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    #[default]
    Draft,
    Published,
}

impl ArticleStatus {
    /// Value stored in the `articles.status` column.
    pub fn as_str(self) -> &'static str {
        match self {
            ArticleStatus::Draft => "draft",
            ArticleStatus::Published => "published",
        }
    }
}

/// Represents an article record from the database.
///
/// # Database Table
///
/// Maps to the `articles` table. The `category` column holds a category slug;
/// there is no foreign key, so deleting a category leaves its articles in place.
///
/// The record is returned to clients as-is.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Article {
    pub id: Uuid,

    pub title: String,

    /// URL-friendly identifier, unique across all articles
    pub slug: String,

    /// Full article body
    pub content: String,

    /// Short summary shown in article lists
    pub excerpt: String,

    pub image_url: Option<String>,

    /// Slug of the category this article belongs to
    pub category: String,

    pub tags: Vec<String>,

    /// Description for search engine `<meta>` tags
    pub meta_description: Option<String>,

    /// `draft` or `published` (enforced by a database CHECK constraint)
    pub status: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// Request body for creating a new article.
///
/// # JSON Example
///
/// ```json
/// {
///   "title": "Spring tune-up checklist",
///   "content": "...",
///   "excerpt": "Five checks before your first ride",
///   "category": "tips",
///   "tags": ["maintenance"],
///   "status": "published"
/// }
/// ```
///
/// # Defaults
///
/// - `tags`: empty
/// - `status`: `draft`
#[derive(Debug, Deserialize)]
pub struct CreateArticleRequest {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub status: ArticleStatus,
}

/// Partial update of an article.
///
/// Omitted (or `null`) fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub meta_description: Option<String>,
    pub status: Option<ArticleStatus>,
}

/// Query parameters of `GET /api/blog/articles`.
#[derive(Debug, Deserialize)]
pub struct PublishedArticlesQuery {
    pub category: Option<String>,
    #[serde(default = "default_page_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

/// Query parameters of `GET /api/blog/recent`.
#[derive(Debug, Deserialize)]
pub struct RecentArticlesQuery {
    #[serde(default = "default_recent_limit")]
    pub limit: i64,
}

/// Query parameters of `GET /api/admin/articles`.
#[derive(Debug, Deserialize)]
pub struct AdminArticlesQuery {
    pub status: Option<ArticleStatus>,
}

fn default_page_limit() -> i64 {
    20
}

fn default_recent_limit() -> i64 {
    5
}

/// One page of published articles.
///
/// ```json
/// {
///   "articles": [ ... ],
///   "total": 42,
///   "limit": 20,
///   "offset": 0
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct ArticlePage {
    pub articles: Vec<Article>,

    /// Number of matching articles across all pages
    pub total: i64,

    pub limit: i64,

    pub offset: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_defaults_to_draft_without_tags() {
        let request: CreateArticleRequest = serde_json::from_str(
            r#"{"title":"T","content":"C","excerpt":"E","category":"tips"}"#,
        )
        .unwrap();
        assert_eq!(request.status, ArticleStatus::Draft);
        assert!(request.tags.is_empty());
        assert!(request.image_url.is_none());
    }

    #[test]
    fn unknown_status_is_rejected() {
        let result = serde_json::from_str::<CreateArticleRequest>(
            r#"{"title":"T","content":"C","excerpt":"E","category":"tips","status":"archived"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn update_request_leaves_absent_fields_empty() {
        let request: UpdateArticleRequest =
            serde_json::from_str(r#"{"status":"published","tags":["a"]}"#).unwrap();
        assert_eq!(request.status, Some(ArticleStatus::Published));
        assert_eq!(request.tags, Some(vec!["a".to_string()]));
        assert!(request.title.is_none());
    }
}
