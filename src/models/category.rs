//! Category data models.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a category record from the database.
///
/// Articles point at a category through its `slug`.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
}

/// Category as shown on the public blog, with the number of published
/// articles filed under it.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct CategoryWithCount {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub article_count: i64,
}

/// Request body for creating a category.
///
/// ```json
/// {
///   "name": "Routes",
///   "slug": "routes",
///   "description": "Rides and itineraries"
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
}
