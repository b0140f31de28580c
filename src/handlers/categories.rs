//! Admin category management handlers.
//!
//! - GET /api/admin/categories - List categories
//! - POST /api/admin/categories - Create category
//! - DELETE /api/admin/categories/{id} - Delete category

use crate::{
    db::DbPool,
    error::AppError,
    extract::AppJson,
    models::category::{Category, CreateCategoryRequest},
    services::{article_service, category_service},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::{Value, json};

pub async fn list_categories(
    State(pool): State<DbPool>,
) -> Result<Json<Vec<Category>>, AppError> {
    let categories = category_service::list(&pool).await?;
    Ok(Json(categories))
}

/// Create a category.
///
/// # Response
///
/// - **Success (201 Created)**: the stored category
/// - **Error (400)**: a category with this slug already exists
pub async fn create_category(
    State(pool): State<DbPool>,
    AppJson(request): AppJson<CreateCategoryRequest>,
) -> Result<impl IntoResponse, AppError> {
    let category = category_service::create(&pool, request).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// Delete a category.
///
/// Articles filed under it are left untouched.
pub async fn delete_category(
    State(pool): State<DbPool>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let id = article_service::parse_id(&id)?;
    category_service::delete(&pool, id).await?;

    Ok(Json(json!({ "message": "Category deleted" })))
}
