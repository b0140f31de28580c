//! Category service - listing, creation, deletion and startup seeding.

use uuid::Uuid;

use crate::{
    db::DbPool,
    error::AppError,
    models::category::{Category, CategoryWithCount, CreateCategoryRequest},
};

/// Categories created on startup when missing: `(name, slug, description)`.
pub const DEFAULT_CATEGORIES: [(&str, &str, &str); 5] = [
    ("Rentals", "rentals", "Articles about bike rentals"),
    ("Repairs", "repairs", "Repair and maintenance advice"),
    ("Routes", "routes", "Rides and itineraries"),
    ("Tips", "tips", "Practical tips for cyclists"),
    ("News", "news", "Shop news and announcements"),
];

/// Insert every default category whose slug is not taken yet.
///
/// Safe to run on every startup.
pub async fn seed_defaults(pool: &DbPool) -> Result<u64, AppError> {
    let mut inserted = 0;

    for (name, slug, description) in DEFAULT_CATEGORIES {
        inserted += sqlx::query(
            r#"
            INSERT INTO categories (name, slug, description)
            VALUES ($1, $2, $3)
            ON CONFLICT (slug) DO NOTHING
            "#,
        )
        .bind(name)
        .bind(slug)
        .bind(description)
        .execute(pool)
        .await?
        .rows_affected();
    }

    Ok(inserted)
}

/// All categories with their number of published articles.
pub async fn list_with_counts(pool: &DbPool) -> Result<Vec<CategoryWithCount>, AppError> {
    let categories = sqlx::query_as::<_, CategoryWithCount>(
        r#"
        SELECT c.id, c.name, c.slug, c.description,
               (SELECT COUNT(*) FROM articles a
                WHERE a.category = c.slug AND a.status = 'published') AS article_count
        FROM categories c
        ORDER BY c.name
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(categories)
}

pub async fn list(pool: &DbPool) -> Result<Vec<Category>, AppError> {
    let categories =
        sqlx::query_as::<_, Category>("SELECT id, name, slug, description FROM categories ORDER BY name")
            .fetch_all(pool)
            .await?;

    Ok(categories)
}

/// Create a category.
///
/// # Errors
///
/// - `InvalidRequest`: name or slug is blank
/// - `CategoryExists`: another category already uses the slug
pub async fn create(pool: &DbPool, request: CreateCategoryRequest) -> Result<Category, AppError> {
    if request.name.trim().is_empty() || request.slug.trim().is_empty() {
        return Err(AppError::InvalidRequest(
            "name and slug are required".to_string(),
        ));
    }

    // ON CONFLICT keeps the existence check and insert atomic
    let category = sqlx::query_as::<_, Category>(
        r#"
        INSERT INTO categories (name, slug, description)
        VALUES ($1, $2, $3)
        ON CONFLICT (slug) DO NOTHING
        RETURNING id, name, slug, description
        "#,
    )
    .bind(&request.name)
    .bind(&request.slug)
    .bind(&request.description)
    .fetch_optional(pool)
    .await?
    .ok_or(AppError::CategoryExists)?;

    tracing::info!("Created category {}", category.slug);

    Ok(category)
}

pub async fn delete(pool: &DbPool, id: Uuid) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM categories WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::CategoryNotFound);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::article::{ArticleStatus, CreateArticleRequest},
        services::{article_service, slug::generate_slug},
    };
    use sqlx::PgPool;

    #[test]
    fn default_slugs_are_canonical_and_distinct() {
        let mut slugs: Vec<&str> = DEFAULT_CATEGORIES.iter().map(|(_, s, _)| *s).collect();
        for slug in &slugs {
            assert_eq!(generate_slug(slug), *slug);
        }
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), DEFAULT_CATEGORIES.len());
    }

    fn category(name: &str, slug: &str) -> CreateCategoryRequest {
        CreateCategoryRequest {
            name: name.to_string(),
            slug: slug.to_string(),
            description: None,
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore]
    async fn seeding_twice_adds_nothing(pool: PgPool) {
        assert_eq!(seed_defaults(&pool).await.unwrap(), 5);
        assert_eq!(seed_defaults(&pool).await.unwrap(), 0);
        assert_eq!(list(&pool).await.unwrap().len(), DEFAULT_CATEGORIES.len());
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore]
    async fn duplicate_slug_is_rejected(pool: PgPool) {
        create(&pool, category("Gear", "gear")).await.unwrap();

        let result = create(&pool, category("Gear again", "gear")).await;
        assert!(matches!(result, Err(AppError::CategoryExists)));
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore]
    async fn article_count_only_includes_published(pool: PgPool) {
        seed_defaults(&pool).await.unwrap();
        for (title, status) in [
            ("First", ArticleStatus::Published),
            ("Second", ArticleStatus::Published),
            ("Third", ArticleStatus::Draft),
        ] {
            article_service::create(
                &pool,
                CreateArticleRequest {
                    title: title.to_string(),
                    content: "Body".to_string(),
                    excerpt: "Excerpt".to_string(),
                    image_url: None,
                    category: "repairs".to_string(),
                    tags: Vec::new(),
                    meta_description: None,
                    status,
                },
            )
            .await
            .unwrap();
        }

        let categories = list_with_counts(&pool).await.unwrap();
        let count = |slug: &str| {
            categories
                .iter()
                .find(|c| c.slug == slug)
                .map(|c| c.article_count)
        };
        assert_eq!(count("repairs"), Some(2));
        assert_eq!(count("news"), Some(0));
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore]
    async fn delete_missing_category_is_not_found(pool: PgPool) {
        let created = create(&pool, category("Gear", "gear")).await.unwrap();
        delete(&pool, created.id).await.unwrap();

        let result = delete(&pool, created.id).await;
        assert!(matches!(result, Err(AppError::CategoryNotFound)));
    }
}
