//! Article service - queries and mutations on the `articles` table.
//!
//! Public reads only ever see `published` articles. Admin operations see
//! everything and take care of slug generation and uniqueness.

use uuid::Uuid;

use crate::{
    db::DbPool,
    error::AppError,
    models::article::{
        Article, ArticlePage, ArticleStatus, CreateArticleRequest, UpdateArticleRequest,
    },
    services::slug,
};

/// Largest page the public list endpoint will return.
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Upper bound on the admin article listing.
const ADMIN_LIST_LIMIT: i64 = 1000;

/// Writes attempted before a slug collision is reported as an error.
const SLUG_ATTEMPTS: u32 = 5;

/// Name of the unique constraint on `articles.slug`.
const SLUG_CONSTRAINT: &str = "articles_slug_key";

/// Parse an article or category id taken from the URL path.
pub fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::InvalidId)
}

/// Validate pagination parameters.
///
/// # Rules
///
/// - `limit` must be within `1..=MAX_PAGE_LIMIT`
/// - `offset` must not be negative
pub fn validate_page(limit: i64, offset: i64) -> Result<(), AppError> {
    if !(1..=MAX_PAGE_LIMIT).contains(&limit) {
        return Err(AppError::InvalidRequest(format!(
            "limit must be between 1 and {}",
            MAX_PAGE_LIMIT
        )));
    }
    if offset < 0 {
        return Err(AppError::InvalidRequest(
            "offset must not be negative".to_string(),
        ));
    }
    Ok(())
}

/// List published articles, newest first, optionally filtered by category slug.
pub async fn list_published(
    pool: &DbPool,
    category: Option<&str>,
    limit: i64,
    offset: i64,
) -> Result<ArticlePage, AppError> {
    validate_page(limit, offset)?;

    let articles = sqlx::query_as::<_, Article>(
        r#"
        SELECT * FROM articles
        WHERE status = 'published' AND ($1::text IS NULL OR category = $1)
        ORDER BY created_at DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(category)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    let total: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM articles WHERE status = 'published' AND ($1::text IS NULL OR category = $1)",
    )
    .bind(category)
    .fetch_one(pool)
    .await?;

    Ok(ArticlePage {
        articles,
        total,
        limit,
        offset,
    })
}

/// Fetch a published article by slug.
///
/// Drafts are reported as not found.
pub async fn get_published(pool: &DbPool, slug: &str) -> Result<Article, AppError> {
    sqlx::query_as::<_, Article>(
        "SELECT * FROM articles WHERE slug = $1 AND status = 'published'",
    )
    .bind(slug)
    .fetch_optional(pool)
    .await?
    .ok_or(AppError::ArticleNotFound)
}

/// Most recent published articles.
pub async fn list_recent(pool: &DbPool, limit: i64) -> Result<Vec<Article>, AppError> {
    validate_page(limit, 0)?;

    let articles = sqlx::query_as::<_, Article>(
        "SELECT * FROM articles WHERE status = 'published' ORDER BY created_at DESC LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(articles)
}

/// All articles regardless of status, most recently edited first.
pub async fn list_all(
    pool: &DbPool,
    status: Option<ArticleStatus>,
) -> Result<Vec<Article>, AppError> {
    let articles = sqlx::query_as::<_, Article>(
        r#"
        SELECT * FROM articles
        WHERE ($1::text IS NULL OR status = $1)
        ORDER BY updated_at DESC
        LIMIT $2
        "#,
    )
    .bind(status.map(ArticleStatus::as_str))
    .bind(ADMIN_LIST_LIMIT)
    .fetch_all(pool)
    .await?;

    Ok(articles)
}

pub async fn get_by_id(pool: &DbPool, id: Uuid) -> Result<Article, AppError> {
    sqlx::query_as::<_, Article>("SELECT * FROM articles WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(AppError::ArticleNotFound)
}

/// Create an article.
///
/// # Process
///
/// 1. Derive the slug from the title
/// 2. Add a random suffix if the slug is empty or already taken
/// 3. Insert with `created_at = updated_at = NOW()`
///
/// A concurrent writer can claim the slug between the check and the insert; the
/// unique constraint catches that and the insert is retried with a fresh suffix.
pub async fn create(pool: &DbPool, request: CreateArticleRequest) -> Result<Article, AppError> {
    if request.title.trim().is_empty() {
        return Err(AppError::InvalidRequest("title must not be empty".to_string()));
    }

    let base = slug::generate_slug(&request.title);
    let mut slug = available_slug(pool, &base, None).await?;
    let mut attempt = 1;

    let article = loop {
        match insert_article(pool, &request, &slug).await {
            Err(e) if attempt < SLUG_ATTEMPTS && is_slug_conflict(&e) => {
                tracing::debug!("Slug {} taken concurrently, retrying", slug);
                slug = slug::with_suffix(&base);
                attempt += 1;
            }
            result => break result?,
        }
    };

    tracing::info!("Created article {} ({})", article.id, article.slug);

    Ok(article)
}

/// Apply a partial update.
///
/// Fields left out of the request keep their value. A new title regenerates the
/// slug, unless the current slug already derives from that title (possibly with
/// a suffix), in which case the URL stays stable.
pub async fn update(
    pool: &DbPool,
    id: Uuid,
    request: UpdateArticleRequest,
) -> Result<Article, AppError> {
    let (base, mut slug) = match request.title.as_deref() {
        Some(title) if title.trim().is_empty() => {
            return Err(AppError::InvalidRequest("title must not be empty".to_string()));
        }
        Some(title) => {
            let current = get_by_id(pool, id).await?;
            let base = slug::generate_slug(title);
            let slug = if slug::is_variant_of(&current.slug, &base) {
                None
            } else {
                Some(available_slug(pool, &base, Some(id)).await?)
            };
            (base, slug)
        }
        None => (String::new(), None),
    };
    let mut attempt = 1;

    loop {
        match update_article(pool, id, &request, slug.as_deref()).await {
            Err(e) if slug.is_some() && attempt < SLUG_ATTEMPTS && is_slug_conflict(&e) => {
                slug = Some(slug::with_suffix(&base));
                attempt += 1;
            }
            result => return result?.ok_or(AppError::ArticleNotFound),
        }
    }
}

pub async fn delete(pool: &DbPool, id: Uuid) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM articles WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::ArticleNotFound);
    }

    tracing::info!("Deleted article {}", id);

    Ok(())
}


/// Slug derived from `base` that no other article uses right now.
///
/// `exclude` is the id of the article being renamed, which may keep its own slug.
async fn available_slug(
    pool: &DbPool,
    base: &str,
    exclude: Option<Uuid>,
) -> Result<String, AppError> {
    if base.is_empty() {
        return Ok(slug::with_suffix(base));
    }

    let taken: bool = sqlx::query_scalar(
        "SELECT EXISTS(SELECT 1 FROM articles WHERE slug = $1 AND ($2::uuid IS NULL OR id <> $2))",
    )
    .bind(base)
    .bind(exclude)
    .fetch_one(pool)
    .await?;

    if taken {
        Ok(slug::with_suffix(base))
    } else {
        Ok(base.to_string())
    }
}

/// True when `error` is the unique constraint on `articles.slug`.
fn is_slug_conflict(error: &sqlx::Error) -> bool {
    match error {
        sqlx::Error::Database(db) => {
            db.is_unique_violation() && db.constraint() == Some(SLUG_CONSTRAINT)
        }
        _ => false,
    }
}

async fn insert_article(
    pool: &DbPool,
    request: &CreateArticleRequest,
    slug: &str,
) -> Result<Article, sqlx::Error> {
    sqlx::query_as::<_, Article>(
        r#"
        INSERT INTO articles (
            title,
            slug,
            content,
            excerpt,
            image_url,
            category,
            tags,
            meta_description,
            status
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING *
        "#,
    )
    .bind(&request.title)
    .bind(slug)
    .bind(&request.content)
    .bind(&request.excerpt)
    .bind(&request.image_url)
    .bind(&request.category)
    .bind(&request.tags)
    .bind(&request.meta_description)
    .bind(request.status.as_str())
    .fetch_one(pool)
    .await
}

async fn update_article(
    pool: &DbPool,
    id: Uuid,
    request: &UpdateArticleRequest,
    slug: Option<&str>,
) -> Result<Option<Article>, sqlx::Error> {
    sqlx::query_as::<_, Article>(
        r#"
        UPDATE articles
        SET title = COALESCE($2, title),
            slug = COALESCE($3, slug),
            content = COALESCE($4, content),
            excerpt = COALESCE($5, excerpt),
            image_url = COALESCE($6, image_url),
            category = COALESCE($7, category),
            tags = COALESCE($8, tags),
            meta_description = COALESCE($9, meta_description),
            status = COALESCE($10, status),
            updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(&request.title)
    .bind(slug)
    .bind(&request.content)
    .bind(&request.excerpt)
    .bind(&request.image_url)
    .bind(&request.category)
    .bind(&request.tags)
    .bind(&request.meta_description)
    .bind(request.status.map(ArticleStatus::as_str))
    .fetch_optional(pool)
    .await
}
