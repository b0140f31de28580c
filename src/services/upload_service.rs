//! Image upload validation and storage.
//!
//! Uploaded images are written under the uploads directory with a random
//! file name and served back at `/api/uploads/<file name>`.

use std::path::Path;

use serde::Serialize;
use uuid::Uuid;

use crate::error::AppError;

/// Content types accepted for article images.
pub const ALLOWED_CONTENT_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/webp", "image/gif"];

/// URL prefix uploaded files are served under.
pub const UPLOADS_URL_PREFIX: &str = "/api/uploads";

const FALLBACK_EXTENSION: &str = "jpg";

/// Response body of a successful upload.
///
/// ```json
/// {
///   "url": "/api/uploads/0b5c...9e.png",
///   "filename": "0b5c...9e.png"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
    pub filename: String,
}

/// Reject content types outside `ALLOWED_CONTENT_TYPES`.
pub fn validate_content_type(content_type: Option<&str>) -> Result<(), AppError> {
    match content_type {
        Some(ct) if ALLOWED_CONTENT_TYPES.contains(&ct) => Ok(()),
        _ => Err(AppError::UnsupportedFileType),
    }
}

/// File extension taken from the client-supplied file name.
///
/// Falls back to `jpg` when there is no extension or it contains anything
/// other than ASCII letters and digits.
pub fn extension_for(file_name: Option<&str>) -> String {
    file_name
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(str::to_ascii_lowercase)
        .unwrap_or_else(|| FALLBACK_EXTENSION.to_string())
}

/// Validate and persist an uploaded image.
///
/// # Process
///
/// 1. Check the content type
/// 2. Generate `<uuid>.<ext>`
/// 3. Write the bytes into `uploads_dir`
pub async fn store_image(
    uploads_dir: &Path,
    content_type: Option<&str>,
    file_name: Option<&str>,
    data: &[u8],
) -> Result<UploadResponse, AppError> {
    validate_content_type(content_type)?;

    let filename = format!("{}.{}", Uuid::new_v4(), extension_for(file_name));

    tokio::fs::create_dir_all(uploads_dir).await?;
    tokio::fs::write(uploads_dir.join(&filename), data).await?;

    tracing::info!("Stored upload {} ({} bytes)", filename, data.len());

    Ok(UploadResponse {
        url: format!("{}/{}", UPLOADS_URL_PREFIX, filename),
        filename,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_images_are_allowed() {
        assert!(validate_content_type(Some("image/png")).is_ok());
        assert!(matches!(
            validate_content_type(Some("application/pdf")),
            Err(AppError::UnsupportedFileType)
        ));
        assert!(validate_content_type(None).is_err());
    }

    #[test]
    fn extension_comes_from_last_dot() {
        assert_eq!(extension_for(Some("photo.final.PNG")), "png");
        assert_eq!(extension_for(Some("photo")), "jpg");
        assert_eq!(extension_for(None), "jpg");
        assert_eq!(extension_for(Some("trailing.")), "jpg");
    }

    #[test]
    fn path_like_extensions_fall_back() {
        assert_eq!(extension_for(Some("x.png/../../etc")), "jpg");
    }

    #[tokio::test]
    async fn stores_file_under_random_name() {
        let dir = std::env::temp_dir().join(format!("blog-api-upload-{}", Uuid::new_v4()));

        let response = store_image(&dir, Some("image/gif"), Some("anim.gif"), b"GIF89a")
            .await
            .unwrap();

        assert!(response.filename.ends_with(".gif"));
        assert_eq!(response.url, format!("/api/uploads/{}", response.filename));
        let written = tokio::fs::read(dir.join(&response.filename)).await.unwrap();
        assert_eq!(written, b"GIF89a");

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn rejected_upload_writes_nothing() {
        let dir = std::env::temp_dir().join(format!("blog-api-upload-{}", Uuid::new_v4()));

        let result = store_image(&dir, Some("text/html"), Some("x.html"), b"<html>").await;

        assert!(matches!(result, Err(AppError::UnsupportedFileType)));
        assert!(!dir.exists());
    }
}
