//! Admin image upload handler.

use axum::{
    Json,
    extract::{Multipart, State},
};

use crate::{
    error::AppError,
    services::upload_service::{self, UploadResponse},
    state::AppState,
};

/// Upload an article image.
///
/// # Request
///
/// `multipart/form-data` with a `file` field. Accepted types: JPEG, PNG, WebP, GIF.
///
/// # Response
///
/// ```json
/// {
///   "url": "/api/uploads/0b5c...9e.png",
///   "filename": "0b5c...9e.png"
/// }
/// ```
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    // Body-limit overruns surface here or while reading the field; both map to 413
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }

        let content_type = field.content_type().map(str::to_string);
        let file_name = field.file_name().map(str::to_string);

        // Check the type before reading the body
        upload_service::validate_content_type(content_type.as_deref())?;

        let data = field.bytes().await?;

        let response = upload_service::store_image(
            &state.uploads_dir,
            content_type.as_deref(),
            file_name.as_deref(),
            &data,
        )
        .await?;

        return Ok(Json(response));
    }

    Err(AppError::InvalidRequest(
        "Missing multipart field `file`".to_string(),
    ))
}
