//! Downloadable bundle files kept in the static directory.
//!
//! - GET /api/download - Full deployment bundle
//! - GET /api/download-update - Files to transfer for an update

use std::path::Path;

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::{error::AppError, state::AppState};

/// File name of the full deployment bundle.
pub const DEPLOY_BUNDLE: &str = "deploy.zip";

/// File name of the update bundle.
pub const UPDATE_BUNDLE: &str = "transfer-files.zip";

pub async fn download_bundle(State(state): State<AppState>) -> Result<Response, AppError> {
    serve_zip(&state.static_dir, DEPLOY_BUNDLE).await
}

pub async fn download_update(State(state): State<AppState>) -> Result<Response, AppError> {
    serve_zip(&state.static_dir, UPDATE_BUNDLE).await
}

/// Send `dir/name` as a zip attachment, or `FileNotFound` if it is absent.
async fn serve_zip(dir: &Path, name: &str) -> Result<Response, AppError> {
    let bytes = match tokio::fs::read(dir.join(name)).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(AppError::FileNotFound);
        }
        Err(e) => return Err(e.into()),
    };

    Ok((
        [
            (header::CONTENT_TYPE, "application/zip".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", name),
            ),
        ],
        bytes,
    )
        .into_response())
}
