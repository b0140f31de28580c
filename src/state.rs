//! Shared application state handed to every handler.

use std::{path::PathBuf, sync::Arc};

use axum::extract::FromRef;
use crate::{
    config::Config,
    db::DbPool,
    services::session_service::{AdminCredentials, SessionStore},
};

/// State shared by all routes.
///
/// Everything inside is cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub sessions: SessionStore,
    pub admin: Arc<AdminCredentials>,

    /// Root of downloadable bundles
    pub static_dir: Arc<PathBuf>,

    /// Where uploaded images are written
    pub uploads_dir: Arc<PathBuf>,
}

impl AppState {
    pub fn new(pool: DbPool, config: &Config) -> Self {
        Self {
            pool,
            sessions: SessionStore::new(config.session_ttl()),
            admin: Arc::new(AdminCredentials::new(
                config.admin_email.clone(),
                &config.admin_password,
            )),
            static_dir: Arc::new(config.static_dir.clone()),
            uploads_dir: Arc::new(config.uploads_dir()),
        }
    }
}

/// Lets handlers that only need the database keep extracting `State<DbPool>`.
impl FromRef<AppState> for DbPool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}
