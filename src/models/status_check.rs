//! Status check records posted by clients to confirm connectivity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a row of the `status_checks` table.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct StatusCheck {
    pub id: Uuid,

    /// Name the client reported
    pub client_name: String,

    /// When the check was recorded
    #[sqlx(rename = "checked_at")]
    pub timestamp: DateTime<Utc>,
}

/// Request body for `POST /api/status`.
#[derive(Debug, Deserialize)]
pub struct CreateStatusCheckRequest {
    pub client_name: String,
}
