//! Admin credentials and in-memory session tokens.
//!
//! There is a single administrator whose email and password come from configuration.
//! Logging in issues an opaque bearer token that stays valid for the configured
//! lifetime. Tokens live only in process memory and are lost on restart.

use std::{collections::HashMap, sync::Arc};

use chrono::{DateTime, Duration, Utc};
use sha2::{Digest, Sha256};
use tokio::sync::RwLock;

use crate::error::AppError;

/// Admin login credentials with the password kept only as a SHA-256 digest.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub email: String,

    /// Hex-encoded SHA-256 of the admin password (64 hex characters)
    pub password_hash: String,
}

impl AdminCredentials {
    pub fn new(email: impl Into<String>, password: &str) -> Self {
        Self {
            email: email.into(),
            password_hash: hash_password(password),
        }
    }

    /// Check an email/password pair against these credentials.
    pub fn matches(&self, email: &str, password: &str) -> bool {
        email == self.email && hash_password(password) == self.password_hash
    }
}

/// Hash a password using SHA-256 and hex-encode the digest.
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// An authenticated admin session.
#[derive(Debug, Clone)]
pub struct Session {
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Shared map from bearer token to session.
///
/// Cloning is cheap; all clones see the same sessions.
#[derive(Debug, Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Create a session for `email` and return its token.
    ///
    /// Expired sessions are pruned on every issue so the map stays bounded.
    pub async fn issue(&self, email: &str) -> String {
        self.issue_at(email, Utc::now()).await
    }

    pub(crate) async fn issue_at(&self, email: &str, now: DateTime<Utc>) -> String {
        let token = generate_token();
        let mut sessions = self.sessions.write().await;

        sessions.retain(|_, session| now - session.created_at <= self.ttl);
        sessions.insert(
            token.clone(),
            Session {
                email: email.to_string(),
                created_at: now,
            },
        );

        token
    }

    /// Look up a token.
    ///
    /// # Errors
    ///
    /// - `InvalidToken`: token was never issued (or already removed)
    /// - `TokenExpired`: token is older than the session lifetime; it is removed
    pub async fn verify(&self, token: &str) -> Result<Session, AppError> {
        self.verify_at(token, Utc::now()).await
    }

    pub(crate) async fn verify_at(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<Session, AppError> {
        let mut sessions = self.sessions.write().await;

        let session = sessions.get(token).ok_or(AppError::InvalidToken)?;

        if now - session.created_at > self.ttl {
            sessions.remove(token);
            return Err(AppError::TokenExpired);
        }

        Ok(session.clone())
    }

    /// Number of tracked sessions, including not-yet-pruned expired ones.
    #[cfg(test)]
    pub(crate) async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

/// Authenticate the admin and open a session.
///
/// # Errors
///
/// Returns `InvalidCredentials` if the email or password does not match.
pub async fn login(
    credentials: &AdminCredentials,
    sessions: &SessionStore,
    email: &str,
    password: &str,
) -> Result<String, AppError> {
    if !credentials.matches(email, password) {
        tracing::warn!("Rejected admin login for {}", email);
        return Err(AppError::InvalidCredentials);
    }

    let token = sessions.issue(email).await;
    tracing::info!("Admin {} logged in", email);

    Ok(token)
}

/// Generate cryptographically secure random token.
///
/// # Output
///
/// 64 hex characters (32 random bytes)
fn generate_token() -> String {
    let bytes: [u8; 32] = rand::random();
    hex::encode(bytes)
}
