//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to automatically deserialize environment variables into a type-safe struct.

use std::path::PathBuf;

use chrono::TimeDelta;
use serde::Deserialize;

/// Configuration could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable is missing or cannot be parsed into its type.
    #[error(transparent)]
    Env(#[from] envy::Error),

    /// A variable parsed but is outside its allowed range.
    #[error("{0}")]
    Invalid(String),
}

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `DATABASE_URL` (required): PostgreSQL connection string
/// - `PORT` (optional): HTTP server port, defaults to 8001
/// - `ADMIN_EMAIL` / `ADMIN_PASSWORD` (optional): admin login credentials
/// - `CORS_ORIGINS` (optional): comma-separated origins, defaults to `*`
/// - `STATIC_DIR` (optional): root of downloadable bundles and uploads, defaults to `static`
/// - `MAX_UPLOAD_BYTES` (optional): upload body limit, defaults to 10 MiB
/// - `SESSION_TTL_HOURS` (optional): admin token lifetime in hours (at least 1), defaults to 24
/// - `DB_MAX_CONNECTIONS` (optional): pool size, defaults to 5
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_admin_email")]
    pub admin_email: String,

    #[serde(default = "default_admin_password")]
    pub admin_password: String,

    #[serde(default = "default_cors_origins")]
    pub cors_origins: String,

    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,

    #[serde(default = "default_session_ttl_hours")]
    pub session_ttl_hours: u32,

    #[serde(default = "default_db_max_connections")]
    pub db_max_connections: u32,
}

/// Default port if PORT environment variable is not set.
fn default_port() -> u16 {
    8001
}

fn default_admin_email() -> String {
    "admin@example.com".to_string()
}

fn default_admin_password() -> String {
    "change-me".to_string()
}

fn default_cors_origins() -> String {
    "*".to_string()
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

/// 10 MiB
fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024
}

fn default_session_ttl_hours() -> u32 {
    24
}

fn default_db_max_connections() -> u32 {
    5
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This method first attempts to load a `.env` file (which is optional),
    /// then reads environment variables and deserializes them into a Config struct.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required environment variables are missing (e.g., DATABASE_URL)
    /// - Environment variable values cannot be parsed into expected types (e.g., PORT=abc)
    /// - A value is out of range (e.g., SESSION_TTL_HOURS=0)
    pub fn from_env() -> Result<Self, ConfigError> {
        // Try to load .env file if it exists (does nothing if not found)
        dotenvy::dotenv().ok();

        // Field names are automatically converted: database_url -> DATABASE_URL
        envy::from_env::<Config>()?.validated()
    }

    /// Build configuration from explicit key/value pairs instead of the process environment.
    #[cfg(test)]
    pub fn from_pairs<I>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Config>(pairs)?.validated()
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if self.session_ttl_hours == 0
            || TimeDelta::try_hours(i64::from(self.session_ttl_hours)).is_none()
        {
            return Err(ConfigError::Invalid(format!(
                "SESSION_TTL_HOURS must be a positive number of hours, got {}",
                self.session_ttl_hours
            )));
        }
        Ok(self)
    }

    /// Admin session lifetime.
    pub fn session_ttl(&self) -> TimeDelta {
        TimeDelta::try_hours(i64::from(self.session_ttl_hours)).unwrap_or(TimeDelta::MAX)
    }

    /// Allowed CORS origins, trimmed, empty entries removed.
    pub fn cors_origin_list(&self) -> Vec<String> {
        self.cors_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect()
    }

    /// Directory where uploaded images are written and served from.
    pub fn uploads_dir(&self) -> PathBuf {
        self.static_dir.join("uploads")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(extra: &[(&str, &str)]) -> Vec<(String, String)> {
        let mut vars = vec![("DATABASE_URL".to_string(), "postgres://localhost/blog".to_string())];
        vars.extend(extra.iter().map(|(k, v)| (k.to_string(), v.to_string())));
        vars
    }

    #[test]
    fn port_defaults_to_8001() {
        let config = Config::from_pairs(pairs(&[])).unwrap();
        assert_eq!(config.port, 8001);
        assert_eq!(config.session_ttl_hours, 24);
        assert_eq!(config.uploads_dir(), PathBuf::from("static/uploads"));
    }

    #[test]
    fn port_follows_environment() {
        let config = Config::from_pairs(pairs(&[("PORT", "9090")])).unwrap();
        assert_eq!(config.port, 9090);
    }

    #[test]
    fn malformed_port_is_rejected() {
        assert!(Config::from_pairs(pairs(&[("PORT", "not-a-port")])).is_err());
    }

    #[test]
    fn session_ttl_must_be_positive_and_in_range() {
        for value in ["0", "-5", "9223372036854775807"] {
            let result = Config::from_pairs(pairs(&[("SESSION_TTL_HOURS", value)]));
            assert!(result.is_err(), "SESSION_TTL_HOURS={} accepted", value);
        }

        let config = Config::from_pairs(pairs(&[("SESSION_TTL_HOURS", "2")])).unwrap();
        assert_eq!(config.session_ttl(), TimeDelta::hours(2));
    }

    #[test]
    fn missing_database_url_is_rejected() {
        assert!(Config::from_pairs(Vec::new()).is_err());
    }

    #[test]
    fn cors_origins_are_split_and_trimmed() {
        let config = Config::from_pairs(pairs(&[(
            "CORS_ORIGINS",
            "https://a.example, https://b.example,,",
        )]))
        .unwrap();
        assert_eq!(
            config.cors_origin_list(),
            vec!["https://a.example", "https://b.example"]
        );
    }
}
