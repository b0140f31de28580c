//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params, etc.)
//! 2. Calls into a service or runs a query
//! 3. Returns HTTP response (JSON, status code)

/// Admin login, token verification and stats
pub mod admin;
/// Admin article management
pub mod articles;
/// Public blog endpoints
pub mod blog;
/// Admin category management
pub mod categories;
/// Bundle downloads
pub mod downloads;
/// Root info and health check
pub mod health;
/// Client status checks
pub mod status;
/// Admin image uploads
pub mod uploads;
