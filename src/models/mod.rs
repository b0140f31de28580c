//! Data models representing database entities and API payloads.

/// Admin login, verification and stats payloads
pub mod admin;
/// Blog article model
pub mod article;
/// Article category model
pub mod category;
/// Client status check model
pub mod status_check;
