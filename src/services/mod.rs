//! Business logic services.
//!
//! Services contain core business logic separated from HTTP handlers.
//! They handle validation, slug generation, sessions and file storage.

pub mod article_service;
pub mod category_service;
pub mod session_service;
pub mod slug;
pub mod upload_service;
