//! Admin bearer-token authentication middleware.
//!
//! This middleware intercepts every admin request to:
//! 1. Extract the token from the Authorization header
//! 2. Verify it against the in-memory session store
//! 3. Inject the admin context into the request
//! 4. Reject unauthorized requests with HTTP 401

use crate::{error::AppError, state::AppState};
use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};

/// Authentication context attached to admin requests.
///
/// Inserted into the request's extension map; handlers extract it with
/// `Extension<AdminContext>`.
#[derive(Debug, Clone)]
pub struct AdminContext {
    /// Email of the logged-in administrator
    pub email: String,
}

/// Admin authentication middleware function.
///
/// # Flow
///
/// 1. Extract `Authorization: Bearer <token>` header from request
/// 2. Look the token up in the session store
/// 3. If valid: inject `AdminContext` into request, call next handler
/// 4. Otherwise: return 401 with the reason
///
/// # Errors
///
/// - `MissingToken`: no header, or a scheme other than `Bearer`
/// - `InvalidToken`: token unknown
/// - `TokenExpired`: token older than the session lifetime
pub async fn admin_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(request.headers()).ok_or(AppError::MissingToken)?;

    let session = state.sessions.verify(token).await?;

    request.extensions_mut().insert(AdminContext {
        email: session.email,
    });

    Ok(next.run(request).await)
}

/// Token from an `Authorization: Bearer <token>` header.
///
/// The scheme is matched case-insensitively.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let (scheme, token) = headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .split_once(' ')?;

    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}
