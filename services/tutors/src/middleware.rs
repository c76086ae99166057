//! Authentication middleware for cookie-carried identity tokens

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use tracing::{error, info};

use crate::{error::ApiError, state::AppState};

/// Name of the cookie carrying the identity token
pub const TOKEN_COOKIE: &str = "token";

/// Authenticated caller, available to handlers behind [`require_token`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub email: String,
}

/// Reject requests without a valid `token` cookie
///
/// A missing cookie yields 401, a cookie that fails verification yields 403.
/// On success the decoded [`Identity`] is added to the request extensions.
pub async fn require_token(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let token = jar
        .get(TOKEN_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|token| !token.is_empty())
        .ok_or(ApiError::Unauthenticated)?;

    let claims = state.jwt_service.verify(&token).map_err(|e| {
        error!("Failed to validate token: {}", e);
        ApiError::Forbidden
    })?;

    info!("Authenticated request for: {}", claims.email);
    req.extensions_mut().insert(Identity {
        email: claims.email,
    });

    Ok(next.run(req).await)
}
