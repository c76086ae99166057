//! Tutors service routes

use anyhow::Result;
use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{HeaderValue, Method, header::CONTENT_TYPE},
    middleware,
    routing::{get, post},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::info;

use crate::{
    config::CookiePolicy,
    error::{ApiError, ApiResult},
    middleware::{TOKEN_COOKIE, require_token},
    models::{AuthResponse, LoginRequest},
    state::AppState,
};

pub mod bookings;
pub mod tutors;

/// Create the router for the tutors service
pub fn create_router(state: AppState) -> Router {
    let protected_routes = Router::new()
        .route(
            "/bokedItem",
            post(bookings::create_booking).get(bookings::get_bookings),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_token,
        ));

    Router::new()
        .route("/", get(root))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/tutors", post(tutors::create_tutor).get(tutors::get_tutors))
        .route("/tutors/email", get(tutors::get_tutor_by_email))
        .route(
            "/tutors/:id",
            get(tutors::get_tutor)
                .put(tutors::update_tutor)
                .delete(tutors::delete_tutor),
        )
        .merge(protected_routes)
        .with_state(state)
}

/// Credentialed CORS restricted to the configured origins
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| HeaderValue::from_str(origin))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE]))
}

/// Banner endpoint
pub async fn root() -> &'static str {
    "Tutors API is running..."
}

fn token_cookie(policy: CookiePolicy, value: String) -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, value))
        .path("/")
        .http_only(true)
        .secure(policy.secure)
        .same_site(policy.same_site)
        .build()
}

/// Login endpoint
///
/// Any email is accepted; the issued token only asserts the caller claimed it.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<(CookieJar, Json<AuthResponse>)> {
    // A request without a JSON body is treated like one without an email.
    let request = match payload {
        Ok(Json(request)) => request,
        Err(JsonRejection::MissingJsonContentType(_)) => LoginRequest::default(),
        Err(rejection) => return Err(rejection.into()),
    };
    let email = request.email()?;

    info!("Login for: {}", email);

    let token = state
        .jwt_service
        .issue(&email)
        .map_err(|e| ApiError::Internal(format!("Failed to issue token: {e}")))?;

    let jar = jar.add(token_cookie(state.cookie_policy, token));

    Ok((
        jar,
        Json(AuthResponse {
            success: true,
            message: "Login successful".to_string(),
        }),
    ))
}

/// Logout endpoint
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<AuthResponse>) {
    info!("Logout request");

    let mut removal = token_cookie(state.cookie_policy, String::new());
    removal.make_removal();

    (
        jar.add(removal),
        Json(AuthResponse {
            success: true,
            message: "Logged out successfully".to_string(),
        }),
    )
}
