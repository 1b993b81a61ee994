//! HTTP route handlers for the site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                 - Login page (redirects to /app when logged in)
//! GET  /login            - Redirect to /
//! GET  /app              - Dashboard
//! GET  /logout           - Clear session, redirect to /
//!
//! # Assistant pages
//! GET  /compta           - Accounting assistant
//! GET  /explain          - Document explanation assistant
//! GET  /prospec          - Prospecting assistant
//!
//! # JSON API
//! POST /api/login        - Demo login
//! POST /api/compta       - Accounting assistant (disabled, fixed reply)
//! POST /api/explain      - Explanation assistant (disabled, fixed reply)
//! POST /api/prospect     - Prospecting assistant (fixed sample questions)
//! ```

pub mod api;
pub mod auth;
pub mod home;
pub mod pages;

use axum::{
    Router,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};

use crate::state::AppState;

/// Paths that handlers redirect to.
pub mod paths {
    /// Login page.
    pub const LOGIN: &str = "/";
    /// Dashboard shown after login.
    pub const DASHBOARD: &str = "/app";
}

/// `302 Found` redirect to `location`.
#[must_use]
pub fn redirect_found(location: &'static str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

/// Create the JSON API routes router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::api_login))
        .route("/compta", post(api::assistants::compta))
        .route("/explain", post(api::assistants::explain))
        .route("/prospect", post(api::assistants::prospect))
}

/// Create all routes for the site.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .route("/login", get(home::login_redirect))
        .route("/app", get(home::dashboard))
        .route("/logout", get(auth::logout))
        .merge(pages::router())
        .nest("/api", api_routes())
}
