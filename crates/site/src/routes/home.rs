//! Landing and dashboard route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::{IntoResponse, Response};
use tracing::instrument;

use crate::filters;
use crate::middleware::{Session, display_company, is_logged_in};
use crate::routes::{paths, redirect_found};

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate;

/// Dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct DashboardTemplate {
    pub company_name: String,
}

/// Display the login page, or send a logged-in visitor to the dashboard.
#[instrument(skip_all)]
pub async fn index(session: Session) -> Response {
    if is_logged_in(&session) {
        return redirect_found(paths::DASHBOARD);
    }
    LoginTemplate.into_response()
}

/// Keep `/login` working for old links.
pub async fn login_redirect() -> Response {
    redirect_found(paths::LOGIN)
}

/// Display the dashboard.
///
/// Not gated: without a session it shows the default company name.
#[instrument(skip_all)]
pub async fn dashboard(session: Session) -> DashboardTemplate {
    DashboardTemplate {
        company_name: display_company(&session),
    }
}
