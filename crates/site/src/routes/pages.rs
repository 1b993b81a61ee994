//! Assistant placeholder page handlers.
//!
//! The assistants are disabled in the demo; the pages still render so the
//! front-end can exercise the stub API.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Router, routing::get};

use crate::filters;
use crate::state::AppState;

/// Accounting assistant page.
#[derive(Template, WebTemplate)]
#[template(path = "compta.html")]
pub struct ComptaTemplate;

/// Document explanation page.
#[derive(Template, WebTemplate)]
#[template(path = "explain.html")]
pub struct ExplainTemplate;

/// Prospecting assistant page.
#[derive(Template, WebTemplate)]
#[template(path = "prospec.html")]
pub struct ProspecTemplate;

/// Display the accounting assistant page.
pub async fn compta() -> ComptaTemplate {
    ComptaTemplate
}

/// Display the document explanation page.
pub async fn explain() -> ExplainTemplate {
    ExplainTemplate
}

/// Display the prospecting assistant page.
pub async fn prospec() -> ProspecTemplate {
    ProspecTemplate
}

/// Create the assistant pages router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/compta", get(compta))
        .route("/explain", get(explain))
        .route("/prospec", get(prospec))
}
