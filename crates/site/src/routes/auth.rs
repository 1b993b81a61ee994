//! Demo login and logout handlers.
//!
//! Login checks a company name and the shared demo password, then stores the
//! company in the session cookie. There are no user accounts.

use axum::{Json, body::Bytes, extract::State, http::HeaderMap, response::Response};
use samena_core::CompanyName;
use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::middleware::{Session, clear_current_company, set_current_company};
use crate::routes::{paths, redirect_found};
use crate::state::AppState;

/// Message for a missing company or password.
pub const MISSING_FIELDS_MESSAGE: &str = "Entreprise et mot de passe sont requis.";

/// Message for a password that does not match the demo password.
pub const WRONG_PASSWORD_MESSAGE: &str = "Mot de passe incorrect pour la version demo.";

// =============================================================================
// Request / Response Types
// =============================================================================

/// Login request fields, as far as they could be read from the body.
///
/// The body is read leniently: a non-JSON content type, an empty or
/// malformed body, or a non-object document all count as missing fields.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LoginRequest {
    /// Company field, when it is a string.
    pub company: Option<String>,
    /// Password field, when present and not JSON-falsy.
    ///
    /// Kept as raw JSON: a non-string password is present but can never
    /// match the configured one.
    pub password: Option<Value>,
}

impl LoginRequest {
    /// Read the login fields from a request, honoring its content type.
    #[must_use]
    pub fn from_request(headers: &HeaderMap, body: &[u8]) -> Self {
        if !is_json_content_type(headers) {
            return Self::default();
        }
        Self::from_body(body)
    }

    /// Read the login fields from a raw JSON body.
    #[must_use]
    pub fn from_body(body: &[u8]) -> Self {
        let Ok(Value::Object(mut fields)) = serde_json::from_slice::<Value>(body) else {
            return Self::default();
        };

        Self {
            company: fields
                .get("company")
                .and_then(Value::as_str)
                .map(str::to_owned),
            password: fields.remove("password").filter(is_truthy),
        }
    }
}

/// `application/json` or any `application/*+json` media type.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(axum::http::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

/// JSON truthiness: `null`, `false`, `0`, `""`, `[]` and `{}` are falsy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n.abs() > 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginSuccess {
    pub success: bool,
    pub redirect_url: &'static str,
}

// =============================================================================
// Handlers
// =============================================================================

/// Handle the demo login.
///
/// # Errors
///
/// - 400 if the company is blank or the password is missing
/// - 401 if the password is not the demo password
///
/// The session is left untouched on failure.
#[instrument(skip_all)]
pub async fn api_login(
    State(state): State<AppState>,
    mut session: Session,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(Session, Json<LoginSuccess>)> {
    let request = LoginRequest::from_request(&headers, &body);

    let company = request
        .company
        .as_deref()
        .and_then(|raw| CompanyName::parse(raw).ok());
    let (Some(company), Some(password)) = (company, request.password) else {
        return Err(AppError::BadRequest(MISSING_FIELDS_MESSAGE.to_string()));
    };

    let accepted = password
        .as_str()
        .is_some_and(|candidate| state.password_matches(candidate));
    if !accepted {
        tracing::warn!(company = %company, "Demo login rejected: wrong password");
        return Err(AppError::Unauthorized(WRONG_PASSWORD_MESSAGE.to_string()));
    }

    set_current_company(&mut session, &company)?;

    tracing::info!(company = %company, "Demo login");
    add_breadcrumb("auth", "Demo login", Some(&[("company", company.as_str())]));

    Ok((
        session,
        Json(LoginSuccess {
            success: true,
            redirect_url: paths::DASHBOARD,
        }),
    ))
}

/// Handle logout.
///
/// Clears the session and returns to the login page. Logging out without a
/// session is a no-op apart from the redirect.
#[instrument(skip_all)]
pub async fn logout(mut session: Session) -> (Session, Response) {
    clear_current_company(&mut session);
    (session, redirect_found(paths::LOGIN))
}
