//! HTTP middleware stack for the site.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. `TraceLayer` (request span with method, uri, status, latency)
//! 3. Request ID (add unique ID to each request)
//! 4. Security headers (CSP, frame options, etc.)
//!
//! The session is not a layer: handlers extract [`Session`] directly and
//! return it when they change it.

pub mod auth;
pub mod request_id;
pub mod security_headers;
pub mod session;

pub use auth::{clear_current_company, display_company, is_logged_in, set_current_company};
pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
pub use session::{Session, SessionSettings, signing_key};
