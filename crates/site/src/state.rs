//! Application state shared across handlers.

use std::sync::Arc;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use secrecy::ExposeSecret;

use crate::config::SiteConfig;
use crate::middleware::session::{SessionSettings, signing_key};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Everything in it is immutable after startup.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SiteConfig,
    cookie_key: Key,
    session_settings: SessionSettings,
}

impl AppState {
    /// Create the application state from a loaded configuration.
    #[must_use]
    pub fn new(config: SiteConfig) -> Self {
        let cookie_key = signing_key(&config.session_secret);
        let session_settings = SessionSettings::from_config(&config);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                cookie_key,
                session_settings,
            }),
        }
    }

    /// Check a submitted password against the configured demo password.
    ///
    /// Exact string comparison, not constant-time.
    #[must_use]
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.inner.config.demo_password.expose_secret() == candidate
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.inner.cookie_key.clone()
    }
}

impl FromRef<AppState> for SessionSettings {
    fn from_ref(state: &AppState) -> Self {
        state.inner.session_settings.clone()
    }
}
