//! Client-side session store.
//!
//! The whole session lives in one signed cookie; the server keeps no session
//! table. Handlers take a [`Session`] as an extractor argument, and any
//! handler that changes it returns it as part of the response so the cookie
//! is re-issued (or removed after [`Session::clear`]).

use std::convert::Infallible;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum::response::{IntoResponseParts, ResponseParts};
use axum_extra::extract::cookie::{Cookie, Key, SameSite, SignedCookieJar};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sha2::{Digest, Sha512};

use crate::config::SiteConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "samena_session";

/// Cookie attributes applied whenever the session is written.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    /// Add the `Secure` attribute (HTTPS deployments).
    pub secure: bool,
    /// `Max-Age` of a permanent session.
    pub lifetime: time::Duration,
}

impl SessionSettings {
    /// Derive cookie settings from the site configuration.
    #[must_use]
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            secure: config.secure_cookies,
            lifetime: time::Duration::days(i64::from(config.session_lifetime_days)),
        }
    }
}

/// Derive the cookie signing key from the configured secret.
///
/// The secret may be any length, so it is stretched to the 64 bytes the
/// signing key needs with SHA-512.
#[must_use]
pub fn signing_key(secret: &SecretString) -> Key {
    let digest = Sha512::digest(secret.expose_secret().as_bytes());
    Key::from(digest.as_slice())
}

/// What actually goes into the cookie.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
struct SessionPayload {
    #[serde(default)]
    permanent: bool,
    #[serde(default)]
    values: Map<String, Value>,
}

impl SessionPayload {
    fn encode(&self) -> Result<String, serde_json::Error> {
        let json = serde_json::to_vec(self)?;
        Ok(URL_SAFE_NO_PAD.encode(json))
    }

    fn decode(raw: &str) -> Option<Self> {
        let json = URL_SAFE_NO_PAD.decode(raw).ok()?;
        serde_json::from_slice(&json).ok()
    }
}

/// Per-request view of the signed session cookie.
///
/// A missing, tampered, or unreadable cookie yields an empty session.
pub struct Session {
    jar: SignedCookieJar,
    settings: SessionSettings,
    payload: SessionPayload,
    modified: bool,
}

impl Session {
    pub(crate) fn from_jar(jar: SignedCookieJar, settings: SessionSettings) -> Self {
        let payload = jar
            .get(SESSION_COOKIE_NAME)
            .and_then(|cookie| {
                let decoded = SessionPayload::decode(cookie.value());
                if decoded.is_none() {
                    tracing::debug!("Discarding unreadable session cookie");
                }
                decoded
            })
            .unwrap_or_default();

        Self {
            jar,
            settings,
            payload,
            modified: false,
        }
    }

    /// Get a value from the session.
    ///
    /// Returns `None` if the key is absent or holds a value of another type.
    #[must_use]
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.payload
            .values
            .get(key)
            .and_then(|value| T::deserialize(value).ok())
    }

    /// Get a value from the session, or `default` if it is absent.
    #[must_use]
    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.get(key).unwrap_or(default)
    }

    /// Store a value in the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be serialized to JSON.
    pub fn insert<T: Serialize>(&mut self, key: &str, value: T) -> Result<(), serde_json::Error> {
        let value = serde_json::to_value(value)?;
        self.payload.values.insert(key.to_owned(), value);
        self.modified = true;
        Ok(())
    }

    /// Drop every value and the permanent flag.
    ///
    /// The response will expire the cookie.
    pub fn clear(&mut self) {
        self.payload = SessionPayload::default();
        self.modified = true;
    }

    /// Choose between a long-lived cookie and a browser-session cookie.
    pub fn set_permanent(&mut self, permanent: bool) {
        if self.payload.permanent != permanent {
            self.payload.permanent = permanent;
            self.modified = true;
        }
    }

    fn write_cookie(self) -> Result<SignedCookieJar, serde_json::Error> {
        if self.payload.values.is_empty() {
            return Ok(self
                .jar
                .remove(Cookie::build(SESSION_COOKIE_NAME).path("/")));
        }

        let mut cookie = Cookie::build((SESSION_COOKIE_NAME, self.payload.encode()?))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.settings.secure);

        if self.payload.permanent {
            cookie = cookie.max_age(self.settings.lifetime);
        }

        Ok(self.jar.add(cookie))
    }
}

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
    Key: FromRef<S>,
    SessionSettings: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = SignedCookieJar::from_request_parts(parts, state).await?;
        Ok(Self::from_jar(jar, SessionSettings::from_ref(state)))
    }
}

impl IntoResponseParts for Session {
    type Error = Infallible;

    fn into_response_parts(self, res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        if !self.modified {
            return Ok(res);
        }

        match self.write_cookie() {
            Ok(jar) => jar.into_response_parts(res),
            Err(e) => {
                // Keep the client's previous cookie rather than fail the response
                tracing::error!(error = %e, "Failed to encode session cookie");
                Ok(res)
            }
        }
    }
}
