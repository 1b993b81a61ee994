//! Site configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional. The defaults are convenient for a local demo
//! and deliberately insecure; they are reported at startup (see
//! [`SiteConfig::security_warnings`]).
//!
//! - `STATIC_WEBSITE_SECRET` - Session signing secret (default: change-me)
//! - `STATIC_WEBSITE_PASSWORD` - Shared demo password (default: demo)
//! - `HOST` - Bind address (default: 0.0.0.0)
//! - `PORT` - Listen port (default: 5000)
//! - `STATIC_WEBSITE_STATIC_DIR` - Static asset directory (default: crates/site/static)
//! - `STATIC_WEBSITE_SECURE_COOKIES` - Mark the session cookie `Secure` (default: false)
//! - `STATIC_WEBSITE_SESSION_DAYS` - Lifetime of a permanent session (default: 31)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

pub const DEFAULT_SESSION_SECRET: &str = "change-me";
pub const DEFAULT_DEMO_PASSWORD: &str = "demo";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_STATIC_DIR: &str = "crates/site/static";
const DEFAULT_SESSION_DAYS: u32 = 31;

const MIN_SESSION_SECRET_LENGTH: usize = 32;
const MIN_ENTROPY_BITS_PER_CHAR: f64 = 3.3;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "change-me",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "secret",
    "password",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "enter-",
    "put-your",
    "add-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Site configuration.
///
/// Built once at startup and handed to [`crate::app::build_router`]; nothing
/// reads the environment after that.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Session signing secret
    pub session_secret: SecretString,
    /// Shared password accepted for every company
    pub demo_password: SecretString,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// Whether the session cookie carries the `Secure` attribute
    pub secure_cookies: bool,
    /// Lifetime of a permanent session, in days
    pub session_lifetime_days: u32,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g. "production")
    pub sentry_environment: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            session_secret: SecretString::from(DEFAULT_SESSION_SECRET),
            demo_password: SecretString::from(DEFAULT_DEMO_PASSWORD),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            secure_cookies: false,
            session_lifetime_days: DEFAULT_SESSION_DAYS,
            sentry_dsn: None,
            sentry_environment: None,
        }
    }
}

impl SiteConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let env = Lookup(lookup);

        let host = env.parse_or("HOST", defaults.host)?;
        let port = env.parse_or("PORT", defaults.port)?;
        let session_secret = env
            .get("STATIC_WEBSITE_SECRET")
            .map_or(defaults.session_secret, SecretString::from);
        let demo_password = env
            .get("STATIC_WEBSITE_PASSWORD")
            .map_or(defaults.demo_password, SecretString::from);
        let static_dir = env
            .get("STATIC_WEBSITE_STATIC_DIR")
            .map_or(defaults.static_dir, PathBuf::from);
        let secure_cookies = match env.get("STATIC_WEBSITE_SECURE_COOKIES") {
            Some(value) => parse_bool("STATIC_WEBSITE_SECURE_COOKIES", &value)?,
            None => defaults.secure_cookies,
        };
        let session_lifetime_days =
            env.parse_or("STATIC_WEBSITE_SESSION_DAYS", defaults.session_lifetime_days)?;

        Ok(Self {
            host,
            port,
            session_secret,
            demo_password,
            static_dir,
            secure_cookies,
            session_lifetime_days,
            sentry_dsn: env.get("SENTRY_DSN"),
            sentry_environment: env.get("SENTRY_ENVIRONMENT"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Describe every insecure setting in this configuration.
    ///
    /// The demo runs with weak defaults out of the box, so these are reported
    /// rather than rejected.
    #[must_use]
    pub fn security_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if let Err(reason) = check_secret_strength(self.session_secret.expose_secret()) {
            warnings.push(format!("STATIC_WEBSITE_SECRET is insecure: {reason}"));
        }

        if self.demo_password.expose_secret() == DEFAULT_DEMO_PASSWORD {
            warnings.push(
                "STATIC_WEBSITE_PASSWORD is the built-in default; anyone can log in".to_string(),
            );
        }

        warnings
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Variable lookup with typed parsing.
struct Lookup<F>(F);

impl<F> Lookup<F>
where
    F: Fn(&str) -> Option<String>,
{
    /// Get a variable, treating empty values as unset.
    fn get(&self, key: &str) -> Option<String> {
        (self.0)(key).filter(|value| !value.trim().is_empty())
    }

    /// Parse a variable, or fall back to a default when unset.
    fn parse_or<T>(&self, key: &str, default: T) -> Result<T, ConfigError>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        self.get(key).map_or(Ok(default), |value| {
            value
                .trim()
                .parse::<T>()
                .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
        })
    }
}

/// Parse a boolean flag the way operators usually write them.
fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected a boolean, got '{other}'"),
        )),
    }
}

/// Calculate Shannon entropy in bits per character.
fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut freq: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }

    #[allow(clippy::cast_precision_loss)] // String length will never exceed f64 precision
    let len = s.chars().count() as f64;
    freq.values()
        .map(|&count| {
            #[allow(clippy::cast_precision_loss)] // Character count will never exceed f64 precision
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Check that a secret is long enough, not a placeholder, and has sufficient entropy.
fn check_secret_strength(secret: &str) -> Result<(), String> {
    if secret.len() < MIN_SESSION_SECRET_LENGTH {
        return Err(format!(
            "must be at least {MIN_SESSION_SECRET_LENGTH} characters (got {})",
            secret.len()
        ));
    }

    let lower = secret.to_lowercase();
    if let Some(pattern) = PLACEHOLDER_PATTERNS
        .iter()
        .find(|pattern| lower.contains(*pattern))
    {
        return Err(format!("appears to be a placeholder (contains '{pattern}')"));
    }

    let entropy = shannon_entropy(secret);
    if entropy < MIN_ENTROPY_BITS_PER_CHAR {
        return Err(format!(
            "entropy too low ({entropy:.2} bits/char, need >= {MIN_ENTROPY_BITS_PER_CHAR:.1}). Use a randomly generated secret."
        ));
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = SiteConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 5000);
        assert_eq!(config.host.to_string(), "0.0.0.0");
        assert_eq!(config.session_secret.expose_secret(), "change-me");
        assert_eq!(config.demo_password.expose_secret(), "demo");
        assert_eq!(config.static_dir, PathBuf::from("crates/site/static"));
        assert!(!config.secure_cookies);
        assert_eq!(config.session_lifetime_days, 31);
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = SiteConfig::from_lookup(lookup(&[
            ("PORT", "8080"),
            ("HOST", "127.0.0.1"),
            ("STATIC_WEBSITE_SECRET", "s3cr3t"),
            ("STATIC_WEBSITE_PASSWORD", "hunter2"),
            ("STATIC_WEBSITE_SECURE_COOKIES", "yes"),
            ("STATIC_WEBSITE_SESSION_DAYS", "7"),
            ("SENTRY_DSN", "https://key@sentry.example/1"),
        ]))
        .unwrap();

        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.session_secret.expose_secret(), "s3cr3t");
        assert_eq!(config.demo_password.expose_secret(), "hunter2");
        assert!(config.secure_cookies);
        assert_eq!(config.session_lifetime_days, 7);
        assert_eq!(
            config.sentry_dsn.as_deref(),
            Some("https://key@sentry.example/1")
        );
    }

    #[test]
    fn test_empty_value_uses_default() {
        let config = SiteConfig::from_lookup(lookup(&[("PORT", "  ")])).unwrap();
        assert_eq!(config.port, 5000);
    }

    #[test]
    fn test_invalid_port() {
        let err = SiteConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "PORT"));
    }

    #[test]
    fn test_invalid_bool() {
        let result =
            SiteConfig::from_lookup(lookup(&[("STATIC_WEBSITE_SECURE_COOKIES", "maybe")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_shannon_entropy_empty() {
        assert!((shannon_entropy("") - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shannon_entropy_two_chars() {
        // "ab" has entropy of 1 bit per char (50% a, 50% b)
        let entropy = shannon_entropy("ab");
        assert!((entropy - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_check_secret_strength_default_rejected() {
        assert!(check_secret_strength(DEFAULT_SESSION_SECRET).is_err());
    }

    #[test]
    fn test_check_secret_strength_placeholder() {
        let result = check_secret_strength("your-session-key-goes-here-0123456789");
        assert!(result.unwrap_err().contains("placeholder"));
    }

    #[test]
    fn test_check_secret_strength_low_entropy() {
        let result = check_secret_strength(&"a".repeat(40));
        assert!(result.unwrap_err().contains("entropy"));
    }

    #[test]
    fn test_check_secret_strength_valid() {
        assert!(check_secret_strength("aB3$xY9!mK2@nL5#pQ7&rT0*uW4^zC6%").is_ok());
    }

    #[test]
    fn test_security_warnings_for_defaults() {
        let warnings = SiteConfig::default().security_warnings();
        assert_eq!(warnings.len(), 2);
        assert!(warnings.iter().any(|w| w.contains("STATIC_WEBSITE_SECRET")));
        assert!(warnings.iter().any(|w| w.contains("STATIC_WEBSITE_PASSWORD")));
    }

    #[test]
    fn test_security_warnings_for_strong_settings() {
        let config = SiteConfig {
            session_secret: SecretString::from("aB3$xY9!mK2@nL5#pQ7&rT0*uW4^zC6%"),
            demo_password: SecretString::from("a-real-demo-passphrase"),
            ..SiteConfig::default()
        };
        assert!(config.security_warnings().is_empty());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = SiteConfig {
            session_secret: SecretString::from("super_secret_signing_key"),
            demo_password: SecretString::from("super_secret_password"),
            ..SiteConfig::default()
        };

        let debug_output = format!("{config:?}");

        assert!(debug_output.contains("5000"));
        assert!(!debug_output.contains("super_secret_signing_key"));
        assert!(!debug_output.contains("super_secret_password"));
    }
}
