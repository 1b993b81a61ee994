//! Login state helpers.
//!
//! The login gate is two session values: a `logged_in` flag and the company
//! name. These helpers keep them consistent, so `logged_in == true` always
//! comes with a non-empty company.

use samena_core::CompanyName;

use crate::middleware::session::Session;
use crate::models::session_keys;

/// Whether the session belongs to a logged-in company.
#[must_use]
pub fn is_logged_in(session: &Session) -> bool {
    session.get_or(session_keys::LOGGED_IN, false)
}

/// Company name to show on pages, falling back to the site default.
#[must_use]
pub fn display_company(session: &Session) -> String {
    session.get_or(session_keys::COMPANY, CompanyName::DEFAULT.to_string())
}

/// Mark the session as logged in for `company` and make it long-lived.
///
/// # Errors
///
/// Returns an error if the session values cannot be serialized.
pub fn set_current_company(
    session: &mut Session,
    company: &CompanyName,
) -> Result<(), serde_json::Error> {
    session.insert(session_keys::COMPANY, company)?;
    session.insert(session_keys::LOGGED_IN, true)?;
    session.set_permanent(true);
    Ok(())
}

/// Forget the logged-in company (logout).
///
/// Clearing an already empty session is harmless.
pub fn clear_current_company(session: &mut Session) {
    session.clear();
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum_extra::extract::cookie::SignedCookieJar;
    use secrecy::SecretString;

    use super::*;
    use crate::middleware::session::{SessionSettings, signing_key};

    fn session() -> Session {
        let jar = SignedCookieJar::new(signing_key(&SecretString::from("test-secret")));
        let settings = SessionSettings {
            secure: false,
            lifetime: time::Duration::days(31),
        };
        Session::from_jar(jar, settings)
    }

    fn stored_company(session: &Session) -> Option<CompanyName> {
        session.get(session_keys::COMPANY)
    }

    #[test]
    fn test_anonymous_session() {
        let session = session();
        assert!(!is_logged_in(&session));
        assert_eq!(stored_company(&session), None);
        assert_eq!(display_company(&session), "Samena");
    }

    #[test]
    fn test_set_current_company() {
        let mut session = session();
        let acme = CompanyName::parse("Acme").unwrap();

        set_current_company(&mut session, &acme).unwrap();

        assert!(is_logged_in(&session));
        assert_eq!(stored_company(&session), Some(acme));
        assert_eq!(display_company(&session), "Acme");
    }

    #[test]
    fn test_company_without_flag_is_not_logged_in() {
        let mut session = session();
        session.insert(session_keys::COMPANY, "Acme").unwrap();

        assert!(!is_logged_in(&session));
        assert_eq!(display_company(&session), "Acme");
    }

    #[test]
    fn test_clear_current_company() {
        let mut session = session();
        let acme = CompanyName::parse("Acme").unwrap();
        set_current_company(&mut session, &acme).unwrap();

        clear_current_company(&mut session);

        assert!(!is_logged_in(&session));
        assert_eq!(stored_company(&session), None);
        assert_eq!(display_company(&session), "Samena");
    }
}
