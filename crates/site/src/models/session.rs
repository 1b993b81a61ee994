//! Session-related types.
//!
//! Keys under which the login state is stored in the session cookie.

/// Session keys for authentication data.
pub mod keys {
    /// Key for the `logged_in` flag.
    pub const LOGGED_IN: &str = "logged_in";

    /// Key for the name of the logged-in company.
    pub const COMPANY: &str = "company";
}
