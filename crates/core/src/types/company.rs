//! Company name type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`CompanyName`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CompanyNameError {
    /// The input is empty or only whitespace.
    #[error("company name cannot be empty")]
    Empty,
}

/// The name of the company a demo session is logged in as.
///
/// Surrounding whitespace is trimmed on parse, so a `CompanyName` is never
/// empty and never starts or ends with whitespace. There is no length limit.
///
/// ## Examples
///
/// ```
/// use samena_core::CompanyName;
///
/// let name = CompanyName::parse("  Acme  ").unwrap();
/// assert_eq!(name.as_str(), "Acme");
///
/// assert!(CompanyName::parse("").is_err());
/// assert!(CompanyName::parse(" \t\n").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct CompanyName(String);

impl CompanyName {
    /// Name shown on the dashboard when no company is in the session.
    pub const DEFAULT: &'static str = "Samena";

    /// Parse a `CompanyName`, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed input is empty.
    pub fn parse(s: &str) -> Result<Self, CompanyNameError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(CompanyNameError::Empty);
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the company name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompanyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CompanyName {
    type Error = CompanyNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CompanyName> for String {
    fn from(value: CompanyName) -> Self {
        value.0
    }
}
