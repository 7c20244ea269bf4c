//! Error types.
//!
//! None of the demonstrations can fail: absence is always modelled as
//! `None`. Errors only arise at the edges, when text has to be turned into
//! one of the closed enumerations or when the demo binary reads its
//! settings from the environment.

use thiserror::Error;

/// Error returned when text does not name a variant of a closed enumeration.
///
/// # Examples
///
/// ```
/// use optional_patterns::error::ParseError;
///
/// let error = ParseError::new("Country", "DE");
/// assert_eq!(error.kind, "Country");
/// assert_eq!(error.input, "DE");
/// assert_eq!(error.to_string(), "unknown Country: 'DE'");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown {kind}: '{input}'")]
pub struct ParseError {
    /// Name of the enumeration that was being parsed
    pub kind: &'static str,
    /// The rejected input
    pub input: String,
}

impl ParseError {
    /// Creates a new `ParseError`
    #[must_use]
    pub fn new(kind: &'static str, input: &str) -> Self {
        Self {
            kind,
            input: input.to_string(),
        }
    }
}

/// Configuration error raised while loading [`DemoConfig`](crate::config::DemoConfig).
///
/// A missing variable is never an error; it simply falls back to its
/// default. Only a variable that is present but unusable is reported.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    #[error("invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid_value(key: &str, message: &impl ToString) -> Self {
        Self::InvalidValue {
            key: key.to_string(),
            message: message.to_string(),
        }
    }
}
