//! Demo configuration.
//!
//! The demo binary reads a few optional settings from the environment.
//! Every setting has a default, so an empty environment is valid; only a
//! value that is present but cannot be parsed is an error.
//!
//! # Environment Variables
//!
//! - `DEMO_CUSTOMER`: customer whose loyalty status is shown (default: "Peter Parker")
//! - `DEMO_COUNTRY`: country searched for (default: "NL")
//! - `DEMO_MINIMUM_RATING`: minimum player rating (default: none)
//!
//! # Example
//!
//! ```
//! use optional_patterns::config::DemoConfig;
//! use optional_patterns::patterns::Country;
//!
//! let config = DemoConfig::from_lookup(|key| match key {
//!     "DEMO_COUNTRY" => Some("in".to_string()),
//!     "DEMO_MINIMUM_RATING" => Some("1000".to_string()),
//!     _ => None,
//! })
//! .unwrap();
//!
//! assert_eq!(config.customer, "Peter Parker");
//! assert_eq!(config.country, Country::In);
//! assert_eq!(config.minimum_rating, Some(1000));
//! ```

use std::env::{self, VarError};
use std::str::FromStr;

use crate::error::ConfigError;
use crate::patterns::Country;

/// Variable naming the demo customer.
pub const CUSTOMER_KEY: &str = "DEMO_CUSTOMER";
/// Variable naming the searched country.
pub const COUNTRY_KEY: &str = "DEMO_COUNTRY";
/// Variable holding the minimum rating.
pub const MINIMUM_RATING_KEY: &str = "DEMO_MINIMUM_RATING";

/// Customer used when none is configured.
pub const DEFAULT_CUSTOMER: &str = "Peter Parker";

/// Settings for one demo run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoConfig {
    /// Customer whose loyalty status is shown.
    pub customer: String,
    /// Country searched for.
    pub country: Country,
    /// Minimum rating for the search, if any.
    pub minimum_rating: Option<u32>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            customer: DEFAULT_CUSTOMER.to_string(),
            country: Country::Nl,
            minimum_rating: None,
        }
    }
}

impl DemoConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable is set but is not
    /// valid Unicode or cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(|key| env_value(key, env::var(key)))
    }

    /// Loads configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a value is present but cannot
    /// be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_source(|key| Ok(lookup(key)))
    }

    fn from_source<F>(source: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<Option<String>, ConfigError>,
    {
        let defaults = Self::default();

        let customer = source(CUSTOMER_KEY)?
            .filter(|value| !value.trim().is_empty())
            .unwrap_or(defaults.customer);
        let country = parse_optional(&source, COUNTRY_KEY)?
            .unwrap_or(defaults.country);
        let minimum_rating = parse_optional(&source, MINIMUM_RATING_KEY)?;

        Ok(Self {
            customer,
            country,
            minimum_rating,
        })
    }
}

const NOT_UNICODE: &str = "value is not valid Unicode";

/// Reads one variable: unset is `None`, set but not Unicode is an error.
fn env_value(key: &str, value: Result<String, VarError>) -> Result<Option<String>, ConfigError> {
    match value {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::invalid_value(key, &NOT_UNICODE)),
    }
}

/// Parses an optional variable: absent stays `None`, present must parse.
fn parse_optional<F, T>(source: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Result<Option<String>, ConfigError>,
    T: FromStr,
    T::Err: ToString,
{
    source(key)?
        .map(|value| {
            value
                .trim()
                .parse()
                .map_err(|error: T::Err| ConfigError::invalid_value(key, &error))
        })
        .transpose()
}
