//! Eager versus lazy fallbacks.
//!
//! `unwrap_or(generate())` evaluates `generate()` before the option is
//! even inspected, so its side effects happen on every call.
//! `map_or_else(generate, ..)` only calls it when the option is `None`.
//! The returned value is the same whenever a name is present; only the
//! side effects differ, so [`NameGenerator`] counts its invocations.
//!
//! # Examples
//!
//! ```
//! use optional_patterns::patterns::{NameGenerator, User, username_or_eager, username_or_lazy};
//!
//! let user = User::friendly();
//! let generator = NameGenerator::new();
//!
//! assert_eq!(username_or_eager(&user, &generator), "friendly_user");
//! assert_eq!(generator.invocations(), 1);
//!
//! assert_eq!(username_or_lazy(&user, &generator), "friendly_user");
//! assert_eq!(generator.invocations(), 1);
//! ```

use std::cell::Cell;

/// Name of the stock user.
pub const FRIENDLY_USERNAME: &str = "friendly_user";

/// Name handed out when a user has none.
pub const GUEST_NAME: &str = "Guest";

/// A user whose name may be unknown.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct User {
    name: Option<String>,
}

impl User {
    /// A user with a known name
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// A user without a name
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { name: None }
    }

    /// The stock user, named [`FRIENDLY_USERNAME`]
    #[must_use]
    pub fn friendly() -> Self {
        Self::named(FRIENDLY_USERNAME)
    }

    /// The user's name, if known.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Produces fallback names and counts how often it was asked to.
#[derive(Debug, Default)]
pub struct NameGenerator {
    invocations: Cell<usize>,
}

impl NameGenerator {
    /// Creates a generator that has not been invoked yet
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates a fallback name.
    pub fn generate(&self) -> String {
        self.invocations.set(self.invocations.get() + 1);
        tracing::debug!(
            invocation = self.invocations.get(),
            "generating fallback username"
        );
        GUEST_NAME.to_string()
    }

    /// How many times [`generate`](Self::generate) has run.
    #[must_use]
    pub const fn invocations(&self) -> usize {
        self.invocations.get()
    }
}

/// The user's name, with a fallback that is always computed.
#[allow(clippy::or_fun_call)]
pub fn username_or_eager(user: &User, generator: &NameGenerator) -> String {
    user.name()
        .map(str::to_string)
        .unwrap_or(generator.generate())
}

/// The user's name, with a fallback computed only when needed.
pub fn username_or_lazy(user: &User, generator: &NameGenerator) -> String {
    user.name()
        .map_or_else(|| generator.generate(), str::to_string)
}
