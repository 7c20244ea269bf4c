//! Acting on a value only when it is present.
//!
//! A contact's address is either postal or an email address. The email is
//! exposed as an `Option<&str>`; sending mail is an action that should run
//! only when it is there.

use std::cell::RefCell;
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Kind of a contact address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum AddressKind {
    /// A street address
    Postal,
    /// An email address
    Email,
}

impl AddressKind {
    /// Upper-case name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Postal => "POSTAL",
            Self::Email => "EMAIL",
        }
    }
}

impl fmt::Display for AddressKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for AddressKind {
    type Err = ParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        [Self::Postal, Self::Email]
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(input.trim()))
            .ok_or_else(|| ParseError::new("AddressKind", input))
    }
}

/// An address and its kind.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Address {
    /// Kind of the address
    pub kind: AddressKind,
    /// The address text
    pub value: String,
}

impl Address {
    /// An email address
    #[must_use]
    pub fn email(value: impl Into<String>) -> Self {
        Self {
            kind: AddressKind::Email,
            value: value.into(),
        }
    }

    /// A postal address
    #[must_use]
    pub fn postal(value: impl Into<String>) -> Self {
        Self {
            kind: AddressKind::Postal,
            value: value.into(),
        }
    }
}

/// A person and the one address they can be reached at.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersonContact {
    /// The person's name
    pub name: String,
    /// Where to reach them
    pub address: Address,
}

impl PersonContact {
    /// Creates a new `PersonContact`
    #[must_use]
    pub fn new(name: impl Into<String>, address: Address) -> Self {
        Self {
            name: name.into(),
            address,
        }
    }

    /// The email address, if this contact is reachable by email.
    ///
    /// A postal contact is not an error, it simply has no email.
    ///
    /// # Examples
    ///
    /// ```
    /// use optional_patterns::patterns::{Address, PersonContact};
    ///
    /// let email = Address::email("bruce.wayne@wayneenterprises.com");
    /// let bruce = PersonContact::new("Bruce Wayne", email);
    /// assert_eq!(bruce.retrieve_email(), Some("bruce.wayne@wayneenterprises.com"));
    ///
    /// let peter = PersonContact::new("Peter Parker", Address::postal("20 Ingram Street"));
    /// assert_eq!(peter.retrieve_email(), None);
    /// ```
    #[must_use]
    pub fn retrieve_email(&self) -> Option<&str> {
        (self.address.kind == AddressKind::Email)
            .then_some(self.address.value.as_str())
    }
}

// =============================================================================
// Sending
// =============================================================================

/// Something that can deliver mail to an address.
pub trait EmailSender {
    /// Sends a message to `address`.
    fn send(&self, address: &str);
}

/// Sender that logs each delivery and keeps the addresses it was given.
#[derive(Debug, Default)]
pub struct RecordingSender {
    sent: RefCell<Vec<String>>,
}

impl RecordingSender {
    /// Creates an empty `RecordingSender`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Addresses sent to so far, in order.
    #[must_use]
    pub fn sent(&self) -> Vec<String> {
        self.sent.borrow().clone()
    }
}

impl EmailSender for RecordingSender {
    fn send(&self, address: &str) {
        tracing::debug!(address, "email sent");
        self.sent.borrow_mut().push(address.to_string());
    }
}

/// Sends to the contact's email, checking for presence explicitly.
///
/// Returns the address that was used, if any.
pub fn notify_explicit<'a>(
    person: &'a PersonContact,
    sender: &impl EmailSender,
) -> Option<&'a str> {
    let email = person.retrieve_email();
    if let Some(address) = email {
        sender.send(address);
    }
    email
}

/// Sends to the contact's email only if there is one.
///
/// Returns the address that was used, if any.
pub fn notify<'a>(person: &'a PersonContact, sender: &impl EmailSender) -> Option<&'a str> {
    person
        .retrieve_email()
        .inspect(|address| sender.send(address))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn email_contact() -> PersonContact {
        PersonContact::new(
            "Bruce Wayne",
            Address::email("bruce.wayne@wayneenterprises.com"),
        )
    }

    #[fixture]
    fn postal_contact() -> PersonContact {
        PersonContact::new(
            "Peter Parker",
            Address::postal("20 Ingram Street, Queens"),
        )
    }

    #[rstest]
    fn test_retrieve_email_from_email_contact(email_contact: PersonContact) {
        assert_eq!(
            email_contact.retrieve_email(),
            Some("bruce.wayne@wayneenterprises.com")
        );
    }

    #[rstest]
    fn test_retrieve_email_from_postal_contact(postal_contact: PersonContact) {
        assert_eq!(postal_contact.retrieve_email(), None);
    }

    #[rstest]
    fn test_notify_sends_once(email_contact: PersonContact) {
        let sender = RecordingSender::new();

        let used = notify(&email_contact, &sender);

        assert_eq!(used, Some("bruce.wayne@wayneenterprises.com"));
        assert_eq!(sender.sent(), vec!["bruce.wayne@wayneenterprises.com"]);
    }

    #[rstest]
    fn test_notify_skips_postal(postal_contact: PersonContact) {
        let sender = RecordingSender::new();

        assert_eq!(notify(&postal_contact, &sender), None);
        assert!(sender.sent().is_empty());
    }

    #[rstest]
    fn test_notify_explicit_matches_notify(
        email_contact: PersonContact,
        postal_contact: PersonContact,
    ) {
        for contact in [&email_contact, &postal_contact] {
            let explicit_sender = RecordingSender::new();
            let fluent_sender = RecordingSender::new();

            assert_eq!(
                notify_explicit(contact, &explicit_sender),
                notify(contact, &fluent_sender)
            );
            assert_eq!(explicit_sender.sent(), fluent_sender.sent());
        }
    }

    #[rstest]
    #[case("email", AddressKind::Email)]
    #[case("POSTAL", AddressKind::Postal)]
    fn test_address_kind_from_str(#[case] input: &str, #[case] expected: AddressKind) {
        assert_eq!(input.parse::<AddressKind>(), Ok(expected));
    }

    #[rstest]
    fn test_address_kind_from_str_rejects_unknown() {
        assert!("fax".parse::<AddressKind>().is_err());
    }
}
