//! The fixed demonstration sequence run by the binary.
//!
//! [`run`] walks through every pattern once and records which branch each
//! one took in a [`DemoReport`]. The console output is rendered from that
//! report, so the decisions can be asserted without capturing stdout.

use crate::config::DemoConfig;
use crate::loyalty::{Customer, Discount};
use crate::patterns::{
    Address, Award, FixedDimensions, NameGenerator, PersonContact, Player, RecordingSender,
    ShippingObject, User, award, build_shipping_object, notify, sample_scores, search_for_optional,
    username_or_eager, username_or_lazy,
};

/// Contact used for the "act only if present" demonstration.
const DEMO_CONTACT_NAME: &str = "Bruce Wayne";
const DEMO_CONTACT_EMAIL: &str = "bruce.wayne@wayneenterprises.com";

/// Outcome of one demo run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoReport {
    /// The configured customer
    pub customer: String,
    /// Loyalty status message
    pub status: String,
    /// Loyalty points
    pub points: u32,
    /// Free shipping eligibility
    pub free_shipping: bool,
    /// Discount, if any
    pub discount: Option<Discount>,
    /// Century award decision
    pub award: Award,
    /// Address the notification went to, if any
    pub email_sent_to: Option<String>,
    /// Username resolved with an eager fallback
    pub eager_username: String,
    /// Fallback generator calls made by the eager lookup
    pub eager_invocations: usize,
    /// Username resolved with a lazy fallback
    pub lazy_username: String,
    /// Fallback generator calls made by the lazy lookup
    pub lazy_invocations: usize,
    /// Shipping object built from the sample dimensions
    pub shipping: Option<ShippingObject>,
    /// Search results for the configured country
    pub players: Vec<Player>,
}

impl DemoReport {
    /// Human-readable lines, one per demonstration.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("{}: {}", self.customer, self.status),
            format!("{} has {} loyalty points", self.customer, self.points),
            if self.free_shipping {
                format!("{} ships for free", self.customer)
            } else {
                format!("{} pays for shipping", self.customer)
            },
            self.discount.map_or_else(
                || format!("No discount for {}", self.customer),
                |discount| format!("{} gets {discount}", self.customer),
            ),
            self.award.to_string(),
            self.email_sent_to.as_deref().map_or_else(
                || String::from("No email address to send to"),
                |address| format!("Email sent to {address}"),
            ),
            format!(
                "Username {} (eager, {} generator call(s)), {} (lazy, {} generator call(s))",
                self.eager_username,
                self.eager_invocations,
                self.lazy_username,
                self.lazy_invocations
            ),
            self.shipping.map_or_else(
                || String::from("Shipping object could not be built"),
                |parcel| {
                    format!(
                        "Shipping object: {} x {} x {}",
                        parcel.length, parcel.width, parcel.height
                    )
                },
            ),
            format!("Found {} player(s)", self.players.len()),
        ]
    }
}

/// Runs every demonstration once.
pub fn run(config: &DemoConfig) -> DemoReport {
    tracing::info!(
        customer = %config.customer,
        "running loyalty demonstrations"
    );
    let customer = Customer::new(config.customer.clone());

    let award = award(&sample_scores());
    tracing::info!(%award, "century award decided");

    let sender = RecordingSender::new();
    let contact = PersonContact::new(DEMO_CONTACT_NAME, Address::email(DEMO_CONTACT_EMAIL));
    let email_sent_to = notify(&contact, &sender).map(str::to_string);

    let user = User::friendly();
    let eager = NameGenerator::new();
    let lazy = NameGenerator::new();
    let eager_username = username_or_eager(&user, &eager);
    let lazy_username = username_or_lazy(&user, &lazy);

    let dimensions = FixedDimensions::new(Some(500), Some(200), Some(100));
    let shipping = build_shipping_object(&dimensions);

    tracing::info!(
        country = %config.country,
        minimum_rating = ?config.minimum_rating,
        "searching players"
    );
    let players = search_for_optional(config.country, config.minimum_rating);

    DemoReport {
        customer: customer.name().to_string(),
        status: customer.status_line(),
        points: customer.points(),
        free_shipping: customer.free_shipping_eligible(),
        discount: customer.discount(),
        award,
        email_sent_to,
        eager_username,
        eager_invocations: eager.invocations(),
        lazy_username,
        lazy_invocations: lazy.invocations(),
        shipping,
        players,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::{Country, FRIENDLY_USERNAME};
    use rstest::rstest;

    #[rstest]
    fn test_default_run() {
        let report = run(&DemoConfig::default());

        assert_eq!(report.customer, "Peter Parker");
        assert_eq!(report.points, 100);
        assert!(!report.free_shipping);
        assert_eq!(report.discount, None);
        assert_eq!(report.award, Award::Winner("Bruce Wayne".to_string()));
        assert_eq!(report.email_sent_to.as_deref(), Some(DEMO_CONTACT_EMAIL));
        assert_eq!(report.eager_username, FRIENDLY_USERNAME);
        assert_eq!(report.eager_invocations, 1);
        assert_eq!(report.lazy_username, FRIENDLY_USERNAME);
        assert_eq!(report.lazy_invocations, 0);
        assert_eq!(report.shipping, Some(ShippingObject::new(500, 200, 100)));
        assert_eq!(report.players.len(), 2);
    }

    #[rstest]
    fn test_lines_render_one_per_demonstration() {
        let lines = run(&DemoConfig::default()).lines();

        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "Peter Parker: Customer's loyalty status is: SILVER");
        assert_eq!(lines[3], "No discount for Peter Parker");
        assert_eq!(lines[4], "Award goes to Bruce Wayne");
        assert_eq!(
            lines[6],
            "Username friendly_user (eager, 1 generator call(s)), \
             friendly_user (lazy, 0 generator call(s))"
        );
    }

    #[rstest]
    fn test_run_with_unknown_customer_and_rating() {
        let config = DemoConfig {
            customer: "Matt Murdock".to_string(),
            country: Country::In,
            minimum_rating: Some(1000),
        };

        let report = run(&config);

        assert_eq!(report.status, "No loyalty status found for customer.");
        assert_eq!(report.points, 0);
        assert_eq!(report.players, vec![Player::new(Country::In, 1000)]);
        assert_eq!(report.lines()[1], "Matt Murdock has 0 loyalty points");
    }
}
