//! Property-based tests for the explicit/combinator equivalence.
//!
//! Every pattern that is written twice must give the same answer both
//! ways, and every lookup must give the same answer when repeated:
//!
//! - **Equivalence**: `explicit(x) == combinator(x)`
//! - **Idempotence**: `f(x) == f(x)`

use optional_patterns::loyalty::Customer;
use optional_patterns::patterns::{
    Address, Country, FixedDimensions, PersonContact, RATING_MIN_VALUE, RecordingSender,
    build_shipping_object, build_shipping_object_explicit, notify, notify_explicit, search_for,
    search_for_optional, search_for_with_minimum,
};
use proptest::prelude::*;

const DIRECTORY_NAMES: [&str; 5] = [
    "Peter Parker",
    "Bruce Wayne",
    "Scott Lang",
    "Tony Stark",
    "Bruce Banner",
];

fn customer_name() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(DIRECTORY_NAMES.to_vec()).prop_map(str::to_string),
        "[A-Za-z ]{0,20}",
    ]
}

fn country() -> impl Strategy<Value = Country> {
    prop::sample::select(Country::ALL.to_vec())
}

// =============================================================================
// Loyalty
// =============================================================================

proptest! {
    #[test]
    fn prop_points_equivalence(name in customer_name()) {
        let customer = Customer::new(name);
        prop_assert_eq!(customer.points_explicit(), customer.points());
    }

    #[test]
    fn prop_free_shipping_equivalence(name in customer_name()) {
        let customer = Customer::new(name);
        prop_assert_eq!(
            customer.free_shipping_eligible_explicit(),
            customer.free_shipping_eligible()
        );
    }

    #[test]
    fn prop_discount_equivalence(name in customer_name()) {
        let customer = Customer::new(name);
        prop_assert_eq!(customer.discount_explicit(), customer.discount());
    }

    #[test]
    fn prop_status_line_equivalence(name in customer_name()) {
        let customer = Customer::new(name);
        prop_assert_eq!(customer.status_line_explicit(), customer.status_line());
    }

    /// Unregistered customers get nothing.
    #[test]
    fn prop_unregistered_customer_gets_nothing(name in "[a-z]{1,20}") {
        let customer = Customer::new(name);
        prop_assert_eq!(customer.loyalty_tier(), None);
        prop_assert_eq!(customer.points(), 0);
        prop_assert!(!customer.free_shipping_eligible());
        prop_assert_eq!(customer.discount(), None);
    }

    #[test]
    fn prop_lookup_idempotence(name in customer_name()) {
        let customer = Customer::new(name);
        prop_assert_eq!(customer.loyalty_tier(), customer.loyalty_tier());
        prop_assert_eq!(customer.discount(), customer.discount());
    }
}

// =============================================================================
// Shipping
// =============================================================================

proptest! {
    #[test]
    fn prop_shipping_equivalence(
        length in any::<Option<u32>>(),
        width in any::<Option<u32>>(),
        height in any::<Option<u32>>()
    ) {
        let retriever = FixedDimensions::new(length, width, height);
        prop_assert_eq!(
            build_shipping_object_explicit(&retriever),
            build_shipping_object(&retriever)
        );
    }

    /// The result is present exactly when all three inputs are.
    #[test]
    fn prop_shipping_all_or_nothing(
        length in any::<Option<u32>>(),
        width in any::<Option<u32>>(),
        height in any::<Option<u32>>()
    ) {
        let parcel = build_shipping_object(&FixedDimensions::new(length, width, height));
        prop_assert_eq!(
            parcel.is_some(),
            length.is_some() && width.is_some() && height.is_some()
        );
        if let Some(parcel) = parcel {
            prop_assert_eq!(Some(parcel.length), length);
            prop_assert_eq!(Some(parcel.width), width);
            prop_assert_eq!(Some(parcel.height), height);
        }
    }
}

// =============================================================================
// Search
// =============================================================================

proptest! {
    #[test]
    fn prop_search_with_minimum_equivalence(country in country(), minimum in 0u32..1500) {
        prop_assert_eq!(
            search_for_optional(country, Some(minimum)),
            search_for_with_minimum(country, minimum)
        );
    }

    #[test]
    fn prop_search_without_minimum_equivalence(country in country()) {
        prop_assert_eq!(search_for_optional(country, None), search_for(country));
        prop_assert_eq!(
            search_for(country),
            search_for_with_minimum(country, RATING_MIN_VALUE)
        );
    }

    #[test]
    fn prop_search_results_match_filter(country in country(), minimum in 0u32..1500) {
        for player in search_for_with_minimum(country, minimum) {
            prop_assert_eq!(player.country, country);
            prop_assert!(player.rating >= minimum);
        }
    }

    #[test]
    fn prop_search_idempotence(country in country(), minimum in any::<Option<u32>>()) {
        prop_assert_eq!(
            search_for_optional(country, minimum),
            search_for_optional(country, minimum)
        );
    }
}

// =============================================================================
// Contact
// =============================================================================

proptest! {
    #[test]
    fn prop_notify_equivalence(value in "[a-z.@]{1,30}", is_email in any::<bool>()) {
        let address = if is_email {
            Address::email(value)
        } else {
            Address::postal(value)
        };
        let contact = PersonContact::new("Scott Lang", address);
        let explicit_sender = RecordingSender::new();
        let fluent_sender = RecordingSender::new();

        prop_assert_eq!(
            notify_explicit(&contact, &explicit_sender),
            notify(&contact, &fluent_sender)
        );
        prop_assert_eq!(explicit_sender.sent(), fluent_sender.sent());
        prop_assert_eq!(fluent_sender.sent().len(), usize::from(is_email));
    }
}
