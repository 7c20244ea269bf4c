//! General `Option` patterns.
//!
//! - `scores`: filter, take the first match, branch on presence
//! - `contact`: run an action only when a value is present
//! - `fallback`: eager versus lazy default values
//! - `shipping`: combine several optional inputs, all or nothing
//! - `search`: an optional parameter versus separate entry points

mod contact;
mod fallback;
mod scores;
mod search;
mod shipping;

pub use contact::{
    Address, AddressKind, EmailSender, PersonContact, RecordingSender, notify, notify_explicit,
};
pub use fallback::{
    FRIENDLY_USERNAME, GUEST_NAME, NameGenerator, User, username_or_eager, username_or_lazy,
};
pub use scores::{Award, CENTURY, ScoredEntry, award, first_centurion, sample_scores};
pub use search::{
    ALL_PLAYERS, Country, Player, RATING_MIN_VALUE, search_for, search_for_optional,
    search_for_with_minimum,
};
pub use shipping::{
    DimensionsRetriever, FixedDimensions, ShippingObject, build_shipping_object,
    build_shipping_object_explicit,
};
