//! Combining several optional inputs into one optional result.
//!
//! A [`ShippingObject`] needs all three dimensions. If any one of them is
//! missing, there is no shipping object at all.
//!
//! # Examples
//!
//! ```
//! use optional_patterns::patterns::{FixedDimensions, ShippingObject, build_shipping_object};
//!
//! let complete = FixedDimensions::new(Some(500), Some(200), Some(100));
//! assert_eq!(build_shipping_object(&complete), Some(ShippingObject::new(500, 200, 100)));
//!
//! let no_height = FixedDimensions::new(Some(500), Some(200), None);
//! assert_eq!(build_shipping_object(&no_height), None);
//! ```

/// A parcel's dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShippingObject {
    /// Length of the parcel
    pub length: u32,
    /// Width of the parcel
    pub width: u32,
    /// Height of the parcel
    pub height: u32,
}

impl ShippingObject {
    /// Creates a new `ShippingObject`
    #[must_use]
    pub const fn new(length: u32, width: u32, height: u32) -> Self {
        Self {
            length,
            width,
            height,
        }
    }
}

/// Source of the three dimensions, each of which may be unknown.
pub trait DimensionsRetriever {
    /// The length, if known.
    fn retrieve_length(&self) -> Option<u32>;

    /// The width, if known.
    fn retrieve_width(&self) -> Option<u32>;

    /// The height, if known.
    fn retrieve_height(&self) -> Option<u32>;
}

/// A retriever that answers from three stored values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedDimensions {
    length: Option<u32>,
    width: Option<u32>,
    height: Option<u32>,
}

impl FixedDimensions {
    /// Creates a new `FixedDimensions`
    #[must_use]
    pub const fn new(length: Option<u32>, width: Option<u32>, height: Option<u32>) -> Self {
        Self {
            length,
            width,
            height,
        }
    }
}

impl DimensionsRetriever for FixedDimensions {
    fn retrieve_length(&self) -> Option<u32> {
        self.length
    }

    fn retrieve_width(&self) -> Option<u32> {
        self.width
    }

    fn retrieve_height(&self) -> Option<u32> {
        self.height
    }
}

/// Builds a shipping object after fetching and checking every dimension.
pub fn build_shipping_object_explicit(
    retriever: &impl DimensionsRetriever,
) -> Option<ShippingObject> {
    let length = retriever.retrieve_length();
    let width = retriever.retrieve_width();
    let height = retriever.retrieve_height();

    if let (Some(length), Some(width), Some(height)) = (length, width, height) {
        return Some(ShippingObject::new(length, width, height));
    }
    None
}

/// Builds a shipping object by chaining the dimension lookups.
///
/// Stops at the first missing dimension.
pub fn build_shipping_object(retriever: &impl DimensionsRetriever) -> Option<ShippingObject> {
    retriever.retrieve_length().and_then(|length| {
        retriever.retrieve_width().and_then(|width| {
            retriever
                .retrieve_height()
                .map(|height| ShippingObject::new(length, width, height))
        })
    })
}
