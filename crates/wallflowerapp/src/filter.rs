//! Filter predicate.
//!
//! A listing matches a [`FilterState`] when every criterion holds (logical AND).
//! An empty amenity requirement is vacuously satisfied.

use crate::model::{AmenityTag, FilterState, Listing};

pub fn matches(listing: &Listing, filter: &FilterState) -> bool {
    if listing.star_rating < filter.star_min {
        return false;
    }
    if listing.price_per_night < filter.price_min || listing.price_per_night > filter.price_max {
        return false;
    }
    if listing.customer_rating < filter.customer_min {
        return false;
    }
    filter.amenities.iter().all(|tag| match tag {
        AmenityTag::Known(a) => listing.has_amenity(*a),
        AmenityTag::Unrecognized(_) => false,
    })
}

/// Listings that match, in their original order.
pub fn apply<'a>(listings: &'a [Listing], filter: &FilterState) -> Vec<&'a Listing> {
    listings.iter().filter(|l| matches(l, filter)).collect()
}
