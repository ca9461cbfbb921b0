//! # Core Types
//!
//! - [`Amenity`]: the closed set of accommodation features.
//! - [`AmenityTag`]: an amenity requirement as it appears in a filter, which may
//!   carry a token the [`Amenity`] enumeration does not know (see below).
//! - [`Listing`]: one catalogue entry. Immutable once loaded.
//! - [`FilterState`]: the user's current filter criteria.
//!
//! ## Unrecognized Amenity Tokens
//!
//! URL decoding does not validate amenity tokens against [`Amenity`]. An unknown
//! token survives as [`AmenityTag::Unrecognized`], is written back to the URL and
//! to storage unchanged, and since no listing can carry it, a filter requiring it
//! matches nothing. Stricter handling would drop these tokens at decode time.
//!
//! ## State Transitions
//!
//! Edits never mutate a `FilterState` in place: each `with_*` method returns the
//! next state. The price bounds are clamped against each other here, so
//! `price_min <= price_max` holds after every edit.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_PRICE_MAX: f64 = 1000.0;
pub const MAX_STARS: u8 = 5;
pub const MAX_RATING: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Amenity {
    WiFi,
    Pool,
    Parking,
    Gym,
    Breakfast,
    Spa,
    PetFriendly,
}

impl Amenity {
    /// All amenities, in the order the filter panel offers them.
    pub const ALL: [Amenity; 7] = [
        Amenity::WiFi,
        Amenity::Pool,
        Amenity::Parking,
        Amenity::Gym,
        Amenity::Breakfast,
        Amenity::Spa,
        Amenity::PetFriendly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Amenity::WiFi => "WiFi",
            Amenity::Pool => "Pool",
            Amenity::Parking => "Parking",
            Amenity::Gym => "Gym",
            Amenity::Breakfast => "Breakfast",
            Amenity::Spa => "Spa",
            Amenity::PetFriendly => "PetFriendly",
        }
    }

    /// Case-insensitive lookup, for human input. Wire formats use [`FromStr`].
    pub fn lookup(name: &str) -> Option<Amenity> {
        Amenity::ALL
            .into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for Amenity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Amenity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Amenity::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| format!("Unknown amenity: {}", s))
    }
}

/// An amenity requirement held by a [`FilterState`].
///
/// Ordering puts every known amenity (in [`Amenity::ALL`] order) before any
/// unrecognized token, which keeps the URL form canonical.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AmenityTag {
    Known(Amenity),
    Unrecognized(String),
}

impl AmenityTag {
    /// Exact-match parse. Unknown tokens are kept verbatim.
    pub fn parse(token: &str) -> Self {
        match token.parse::<Amenity>() {
            Ok(a) => AmenityTag::Known(a),
            Err(_) => AmenityTag::Unrecognized(token.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            AmenityTag::Known(a) => a.as_str(),
            AmenityTag::Unrecognized(s) => s,
        }
    }

    pub fn known(&self) -> Option<Amenity> {
        match self {
            AmenityTag::Known(a) => Some(*a),
            AmenityTag::Unrecognized(_) => None,
        }
    }
}

impl From<Amenity> for AmenityTag {
    fn from(a: Amenity) -> Self {
        AmenityTag::Known(a)
    }
}

impl From<String> for AmenityTag {
    fn from(s: String) -> Self {
        AmenityTag::parse(&s)
    }
}

impl From<AmenityTag> for String {
    fn from(tag: AmenityTag) -> Self {
        match tag {
            AmenityTag::Known(a) => a.as_str().to_string(),
            AmenityTag::Unrecognized(s) => s,
        }
    }
}

impl fmt::Display for AmenityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub name: String,
    pub city: String,
    /// USD
    pub price_per_night: f64,
    /// Hotel stars, 1..=5
    pub star_rating: u8,
    /// Average review score, 0..=5
    pub customer_rating: f64,
    /// In the order the listing declares them.
    pub amenities: Vec<Amenity>,
}

impl Listing {
    pub fn has_amenity(&self, amenity: Amenity) -> bool {
        self.amenities.contains(&amenity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    /// Hotel stars >=
    pub star_min: u8,
    pub price_min: f64,
    pub price_max: f64,
    /// Listing must include all of these
    pub amenities: BTreeSet<AmenityTag>,
    /// Review rating >=
    pub customer_min: f64,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            star_min: 0,
            price_min: 0.0,
            price_max: DEFAULT_PRICE_MAX,
            amenities: BTreeSet::new(),
            customer_min: 0.0,
        }
    }
}

impl FilterState {
    pub fn is_default(&self) -> bool {
        *self == FilterState::default()
    }

    pub fn with_star_min(&self, stars: u8) -> Self {
        Self {
            star_min: stars.min(MAX_STARS),
            ..self.clone()
        }
    }

    /// Clamped so it never exceeds the current `price_max`.
    pub fn with_price_min(&self, price: f64) -> Self {
        Self {
            price_min: coerce_price(price).min(self.price_max),
            ..self.clone()
        }
    }

    /// Clamped so it never drops below the current `price_min`.
    pub fn with_price_max(&self, price: f64) -> Self {
        Self {
            price_max: coerce_price(price).max(self.price_min),
            ..self.clone()
        }
    }

    pub fn toggling_amenity(&self, tag: impl Into<AmenityTag>) -> Self {
        let tag = tag.into();
        let mut amenities = self.amenities.clone();
        if !amenities.remove(&tag) {
            amenities.insert(tag);
        }
        Self {
            amenities,
            ..self.clone()
        }
    }

    pub fn with_customer_min(&self, rating: f64) -> Self {
        Self {
            customer_min: coerce_rating(rating),
            ..self.clone()
        }
    }

    /// Brings a state read from outside (URL, storage) back into range.
    pub fn normalized(self) -> Self {
        let price_min = coerce_price(self.price_min);
        let price_max = coerce_price(self.price_max).max(price_min);
        Self {
            star_min: self.star_min.min(MAX_STARS),
            price_min,
            price_max,
            customer_min: coerce_rating(self.customer_min),
            amenities: self.amenities,
        }
    }
}

/// Text from a numeric control; anything unparsable is 0.
pub fn parse_control_number(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}

fn coerce_price(price: f64) -> f64 {
    if price.is_finite() && price > 0.0 {
        price
    } else {
        0.0
    }
}

fn coerce_rating(rating: f64) -> f64 {
    if rating.is_finite() {
        rating.clamp(0.0, MAX_RATING)
    } else {
        0.0
    }
}
