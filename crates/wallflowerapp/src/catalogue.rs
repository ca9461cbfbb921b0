//! # Catalogue
//!
//! The read-only set of listings the search runs over. The crate ships a
//! built-in catalogue; a JSON file with the same shape can replace it (see
//! `catalogue_path` in [`crate::config`]).
//!
//! A catalogue is loaded once and never mutated. Order is significant: results
//! are always shown in catalogue order.

use crate::error::{Result, WallflowerError};
use crate::model::{Amenity, Listing, MAX_RATING, MAX_STARS};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct Catalogue {
    listings: Vec<Listing>,
}

impl Catalogue {
    /// Builds a catalogue, rejecting entries that break the listing invariants.
    pub fn new(listings: Vec<Listing>) -> Result<Self> {
        validate(&listings)?;
        Ok(Self { listings })
    }

    pub fn builtin() -> Self {
        Self {
            listings: builtin_listings(),
        }
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let listings: Vec<Listing> = serde_json::from_str(raw)?;
        Self::new(listings)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let catalogue = Self::from_json(&raw)?;
        debug!(path = %path.display(), listings = catalogue.len(), "loaded catalogue");
        Ok(catalogue)
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }
}

impl Default for Catalogue {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate(listings: &[Listing]) -> Result<()> {
    let mut seen = HashSet::new();
    for l in listings {
        if !seen.insert(l.id.as_str()) {
            return Err(WallflowerError::Catalogue(format!(
                "Duplicate listing id: {}",
                l.id
            )));
        }
        if !(1..=MAX_STARS).contains(&l.star_rating) {
            return Err(WallflowerError::Catalogue(format!(
                "Listing {} has star rating {} (expected 1-5)",
                l.id, l.star_rating
            )));
        }
        if !l.price_per_night.is_finite() || l.price_per_night < 0.0 {
            return Err(WallflowerError::Catalogue(format!(
                "Listing {} has invalid price {}",
                l.id, l.price_per_night
            )));
        }
        if !l.customer_rating.is_finite() || !(0.0..=MAX_RATING).contains(&l.customer_rating) {
            return Err(WallflowerError::Catalogue(format!(
                "Listing {} has customer rating {} (expected 0-5)",
                l.id, l.customer_rating
            )));
        }
        let mut amenities = HashSet::new();
        if let Some(dup) = l.amenities.iter().find(|a| !amenities.insert(**a)) {
            return Err(WallflowerError::Catalogue(format!(
                "Listing {} lists {} twice",
                l.id, dup
            )));
        }
    }
    Ok(())
}

fn listing(
    id: &str,
    name: &str,
    city: &str,
    price_per_night: f64,
    star_rating: u8,
    customer_rating: f64,
    amenities: &[Amenity],
) -> Listing {
    Listing {
        id: id.to_string(),
        name: name.to_string(),
        city: city.to_string(),
        price_per_night,
        star_rating,
        customer_rating,
        amenities: amenities.to_vec(),
    }
}

fn builtin_listings() -> Vec<Listing> {
    use Amenity::*;
    vec![
        listing("a1", "Grand Plaza Hotel", "Paris", 220.0, 5, 4.7, &[WiFi, Pool, Parking, Gym, Breakfast, Spa]),
        listing("a2", "Riverside Inn", "London", 140.0, 3, 4.1, &[WiFi, Breakfast, Parking]),
        listing("a3", "City Center Suites", "New York", 180.0, 4, 4.3, &[WiFi, Gym, Breakfast, Parking]),
        listing("a4", "Coastal Retreat", "Barcelona", 110.0, 2, 3.9, &[WiFi, Pool, Parking]),
        listing("a5", "Mountain View Lodge", "Zurich", 160.0, 4, 4.5, &[WiFi, Parking, Breakfast, PetFriendly]),
        listing("a6", "Old Town Boutique", "Prague", 95.0, 3, 4.0, &[WiFi, Breakfast]),
        listing("a7", "Seaside Spa Resort", "Nice", 250.0, 5, 4.8, &[WiFi, Pool, Spa, Gym, Breakfast, Parking]),
        listing("a8", "Airport Express Hotel", "Amsterdam", 120.0, 3, 3.8, &[WiFi, Parking, Breakfast]),
        listing("a9", "Business Hub Stay", "Singapore", 200.0, 4, 4.6, &[WiFi, Gym, Parking, Breakfast]),
        listing("a10", "Historic Charm Hotel", "Rome", 130.0, 3, 4.2, &[WiFi, Breakfast, PetFriendly]),
        listing("a11", "Urban Minimalist", "Berlin", 85.0, 2, 3.6, &[WiFi]),
        listing("a12", "Harbor Lights Hotel", "Sydney", 210.0, 5, 4.9, &[WiFi, Pool, Spa, Gym, Breakfast]),
    ]
}
