//! # Results View
//!
//! Everything the results page shows is derived here from the catalogue and the
//! current [`FilterState`]; nothing is stored. The view has two states, "has
//! results" and "no results". In the latter the page shows
//! [`EMPTY_STATE_MESSAGE`] with a clear-all action.
//!
//! [`ListingCard`] carries the pre-formatted strings for one result card, so
//! every UI renders ratings and prices the same way.

use crate::catalogue::Catalogue;
use crate::filter;
use crate::model::{FilterState, Listing, MAX_STARS};
use serde::Serialize;

pub const EMPTY_STATE_MESSAGE: &str =
    "No results match the current filters. Try adjusting or clearing all filters.";

#[derive(Debug, Clone, Serialize)]
pub struct ResultsView<'a> {
    pub listings: Vec<&'a Listing>,
    pub total: usize,
    pub count: usize,
    /// The "clear filters" control is disabled exactly when nothing is set.
    pub clear_disabled: bool,
}

impl<'a> ResultsView<'a> {
    pub fn derive(catalogue: &'a Catalogue, filters: &FilterState) -> Self {
        let listings = filter::apply(catalogue.listings(), filters);
        Self {
            count: listings.len(),
            total: catalogue.len(),
            clear_disabled: filters.is_default(),
            listings,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn summary(&self) -> String {
        format!("Showing {} of {} results", self.count, self.total)
    }

    pub fn cards(&self) -> Vec<ListingCard> {
        self.listings.iter().map(|l| ListingCard::from(*l)).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingCard {
    pub id: String,
    pub name: String,
    pub city: String,
    /// Two-letter placeholder shown where the photo would be.
    pub badge: String,
    pub stars: String,
    pub price: String,
    pub rating: String,
    pub amenities: Vec<String>,
}

impl From<&Listing> for ListingCard {
    fn from(l: &Listing) -> Self {
        Self {
            id: l.id.clone(),
            name: l.name.clone(),
            city: l.city.clone(),
            badge: l.city.chars().take(2).collect::<String>().to_uppercase(),
            stars: star_bar(l.star_rating),
            price: format!("${}/night", l.price_per_night),
            rating: format!("{:.1}", l.customer_rating),
            amenities: l.amenities.iter().map(|a| a.to_string()).collect(),
        }
    }
}

fn star_bar(stars: u8) -> String {
    let filled = stars.min(MAX_STARS) as usize;
    format!(
        "{}{}",
        "★".repeat(filled),
        "☆".repeat(MAX_STARS as usize - filled)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Amenity;

    #[test]
    fn test_default_filter_shows_everything() {
        let catalogue = Catalogue::builtin();
        let view = ResultsView::derive(&catalogue, &FilterState::default());
        assert_eq!(view.count, 12);
        assert_eq!(view.total, 12);
        assert!(view.clear_disabled);
        assert_eq!(view.summary(), "Showing 12 of 12 results");
    }

    #[test]
    fn test_filtered_counts() {
        let catalogue = Catalogue::builtin();
        let f = FilterState::default().with_star_min(5);
        let view = ResultsView::derive(&catalogue, &f);
        assert_eq!(view.count, 3);
        assert!(!view.clear_disabled);
        assert_eq!(view.summary(), "Showing 3 of 12 results");
    }

    #[test]
    fn test_no_matches_is_empty_state() {
        let catalogue = Catalogue::builtin();
        let f = FilterState::default().with_star_min(5).with_price_max(100.0);
        let view = ResultsView::derive(&catalogue, &f);
        assert!(view.is_empty());
        assert!(!view.clear_disabled);

        let cleared = ResultsView::derive(&catalogue, &FilterState::default());
        assert!(!cleared.is_empty());
    }

    #[test]
    fn test_clear_enabled_for_any_non_default_field() {
        let catalogue = Catalogue::builtin();
        let edits = [
            FilterState::default().with_star_min(1),
            FilterState::default().with_price_min(1.0),
            FilterState::default().with_price_max(999.0),
            FilterState::default().toggling_amenity(Amenity::WiFi),
            FilterState::default().with_customer_min(3.5),
        ];
        for f in edits {
            assert!(!ResultsView::derive(&catalogue, &f).clear_disabled, "{:?}", f);
        }
    }

    #[test]
    fn test_card_formatting() {
        let catalogue = Catalogue::builtin();
        let card = ListingCard::from(catalogue.get("a6").unwrap());
        assert_eq!(card.badge, "PR");
        assert_eq!(card.stars, "★★★☆☆");
        assert_eq!(card.price, "$95/night");
        assert_eq!(card.rating, "4.0");
        assert_eq!(card.amenities, vec!["WiFi", "Breakfast"]);
    }

    #[test]
    fn test_card_keeps_declared_amenity_order() {
        let catalogue = Catalogue::builtin();
        let card = ListingCard::from(catalogue.get("a1").unwrap());
        assert_eq!(
            card.amenities,
            vec!["WiFi", "Pool", "Parking", "Gym", "Breakfast", "Spa"]
        );
        let card = ListingCard::from(catalogue.get("a5").unwrap());
        assert_eq!(card.amenities, vec!["WiFi", "Parking", "Breakfast", "PetFriendly"]);
    }
}
