//! # API Facade
//!
//! The API layer is a **thin facade** over the search session. It is the entry
//! point for one page visit: open, read the results, apply edits. History
//! traversal is the host's business and lives on [`FilterSession`].
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Normalizes inputs**: control text (`"120"`, `"abc"`) becomes numbers,
//!   amenity names are resolved case-insensitively
//! - **Dispatches** to [`FilterSession`] for state changes
//! - **Returns structured types**: every call yields a [`CmdResult`] with the
//!   derived results view and leveled messages
//!
//! ## What the API Does NOT Do
//!
//! - **Filter logic**: that belongs in [`crate::filter`] and [`crate::model`]
//! - **I/O to the terminal**: no stdout, stderr, or formatting
//!
//! ## Generic Over Storage and Navigation
//!
//! `SearchApi<S: StorageBackend, N: Navigator>`:
//! - Production: `SearchApi<FsBackend, MemoryHistory>`
//! - Testing: `SearchApi<MemBackend, MemoryHistory>`

use crate::catalogue::Catalogue;
use crate::model::{parse_control_number, Amenity, AmenityTag, FilterState};
use crate::navigation::Navigator;
use crate::session::{FilterSession, InitialSource};
use crate::store::StorageBackend;
use crate::view::{ListingCard, ResultsView, EMPTY_STATE_MESSAGE};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// A snapshot of the search page after an operation.
#[derive(Debug, Clone, Serialize)]
pub struct CmdResult {
    pub location: String,
    pub source: InitialSource,
    pub filters: FilterState,
    pub summary: String,
    pub total: usize,
    pub count: usize,
    pub clear_disabled: bool,
    pub empty_message: Option<String>,
    pub listings: Vec<ListingCard>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }
}

pub struct SearchApi<S: StorageBackend, N: Navigator> {
    catalogue: Catalogue,
    session: FilterSession<S, N>,
}

impl<S: StorageBackend, N: Navigator> SearchApi<S, N> {
    /// Opens the search page at the navigator's current location.
    pub fn open(catalogue: Catalogue, store: S, navigator: N, storage_key: &str) -> Self {
        Self {
            catalogue,
            session: FilterSession::open(store, navigator, storage_key),
        }
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    pub fn session(&self) -> &FilterSession<S, N> {
        &self.session
    }

    pub fn results(&self) -> CmdResult {
        let view = ResultsView::derive(&self.catalogue, self.session.filters());
        CmdResult {
            location: self.session.location().to_string(),
            source: self.session.source(),
            filters: self.session.filters().clone(),
            summary: view.summary(),
            total: view.total,
            count: view.count,
            clear_disabled: view.clear_disabled,
            empty_message: view.is_empty().then(|| EMPTY_STATE_MESSAGE.to_string()),
            listings: view.cards(),
            messages: Vec::new(),
        }
    }

    pub fn set_star_min(&mut self, raw: &str) -> CmdResult {
        let stars = parse_control_number(raw).round().clamp(0.0, 5.0) as u8;
        let f = self.session.set_star_min(stars);
        let message = if f.star_min == 0 {
            "Star rating: any".to_string()
        } else {
            format!("Star rating: {}+", f.star_min)
        };
        self.results().with_message(CmdMessage::success(message))
    }

    pub fn set_price_min(&mut self, raw: &str) -> CmdResult {
        let requested = parse_control_number(raw);
        let f = self.session.set_price_min(requested);
        let mut result = self
            .results()
            .with_message(CmdMessage::success(format!("Minimum price: ${}", f.price_min)));
        if f.price_min < requested {
            result = result.with_message(CmdMessage::warning(format!(
                "Minimum price capped at the maximum (${})",
                f.price_max
            )));
        }
        result
    }

    pub fn set_price_max(&mut self, raw: &str) -> CmdResult {
        let requested = parse_control_number(raw);
        let f = self.session.set_price_max(requested);
        let mut result = self
            .results()
            .with_message(CmdMessage::success(format!("Maximum price: ${}", f.price_max)));
        if f.price_max > requested {
            result = result.with_message(CmdMessage::warning(format!(
                "Maximum price raised to the minimum (${})",
                f.price_min
            )));
        }
        result
    }

    /// Toggles by name. Unknown names are kept as given, with a warning.
    pub fn toggle_amenity(&mut self, name: &str) -> CmdResult {
        let tag = match Amenity::lookup(name) {
            Some(a) => AmenityTag::Known(a),
            None => AmenityTag::Unrecognized(name.trim().to_string()),
        };
        let f = self.session.toggle_amenity(tag.clone());
        let verb = if f.amenities.contains(&tag) {
            "Requiring"
        } else {
            "No longer requiring"
        };
        let mut result = self
            .results()
            .with_message(CmdMessage::success(format!("{} {}", verb, tag)));
        if tag.known().is_none() && f.amenities.contains(&tag) {
            result = result.with_message(CmdMessage::warning(format!(
                "Unknown amenity '{}' matches no listings",
                tag
            )));
        }
        result
    }

    pub fn set_customer_min(&mut self, raw: &str) -> CmdResult {
        let f = self.session.set_customer_min(parse_control_number(raw));
        let message = if f.customer_min == 0.0 {
            "Customer rating: any".to_string()
        } else {
            format!("Customer rating: {:.1}+", f.customer_min)
        };
        self.results().with_message(CmdMessage::success(message))
    }

    pub fn clear_all(&mut self) -> CmdResult {
        let was_default = self.session.filters().is_default();
        self.session.clear_all();
        let message = if was_default {
            CmdMessage::info("No filters to clear.")
        } else {
            CmdMessage::success("Cleared all filters.")
        };
        self.results().with_message(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::MemoryHistory;
    use crate::session::DEFAULT_STORAGE_KEY;
    use crate::store::MemBackend;

    fn api_at(location: &str) -> SearchApi<MemBackend, MemoryHistory> {
        SearchApi::open(
            Catalogue::builtin(),
            MemBackend::new(),
            MemoryHistory::new(location),
            DEFAULT_STORAGE_KEY,
        )
    }

    #[test]
    fn test_results_reflect_initial_url() {
        let api = api_at("/search?starMin=5");
        let result = api.results();
        assert_eq!(result.source, InitialSource::Url);
        assert_eq!(result.count, 3);
        assert_eq!(result.summary, "Showing 3 of 12 results");
        assert!(!result.clear_disabled);
        assert!(result.empty_message.is_none());
    }

    #[test]
    fn test_malformed_control_text_coerces_to_zero() {
        let mut api = api_at("/search?priceMin=50");
        let result = api.set_price_min("fifty");
        assert_eq!(result.filters.price_min, 0.0);
        assert!(result.filters.is_default());
    }

    #[test]
    fn test_price_min_over_max_warns() {
        let mut api = api_at("/search?priceMax=100");
        let result = api.set_price_min("500");
        assert_eq!(result.filters.price_min, 100.0);
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning));
    }

    #[test]
    fn test_toggle_amenity_resolves_case_insensitively() {
        let mut api = api_at("/search");
        let result = api.toggle_amenity("pool");
        assert_eq!(result.location, "/search?amenities=Pool");
        assert_eq!(result.messages, vec![CmdMessage::success("Requiring Pool")]);

        let result = api.toggle_amenity("Pool");
        assert!(result.filters.amenities.is_empty());
        assert_eq!(
            result.messages,
            vec![CmdMessage::success("No longer requiring Pool")]
        );
    }

    #[test]
    fn test_unknown_amenity_warns_and_empties_results() {
        let mut api = api_at("/search");
        let result = api.toggle_amenity("Sauna");
        assert!(result.is_empty());
        assert!(result.empty_message.is_some());
        assert_eq!(result.messages.len(), 2);
    }

    #[test]
    fn test_empty_state_then_clear() {
        let mut api = api_at("/search?starMin=5&priceMax=100");
        let result = api.results();
        assert!(result.is_empty());
        assert_eq!(result.empty_message.as_deref(), Some(EMPTY_STATE_MESSAGE));
        assert!(!result.clear_disabled);

        let result = api.clear_all();
        assert_eq!(result.count, 12);
        assert!(result.clear_disabled);
        assert_eq!(result.location, "/search");
    }

    #[test]
    fn test_clear_when_nothing_set_is_info() {
        let mut api = api_at("/search");
        let result = api.clear_all();
        assert_eq!(result.messages, vec![CmdMessage::info("No filters to clear.")]);
    }

    #[test]
    fn test_star_min_text_is_rounded_and_clamped() {
        let mut api = api_at("/search");
        assert_eq!(api.set_star_min("4").filters.star_min, 4);
        assert_eq!(api.set_star_min("9").filters.star_min, 5);
        assert_eq!(api.set_star_min("-3").filters.star_min, 0);
        assert_eq!(api.set_star_min("x").filters.star_min, 0);
    }

    #[test]
    fn test_customer_rating_message() {
        let mut api = api_at("/search");
        let result = api.set_customer_min("4.5");
        assert_eq!(result.filters.customer_min, 4.5);
        assert_eq!(
            result.messages,
            vec![CmdMessage::success("Customer rating: 4.5+")]
        );
    }
}
