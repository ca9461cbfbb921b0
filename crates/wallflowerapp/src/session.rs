//! # Filter Session
//!
//! [`FilterSession`] is the single owner of the current [`FilterState`]. It keeps
//! two external representations in line with it: the navigator's current
//! location and one storage entry.
//!
//! ## Opening
//!
//! On page entry the initial state comes from exactly one source:
//!
//! | query has params | storage has state | initial state   |
//! |------------------|-------------------|-----------------|
//! | yes              | either            | decoded URL     |
//! | no               | yes               | stored state    |
//! | no               | no                | default         |
//!
//! An unreadable or malformed storage entry counts as "no stored state".
//!
//! ## Navigation
//!
//! After opening, an external navigation whose query has any parameter at all
//! recomputes the state from the URL, overriding whatever was in memory. So
//! `/search?ref=mail` resets the filters while a bare `/search` leaves them
//! alone. Opening is stricter: only the filter keys count there.
//!
//! ## Propagation
//!
//! Every state change (including opening) writes the canonical location over the
//! current history entry, never adding one, and overwrites the storage entry
//! with the full state. Storage failures are logged and otherwise ignored.

use crate::codec::{query, storage};
use crate::model::{AmenityTag, FilterState};
use crate::navigation::Navigator;
use crate::store::StorageBackend;
use serde::Serialize;
use tracing::{debug, warn};

pub const DEFAULT_STORAGE_KEY: &str = "wf:search:filters";

/// Where the state came from when the session was opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InitialSource {
    Url,
    Storage,
    Default,
}

pub struct FilterSession<S: StorageBackend, N: Navigator> {
    store: S,
    navigator: N,
    storage_key: String,
    filters: FilterState,
    source: InitialSource,
}

impl<S: StorageBackend, N: Navigator> FilterSession<S, N> {
    pub fn open(store: S, navigator: N, storage_key: impl Into<String>) -> Self {
        let storage_key = storage_key.into();
        let location = navigator.location().to_string();
        let has_params = query::has_params(&location);
        let stored = read_stored(&store, &storage_key);

        let (filters, source) = match (has_params, stored) {
            (true, _) => (query::from_query(&location), InitialSource::Url),
            (false, Some(stored)) => (stored, InitialSource::Storage),
            (false, None) => (FilterState::default(), InitialSource::Default),
        };
        debug!(location = %location, source = ?source, "opened filter session");

        let mut session = Self {
            store,
            navigator,
            storage_key,
            filters,
            source,
        };
        session.propagate();
        session
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn source(&self) -> InitialSource {
        self.source
    }

    pub fn location(&self) -> &str {
        self.navigator.location()
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    // --- External navigation ---

    /// Host navigated to `location` (new history entry).
    pub fn navigate(&mut self, location: &str) -> FilterState {
        self.navigator.push(location);
        self.sync_from_location();
        self.filters.clone()
    }

    /// Returns false when there is no earlier entry.
    pub fn back(&mut self) -> bool {
        let moved = self.navigator.back();
        if moved {
            self.sync_from_location();
        }
        moved
    }

    /// Returns false when there is no later entry.
    pub fn forward(&mut self) -> bool {
        let moved = self.navigator.forward();
        if moved {
            self.sync_from_location();
        }
        moved
    }

    // --- Edits ---

    pub fn set_star_min(&mut self, stars: u8) -> FilterState {
        let next = self.filters.with_star_min(stars);
        self.replace(next)
    }

    pub fn set_price_min(&mut self, price: f64) -> FilterState {
        let next = self.filters.with_price_min(price);
        self.replace(next)
    }

    pub fn set_price_max(&mut self, price: f64) -> FilterState {
        let next = self.filters.with_price_max(price);
        self.replace(next)
    }

    pub fn toggle_amenity(&mut self, tag: impl Into<AmenityTag>) -> FilterState {
        let next = self.filters.toggling_amenity(tag);
        self.replace(next)
    }

    pub fn set_customer_min(&mut self, rating: f64) -> FilterState {
        let next = self.filters.with_customer_min(rating);
        self.replace(next)
    }

    pub fn clear_all(&mut self) -> FilterState {
        self.replace(FilterState::default())
    }

    fn replace(&mut self, next: FilterState) -> FilterState {
        self.filters = next;
        self.propagate();
        self.filters.clone()
    }

    fn sync_from_location(&mut self) {
        let location = self.navigator.location().to_string();
        if query::has_any_params(&location) {
            debug!(location = %location, "navigation overrides filter state");
            self.filters = query::from_query(&location);
            self.propagate();
        }
    }

    fn propagate(&mut self) {
        let location = query::to_location(&self.filters);
        self.navigator.replace(&location);

        let written = storage::encode(&self.filters)
            .and_then(|raw| self.store.write(&self.storage_key, &raw));
        match written {
            Ok(()) => debug!(location = %location, "filter state propagated"),
            Err(e) => warn!(key = %self.storage_key, error = %e, "could not persist filter state"),
        }
    }
}

fn read_stored<S: StorageBackend>(store: &S, key: &str) -> Option<FilterState> {
    match store.read(key) {
        Ok(Some(raw)) => {
            let decoded = storage::decode(&raw);
            if decoded.is_none() {
                warn!(key = %key, "ignoring malformed stored filter state");
            }
            decoded
        }
        Ok(None) => None,
        Err(e) => {
            warn!(key = %key, error = %e, "could not read stored filter state");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Amenity;
    use crate::navigation::MemoryHistory;
    use crate::store::MemBackend;

    const KEY: &str = DEFAULT_STORAGE_KEY;

    fn stored(f: &FilterState) -> String {
        storage::encode(f).unwrap()
    }

    fn open(store: MemBackend, at: &str) -> FilterSession<MemBackend, MemoryHistory> {
        FilterSession::open(store, MemoryHistory::new(at), KEY)
    }

    // --- Opening: the decision table ---

    #[test]
    fn test_open_with_query_and_storage_uses_url() {
        let prior = FilterState::default().with_price_max(90.0).toggling_amenity(Amenity::Gym);
        let store = MemBackend::new().with_entry(KEY, &stored(&prior));
        let session = open(store, "/search?starMin=5");

        assert_eq!(session.source(), InitialSource::Url);
        assert_eq!(*session.filters(), FilterState::default().with_star_min(5));
    }

    #[test]
    fn test_open_with_query_only_uses_url() {
        let session = open(MemBackend::new(), "/search?customerMin=4");
        assert_eq!(session.source(), InitialSource::Url);
        assert_eq!(session.filters().customer_min, 4.0);
    }

    #[test]
    fn test_open_with_storage_only_uses_storage() {
        let prior = FilterState::default().with_star_min(3).toggling_amenity(Amenity::Pool);
        let store = MemBackend::new().with_entry(KEY, &stored(&prior));
        let session = open(store, "/search");

        assert_eq!(session.source(), InitialSource::Storage);
        assert_eq!(*session.filters(), prior);
        assert_eq!(session.location(), "/search?starMin=3&amenities=Pool");
    }

    #[test]
    fn test_open_with_nothing_uses_default() {
        let session = open(MemBackend::new(), "/search");
        assert_eq!(session.source(), InitialSource::Default);
        assert!(session.filters().is_default());
    }

    #[test]
    fn test_unrelated_params_do_not_override_storage() {
        let prior = FilterState::default().with_star_min(4);
        let store = MemBackend::new().with_entry(KEY, &stored(&prior));
        let session = open(store, "/search?ref=newsletter");

        assert_eq!(session.source(), InitialSource::Storage);
        assert_eq!(session.filters(), &prior);
        assert_eq!(session.location(), "/search?starMin=4");
    }

    #[test]
    fn test_malformed_storage_falls_back_to_default() {
        let store = MemBackend::new().with_entry(KEY, "{oops");
        let session = open(store, "/search");
        assert_eq!(session.source(), InitialSource::Default);
        assert!(session.filters().is_default());
    }

    #[test]
    fn test_storage_read_failure_falls_back_to_default() {
        let prior = FilterState::default().with_star_min(2);
        let store = MemBackend::new().with_entry(KEY, &stored(&prior));
        store.set_simulate_read_error(true);
        let session = open(store, "/search");
        assert_eq!(session.source(), InitialSource::Default);
    }

    #[test]
    fn test_open_canonicalizes_location_and_persists() {
        let session = open(MemBackend::new(), "/search?starMin=5&utm=x&priceMax=1000");
        assert_eq!(session.location(), "/search?starMin=5");
        assert_eq!(session.navigator().len(), 1);

        let raw = session.store().read(KEY).unwrap().unwrap();
        assert_eq!(storage::decode(&raw), Some(FilterState::default().with_star_min(5)));
    }

    // --- Edits ---

    #[test]
    fn test_edits_replace_history_entry() {
        let mut session = open(MemBackend::new(), "/search");
        session.set_star_min(4);
        session.toggle_amenity(Amenity::Spa);
        session.set_price_max(300.0);

        assert_eq!(session.navigator().len(), 1);
        assert_eq!(
            session.location(),
            "/search?starMin=4&priceMax=300&amenities=Spa"
        );
    }

    #[test]
    fn test_edits_overwrite_storage_with_full_state() {
        let mut session = open(MemBackend::new(), "/search");
        let f = session.set_customer_min(4.5);

        let raw = session.store().read(KEY).unwrap().unwrap();
        assert_eq!(storage::decode(&raw), Some(f));
        // one write on open, one per edit
        assert_eq!(session.store().write_count(), 2);
    }

    #[test]
    fn test_price_edits_keep_range_ordered() {
        let mut session = open(MemBackend::new(), "/search");
        session.set_price_max(150.0);
        let f = session.set_price_min(400.0);
        assert_eq!(f.price_min, 150.0);

        let f = session.set_price_max(10.0);
        assert_eq!(f.price_max, 150.0);
        assert!(f.price_min <= f.price_max);
    }

    #[test]
    fn test_clear_all_resets_everything() {
        let mut session = open(MemBackend::new(), "/search?starMin=5&amenities=Pool");
        let f = session.clear_all();
        assert!(f.is_default());
        assert_eq!(session.location(), "/search");
    }

    #[test]
    fn test_write_failure_keeps_in_memory_state() {
        let store = MemBackend::new();
        store.set_simulate_write_error(true);
        let mut session = open(store, "/search");

        let f = session.set_star_min(3);
        assert_eq!(f.star_min, 3);
        assert_eq!(session.filters().star_min, 3);
        assert_eq!(session.location(), "/search?starMin=3");
        assert_eq!(session.store().read(KEY).unwrap(), None);
    }

    // --- Navigation ---

    #[test]
    fn test_navigation_with_params_overrides_state() {
        let mut session = open(MemBackend::new(), "/search");
        session.set_star_min(2);

        let f = session.navigate("/search?priceMax=120");
        assert_eq!(f, FilterState::default().with_price_max(120.0));
        assert_eq!(session.navigator().len(), 2);
    }

    #[test]
    fn test_navigation_without_params_keeps_state() {
        let mut session = open(MemBackend::new(), "/search");
        session.set_star_min(2);

        let f = session.navigate("/search");
        assert_eq!(f.star_min, 2);
    }

    #[test]
    fn test_navigation_with_unrelated_params_resets_state() {
        let mut session = open(MemBackend::new(), "/search");
        session.set_star_min(4);

        let f = session.navigate("/search?ref=mail");
        assert!(f.is_default());
        assert_eq!(session.location(), "/search");
        let raw = session.store().read(KEY).unwrap().unwrap();
        assert_eq!(storage::decode(&raw), Some(FilterState::default()));
    }

    #[test]
    fn test_back_restores_previous_url_state() {
        let mut session = open(MemBackend::new(), "/search?starMin=3");
        session.navigate("/search?starMin=5");
        assert_eq!(session.filters().star_min, 5);

        assert!(session.back());
        assert_eq!(session.filters().star_min, 3);
        assert!(!session.back());

        assert!(session.forward());
        assert_eq!(session.filters().star_min, 5);
    }

    #[test]
    fn test_edit_after_back_rewrites_current_entry_only() {
        let mut session = open(MemBackend::new(), "/search?starMin=3");
        session.navigate("/search?starMin=5");
        session.back();
        session.toggle_amenity(Amenity::WiFi);

        let entries = session.navigator().entries();
        assert_eq!(entries[0], "/search?starMin=3&amenities=WiFi");
        assert_eq!(entries[1], "/search?starMin=5");
    }
}
