//! URL query encoding.
//!
//! Parameters: `starMin`, `priceMin`, `priceMax`, `amenities` (comma-joined)
//! and `customerMin`. They are written in that order and only when they differ
//! from the default. Pair encoding follows `application/x-www-form-urlencoded`,
//! so the comma in `amenities` goes out as `%2C`.

use crate::model::{AmenityTag, FilterState, DEFAULT_PRICE_MAX, MAX_STARS};
use url::form_urlencoded;

pub const SEARCH_PATH: &str = "/search";

pub const STAR_MIN: &str = "starMin";
pub const PRICE_MIN: &str = "priceMin";
pub const PRICE_MAX: &str = "priceMax";
pub const AMENITIES: &str = "amenities";
pub const CUSTOMER_MIN: &str = "customerMin";

/// Extracts the query from a location.
///
/// Accepts `/search?starMin=5`, `?starMin=5` or a bare `starMin=5`. A location
/// that is only a path (`/search`) has an empty query. Fragments are dropped.
pub fn query_part(location: &str) -> &str {
    let location = match location.find('#') {
        Some(i) => &location[..i],
        None => location,
    };
    match location.find('?') {
        Some(i) => &location[i + 1..],
        None if location.starts_with('/') => "",
        None => location,
    }
}

pub const PARAMS: [&str; 5] = [STAR_MIN, PRICE_MIN, PRICE_MAX, AMENITIES, CUSTOMER_MIN];

/// True when the query carries at least one filter parameter. Unrelated keys
/// (`utm_source=mail`) do not count.
pub fn has_params(query: &str) -> bool {
    form_urlencoded::parse(query_part(query).as_bytes()).any(|(key, _)| PARAMS.contains(&&*key))
}

/// True when the query carries any parameter at all, filter or not.
pub fn has_any_params(query: &str) -> bool {
    form_urlencoded::parse(query_part(query).as_bytes()).any(|(key, _)| !key.is_empty())
}

pub fn to_query(filter: &FilterState) -> String {
    let mut ser = form_urlencoded::Serializer::new(String::new());
    if filter.star_min != 0 {
        ser.append_pair(STAR_MIN, &filter.star_min.to_string());
    }
    if filter.price_min != 0.0 {
        ser.append_pair(PRICE_MIN, &format_number(filter.price_min));
    }
    if filter.price_max != DEFAULT_PRICE_MAX {
        ser.append_pair(PRICE_MAX, &format_number(filter.price_max));
    }
    if !filter.amenities.is_empty() {
        let joined = filter
            .amenities
            .iter()
            .map(AmenityTag::as_str)
            .collect::<Vec<_>>()
            .join(",");
        ser.append_pair(AMENITIES, &joined);
    }
    if filter.customer_min != 0.0 {
        ser.append_pair(CUSTOMER_MIN, &format_number(filter.customer_min));
    }
    ser.finish()
}

/// The canonical location for a state: `/search` or `/search?<query>`.
pub fn to_location(filter: &FilterState) -> String {
    let query = to_query(filter);
    if query.is_empty() {
        SEARCH_PATH.to_string()
    } else {
        format!("{}?{}", SEARCH_PATH, query)
    }
}

/// Decodes a state from a query or location. Never fails.
pub fn from_query(query: &str) -> FilterState {
    let defaults = FilterState::default();
    let mut star_min = None;
    let mut price_min = None;
    let mut price_max = None;
    let mut amenities = None;
    let mut customer_min = None;

    // First occurrence of a key wins.
    for (key, value) in form_urlencoded::parse(query_part(query).as_bytes()) {
        match &*key {
            STAR_MIN if star_min.is_none() => star_min = Some(value),
            PRICE_MIN if price_min.is_none() => price_min = Some(value),
            PRICE_MAX if price_max.is_none() => price_max = Some(value),
            AMENITIES if amenities.is_none() => amenities = Some(value),
            CUSTOMER_MIN if customer_min.is_none() => customer_min = Some(value),
            _ => {}
        }
    }

    FilterState {
        star_min: star_min
            .as_deref()
            .and_then(parse_number)
            .map(to_star_min)
            .unwrap_or(defaults.star_min),
        price_min: price_min
            .as_deref()
            .and_then(parse_number)
            .unwrap_or(defaults.price_min),
        price_max: price_max
            .as_deref()
            .and_then(parse_number)
            .unwrap_or(defaults.price_max),
        amenities: amenities
            .as_deref()
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(AmenityTag::parse)
                    .collect()
            })
            .unwrap_or_default(),
        customer_min: customer_min
            .as_deref()
            .and_then(parse_number)
            .unwrap_or(defaults.customer_min),
    }
    .normalized()
}

fn parse_number(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Star ratings are whole numbers, so `starMin=3.5` selects the same listings
/// as `starMin=4`.
fn to_star_min(n: f64) -> u8 {
    n.ceil().clamp(0.0, MAX_STARS as f64) as u8
}

fn format_number(n: f64) -> String {
    format!("{}", n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Amenity;
    use proptest::prelude::*;

    #[test]
    fn test_default_state_encodes_to_empty_query() {
        assert_eq!(to_query(&FilterState::default()), "");
        assert_eq!(to_location(&FilterState::default()), "/search");
    }

    #[test]
    fn test_empty_query_decodes_to_default() {
        assert!(from_query("").is_default());
        assert!(from_query("/search").is_default());
        assert!(from_query("?").is_default());
    }

    #[test]
    fn test_only_non_default_fields_are_emitted() {
        let f = FilterState::default().with_star_min(4).with_customer_min(4.5);
        assert_eq!(to_query(&f), "starMin=4&customerMin=4.5");
    }

    #[test]
    fn test_prices_format_without_trailing_zero() {
        let f = FilterState::default().with_price_max(250.0).with_price_min(80.0);
        assert_eq!(to_query(&f), "priceMin=80&priceMax=250");
    }

    #[test]
    fn test_amenities_join_with_encoded_comma() {
        let f = FilterState::default()
            .toggling_amenity(Amenity::Spa)
            .toggling_amenity(Amenity::Pool);
        assert_eq!(to_query(&f), "amenities=Pool%2CSpa");
        assert_eq!(
            to_location(&f),
            "/search?amenities=Pool%2CSpa"
        );
    }

    #[test]
    fn test_decode_location_with_path() {
        let f = from_query("/search?starMin=5");
        assert_eq!(f.star_min, 5);
        assert!(f.with_star_min(0).is_default());
    }

    #[test]
    fn test_decode_accepts_raw_and_encoded_commas() {
        let raw = from_query("amenities=WiFi,Gym");
        let encoded = from_query("amenities=WiFi%2CGym");
        assert_eq!(raw, encoded);
        assert!(raw.amenities.contains(&AmenityTag::Known(Amenity::Gym)));
    }

    #[test]
    fn test_decode_trims_and_drops_empty_tokens() {
        let f = from_query("amenities=%20Pool%20,,%20,Spa");
        let tokens: Vec<&str> = f.amenities.iter().map(|t| t.as_str()).collect();
        assert_eq!(tokens, vec!["Pool", "Spa"]);
    }

    #[test]
    fn test_decode_passes_unrecognized_tokens_through() {
        let f = from_query("amenities=Pool,Sauna");
        assert!(f.amenities.contains(&AmenityTag::Unrecognized("Sauna".into())));
        assert_eq!(to_query(&f), "amenities=Pool%2CSauna");
    }

    #[test]
    fn test_decode_falls_back_on_garbage_numbers() {
        let f = from_query("starMin=abc&priceMin=&priceMax=NaN&customerMin=inf");
        assert!(f.is_default());
    }

    #[test]
    fn test_decode_first_occurrence_wins() {
        assert_eq!(from_query("starMin=2&starMin=4").star_min, 2);
    }

    #[test]
    fn test_decode_rounds_fractional_stars_up() {
        assert_eq!(from_query("starMin=3.5").star_min, 4);
        assert_eq!(from_query("starMin=12").star_min, 5);
        assert_eq!(from_query("starMin=-2").star_min, 0);
    }

    #[test]
    fn test_decode_repairs_inverted_price_range() {
        let f = from_query("priceMin=300&priceMax=100");
        assert_eq!(f.price_min, 300.0);
        assert_eq!(f.price_max, 300.0);
    }

    #[test]
    fn test_has_params_counts_filter_keys_only() {
        assert!(has_params("/search?starMin=5"));
        assert!(has_params("utm_source=mail&amenities="));
        assert!(!has_params("utm_source=mail"));
        assert!(!has_params("/search"));
        assert!(!has_params(""));
        assert!(!has_params("?"));
    }

    #[test]
    fn test_has_any_params_counts_every_key() {
        assert!(has_any_params("/search?ref=mail"));
        assert!(has_any_params("starMin=5"));
        assert!(!has_any_params("/search"));
        assert!(!has_any_params("?"));
        assert!(!has_any_params("/search?&"));
    }

    #[test]
    fn test_query_part_strips_fragment() {
        assert_eq!(query_part("/search?starMin=5#top"), "starMin=5");
        assert_eq!(query_part("starMin=5"), "starMin=5");
        assert_eq!(query_part("/about"), "");
    }

    fn amenity_strategy() -> impl Strategy<Value = Amenity> {
        (0..Amenity::ALL.len()).prop_map(|i| Amenity::ALL[i])
    }

    prop_compose! {
        fn reachable_state()(
            stars in 0u8..=5,
            lo in 0u32..2000,
            hi in 0u32..2000,
            amenities in proptest::collection::vec(amenity_strategy(), 0..7),
            rating in prop_oneof![Just(0.0), Just(3.5), Just(4.0), Just(4.5)],
        ) -> FilterState {
            let mut f = FilterState::default()
                .with_star_min(stars)
                .with_price_max(hi as f64)
                .with_price_min(lo as f64)
                .with_customer_min(rating);
            for a in amenities {
                f = f.toggling_amenity(a);
            }
            f
        }
    }

    proptest! {
        #[test]
        fn test_url_round_trip(f in reachable_state()) {
            prop_assert_eq!(from_query(&to_query(&f)), f.clone());
            prop_assert_eq!(from_query(&to_location(&f)), f);
        }
    }
}
