//! Persisted storage encoding: the whole state as JSON.

use crate::error::Result;
use crate::model::FilterState;

pub fn encode(filter: &FilterState) -> Result<String> {
    Ok(serde_json::to_string(filter)?)
}

/// `None` for anything that is not a complete serialized state.
pub fn decode(raw: &str) -> Option<FilterState> {
    serde_json::from_str::<FilterState>(raw)
        .ok()
        .map(FilterState::normalized)
}
