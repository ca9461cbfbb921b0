//! # Filter-State Codec
//!
//! Two independent external representations of a [`crate::model::FilterState`]:
//!
//! - [`query`]: the URL query string. Only non-default fields are written
//!   (canonical minimal form), so a default state is the bare `/search` page.
//! - [`storage`]: the persisted form. Every field is written; the value is read
//!   back whole.
//!
//! Both directions are lossy-tolerant: decoding never fails. Missing or
//! unparsable values fall back to defaults, and unreadable storage reads as
//! "nothing stored".

pub mod query;
pub mod storage;
