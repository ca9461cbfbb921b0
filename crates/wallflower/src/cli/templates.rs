//! # CLI Templates
//!
//! Output layout lives in standalone minijinja files under `templates/`, which
//! are easier to edit and diff than string literals. They are embedded here at
//! compile time.
//!
//! Templates are rendered with `trim_blocks` and `lstrip_blocks` on, so a line
//! holding only a block tag produces no output. Blank lines in a template are
//! real blank lines in the output.
//!
//! Width math (column padding) is done in Rust and handed to templates as
//! ready strings; templates only pick styles and structure.

pub const RESULTS_TEMPLATE: &str = include_str!("templates/results.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const AMENITIES_TEMPLATE: &str = include_str!("templates/amenities.tmp");
pub const CONFIG_TEMPLATE: &str = include_str!("templates/config.tmp");
