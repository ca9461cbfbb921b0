//! # CLI Behavior
//!
//! This is **one possible UI client** for wallflower. It is the only place
//! that knows about terminal I/O, exit codes, and output formatting.
//!
//! ## Naked Execution
//!
//! `wallflower` with no arguments is `wallflower search`: open `/search`,
//! restore the saved filters (or defaults) and show the results.
//!
//! ## Edits
//!
//! `stars`, `price-min`, `price-max`, `amenity`, `rating` and `clear` each open
//! the page, apply a single edit, and show the results. The edit is saved, so
//! the next invocation continues from it.
//!
//! ## Module Structure
//!
//! - `commands`: context setup, logging, dispatch
//! - `render`: template rendering of results and messages
//! - `setup`: argument parsing via clap
//! - `styles`: terminal styling
//! - `templates`: embedded output templates

mod commands;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
