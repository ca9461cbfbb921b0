//! # Wallflower CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, and this file
//! only invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/wallflowerapp/`: the search library (filters, URL and storage
//!   sync, results view)
//! - `crates/wallflower/`: this CLI, one client of that library
//!
//! ## The Terminal as a Browser Tab
//!
//! Each invocation is one visit to the search page. The page location comes
//! from the command line (`wallflower '/search?starMin=4'`), the storage area
//! is a file in the user data directory, and the results view is rendered to
//! stdout. Running `wallflower` with no location restores the filters from the
//! previous visit, exactly as reloading a bare `/search` would.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/wallflower/src/cli/)                     │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + dispatch (commands.rs)                  │
//! │  - minijinja templates + console styles (render.rs)         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/wallflowerapp/src/api.rs)                │
//! │  - Normalizes control input                                 │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Testing Approach
//!
//! - Library behavior is tested in `wallflowerapp`.
//! - `render.rs` is tested by feeding canned `CmdResult` values through the
//!   templates with color off.
//! - `tests/` runs the real binary against a temporary data directory.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
