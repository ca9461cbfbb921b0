//! # Storage Layer
//!
//! The session persists its filter state as one string under one key, the way a
//! browser page uses local storage. [`backend::StorageBackend`] is that
//! key/value surface.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: production. One file per key in the data
//!   directory, written atomically.
//! - [`mem_backend::MemBackend`]: in-memory, for tests. Can simulate read and
//!   write failures.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! └── wf_search_filters.json   # key "wf:search:filters", full FilterState
//! ```
//!
//! Callers treat failures as non-fatal: an unreadable entry reads as absent and
//! a failed write leaves the in-memory state authoritative.

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;

pub use backend::StorageBackend;
pub use fs_backend::FsBackend;
pub use mem_backend::MemBackend;
