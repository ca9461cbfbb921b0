//! # Wallflower Architecture
//!
//! Wallflower is a **UI-agnostic accommodation search library**. The filter
//! rules, the URL and storage encodings, and the synchronisation between them
//! all live here; the `wallflower` binary is only one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (wallflower crate)                               │
//! │  - Parses arguments, renders results, handles terminal I/O  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over the session                             │
//! │  - Normalizes control input, returns CmdResult              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session Layer (session.rs, view.rs)                        │
//! │  - Owns FilterState, syncs it to location and storage       │
//! │  - Derives the results view                                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (model.rs, filter.rs, codec/, catalogue.rs)           │
//! │  - Pure types and functions, no I/O                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Host Seams (store/, navigation.rs)                         │
//! │  - StorageBackend: FsBackend (production), MemBackend (test)│
//! │  - Navigator: MemoryHistory                                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout or stderr and never exits
//! the process. Diagnostics go through `tracing`; the host decides whether
//! anything is listening.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`session`]: Filter state ownership and URL/storage propagation
//! - [`view`]: Results view and card formatting
//! - [`filter`]: The listing predicate
//! - [`codec`]: Query string and storage encodings
//! - [`model`]: Core data types (`Listing`, `Amenity`, `FilterState`)
//! - [`catalogue`]: The listing collection, built-in or loaded from JSON
//! - [`store`]: Storage abstraction and implementations
//! - [`navigation`]: Location and history abstraction
//! - [`config`]: Configuration management
//! - [`init`]: Directory resolution and context setup
//! - [`error`]: Error types

pub mod api;
pub mod catalogue;
pub mod codec;
pub mod config;
pub mod error;
pub mod filter;
pub mod init;
pub mod model;
pub mod navigation;
pub mod session;
pub mod store;
pub mod view;
