//! # Confessional Architecture
//!
//! Confessional is a **UI-agnostic confession board library**: users post short
//! anonymous texts, react with emoji, rate, comment, favorite, and filter/sort the list.
//! It ships with a CLI client, but the CLI is just one presentation layer.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Supplies randomness, today's date and configuration      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation, filtering, sorting, picking                  │
//! │  - Returns CmdResult: records plus notification messages    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - ConfessionStore: in-memory collection, snapshot persist  │
//! │  - StorageBackend trait: FsBackend, MemBackend              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Notifications Instead of Side Effects
//!
//! Commands never print, animate or play sounds. Anything a user should be told is a
//! [`commands::CmdMessage`] on the returned result; the presentation layer decides how
//! to surface it.
//!
//! ## Single Actor
//!
//! Everything is synchronous and single-threaded. Two processes sharing a data
//! directory overwrite each other's snapshots (last writer wins).
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per operation
//! - [`store`]: Key-value backends and the typed confession store
//! - [`model`]: `Confession`, `Category`, `ReactionKind`, `FavoriteSet`
//! - [`config`]: Configuration (`config.json`)
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
