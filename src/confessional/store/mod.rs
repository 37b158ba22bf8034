//! # Storage Layer
//!
//! Confessional keeps all of its state in a small string-keyed key-value store, the same
//! shape a browser's local storage has. The [`backend::StorageBackend`] trait is that raw
//! key-value I/O; [`confession_store::ConfessionStore`] sits on top of it and owns the
//! typed, in-memory view.
//!
//! ## Snapshot Persistence
//!
//! There is no incremental update. After every mutation the whole collection is
//! serialized and written back under its key. The in-memory collection is authoritative:
//! if the write fails the mutation is kept in memory and the error is returned to the
//! caller.
//!
//! ## Keys
//!
//! | Key           | Content                                   |
//! |---------------|-------------------------------------------|
//! | `confessions` | JSON array of confessions, newest first   |
//! | `favorites`   | JSON array of favorited ids               |
//! | `darkMode`    | `"true"` or `"false"`                     |
//! | `autoSave`    | Plain draft text                          |
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: one file per key in a data directory, atomic writes.
//! - [`mem_backend::MemBackend`]: in-memory map for tests, can simulate write failures.
//!
//! [`draft::DraftBuffer`] and [`preferences::Preferences`] are thin typed views over the
//! `autoSave` and `darkMode` keys; they bypass the confession snapshot entirely.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── confessions.json
//! ├── favorites.json
//! ├── darkMode
//! ├── autoSave.txt
//! └── config.json        # ConfessionConfig, see config.rs
//! ```

pub mod backend;
pub mod confession_store;
pub mod draft;
pub mod fs_backend;
pub mod mem_backend;
pub mod preferences;

pub use backend::{StorageBackend, StorageKey};
pub use confession_store::ConfessionStore;
pub use draft::DraftBuffer;
pub use preferences::Preferences;
