//! # CLI Layer
//!
//! This module is **one possible UI client** for confessional. A web page or a TUI
//! would sit on the same API.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//! - Installs the tracing subscriber
//!
//! ## Structure
//!
//! - `setup.rs`: clap definitions
//! - `commands.rs`: context initialization and per-command handlers
//! - `print.rs`: rendering of `CmdResult` values

mod commands;
mod print;
mod setup;

pub use commands::run;
