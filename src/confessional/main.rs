//! # Confess CLI
//!
//! The binary is intentionally thin: argument parsing, dispatch and rendering live in
//! `cli/`, while this file only invokes `cli::run()` and handles process termination.
//! Everything from `api.rs` inward is UI agnostic; the CLI owns every user-facing
//! concern (stdout/stderr, colors, exit codes).

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
