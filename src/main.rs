//! trello - A command-line client for the Trello API
//!
//! Prints JSON when piped (for scripts and agents) and aligned tables in a
//! terminal.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;

use std::io;
use std::process::ExitCode;

use trello::output;

/// Main entry point for the trello CLI
fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Nothing else can be reported if stderr is gone
            let _ = output::write_error(&mut io::stderr(), format!("{err:#}"));
            ExitCode::FAILURE
        },
    }
}
