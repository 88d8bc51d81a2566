//! trello - A command-line client for the Trello API
//!
//! This library provides the request engine that talks to the Trello REST API
//! and the presentation layer that renders results either as JSON (for pipes,
//! scripts and agents) or as aligned tables for a terminal.

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

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod api;
pub mod config;
pub mod output;
pub mod paths;
pub mod views;

pub use api::{Client, Credentials, Error, ErrorKind, Params, Request};
pub use output::OutputMode;
