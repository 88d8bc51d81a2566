//! Common test utilities shared across test types
//!
//! - `mock_server.rs` - Local HTTP server standing in for the Trello API

pub mod mock_server;

pub use mock_server::{MockServer, Recorded, closed_base_url};
