//! Request engine for the Trello REST API
//!
//! This module turns typed operations ("get board", "move card", ...) into
//! authenticated HTTP calls and their responses into typed resources.
//!
//! ## Design
//!
//! - **One execution path**: every operation builds a [`Request`] and goes
//!   through [`Client::execute`], which adds the credentials, sends the call
//!   and classifies the outcome
//! - **Explicit parameter precedence**: operations assemble their query from
//!   ordered [`Params`] sources merged by [`Params::merge`]
//! - **Responses keep their JSON**: typed operations return a [`Payload`],
//!   which reads as the typed resource and serializes as the received JSON
//! - **Closed error type**: failures are [`Error::Transport`], [`Error::Api`],
//!   [`Error::Decode`] or [`Error::Validation`], never retried

mod boards;
mod cards;
mod checklists;
mod client;
mod credentials;
mod error;
mod labels;
mod lists;
mod members;
mod params;
mod payload;
mod request;
mod search;
pub mod types;

pub use boards::NewBoard;
pub use cards::NewCard;
pub use client::{API_BASE_URL, Client};
pub use credentials::{Credentials, KEY_PARAM, TOKEN_PARAM};
pub use error::{Error, ErrorKind};
pub use params::Params;
pub use payload::Payload;
pub use request::Request;
pub use search::SearchQuery;
pub use types::{
    Action, Attachment, Board, BoardList, BoardPrefs, Card, CardBadges, CheckItem, CheckItemState,
    Checklist, Label, Member, Organization, SearchResult,
};
