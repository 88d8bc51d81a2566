//! Command implementations
//!
//! Handlers receive the client, the output mode decided once in
//! [`run`](super::run) and the stream results are written to. Every result
//! goes through [`output::render`], so piped output is always JSON.

mod auth;
mod boards;
mod cards;
mod checklists;
mod info;
mod labels;
mod lists;
mod members;
mod search;

use std::io::{self, Write};

use serde::Serialize;
use serde_json::json;

use trello::output::{self, OutputMode};
use trello::Error;

pub use auth::auth;
pub use boards::boards;
pub use cards::cards;
pub use checklists::checklists;
pub use info::info;
pub use labels::labels;
pub use lists::lists;
pub use members::members;
pub use search::search;

/// Render `value` as JSON, or run `display` on a terminal
fn show<W, T, F>(out: &mut W, mode: OutputMode, value: &T, display: F) -> anyhow::Result<()>
where
    W: Write + ?Sized,
    T: Serialize + ?Sized,
    F: FnOnce(&mut W) -> io::Result<()>,
{
    output::render(out, mode, value, display)?;
    Ok(())
}

/// Confirm an operation that returns no resource
fn confirm<W: Write + ?Sized>(
    out: &mut W,
    mode: OutputMode,
    result: &serde_json::Value,
    message: &str,
) -> anyhow::Result<()> {
    show(out, mode, result, |out| writeln!(out, "{message}"))
}

/// Confirm a deletion: `{"id": ..., "deleted": true}` or a sentence
fn deleted<W: Write + ?Sized>(out: &mut W, mode: OutputMode, kind: &str, id: &str) -> anyhow::Result<()> {
    confirm(out, mode, &json!({ "id": id, "deleted": true }), &format!("{kind} {id} deleted."))
}

/// Value of a flag the command cannot run without
fn required<'a>(value: Option<&'a str>, flag: &str) -> Result<&'a str, Error> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| Error::validation(format!("{flag} is required")))
}
