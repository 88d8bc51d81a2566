//! Output formatting for display and JSON modes
//!
//! The output mode is decided once per invocation from the `--json` and
//! `--pretty` flags and whether stdout is a terminal, then passed to every
//! render call. Piped output is always JSON so other programs can parse it;
//! a terminal gets aligned tables unless JSON was asked for.

use std::fmt::Display;
use std::io::{self, IsTerminal, Write};

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;

use crate::api::Label;

/// Placeholder for absent values
pub const NONE: &str = "-";

/// Marker appended to truncated text
pub const ELLIPSIS: char = '…';

const COLUMN_GUTTER: usize = 2;
const TIME_FALLBACK_WIDTH: usize = 16;
const MILLIS_UTC_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";
const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Aligned tables and key/value listings (default on a terminal)
    #[default]
    Display,
    /// JSON output (machine-readable)
    Structured {
        /// Indented multi-line JSON instead of a single line
        pretty: bool,
    },
}

impl OutputMode {
    /// Decide the output mode.
    ///
    /// Non-interactive output is always structured. On a terminal, `--json`
    /// or `--pretty` select structured output. JSON is indented when
    /// `--pretty` is set, or when `--json` was asked for at a terminal.
    #[must_use]
    pub const fn resolve(json: bool, pretty: bool, interactive: bool) -> Self {
        if !interactive || json || pretty {
            Self::Structured {
                pretty: pretty || (json && interactive),
            }
        } else {
            Self::Display
        }
    }

    /// Decide the output mode for the process's stdout
    #[must_use]
    pub fn detect(json: bool, pretty: bool) -> Self {
        Self::resolve(json, pretty, io::stdout().is_terminal())
    }

    /// Whether results are written as JSON
    #[must_use]
    pub const fn is_structured(self) -> bool {
        matches!(self, Self::Structured { .. })
    }
}

/// Write `value` as JSON followed by a newline
pub fn write_json<W, T>(out: &mut W, value: &T, pretty: bool) -> io::Result<()>
where
    W: Write + ?Sized,
    T: Serialize + ?Sized,
{
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)
}

/// Render a result in the given mode: JSON for structured output, otherwise
/// whatever `display` writes.
pub fn render<W, T, F>(out: &mut W, mode: OutputMode, value: &T, display: F) -> io::Result<()>
where
    W: Write + ?Sized,
    T: Serialize + ?Sized,
    F: FnOnce(&mut W) -> io::Result<()>,
{
    match mode {
        OutputMode::Structured { pretty } => write_json(out, value, pretty),
        OutputMode::Display => display(out),
    }
}

/// Write an error line (`Error: <message>`)
pub fn write_error<W: Write + ?Sized>(err: &mut W, message: impl Display) -> io::Result<()> {
    writeln!(err, "Error: {message}")
}

// =============================================================================
// Tables
// =============================================================================

/// A column-aligned table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    empty_message: String,
}

impl Table {
    /// Create a table with the given headers. `empty_message` is printed
    /// instead of the table when it has no rows.
    #[must_use]
    pub fn new<I, S>(headers: I, empty_message: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            empty_message: empty_message.into(),
        }
    }

    /// Append a row
    pub fn push_row<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    /// Append a row, builder style
    #[must_use]
    pub fn with_row<I, S>(mut self, row: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push_row(row);
        self
    }

    /// Column headers
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Write the table, or the empty message when there are no rows
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        if self.rows.is_empty() {
            return writeln!(out, "{}", self.empty_message);
        }

        let lines: Vec<&[String]> = std::iter::once(self.headers.as_slice())
            .chain(self.rows.iter().map(Vec::as_slice))
            .collect();
        let widths = column_widths(&lines);

        for line in lines {
            write_aligned(out, line, &widths)?;
        }
        Ok(())
    }
}

/// Ordered label/value pairs for a single-resource detail view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Details {
    pairs: Vec<(String, String)>,
}

impl Details {
    /// Create an empty listing
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pair, builder style
    #[must_use]
    pub fn with(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.pairs.push((label.into(), value.into()));
        self
    }

    /// The pairs in order
    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Write one pair per line with labels padded to the same width
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        let width = self.pairs.iter().map(|(label, _)| display_len(label)).max().unwrap_or(0);
        for (label, value) in &self.pairs {
            let padding = width - display_len(label) + COLUMN_GUTTER;
            writeln!(out, "{label}{}{value}", " ".repeat(padding))?;
        }
        Ok(())
    }
}

fn display_len(s: &str) -> usize {
    s.chars().count()
}

fn column_widths(lines: &[&[String]]) -> Vec<usize> {
    let mut widths: Vec<usize> = Vec::new();
    for line in lines {
        for (i, cell) in line.iter().enumerate() {
            let len = display_len(cell);
            match widths.get_mut(i) {
                Some(width) => *width = (*width).max(len),
                None => widths.push(len),
            }
        }
    }
    widths
}

fn write_aligned<W: Write + ?Sized>(out: &mut W, cells: &[String], widths: &[usize]) -> io::Result<()> {
    let last = cells.len().saturating_sub(1);
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        line.push_str(cell);
        if i < last {
            let padding = widths[i] - display_len(cell) + COLUMN_GUTTER;
            line.push_str(&" ".repeat(padding));
        }
    }
    writeln!(out, "{line}")
}

// =============================================================================
// Scalar formatting
// =============================================================================

/// Shorten `s` to at most `max_chars` characters, ending with `…` when cut
#[must_use]
pub fn truncate(s: &str, max_chars: usize) -> String {
    if max_chars == 0 {
        return String::new();
    }
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max_chars - 1).collect();
    out.push(ELLIPSIS);
    out
}

/// Format a timestamp as `YYYY-MM-DD HH:MM` (UTC).
///
/// Accepts RFC 3339 and the API's `2006-01-02T15:04:05.000Z` form. Anything
/// else is shown truncated rather than failing the render.
#[must_use]
pub fn format_time(value: Option<&str>) -> String {
    let Some(raw) = value.filter(|v| !v.is_empty()) else {
        return NONE.to_string();
    };

    parse_timestamp(raw).map_or_else(
        || truncate(raw, TIME_FALLBACK_WIDTH),
        |t| t.format(DISPLAY_TIME_FORMAT).to_string(),
    )
}

/// Format a timestamp as `YYYY-MM-DD`
#[must_use]
pub fn format_date(value: Option<&str>) -> String {
    format_time(value).chars().take(10).collect()
}

/// `yes` or `no`
#[must_use]
pub const fn format_bool(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

/// Join label names with `, `, or `-` when there are none
#[must_use]
pub fn format_labels<S: AsRef<str>>(labels: &[S]) -> String {
    if labels.is_empty() {
        return NONE.to_string();
    }
    labels.iter().map(AsRef::<str>::as_ref).collect::<Vec<&str>>().join(", ")
}

/// The name to show for a label: its custom name, or its colour when unnamed
#[must_use]
pub fn label_display_name(label: &Label) -> String {
    if label.name.is_empty() {
        label.color.clone().unwrap_or_default()
    } else {
        label.name.clone()
    }
}

/// Mask a secret for display, keeping the first and last four characters
#[must_use]
pub fn mask(value: &str) -> String {
    if value.is_empty() {
        return "(not set)".to_string();
    }
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= 8 {
        return "***".to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, MILLIS_UTC_FORMAT)
                .ok()
                .map(|t| t.and_utc())
        })
}
