//! Search command - cards, boards and members matching a query

use std::io::Write;

use crate::cli::app::SearchArgs;
use trello::api::SearchQuery;
use trello::output::OutputMode;
use trello::{Client, views};

use super::show;

/// Run a search
pub fn search(args: &SearchArgs, client: &Client, mode: OutputMode, out: &mut dyn Write) -> anyhow::Result<()> {
    let query = SearchQuery {
        query: args.query.clone(),
        model_types: args.types.iter().filter(|t| !t.is_empty()).cloned().collect(),
        limit: args.limit,
    };
    let results = client.search(&query)?;

    show(out, mode, &results, |out| {
        let sections = views::search_sections(&results);
        if sections.is_empty() {
            return writeln!(out, "No results found.");
        }
        for section in sections {
            writeln!(out)?;
            writeln!(out, "{}", section.title)?;
            section.table.write_to(out)?;
        }
        Ok(())
    })
}
