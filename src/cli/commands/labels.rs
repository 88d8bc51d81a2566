//! Labels command - labels defined on a board

use std::io::Write;

use crate::cli::app::LabelsAction;
use trello::output::{OutputMode, label_display_name};
use trello::{Client, views};

use super::{deleted, required, show};

/// Handle labels subcommands
pub fn labels(action: LabelsAction, client: &Client, mode: OutputMode, out: &mut dyn Write) -> anyhow::Result<()> {
    match action {
        LabelsAction::Get { id } => {
            let label = client.get_label(&id)?;
            show(out, mode, &label, |out| views::label_details(&label).write_to(out))
        },
        LabelsAction::Create { board, name, color } => {
            let board = required(board.as_deref(), "--board")?;
            let color = required(color.as_deref(), "--color")?;
            let label = client.create_label(board, &name, color)?;
            show(out, mode, &label, |out| {
                writeln!(out, "Label created: {}", label_display_name(&label))?;
                writeln!(out, "ID: {}", label.id)
            })
        },
        LabelsAction::Delete { id } => {
            client.delete_label(&id)?;
            deleted(out, mode, "Label", &id)
        },
    }
}
