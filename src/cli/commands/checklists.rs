//! Checklists command - checklists on cards and their items

use std::io::Write;

use crate::cli::app::{CheckItemArgs, ChecklistsAction};
use trello::api::CheckItemState;
use trello::output::OutputMode;
use trello::{Client, views};

use super::{deleted, required, show};

/// Handle checklists subcommands
pub fn checklists(
    action: ChecklistsAction,
    client: &Client,
    mode: OutputMode,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    match action {
        ChecklistsAction::Get { id } => {
            let checklist = client.get_checklist(&id)?;
            show(out, mode, &checklist, |out| {
                views::checklist_details(&checklist).write_to(out)?;
                views::checklists_outline(std::slice::from_ref(&*checklist))
                    .iter()
                    .try_for_each(|line| writeln!(out, "{line}"))
            })
        },
        ChecklistsAction::Create { name, card } => {
            let card = required(card.as_deref(), "--card")?;
            let checklist = client.create_checklist(card, &name)?;
            show(out, mode, &checklist, |out| {
                writeln!(out, "Checklist created: {}", checklist.name)?;
                writeln!(out, "ID:   {}", checklist.id)?;
                writeln!(out, "Card: {}", checklist.id_card)
            })
        },
        ChecklistsAction::Delete { id } => {
            client.delete_checklist(&id)?;
            deleted(out, mode, "Checklist", &id)
        },
        ChecklistsAction::AddItem { name, checklist } => {
            let checklist = required(checklist.as_deref(), "--checklist")?;
            let item = client.create_check_item(checklist, &name)?;
            show(out, mode, &item, |out| {
                writeln!(out, "Item added: {}", item.name)?;
                writeln!(out, "ID: {}", item.id)
            })
        },
        ChecklistsAction::Check(args) => set_state(client, &args, CheckItemState::Complete, mode, out),
        ChecklistsAction::Uncheck(args) => set_state(client, &args, CheckItemState::Incomplete, mode, out),
    }
}

fn set_state(
    client: &Client,
    args: &CheckItemArgs,
    state: CheckItemState,
    mode: OutputMode,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let card = required(args.card.as_deref(), "--card")?;
    let checklist = required(args.checklist.as_deref(), "--checklist")?;
    let item = client.update_check_item(card, checklist, &args.item, state)?;

    let verb = match state {
        CheckItemState::Complete => "checked",
        CheckItemState::Incomplete => "unchecked",
    };
    show(out, mode, &item, |out| writeln!(out, "Item {verb}: {}", item.name))
}
