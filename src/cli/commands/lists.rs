//! Lists command - manage the lists (columns) of a board

use std::io::Write;

use crate::cli::app::ListsAction;
use trello::output::OutputMode;
use trello::{Client, Params, views};

use super::{required, show};

/// Handle lists subcommands
pub fn lists(action: ListsAction, client: &Client, mode: OutputMode, out: &mut dyn Write) -> anyhow::Result<()> {
    match action {
        ListsAction::List { board, filter } => {
            let board = required(board.as_deref(), "--board")?;
            let lists = client.board_lists(board, Some(&filter))?;
            show(out, mode, &lists, |out| views::lists_table(&lists).write_to(out))
        },
        ListsAction::Get { id } => {
            let list = client.get_list(&id)?;
            show(out, mode, &list, |out| views::list_details(&list).write_to(out))
        },
        ListsAction::Create { name, board, pos } => {
            let board = required(board.as_deref(), "--board")?;
            let list = client.create_list(&name, board, pos.as_deref())?;
            show(out, mode, &list, |out| {
                writeln!(out, "List created: {}", list.name)?;
                writeln!(out, "ID:    {}", list.id)?;
                writeln!(out, "Board: {}", list.id_board)
            })
        },
        ListsAction::Rename { id, name } => {
            let list = client.update_list(&id, Params::new().set("name", name))?;
            show(out, mode, &list, |out| writeln!(out, "List renamed to: {}", list.name))
        },
        ListsAction::Archive { id } => {
            let list = client.archive_list(&id, true)?;
            show(out, mode, &list, |out| writeln!(out, "List archived: {}", list.name))
        },
        ListsAction::Unarchive { id } => {
            let list = client.archive_list(&id, false)?;
            show(out, mode, &list, |out| writeln!(out, "List unarchived: {}", list.name))
        },
        ListsAction::Cards { id, filter } => {
            let cards = client.list_cards(&id, Some(&filter))?;
            show(out, mode, &cards, |out| views::cards_table(&cards, 50).write_to(out))
        },
    }
}
