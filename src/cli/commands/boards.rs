//! Boards command - board operations

use std::io::Write;

use crate::cli::app::BoardsAction;
use trello::api::NewBoard;
use trello::output::OutputMode;
use trello::{Client, Params, views};

use super::{deleted, show};

/// Handle boards subcommands
pub fn boards(action: BoardsAction, client: &Client, mode: OutputMode, out: &mut dyn Write) -> anyhow::Result<()> {
    match action {
        BoardsAction::List { filter } => {
            let boards = client.my_boards(Some(&filter))?;
            show(out, mode, &boards, |out| views::boards_table(&boards).write_to(out))
        },
        BoardsAction::Get { id } => {
            let board = client.get_board(&id, Params::new())?;
            show(out, mode, &board, |out| views::board_details(&board).write_to(out))
        },
        BoardsAction::Create {
            name,
            desc,
            workspace,
            privacy,
        } => {
            let board = client.create_board(&NewBoard {
                name,
                desc,
                organization: workspace,
                permission_level: Some(privacy),
                extra: Params::new(),
            })?;
            show(out, mode, &board, |out| {
                writeln!(out, "Board created: {}", board.name)?;
                writeln!(out, "ID:  {}", board.id)?;
                writeln!(out, "URL: {}", board.short_url)
            })
        },
        BoardsAction::Update {
            id,
            name,
            desc,
            closed,
        } => {
            let params = Params::new()
                .opt("name", name)
                .opt("desc", desc)
                .flag("closed", closed);
            let board = client.update_board(&id, params)?;
            show(out, mode, &board, |out| {
                writeln!(out, "Board updated: {}", board.name)?;
                writeln!(out, "ID:  {}", board.id)?;
                writeln!(out, "URL: {}", board.short_url)
            })
        },
        BoardsAction::Delete { id } => {
            client.delete_board(&id)?;
            deleted(out, mode, "Board", &id)
        },
        BoardsAction::Members { id } => {
            let members = client.board_members(&id)?;
            show(out, mode, &members, |out| views::members_table(&members).write_to(out))
        },
        BoardsAction::Labels { id } => {
            let labels = client.board_labels(&id)?;
            show(out, mode, &labels, |out| views::labels_table(&labels).write_to(out))
        },
    }
}
