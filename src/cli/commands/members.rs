//! Members command - profiles and what a member has access to

use std::io::Write;

use crate::cli::app::MembersAction;
use trello::output::OutputMode;
use trello::{Client, Params, views};

use super::show;

/// Handle members subcommands
pub fn members(action: MembersAction, client: &Client, mode: OutputMode, out: &mut dyn Write) -> anyhow::Result<()> {
    match action {
        MembersAction::Me => {
            let member = client.get_member("me", Params::new())?;
            show(out, mode, &member, |out| views::me_details(&member).write_to(out))
        },
        MembersAction::Get { who } => {
            let member = client.get_member(&who, Params::new())?;
            show(out, mode, &member, |out| views::member_details(&member).write_to(out))
        },
        MembersAction::Boards { who, filter } => {
            let boards = client.member_boards(&who, Some(&filter))?;
            show(out, mode, &boards, |out| views::member_boards_table(&boards).write_to(out))
        },
        MembersAction::Cards { who, filter } => {
            let cards = client.member_cards(&who, Some(&filter))?;
            show(out, mode, &cards, |out| views::member_cards_table(&cards).write_to(out))
        },
        MembersAction::Workspaces { who } => {
            let orgs = client.member_organizations(&who)?;
            show(out, mode, &orgs, |out| views::workspaces_table(&orgs).write_to(out))
        },
    }
}
