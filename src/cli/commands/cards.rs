//! Cards command - card operations and card annotations

use std::io::Write;

use serde_json::json;

use crate::cli::app::{CardCreateArgs, CardUpdateArgs, CardsAction};
use trello::api::NewCard;
use trello::output::OutputMode;
use trello::{Client, Error, Params, views};

use super::{confirm, deleted, required, show};

/// Handle cards subcommands
pub fn cards(action: CardsAction, client: &Client, mode: OutputMode, out: &mut dyn Write) -> anyhow::Result<()> {
    match action {
        CardsAction::List { board, list, filter } => {
            let cards = match (list.as_deref(), board.as_deref()) {
                (Some(list), _) if !list.is_empty() => client.list_cards(list, Some(&filter))?,
                (_, Some(board)) if !board.is_empty() => client.board_cards(board, Some(&filter))?,
                _ => return Err(Error::validation("provide --board <board-id> or --list <list-id>").into()),
            };
            show(out, mode, &cards, |out| views::cards_table(&cards, 44).write_to(out))
        },
        CardsAction::Get { id } => {
            let card = client.get_card(&id, Params::new())?;
            show(out, mode, &card, |out| views::card_details(&card).write_to(out))
        },
        CardsAction::Create(args) => create(client, args, mode, out),
        CardsAction::Update(args) => update(client, args, mode, out),
        CardsAction::Delete { id } => {
            client.delete_card(&id)?;
            deleted(out, mode, "Card", &id)
        },
        CardsAction::Move { id, list, board } => {
            let list = required(list.as_deref(), "--list")?;
            let card = client.move_card(&id, list, board.as_deref().filter(|b| !b.is_empty()))?;
            show(out, mode, &card, |out| {
                writeln!(out, "Card moved: {}", card.name)?;
                writeln!(out, "New list: {}", card.id_list)
            })
        },
        CardsAction::Archive { id } => {
            let card = client.archive_card(&id)?;
            show(out, mode, &card, |out| writeln!(out, "Card archived: {}", card.name))
        },
        CardsAction::Comment { id, text } => {
            let action = client.add_comment(&id, &text)?;
            show(out, mode, &action, |out| {
                writeln!(out, "Comment added to card {id}.")?;
                writeln!(out, "Action ID: {}", action.id)
            })
        },
        CardsAction::Checklists { id } => {
            let checklists = client.card_checklists(&id)?;
            show(out, mode, &checklists, |out| {
                views::checklists_outline(&checklists)
                    .iter()
                    .try_for_each(|line| writeln!(out, "{line}"))
            })
        },
        CardsAction::Attachments { id } => {
            let attachments = client.card_attachments(&id)?;
            show(out, mode, &attachments, |out| views::attachments_table(&attachments).write_to(out))
        },
        CardsAction::Label { id, add, remove } => {
            let change = Change::from_flags(add, remove, "label")?;
            match &change {
                Change::Add(label) => client.add_label_to_card(&id, label)?,
                Change::Remove(label) => client.remove_label_from_card(&id, label)?,
            }
            change.confirm(out, mode, "Label", &id)
        },
        CardsAction::Member { id, add, remove } => {
            let change = Change::from_flags(add, remove, "member")?;
            match &change {
                Change::Add(member) => client.add_member_to_card(&id, member)?,
                Change::Remove(member) => client.remove_member_from_card(&id, member)?,
            }
            change.confirm(out, mode, "Member", &id)
        },
    }
}

fn create(client: &Client, args: CardCreateArgs, mode: OutputMode, out: &mut dyn Write) -> anyhow::Result<()> {
    let list_id = required(args.list.as_deref(), "--list")?.to_string();
    let card = client.create_card(&NewCard {
        list_id,
        name: args.name,
        desc: args.desc,
        extra: Params::new()
            .opt("due", args.due)
            .opt("pos", args.pos)
            .opt("idLabels", args.labels),
    })?;

    show(out, mode, &card, |out| {
        writeln!(out, "Card created: {}", card.name)?;
        writeln!(out, "ID:  {}", card.id)?;
        writeln!(out, "#{}  {}", card.id_short, card.short_url)
    })
}

fn update(client: &Client, args: CardUpdateArgs, mode: OutputMode, out: &mut dyn Write) -> anyhow::Result<()> {
    let mut params = Params::new()
        .opt("name", args.name)
        .opt("desc", args.desc)
        .opt("due", args.due)
        .flag("closed", args.closed)
        .flag("dueComplete", args.due_complete);
    if args.clear_due {
        params = params.clear("due");
    }

    let card = client.update_card(&args.id, params)?;
    show(out, mode, &card, |out| {
        writeln!(out, "Card updated: {}", card.name)?;
        writeln!(out, "ID:  {}", card.id)
    })
}

/// An `--add` or `--remove` request on a card's labels or members
#[derive(Debug)]
enum Change {
    Add(String),
    Remove(String),
}

impl Change {
    fn from_flags(add: Option<String>, remove: Option<String>, what: &str) -> Result<Self, Error> {
        match (add.filter(|v| !v.is_empty()), remove.filter(|v| !v.is_empty())) {
            (Some(id), _) => Ok(Self::Add(id)),
            (None, Some(id)) => Ok(Self::Remove(id)),
            (None, None) => Err(Error::validation(format!(
                "provide --add <{what}-id> or --remove <{what}-id>"
            ))),
        }
    }

    fn confirm(&self, out: &mut dyn Write, mode: OutputMode, kind: &str, card_id: &str) -> anyhow::Result<()> {
        let (id, added, message) = match self {
            Self::Add(id) => (id, true, format!("{kind} {id} added to card {card_id}.")),
            Self::Remove(id) => (id, false, format!("{kind} {id} removed from card {card_id}.")),
        };
        let result = json!({
            "card": card_id,
            "id": id,
            "added": added,
            "removed": !added,
        });
        confirm(out, mode, &result, &message)
    }
}
