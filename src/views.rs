//! Display views for API resources
//!
//! Each function turns resources into a [`Table`] or [`Details`] ready to be
//! written in display mode. Views never fetch anything.

use crate::api::{
    Attachment, Board, BoardList, Card, Checklist, Label, Member, Organization, SearchResult,
};
use crate::output::{
    Details, NONE, Table, format_bool, format_date, format_labels, format_time, label_display_name,
    truncate,
};

/// Label names of a card, with colours standing in for unnamed labels
#[must_use]
pub fn card_label_names(card: &Card) -> Vec<String> {
    card.labels.iter().map(label_display_name).collect()
}

fn or_dash(value: &str) -> String {
    if value.is_empty() { NONE.to_string() } else { value.to_string() }
}

// =============================================================================
// Boards
// =============================================================================

/// Boards of the authenticated member
#[must_use]
pub fn boards_table(boards: &[Board]) -> Table {
    boards.iter().fold(
        Table::new(["ID", "NAME", "WORKSPACE", "LAST ACTIVITY", "CLOSED"], "No boards found."),
        |table, b| {
            table.with_row([
                b.id.clone(),
                truncate(&b.name, 40),
                truncate(b.id_organization.as_deref().unwrap_or(NONE), 24),
                format_time(b.date_last_activity.as_deref()),
                format_bool(b.closed).to_string(),
            ])
        },
    )
}

/// Boards of any member
#[must_use]
pub fn member_boards_table(boards: &[Board]) -> Table {
    boards.iter().fold(
        Table::new(["ID", "NAME", "LAST ACTIVITY", "CLOSED"], "No boards found."),
        |table, b| {
            table.with_row([
                b.id.clone(),
                truncate(&b.name, 44),
                format_time(b.date_last_activity.as_deref()),
                format_bool(b.closed).to_string(),
            ])
        },
    )
}

/// Single board
#[must_use]
pub fn board_details(board: &Board) -> Details {
    Details::new()
        .with("ID", board.id.as_str())
        .with("Name", board.name.as_str())
        .with("Description", truncate(&board.desc, 80))
        .with("Workspace", board.id_organization.as_deref().unwrap_or(NONE))
        .with("URL", board.short_url.as_str())
        .with("Last Activity", format_time(board.date_last_activity.as_deref()))
        .with("Closed", format_bool(board.closed))
        .with(
            "Permission",
            board.prefs.as_ref().map_or_else(|| NONE.to_string(), |p| or_dash(&p.permission_level)),
        )
}

// =============================================================================
// Lists
// =============================================================================

/// Lists on a board
#[must_use]
pub fn lists_table(lists: &[BoardList]) -> Table {
    lists.iter().fold(Table::new(["ID", "NAME", "CLOSED"], "No lists found."), |table, l| {
        table.with_row([l.id.clone(), truncate(&l.name, 50), format_bool(l.closed).to_string()])
    })
}

/// Single list
#[must_use]
pub fn list_details(list: &BoardList) -> Details {
    Details::new()
        .with("ID", list.id.as_str())
        .with("Name", list.name.as_str())
        .with("Board", list.id_board.as_str())
        .with("Closed", format_bool(list.closed))
}

// =============================================================================
// Cards
// =============================================================================

/// Cards, with names truncated to `name_width`
#[must_use]
pub fn cards_table(cards: &[Card], name_width: usize) -> Table {
    cards.iter().fold(
        Table::new(["ID", "#", "NAME", "DUE", "LABELS"], "No cards found."),
        |table, c| {
            table.with_row([
                c.id.clone(),
                c.id_short.to_string(),
                truncate(&c.name, name_width),
                format_date(c.due.as_deref()),
                format_labels(&card_label_names(c)),
            ])
        },
    )
}

/// Cards assigned to a member, across boards
#[must_use]
pub fn member_cards_table(cards: &[Card]) -> Table {
    cards.iter().fold(
        Table::new(["ID", "#", "NAME", "BOARD", "DUE"], "No cards found."),
        |table, c| {
            table.with_row([
                c.id.clone(),
                c.id_short.to_string(),
                truncate(&c.name, 44),
                truncate(&c.id_board, 24),
                format_date(c.due.as_deref()),
            ])
        },
    )
}

/// Single card
#[must_use]
pub fn card_details(card: &Card) -> Details {
    let checklists = if card.badges.check_items > 0 {
        format!("{}/{}", card.badges.check_items_checked, card.badges.check_items)
    } else {
        NONE.to_string()
    };

    Details::new()
        .with("ID", card.id.as_str())
        .with("#", card.id_short.to_string())
        .with("Name", card.name.as_str())
        .with("Description", truncate(&card.desc, 80))
        .with("List", card.id_list.as_str())
        .with("Board", card.id_board.as_str())
        .with("URL", card.short_url.as_str())
        .with("Due", format_date(card.due.as_deref()))
        .with("Due complete", format_bool(card.due_complete))
        .with("Labels", format_labels(&card_label_names(card)))
        .with("Checklists", checklists)
        .with("Attachments", card.badges.attachments.to_string())
        .with("Comments", card.badges.comments.to_string())
        .with("Last Activity", format_time(card.date_last_activity.as_deref()))
        .with("Closed", format_bool(card.closed))
}

/// Attachments on a card
#[must_use]
pub fn attachments_table(attachments: &[Attachment]) -> Table {
    attachments.iter().fold(
        Table::new(["ID", "NAME", "URL", "DATE"], "No attachments found."),
        |table, a| {
            table.with_row([
                a.id.clone(),
                truncate(&a.name, 30),
                truncate(&a.url, 50),
                format_time(a.date.as_deref()),
            ])
        },
    )
}

// =============================================================================
// Checklists
// =============================================================================

/// Checklists with their items, as an indented outline
#[must_use]
pub fn checklists_outline(checklists: &[Checklist]) -> Vec<String> {
    if checklists.is_empty() {
        return vec!["No checklists found.".to_string()];
    }

    let mut lines = Vec::new();
    for checklist in checklists {
        lines.push(String::new());
        lines.push(format!("{} (ID: {})", checklist.name, checklist.id));
        if checklist.check_items.is_empty() {
            lines.push("  (empty)".to_string());
            continue;
        }
        for item in &checklist.check_items {
            let mark = if item.is_complete() { "[x]" } else { "[ ]" };
            lines.push(format!("  {mark} {}  (ID: {})", item.name, item.id));
        }
    }
    lines
}

/// Single checklist
#[must_use]
pub fn checklist_details(checklist: &Checklist) -> Details {
    let done = checklist.check_items.iter().filter(|i| i.is_complete()).count();
    Details::new()
        .with("ID", checklist.id.as_str())
        .with("Name", checklist.name.as_str())
        .with("Card", checklist.id_card.as_str())
        .with("Board", checklist.id_board.as_str())
        .with("Items", format!("{done}/{}", checklist.check_items.len()))
}

// =============================================================================
// Members
// =============================================================================

/// Members of a board
#[must_use]
pub fn members_table(members: &[Member]) -> Table {
    members.iter().fold(Table::new(["ID", "NAME", "USERNAME"], "No members found."), |table, m| {
        table.with_row([m.id.clone(), m.full_name.clone(), m.username.clone()])
    })
}

/// The authenticated member's own profile
#[must_use]
pub fn me_details(member: &Member) -> Details {
    Details::new()
        .with("ID", member.id.as_str())
        .with("Full Name", member.full_name.as_str())
        .with("Username", member.username.as_str())
        .with("Email", member.email.as_deref().unwrap_or(NONE))
        .with("Bio", truncate(&member.bio, 80))
        .with("URL", member.url.as_str())
        .with("Boards", member.id_boards.len().to_string())
}

/// Another member's public profile
#[must_use]
pub fn member_details(member: &Member) -> Details {
    Details::new()
        .with("ID", member.id.as_str())
        .with("Full Name", member.full_name.as_str())
        .with("Username", member.username.as_str())
        .with("Bio", truncate(&member.bio, 80))
        .with("URL", member.url.as_str())
}

/// Workspaces of a member
#[must_use]
pub fn workspaces_table(orgs: &[Organization]) -> Table {
    orgs.iter().fold(
        Table::new(["ID", "NAME", "DISPLAY NAME", "BOARDS"], "No workspaces found."),
        |table, o| {
            table.with_row([
                o.id.clone(),
                truncate(&o.name, 24),
                truncate(&o.display_name, 30),
                o.id_boards.len().to_string(),
            ])
        },
    )
}

// =============================================================================
// Labels
// =============================================================================

/// Labels on a board
#[must_use]
pub fn labels_table(labels: &[Label]) -> Table {
    labels.iter().fold(Table::new(["ID", "NAME", "COLOR"], "No labels found."), |table, l| {
        table.with_row([
            l.id.clone(),
            or_dash(&l.name),
            l.color.clone().unwrap_or_else(|| NONE.to_string()),
        ])
    })
}

/// Single label
#[must_use]
pub fn label_details(label: &Label) -> Details {
    Details::new()
        .with("ID", label.id.as_str())
        .with("Name", or_dash(&label.name))
        .with("Color", label.color.as_deref().unwrap_or(NONE))
        .with("Board", label.id_board.as_str())
}

// =============================================================================
// Search
// =============================================================================

/// A titled group of search results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSection {
    /// Heading, e.g. `Cards (3)`
    pub title: String,
    /// Results of this model type
    pub table: Table,
}

/// One section per model type that has results; empty when nothing matched
#[must_use]
pub fn search_sections(results: &SearchResult) -> Vec<SearchSection> {
    let mut sections = Vec::new();

    if !results.cards.is_empty() {
        sections.push(SearchSection {
            title: format!("Cards ({})", results.cards.len()),
            table: cards_table(&results.cards, 44),
        });
    }

    if !results.boards.is_empty() {
        let table = results.boards.iter().fold(
            Table::new(["ID", "NAME", "URL", "CLOSED"], "No boards found."),
            |table, b| {
                table.with_row([
                    b.id.clone(),
                    truncate(&b.name, 44),
                    b.short_url.clone(),
                    format_bool(b.closed).to_string(),
                ])
            },
        );
        sections.push(SearchSection {
            title: format!("Boards ({})", results.boards.len()),
            table,
        });
    }

    if !results.members.is_empty() {
        sections.push(SearchSection {
            title: format!("Members ({})", results.members.len()),
            table: members_table(&results.members),
        });
    }

    sections
}
