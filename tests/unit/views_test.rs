//! Tests for the display views built from API resources

use serde_json::json;
use trello::api::{Board, Card, Checklist, Label, Member, SearchResult};
use trello::views;

fn card() -> Card {
    serde_json::from_value(json!({
        "id": "c1",
        "idShort": 7,
        "name": "Write release notes",
        "idBoard": "b1",
        "idList": "l1",
        "due": "2024-06-01T12:00:00.000Z",
        "labels": [
            { "id": "lab1", "name": "docs", "color": "blue" },
            { "id": "lab2", "name": "", "color": "red" }
        ],
        "badges": { "checkItems": 4, "checkItemsChecked": 1, "attachments": 2, "comments": 3 }
    }))
    .unwrap()
}

fn detail<'a>(details: &'a trello::output::Details, label: &str) -> &'a str {
    details
        .pairs()
        .iter()
        .find(|(l, _)| l == label)
        .map(|(_, v)| v.as_str())
        .unwrap()
}

#[test]
fn unnamed_labels_show_their_colour() {
    assert_eq!(views::card_label_names(&card()), vec!["docs".to_string(), "red".to_string()]);
}

#[test]
fn cards_table_row() {
    let table = views::cards_table(&[card()], 10);
    assert_eq!(table.headers(), ["ID", "#", "NAME", "DUE", "LABELS"].map(String::from));
    assert_eq!(
        table.rows()[0],
        ["c1", "7", "Write rel…", "2024-06-01", "docs, red"].map(String::from)
    );
}

#[test]
fn card_details_summarise_badges() {
    let details = views::card_details(&card());
    assert_eq!(detail(&details, "Checklists"), "1/4");
    assert_eq!(detail(&details, "Attachments"), "2");
    assert_eq!(detail(&details, "Comments"), "3");
    assert_eq!(detail(&details, "Labels"), "docs, red");
}

#[test]
fn card_without_check_items_shows_placeholder() {
    let card: Card = serde_json::from_value(json!({ "id": "c2" })).unwrap();
    let details = views::card_details(&card);
    assert_eq!(detail(&details, "Checklists"), "-");
    assert_eq!(detail(&details, "Due"), "-");
    assert_eq!(detail(&details, "Labels"), "-");
}

#[test]
fn board_details_without_prefs() {
    let board: Board = serde_json::from_value(json!({ "id": "b1", "name": "Roadmap" })).unwrap();
    let details = views::board_details(&board);
    assert_eq!(detail(&details, "Permission"), "-");
    assert_eq!(detail(&details, "Workspace"), "-");
    assert_eq!(detail(&details, "Closed"), "no");
}

#[test]
fn board_details_show_permission_level() {
    let board: Board = serde_json::from_value(json!({
        "id": "b1",
        "prefs": { "permissionLevel": "org" }
    }))
    .unwrap();
    assert_eq!(detail(&views::board_details(&board), "Permission"), "org");
}

#[test]
fn checklist_outline_marks_completion() {
    let checklists: Vec<Checklist> = serde_json::from_value(json!([
        {
            "id": "cl1",
            "name": "Launch",
            "checkItems": [
                { "id": "i1", "name": "Tag release", "state": "complete" },
                { "id": "i2", "name": "Announce", "state": "incomplete" }
            ]
        },
        { "id": "cl2", "name": "Later", "checkItems": [] }
    ]))
    .unwrap();

    assert_eq!(
        views::checklists_outline(&checklists),
        vec![
            String::new(),
            "Launch (ID: cl1)".to_string(),
            "  [x] Tag release  (ID: i1)".to_string(),
            "  [ ] Announce  (ID: i2)".to_string(),
            String::new(),
            "Later (ID: cl2)".to_string(),
            "  (empty)".to_string(),
        ]
    );
    assert_eq!(views::checklists_outline(&[]), vec!["No checklists found.".to_string()]);
}

#[test]
fn checklist_details_count_done_items() {
    let checklist: Checklist = serde_json::from_value(json!({
        "id": "cl1",
        "name": "Launch",
        "checkItems": [
            { "id": "i1", "name": "a", "state": "complete" },
            { "id": "i2", "name": "b", "state": "complete" },
            { "id": "i3", "name": "c", "state": "incomplete" }
        ]
    }))
    .unwrap();
    assert_eq!(detail(&views::checklist_details(&checklist), "Items"), "2/3");
}

#[test]
fn me_details_count_boards_and_default_email() {
    let member: Member = serde_json::from_value(json!({
        "id": "m1",
        "fullName": "Ada Lovelace",
        "username": "ada",
        "idBoards": ["b1", "b2", "b3"]
    }))
    .unwrap();
    let details = views::me_details(&member);
    assert_eq!(detail(&details, "Boards"), "3");
    assert_eq!(detail(&details, "Email"), "-");
}

#[test]
fn label_views_fall_back_for_missing_name_and_colour() {
    let label: Label = serde_json::from_value(json!({ "id": "lab9", "name": "" })).unwrap();
    let table = views::labels_table(std::slice::from_ref(&label));
    assert_eq!(table.rows()[0], ["lab9", "-", "-"].map(String::from));
    assert_eq!(detail(&views::label_details(&label), "Color"), "-");
}

#[test]
fn search_sections_skip_empty_types() {
    let results: SearchResult = serde_json::from_value(json!({
        "cards": [{ "id": "c1", "name": "Roadmap item" }],
        "boards": [],
        "members": [
            { "id": "m1", "fullName": "Ada", "username": "ada" },
            { "id": "m2", "fullName": "Grace", "username": "grace" }
        ]
    }))
    .unwrap();

    let titles: Vec<String> = views::search_sections(&results).into_iter().map(|s| s.title).collect();
    assert_eq!(titles, vec!["Cards (1)".to_string(), "Members (2)".to_string()]);
    assert!(views::search_sections(&SearchResult::default()).is_empty());
}
