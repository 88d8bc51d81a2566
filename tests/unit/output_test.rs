//! Tests for output modes, tables and detail listings

use serde_json::json;
use trello::output::{self, Details, OutputMode, Table};

fn written(f: impl FnOnce(&mut Vec<u8>) -> std::io::Result<()>) -> String {
    let mut buf = Vec::new();
    f(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

// =============================================================================
// Tables
// =============================================================================

#[test]
fn table_columns_are_aligned_to_widest_cell() {
    let table = Table::new(["ID", "NAME", "CLOSED"], "No lists found.")
        .with_row(["l1", "To Do", "no"])
        .with_row(["l22", "In Progress", "yes"]);

    let text = written(|out| table.write_to(out));
    assert_eq!(
        text,
        "ID   NAME         CLOSED\n\
         l1   To Do        no\n\
         l22  In Progress  yes\n"
    );
}

#[test]
fn empty_table_prints_its_message() {
    let table = Table::new(["ID", "NAME"], "No boards found.");
    assert!(table.is_empty());
    assert_eq!(written(|out| table.write_to(out)), "No boards found.\n");
}

#[test]
fn alignment_counts_characters_not_bytes() {
    let table = Table::new(["NAME", "ID"], "")
        .with_row(["héllo", "1"])
        .with_row(["ab", "2"]);

    assert_eq!(written(|out| table.write_to(out)), "NAME   ID\nhéllo  1\nab     2\n");
}

#[test]
fn push_row_appends() {
    let mut table = Table::new(["ID"], "none");
    table.push_row(["a"]);
    table.push_row(["b"]);
    assert_eq!(table.len(), 2);
    assert_eq!(table.rows()[1], vec!["b".to_string()]);
    assert_eq!(table.headers(), ["ID".to_string()]);
}

// =============================================================================
// Details
// =============================================================================

#[test]
fn details_pad_labels_to_the_same_width() {
    let details = Details::new().with("ID", "b1").with("Name", "Roadmap").with("URL", "https://trello.com/b/x");

    assert_eq!(
        written(|out| details.write_to(out)),
        "ID    b1\nName  Roadmap\nURL   https://trello.com/b/x\n"
    );
}

#[test]
fn empty_details_write_nothing() {
    assert_eq!(written(|out| Details::new().write_to(out)), "");
}

// =============================================================================
// JSON and dispatch
// =============================================================================

#[test]
fn compact_json_is_one_line() {
    let text = written(|out| output::write_json(out, &json!({ "id": "b1", "closed": false }), false));
    assert_eq!(text, "{\"closed\":false,\"id\":\"b1\"}\n");
}

#[test]
fn pretty_json_is_indented() {
    let text = written(|out| output::write_json(out, &json!({ "id": "b1" }), true));
    assert_eq!(text, "{\n  \"id\": \"b1\"\n}\n");
}

#[test]
fn empty_collection_is_an_empty_array() {
    let text = written(|out| output::write_json(out, &Vec::<String>::new(), false));
    assert_eq!(text, "[]\n");
}

#[test]
fn render_uses_json_when_structured() {
    let value = json!({ "id": "c1" });
    let text = written(|out| {
        output::render(out, OutputMode::Structured { pretty: false }, &value, |out| {
            out.extend_from_slice(b"display");
            Ok(())
        })
    });
    assert_eq!(text, "{\"id\":\"c1\"}\n");
}

#[test]
fn render_uses_display_callback_otherwise() {
    let value = json!({ "id": "c1" });
    let text = written(|out| {
        output::render(out, OutputMode::Display, &value, |out| {
            out.extend_from_slice(b"Card c1\n");
            Ok(())
        })
    });
    assert_eq!(text, "Card c1\n");
}

#[test]
fn errors_are_prefixed() {
    let text = written(|err| output::write_error(err, "HTTP 404: board not found"));
    assert_eq!(text, "Error: HTTP 404: board not found\n");
}

#[test]
fn piped_output_is_structured() {
    assert!(OutputMode::resolve(false, false, false).is_structured());
    assert!(!OutputMode::resolve(false, false, true).is_structured());
}
