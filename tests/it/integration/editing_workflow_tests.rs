//! Bulk edit mode: working copy, save and cancel

use crate::helpers::{assert_row_count, sample_table};

fn name_of(t: &crate::helpers::TestTable, id: &str) -> String {
    t.table
        .rows()
        .iter()
        .find(|r| r.id == id)
        .map(|r| r.display_value("name"))
        .unwrap_or_default()
}

#[test]
fn test_edits_stay_in_working_copy_until_saved() {
    let mut t = sample_table();
    t.table.start_editing();
    assert!(t.table.is_editing());

    assert!(t.table.edit_cell("3", "name", "Rohan M."));
    assert_eq!(name_of(&t, "3"), "Rohan Mehta");

    t.table.save_all();
    assert!(!t.table.is_editing());
    assert_eq!(name_of(&t, "3"), "Rohan M.");
}

#[test]
fn test_cancel_discards_edits() {
    let mut t = sample_table();
    t.table.start_editing();
    t.table.edit_cell("3", "name", "Someone Else");
    t.table.cancel_editing();

    assert!(!t.table.is_editing());
    assert_eq!(name_of(&t, "3"), "Rohan Mehta");
}

#[test]
fn test_edit_outside_edit_mode_is_ignored() {
    let mut t = sample_table();
    assert!(!t.table.edit_cell("3", "name", "Nope"));
    assert_eq!(name_of(&t, "3"), "Rohan Mehta");
}

#[test]
fn test_edit_unknown_row_is_ignored() {
    let mut t = sample_table();
    t.table.start_editing();
    assert!(!t.table.edit_cell("99", "name", "Ghost"));
    t.table.save_all();
    assert_row_count(&t.table, 15);
}

#[test]
fn test_edited_value_becomes_text() {
    let mut t = sample_table();
    t.table.start_editing();
    t.table.edit_cell("8", "age", "40");
    t.table.save_all();

    let row = t.table.rows().iter().find(|r| r.id == "8").unwrap();
    assert_eq!(row.get("age").and_then(|v| v.as_number()), None);
    assert_eq!(row.display_value("age"), "40");
}

#[test]
fn test_edit_mode_shows_every_matching_row() {
    let mut t = sample_table();
    assert_eq!(t.table.displayed_rows().len(), 10);

    t.table.start_editing();
    assert_eq!(t.table.displayed_rows().len(), 15);

    // Search still applies to the working copy
    t.table.set_search("manager");
    assert_eq!(t.table.displayed_rows().len(), 4);
}

#[test]
fn test_edit_mode_view_reflects_pending_edits() {
    let mut t = sample_table();
    t.table.start_editing();
    t.table.edit_cell("15", "name", "Zed");

    let rows = t.table.displayed_rows();
    assert_eq!(rows.last().map(|r| r.display_value("name")), Some("Zed".to_string()));
}

#[test]
fn test_start_editing_twice_keeps_pending_edits() {
    let mut t = sample_table();
    t.table.start_editing();
    t.table.edit_cell("1", "role", "User");
    t.table.start_editing();
    t.table.save_all();

    let row = t.table.rows().iter().find(|r| r.id == "1").unwrap();
    assert_eq!(row.display_value("role"), "User");
}

#[test]
fn test_delete_during_edit_survives_save() {
    let mut t = sample_table();
    t.table.start_editing();
    assert!(t.table.delete_row("2", |_| true));
    assert_row_count(&t.table, 14);

    t.table.save_all();
    assert_row_count(&t.table, 14);
    assert!(t.table.rows().iter().all(|r| r.id != "2"));
}

#[test]
fn test_deleting_second_page_falls_back_to_first() {
    let mut t = sample_table();
    t.table.set_page(1);
    assert_eq!(t.table.current_page(), 1);

    let ids: Vec<String> = t.table.displayed_rows().iter().map(|r| r.id.clone()).collect();
    assert_eq!(ids.len(), 5);
    for id in ids {
        t.table.delete_row(&id, |_| true);
    }

    assert_row_count(&t.table, 10);
    assert_eq!(t.table.current_page(), 0);
    assert_eq!(t.table.displayed_rows().len(), 10);
}
