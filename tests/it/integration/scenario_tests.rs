//! The reference scenarios on the 15 sample rows.

use crate::helpers::{assert_row_count, ids, names, sample_table};
use tabledesk::types::SortDirection;

#[test]
fn test_search_admin_sorted_by_name() {
    let mut t = sample_table();
    t.table.set_search("admin");

    assert_eq!(t.table.total_count(), 4);
    assert_eq!(
        names(&t.table.displayed_rows()),
        vec!["Aarav Sharma", "Dev Khanna", "Rahul Das", "Vikram Nair"]
    );
}

#[test]
fn test_sort_age_twice() {
    let mut t = sample_table();

    t.table.sort_by("age");
    assert_eq!(t.table.view.sort_direction, SortDirection::Ascending);
    let rows = t.table.displayed_rows();
    assert_eq!(rows[0].display_value("name"), "Isha Singh");
    assert_eq!(rows[0].display_value("age"), "24");

    t.table.sort_by("age");
    assert_eq!(t.table.view.sort_direction, SortDirection::Descending);
    let rows = t.table.displayed_rows();
    assert_eq!(rows[0].display_value("name"), "Amit Malhotra");
    assert_eq!(rows[0].display_value("age"), "36");
}

#[test]
fn test_delete_confirmed() {
    let mut t = sample_table();
    let mut prompt = String::new();

    let removed = t.table.delete_row("1", |p| {
        prompt = p.to_string();
        true
    });

    assert!(removed);
    assert_eq!(prompt, "Delete this row?");
    assert_row_count(&t.table, 14);
    assert!(t.table.rows().iter().all(|r| r.id != "1"));
}

#[test]
fn test_delete_declined() {
    let mut t = sample_table();
    assert!(!t.table.delete_row("1", |_| false));
    assert_row_count(&t.table, 15);
}

#[test]
fn test_delete_unknown_id_is_noop() {
    let mut t = sample_table();
    assert!(!t.table.delete_row("999", |_| true));
    assert_row_count(&t.table, 15);
}

#[test]
fn test_default_view_is_first_page_by_name() {
    let t = sample_table();
    let rows = t.table.displayed_rows();

    assert_eq!(rows.len(), 10);
    assert_eq!(t.table.total_count(), 15);
    assert_eq!(rows[0].display_value("name"), "Aarav Sharma");
    assert_eq!(
        ids(&rows),
        vec!["1", "15", "4", "11", "13", "8", "7", "12", "6", "2"]
    );
}
