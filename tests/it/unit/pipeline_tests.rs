//! Property-style checks of the filter/sort/paginate functions over a range
//! of inputs.

use tabledesk::data::{filter_and_sort, filter_rows, paginate, sort_rows};
use tabledesk::types::{Column, Row, SortDirection, default_columns, default_rows};

const TERMS: &[&str] = &["", "a", "ADMIN", "mail.com", "29", "sh", "zzz", "Rahul Das", " "];

fn row_matches(row: &Row, columns: &[Column], term: &str) -> bool {
    let term = term.to_lowercase();
    columns
        .iter()
        .filter(|c| c.visible)
        .any(|c| row.display_value(&c.key).to_lowercase().contains(&term))
}

#[test]
fn test_filter_includes_exactly_the_matching_rows() {
    let rows = default_rows();
    let mut column_sets = vec![default_columns()];
    let mut only_name = default_columns();
    for c in only_name.iter_mut().skip(1) {
        c.visible = false;
    }
    column_sets.push(only_name);

    for columns in &column_sets {
        for term in TERMS {
            let matched = filter_rows(&rows, columns, term);
            for row in &rows {
                let included = matched.iter().any(|m| m.id == row.id);
                assert_eq!(
                    included,
                    row_matches(row, columns, term),
                    "row {} with term {:?}",
                    row.id,
                    term
                );
            }
        }
    }
}

#[test]
fn test_double_toggle_reverses_strict_order() {
    // Names are all distinct, so the order is strict
    let rows = default_rows();
    let asc = filter_and_sort(&rows, &default_columns(), "", "name", SortDirection::Ascending);
    let desc = filter_and_sort(&rows, &default_columns(), "", "name", SortDirection::Descending);

    let mut reversed = asc.clone();
    reversed.reverse();
    assert_eq!(desc, reversed);
}

#[test]
fn test_repeated_sorts_are_deterministic() {
    let rows: Vec<Row> = (0..20)
        .map(|i| Row::new(i.to_string()).with("group", (i % 3) as i64))
        .collect();

    let mut view: Vec<&Row> = rows.iter().collect();
    sort_rows(&mut view, "group", SortDirection::Ascending);
    let first: Vec<String> = view.iter().map(|r| r.id.clone()).collect();

    for _ in 0..3 {
        let mut again: Vec<&Row> = rows.iter().collect();
        sort_rows(&mut again, "group", SortDirection::Descending);
        sort_rows(&mut again, "group", SortDirection::Ascending);
        let ids: Vec<String> = again.iter().map(|r| r.id.clone()).collect();
        assert_eq!(ids, first);
    }

    // Within a group, ids stay in insertion order
    let zeros: Vec<&str> = view
        .iter()
        .filter(|r| r.display_value("group") == "0")
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(zeros, vec!["0", "3", "6", "9", "12", "15", "18"]);
}

#[test]
fn test_sort_mixed_values_never_panics() {
    let rows = vec![
        Row::new("1").with("v", 3.5),
        Row::new("2").with("v", "abc"),
        Row::new("3"),
        Row::new("4").with("v", f64::NAN),
        Row::new("5").with("v", "10"),
        Row::new("6").with("v", -1.0),
    ];
    let mut view: Vec<&Row> = rows.iter().collect();
    sort_rows(&mut view, "v", SortDirection::Descending);
    assert_eq!(view.len(), 6);
    // Missing sorts first ascending, so last descending
    assert_eq!(view[5].id, "3");
}

#[test]
fn test_pagination_windows() {
    for n in [0usize, 1, 9, 10, 11, 25, 40] {
        let items: Vec<usize> = (0..n).collect();
        for k in 0..6 {
            let page = paginate(&items, k, 10);
            let start = 10 * k;
            if start >= n {
                assert!(page.is_empty(), "n={} k={}", n, k);
            } else {
                let end = (start + 10).min(n);
                assert_eq!(page, &items[start..end], "n={} k={}", n, k);
            }
        }
    }
}
