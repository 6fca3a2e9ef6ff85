//! Filter -> sort -> paginate pipeline.
//!
//! All functions are pure and work on borrowed rows, so the same code drives
//! both the committed collection and the edit-mode working copy.

use crate::types::{Column, Row, SortDirection, visible_columns};
use std::cmp::Ordering;

/// Rows whose visible columns contain `search`, case-insensitively.
///
/// A missing cell counts as the empty string. With no visible column nothing
/// can match, even for an empty search term.
pub fn filter_rows<'a>(rows: &'a [Row], columns: &[Column], search: &str) -> Vec<&'a Row> {
    let needle = search.to_lowercase();
    let searchable: Vec<&str> = visible_columns(columns).map(|c| c.key.as_str()).collect();

    rows.iter()
        .filter(|row| {
            searchable
                .iter()
                .any(|key| row.display_value(key).to_lowercase().contains(&needle))
        })
        .collect()
}

/// Compare two rows on one field. Missing values sort first.
pub fn compare_field(a: &Row, b: &Row, field: &str) -> Ordering {
    match (a.get(field), b.get(field)) {
        (Some(va), Some(vb)) => va.natural_cmp(vb),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable in-place sort by `field`.
///
/// Descending reverses the comparator rather than the output, so rows with
/// equal values keep their incoming order in both directions.
pub fn sort_rows(rows: &mut [&Row], field: &str, direction: SortDirection) {
    rows.sort_by(|a, b| direction.apply(compare_field(a, b, field)));
}

/// The `page`-th window of `page_size` items; empty when out of range
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Filter then sort, returning the full (unpaginated) ordered result
pub fn filter_and_sort<'a>(
    rows: &'a [Row],
    columns: &[Column],
    search: &str,
    sort_field: &str,
    direction: SortDirection,
) -> Vec<&'a Row> {
    let mut result = filter_rows(rows, columns, search);
    sort_rows(&mut result, sort_field, direction);
    result
}
