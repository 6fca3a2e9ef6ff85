//! Pipeline composition: search, sort and page intents and the rows they
//! produce.

use super::TableManager;
use crate::data::{filter_and_sort, paginate};
use crate::data_table::format_row_count;
use crate::types::{Row, SortDirection, visible_columns};

impl TableManager {
    /// Committed rows after filter and sort (the full set, not one page)
    pub fn sorted_rows(&self) -> Vec<&Row> {
        filter_and_sort(
            &self.data.rows,
            &self.data.columns,
            &self.view.search,
            &self.view.sort_field,
            self.view.sort_direction,
        )
    }

    /// Number of committed rows matching the current search
    pub fn total_count(&self) -> usize {
        self.sorted_rows().len()
    }

    /// Rows the table shows right now.
    ///
    /// Outside edit mode this is the current page of the committed rows.
    /// While editing it is the whole filtered/sorted working copy, unpaginated.
    pub fn displayed_rows(&self) -> Vec<&Row> {
        match &self.edit.working_copy {
            Some(working) => filter_and_sort(
                working,
                &self.data.columns,
                &self.view.search,
                &self.view.sort_field,
                self.view.sort_direction,
            ),
            None => {
                let sorted = self.sorted_rows();
                paginate(&sorted, self.view.pager.current_page, self.view.pager.page_size).to_vec()
            }
        }
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.view.search = search.into();
        self.refresh_pagination();
    }

    /// Header click: flips an ascending sort on the same field, otherwise
    /// sorts ascending by `field`
    pub fn sort_by(&mut self, field: &str) {
        let direction =
            SortDirection::after_click(&self.view.sort_field, self.view.sort_direction, field);
        self.set_sort(field, direction);
    }

    pub fn set_sort(&mut self, field: &str, direction: SortDirection) {
        self.view.sort_field = field.to_string();
        self.view.sort_direction = direction;
        tracing::debug!(field, ?direction, "Sort changed");
    }

    pub fn current_page(&self) -> usize {
        self.view.pager.current_page
    }

    /// Jump to a page; out-of-range pages clamp to the last page
    pub fn set_page(&mut self, page: usize) {
        self.view.pager.set_page(page);
    }

    pub fn next_page(&mut self) {
        self.view.pager.go_next();
    }

    pub fn prev_page(&mut self) {
        self.view.pager.go_prev();
    }

    /// Plain-text rendering of [`displayed_rows`](Self::displayed_rows):
    /// a header of visible column labels, one padded line per row, then a
    /// footer with the match count and page position.
    pub fn page_text(&self) -> String {
        let columns: Vec<_> = visible_columns(&self.data.columns).collect();
        let cells: Vec<Vec<String>> = self
            .displayed_rows()
            .iter()
            .map(|row| columns.iter().map(|c| row.display_value(&c.key)).collect())
            .collect();

        let widths: Vec<usize> = columns
            .iter()
            .enumerate()
            .map(|(i, c)| {
                cells
                    .iter()
                    .map(|r| r[i].chars().count())
                    .fold(c.label.chars().count(), usize::max)
            })
            .collect();
        let line = |fields: Vec<&str>| {
            let padded: Vec<String> = fields
                .iter()
                .zip(&widths)
                .map(|(v, w)| format!("{:<w$}", v, w = *w))
                .collect();
            padded.join("  ").trim_end().to_string()
        };

        let mut out = String::new();
        if !columns.is_empty() {
            out.push_str(&line(columns.iter().map(|c| c.label.as_str()).collect()));
            out.push('\n');
        }
        for row in &cells {
            out.push_str(&line(row.iter().map(String::as_str).collect()));
            out.push('\n');
        }
        out.push_str(&format!(
            "{} | page {}/{} | {}\n",
            format_row_count(self.total_count()),
            self.current_page() + 1,
            self.view.pager.total_pages(),
            self.view.pager.summary()
        ));
        out
    }

    /// Recount matching rows and pull the page back into range
    pub(crate) fn refresh_pagination(&mut self) {
        let total = self.total_count();
        let before = self.view.pager.current_page;
        if self.view.pager.set_total_rows(total) {
            tracing::debug!(
                from = before,
                to = self.view.pager.current_page,
                total,
                "Clamped page after row count change"
            );
        }
    }
}
