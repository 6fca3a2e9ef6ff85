//! Column visibility and column creation

use super::TableManager;
use crate::storage::save_columns;
use crate::types::{CellValue, Column};

impl TableManager {
    /// Flip a column's visibility. Unknown keys are ignored.
    pub fn toggle_column(&mut self, key: &str) -> bool {
        let Some(column) = self.data.columns.iter_mut().find(|c| c.key == key) else {
            tracing::debug!(key, "Ignoring toggle of unknown column");
            return false;
        };
        column.visible = !column.visible;

        self.persist_columns();
        self.refresh_pagination();
        true
    }

    /// Append a visible column named `name` and backfill every row with an
    /// empty value for it.
    ///
    /// The key is the trimmed name lowercased. Blank names, names whose key
    /// already exists and the reserved `id` key are ignored. Cells that already hold a value for
    /// the key (fields from an import) keep it.
    pub fn add_column(&mut self, name: &str) -> Option<&Column> {
        let label = name.trim();
        if label.is_empty() {
            return None;
        }
        let key = label.to_lowercase();
        if key == "id" {
            tracing::debug!("Column key `id` is reserved for row ids");
            return None;
        }
        if self.data.columns.iter().any(|c| c.key == key) {
            tracing::debug!(key, "Column already exists");
            return None;
        }

        backfill(&mut self.data.rows, &key);
        if let Some(working) = self.edit.working_copy.as_mut() {
            backfill(working, &key);
        }
        self.data.columns.push(Column::new(key, label));

        self.persist_columns();
        self.refresh_pagination();
        self.data.columns.last()
    }

    pub fn set_new_column_input(&mut self, text: impl Into<String>) {
        self.ui.new_column_input = text.into();
    }

    /// Add a column from the pending input; the input clears on success
    pub fn submit_new_column(&mut self) -> bool {
        let name = self.ui.new_column_input.clone();
        let added = self.add_column(&name).is_some();
        if added {
            self.ui.new_column_input.clear();
        }
        added
    }

    /// Append columns for `headers` missing from the column list
    pub(crate) fn add_columns_for_headers(&mut self, headers: &[String]) -> usize {
        let mut added = 0;
        for header in headers {
            if header.is_empty() || header == "id" {
                continue;
            }
            if self.data.columns.iter().any(|c| &c.key == header) {
                continue;
            }
            self.data.columns.push(Column::new(header.clone(), header.clone()));
            added += 1;
        }
        if added > 0 {
            self.persist_columns();
        }
        added
    }

    /// Write the column list to the store; failures are logged only
    pub(crate) fn persist_columns(&self) {
        if let Err(e) = save_columns(&*self.store, &self.data.columns) {
            tracing::error!("Failed to save column preferences: {}", e);
        }
    }
}

fn backfill(rows: &mut [crate::types::Row], key: &str) {
    for row in rows {
        row.cells
            .entry(key.to_string())
            .or_insert_with(CellValue::empty);
    }
}
