//! Bulk edit mode and row deletion

use super::TableManager;
use crate::constants::DELETE_ROW_PROMPT;
use crate::types::CellValue;

impl TableManager {
    pub fn is_editing(&self) -> bool {
        self.edit.is_editing()
    }

    /// Enter edit mode with a snapshot of the committed rows
    pub fn start_editing(&mut self) {
        if self.is_editing() {
            return;
        }
        self.edit.working_copy = Some(self.data.rows.clone());
    }

    /// Set one cell in the working copy.
    ///
    /// Returns false outside edit mode, when no row has `id`, or for the
    /// reserved `id` key.
    pub fn edit_cell(&mut self, id: &str, key: &str, value: impl Into<String>) -> bool {
        if key == "id" {
            return false;
        }
        let Some(working) = self.edit.working_copy.as_mut() else {
            tracing::debug!(id, key, "Ignoring cell edit outside edit mode");
            return false;
        };

        match working.iter_mut().find(|r| r.id == id) {
            Some(row) => {
                row.set(key, CellValue::Text(value.into()));
                true
            }
            None => false,
        }
    }

    /// Commit the working copy in one step and leave edit mode
    pub fn save_all(&mut self) {
        let Some(working) = self.edit.working_copy.take() else {
            return;
        };
        tracing::info!("Saved edits to {} rows", working.len());
        self.data.rows = working;
        self.refresh_pagination();
    }

    /// Leave edit mode, discarding the working copy
    pub fn cancel_editing(&mut self) {
        self.edit.working_copy = None;
    }

    /// Delete a row after the user confirms.
    ///
    /// `confirm` receives the prompt text; declining leaves everything as is.
    /// The row also leaves the working copy so a later save cannot bring it
    /// back. Returns true if a row was removed.
    pub fn delete_row<F>(&mut self, id: &str, confirm: F) -> bool
    where
        F: FnOnce(&str) -> bool,
    {
        if !confirm(DELETE_ROW_PROMPT) {
            return false;
        }

        let before = self.data.rows.len();
        self.data.rows.retain(|r| r.id != id);
        if let Some(working) = self.edit.working_copy.as_mut() {
            working.retain(|r| r.id != id);
        }

        let removed = self.data.rows.len() != before;
        if removed {
            self.refresh_pagination();
        }
        removed
    }
}
