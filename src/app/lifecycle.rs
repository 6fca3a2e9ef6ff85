//! Construction of the controller and restoration of saved preferences.

use super::{EditState, TableData, TableManager, UiState, ViewState};
use crate::constants::DEFAULT_SORT_FIELD;
use crate::data_table::PageState;
use crate::settings::Settings;
use crate::storage::{FileSaver, KeyValueStore, load_columns};
use crate::types::{Row, SortDirection, default_columns, default_rows};
use std::sync::Arc;

impl TableManager {
    /// Table with the default rows and columns, restoring saved columns from
    /// `store` if present
    pub fn new(
        store: Arc<dyn KeyValueStore + Send + Sync>,
        saver: Arc<dyn FileSaver + Send + Sync>,
    ) -> Self {
        Self::with_settings(Settings::default(), store, saver)
    }

    pub fn with_settings(
        settings: Settings,
        store: Arc<dyn KeyValueStore + Send + Sync>,
        saver: Arc<dyn FileSaver + Send + Sync>,
    ) -> Self {
        // Column preferences are read once, here
        let columns = match load_columns(&*store) {
            Some(columns) => {
                tracing::debug!("Restored {} saved columns", columns.len());
                columns
            }
            None => default_columns(),
        };
        let rows = default_rows();

        let mut manager = Self {
            view: ViewState {
                search: String::new(),
                sort_field: DEFAULT_SORT_FIELD.to_string(),
                sort_direction: SortDirection::Ascending,
                pager: PageState::new(rows.len()),
            },
            data: TableData { rows, columns },
            edit: EditState::default(),
            ui: UiState {
                theme: settings.theme,
                ..UiState::default()
            },
            settings,
            store,
            saver,
        };
        manager.refresh_pagination();
        manager
    }

    /// Replace the starting rows
    pub fn with_rows(mut self, rows: Vec<Row>) -> Self {
        self.data.rows = rows;
        self.refresh_pagination();
        self
    }

    pub fn rows(&self) -> &[Row] {
        &self.data.rows
    }

    pub fn columns(&self) -> &[crate::types::Column] {
        &self.data.columns
    }
}
