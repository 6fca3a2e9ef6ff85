//! Application state - the TableManager struct definition and sub-structs.

use crate::data_table::PageState;
use crate::notifications::ToastManager;
use crate::settings::Settings;
use crate::storage::{FileSaver, KeyValueStore};
use crate::types::{Column, Row, SortDirection, ThemeMode};
use std::sync::Arc;

/// Committed table contents
#[derive(Clone, Debug, Default)]
pub struct TableData {
    /// Rows in insertion order
    pub rows: Vec<Row>,
    /// Columns in display order
    pub columns: Vec<Column>,
}

/// Search, sort and paging inputs of the pipeline
#[derive(Clone, Debug)]
pub struct ViewState {
    pub search: String,
    /// Column key rows are sorted by (may be hidden)
    pub sort_field: String,
    pub sort_direction: SortDirection,
    pub pager: PageState,
}

/// Bulk edit mode
#[derive(Clone, Debug, Default)]
pub struct EditState {
    /// Working copy of all rows; `Some` exactly while editing
    pub working_copy: Option<Vec<Row>>,
}

impl EditState {
    pub fn is_editing(&self) -> bool {
        self.working_copy.is_some()
    }
}

/// Presentation flags and pending alerts
#[derive(Debug, Default)]
pub struct UiState {
    pub theme: ThemeMode,
    /// Column manager modal open
    pub column_manager_open: bool,
    /// Text typed into the "new column" field
    pub new_column_input: String,
    pub toasts: ToastManager,
}

/// The table editor controller.
///
/// Owns all state; every user intent is a `&mut self` method on it.
pub struct TableManager {
    pub data: TableData,
    pub view: ViewState,
    pub edit: EditState,
    pub ui: UiState,
    pub settings: Settings,
    pub(crate) store: Arc<dyn KeyValueStore + Send + Sync>,
    pub(crate) saver: Arc<dyn FileSaver + Send + Sync>,
}

impl std::fmt::Debug for TableManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableManager")
            .field("data", &self.data)
            .field("view", &self.view)
            .field("edit", &self.edit)
            .field("ui", &self.ui)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
