//! Application module - the table editor controller.
//!
//! This module is organized into several submodules:
//! - `state` - The TableManager struct definition and sub-structs
//! - `lifecycle` - Construction and restoring saved columns
//! - `table_view` - Search, sort and paging over the pipeline
//! - `table_editing` - Bulk edit mode and row deletion
//! - `column_management` - Column visibility and creation
//! - `import_export` - CSV import and export
//! - `settings_handlers` - Theme and modal toggles

mod column_management;
mod import_export;
mod lifecycle;
mod settings_handlers;
mod state;
mod table_editing;
mod table_view;

pub use state::{EditState, TableData, TableManager, UiState, ViewState};
