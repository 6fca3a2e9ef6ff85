//! Application-wide constants.
//!
//! Centralizes magic numbers and fixed names so the pipeline, the controller
//! and the binary agree on them.

// ============================================================================
// Table View
// ============================================================================

/// Rows shown per page outside edit mode
pub const PAGE_SIZE: usize = 10;

/// Column the table is sorted by on startup
pub const DEFAULT_SORT_FIELD: &str = "name";

// ============================================================================
// Persistence & Export
// ============================================================================

/// Key under which the column list is stored
pub const COLUMNS_STORAGE_KEY: &str = "columns";

/// Suggested filename for CSV exports
pub const EXPORT_FILE_NAME: &str = "data-table.csv";

/// Prompt shown before a row is deleted
pub const DELETE_ROW_PROMPT: &str = "Delete this row?";

/// Prefix of the alert raised when an import fails
pub const IMPORT_ERROR_PREFIX: &str = "CSV Import error: ";

// ============================================================================
// Data Limits
// ============================================================================

/// Maximum number of data rows accepted by a CSV import
pub const MAX_CSV_ROWS: usize = 100_000;

/// Maximum CSV input size in MB
pub const MAX_CSV_SIZE_MB: usize = 100;
