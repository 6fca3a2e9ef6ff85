//! tabledesk: the core of a tabular data editor.
//!
//! An in-memory collection of schema-less rows rendered as a sortable,
//! filterable, paginated table, with column management, bulk inline editing
//! and CSV import/export. Rendering is left to the caller: [`app::TableManager`]
//! exposes the rows to draw and accepts user intents as method calls.

pub mod app;
pub mod constants;
pub mod data;
pub mod data_table;
pub mod logging;
pub mod notifications;
pub mod settings;
pub mod storage;
pub mod types;

pub use app::TableManager;
