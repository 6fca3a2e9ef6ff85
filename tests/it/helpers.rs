//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestTableBuilder` - Builder for a controller wired to in-memory stores
//! - Helper functions like `names()` and `ids()` for asserting on row order
//! - CSV fixtures

use std::sync::Arc;
use tabledesk::TableManager;
use tabledesk::constants::COLUMNS_STORAGE_KEY;
use tabledesk::settings::Settings;
use tabledesk::storage::{MemorySaver, MemoryStore};
use tabledesk::types::{Column, Row};

/// A controller plus handles on its store and saver
pub struct TestTable {
    pub table: TableManager,
    pub store: Arc<MemoryStore>,
    pub saver: Arc<MemorySaver>,
}

/// Builder for test tables.
///
/// # Example
/// ```ignore
/// let t = TestTableBuilder::new()
///     .with_saved_columns(r#"[{"key":"name","label":"Name","visible":true}]"#)
///     .build();
/// ```
#[derive(Default)]
pub struct TestTableBuilder {
    rows: Option<Vec<Row>>,
    saved_columns: Option<String>,
    settings: Settings,
}

impl TestTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from these rows instead of the sample data
    pub fn with_rows(mut self, rows: Vec<Row>) -> Self {
        self.rows = Some(rows);
        self
    }

    /// Pre-seed the store with a serialized column list
    pub fn with_saved_columns(mut self, json: impl Into<String>) -> Self {
        self.saved_columns = Some(json.into());
        self
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn create_missing_columns(mut self) -> Self {
        self.settings.import.create_missing_columns = true;
        self
    }

    pub fn build(self) -> TestTable {
        let store = Arc::new(match self.saved_columns {
            Some(json) => MemoryStore::with_entry(COLUMNS_STORAGE_KEY, json),
            None => MemoryStore::new(),
        });
        let saver = Arc::new(MemorySaver::new());

        let mut table = TableManager::with_settings(self.settings, store.clone(), saver.clone());
        if let Some(rows) = self.rows {
            table = table.with_rows(rows);
        }

        TestTable { table, store, saver }
    }
}

/// Default table wired to fresh in-memory stores
pub fn sample_table() -> TestTable {
    TestTableBuilder::new().build()
}

/// `name` of each row, in order
pub fn names(rows: &[&Row]) -> Vec<String> {
    rows.iter().map(|r| r.display_value("name")).collect()
}

/// `id` of each row, in order
pub fn ids(rows: &[&Row]) -> Vec<String> {
    rows.iter().map(|r| r.id.clone()).collect()
}

/// Saved column list, decoded
pub fn saved_columns(store: &MemoryStore) -> Option<Vec<Column>> {
    tabledesk::storage::load_columns(store)
}

/// CSV with a header and `count` rows named `Person 0`, `Person 1`, ...
pub fn people_csv(count: usize) -> String {
    let mut csv = String::from("name,email,age,role\n");
    for i in 0..count {
        csv.push_str(&format!(
            "Person {i},person{i}@mail.com,{},{}\n",
            20 + i % 30,
            if i % 3 == 0 { "Admin" } else { "User" }
        ));
    }
    csv
}

/// Assert the number of committed rows
pub fn assert_row_count(table: &TableManager, expected: usize) {
    assert_eq!(
        table.rows().len(),
        expected,
        "Expected {} rows, found {}",
        expected,
        table.rows().len()
    );
}
