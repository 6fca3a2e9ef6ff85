//! Core types for the table editor.
//!
//! Rows are schema-less: every row carries a unique `id` plus a map from
//! column key to a [`CellValue`]. Columns describe display order, labels and
//! visibility, and are shared by every row.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

// ============================================================================
// Cells
// ============================================================================

/// A single cell value
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    pub fn empty() -> Self {
        CellValue::Text(String::new())
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(_) => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Text(s) if s.is_empty())
    }

    /// Natural ordering: numeric when both sides are numbers, otherwise the
    /// stringified forms compare lexicographically.
    pub fn natural_cmp(&self, other: &CellValue) -> Ordering {
        match (self, other) {
            (CellValue::Number(a), CellValue::Number(b)) => a.total_cmp(b),
            (CellValue::Text(a), CellValue::Text(b)) => a.cmp(b),
            (a, b) => a.to_string().cmp(&b.to_string()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            CellValue::Number(n) => {
                // Whole numbers print without a trailing ".0"
                if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

// ============================================================================
// Rows
// ============================================================================

/// One record: a unique id plus any number of keyed cells
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub id: String,
    #[serde(flatten)]
    pub cells: BTreeMap<String, CellValue>,
}

impl Row {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            cells: BTreeMap::new(),
        }
    }

    /// Builder-style cell assignment
    pub fn with(mut self, key: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.cells.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.cells.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<CellValue>) {
        self.cells.insert(key.into(), value.into());
    }

    /// Stringified value of a cell, with missing cells rendered as ""
    pub fn display_value(&self, key: &str) -> String {
        self.cells
            .get(key)
            .map(|v| v.to_string())
            .unwrap_or_default()
    }
}

// ============================================================================
// Columns
// ============================================================================

/// Column definition shared by all rows
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Unique, immutable key used to look up cells
    pub key: String,
    /// Display name
    pub label: String,
    /// Whether the column is displayed, searched and exported
    pub visible: bool,
}

impl Column {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            visible: true,
        }
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

/// Columns currently flagged visible, in display order
pub fn visible_columns(columns: &[Column]) -> impl Iterator<Item = &Column> {
    columns.iter().filter(|c| c.visible)
}

// ============================================================================
// View Enums
// ============================================================================

/// Sort direction of the active sort field
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Direction after a header click on `clicked`.
    ///
    /// Clicking the field currently sorted ascending flips it to descending;
    /// every other click sorts ascending.
    pub fn after_click(current_field: &str, current: SortDirection, clicked: &str) -> Self {
        if current_field == clicked && current == SortDirection::Ascending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        }
    }

    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Light or dark presentation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

// ============================================================================
// Default Data
// ============================================================================

static DEFAULT_ROWS: Lazy<Vec<Row>> = Lazy::new(|| {
    const PEOPLE: &[(&str, &str, i64, &str)] = &[
        ("Aarav Sharma", "aarav.sharma@mail.com", 25, "Admin"),
        ("Priya Patel", "priya.patel@mail.com", 28, "Manager"),
        ("Rohan Mehta", "rohan.mehta@mail.com", 30, "User"),
        ("Ananya Gupta", "ananya.gupta@mail.com", 26, "User"),
        ("Vikram Nair", "vikram.nair@mail.com", 35, "Admin"),
        ("Neha Reddy", "neha.reddy@mail.com", 29, "Manager"),
        ("Karan Verma", "karan.verma@mail.com", 32, "User"),
        ("Isha Singh", "isha.singh@mail.com", 24, "User"),
        ("Rahul Das", "rahul.das@mail.com", 27, "Admin"),
        ("Sneha Iyer", "sneha.iyer@mail.com", 31, "Manager"),
        ("Arjun Joshi", "arjun.joshi@mail.com", 33, "User"),
        ("Meera Pillai", "meera.pillai@mail.com", 29, "User"),
        ("Dev Khanna", "dev.khanna@mail.com", 34, "Admin"),
        ("Riya Chatterjee", "riya.chatterjee@mail.com", 23, "User"),
        ("Amit Malhotra", "amit.malhotra@mail.com", 36, "Manager"),
    ];

    PEOPLE
        .iter()
        .enumerate()
        .map(|(i, (name, email, age, role))| {
            Row::new((i + 1).to_string())
                .with("name", *name)
                .with("email", *email)
                .with("age", *age)
                .with("role", *role)
        })
        .collect()
});

/// The 15 sample rows a fresh table starts with
pub fn default_rows() -> Vec<Row> {
    DEFAULT_ROWS.clone()
}

/// name/email/age/role, all visible
pub fn default_columns() -> Vec<Column> {
    vec![
        Column::new("name", "Name"),
        Column::new("email", "Email"),
        Column::new("age", "Age"),
        Column::new("role", "Role"),
    ]
}
