//! CSV reading and writing
//!
//! Two layers live here:
//! - primitives over the `csv` crate: text with a header row in, an ordered
//!   sequence of header -> value mappings out, and the inverse;
//! - the row-model transcoding built on them: [`parse_import`] turns CSV text
//!   into freshly numbered [`Row`]s, [`export_csv`] flattens rows back to CSV
//!   restricted to the visible columns.
//!
//! ## Memory Limits
//!
//! - Input larger than [`MAX_CSV_SIZE_MB`] is rejected with [`DataError::TooLarge`]
//! - More than [`MAX_CSV_ROWS`] data rows is rejected with [`DataError::TooManyRows`]

use crate::constants::{MAX_CSV_ROWS, MAX_CSV_SIZE_MB};
use crate::data::error::{DataError, DataResult};
use crate::types::{CellValue, Column, Row, visible_columns};
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// One parsed record: `(header, value)` pairs in file order
pub type CsvRecord = Vec<(String, String)>;

/// Raw CSV content split into a header row and data records
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub records: Vec<Vec<String>>,
}

impl CsvTable {
    /// Pair every value with its header name
    pub fn into_mappings(self) -> Vec<CsvRecord> {
        let headers = self.headers;
        self.records
            .into_iter()
            .map(|record| {
                record
                    .into_iter()
                    .enumerate()
                    .map(|(i, value)| {
                        let name = headers.get(i).cloned().unwrap_or_else(|| i.to_string());
                        (name, value)
                    })
                    .collect()
            })
            .collect()
    }
}

/// Read a CSV file from disk, enforcing the size limit before loading it
pub fn read_csv_file(path: &Path) -> DataResult<String> {
    let metadata = std::fs::metadata(path)?;
    let size_mb = metadata.len() / (1024 * 1024);
    if size_mb > MAX_CSV_SIZE_MB as u64 {
        return Err(DataError::TooLarge {
            size_mb,
            max_mb: MAX_CSV_SIZE_MB,
        });
    }

    Ok(std::fs::read_to_string(path)?)
}

/// Check if a file path looks like a CSV file
pub fn is_csv_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false)
}

/// Parse CSV text into headers and records.
///
/// Blank lines are skipped. A record whose field count differs from the
/// header is an error. A repeated header name gets a `_1`, `_2`, ... suffix.
/// Without a header row, fields are named `0`, `1`, ...
pub fn read_csv_table(content: &str, has_header: bool) -> DataResult<CsvTable> {
    let size_mb = (content.len() / (1024 * 1024)) as u64;
    if size_mb > MAX_CSV_SIZE_MB as u64 {
        return Err(DataError::TooLarge {
            size_mb,
            max_mb: MAX_CSV_SIZE_MB,
        });
    }
    if content.trim().is_empty() {
        return Err(DataError::EmptyFile);
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(has_header)
        .flexible(false)
        .from_reader(content.as_bytes());

    let mut headers: Vec<String> = if has_header {
        unique_headers(reader.headers()?.iter())
    } else {
        Vec::new()
    };
    if has_header && headers.is_empty() {
        return Err(DataError::NoColumns);
    }

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result?;
        if records.len() >= MAX_CSV_ROWS {
            return Err(DataError::TooManyRows {
                rows: records.len() + 1, // +1 for the current row that exceeded limit
                max_rows: MAX_CSV_ROWS,
            });
        }
        records.push(record.iter().map(str::to_string).collect::<Vec<_>>());
    }

    if !has_header {
        let width = records.first().map(Vec::len).unwrap_or(0);
        headers = (0..width).map(|i| i.to_string()).collect();
    }

    Ok(CsvTable { headers, records })
}

fn unique_headers<'a>(headers: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut repeats: HashMap<&'a str, usize> = HashMap::new();
    let mut out = Vec::new();

    for header in headers {
        let mut name = header.to_string();
        if seen.contains(&name) {
            let count = repeats.entry(header).or_insert(0);
            while seen.contains(&name) {
                *count += 1;
                name = format!("{}_{}", header, count);
            }
            tracing::debug!(header, renamed = %name, "Renamed repeated CSV header");
        }
        seen.insert(name.clone());
        out.push(name);
    }
    out
}

/// Parse CSV text into an ordered sequence of header -> value mappings
pub fn parse_csv_records(content: &str, has_header: bool) -> DataResult<Vec<CsvRecord>> {
    Ok(read_csv_table(content, has_header)?.into_mappings())
}

/// Serialize a header row plus records to CSV text.
///
/// Fields are quoted only when needed; lines end with CRLF.
pub fn write_csv_records<H, R>(headers: &[H], records: &[R]) -> DataResult<String>
where
    H: AsRef<str>,
    R: AsRef<[String]>,
{
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(headers.iter().map(|h| h.as_ref()))?;
    for record in records {
        writer.write_record(record.as_ref())?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| DataError::Other(format!("Failed to flush CSV: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| DataError::Other(format!("CSV is not UTF-8: {}", e)))
}

// ============================================================================
// Row model transcoding
// ============================================================================

/// Result of parsing an import: the file's header row and the new rows
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImportedRows {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

/// Map parsed records onto rows.
///
/// Ids are assigned sequentially from `"1"`; every field is copied verbatim as
/// text. A field named `id` is dropped since ids are always generated.
pub fn rows_from_records(records: Vec<CsvRecord>) -> Vec<Row> {
    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| {
            let mut row = Row::new((i + 1).to_string());
            for (key, value) in record {
                if key == "id" {
                    continue;
                }
                row.cells.insert(key, CellValue::Text(value));
            }
            row
        })
        .collect()
}

/// Parse CSV text (with a header row) into rows ready to replace a table
pub fn parse_import(content: &str) -> DataResult<ImportedRows> {
    let table = read_csv_table(content, true)?;
    let headers = table.headers.clone();
    let rows = rows_from_records(table.into_mappings());
    tracing::debug!(rows = rows.len(), columns = headers.len(), "Parsed CSV import");
    Ok(ImportedRows { headers, rows })
}

/// Flatten rows to CSV using only the visible columns.
///
/// The header row holds the visible column keys in display order; `id` and
/// hidden columns are left out. Missing cells export as empty fields. With
/// no visible column the result is empty.
pub fn export_csv(rows: &[Row], columns: &[Column]) -> DataResult<String> {
    let keys: Vec<&str> = visible_columns(columns).map(|c| c.key.as_str()).collect();
    if keys.is_empty() {
        return Ok(String::new());
    }

    let records: Vec<Vec<String>> = rows
        .iter()
        .map(|row| keys.iter().map(|k| row.display_value(k)).collect())
        .collect();

    write_csv_records(&keys, &records)
}
