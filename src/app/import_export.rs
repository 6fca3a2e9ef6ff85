//! CSV import and export intents

use super::TableManager;
use crate::constants::IMPORT_ERROR_PREFIX;
use crate::data::{
    DataError, DataResult, ImportedRows, export_csv, is_csv_file, parse_import, read_csv_file,
};
use crate::notifications::Toast;
use std::path::Path;

impl TableManager {
    /// Import CSV text, replacing every row. Returns the new row count.
    pub fn import_csv(&mut self, content: &str) -> DataResult<usize> {
        self.apply_import(parse_import(content))
    }

    /// Read and import a CSV file. Paths without a `.csv` extension are
    /// rejected like a failed parse.
    pub fn import_file(&mut self, path: &Path) -> DataResult<usize> {
        let parsed = if is_csv_file(path) {
            read_csv_file(path).and_then(|content| parse_import(&content))
        } else {
            Err(DataError::NotCsv(path.to_path_buf()))
        };
        self.apply_import(parsed)
    }

    /// Apply the outcome of a parse started earlier.
    ///
    /// Parsing can happen anywhere; only this step touches state, so when
    /// several imports overlap the last one applied wins. A failed parse
    /// raises an alert and leaves the rows untouched. A successful one
    /// replaces the rows and ends edit mode, since the working copy refers to
    /// rows that no longer exist.
    pub fn apply_import(&mut self, parsed: DataResult<ImportedRows>) -> DataResult<usize> {
        let imported = match parsed {
            Ok(imported) => imported,
            Err(e) => {
                tracing::warn!("CSV import failed: {}", e);
                self.ui
                    .toasts
                    .push(Toast::error(format!("{}{}", IMPORT_ERROR_PREFIX, e)));
                return Err(e);
            }
        };

        if self.settings.import.create_missing_columns {
            let added = self.add_columns_for_headers(&imported.headers);
            if added > 0 {
                tracing::info!("Added {} columns from CSV headers", added);
            }
        }

        if self.edit.working_copy.take().is_some() {
            tracing::debug!("Import discarded the edit working copy");
        }

        let count = imported.rows.len();
        self.data.rows = imported.rows;
        self.refresh_pagination();
        tracing::info!("Imported {} rows", count);
        Ok(count)
    }

    /// CSV of the committed rows restricted to the visible columns
    pub fn export_text(&self) -> DataResult<String> {
        export_csv(&self.data.rows, &self.data.columns)
    }

    /// Export the visible columns of every committed row and hand the file
    /// to the saver. Returns the exported text.
    pub fn export_csv(&mut self) -> DataResult<String> {
        let result = self.export_text().and_then(|csv| {
            self.saver
                .save(csv.as_bytes(), &self.settings.export_file_name)?;
            Ok(csv)
        });

        if let Err(e) = &result {
            tracing::error!("CSV export failed: {}", e);
            self.ui.toasts.push(Toast::error(format!("Export failed: {}", e)));
        }
        result
    }
}
