//! Headless driver: applies intents from the command line to a table and
//! prints the resulting page.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tabledesk::TableManager;
use tabledesk::settings::Settings;
use tabledesk::storage::{DirectorySaver, FileStore};

#[derive(Parser, Debug)]
#[command(name = "tabledesk", version, about = "Sort, filter, page and export tabular data")]
struct Cli {
    /// CSV file to import (replaces the sample rows)
    #[arg(long, value_name = "FILE")]
    import: Option<PathBuf>,

    /// Case-insensitive search across visible columns
    #[arg(long, value_name = "TERM")]
    search: Option<String>,

    /// Click a column header; repeat to flip the direction
    #[arg(long, value_name = "FIELD")]
    sort: Vec<String>,

    /// Zero-based page to show
    #[arg(long, default_value_t = 0)]
    page: usize,

    /// Toggle a column's visibility (saved)
    #[arg(long, value_name = "KEY")]
    toggle: Vec<String>,

    /// Add a column (saved)
    #[arg(long, value_name = "NAME")]
    add_column: Vec<String>,

    /// Delete the row with this id
    #[arg(long, value_name = "ID")]
    delete: Vec<String>,

    /// Export visible columns as CSV into this directory (default: downloads)
    #[arg(long, value_name = "DIR", num_args = 0..=1)]
    export: Option<Option<PathBuf>>,

    /// Column preference store (defaults to the user data dir)
    #[arg(long, value_name = "FILE")]
    store: Option<PathBuf>,

    /// Settings file (defaults to the user config dir)
    #[arg(long, value_name = "FILE")]
    settings: Option<PathBuf>,
}

fn main() -> Result<()> {
    tabledesk::logging::init();
    let cli = Cli::parse();

    let settings = match &cli.settings {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };

    let store_path = cli
        .store
        .clone()
        .or_else(|| settings.store_path.clone())
        .or_else(FileStore::default_path)
        .context("No location for the column store; pass --store")?;
    let saver = match &cli.export {
        Some(Some(dir)) => DirectorySaver::new(dir),
        _ => match DirectorySaver::downloads() {
            Some(saver) => saver,
            None => DirectorySaver::new(
                std::env::current_dir().context("Failed to resolve current directory")?,
            ),
        },
    };
    tracing::debug!(dir = %saver.dir().display(), "Export directory");

    let store = Arc::new(FileStore::new(store_path));
    let saver = Arc::new(saver);
    let mut table = TableManager::with_settings(settings, store, saver);

    apply_intents(&cli, &mut table)?;
    print!("{}", table.page_text());

    if cli.export.is_some() {
        table.export_csv().context("Export failed")?;
    }
    Ok(())
}

/// Apply the command line intents in a fixed order: import, column changes,
/// deletes, search, sort clicks, then the page
fn apply_intents(cli: &Cli, table: &mut TableManager) -> Result<()> {
    if let Some(path) = &cli.import {
        table
            .import_file(path)
            .with_context(|| format!("Failed to import {}", path.display()))?;
    }
    for name in &cli.add_column {
        if table.add_column(name).is_none() {
            eprintln!("Skipped column {:?}", name);
        }
    }
    for key in &cli.toggle {
        table.toggle_column(key);
    }
    for id in &cli.delete {
        // The flag itself is the confirmation
        table.delete_row(id, |_| true);
    }
    if let Some(search) = &cli.search {
        table.set_search(search.clone());
    }
    for field in &cli.sort {
        table.sort_by(field);
    }
    table.set_page(cli.page);
    Ok(())
}
