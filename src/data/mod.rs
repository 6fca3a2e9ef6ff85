//! Data handling module
//!
//! Everything the table view computes from its rows lives here:
//! - `pipeline`: filter, sort and paginate over borrowed rows
//! - `csv_parser`: CSV primitives and row-model import/export
//!
//! ## Error Handling
//!
//! Fallible operations return `DataResult<T>` which uses the `DataError` type.
//! Common errors include:
//! - `TooLarge`: Input exceeds size limits
//! - `TooManyRows`: Dataset exceeds row limits
//! - `Csv`: Malformed CSV (for example a ragged row)

mod csv_parser;
mod error;
mod pipeline;

pub use csv_parser::*;
pub use error::*;
pub use pipeline::*;
