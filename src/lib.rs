#![forbid(unsafe_code)]
//! Translation spreadsheet ⇄ Android `strings.xml` toolkit.
//!
//! A spreadsheet holds one row per string key and one column per language. The export
//! direction splits it into one `strings.xml` per language and checks that every
//! translation keeps the placeholders of the default (`values`) column. The import
//! direction reads a `res/` tree back into a spreadsheet.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use langsheet::{ExportOptions, export, formats::read_grid};
//!
//! let grid = read_grid("strings.xlsx")?;
//! let summary = export(&grid, &ExportOptions::default())?;
//! println!("Total errors: {}", summary.report.total_errors());
//! # Ok::<(), langsheet::Error>(())
//! ```
//!
//! All conversions go through the [`StringTable`] model: one ordered table per language.

pub mod cell;
pub mod error;
pub mod formats;
pub mod grid;
pub mod pipeline;
pub mod placeholder;
pub mod tabular;
pub mod traits;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    cell::CellValue,
    error::Error,
    grid::Grid,
    pipeline::{ExportOptions, ExportSummary, ImportOptions, ImportSummary, export, import},
    placeholder::{Diagnostic, PlaceholderRules, ValidationReport, Validator, count_matches},
    types::{DEFAULT_LANGUAGE, DuplicateKeyPolicy, StringEntry, StringTable},
};
