//! The two conversion directions.
//!
//! - [`export`]: spreadsheet grid → one `strings.xml` per language column, with the
//!   placeholder checks run on the way.
//! - [`import`]: `res/values*/strings.xml` → spreadsheet grid.
//!
//! Neither direction prints anything; findings come back in the summaries.

use std::{
    fmt::Display,
    fs,
    path::{Path, PathBuf},
};

use serde::Serialize;

use crate::{
    error::Error,
    formats::android_strings::{STRINGS_FILE_NAME, read_table, write_table},
    grid::Grid,
    placeholder::{Diagnostic, PlaceholderRules, ValidationReport, Validator},
    tabular::{append_language, grid_from_default, tables_from_grid},
    types::{DEFAULT_LANGUAGE, DuplicateKeyPolicy, StringTable},
};

/// Prefix of translated resource directories (`values-de`, `values-pt-rBR`, ...).
pub const TRANSLATION_DIR_PREFIX: &str = "values-";

#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Root of the generated `<language>/strings.xml` tree.
    pub output_root: PathBuf,
    pub file_name: String,
    pub rules: PlaceholderRules,
    pub duplicate_policy: DuplicateKeyPolicy,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from("output"),
            file_name: STRINGS_FILE_NAME.to_string(),
            rules: PlaceholderRules::default(),
            duplicate_policy: DuplicateKeyPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportSummary {
    #[serde(skip)]
    pub tables: Vec<StringTable>,
    pub report: ValidationReport,
    pub written: Vec<PathBuf>,
}

/// Validates the grid layout, checks placeholders and writes every language file.
///
/// Only a broken layout, a rejected duplicate key or an I/O failure stops the run.
/// Languages with placeholder errors are written all the same.
pub fn export(grid: &Grid, options: &ExportOptions) -> Result<ExportSummary, Error> {
    let read = tables_from_grid(grid, options.duplicate_policy)?;
    let validator = Validator::new(options.rules.clone());

    let mut report = check_tables(&read.tables, &validator);
    for skipped in read.skipped {
        report.record(skipped);
    }

    let mut written = Vec::with_capacity(read.tables.len());
    for table in &read.tables {
        written.push(write_table(table, &options.output_root, &options.file_name)?);
    }

    Ok(ExportSummary {
        tables: read.tables,
        report,
        written,
    })
}

/// Runs the default self check and every translation check, in table order.
pub fn check_tables(tables: &[StringTable], validator: &Validator) -> ValidationReport {
    let mut report = ValidationReport::new();
    let empty_default = StringTable::new(DEFAULT_LANGUAGE);
    let default = tables
        .iter()
        .find(|t| t.is_default())
        .unwrap_or(&empty_default);

    for table in tables {
        if table.is_default() {
            validator.validate_default(table, &mut report);
        } else {
            validator.validate_translation(default, table, &mut report);
        }
    }
    report
}

#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// The `res/` directory holding `values/` and `values-*/`.
    pub res_dir: PathBuf,
    pub file_name: String,
    pub duplicate_policy: DuplicateKeyPolicy,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            res_dir: PathBuf::from("res"),
            file_name: STRINGS_FILE_NAME.to_string(),
            duplicate_policy: DuplicateKeyPolicy::default(),
        }
    }
}

/// Size figures of one imported resource file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableStats {
    pub language: String,
    pub total: usize,
    pub untranslatable: usize,
    pub total_length: usize,
}

impl From<&StringTable> for TableStats {
    fn from(table: &StringTable) -> Self {
        Self {
            language: table.language.clone(),
            total: table.len(),
            untranslatable: table.untranslatable_count(),
            total_length: table.total_value_length(),
        }
    }
}

impl Display for TableStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Language: {}; Total strings: {}; Untranslatable: {}; Total strings length: {}",
            self.language, self.total, self.untranslatable, self.total_length
        )
    }
}

#[derive(Debug, Clone)]
pub struct ImportSummary {
    pub grid: Grid,
    pub stats: Vec<TableStats>,
    /// `NoDefaultValue` findings, in file order.
    pub warnings: Vec<Diagnostic>,
}

/// Builds a grid from the default resource file and appends one column per translation.
pub fn import(options: &ImportOptions) -> Result<ImportSummary, Error> {
    let default_path = options
        .res_dir
        .join(DEFAULT_LANGUAGE)
        .join(&options.file_name);
    let default = read_table(&default_path, DEFAULT_LANGUAGE, options.duplicate_policy)?;

    let mut grid = grid_from_default(&default);
    let mut stats = vec![TableStats::from(&default)];
    let mut warnings = Vec::new();

    for (language, path) in discover_translations(&options.res_dir, &options.file_name)? {
        let table = read_table(&path, language, options.duplicate_policy)?;
        stats.push(TableStats::from(&table));
        let (_, missing) = append_language(&mut grid, &table);
        warnings.extend(missing);
    }

    Ok(ImportSummary {
        grid,
        stats,
        warnings,
    })
}

/// Lists `values-*` directories under `res_dir` that contain `file_name`, sorted by name.
pub fn discover_translations(
    res_dir: &Path,
    file_name: &str,
) -> Result<Vec<(String, PathBuf)>, Error> {
    let mut found = Vec::new();
    for dir_entry in fs::read_dir(res_dir)? {
        let dir_entry = dir_entry?;
        if !dir_entry.file_type()?.is_dir() {
            continue;
        }
        let Some(name) = dir_entry.file_name().to_str().map(str::to_string) else {
            continue;
        };
        let path = dir_entry.path().join(file_name);
        if name.starts_with(TRANSLATION_DIR_PREFIX) && path.is_file() {
            found.push((name, path));
        }
    }
    found.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(found)
}
