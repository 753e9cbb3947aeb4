//! Spreadsheet grid ⇄ [`StringTable`] adapter.
//!
//! Layout contract: the header row starts with `name`, `translatable`, `values`. Column 0
//! holds keys, column 1 the translatable flag, and every column from 2 on holds one
//! language, its header being the language identifier.

use std::collections::HashMap;

use crate::{
    cell::CellValue,
    error::Error,
    grid::Grid,
    placeholder::Diagnostic,
    types::{DEFAULT_LANGUAGE, DuplicateKeyPolicy, StringEntry, StringTable},
};

pub const KEY_HEADER: &str = "name";
pub const TRANSLATABLE_HEADER: &str = "translatable";

const KEY_COLUMN: usize = 0;
const TRANSLATABLE_COLUMN: usize = 1;
const FIRST_LANGUAGE_COLUMN: usize = 2;

/// Tables read from a grid plus the rows that could not be used.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridRead {
    pub tables: Vec<StringTable>,
    pub skipped: Vec<Diagnostic>,
}

/// Checks the three fixed header cells. Any mismatch is fatal.
pub fn validate_layout(grid: &Grid) -> Result<(), Error> {
    let expected = [KEY_HEADER, TRANSLATABLE_HEADER, DEFAULT_LANGUAGE];
    for (column, expected) in expected.into_iter().enumerate() {
        let found = grid.get(0, column);
        if !matches!(found, CellValue::Text(s) if s == expected) {
            return Err(Error::layout(column, expected, found.as_text()));
        }
    }
    Ok(())
}

/// Splits a validated grid into one table per language column, left to right.
///
/// A row joins a language's table only when its cell in that column is not blank.
pub fn tables_from_grid(grid: &Grid, policy: DuplicateKeyPolicy) -> Result<GridRead, Error> {
    validate_layout(grid)?;

    let mut read = GridRead::default();
    for column in FIRST_LANGUAGE_COLUMN..grid.used_columns() {
        let language = grid.get(0, column).as_text();
        let mut table = StringTable::new(language.clone());

        for row in 1..grid.used_rows() {
            let value = grid.get(row, column);
            if value.is_blank() {
                continue;
            }
            let key = grid.get(row, KEY_COLUMN);
            if key.is_blank() {
                read.skipped.push(Diagnostic::BlankKey {
                    row,
                    language: language.clone(),
                });
                continue;
            }
            let translatable = grid.get(row, TRANSLATABLE_COLUMN).parse_bool();
            table.insert(
                StringEntry::new(key.as_text(), value.as_text(), translatable),
                policy,
            )?;
        }
        read.tables.push(table);
    }
    Ok(read)
}

/// Lays the default table out as the first three columns of a fresh grid.
pub fn grid_from_default(default: &StringTable) -> Grid {
    let mut block = Vec::with_capacity(default.len() + 1);
    block.push(vec![
        CellValue::text(KEY_HEADER),
        CellValue::text(TRANSLATABLE_HEADER),
        CellValue::text(default.language.as_str()),
    ]);
    for entry in default {
        block.push(vec![
            CellValue::text(entry.key.as_str()),
            CellValue::text(entry.translatable.to_string()),
            CellValue::from(entry.value.as_str()),
        ]);
    }

    let mut grid = Grid::new();
    grid.set_block(0, 0, block);
    grid
}

/// Row index of every non-blank key in column 0. A repeated key maps to its last row.
pub fn key_rows(grid: &Grid) -> HashMap<String, usize> {
    (1..grid.used_rows())
        .filter_map(|row| {
            let key = grid.get(row, KEY_COLUMN);
            (!key.is_blank()).then(|| (key.as_text(), row))
        })
        .collect()
}

/// Appends `table` as a new language column after the used range.
///
/// Values land on the row holding the same key; keys without a row are skipped and
/// reported. Returns the new column index.
pub fn append_language(grid: &mut Grid, table: &StringTable) -> (usize, Vec<Diagnostic>) {
    let column = grid.used_columns();
    let rows = key_rows(grid);
    let mut warnings = Vec::new();

    grid.set(0, column, CellValue::text(table.language.as_str()));
    for entry in table {
        match rows.get(&entry.key) {
            Some(&row) => grid.set(row, column, CellValue::from(entry.value.as_str())),
            None => warnings.push(Diagnostic::NoDefaultValue {
                key: entry.key.clone(),
                language: table.language.clone(),
            }),
        }
    }
    (column, warnings)
}
