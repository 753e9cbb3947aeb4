//! In-memory worksheet: a row-major block of [`CellValue`]s.
//!
//! Row 0 is the header row. Reads outside the used range return [`CellValue::Empty`];
//! writes outside it grow the grid.

use serde::{Deserialize, Serialize};

use crate::cell::CellValue;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Grid {
    rows: Vec<Vec<CellValue>>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a grid from rows of cells. Short rows are padded with empty cells.
    pub fn from_rows(rows: Vec<Vec<CellValue>>) -> Self {
        let mut grid = Self { rows };
        grid.normalize();
        grid
    }

    /// Number of rows in the used range, header included.
    pub fn used_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns in the used range.
    pub fn used_columns(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn get(&self, row: usize, column: usize) -> &CellValue {
        const EMPTY: &CellValue = &CellValue::Empty;
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .unwrap_or(EMPTY)
    }

    pub fn set(&mut self, row: usize, column: usize, value: impl Into<CellValue>) {
        let value = value.into();
        if value == CellValue::Empty && row >= self.used_rows() {
            return;
        }
        self.ensure(row + 1, column + 1);
        self.rows[row][column] = value;
    }

    /// Writes a rectangular block whose top-left corner is `(row, column)`.
    pub fn set_block(&mut self, row: usize, column: usize, block: Vec<Vec<CellValue>>) {
        let width = block.iter().map(Vec::len).max().unwrap_or(0);
        if block.is_empty() || width == 0 {
            return;
        }
        self.ensure(row + block.len(), column + width);
        for (r, cells) in block.into_iter().enumerate() {
            for (c, cell) in cells.into_iter().enumerate() {
                self.rows[row + r][column + c] = cell;
            }
        }
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    fn ensure(&mut self, rows: usize, columns: usize) {
        let columns = columns.max(self.used_columns());
        if self.rows.len() < rows {
            self.rows.resize_with(rows, Vec::new);
        }
        for r in &mut self.rows {
            if r.len() < columns {
                r.resize(columns, CellValue::Empty);
            }
        }
    }

    fn normalize(&mut self) {
        let width = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        for r in &mut self.rows {
            r.resize(width, CellValue::Empty);
        }
    }
}
