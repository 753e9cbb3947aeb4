//! Excel workbook backend.
//!
//! Reading goes through `calamine` (`.xlsx`, `.xlsm`, `.xls`, `.ods`), writing through
//! `rust_xlsxwriter` (`.xlsx`). Only the first worksheet is used in both directions.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use rust_xlsxwriter::Workbook;

use crate::{cell::CellValue, error::Error, grid::Grid};

/// Reads the first worksheet into a grid, keeping absolute cell positions.
pub fn read_grid<P: AsRef<Path>>(path: P) -> Result<Grid, Error> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| Error::Spreadsheet("workbook has no worksheets".to_string()))??;

    let mut grid = Grid::new();
    let Some((first_row, first_col)) = range.start() else {
        return Ok(grid);
    };
    for (r, row) in range.rows().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            let value = cell_value(cell);
            if value != CellValue::Empty {
                grid.set(first_row as usize + r, first_col as usize + c, value);
            }
        }
    }
    Ok(grid)
}

/// Writes the grid as the only worksheet of a new workbook, replacing `path`.
pub fn write_grid<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<(), Error> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (r, row) in grid.rows().iter().enumerate() {
        let r = u32::try_from(r)
            .map_err(|_| Error::DataMismatch(format!("row {} exceeds the sheet size", r)))?;
        for (c, cell) in row.iter().enumerate() {
            let c = u16::try_from(c)
                .map_err(|_| Error::DataMismatch(format!("column {} exceeds the sheet size", c)))?;
            match cell {
                CellValue::Text(s) => {
                    worksheet.write_string(r, c, s)?;
                }
                CellValue::Bool(b) => {
                    worksheet.write_boolean(r, c, *b)?;
                }
                CellValue::Empty => {}
            }
        }
    }

    workbook.save(path.as_ref())?;
    Ok(())
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) if s.is_empty() => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Int(n) => CellValue::Text(n.to_string()),
        // Integral floats print without a fraction, as spreadsheets display them.
        Data::Float(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
            CellValue::Text(format!("{}", *n as i64))
        }
        Data::Float(n) => CellValue::Text(n.to_string()),
        Data::DateTime(dt) => CellValue::Text(dt.as_f64().to_string()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Text(format!("#{:?}", e)),
    }
}
