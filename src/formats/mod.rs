pub mod android_strings;
pub mod csv;
pub mod xlsx;

use std::path::Path;

use crate::{error::Error, grid::Grid, traits::Parser};

// Reexporting the formats for easier access
pub use android_strings::Format as AndroidStringsFormat;

/// Spreadsheet file kinds, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    /// Excel or OpenDocument workbook.
    Workbook,
    Csv,
}

impl SheetFormat {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let extension = path
            .as_ref()
            .extension()
            .and_then(|s| s.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("xlsx" | "xlsm" | "xls" | "ods") => Ok(SheetFormat::Workbook),
            Some("csv") => Ok(SheetFormat::Csv),
            extension => Err(Error::UnsupportedFormat(format!(
                "Unsupported spreadsheet extension: {:?}.",
                extension
            ))),
        }
    }
}

/// Opens a spreadsheet and returns the first sheet as a grid.
pub fn read_grid<P: AsRef<Path>>(path: P) -> Result<Grid, Error> {
    match SheetFormat::from_path(&path)? {
        SheetFormat::Workbook => xlsx::read_grid(path),
        SheetFormat::Csv => Grid::read_from(path),
    }
}

/// Saves a grid, replacing whatever was at `path`. Workbooks are written as `.xlsx`.
pub fn write_grid<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<(), Error> {
    match SheetFormat::from_path(&path)? {
        SheetFormat::Workbook => {
            let is_xlsx = path
                .as_ref()
                .extension()
                .is_some_and(|e| e.eq_ignore_ascii_case("xlsx"));
            if !is_xlsx {
                return Err(Error::UnsupportedFormat(format!(
                    "Only .xlsx workbooks can be written: {}",
                    path.as_ref().display()
                )));
            }
            xlsx::write_grid(grid, path)
        }
        SheetFormat::Csv => grid.write_to(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_format_from_path() {
        assert_eq!(
            SheetFormat::from_path("strings.xlsx").unwrap(),
            SheetFormat::Workbook
        );
        assert_eq!(
            SheetFormat::from_path("Strings.XLSX").unwrap(),
            SheetFormat::Workbook
        );
        assert_eq!(SheetFormat::from_path("a/b.csv").unwrap(), SheetFormat::Csv);
        assert!(matches!(
            SheetFormat::from_path("strings.txt"),
            Err(Error::UnsupportedFormat(_))
        ));
        assert!(SheetFormat::from_path("strings").is_err());
    }

    #[test]
    fn test_write_grid_rejects_legacy_workbooks() {
        let dir = tempfile::tempdir().unwrap();
        let result = write_grid(&Grid::new(), dir.path().join("strings.xls"));
        assert!(matches!(result, Err(Error::UnsupportedFormat(_))));
    }

    #[test]
    fn test_csv_dispatch_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("strings.csv");
        let mut grid = Grid::new();
        grid.set(0, 0, "name");
        grid.set(1, 2, "value");
        write_grid(&grid, &path).unwrap();
        assert_eq!(read_grid(&path).unwrap(), grid);
    }
}
