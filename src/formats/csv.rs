//! CSV spreadsheet backend.
//!
//! Every record is one grid row, header included; the CSV layer does no header
//! handling of its own. Empty fields become [`CellValue::Empty`], everything else text.

use std::io::{BufRead, Write};

use crate::{cell::CellValue, error::Error, grid::Grid, traits::Parser};

impl Parser for Grid {
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            rows.push(record.iter().map(CellValue::from).collect());
        }
        Ok(Grid::from_rows(rows))
    }

    fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error> {
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        for row in self.rows() {
            wtr.write_record(row.iter().map(CellValue::as_text))?;
        }
        wtr.flush()?;
        Ok(())
    }
}
