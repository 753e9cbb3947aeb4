//! All error types for the langsheet crate.
//!
//! Only fatal problems are errors. Placeholder mismatches, missing keys and other
//! recoverable findings are reported as [`crate::placeholder::Diagnostic`] values instead.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(
        "invalid spreadsheet layout: header column {column} must be `{expected}`, found `{found}`"
    )]
    Layout {
        column: usize,
        expected: &'static str,
        found: String,
    },

    #[error("duplicate key `{key}` in language `{language}`")]
    DuplicateKey { key: String, language: String },

    #[error("XML parse error: {0}")]
    XmlParse(#[from] quick_xml::Error),

    #[error("CSV parse error: {0}")]
    CsvParse(#[from] csv::Error),

    #[error("spreadsheet read error: {0}")]
    Spreadsheet(String),

    #[error("spreadsheet write error: {0}")]
    XlsxWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid data: {0}")]
    DataMismatch(String),

    #[error("invalid resource: {0}")]
    InvalidResource(String),

    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl From<calamine::Error> for Error {
    fn from(value: calamine::Error) -> Self {
        Error::Spreadsheet(value.to_string())
    }
}

impl Error {
    /// Creates a layout error for a header cell that does not match the contract.
    pub fn layout(column: usize, expected: &'static str, found: impl Into<String>) -> Self {
        Error::Layout {
            column,
            expected,
            found: found.into(),
        }
    }
}
