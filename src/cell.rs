//! Spreadsheet cell values at the adapter boundary.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A single spreadsheet cell.
///
/// Backends map their native cell types onto these three cases; numbers and dates are
/// carried as their text form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum CellValue {
    Text(String),
    Bool(bool),
    #[default]
    Empty,
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    /// Text form of the cell: booleans print as `true`/`false`, empty cells as `""`.
    pub fn as_text(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Empty => String::new(),
        }
    }

    /// `true` for empty cells and whitespace-only text.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Text(s) => s.trim().is_empty(),
            CellValue::Bool(_) => false,
            CellValue::Empty => true,
        }
    }

    /// Reads the cell as a `translatable` flag.
    ///
    /// Blank cells default to `true`, like an absent `translatable` attribute. Text is
    /// `true` only when it reads `true` ignoring case; anything else is `false`.
    pub fn parse_bool(&self) -> bool {
        match self {
            CellValue::Bool(b) => *b,
            CellValue::Text(s) if s.trim().is_empty() => true,
            CellValue::Text(s) => s.trim().eq_ignore_ascii_case("true"),
            CellValue::Empty => true,
        }
    }
}

impl Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(value.to_string())
        }
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        if value.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(value)
        }
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}
