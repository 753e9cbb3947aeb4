//! Core, format-agnostic types for langsheet.
//! The spreadsheet and `strings.xml` adapters both decode into these.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Language identifier of the default (source) table.
pub const DEFAULT_LANGUAGE: &str = "values";

/// A single localized string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StringEntry {
    /// Resource name, unique within a table.
    pub key: String,

    /// Text content, possibly carrying placeholders such as `%s`.
    pub value: String,

    /// `false` marks the entry as exempt from translation. It is still emitted.
    #[serde(default = "default_translatable")]
    pub translatable: bool,
}

fn default_translatable() -> bool {
    true
}

impl StringEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>, translatable: bool) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            translatable,
        }
    }
}

impl Display for StringEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "StringEntry {{ key: {}, value: {}, translatable: {} }}",
            self.key, self.value, self.translatable
        )
    }
}

/// What to do when a table receives a key it already holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateKeyPolicy {
    /// The later entry replaces the earlier one's value and flag, keeping the earlier position.
    #[default]
    Overwrite,
    /// Fail with [`Error::DuplicateKey`].
    Reject,
}

/// Ordered strings of one language.
///
/// The language is the resource directory name (`values`, `values-de`) or the
/// spreadsheet column header the table was read from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StringTable {
    pub language: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    entries: Vec<StringEntry>,
}

impl StringTable {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            entries: Vec::new(),
        }
    }

    /// Builds a table from entries, applying `policy` to repeated keys.
    pub fn from_entries<I>(
        language: impl Into<String>,
        entries: I,
        policy: DuplicateKeyPolicy,
    ) -> Result<Self, Error>
    where
        I: IntoIterator<Item = StringEntry>,
    {
        let mut table = Self::new(language);
        for entry in entries {
            table.insert(entry, policy)?;
        }
        Ok(table)
    }

    /// Appends an entry, or resolves a key collision according to `policy`.
    pub fn insert(&mut self, entry: StringEntry, policy: DuplicateKeyPolicy) -> Result<(), Error> {
        match self.entries.iter_mut().find(|e| e.key == entry.key) {
            None => self.entries.push(entry),
            Some(_) if policy == DuplicateKeyPolicy::Reject => {
                return Err(Error::DuplicateKey {
                    key: entry.key,
                    language: self.language.clone(),
                });
            }
            Some(existing) => {
                existing.value = entry.value;
                existing.translatable = entry.translatable;
            }
        }
        Ok(())
    }

    pub fn find_entry(&self, key: &str) -> Option<&StringEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    pub fn entries(&self) -> &[StringEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StringEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_default(&self) -> bool {
        self.language == DEFAULT_LANGUAGE
    }

    pub fn untranslatable_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.translatable).count()
    }

    /// Sum of all value lengths, in characters.
    pub fn total_value_length(&self) -> usize {
        self.entries.iter().map(|e| e.value.chars().count()).sum()
    }
}

impl<'a> IntoIterator for &'a StringTable {
    type Item = &'a StringEntry;
    type IntoIter = std::slice::Iter<'a, StringEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_entry() {
        let table = StringTable::from_entries(
            "values",
            vec![
                StringEntry::new("hello", "Hello", true),
                StringEntry::new("app_name", "Demo", false),
            ],
            DuplicateKeyPolicy::Overwrite,
        )
        .unwrap();
        assert_eq!(table.find_entry("hello").unwrap().value, "Hello");
        assert!(!table.find_entry("app_name").unwrap().translatable);
        assert!(table.find_entry("missing").is_none());
        assert!(table.is_default());
    }

    #[test]
    fn test_duplicate_overwrite_keeps_first_position() {
        let table = StringTable::from_entries(
            "values-de",
            vec![
                StringEntry::new("a", "first", true),
                StringEntry::new("b", "B", true),
                StringEntry::new("a", "second", false),
            ],
            DuplicateKeyPolicy::Overwrite,
        )
        .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.entries()[0], StringEntry::new("a", "second", false));
        assert_eq!(table.entries()[1].key, "b");
    }

    #[test]
    fn test_duplicate_reject() {
        let result = StringTable::from_entries(
            "values-de",
            vec![
                StringEntry::new("a", "first", true),
                StringEntry::new("a", "second", true),
            ],
            DuplicateKeyPolicy::Reject,
        );
        match result {
            Err(Error::DuplicateKey { key, language }) => {
                assert_eq!(key, "a");
                assert_eq!(language, "values-de");
            }
            other => panic!("expected duplicate key error, got {:?}", other),
        }
    }

    #[test]
    fn test_statistics() {
        let table = StringTable::from_entries(
            "values",
            vec![
                StringEntry::new("a", "Grüße", true),
                StringEntry::new("b", "ok", false),
            ],
            DuplicateKeyPolicy::Overwrite,
        )
        .unwrap();
        assert_eq!(table.untranslatable_count(), 1);
        assert_eq!(table.total_value_length(), 7);
    }
}
