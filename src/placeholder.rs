//! Placeholder consistency checks between the default table and its translations.
//!
//! Two marker families are counted as literal substrings:
//! - formatters (`%s`): a translation must keep the default value's count, except that
//!   a default without any formatter accepts translations that add some (configurable);
//! - custom paired markers (`[$click]`): counts must always match, and the default value
//!   itself must hold an even number of them (open and close).

use serde::{Deserialize, Serialize};

use crate::types::StringTable;

/// Number of non-overlapping literal occurrences of `marker` in `value`.
///
/// Occurrences at the very start or end of `value` count. An empty marker counts zero.
pub fn count_matches(value: &str, marker: &str) -> usize {
    if marker.is_empty() {
        return 0;
    }
    value.matches(marker).count()
}

/// Marker families and the dataset-specific formatter exemption.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlaceholderRules {
    /// Positional formatter markers, e.g. `%s`.
    pub formatters: Vec<String>,

    /// Markers that open and close a span, e.g. `[$click]`.
    pub custom_markers: Vec<String>,

    /// Accept translations that add formatters when the default value has none.
    pub exempt_zero_formatters: bool,
}

impl Default for PlaceholderRules {
    fn default() -> Self {
        Self {
            formatters: vec!["%s".to_string()],
            custom_markers: vec!["[$click]".to_string()],
            exempt_zero_formatters: true,
        }
    }
}

impl PlaceholderRules {
    pub fn formatter_count(&self, value: &str) -> usize {
        self.formatters.iter().map(|m| count_matches(value, m)).sum()
    }

    pub fn custom_marker_count(&self, value: &str) -> usize {
        self.custom_markers
            .iter()
            .map(|m| count_matches(value, m))
            .sum()
    }

    fn formatter_label(&self) -> String {
        self.formatters.join(", ")
    }

    fn custom_marker_label(&self) -> String {
        self.custom_markers.join(", ")
    }
}

/// A recoverable finding. Only mismatches count towards a language's error tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A translated key that the default table does not have.
    MissingKey { key: String, language: String },

    FormatterMismatch {
        key: String,
        language: String,
        markers: String,
        expected: usize,
        actual: usize,
        original: String,
        translated: String,
    },

    CustomMarkerMismatch {
        key: String,
        language: String,
        markers: String,
        expected: usize,
        actual: usize,
        original: String,
        translated: String,
    },

    /// Default value with an odd number of custom markers.
    UnpairedMarker {
        key: String,
        language: String,
        count: usize,
        value: String,
    },

    /// Spreadsheet row with a value but no key.
    BlankKey { row: usize, language: String },

    /// Imported key with no row in the spreadsheet.
    NoDefaultValue { key: String, language: String },
}

impl Diagnostic {
    pub fn language(&self) -> &str {
        match self {
            Diagnostic::MissingKey { language, .. }
            | Diagnostic::FormatterMismatch { language, .. }
            | Diagnostic::CustomMarkerMismatch { language, .. }
            | Diagnostic::UnpairedMarker { language, .. }
            | Diagnostic::BlankKey { language, .. }
            | Diagnostic::NoDefaultValue { language, .. } => language,
        }
    }

    /// Whether this finding is tallied against its language.
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Diagnostic::FormatterMismatch { .. } | Diagnostic::CustomMarkerMismatch { .. }
        )
    }
}

/// Per-run validation outcome, returned by the checks instead of living in globals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Error count per validated language, in validation order.
    pub errors: Vec<(String, usize)>,

    pub diagnostics: Vec<Diagnostic>,

    /// Language of the last recorded diagnostic; drives header grouping when printing.
    #[serde(skip)]
    last_language: Option<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_errors(&self) -> usize {
        self.errors.iter().map(|(_, count)| count).sum()
    }

    pub fn errors_for(&self, language: &str) -> usize {
        self.errors
            .iter()
            .find(|(lang, _)| lang == language)
            .map_or(0, |(_, count)| *count)
    }

    /// Makes sure `language` shows up in the tally, even with zero errors.
    pub fn register_language(&mut self, language: &str) {
        if !self.errors.iter().any(|(lang, _)| lang == language) {
            self.errors.push((language.to_string(), 0));
        }
    }

    /// Records a diagnostic and bumps the tally for errors.
    ///
    /// Returns `true` when this is the first diagnostic of a new language group.
    pub fn record(&mut self, diagnostic: Diagnostic) -> bool {
        let language = diagnostic.language().to_string();
        if diagnostic.is_error() {
            self.register_language(&language);
            if let Some((_, count)) = self.errors.iter_mut().find(|(lang, _)| *lang == language) {
                *count += 1;
            }
        }
        let new_group = self.last_language.as_deref() != Some(language.as_str());
        if new_group {
            self.last_language = Some(language);
        }
        self.diagnostics.push(diagnostic);
        new_group
    }

    /// Diagnostics split into runs of the same language, in recording order.
    pub fn grouped(&self) -> Vec<(&str, Vec<&Diagnostic>)> {
        let mut groups: Vec<(&str, Vec<&Diagnostic>)> = Vec::new();
        for diagnostic in &self.diagnostics {
            match groups.last_mut() {
                Some((lang, items)) if *lang == diagnostic.language() => items.push(diagnostic),
                _ => groups.push((diagnostic.language(), vec![diagnostic])),
            }
        }
        groups
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| !d.is_error())
    }
}

/// Runs the placeholder checks with one set of rules.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    rules: PlaceholderRules,
}

impl Validator {
    pub fn new(rules: PlaceholderRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &PlaceholderRules {
        &self.rules
    }

    /// Flags default entries whose custom markers are not paired. Tallies are untouched.
    pub fn validate_default(&self, default: &StringTable, report: &mut ValidationReport) {
        for entry in default {
            let count = self.rules.custom_marker_count(&entry.value);
            if count % 2 != 0 {
                report.record(Diagnostic::UnpairedMarker {
                    key: entry.key.clone(),
                    language: default.language.clone(),
                    count,
                    value: entry.value.clone(),
                });
            }
        }
    }

    /// Compares every entry of `translated` against the same key in `default`.
    pub fn validate_translation(
        &self,
        default: &StringTable,
        translated: &StringTable,
        report: &mut ValidationReport,
    ) {
        let language = translated.language.as_str();
        report.register_language(language);

        for entry in translated {
            let Some(original) = default.find_entry(&entry.key) else {
                report.record(Diagnostic::MissingKey {
                    key: entry.key.clone(),
                    language: language.to_string(),
                });
                continue;
            };

            let expected = self.rules.formatter_count(&original.value);
            let actual = self.rules.formatter_count(&entry.value);
            let exempt = expected == 0 && self.rules.exempt_zero_formatters;
            if expected != actual && !exempt {
                report.record(Diagnostic::FormatterMismatch {
                    key: entry.key.clone(),
                    language: language.to_string(),
                    markers: self.rules.formatter_label(),
                    expected,
                    actual,
                    original: original.value.clone(),
                    translated: entry.value.clone(),
                });
            }

            let expected = self.rules.custom_marker_count(&original.value);
            let actual = self.rules.custom_marker_count(&entry.value);
            if expected != actual {
                report.record(Diagnostic::CustomMarkerMismatch {
                    key: entry.key.clone(),
                    language: language.to_string(),
                    markers: self.rules.custom_marker_label(),
                    expected,
                    actual,
                    original: original.value.clone(),
                    translated: entry.value.clone(),
                });
            }
        }
    }
}
