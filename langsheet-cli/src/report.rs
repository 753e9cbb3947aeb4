//! Console rendering of run results.
//!
//! Kept out of the library so that it stays free of printing side effects.

use colored::Colorize;
use langsheet::{Diagnostic, ExportSummary, ImportSummary, ValidationReport};
use serde::Serialize;

/// Renders one finding as printed under its language header.
pub fn render_diagnostic(diagnostic: &Diagnostic) -> String {
    match diagnostic {
        Diagnostic::MissingKey { key, language } => format!(
            "{} String with key {} ({}) was not found in original strings list",
            "Warning:".yellow(),
            key,
            language
        ),
        Diagnostic::FormatterMismatch {
            key,
            language,
            markers,
            expected,
            actual,
            original,
            translated,
        } => format!(
            "{} String with key {} ({}) has wrong count of formatters ({}). Original count: {}, Actual count: {}. \nOriginal string: {}. \nTranslated string: {}\n",
            "Error!".red().bold(),
            key,
            language,
            markers,
            expected,
            actual,
            original,
            translated
        ),
        Diagnostic::CustomMarkerMismatch {
            key,
            language,
            markers,
            expected,
            actual,
            original,
            translated,
        } => format!(
            "{} String with key {} ({}) has wrong count of custom formatters ({}). Original count: {}, Actual count: {}. \nOriginal string: {}. \nTranslated string: {}\n",
            "Error!".red().bold(),
            key,
            language,
            markers,
            expected,
            actual,
            original,
            translated
        ),
        Diagnostic::UnpairedMarker {
            key,
            language,
            count,
            value,
        } => format!(
            "{} String from original file {} ({}) has wrong count of custom formatters ({}). It has to have opening tag and closable tag. {}",
            "Error!".red().bold(),
            key,
            language,
            count,
            value
        ),
        Diagnostic::BlankKey { row, language } => format!(
            "{} Row {} ({}) has a value but no key, skipped",
            "Warning:".yellow(),
            row,
            language
        ),
        Diagnostic::NoDefaultValue { key, language } => format!(
            "{} No default value found for key {} for language {}",
            "Warning:".yellow(),
            key,
            language
        ),
    }
}

/// `{values-de=1, values-fr=0}`, in validation order.
pub fn render_breakdown(report: &ValidationReport) -> String {
    let parts: Vec<String> = report
        .errors
        .iter()
        .map(|(language, count)| format!("{}={}", language, count))
        .collect();
    format!("{{{}}}", parts.join(", "))
}

/// Prints diagnostics grouped under a header line per language.
pub fn print_diagnostics(report: &ValidationReport) {
    for (language, diagnostics) in report.grouped() {
        println!();
        println!("{}", language.bold());
        for diagnostic in diagnostics {
            println!("{}", render_diagnostic(diagnostic));
        }
    }
}

pub fn print_summary(report: &ValidationReport) {
    let total = report.total_errors();
    let label = format!("Total errors: {}", total);
    if total == 0 {
        println!("{}", label.green());
    } else {
        println!("{}", label.red());
    }
    println!("Errors by language: {}", render_breakdown(report));
}

#[derive(Serialize)]
struct JsonSummary<'a> {
    total_errors: usize,
    errors_by_language: &'a [(String, usize)],
    diagnostics: &'a [Diagnostic],
    written: Vec<String>,
}

pub fn print_export_json(summary: &ExportSummary) -> Result<(), serde_json::Error> {
    let body = JsonSummary {
        total_errors: summary.report.total_errors(),
        errors_by_language: &summary.report.errors,
        diagnostics: &summary.report.diagnostics,
        written: summary
            .written
            .iter()
            .map(|p| p.display().to_string())
            .collect(),
    };
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}

pub fn print_export(summary: &ExportSummary) {
    print_diagnostics(&summary.report);
    print_summary(&summary.report);
}

pub fn print_import(summary: &ImportSummary) {
    for stats in &summary.stats {
        println!("{}", stats);
    }
    for warning in &summary.warnings {
        println!("{}", render_diagnostic(warning));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_breakdown() {
        colored::control::set_override(false);
        let mut report = ValidationReport::new();
        report.register_language("values-de");
        report.register_language("values-fr");
        report.record(Diagnostic::FormatterMismatch {
            key: "k".to_string(),
            language: "values-fr".to_string(),
            markers: "%s".to_string(),
            expected: 1,
            actual: 0,
            original: "%s".to_string(),
            translated: "".to_string(),
        });
        assert_eq!(render_breakdown(&report), "{values-de=0, values-fr=1}");
        assert_eq!(render_breakdown(&ValidationReport::new()), "{}");
    }

    #[test]
    fn test_render_missing_key() {
        colored::control::set_override(false);
        let text = render_diagnostic(&Diagnostic::MissingKey {
            key: "ghost".to_string(),
            language: "values-de".to_string(),
        });
        assert_eq!(
            text,
            "Warning: String with key ghost (values-de) was not found in original strings list"
        );
    }

    #[test]
    fn test_render_formatter_mismatch() {
        colored::control::set_override(false);
        let text = render_diagnostic(&Diagnostic::FormatterMismatch {
            key: "greeting".to_string(),
            language: "de".to_string(),
            markers: "%s".to_string(),
            expected: 1,
            actual: 0,
            original: "Hello %s".to_string(),
            translated: "Hallo".to_string(),
        });
        assert!(text.starts_with("Error! String with key greeting (de)"));
        assert!(text.contains("Original count: 1, Actual count: 0"));
        assert!(text.contains("Translated string: Hallo"));
    }
}
