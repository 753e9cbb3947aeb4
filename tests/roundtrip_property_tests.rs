use langsheet::formats::android_strings::{STRINGS_FILE_NAME, read_table, write_table};
use langsheet::{
    CellValue, DuplicateKeyPolicy, ExportOptions, Grid, ImportOptions, StringEntry, StringTable,
    count_matches, export, import,
};
use proptest::prelude::*;
use std::collections::BTreeMap;
use std::fs;

fn key_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_]{0,15}").expect("valid key regex")
}

fn value_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 _<>&\"'%\\-\\.,!\\?\\[\\]\\$]{0,30}[A-Za-z0-9]")
        .expect("valid value regex")
}

fn dataset_strategy() -> impl Strategy<Value = BTreeMap<String, (String, bool)>> {
    prop::collection::btree_map(key_strategy(), (value_strategy(), any::<bool>()), 1..8)
}

fn build_table(language: &str, values: &BTreeMap<String, (String, bool)>) -> StringTable {
    StringTable::from_entries(
        language,
        values
            .iter()
            .map(|(key, (value, translatable))| StringEntry::new(key, value, *translatable)),
        DuplicateKeyPolicy::Reject,
    )
    .expect("keys are unique")
}

fn header(languages: &[&str]) -> Vec<CellValue> {
    ["name", "translatable"]
        .iter()
        .chain(languages.iter())
        .map(|c| CellValue::text(*c))
        .collect()
}

proptest! {
    #[test]
    fn prop_count_matches_literal(parts in prop::collection::vec("[a-z %]{0,6}", 0..6)) {
        // Joining with the marker puts one occurrence between every pair of parts.
        let value = parts.join("%s");
        let inside: usize = parts.iter().map(|p| p.matches("%s").count()).sum();
        let expected = parts.len().saturating_sub(1) + inside;
        prop_assert_eq!(count_matches(&value, "%s"), expected);
    }

    #[test]
    fn prop_count_matches_at_edges(inner in "[a-z ]{0,10}") {
        prop_assert_eq!(count_matches(&format!("%s{}%s", inner), "%s"), 2);
    }

    #[test]
    fn prop_resource_file_round_trip(values in dataset_strategy()) {
        let dir = tempfile::tempdir().unwrap();
        let table = build_table("values-de", &values);
        let path = write_table(&table, dir.path(), STRINGS_FILE_NAME).unwrap();
        let back = read_table(&path, "values-de", DuplicateKeyPolicy::Reject).unwrap();
        prop_assert_eq!(back, table);
    }

    #[test]
    fn prop_export_import_round_trip(values in dataset_strategy()) {
        let dir = tempfile::tempdir().unwrap();
        let res = dir.path().join("res");

        let mut rows = vec![header(&["values", "values-de"])];
        for (key, (value, translatable)) in &values {
            rows.push(vec![
                CellValue::text(key.as_str()),
                CellValue::Bool(*translatable),
                CellValue::text(value.as_str()),
                CellValue::text(format!("{} (de)", value)),
            ]);
        }
        let grid = Grid::from_rows(rows);
        let options = ExportOptions { output_root: res.clone(), ..ExportOptions::default() };
        let exported = export(&grid, &options).unwrap();

        let imported = import(&ImportOptions { res_dir: res, ..ImportOptions::default() }).unwrap();
        let again = export(
            &imported.grid,
            &ExportOptions { output_root: dir.path().join("again"), ..ExportOptions::default() },
        )
        .unwrap();
        prop_assert_eq!(exported.tables, again.tables);
        prop_assert!(imported.warnings.is_empty());
    }
}

#[test]
fn test_export_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let grid = Grid::from_rows(vec![
        header(&["values", "values-de", "values-fr"]),
        vec![
            CellValue::text("greeting"),
            CellValue::text("true"),
            CellValue::text("Hello %s & welcome"),
            CellValue::text("Hallo %s"),
            CellValue::Empty,
        ],
        vec![
            CellValue::text("app_name"),
            CellValue::text("false"),
            CellValue::text("Demo"),
            CellValue::Empty,
            CellValue::Empty,
        ],
    ]);
    let options = ExportOptions {
        output_root: dir.path().to_path_buf(),
        ..ExportOptions::default()
    };

    let first = export(&grid, &options).unwrap();
    let first_bytes: Vec<Vec<u8>> = first.written.iter().map(|p| fs::read(p).unwrap()).collect();
    let second = export(&grid, &options).unwrap();
    let second_bytes: Vec<Vec<u8>> = second.written.iter().map(|p| fs::read(p).unwrap()).collect();

    assert_eq!(first.written, second.written);
    assert_eq!(first_bytes, second_bytes);
    // A language with no translated cells still gets a (empty) file.
    let fr = fs::read_to_string(dir.path().join("values-fr").join("strings.xml")).unwrap();
    assert!(fr.contains("<resources>"));
    assert!(!fr.contains("<string "));
}

#[test]
fn test_export_replaces_previous_files() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("values");
    fs::create_dir_all(&target).unwrap();
    fs::write(
        target.join("strings.xml"),
        r#"<resources><string name="stale">Old</string></resources>"#,
    )
    .unwrap();

    let grid = Grid::from_rows(vec![
        header(&["values"]),
        vec![
            CellValue::text("fresh"),
            CellValue::text("true"),
            CellValue::text("New"),
        ],
    ]);
    export(
        &grid,
        &ExportOptions {
            output_root: dir.path().to_path_buf(),
            ..ExportOptions::default()
        },
    )
    .unwrap();

    let content = fs::read_to_string(target.join("strings.xml")).unwrap();
    assert!(content.contains("fresh"));
    assert!(!content.contains("stale"));
}
