//! ワークブック → JSON 変換の統合テスト
//!
//! rust_xlsxwriterで実際のxlsxを作り、calamine経由で変換する。

use rust_xlsxwriter::{ExcelDateTime, Format, Workbook as XlsxWorkbook};
use sheet2json::common::{SheetDecision, TransformOptions};
use sheet2json::converter;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

type SheetRows<'a> = (&'a str, Vec<Vec<&'a str>>);

/// 文字列セルだけのワークブックを作る（空文字のセルは書かない）
fn write_workbook(path: &Path, sheets: &[SheetRows]) {
    let mut workbook = XlsxWorkbook::new();
    for (name, rows) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(*name).unwrap();
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                if !value.is_empty() {
                    worksheet.write_string(r as u32, c as u16, *value).unwrap();
                }
            }
        }
    }
    workbook.save(path).unwrap();
}

fn settings_sheet() -> SheetRows<'static> {
    (
        "Einstellungen",
        vec![vec!["", "Name", "Age"], vec!["Person", "full_name", "years"]],
    )
}

fn sample_workbook(dir: &Path) -> PathBuf {
    let path = dir.join("Mappe1.xlsx");
    write_workbook(
        &path,
        &[
            settings_sheet(),
            (
                "Kunden",
                vec![vec![], vec!["", "Name", "Age"], vec!["Person", "Alice", "30"]],
            ),
            (
                "Vorlage",
                vec![vec![], vec!["", "Name", "Age"], vec!["Person", "Muster", "0"]],
            ),
            (
                "Archiv",
                vec![vec!["", "x"], vec!["", "Name", "Age"], vec!["Person", "Alt", "99"]],
            ),
        ],
    );
    path
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).expect("JSONファイルの読み込みに失敗")
}

#[test]
fn test_convert_sample_workbook() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = sample_workbook(dir.path());
    let output = dir.path().join("out").join("tests");

    let summary =
        converter::convert_workbook(&input, &output, TransformOptions::default(), false).unwrap();

    assert!(summary.is_success());
    assert_eq!(summary.report.written, vec![output.join("Kunden.json")]);
    assert_eq!(
        read(&output.join("Kunden.json")),
        r#"[{"full_name":"Alice","years":"30"}]"#
    );
}

#[test]
fn test_skipped_sheets_produce_no_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = sample_workbook(dir.path());
    let output = dir.path().join("out");

    converter::convert_workbook(&input, &output, TransformOptions::default(), false).unwrap();

    assert!(!output.join("Archiv.json").exists());
    assert!(!output.join("Vorlage.json").exists());
    assert!(!output.join("Einstellungen.json").exists());
}

#[test]
fn test_empty_category_row_is_dropped() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("kategorie.xlsx");
    write_workbook(
        &input,
        &[
            settings_sheet(),
            (
                "Kunden",
                vec![
                    vec![],
                    vec!["", "Name", "Age"],
                    vec!["Person", "Alice", "30"],
                    vec!["", "Bob", "41"],
                    vec!["Unbekannt", "Carol", "52"],
                    vec!["Person", "Dave", ""],
                ],
            ),
        ],
    );
    let output = dir.path().join("out");

    converter::convert_workbook(&input, &output, TransformOptions::default(), false).unwrap();

    assert_eq!(
        read(&output.join("Kunden.json")),
        r#"[{"full_name":"Alice","years":"30"},{"full_name":"Dave","years":""}]"#
    );
}

#[test]
fn test_numeric_and_date_cells_become_strings() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("typen.xlsx");

    let mut workbook = XlsxWorkbook::new();
    {
        let settings = workbook.add_worksheet();
        settings.set_name("Einstellungen").unwrap();
        settings.write_string(0, 1, "Age").unwrap();
        settings.write_string(0, 2, "Since").unwrap();
        settings.write_string(0, 3, "Rate").unwrap();
        settings.write_string(1, 0, "Person").unwrap();
        settings.write_string(1, 1, "years").unwrap();
        settings.write_string(1, 2, "since").unwrap();
        settings.write_string(1, 3, "rate").unwrap();
    }
    {
        let data = workbook.add_worksheet();
        data.set_name("Zahlen").unwrap();
        data.write_string(1, 1, "Age").unwrap();
        data.write_string(1, 2, "Since").unwrap();
        data.write_string(1, 3, "Rate").unwrap();
        data.write_string(2, 0, "Person").unwrap();
        data.write_number(2, 1, 30.0).unwrap();
        let date = ExcelDateTime::from_ymd(2024, 1, 31).unwrap();
        let date_format = Format::new().set_num_format("yyyy-mm-dd");
        data.write_datetime_with_format(2, 2, &date, &date_format).unwrap();
        data.write_number(2, 3, 2.5).unwrap();
    }
    workbook.save(&input).unwrap();

    let output = dir.path().join("out");
    converter::convert_workbook(&input, &output, TransformOptions::default(), false).unwrap();

    assert_eq!(
        read(&output.join("Zahlen.json")),
        r#"[{"years":"30","since":"2024-01-31","rate":"2.5"}]"#
    );
}

#[test]
fn test_conversion_is_idempotent() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = sample_workbook(dir.path());
    let first = dir.path().join("first");
    let second = dir.path().join("second");

    converter::convert_workbook(&input, &first, TransformOptions::default(), true).unwrap();
    converter::convert_workbook(&input, &second, TransformOptions::default(), true).unwrap();

    let a = std::fs::read(first.join("Kunden.json")).unwrap();
    let b = std::fs::read(second.join("Kunden.json")).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_custom_settings_sheet_and_exclusions() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("custom.xlsx");
    write_workbook(
        &input,
        &[
            (
                "Mapping",
                vec![vec!["", "Name"], vec!["Person", "full_name"]],
            ),
            ("Kunden", vec![vec![], vec!["", "Name"], vec!["Person", "Alice"]]),
            ("Intern", vec![vec![], vec!["", "Name"], vec!["Person", "Geheim"]]),
        ],
    );
    let output = dir.path().join("out");

    let options = TransformOptions::new("Mapping", ["Intern"]);
    let summary = converter::convert_workbook(&input, &output, options, false).unwrap();

    assert_eq!(summary.outcome.sheets.len(), 1);
    assert_eq!(read(&output.join("Kunden.json")), r#"[{"full_name":"Alice"}]"#);
    assert!(!output.join("Intern.json").exists());
}

#[test]
fn test_load_mappings() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = sample_workbook(dir.path());

    let mapping = converter::load_mappings(&input, TransformOptions::default()).unwrap();
    assert_eq!(
        serde_json::to_string(&mapping).unwrap(),
        r#"{"Person":{"Name":"full_name","Age":"years"}}"#
    );
}

#[test]
fn test_survey_workbook() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = sample_workbook(dir.path());

    let statuses = converter::survey_workbook(&input, TransformOptions::default()).unwrap();
    let decisions: Vec<_> = statuses.iter().map(|s| (s.name.as_str(), &s.decision)).collect();

    assert_eq!(
        decisions,
        vec![
            ("Einstellungen", &SheetDecision::Settings),
            ("Kunden", &SheetDecision::Eligible),
            ("Vorlage", &SheetDecision::Excluded),
            ("Archiv", &SheetDecision::SkipMarker("x".into())),
        ]
    );
}
