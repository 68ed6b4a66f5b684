use std::fs;

use slider_table::pipeline::{run_pipeline, PipelineOptions};
use slider_table::report::{
    csv_string, export_csv, render_html_document, render_html_table, render_text_table,
    write_csv,
};
use slider_table::table::{generate_default_table, DifficultyRecord, FilterBounds};
use slider_table::TableError;

fn baseline_adept() -> DifficultyRecord {
    generate_default_table()
        .expect("default table should generate")
        .into_iter()
        .find(|r| r.is_baseline() && r.taken == 1.0)
        .expect("baseline adept should exist")
}

#[test]
fn csv_of_one_record_is_header_plus_row() {
    let csv = csv_string(&[baseline_adept()]).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(
        lines,
        [
            "Slider Mod Version,More Damage Mod Version,Difficulty,Damage Taken,Damage Dealt,Relative Strength",
            "Vanilla,Vanilla,Adept,100%,100%,100%",
        ]
    );
    assert!(csv.ends_with('\n'));
    assert!(!csv.contains('\r'));
}

#[test]
fn csv_rows_follow_input_order_with_percentages() {
    let views = run_pipeline(&PipelineOptions::default()).unwrap();
    let csv = csv_string(&views.primary().records).unwrap();

    assert_eq!(csv.lines().count(), views.primary().records.len() + 1);
    let first_row = csv.lines().nth(1).unwrap();
    assert_eq!(first_row, "Vanilla,Vanilla,Novice,17%,600%,3593%");
}

#[test]
fn empty_input_is_rejected_everywhere() {
    let bounds = FilterBounds::default();
    assert!(matches!(csv_string(&[]), Err(TableError::EmptyTable)));
    assert!(matches!(
        write_csv(&[], Vec::new()),
        Err(TableError::EmptyTable)
    ));
    assert!(matches!(
        render_html_table(&[], "Empty", false, &bounds),
        Err(TableError::EmptyTable)
    ));
    assert!(matches!(
        render_text_table(&[], "Empty", false, &bounds),
        Err(TableError::EmptyTable)
    ));
}

#[test]
fn export_writes_csv_file_and_creates_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("table.csv");

    export_csv(&[baseline_adept()], &path).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written.lines().count(), 2);
    assert!(written.contains("Vanilla,Vanilla,Adept,100%,100%,100%"));
}

#[test]
fn export_of_empty_sequence_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");

    assert!(export_csv(&[], &path).is_err());
    assert!(!path.exists());
}

#[test]
fn html_table_has_headers_cells_and_optional_summary() {
    let bounds = FilterBounds::default();
    let records = [baseline_adept()];

    let with_summary = render_html_table(&records, "Baseline <only>", true, &bounds).unwrap();
    assert!(with_summary.contains("<h2>Baseline &lt;only&gt;</h2>"));
    assert!(with_summary.contains("white-space: pre-line"));
    assert!(with_summary.contains("Deal no more than 300% damage"));
    assert!(with_summary.contains("<th>More Damage Mod Version</th>"));
    assert!(with_summary.contains(
        "<tr><td>Vanilla</td><td>Vanilla</td><td>Adept</td><td>100%</td><td>100%</td><td>100%</td></tr>"
    ));

    let without_summary = render_html_table(&records, "Baseline", false, &bounds).unwrap();
    assert!(!without_summary.contains("<p"));
}

#[test]
fn html_document_contains_every_view_once() {
    let views = run_pipeline(&PipelineOptions::default()).unwrap();
    let html = render_html_document(&views).unwrap();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert_eq!(html.matches("<table>").count(), 3);
    assert_eq!(html.matches("This table filters out").count(), 1);
    for view in views.all() {
        assert!(html.contains(&format!("<h2>{}</h2>", view.title)));
    }
}

#[test]
fn text_table_aligns_columns() {
    let records = generate_default_table().unwrap();
    let text = render_text_table(&records[..5], "Vanilla", false, &FilterBounds::default())
        .unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "Vanilla");
    assert_eq!(lines[1], "=======");
    assert!(lines[2].starts_with("Slider Mod Version  More Damage Mod Version"));
    assert_eq!(lines.len(), 2 + 2 + 5);
    let dealt_column = lines[2].find("Damage Dealt").unwrap();
    assert_eq!(&lines[4][dealt_column..dealt_column + 4], "600%");
}
