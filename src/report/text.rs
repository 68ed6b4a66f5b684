use std::fmt::Write as _;

use crate::error::{Result, TableError};
use crate::pipeline::TableViews;
use crate::table::{DifficultyRecord, FilterBounds, RecordField};

/// Column-aligned table for terminal output.
pub fn render_text_table(
    records: &[DifficultyRecord],
    title: &str,
    show_filter_description: bool,
    bounds: &FilterBounds,
) -> Result<String> {
    if records.is_empty() {
        return Err(TableError::EmptyTable);
    }

    let headers: Vec<&str> = RecordField::COLUMNS.iter().map(|f| f.header()).collect();
    let rows: Vec<Vec<String>> = records.iter().map(DifficultyRecord::cells).collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "=".repeat(title.chars().count()));
    if show_filter_description {
        let _ = writeln!(out, "{}\n", bounds.summary());
    }

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    push_row(&mut out, &header_cells, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &rule, &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    Ok(out)
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    let _ = writeln!(out, "{}", line.join("  ").trim_end());
}

pub fn render_text_views(views: &TableViews) -> Result<String> {
    let mut out = String::new();
    for view in views.all() {
        out.push_str(&render_text_table(
            &view.records,
            &view.title,
            view.show_filter_description,
            &views.bounds,
        )?);
        out.push('\n');
    }
    Ok(out)
}
