use std::fmt::Write as _;

use crate::error::{Result, TableError};
use crate::pipeline::TableViews;
use crate::table::{DifficultyRecord, FilterBounds, RecordField};

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// One titled `<div>` holding a table of `records`, optionally preceded by the filter description.
pub fn render_html_table(
    records: &[DifficultyRecord],
    title: &str,
    show_filter_description: bool,
    bounds: &FilterBounds,
) -> Result<String> {
    if records.is_empty() {
        return Err(TableError::EmptyTable);
    }

    let mut html = String::new();
    html.push_str("<div>\n");
    let _ = writeln!(html, "<h2>{}</h2>", escape_html(title));
    if show_filter_description {
        let _ = writeln!(
            html,
            "<p style=\"white-space: pre-line\">{}</p>",
            escape_html(&bounds.summary())
        );
    }

    html.push_str("<table>\n<tr>");
    for field in RecordField::COLUMNS {
        let _ = write!(html, "<th>{}</th>", escape_html(field.header()));
    }
    html.push_str("</tr>\n");

    for record in records {
        html.push_str("<tr>");
        for cell in record.cells() {
            let _ = write!(html, "<td>{}</td>", escape_html(&cell));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</table>\n</div>\n");
    Ok(html)
}

/// Standalone page with every view in presentation order.
pub fn render_html_document(views: &TableViews) -> Result<String> {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Difficulty Multipliers</title>\n</head>\n<body>\n",
    );
    for view in views.all() {
        html.push_str(&render_html_table(
            &view.records,
            &view.title,
            view.show_filter_description,
            &views.bounds,
        )?);
    }
    html.push_str("</body>\n</html>\n");
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_html_handles_markup_characters() {
        assert_eq!(escape_html("<a & 'b'>"), "&lt;a &amp; &#39;b&#39;&gt;");
    }
}
