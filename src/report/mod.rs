pub mod export_csv;
pub mod html;
pub mod text;

pub use export_csv::{csv_string, export_csv, write_csv};
pub use html::{render_html_document, render_html_table};
pub use text::{render_text_table, render_text_views};
