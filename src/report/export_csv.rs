//! CSV export of a record sequence. Columns follow `RecordField::COLUMNS`; multipliers are
//! written as whole percentages.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::error::{Result, TableError};
use crate::table::{DifficultyRecord, RecordField};

pub fn write_csv<W: Write>(records: &[DifficultyRecord], writer: W) -> Result<()> {
    if records.is_empty() {
        return Err(TableError::EmptyTable);
    }

    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);
    csv_writer.write_record(RecordField::COLUMNS.iter().map(|field| field.header()))?;
    for record in records {
        csv_writer.write_record(record.cells())?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn csv_string(records: &[DifficultyRecord]) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(records, &mut buffer)?;
    // Cells are all UTF-8.
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

pub fn export_csv(records: &[DifficultyRecord], path: &Path) -> Result<()> {
    if records.is_empty() {
        return Err(TableError::EmptyTable);
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    write_csv(records, file)?;
    info!(path = %path.display(), rows = records.len(), "exported csv");
    Ok(())
}
