//! Error type shared by table generation, filtering and report output.

use thiserror::Error;

use crate::table::{DifficultyTier, RecordField};

#[derive(Error, Debug)]
pub enum TableError {
    /// Rendering or exporting was asked to produce a table with no rows.
    #[error("cannot render an empty table")]
    EmptyTable,

    /// A multiplier table produced NaN, infinity or a non-positive value.
    #[error("{field} for {tier} (slider {slider}, damage {damage_mod}) is not a positive finite number: {value}")]
    NonFiniteValue {
        tier: DifficultyTier,
        slider: String,
        damage_mod: String,
        field: RecordField,
        value: f64,
    },

    #[error("invalid filter bounds: {0}")]
    InvalidBounds(String),

    /// Precedence entries are written as `DAMAGE/SLIDER`.
    #[error("invalid precedence entry '{0}', expected DAMAGE/SLIDER (e.g. x2/Vanilla)")]
    InvalidPrecedence(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TableError>;
