use std::fmt::Write as _;

use serde::Serialize;
use tracing::debug;

use crate::error::{Result, TableError};
use crate::table::record::DifficultyRecord;

/// Acceptable ranges for modded difficulties, in percent (100 = vanilla Adept).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FilterBounds {
    pub min_dealt: f64,
    pub max_dealt: f64,
    pub min_taken: f64,
    pub max_taken: f64,
    pub min_relative: f64,
    pub max_relative: f64,
}

impl Default for FilterBounds {
    fn default() -> Self {
        Self {
            min_dealt: 66.0,
            max_dealt: 300.0,
            min_taken: 33.0,
            max_taken: 500.0,
            min_relative: 16.0,
            max_relative: 156.0,
        }
    }
}

impl FilterBounds {
    pub fn validate(&self) -> Result<()> {
        let pairs = [
            ("dealt", self.min_dealt, self.max_dealt),
            ("taken", self.min_taken, self.max_taken),
            ("relative", self.min_relative, self.max_relative),
        ];
        for (name, min, max) in pairs {
            if !min.is_finite() || !max.is_finite() {
                return Err(TableError::InvalidBounds(format!(
                    "{name} bounds must be finite (min {min}, max {max})"
                )));
            }
            if min > max {
                return Err(TableError::InvalidBounds(format!(
                    "min {name} {min}% exceeds max {name} {max}%"
                )));
            }
        }
        Ok(())
    }

    pub fn contains(&self, record: &DifficultyRecord) -> bool {
        within(record.relative_strength, self.min_relative, self.max_relative)
            && within(record.taken, self.min_taken, self.max_taken)
            && within(record.dealt, self.min_dealt, self.max_dealt)
    }

    /// Plain-language description shown above a filtered table.
    pub fn summary(&self) -> String {
        let mut text = String::from(
            "This table filters out all modded difficulties that fail to meet these criteria. The player must:",
        );
        let lines = [
            format!("Deal no more than {}% damage", self.max_dealt),
            format!("Deal no less than {}% damage", self.min_dealt),
            format!("Take no more than {}% damage", self.max_taken),
            format!("Take no less than {}% damage", self.min_taken),
            format!("Be no more than {}% stronger than enemies", self.max_relative),
            format!("Be no less than {}% the strength of enemies", self.min_relative),
        ];
        for line in lines {
            let _ = write!(text, "\n- {line}");
        }
        text
    }
}

fn within(value: f64, min_percent: f64, max_percent: f64) -> bool {
    value >= min_percent / 100.0 && value <= max_percent / 100.0
}

/// Keep the baseline plus every record inside all six bounds. Order is preserved.
pub fn apply_filter(records: &[DifficultyRecord], bounds: &FilterBounds) -> Vec<DifficultyRecord> {
    let kept: Vec<DifficultyRecord> = records
        .iter()
        .filter(|record| record.is_baseline() || bounds.contains(record))
        .cloned()
        .collect();
    debug!(before = records.len(), after = kept.len(), "filtered records");
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bounds_are_valid() {
        assert!(FilterBounds::default().validate().is_ok());
    }

    #[test]
    fn inverted_or_nan_bounds_are_rejected() {
        let inverted = FilterBounds {
            min_taken: 600.0,
            ..FilterBounds::default()
        };
        assert!(matches!(inverted.validate(), Err(TableError::InvalidBounds(_))));

        let nan = FilterBounds {
            max_relative: f64::NAN,
            ..FilterBounds::default()
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn summary_lists_every_bound() {
        let summary = FilterBounds::default().summary();
        assert_eq!(summary.lines().count(), 7);
        assert!(summary.contains("- Deal no more than 300% damage"));
        assert!(summary.contains("- Be no less than 16% the strength of enemies"));
    }
}
