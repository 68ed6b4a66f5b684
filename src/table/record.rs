use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// Round to three decimal places, halves away from zero.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Round to two decimal places, halves away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format a fractional multiplier as a whole percentage, e.g. `0.333` -> `"33%"`.
pub fn percent_label(value: f64) -> String {
    format!("{}%", (value * 100.0).round() as i64)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum DifficultyTier {
    Novice,
    Apprentice,
    Adept,
    Expert,
    Master,
}

impl DifficultyTier {
    pub const ALL: [DifficultyTier; 5] = [
        Self::Novice,
        Self::Apprentice,
        Self::Adept,
        Self::Expert,
        Self::Master,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Novice => "Novice",
            Self::Apprentice => "Apprentice",
            Self::Adept => "Adept",
            Self::Expert => "Expert",
            Self::Master => "Master",
        }
    }
}

impl fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DifficultyTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown difficulty tier '{s}'"))
    }
}

/// Which mod setting produced a record: the unmodded game or a scaled multiplier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VariantLabel {
    Vanilla,
    Scaled(f64),
}

impl VariantLabel {
    pub fn is_vanilla(&self) -> bool {
        matches!(self, Self::Vanilla)
    }

    /// True when `label` is this variant's display text ("Vanilla", "x2", "x1.5", ...).
    pub fn matches_label(&self, label: &str) -> bool {
        self.to_string() == label.trim()
    }
}

impl fmt::Display for VariantLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vanilla => write!(f, "Vanilla"),
            Self::Scaled(value) => write!(f, "x{value}"),
        }
    }
}

impl Serialize for VariantLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Column schema for rendered and exported tables, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordField {
    SliderVariant,
    DamageModVariant,
    DifficultyTier,
    Taken,
    Dealt,
    RelativeStrength,
}

impl RecordField {
    pub const COLUMNS: [RecordField; 6] = [
        Self::SliderVariant,
        Self::DamageModVariant,
        Self::DifficultyTier,
        Self::Taken,
        Self::Dealt,
        Self::RelativeStrength,
    ];

    pub fn header(&self) -> &'static str {
        match self {
            Self::SliderVariant => "Slider Mod Version",
            Self::DamageModVariant => "More Damage Mod Version",
            Self::DifficultyTier => "Difficulty",
            Self::Taken => "Damage Taken",
            Self::Dealt => "Damage Dealt",
            Self::RelativeStrength => "Relative Strength",
        }
    }

    pub fn is_percentage(&self) -> bool {
        matches!(self, Self::Taken | Self::Dealt | Self::RelativeStrength)
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header())
    }
}

/// One row of the difficulty table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DifficultyRecord {
    pub slider_variant: VariantLabel,
    pub damage_mod_variant: VariantLabel,
    pub difficulty_tier: DifficultyTier,
    /// Damage-taken multiplier (1.0 = vanilla Adept).
    pub taken: f64,
    /// Damage-dealt multiplier.
    pub dealt: f64,
    /// `dealt / taken`, rounded to two decimals before any damage-mod scaling.
    pub relative_strength: f64,
}

impl DifficultyRecord {
    /// The vanilla slider with the vanilla damage mod. Exempt from filtering.
    pub fn is_baseline(&self) -> bool {
        self.slider_variant.is_vanilla() && self.damage_mod_variant.is_vanilla()
    }

    pub fn dedup_key(&self) -> DedupKey {
        DedupKey::new(self.taken, self.dealt)
    }

    pub fn value(&self, field: RecordField) -> Option<f64> {
        match field {
            RecordField::Taken => Some(self.taken),
            RecordField::Dealt => Some(self.dealt),
            RecordField::RelativeStrength => Some(self.relative_strength),
            _ => None,
        }
    }

    /// Display text of one column; numeric columns use the whole-percent form.
    pub fn cell(&self, field: RecordField) -> String {
        if field.is_percentage() {
            if let Some(value) = self.value(field) {
                return percent_label(value);
            }
        }
        match field {
            RecordField::SliderVariant => self.slider_variant.to_string(),
            RecordField::DamageModVariant => self.damage_mod_variant.to_string(),
            _ => self.difficulty_tier.to_string(),
        }
    }

    pub fn cells(&self) -> Vec<String> {
        RecordField::COLUMNS
            .iter()
            .map(|field| self.cell(*field))
            .collect()
    }
}

/// Numeric identity of a record: (taken, dealt) scaled to thousandths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DedupKey {
    pub taken_milli: i64,
    pub dealt_milli: i64,
}

impl DedupKey {
    pub fn new(taken: f64, dealt: f64) -> Self {
        Self {
            taken_milli: (taken * 1000.0).round() as i64,
            dealt_milli: (dealt * 1000.0).round() as i64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_halves_go_up_for_positive_values() {
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round3(1.0 / 3.0), 0.333);
        assert_eq!(round3(1.0 / 1.5), 0.667);
    }

    #[test]
    fn scaled_labels_use_shortest_decimal_form() {
        assert_eq!(VariantLabel::Scaled(2.0).to_string(), "x2");
        assert_eq!(VariantLabel::Scaled(1.5).to_string(), "x1.5");
        assert_eq!(VariantLabel::Vanilla.to_string(), "Vanilla");
        assert!(VariantLabel::Scaled(2.5).matches_label(" x2.5 "));
    }

    #[test]
    fn percent_label_rounds_to_whole_percent() {
        assert_eq!(percent_label(1.0), "100%");
        assert_eq!(percent_label(0.333), "33%");
        assert_eq!(percent_label(9.01), "901%");
    }

    #[test]
    fn cells_format_only_percentage_columns() {
        let record = DifficultyRecord {
            slider_variant: VariantLabel::Scaled(3.0),
            damage_mod_variant: VariantLabel::Scaled(1.5),
            difficulty_tier: DifficultyTier::Novice,
            taken: 0.5,
            dealt: 4.5,
            relative_strength: 9.01,
        };
        for field in RecordField::COLUMNS {
            assert_eq!(record.cell(field).ends_with('%'), field.is_percentage(), "{field}");
        }
        assert_eq!(record.cells(), ["x3", "x1.5", "Novice", "50%", "450%", "901%"]);
    }

    #[test]
    fn dedup_key_ignores_float_noise() {
        assert_eq!(DedupKey::new(0.1 + 0.2, 1.0), DedupKey::new(0.3, 1.0));
    }

    #[test]
    fn tier_parses_case_insensitively() {
        assert_eq!("expert".parse::<DifficultyTier>(), Ok(DifficultyTier::Expert));
        assert!("legend".parse::<DifficultyTier>().is_err());
    }
}
