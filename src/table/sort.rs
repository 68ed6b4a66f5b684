use std::cmp::Ordering;

use crate::table::record::DifficultyRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Least damage taken first.
    Taken,
    /// Most damage dealt first.
    Dealt,
    /// Strongest first; equal strengths put the lower dealt multiplier first.
    RelativeStrength,
}

impl SortKey {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Taken => "Damage Taken",
            Self::Dealt => "Damage Dealt",
            Self::RelativeStrength => "Relative Strength",
        }
    }

    pub fn compare(&self, left: &DifficultyRecord, right: &DifficultyRecord) -> Ordering {
        match self {
            Self::Taken => left.taken.total_cmp(&right.taken),
            Self::Dealt => right.dealt.total_cmp(&left.dealt),
            Self::RelativeStrength => right
                .relative_strength
                .total_cmp(&left.relative_strength)
                .then_with(|| left.dealt.total_cmp(&right.dealt)),
        }
    }
}

/// Stable sort into a new vector; the input is left untouched.
pub fn sorted_by(records: &[DifficultyRecord], key: SortKey) -> Vec<DifficultyRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|left, right| key.compare(left, right));
    sorted
}

pub fn sort_by_taken(records: &[DifficultyRecord]) -> Vec<DifficultyRecord> {
    sorted_by(records, SortKey::Taken)
}

pub fn sort_by_dealt(records: &[DifficultyRecord]) -> Vec<DifficultyRecord> {
    sorted_by(records, SortKey::Dealt)
}

pub fn sort_by_relative_strength(records: &[DifficultyRecord]) -> Vec<DifficultyRecord> {
    sorted_by(records, SortKey::RelativeStrength)
}
