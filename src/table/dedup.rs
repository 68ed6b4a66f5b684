use std::collections::HashSet;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::error::TableError;
use crate::table::record::DifficultyRecord;

/// A mod combination that should win numeric ties, written `DAMAGE/SLIDER` (e.g. `x2/Vanilla`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrecedenceEntry {
    pub damage_mod: String,
    pub slider: String,
}

impl PrecedenceEntry {
    pub fn new(damage_mod: impl Into<String>, slider: impl Into<String>) -> Self {
        Self {
            damage_mod: damage_mod.into(),
            slider: slider.into(),
        }
    }

    pub fn matches(&self, record: &DifficultyRecord) -> bool {
        record.damage_mod_variant.matches_label(&self.damage_mod)
            && record.slider_variant.matches_label(&self.slider)
    }
}

impl FromStr for PrecedenceEntry {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((damage, slider)) if !damage.trim().is_empty() && !slider.trim().is_empty() => {
                Ok(Self::new(damage.trim(), slider.trim()))
            }
            _ => Err(TableError::InvalidPrecedence(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DedupPolicy {
    /// Keep the first record per (taken, dealt) in generation order.
    #[default]
    Simple,
    /// Records matching an entry go first; the rest are ordered by (damage mod, slider) label.
    Precedence(Vec<PrecedenceEntry>),
}

/// Keep the first record seen for each distinct (taken, dealt) pair.
pub fn deduplicate(records: &[DifficultyRecord], policy: &DedupPolicy) -> Vec<DifficultyRecord> {
    let ordered: Vec<&DifficultyRecord> = match policy {
        DedupPolicy::Simple => records.iter().collect(),
        DedupPolicy::Precedence(entries) => precedence_order(records, entries),
    };

    let mut seen = HashSet::with_capacity(ordered.len());
    let unique: Vec<DifficultyRecord> = ordered
        .into_iter()
        .filter(|record| seen.insert(record.dedup_key()))
        .cloned()
        .collect();

    debug!(
        before = records.len(),
        after = unique.len(),
        "deduplicated records"
    );
    unique
}

fn precedence_order<'a>(
    records: &'a [DifficultyRecord],
    entries: &[PrecedenceEntry],
) -> Vec<&'a DifficultyRecord> {
    for entry in entries {
        if !records.iter().any(|record| entry.matches(record)) {
            warn!(
                damage_mod = %entry.damage_mod,
                slider = %entry.slider,
                "precedence entry matches no record"
            );
        }
    }

    let (mut preferred, mut rest): (Vec<_>, Vec<_>) = records
        .iter()
        .partition(|record| entries.iter().any(|entry| entry.matches(record)));

    // Ordered by display label, so "Vanilla" sorts before "x...".
    rest.sort_by_cached_key(|record| {
        (
            record.damage_mod_variant.to_string(),
            record.slider_variant.to_string(),
        )
    });
    preferred.append(&mut rest);
    preferred
}
