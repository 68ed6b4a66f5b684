//! Cross product of slider multipliers, difficulty tiers and "more damage" multipliers.
//!
//! Each slider multiplier `m` defines Novice and Apprentice directly; Adept is pinned at 1/1
//! and Expert/Master mirror Apprentice/Novice with taken and dealt swapped.

use tracing::debug;

use crate::error::{Result, TableError};
use crate::table::record::{round2, round3, DifficultyRecord, DifficultyTier, RecordField, VariantLabel};

/// Novice dealt multiplier of the unmodded game (slider multiplier 2.5).
pub const VANILLA_NOVICE_DEALT: f64 = 6.0;

/// "Difficulty Slider Fixed" options. The first entry is the vanilla slider.
pub const SLIDER_MULTIPLIERS: [f64; 5] = [2.5, 0.25, 0.5, 0.75, 1.0];

/// "More Damage" options.
pub const DAMAGE_MULTIPLIERS: [f64; 3] = [1.5, 2.0, 3.0];

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub slider_multipliers: Vec<f64>,
    pub damage_multipliers: Vec<f64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            slider_multipliers: SLIDER_MULTIPLIERS.to_vec(),
            damage_multipliers: DAMAGE_MULTIPLIERS.to_vec(),
        }
    }
}

/// (taken, dealt) per tier for one slider multiplier, in `DifficultyTier::ALL` order.
pub fn tier_multipliers(slider_multiplier: f64) -> [(f64, f64); 5] {
    let novice_dealt = 1.0 + 2.0 * slider_multiplier;
    let novice_taken = round3(1.0 / novice_dealt);
    let apprentice_dealt = novice_dealt - slider_multiplier;
    let apprentice_taken = round3(1.0 / apprentice_dealt);

    [
        (novice_taken, novice_dealt),
        (apprentice_taken, apprentice_dealt),
        (1.0, 1.0),
        (apprentice_dealt, apprentice_taken),
        (novice_dealt, novice_taken),
    ]
}

pub fn slider_label(slider_multiplier: f64) -> VariantLabel {
    let novice_dealt = 1.0 + 2.0 * slider_multiplier;
    if novice_dealt == VANILLA_NOVICE_DEALT {
        VariantLabel::Vanilla
    } else {
        VariantLabel::Scaled(novice_dealt)
    }
}

/// Records for one slider multiplier: five vanilla-damage rows, then five rows per damage multiplier.
pub fn generate_slider_group(
    slider_multiplier: f64,
    damage_multipliers: &[f64],
) -> Result<Vec<DifficultyRecord>> {
    let slider_variant = slider_label(slider_multiplier);

    let base: Vec<DifficultyRecord> = DifficultyTier::ALL
        .into_iter()
        .zip(tier_multipliers(slider_multiplier))
        .map(|(difficulty_tier, (taken, dealt))| DifficultyRecord {
            slider_variant,
            damage_mod_variant: VariantLabel::Vanilla,
            difficulty_tier,
            taken,
            dealt,
            relative_strength: round2(dealt / taken),
        })
        .collect();

    let mut group = Vec::with_capacity(base.len() * (damage_multipliers.len() + 1));
    group.extend(base.iter().cloned());
    for &damage in damage_multipliers {
        // Taken and dealt scale together, so relative strength carries over unchanged.
        group.extend(base.iter().map(|record| DifficultyRecord {
            damage_mod_variant: VariantLabel::Scaled(damage),
            taken: round2(record.taken * damage),
            dealt: round2(record.dealt * damage),
            ..record.clone()
        }));
    }

    for record in &group {
        ensure_positive_finite(record)?;
    }
    Ok(group)
}

pub fn generate_table(config: &GeneratorConfig) -> Result<Vec<DifficultyRecord>> {
    let mut records = Vec::new();
    for &slider_multiplier in &config.slider_multipliers {
        records.extend(generate_slider_group(
            slider_multiplier,
            &config.damage_multipliers,
        )?);
    }
    debug!(
        records = records.len(),
        sliders = config.slider_multipliers.len(),
        damage_mods = config.damage_multipliers.len(),
        "generated difficulty table"
    );
    Ok(records)
}

pub fn generate_default_table() -> Result<Vec<DifficultyRecord>> {
    generate_table(&GeneratorConfig::default())
}

fn ensure_positive_finite(record: &DifficultyRecord) -> Result<()> {
    for field in [
        RecordField::Taken,
        RecordField::Dealt,
        RecordField::RelativeStrength,
    ] {
        let Some(value) = record.value(field) else {
            continue;
        };
        // Strength may round down to zero for extreme sliders; the multipliers may not.
        let floor_ok = match field {
            RecordField::RelativeStrength => value >= 0.0,
            _ => value > 0.0,
        };
        if !value.is_finite() || !floor_ok {
            return Err(TableError::NonFiniteValue {
                tier: record.difficulty_tier,
                slider: record.slider_variant.to_string(),
                damage_mod: record.damage_mod_variant.to_string(),
                field,
                value,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vanilla_slider_is_detected_from_novice_dealt() {
        assert_eq!(slider_label(2.5), VariantLabel::Vanilla);
        assert_eq!(slider_label(1.0), VariantLabel::Scaled(3.0));
        assert_eq!(slider_label(0.25).to_string(), "x1.5");
    }

    #[test]
    fn tier_multipliers_mirror_around_adept() {
        let tiers = tier_multipliers(0.5);
        assert_eq!(tiers[2], (1.0, 1.0));
        assert_eq!(tiers[3], (tiers[1].1, tiers[1].0));
        assert_eq!(tiers[4], (tiers[0].1, tiers[0].0));
    }

    #[test]
    fn negative_slider_multiplier_is_rejected() {
        let err = generate_slider_group(-0.5, &[]).unwrap_err();
        assert!(matches!(err, TableError::NonFiniteValue { .. }), "{err}");
    }

    #[test]
    fn empty_slider_list_yields_empty_table() {
        let config = GeneratorConfig {
            slider_multipliers: vec![],
            ..GeneratorConfig::default()
        };
        assert!(generate_table(&config).unwrap().is_empty());
    }
}
