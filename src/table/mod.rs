pub mod dedup;
pub mod filter;
pub mod generator;
pub mod record;
pub mod sort;

pub use dedup::{deduplicate, DedupPolicy, PrecedenceEntry};
pub use filter::{apply_filter, FilterBounds};
pub use generator::{
    generate_default_table, generate_slider_group, generate_table, slider_label,
    tier_multipliers, GeneratorConfig, DAMAGE_MULTIPLIERS, SLIDER_MULTIPLIERS,
    VANILLA_NOVICE_DEALT,
};
pub use record::{
    percent_label, round2, round3, DedupKey, DifficultyRecord, DifficultyTier, RecordField,
    VariantLabel,
};
pub use sort::{sort_by_dealt, sort_by_relative_strength, sort_by_taken, sorted_by, SortKey};
