//! Generate → deduplicate → sort/filter, with each step chosen by flags instead of prompts.

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::table::{
    apply_filter, deduplicate, generate_table, sorted_by, DedupPolicy, DifficultyRecord,
    FilterBounds, GeneratorConfig, PrecedenceEntry, SortKey,
};

pub const FILTERED_EXPORT_FILENAME: &str = "filteredRelativeStrength.csv";
pub const SORTED_EXPORT_FILENAME: &str = "sortedByRelativeStrength.csv";

#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub generator: GeneratorConfig,
    pub apply_filters: bool,
    pub deduplicate: bool,
    /// Mod combinations that win numeric ties during deduplication. Empty = generation order.
    pub precedence: Vec<PrecedenceEntry>,
    pub bounds: FilterBounds,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            generator: GeneratorConfig::default(),
            apply_filters: true,
            deduplicate: true,
            precedence: Vec::new(),
            bounds: FilterBounds::default(),
        }
    }
}

impl PipelineOptions {
    pub fn dedup_policy(&self) -> DedupPolicy {
        if self.precedence.is_empty() {
            DedupPolicy::Simple
        } else {
            DedupPolicy::Precedence(self.precedence.clone())
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TableView {
    pub title: String,
    pub sort_key: &'static str,
    /// Whether the presenter should print the filter description above this view.
    pub show_filter_description: bool,
    pub records: Vec<DifficultyRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableViews {
    pub filtered: bool,
    pub bounds: FilterBounds,
    pub by_relative_strength: TableView,
    pub by_dealt: TableView,
    pub by_taken: TableView,
}

impl TableViews {
    /// The strength-ordered view; this is the one exported to CSV.
    pub fn primary(&self) -> &TableView {
        &self.by_relative_strength
    }

    /// Views in presentation order.
    pub fn all(&self) -> [&TableView; 3] {
        [&self.by_relative_strength, &self.by_dealt, &self.by_taken]
    }

    pub fn default_export_filename(&self) -> &'static str {
        if self.filtered {
            FILTERED_EXPORT_FILENAME
        } else {
            SORTED_EXPORT_FILENAME
        }
    }
}

pub fn run_pipeline(options: &PipelineOptions) -> Result<TableViews> {
    if options.apply_filters {
        options.bounds.validate()?;
    }

    let generated = generate_table(&options.generator)?;
    let unique = if options.deduplicate {
        deduplicate(&generated, &options.dedup_policy())
    } else {
        generated
    };

    let by_strength = sorted_by(&unique, SortKey::RelativeStrength);
    let base = if options.apply_filters {
        apply_filter(&by_strength, &options.bounds)
    } else {
        by_strength
    };
    // Filtered views re-sort the filtered strength view; unfiltered ones sort the unique set,
    // so equal keys stay in generation order.
    let secondary_source = if options.apply_filters { &base } else { &unique };
    debug!(
        records = base.len(),
        filtered = options.apply_filters,
        deduplicated = options.deduplicate,
        "pipeline complete"
    );

    let view = |key: SortKey, records: Vec<DifficultyRecord>, show_filter_description: bool| {
        let title = if options.apply_filters {
            format!("Filtered and Sorted by {}", key.title())
        } else {
            format!("Sorted by {}", key.title())
        };
        TableView {
            title,
            sort_key: key.title(),
            show_filter_description,
            records,
        }
    };

    Ok(TableViews {
        filtered: options.apply_filters,
        bounds: options.bounds,
        by_dealt: view(SortKey::Dealt, sorted_by(secondary_source, SortKey::Dealt), false),
        by_taken: view(SortKey::Taken, sorted_by(secondary_source, SortKey::Taken), false),
        by_relative_strength: view(SortKey::RelativeStrength, base, options.apply_filters),
    })
}
