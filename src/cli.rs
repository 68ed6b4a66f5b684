use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::error::{Result, TableError};
use crate::pipeline::{run_pipeline, PipelineOptions, TableViews};
use crate::report::{export_csv, render_html_document, render_text_table, render_text_views};
use crate::table::{generate_table, FilterBounds, PrecedenceEntry};

/// Difficulty slider and "more damage" mod multiplier tables.
#[derive(Debug, Parser)]
#[command(name = "slider-table")]
#[command(version)]
pub struct Cli {
    /// Log pipeline stages to stderr (same as RUST_LOG=debug).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the three sorted views
    Render {
        #[command(flatten)]
        table: TableArgs,

        #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
        format: OutputFormat,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Export the relative-strength view as CSV
    Export {
        #[command(flatten)]
        table: TableArgs,

        /// Output file (defaults to filteredRelativeStrength.csv or sortedByRelativeStrength.csv)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Directory for the default output file
        #[arg(long, env = "SLIDER_TABLE_OUT")]
        out_dir: Option<PathBuf>,
    },
    /// Print every generated record before deduplication and filtering
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Html,
    Text,
    Json,
}

#[derive(Debug, Clone, Args)]
pub struct TableArgs {
    /// Keep records outside the filter bounds
    #[arg(long)]
    pub no_filter: bool,

    /// Keep records with identical taken/dealt multipliers
    #[arg(long)]
    pub no_dedup: bool,

    /// Mod combination that wins duplicate ties, as DAMAGE/SLIDER (e.g. x2/Vanilla). Repeatable.
    #[arg(long = "prefer", value_name = "DAMAGE/SLIDER")]
    pub prefer: Vec<String>,

    #[arg(long, value_name = "PERCENT")]
    pub min_dealt: Option<f64>,
    #[arg(long, value_name = "PERCENT")]
    pub max_dealt: Option<f64>,
    #[arg(long, value_name = "PERCENT")]
    pub min_taken: Option<f64>,
    #[arg(long, value_name = "PERCENT")]
    pub max_taken: Option<f64>,
    #[arg(long, value_name = "PERCENT")]
    pub min_relative: Option<f64>,
    #[arg(long, value_name = "PERCENT")]
    pub max_relative: Option<f64>,
}

impl TableArgs {
    pub fn bounds(&self) -> FilterBounds {
        let defaults = FilterBounds::default();
        FilterBounds {
            min_dealt: self.min_dealt.unwrap_or(defaults.min_dealt),
            max_dealt: self.max_dealt.unwrap_or(defaults.max_dealt),
            min_taken: self.min_taken.unwrap_or(defaults.min_taken),
            max_taken: self.max_taken.unwrap_or(defaults.max_taken),
            min_relative: self.min_relative.unwrap_or(defaults.min_relative),
            max_relative: self.max_relative.unwrap_or(defaults.max_relative),
        }
    }

    pub fn pipeline_options(&self) -> Result<PipelineOptions> {
        let precedence = self
            .prefer
            .iter()
            .map(|raw| raw.parse::<PrecedenceEntry>())
            .collect::<Result<Vec<_>>>()?;
        Ok(PipelineOptions {
            apply_filters: !self.no_filter,
            deduplicate: !self.no_dedup,
            precedence,
            bounds: self.bounds(),
            ..PipelineOptions::default()
        })
    }
}

/// Installs the stderr subscriber. `RUST_LOG` wins over `--verbose`.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { LevelFilter::DEBUG } else { LevelFilter::WARN };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

pub fn run_with_args(args: &[String]) -> i32 {
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() { 2 } else { 0 };
        }
    };
    init_tracing(cli.verbose);

    let outcome = match cli.command {
        Command::Render { table, format, out } => handle_render(&table, format, out.as_deref()),
        Command::Export {
            table,
            out,
            out_dir,
        } => handle_export(&table, out, out_dir),
        Command::List => handle_list(),
    };

    match outcome {
        Ok(()) => 0,
        Err(err @ (TableError::InvalidPrecedence(_) | TableError::InvalidBounds(_))) => {
            eprintln!("error: {err}");
            2
        }
        Err(err) => {
            eprintln!("error: {err}");
            1
        }
    }
}

fn handle_render(table: &TableArgs, format: OutputFormat, out: Option<&Path>) -> Result<()> {
    let views = run_pipeline(&table.pipeline_options()?)?;
    let rendered = render_views(&views, format)?;
    match out {
        Some(path) => {
            fs::write(path, rendered)?;
            info!(path = %path.display(), "rendered tables");
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

pub fn render_views(views: &TableViews, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Html => render_html_document(views),
        OutputFormat::Text => render_text_views(views),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(views)? + "\n"),
    }
}

fn handle_export(table: &TableArgs, out: Option<PathBuf>, out_dir: Option<PathBuf>) -> Result<()> {
    let views = run_pipeline(&table.pipeline_options()?)?;
    let path = out.unwrap_or_else(|| {
        let filename = views.default_export_filename();
        match out_dir {
            Some(dir) => dir.join(filename),
            None => PathBuf::from(filename),
        }
    });
    export_csv(&views.primary().records, &path)?;
    println!(
        "export complete: rows={}, path='{}'",
        views.primary().records.len(),
        path.display()
    );
    Ok(())
}

fn handle_list() -> Result<()> {
    let records = generate_table(&PipelineOptions::default().generator)?;
    let rendered = render_text_table(
        &records,
        "Generated Difficulty Table",
        false,
        &FilterBounds::default(),
    )?;
    print!("{rendered}");
    Ok(())
}
