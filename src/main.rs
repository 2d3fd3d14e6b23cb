//! CLI entry point for the rail trip analytics tool.
//!
//! Provides subcommands for listing filter options, summarising a selection
//! of trips and exporting chart-ready tables for the dashboard front end.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use rail_trip_analytics::config::DashboardConfig;
use rail_trip_analytics::error::PipelineError;
use rail_trip_analytics::{
    analyzers::types::Dashboard,
    fetch::read_source,
    loader::{MalformedPolicy, load_trips_from_bytes},
    output::{print_json, print_pretty, write_json, write_tables},
    pipeline,
    schema::Dataset,
    selection::{Dimension, Selection, SelectionState},
};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "rail_trip_analytics")]
#[command(about = "Filter rail trips and compute dashboard metrics", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct DataArgs {
    /// Path or URL of the trips CSV
    #[arg(short, long, value_name = "FILE_OR_URL", default_value = "Data/Trips.csv")]
    data: String,

    /// Drop rows whose delay class and delay minutes disagree instead of failing
    #[arg(long, default_value_t = false)]
    skip_malformed: bool,
}

#[derive(Args)]
struct SelectionArgs {
    /// City of departure to keep (repeatable); omit to select all
    #[arg(long = "city-start", value_name = "CITY")]
    city_start: Vec<String>,

    /// Select no city of departure (matches no trips)
    #[arg(long, default_value_t = false, conflicts_with = "city_start")]
    city_start_none: bool,

    /// City of arrival to keep (repeatable); omit to select all
    #[arg(long = "city-end", value_name = "CITY")]
    city_end: Vec<String>,

    /// Select no city of arrival (matches no trips)
    #[arg(long, default_value_t = false, conflicts_with = "city_end")]
    city_end_none: bool,

    /// Start from the filter pane default, which pre-seeds one dimension with its first option
    #[arg(long, default_value_t = false)]
    ui_defaults: bool,

    /// Dashboard config JSON (falls back to DASHBOARD_CONFIG, then defaults)
    #[arg(long, value_name = "FILE")]
    config: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the filter options for both city dimensions and the delay reasons
    Options {
        #[command(flatten)]
        data: DataArgs,
    },
    /// Compute metrics and chart tables for a selection and log them
    Summary {
        #[command(flatten)]
        data: DataArgs,

        #[command(flatten)]
        selection: SelectionArgs,

        /// Also log the full dashboard as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Compute the dashboard for a selection and write it to disk
    Export {
        #[command(flatten)]
        data: DataArgs,

        #[command(flatten)]
        selection: SelectionArgs,

        /// JSON file to write the dashboard to
        #[arg(short, long, default_value = "dashboard.json")]
        output: PathBuf,

        /// Gzip compress the JSON output
        #[arg(long, default_value_t = false)]
        gzip: bool,

        /// Optional: directory to write one CSV per chart table
        #[arg(long)]
        tables_dir: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/rail_trip_analytics.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("rail_trip_analytics.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Options { data } => {
            let dataset = load_dataset(&data)?;
            for dimension in Dimension::ALL {
                let options = dataset.options(dimension);
                info!(
                    dimension = dimension.label(),
                    count = options.len(),
                    ?options,
                    "Filter options"
                );
            }
            let reasons = dataset.delay_reasons();
            info!(count = reasons.len(), ?reasons, "Delay reasons");
        }
        Commands::Summary {
            data,
            selection,
            json,
        } => {
            let dataset = load_dataset(&data)?;
            if let Some(dashboard) = build_dashboard(&dataset, &selection)? {
                print_pretty(&dashboard);
                if json {
                    print_json(&dashboard)?;
                }
            }
        }
        Commands::Export {
            data,
            selection,
            output,
            gzip,
            tables_dir,
        } => {
            let dataset = load_dataset(&data)?;
            if let Some(dashboard) = build_dashboard(&dataset, &selection)? {
                write_json(&output, &dashboard, gzip)?;
                info!(path = %output.display(), gzip, "Dashboard exported");

                if let Some(dir) = tables_dir {
                    let written = write_tables(&dir, &dashboard)?;
                    info!(dir = %dir.display(), files = written.len(), "Chart tables exported");
                }
            }
        }
    }

    Ok(())
}

/// Reads and validates the trip table named by `args`.
#[tracing::instrument(skip_all, fields(source = %args.data))]
fn load_dataset(args: &DataArgs) -> Result<Dataset> {
    let bytes = read_source(&args.data)?;
    let policy = if args.skip_malformed {
        MalformedPolicy::Skip
    } else {
        MalformedPolicy::Reject
    };
    let dataset = load_trips_from_bytes(&bytes, policy)?;
    info!(rows = dataset.len(), "Trip data loaded");
    Ok(dataset)
}

/// Runs the pipeline, returning `None` after logging the notice when the
/// selection matches no trips.
fn build_dashboard(dataset: &Dataset, args: &SelectionArgs) -> Result<Option<Dashboard>> {
    let config_path = args
        .config
        .clone()
        .or_else(|| std::env::var("DASHBOARD_CONFIG").ok());
    let config = DashboardConfig::load_or_default(config_path.as_deref())?;

    let selection = selection_from_args(dataset, args, &config);

    match pipeline::run(dataset, &selection, &config) {
        Ok(dashboard) => Ok(Some(dashboard)),
        Err(PipelineError::EmptySelection) => {
            info!("{}", PipelineError::EmptySelection);
            Ok(None)
        }
    }
}

/// A dimension with no values on the command line stays at `All` (or the
/// seeded default with `--ui-defaults`); any values make it explicit, and
/// `--city-*-none` makes it an explicit empty set.
fn selection_from_args(
    dataset: &Dataset,
    args: &SelectionArgs,
    config: &DashboardConfig,
) -> SelectionState {
    let mut selection = if args.ui_defaults {
        SelectionState::ui_default(
            config.seeded_dimension,
            &dataset.options(config.seeded_dimension),
        )
    } else {
        SelectionState::all()
    };

    if let Some(start) = Selection::from_cli(&args.city_start, args.city_start_none) {
        selection.set(Dimension::CityStart, start);
    }
    if let Some(end) = Selection::from_cli(&args.city_end, args.city_end_none) {
        selection.set(Dimension::CityEnd, end);
    }

    selection
}
