//! One full recomputation for a selection: filter, metrics, then aggregates.
//!
//! Runs are pure. The dataset is only read, so any number of threads may run
//! the pipeline over one shared [`Dataset`] with their own selections.

use chrono::Utc;
use tracing::debug;

use crate::analyzers::aggregate::aggregate_tables;
use crate::analyzers::metrics::compute_metrics;
use crate::analyzers::types::Dashboard;
use crate::config::DashboardConfig;
use crate::error::PipelineError;
use crate::filter::apply;
use crate::format::Formatter;
use crate::schema::Dataset;
use crate::selection::SelectionState;

/// Produces the complete dashboard for `selection`, or
/// [`PipelineError::EmptySelection`] when the combined filter matches no
/// trips. Nothing downstream of the filter runs in the empty case.
#[tracing::instrument(skip_all, fields(rows = dataset.len()))]
pub fn run(
    dataset: &Dataset,
    selection: &SelectionState,
    config: &DashboardConfig,
) -> Result<Dashboard, PipelineError> {
    let view = apply(dataset, selection);
    debug!(filtered_rows = view.len(), "Selection applied");

    if view.is_empty() {
        return Err(PipelineError::EmptySelection);
    }

    let metrics = compute_metrics(&view)?;
    let formatted = Formatter::from_config(config).format_metrics(&metrics);
    let tables = aggregate_tables(dataset, &view, selection, config);

    Ok(Dashboard {
        generated_at: Utc::now(),
        selection: selection.clone(),
        filtered_rows: view.len(),
        metrics,
        formatted,
        tables,
    })
}
