use std::collections::HashSet;

use crate::analyzers::types::{AverageDelay, Metrics};
use crate::analyzers::utility::{mean, percentage};
use crate::error::PipelineError;
use crate::filter::FilteredView;

/// Computes the five summary metrics for a filtered view.
///
/// An empty view has no defined delay percentage, so it is reported as
/// [`PipelineError::EmptySelection`] instead of producing numbers.
pub fn compute_metrics(view: &FilteredView<'_>) -> Result<Metrics, PipelineError> {
    if view.is_empty() {
        return Err(PipelineError::EmptySelection);
    }

    let trip_count = view
        .iter()
        .map(|r| r.id.as_str())
        .collect::<HashSet<_>>()
        .len();

    let (total_refunds, total_revenue) =
        view.iter().fold((0.0, 0.0), |(refunds, revenue), r| {
            if r.is_refunded() {
                (refunds + r.price, revenue)
            } else {
                (refunds, revenue + r.price)
            }
        });

    let delay_minutes: Vec<f64> = view
        .iter()
        .filter(|r| r.is_delayed())
        .filter_map(|r| r.delay_minutes)
        .collect();
    let delayed_count = view.iter().filter(|r| r.is_delayed()).count();

    let average_delay = match mean(&delay_minutes) {
        Some(minutes) => AverageDelay::Minutes(minutes),
        None => AverageDelay::NoDelayedRecords,
    };

    Ok(Metrics {
        trip_count,
        total_revenue,
        total_refunds,
        percent_delayed: percentage(delayed_count, view.len(), 1),
        average_delay,
    })
}
