//! Data types produced by the metrics and aggregation pipeline.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::selection::SelectionState;

/// Mean delay over delayed trips, or an explicit marker when none were delayed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "minutes", rename_all = "snake_case")]
pub enum AverageDelay {
    Minutes(f64),
    NoDelayedRecords,
}

/// The five scalar summary metrics for a non-empty filtered view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metrics {
    /// Distinct trip ids.
    pub trip_count: usize,
    pub total_revenue: f64,
    pub total_refunds: f64,
    /// 0.0..=100.0, one decimal place.
    pub percent_delayed: f64,
    pub average_delay: AverageDelay,
}

/// Display strings for [`Metrics`], in card order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedMetrics {
    pub total_trips: String,
    pub total_revenue: String,
    pub total_refunds: String,
    pub trips_delayed: String,
    pub average_delay: String,
}

/// One bar of the delay-rate-by-arrival-city chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DelayRateRow {
    pub label: String,
    pub value: f64,
    pub highlighted: bool,
    pub color: String,
}

/// One bar of a single-colour ranked chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedRow {
    pub label: String,
    pub value: f64,
    pub color: String,
}

/// The three chart tables. Row order is significant and must not be re-sorted
/// by consumers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateTables {
    /// Full dataset, descending by percent delayed.
    pub delay_rate_by_city: Vec<DelayRateRow>,
    /// Filtered view, top refunded routes ascending by refund total.
    pub top_refunded_routes: Vec<RankedRow>,
    /// Filtered view, delay reasons ascending by trip count.
    pub delay_reasons: Vec<RankedRow>,
}

/// Complete output of one pipeline run, handed to the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub generated_at: DateTime<Utc>,
    pub selection: SelectionState,
    pub filtered_rows: usize,
    pub metrics: Metrics,
    pub formatted: FormattedMetrics,
    pub tables: AggregateTables,
}
