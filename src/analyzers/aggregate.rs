//! Chart-ready aggregate tables.
//!
//! # Global ranking context
//!
//! The delay-rate-by-arrival-city table is always computed over the *full*
//! dataset so every city keeps its global rank. The selection only decides
//! which bars are highlighted, and only through the arrival city dimension:
//! a city is highlighted if and only if it survives
//! [`apply_dimension`] on [`Dimension::CityEnd`], whatever the departure
//! filter says. The refund and delay reason tables use the fully filtered
//! view.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};

use crate::analyzers::types::{AggregateTables, DelayRateRow, RankedRow};
use crate::analyzers::utility::percentage;
use crate::config::DashboardConfig;
use crate::filter::{FilteredView, apply_dimension};
use crate::schema::{Dataset, NO_DELAY};
use crate::selection::{Dimension, SelectionState};

/// Builds all three tables for one selection.
pub fn aggregate_tables(
    dataset: &Dataset,
    view: &FilteredView<'_>,
    selection: &SelectionState,
    config: &DashboardConfig,
) -> AggregateTables {
    AggregateTables {
        delay_rate_by_city: delay_rate_by_city(dataset, selection, config),
        top_refunded_routes: top_refunded_routes(view, config),
        delay_reasons: delay_reasons(view, config),
    }
}

/// Percent of trips delayed per arrival city over the full dataset,
/// descending, with highlight flags from the arrival city selection alone.
pub fn delay_rate_by_city(
    dataset: &Dataset,
    selection: &SelectionState,
    config: &DashboardConfig,
) -> Vec<DelayRateRow> {
    // (total, delayed)
    let mut counts: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
    for r in dataset.records() {
        let entry = counts.entry(r.city_end.as_str()).or_default();
        entry.0 += 1;
        if r.is_delayed() {
            entry.1 += 1;
        }
    }

    let highlighted: HashSet<&str> =
        apply_dimension(dataset, Dimension::CityEnd, &selection.city_end)
            .iter()
            .map(|r| r.city_end.as_str())
            .collect();

    let mut rows: Vec<DelayRateRow> = counts
        .into_iter()
        .map(|(city, (total, delayed))| {
            let is_highlighted = highlighted.contains(city);
            DelayRateRow {
                label: city.to_string(),
                value: percentage(delayed, total, 1),
                highlighted: is_highlighted,
                color: if is_highlighted {
                    config.highlight_color.clone()
                } else {
                    config.base_color.clone()
                },
            }
        })
        .collect();

    // Stable sort keeps cities with equal rates in name order.
    rows.sort_by(|a, b| desc(a.value, b.value));
    rows
}

/// Refund totals per route over refunded trips, limited to the largest
/// `config.top_routes` and returned smallest first.
pub fn top_refunded_routes(view: &FilteredView<'_>, config: &DashboardConfig) -> Vec<RankedRow> {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for r in view.iter().filter(|r| r.is_refunded()) {
        *totals.entry(r.route.as_str()).or_default() += r.price;
    }

    let mut ranked: Vec<(&str, f64)> = totals.into_iter().collect();
    ranked.sort_by(|a, b| desc(a.1, b.1));
    ranked.truncate(config.top_routes);
    ranked.sort_by(|a, b| asc(a.1, b.1));

    ranked
        .into_iter()
        .map(|(route, total)| RankedRow {
            label: route.to_string(),
            value: total,
            color: config.series_color.clone(),
        })
        .collect()
}

/// Trip counts per delay reason (on-time trips excluded), ascending.
pub fn delay_reasons(view: &FilteredView<'_>, config: &DashboardConfig) -> Vec<RankedRow> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for r in view.iter().filter(|r| r.delay_reason != NO_DELAY) {
        *counts.entry(r.delay_reason.as_str()).or_default() += 1;
    }

    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    ranked.sort_by_key(|&(_, count)| count);

    ranked
        .into_iter()
        .map(|(reason, count)| RankedRow {
            label: reason.to_string(),
            value: count as f64,
            color: config.series_color.clone(),
        })
        .collect()
}

fn asc(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

fn desc(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}
