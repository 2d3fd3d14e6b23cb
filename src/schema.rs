//! Trip record shape and the dataset wrapper shared by every pipeline run.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::MalformedReason;
use crate::selection::Dimension;

/// Sentinel used in both `Delay Class` and `Delay Reason` for on-time trips.
pub const NO_DELAY: &str = "No Delay";

/// Refund state of a trip. The CSV carries `"Yes"` for refunded trips; any
/// other value is treated as not refunded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RefundFlag {
    Yes,
    No,
}

impl RefundFlag {
    pub fn from_csv(value: &str) -> Self {
        if value == "Yes" {
            RefundFlag::Yes
        } else {
            RefundFlag::No
        }
    }
}

/// A single row as it appears in `Trips.csv`, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTrip {
    #[serde(rename = "Trip ID")]
    pub trip_id: String,
    #[serde(rename = "City Start")]
    pub city_start: String,
    #[serde(rename = "City End")]
    pub city_end: String,
    #[serde(rename = "Route")]
    pub route: String,
    #[serde(rename = "Price")]
    pub price: f64,
    #[serde(rename = "Refund")]
    pub refund: String,
    #[serde(rename = "Delay Class")]
    pub delay_class: String,
    #[serde(rename = "Delay Reason")]
    pub delay_reason: String,
    #[serde(rename = "Delay")]
    pub delay: Option<f64>,
}

/// A validated trip. Construct through [`TripRecord::try_from_raw`] (or the
/// loader) so the delay invariant holds:
/// `delay_class == "No Delay"` if and only if `delay_minutes` is `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripRecord {
    pub id: String,
    pub city_start: String,
    pub city_end: String,
    pub route: String,
    pub price: f64,
    pub refund: RefundFlag,
    pub delay_class: String,
    pub delay_reason: String,
    pub delay_minutes: Option<f64>,
}

impl TripRecord {
    /// Validates a raw row, returning the reason it was rejected on failure.
    pub fn try_from_raw(raw: RawTrip) -> Result<Self, MalformedReason> {
        if !(raw.price >= 0.0) {
            return Err(MalformedReason::NegativePrice(raw.price));
        }

        let on_time = raw.delay_class == NO_DELAY;
        match (on_time, raw.delay) {
            (true, Some(minutes)) => return Err(MalformedReason::MinutesWhileOnTime(minutes)),
            (false, None) => return Err(MalformedReason::MissingMinutes(raw.delay_class)),
            (false, Some(minutes)) if !(minutes >= 0.0) => {
                return Err(MalformedReason::NegativeMinutes(minutes));
            }
            _ => {}
        }

        Ok(TripRecord {
            id: raw.trip_id,
            city_start: raw.city_start,
            city_end: raw.city_end,
            route: raw.route,
            price: raw.price,
            refund: RefundFlag::from_csv(&raw.refund),
            delay_class: raw.delay_class,
            delay_reason: raw.delay_reason,
            delay_minutes: raw.delay,
        })
    }

    pub fn is_delayed(&self) -> bool {
        self.delay_class != NO_DELAY
    }

    pub fn is_refunded(&self) -> bool {
        self.refund == RefundFlag::Yes
    }

    /// Value of this record for a filterable dimension.
    pub fn dimension(&self, dimension: Dimension) -> &str {
        match dimension {
            Dimension::CityStart => &self.city_start,
            Dimension::CityEnd => &self.city_end,
        }
    }
}

/// The full trip table. Loaded once and never mutated, so a single instance
/// can back any number of concurrent pipeline runs.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<TripRecord>,
}

impl Dataset {
    pub fn new(records: Vec<TripRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sorted distinct values of `dimension`, as offered in the filter pane.
    pub fn options(&self, dimension: Dimension) -> Vec<String> {
        distinct_sorted(self.records.iter().map(|r| r.dimension(dimension)))
    }

    /// Sorted distinct delay reasons, including the on-time sentinel.
    pub fn delay_reasons(&self) -> Vec<String> {
        distinct_sorted(self.records.iter().map(|r| r.delay_reason.as_str()))
    }
}

fn distinct_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
