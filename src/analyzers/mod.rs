//! Summary metrics and chart aggregates over filtered trip views.
//!
//! [`metrics`] computes the five metric cards, [`aggregate`] builds the three
//! ranked chart tables.

pub mod aggregate;
pub mod metrics;
pub mod types;
pub mod utility;
