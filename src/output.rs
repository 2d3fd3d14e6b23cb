//! Output formatting and persistence for dashboards.
//!
//! Supports logging, JSON export (optionally gzip-compressed) and one CSV per
//! aggregate table.

use anyhow::Result;
use csv::WriterBuilder;
use flate2::Compression;
use flate2::write::GzEncoder;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::analyzers::types::Dashboard;

/// Logs the metric cards and every table row.
pub fn print_pretty(dashboard: &Dashboard) {
    let cards = &dashboard.formatted;
    info!(
        total_trips = %cards.total_trips,
        total_revenue = %cards.total_revenue,
        total_refunds = %cards.total_refunds,
        trips_delayed = %cards.trips_delayed,
        average_delay = %cards.average_delay,
        "Metrics"
    );

    for row in &dashboard.tables.delay_rate_by_city {
        info!(
            city = %row.label,
            percent_delayed = row.value,
            highlighted = row.highlighted,
            "City of Arrival by % of Trips Delayed"
        );
    }
    for row in &dashboard.tables.top_refunded_routes {
        info!(route = %row.label, total_refunds = row.value, "Top Routes by Total Refunds");
    }
    for row in &dashboard.tables.delay_reasons {
        info!(reason = %row.label, trips = row.value, "Reason for Delay by Number of Trips");
    }
}

/// Logs the dashboard as pretty-printed JSON.
pub fn print_json(dashboard: &Dashboard) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(dashboard)?);
    Ok(())
}

/// Writes the dashboard as JSON to `path`, gzip-compressed when `gzip` is set.
pub fn write_json(path: &Path, dashboard: &Dashboard, gzip: bool) -> Result<()> {
    let body = serde_json::to_vec_pretty(dashboard)?;

    let body = if gzip {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&body)?;
        encoder.finish()?
    } else {
        body
    };

    std::fs::write(path, &body)?;
    debug!(path = %path.display(), bytes = body.len(), gzip, "Dashboard written");
    Ok(())
}

/// Writes `rows` to a CSV file with a header line, replacing any existing file.
pub fn write_table_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = WriterBuilder::new().has_headers(true).from_writer(file);

    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    debug!(path = %path.display(), rows = rows.len(), "Table written");
    Ok(())
}

/// Writes the three aggregate tables into `dir`, returning the file paths.
pub fn write_tables(dir: &Path, dashboard: &Dashboard) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;
    let tables = &dashboard.tables;

    let delay_rate = dir.join("delay_rate_by_city.csv");
    write_table_csv(&delay_rate, &tables.delay_rate_by_city)?;

    let refunds = dir.join("top_refunded_routes.csv");
    write_table_csv(&refunds, &tables.top_refunded_routes)?;

    let reasons = dir.join("delay_reasons.csv");
    write_table_csv(&reasons, &tables.delay_reasons)?;

    Ok(vec![delay_rate, refunds, reasons])
}
