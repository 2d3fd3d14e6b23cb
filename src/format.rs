//! Display strings for metric cards.
//!
//! Counts and money share one threshold scheme:
//!
//! | Range                    | Output         |
//! |--------------------------|----------------|
//! | `< 1_000`                | literal value  |
//! | `1_000 ..< 1_000_000`    | `"{x/1e3:.2} K"` |
//! | `>= 1_000_000`           | `"{x/1e6:.2} M"` |
//!
//! Bounds apply to the value as printed with two decimals, so `999.996`
//! reads `1.00 K` rather than `1000.00`.

use crate::analyzers::types::{AverageDelay, FormattedMetrics, Metrics};
use crate::config::DashboardConfig;

const THOUSAND: f64 = 1_000.0;
const MILLION: f64 = 1_000_000.0;

/// Label shown instead of an average when no trip in the view was delayed.
pub const NO_DELAYS_LABEL: &str = "no delays";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatter {
    pub currency_symbol: String,
    pub percent_decimals: usize,
}

impl Default for Formatter {
    fn default() -> Self {
        Self {
            currency_symbol: "£".to_string(),
            percent_decimals: 1,
        }
    }
}

impl Formatter {
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self {
            currency_symbol: config.currency_symbol.clone(),
            percent_decimals: config.percent_decimals,
        }
    }

    pub fn format_count(&self, count: usize) -> String {
        match scaled(count as f64) {
            Some(short) => short,
            None => count.to_string(),
        }
    }

    pub fn format_money(&self, value: f64) -> String {
        let body = match scaled(value) {
            Some(short) => short,
            None => format!("{value:.2}"),
        };
        format!("{}{}", self.currency_symbol, body)
    }

    pub fn format_percentage(&self, percent: f64) -> String {
        self.format_percentage_with(percent, self.percent_decimals)
    }

    pub fn format_percentage_with(&self, percent: f64, decimal_places: usize) -> String {
        format!("{percent:.decimal_places$} %")
    }

    pub fn format_minutes(&self, average: AverageDelay) -> String {
        match average {
            AverageDelay::NoDelayedRecords => NO_DELAYS_LABEL.to_string(),
            AverageDelay::Minutes(minutes) => format!("{minutes:.1} min"),
        }
    }

    /// Formats every card value of `metrics`.
    pub fn format_metrics(&self, metrics: &Metrics) -> FormattedMetrics {
        FormattedMetrics {
            total_trips: self.format_count(metrics.trip_count),
            total_revenue: self.format_money(metrics.total_revenue),
            total_refunds: self.format_money(metrics.total_refunds),
            trips_delayed: self.format_percentage(metrics.percent_delayed),
            average_delay: self.format_minutes(metrics.average_delay),
        }
    }
}

/// Abbreviates values of a thousand and above, `None` below that.
fn scaled(value: f64) -> Option<String> {
    if hundredths(value / THOUSAND) >= hundredths(THOUSAND) {
        Some(format!("{:.2} M", value / MILLION))
    } else if hundredths(value) >= hundredths(THOUSAND) {
        Some(format!("{:.2} K", value / THOUSAND))
    } else {
        None
    }
}

/// `value` in hundredths after two-decimal rounding.
fn hundredths(value: f64) -> f64 {
    (value * 100.0).round()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_boundaries() {
        let f = Formatter::default();
        assert_eq!(f.format_count(0), "0");
        assert_eq!(f.format_count(30), "30");
        assert_eq!(f.format_count(999), "999");
        assert_eq!(f.format_count(1_000), "1.00 K");
        assert_eq!(f.format_count(1_500), "1.50 K");
        assert_eq!(f.format_count(100_000), "100.00 K");
        assert_eq!(f.format_count(999_994), "999.99 K");
        assert_eq!(f.format_count(999_999), "1.00 M");
        assert_eq!(f.format_count(1_000_000), "1.00 M");
        assert_eq!(f.format_count(2_500_000), "2.50 M");
    }

    #[test]
    fn test_money_uses_currency_prefix() {
        let f = Formatter::default();
        assert_eq!(f.format_money(12.5), "£12.50");
        assert_eq!(f.format_money(1_500.0), "£1.50 K");
        assert_eq!(f.format_money(2_500_000.0), "£2.50 M");

        let dollars = Formatter {
            currency_symbol: "$".to_string(),
            ..Formatter::default()
        };
        assert_eq!(dollars.format_money(999.0), "$999.00");
    }

    #[test]
    fn test_money_rounding_never_crosses_a_bound() {
        let f = Formatter::default();
        assert_eq!(f.format_money(999.99), "£999.99");
        assert_eq!(f.format_money(999.996), "£1.00 K");
        assert_eq!(f.format_money(999_990.0), "£999.99 K");
        assert_eq!(f.format_money(999_999.0), "£1.00 M");
    }

    #[test]
    fn test_percentage_decimal_places() {
        let f = Formatter::default();
        assert_eq!(f.format_percentage(66.7), "66.7 %");
        assert_eq!(f.format_percentage(0.0), "0.0 %");
        assert_eq!(f.format_percentage_with(66.666, 2), "66.67 %");
        assert_eq!(f.format_percentage_with(50.0, 0), "50 %");
    }

    #[test]
    fn test_minutes_and_no_delays() {
        let f = Formatter::default();
        assert_eq!(f.format_minutes(AverageDelay::Minutes(50.0)), "50.0 min");
        assert_eq!(f.format_minutes(AverageDelay::Minutes(12.34)), "12.3 min");
        assert_eq!(f.format_minutes(AverageDelay::NoDelayedRecords), "no delays");
    }

    #[test]
    fn test_format_metrics_maps_every_card() {
        let metrics = Metrics {
            trip_count: 31_653,
            total_revenue: 741_921.0,
            total_refunds: 38_702.0,
            percent_delayed: 7.2,
            average_delay: AverageDelay::NoDelayedRecords,
        };
        let formatted = Formatter::default().format_metrics(&metrics);

        assert_eq!(formatted.total_trips, "31.65 K");
        assert_eq!(formatted.total_revenue, "£741.92 K");
        assert_eq!(formatted.total_refunds, "£38.70 K");
        assert_eq!(formatted.trips_delayed, "7.2 %");
        assert_eq!(formatted.average_delay, "no delays");
    }
}
