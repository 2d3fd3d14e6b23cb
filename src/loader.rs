//! CSV loader for the trip table.
//!
//! Rows are validated on the way in so a trip whose delay class and delay
//! minutes disagree never reaches the aggregates.

use std::io::Read;
use tracing::{debug, info, warn};

use crate::error::LoadError;
use crate::schema::{Dataset, RawTrip, TripRecord};

/// What to do with rows that fail validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedPolicy {
    /// Fail the whole load on the first malformed row.
    #[default]
    Reject,
    /// Drop malformed rows and keep loading.
    Skip,
}

/// Parses trip rows from any CSV reader with a header line.
pub fn load_trips<R: Read>(reader: R, policy: MalformedPolicy) -> Result<Dataset, LoadError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (index, result) in rdr.deserialize::<RawTrip>().enumerate() {
        // Header is line 1, so data rows start at 2.
        let row = index + 2;
        let raw = result?;
        let trip_id = raw.trip_id.clone();

        match TripRecord::try_from_raw(raw) {
            Ok(record) => records.push(record),
            Err(reason) => match policy {
                MalformedPolicy::Reject => {
                    return Err(LoadError::Malformed {
                        row,
                        trip_id,
                        reason,
                    });
                }
                MalformedPolicy::Skip => {
                    warn!(row, trip_id = %trip_id, reason = %reason, "Skipping malformed trip");
                    skipped += 1;
                }
            },
        }
    }

    if skipped > 0 {
        info!(skipped, "Malformed trips dropped during load");
    }
    debug!(rows = records.len(), "Trip table loaded");

    Ok(Dataset::new(records))
}

/// Parses trip rows from an in-memory CSV body.
pub fn load_trips_from_bytes(bytes: &[u8], policy: MalformedPolicy) -> Result<Dataset, LoadError> {
    load_trips(bytes, policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MalformedReason;
    use crate::schema::RefundFlag;
    use std::io;

    /// Yields the header line, then fails every read.
    struct FailingReader {
        header_sent: bool,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.header_sent {
                return Err(io::Error::new(io::ErrorKind::ConnectionReset, "stream dropped"));
            }
            self.header_sent = true;
            let header = HEADER.as_bytes();
            buf[..header.len()].copy_from_slice(header);
            Ok(header.len())
        }
    }

    const HEADER: &str =
        "Trip ID,City Start,City End,Route,Price,Refund,Delay Class,Delay Reason,Delay\n";

    fn csv(rows: &[&str]) -> String {
        let mut body = HEADER.to_string();
        for row in rows {
            body.push_str(row);
            body.push('\n');
        }
        body
    }

    #[test]
    fn test_load_valid_rows() {
        let body = csv(&[
            "a1,London Euston,Birmingham New Street,London Euston - Birmingham New Street,23,No,No Delay,No Delay,",
            "a2,York,Durham,York - Durham,6.5,Yes,1-15 Mins,Signal Failure,14",
        ]);
        let dataset = load_trips(body.as_bytes(), MalformedPolicy::Reject).unwrap();

        assert_eq!(dataset.len(), 2);
        let first = &dataset.records()[0];
        assert_eq!(first.delay_minutes, None);
        assert_eq!(first.refund, RefundFlag::No);

        let second = &dataset.records()[1];
        assert_eq!(second.delay_minutes, Some(14.0));
        assert_eq!(second.refund, RefundFlag::Yes);
        assert_eq!(second.price, 6.5);
    }

    #[test]
    fn test_reject_reports_row_and_id() {
        let body = csv(&[
            "a1,York,Durham,York - Durham,6.5,No,No Delay,No Delay,",
            "a2,York,Durham,York - Durham,6.5,No,No Delay,No Delay,12",
        ]);

        match load_trips(body.as_bytes(), MalformedPolicy::Reject) {
            Err(LoadError::Malformed {
                row,
                trip_id,
                reason,
            }) => {
                assert_eq!(row, 3);
                assert_eq!(trip_id, "a2");
                assert_eq!(reason, MalformedReason::MinutesWhileOnTime(12.0));
            }
            other => panic!("expected malformed error, got {other:?}"),
        }
    }

    #[test]
    fn test_skip_drops_malformed_rows() {
        let body = csv(&[
            "a1,York,Durham,York - Durham,6.5,No,No Delay,No Delay,",
            "a2,York,Durham,York - Durham,6.5,No,1-15 Mins,Weather,",
        ]);
        let dataset = load_trips(body.as_bytes(), MalformedPolicy::Skip).unwrap();

        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.records()[0].id, "a1");
    }

    #[test]
    fn test_reader_failure_is_csv_error() {
        let reader = FailingReader { header_sent: false };
        match load_trips(reader, MalformedPolicy::Reject) {
            Err(LoadError::Csv(err)) => assert!(err.is_io_error()),
            other => panic!("expected wrapped read error, got {other:?}"),
        }
    }

    #[test]
    fn test_unparseable_price_is_csv_error() {
        let body = csv(&["a1,York,Durham,York - Durham,cheap,No,No Delay,No Delay,"]);
        assert!(matches!(
            load_trips_from_bytes(body.as_bytes(), MalformedPolicy::Skip),
            Err(LoadError::Csv(_))
        ));
    }
}
