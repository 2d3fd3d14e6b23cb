//! Record builders shared by unit tests.

use crate::schema::{Dataset, NO_DELAY, RefundFlag, TripRecord};

pub fn on_time(id: &str, start: &str, end: &str, price: f64) -> TripRecord {
    TripRecord {
        id: id.to_string(),
        city_start: start.to_string(),
        city_end: end.to_string(),
        route: format!("{start} - {end}"),
        price,
        refund: RefundFlag::No,
        delay_class: NO_DELAY.to_string(),
        delay_reason: NO_DELAY.to_string(),
        delay_minutes: None,
    }
}

pub fn delayed(
    id: &str,
    start: &str,
    end: &str,
    price: f64,
    minutes: f64,
    reason: &str,
) -> TripRecord {
    TripRecord {
        delay_class: "Delayed".to_string(),
        delay_reason: reason.to_string(),
        delay_minutes: Some(minutes),
        ..on_time(id, start, end, price)
    }
}

pub fn refunded(mut record: TripRecord) -> TripRecord {
    record.refund = RefundFlag::Yes;
    record
}

pub fn sample_dataset() -> Dataset {
    Dataset::new(vec![
        on_time("1", "London Kings Cross", "York", 45.0),
        delayed("2", "London Kings Cross", "York", 45.0, 30.0, "Signal Failure"),
        refunded(delayed(
            "3",
            "Manchester Piccadilly",
            "Liverpool Lime Street",
            8.0,
            60.0,
            "Weather",
        )),
        on_time("4", "Manchester Piccadilly", "London Euston", 120.0),
        refunded(delayed("5", "London Paddington", "Reading", 12.5, 15.0, "Signal Failure")),
        on_time("6", "London Paddington", "Reading", 12.5),
    ])
}
