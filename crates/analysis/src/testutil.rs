use chrono::{TimeZone, Utc};

use common::Bar;

/// Bar with the given high/low/close. Detector logic never reads the
/// timestamp or open, so both are filled with placeholders.
pub(crate) fn bar(high: f64, low: f64, close: f64) -> Bar {
    Bar {
        timestamp: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
        open: close,
        high,
        low,
        close,
        volume: 0.0,
    }
}

/// `n` identical bars with high = low = close = `price`.
pub(crate) fn flat_series(n: usize, price: f64) -> Vec<Bar> {
    (0..n).map(|_| bar(price, price, price)).collect()
}
