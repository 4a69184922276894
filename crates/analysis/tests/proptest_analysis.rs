use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use analysis::detectors::{RangeFinder, TouchDetector, TrendClassifier};
use analysis::{DetectorParams, SignalSynthesizer};
use common::{Bar, Timeframe, TrendDirection};

fn bar(high: f64, low: f64, close: f64) -> Bar {
    Bar {
        timestamp: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
        open: close,
        high,
        low,
        close,
        volume: 0.0,
    }
}

/// A plausible OHLC bar: positive low, bounded spread, close inside the bar.
fn arb_bar() -> impl Strategy<Value = Bar> {
    (0.0001f64..10_000.0, 0.0f64..0.05, 0.0f64..=1.0).prop_map(|(low, spread, pos)| {
        let high = low * (1.0 + spread);
        let close = low + (high - low) * pos;
        bar(high, low, close)
    })
}

proptest! {
    /// Detector evaluations on randomized price series must never panic.
    #[test]
    fn detectors_never_panic_on_arbitrary_series(
        bars in prop::collection::vec(arb_bar(), 0..64),
    ) {
        let _ = RangeFinder::new(20, 0.02).compute(&bars);
        let _ = TrendClassifier::new(10).compute(&bars);
        let _ = TouchDetector::default().support_touched(&bars, 1.2345);
        let _ = TouchDetector::default().resistance_touched(&bars, 1.2345);
        let _ = SignalSynthesizer::new(DetectorParams::default())
            .evaluate("EURUSD=X", Timeframe::Hourly, &bars);
    }

    /// Fewer bars than the window always means "no opinion", whatever the
    /// prices look like.
    #[test]
    fn short_series_never_produce_an_opinion(
        bars in prop::collection::vec(arb_bar(), 0..20),
    ) {
        prop_assert!(RangeFinder::new(20, 0.02).compute(&bars).is_none());
        prop_assert!(SignalSynthesizer::new(DetectorParams::default())
            .evaluate("EURUSD=X", Timeframe::Daily, &bars)
            .is_none());

        let short = &bars[..bars.len().min(9)];
        prop_assert_eq!(TrendClassifier::new(10).compute(short), TrendDirection::Neutral);
    }

    /// A low sitting exactly on the boundary is a touch at any price scale.
    #[test]
    fn exact_boundary_is_always_a_touch(boundary in 0.001f64..100_000.0) {
        let bars = vec![bar(boundary * 1.01, boundary, boundary * 1.001)];
        prop_assert!(TouchDetector::default().support_touched(&bars, boundary));
    }

    /// A low 0.2% above the boundary is never a touch at any price scale.
    #[test]
    fn price_at_1_002x_is_never_a_touch(boundary in 0.001f64..100_000.0) {
        let low = boundary * 1.002;
        let bars = vec![bar(low * 1.01, low, low)];
        prop_assert!(!TouchDetector::default().support_touched(&bars, boundary));
    }

    /// Perfectly flat windows tie on both swing extremes and never trend.
    #[test]
    fn flat_windows_never_trend(price in 0.001f64..100_000.0, n in 10usize..40) {
        let bars: Vec<Bar> = (0..n).map(|_| bar(price, price, price)).collect();
        prop_assert_eq!(TrendClassifier::new(10).compute(&bars), TrendDirection::Neutral);
    }
}
