use chrono::Utc;

use common::{Bar, Direction, Signal, Timeframe, TrendDirection};

use crate::config::DetectorParams;
use crate::detectors::{RangeFinder, TouchDetector, TrendClassifier};

/// Width of the entry zone, relative to the touched boundary.
const ENTRY_ZONE_PCT: f64 = 0.002;
/// Stop-loss distance beyond the touched boundary.
const STOP_LOSS_PCT: f64 = 0.005;

/// Composes range identification, trend classification and edge-touch
/// detection into a single pattern-match decision per (symbol, timeframe)
/// cell. All three judgments run against the same series snapshot.
#[derive(Debug, Clone)]
pub struct SignalSynthesizer {
    range: RangeFinder,
    trend: TrendClassifier,
    touch: TouchDetector,
}

impl SignalSynthesizer {
    pub fn new(params: DetectorParams) -> Self {
        Self {
            range: RangeFinder::new(params.range_window, params.range_tolerance),
            trend: TrendClassifier::new(params.trend_window),
            touch: TouchDetector::default(),
        }
    }

    /// Evaluate one series snapshot (oldest bar first).
    ///
    /// Emits at most one signal; the long and short branches are mutually
    /// exclusive because the trend cannot be up and down at once. Anything
    /// short of a full pattern match — too little history, no range, price
    /// outside the band, flat trend, no touch — is `None`.
    pub fn evaluate(&self, symbol: &str, timeframe: Timeframe, bars: &[Bar]) -> Option<Signal> {
        let range = self.range.compute(bars)?;

        let current_price = bars.last()?.close;
        if !range.contains(current_price) {
            return None;
        }

        let direction = match self.trend.compute(bars) {
            TrendDirection::Up if self.touch.support_touched(bars, range.support) => {
                Direction::Long
            }
            TrendDirection::Down if self.touch.resistance_touched(bars, range.resistance) => {
                Direction::Short
            }
            _ => return None,
        };

        let (entry_low, entry_high, target, stop_loss) = match direction {
            Direction::Long => (
                range.support,
                range.support * (1.0 + ENTRY_ZONE_PCT),
                range.resistance,
                range.support * (1.0 - STOP_LOSS_PCT),
            ),
            Direction::Short => (
                range.resistance * (1.0 - ENTRY_ZONE_PCT),
                range.resistance,
                range.support,
                range.resistance * (1.0 + STOP_LOSS_PCT),
            ),
        };

        Some(Signal {
            symbol: symbol.to_string(),
            timeframe,
            direction,
            current_price,
            support: range.support,
            resistance: range.resistance,
            entry_low,
            entry_high,
            target,
            stop_loss,
            generated_at: Utc::now(),
        })
    }
}
