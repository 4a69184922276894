use common::{Bar, TrendDirection};

use super::{max_high, min_low};

/// Bars forming the recent leg of the comparison.
const RECENT_BARS: usize = 3;

/// Swing high/low trend classification over a trailing window.
///
/// The last 3 bars form the recent leg; the bars before them within the
/// window form the previous leg. Both swing extremes must strictly rise
/// (fall) for an up (down) call. Ties classify as `Neutral` — strict
/// comparison is intentional.
#[derive(Debug, Clone, Copy)]
pub struct TrendClassifier {
    pub window: usize,
}

impl TrendClassifier {
    pub fn new(window: usize) -> Self {
        assert!(
            window > RECENT_BARS,
            "trend window must leave a non-empty previous leg"
        );
        Self { window }
    }

    /// Classify the trailing `window` bars (oldest first).
    /// Returns `Neutral` when there is not enough history.
    pub fn compute(&self, bars: &[Bar]) -> TrendDirection {
        if bars.len() < self.window {
            return TrendDirection::Neutral;
        }
        let window = &bars[bars.len() - self.window..];
        let (previous, recent) = window.split_at(self.window - RECENT_BARS);

        let recent_high = max_high(recent);
        let previous_high = max_high(previous);
        let recent_low = min_low(recent);
        let previous_low = min_low(previous);

        if recent_high > previous_high && recent_low > previous_low {
            TrendDirection::Up
        } else if recent_high < previous_high && recent_low < previous_low {
            TrendDirection::Down
        } else {
            TrendDirection::Neutral
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{bar, flat_series};

    fn classifier() -> TrendClassifier {
        TrendClassifier::new(10)
    }

    #[test]
    fn neutral_when_insufficient_history() {
        let bars = flat_series(9, 100.0);
        assert_eq!(classifier().compute(&bars), TrendDirection::Neutral);
    }

    #[test]
    fn up_when_both_extremes_rise() {
        let mut bars = flat_series(7, 100.0);
        bars.push(bar(100.3, 100.1, 100.2));
        bars.push(bar(100.4, 100.2, 100.3));
        bars.push(bar(100.5, 100.3, 100.4));
        assert_eq!(classifier().compute(&bars), TrendDirection::Up);
    }

    #[test]
    fn down_when_both_extremes_fall() {
        let mut bars = flat_series(7, 100.0);
        bars.push(bar(99.9, 99.7, 99.8));
        bars.push(bar(99.8, 99.6, 99.7));
        bars.push(bar(99.7, 99.5, 99.6));
        assert_eq!(classifier().compute(&bars), TrendDirection::Down);
    }

    #[test]
    fn neutral_when_highs_rise_but_lows_do_not() {
        let mut bars = flat_series(7, 100.0);
        // Higher highs, but lows dip below the previous leg
        bars.push(bar(100.3, 99.9, 100.1));
        bars.push(bar(100.4, 99.8, 100.0));
        bars.push(bar(100.5, 99.7, 99.9));
        assert_eq!(classifier().compute(&bars), TrendDirection::Neutral);
    }

    #[test]
    fn tie_on_either_side_is_neutral() {
        // Equal highs, rising lows — the high tie blocks an up call
        let mut bars: Vec<_> = (0..7).map(|_| bar(100.5, 100.0, 100.2)).collect();
        bars.push(bar(100.5, 100.1, 100.3));
        bars.push(bar(100.5, 100.2, 100.3));
        bars.push(bar(100.5, 100.3, 100.4));
        assert_eq!(classifier().compute(&bars), TrendDirection::Neutral);

        // A perfectly flat window ties on both sides
        let flat = flat_series(10, 100.0);
        assert_eq!(classifier().compute(&flat), TrendDirection::Neutral);
    }

    #[test]
    fn only_the_trailing_window_is_considered() {
        // Old bars far above the window must not affect the comparison
        let mut bars = vec![bar(200.0, 150.0, 175.0)];
        bars.extend(flat_series(7, 100.0));
        bars.push(bar(100.3, 100.1, 100.2));
        bars.push(bar(100.4, 100.2, 100.3));
        bars.push(bar(100.5, 100.3, 100.4));
        assert_eq!(classifier().compute(&bars), TrendDirection::Up);
    }
}
