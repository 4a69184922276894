use common::Bar;

/// Relative tolerance for an edge touch: 0.1% of the boundary value.
/// Scaling with the boundary keeps the check meaningful across instruments
/// quoted at very different magnitudes (1.xxxx majors vs 15x.xx JPY pairs).
const TOUCH_TOLERANCE: f64 = 0.001;

/// Detects whether price has recently come within tolerance of a range
/// boundary. Long setups look at lows against support, short setups at
/// highs against resistance.
#[derive(Debug, Clone, Copy)]
pub struct TouchDetector {
    /// How many of the most recent bars to examine.
    pub candles: usize,
}

impl Default for TouchDetector {
    fn default() -> Self {
        Self { candles: 2 }
    }
}

impl TouchDetector {
    pub fn new(candles: usize) -> Self {
        assert!(candles >= 1, "touch detector must examine at least one bar");
        Self { candles }
    }

    /// True if any of the last `candles` lows is within tolerance of
    /// `support`, inclusive.
    pub fn support_touched(&self, bars: &[Bar], support: f64) -> bool {
        self.recent(bars)
            .iter()
            .any(|b| (b.low - support).abs() <= support * TOUCH_TOLERANCE)
    }

    /// True if any of the last `candles` highs is within tolerance of
    /// `resistance`, inclusive.
    pub fn resistance_touched(&self, bars: &[Bar], resistance: f64) -> bool {
        self.recent(bars)
            .iter()
            .any(|b| (b.high - resistance).abs() <= resistance * TOUCH_TOLERANCE)
    }

    fn recent<'a>(&self, bars: &'a [Bar]) -> &'a [Bar] {
        &bars[bars.len().saturating_sub(self.candles)..]
    }
}
