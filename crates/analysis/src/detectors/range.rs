use common::{Bar, PriceRange};

use super::{max_high, min_low};

/// Identifies a consolidation band over a trailing window of bars.
///
/// Returns `None` when there is not enough history or the window is wider
/// than `tolerance` — a "no opinion" result, not an error.
#[derive(Debug, Clone, Copy)]
pub struct RangeFinder {
    pub window: usize,
    /// Maximum `(resistance - support) / support` for the window to count
    /// as a range, e.g. 0.02 = 2%.
    pub tolerance: f64,
}

impl RangeFinder {
    pub fn new(window: usize, tolerance: f64) -> Self {
        assert!(window >= 1, "range window must be >= 1");
        Self { window, tolerance }
    }

    /// Compute the band over the last `window` bars (oldest first).
    pub fn compute(&self, bars: &[Bar]) -> Option<PriceRange> {
        if bars.len() < self.window {
            return None;
        }
        let recent = &bars[bars.len() - self.window..];

        let range = PriceRange {
            support: min_low(recent),
            resistance: max_high(recent),
        };

        if range.relative_width() <= self.tolerance {
            Some(range)
        } else {
            None
        }
    }
}
