use async_trait::async_trait;

use crate::{Bar, Result, Timeframe};

/// Abstraction over the historical price data source.
///
/// `YahooClient` in `crates/engine` implements this for production. Tests
/// substitute in-memory doubles. Only the scanner holds a
/// `dyn MarketDataSource`; detectors operate on plain bar slices.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Fetch bars for one symbol at the given timeframe, oldest first.
    ///
    /// The requested history must cover at least the largest analysis
    /// window; asking for less is a configuration error, not a data error.
    async fn fetch_bars(&self, symbol: &str, timeframe: Timeframe) -> Result<Vec<Bar>>;
}
