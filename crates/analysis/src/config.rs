use std::time::Duration;

use serde::{Deserialize, Serialize};

use common::Timeframe;

/// Scan configuration file (TOML).
///
/// Example `config/scanner.toml`:
/// ```toml
/// symbols = ["EURUSD=X", "GBPUSD=X"]
/// timeframes = ["hourly", "daily"]
///
/// [params]
/// trend_window = 10
/// range_window = 20
/// range_tolerance = 0.02
///
/// [schedule]
/// scan_interval_secs = 10800
/// error_cooldown_secs = 60
/// dispatch_pacing_secs = 2
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScanConfig {
    /// Symbols in dispatch order, e.g. "EURUSD=X".
    pub symbols: Vec<String>,
    /// Timeframes evaluated per symbol, in order.
    pub timeframes: Vec<Timeframe>,
    #[serde(default)]
    pub params: DetectorParams,
    #[serde(default)]
    pub schedule: Schedule,
}

impl ScanConfig {
    /// Load from a TOML file. Exits process on error.
    pub fn load(path: &str) -> Self {
        let content = std::fs::read_to_string(path).unwrap_or_else(|e| {
            panic!("Failed to read scan config at '{path}': {e}")
        });
        toml::from_str(&content).unwrap_or_else(|e| {
            panic!("Failed to parse scan config at '{path}': {e}")
        })
    }
}

/// Tunable thresholds for the detector pipeline.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(default)]
pub struct DetectorParams {
    /// Bars in the trend classification window. The last 3 form the recent
    /// leg, so this must be at least 4.
    pub trend_window: usize,
    /// Bars in the range identification window.
    pub range_window: usize,
    /// Maximum relative range width, e.g. 0.02 = 2%.
    pub range_tolerance: f64,
}

impl Default for DetectorParams {
    fn default() -> Self {
        Self {
            trend_window: 10,
            range_window: 20,
            range_tolerance: 0.02,
        }
    }
}

/// Scan loop timing.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(default)]
pub struct Schedule {
    /// Pause between scan cycles after a clean cycle.
    pub scan_interval_secs: u64,
    /// Shorter pause before retrying after a cycle-level error.
    pub error_cooldown_secs: u64,
    /// Delay between notification sends, to respect downstream rate limits.
    pub dispatch_pacing_secs: u64,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            scan_interval_secs: 3 * 60 * 60,
            error_cooldown_secs: 60,
            dispatch_pacing_secs: 2,
        }
    }
}

impl Schedule {
    pub fn scan_interval(&self) -> Duration {
        Duration::from_secs(self.scan_interval_secs)
    }

    pub fn error_cooldown(&self) -> Duration {
        Duration::from_secs(self.error_cooldown_secs)
    }

    pub fn dispatch_pacing(&self) -> Duration {
        Duration::from_secs(self.dispatch_pacing_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let cfg: ScanConfig = toml::from_str(
            r#"
            symbols = ["EURUSD=X", "USDJPY=X"]
            timeframes = ["hourly", "daily"]

            [params]
            trend_window = 8
            range_window = 30
            range_tolerance = 0.015

            [schedule]
            scan_interval_secs = 600
            error_cooldown_secs = 30
            dispatch_pacing_secs = 1
            "#,
        )
        .unwrap();

        assert_eq!(cfg.symbols.len(), 2);
        assert_eq!(cfg.timeframes, vec![Timeframe::Hourly, Timeframe::Daily]);
        assert_eq!(cfg.params.range_window, 30);
        assert_eq!(cfg.schedule.scan_interval(), Duration::from_secs(600));
    }

    #[test]
    fn params_and_schedule_default_when_omitted() {
        let cfg: ScanConfig = toml::from_str(
            r#"
            symbols = ["EURUSD=X"]
            timeframes = ["daily"]
            "#,
        )
        .unwrap();

        assert_eq!(cfg.params.trend_window, 10);
        assert_eq!(cfg.params.range_window, 20);
        assert!((cfg.params.range_tolerance - 0.02).abs() < 1e-12);
        assert_eq!(cfg.schedule.scan_interval_secs, 10_800);
        assert_eq!(cfg.schedule.error_cooldown_secs, 60);
    }
}
