use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Result;

/// One OHLC price observation at a timestamp, as returned by the data source.
/// A series is a `Vec<Bar>` ordered oldest-first; window slicing relies on
/// that ordering ("the last N bars" must be the most recent N).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    /// Carried from the source; the detectors do not use it.
    pub volume: f64,
}

/// Candle interval a pair is scanned on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    Hourly,
    Daily,
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Timeframe::Hourly => write!(f, "1h"),
            Timeframe::Daily => write!(f, "1d"),
        }
    }
}

/// Consolidation band identified over a trailing window of a series.
/// Only materialized when the relative width is within tolerance, so
/// `support > 0` and `resistance >= support` always hold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub support: f64,
    pub resistance: f64,
}

impl PriceRange {
    /// Width of the band relative to its support.
    pub fn relative_width(&self) -> f64 {
        (self.resistance - self.support) / self.support
    }

    /// Whether `price` sits inside the band, bounds included.
    pub fn contains(&self, price: f64) -> bool {
        self.support <= price && price <= self.resistance
    }
}

/// Directional bias read from swing high/low progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    Up,
    Down,
    /// No strict dominance on both sides — includes ties and short windows.
    Neutral,
}

/// Side of an emitted signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Long,
    Short,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Long => write!(f, "LONG"),
            Direction::Short => write!(f, "SHORT"),
        }
    }
}

/// A trade idea emitted when trend, range and edge touch align on one
/// (symbol, timeframe) cell. Created only by the synthesizer, never mutated,
/// handed to the notifier at most once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub symbol: String,
    pub timeframe: Timeframe,
    pub direction: Direction,
    pub current_price: f64,
    pub support: f64,
    pub resistance: f64,
    pub entry_low: f64,
    pub entry_high: f64,
    pub target: f64,
    pub stop_loss: f64,
    pub generated_at: DateTime<Utc>,
}

/// Current phase of the scanner loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScannerState {
    #[default]
    Idle,
    Scanning,
    Dispatching,
    Stopped,
}

impl std::fmt::Display for ScannerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScannerState::Idle => write!(f, "idle"),
            ScannerState::Scanning => write!(f, "scanning"),
            ScannerState::Dispatching => write!(f, "dispatching"),
            ScannerState::Stopped => write!(f, "stopped"),
        }
    }
}

/// Commands sent to the scanner via its command channel.
#[derive(Debug)]
pub enum ScanCommand {
    /// Run one scan cycle now and reply with the dispatched-signal count.
    Trigger {
        reply: tokio::sync::oneshot::Sender<Result<usize>>,
    },
    /// Finish the in-flight cycle (if any) and stop the loop.
    Shutdown,
}
