use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use common::{Bar, Error, MarketDataSource, Result, Timeframe};

const BASE_URL: &str = "https://query1.finance.yahoo.com";

/// REST client for Yahoo Finance's v8 chart API. Pulls historical candles
/// for each scanned pair.
///
/// The endpoint is unauthenticated but rejects requests without a browser
/// User-Agent, and pads gaps in the series with null rows.
pub struct YahooClient {
    http: Client,
}

impl YahooClient {
    pub fn new() -> Self {
        Self {
            http: Client::builder()
                .use_rustls_tls()
                .timeout(Duration::from_secs(30))
                .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
                .build()
                .expect("Failed to build HTTP client"),
        }
    }

    fn chart_url(symbol: &str, timeframe: Timeframe) -> String {
        // Far more history than the widest analysis window needs
        let (range, interval) = match timeframe {
            Timeframe::Hourly => ("60d", "1h"),
            Timeframe::Daily => ("1y", "1d"),
        };
        format!("{BASE_URL}/v8/finance/chart/{symbol}?range={range}&interval={interval}")
    }
}

impl Default for YahooClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarketDataSource for YahooClient {
    async fn fetch_bars(&self, symbol: &str, timeframe: Timeframe) -> Result<Vec<Bar>> {
        let url = Self::chart_url(symbol, timeframe);
        debug!(symbol, timeframe = %timeframe, "Requesting chart data");

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| Error::Http(e.to_string()))?;

        if !status.is_success() {
            return Err(Error::Fetch(format!("{symbol}: HTTP {status}: {body}")));
        }

        let chart: ChartResponse =
            serde_json::from_str(&body).map_err(|e| Error::Fetch(format!("{symbol}: {e}")))?;
        parse_chart(symbol, chart)
    }
}

// ─── Yahoo chart JSON parsing ─────────────────────────────────────────────────

#[derive(Deserialize)]
struct ChartResponse {
    chart: ChartResult,
}

#[derive(Deserialize)]
struct ChartResult {
    result: Option<Vec<ChartData>>,
    error: Option<ChartError>,
}

#[derive(Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Deserialize)]
struct ChartData {
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Deserialize)]
struct Indicators {
    quote: Vec<QuoteData>,
}

#[derive(Deserialize)]
struct QuoteData {
    open: Vec<Option<f64>>,
    high: Vec<Option<f64>>,
    low: Vec<Option<f64>>,
    close: Vec<Option<f64>>,
    volume: Vec<Option<f64>>,
}

fn parse_chart(symbol: &str, resp: ChartResponse) -> Result<Vec<Bar>> {
    let result = match (resp.chart.result, resp.chart.error) {
        (Some(r), _) => r,
        (None, Some(err)) => {
            return Err(Error::Fetch(format!(
                "{symbol}: {} ({})",
                err.description, err.code
            )))
        }
        (None, None) => return Err(Error::Fetch(format!("{symbol}: empty chart response"))),
    };

    let data = result
        .into_iter()
        .next()
        .ok_or_else(|| Error::Fetch(format!("{symbol}: result array is empty")))?;

    let timestamps = data.timestamp.unwrap_or_default();
    let quote = data
        .indicators
        .quote
        .into_iter()
        .next()
        .ok_or_else(|| Error::Fetch(format!("{symbol}: no quote data")))?;

    let mut bars = Vec::with_capacity(timestamps.len());
    for (i, &ts) in timestamps.iter().enumerate() {
        // Yahoo pads gaps with nulls; skip incomplete rows
        let (Some(open), Some(high), Some(low), Some(close)) = (
            quote.open.get(i).copied().flatten(),
            quote.high.get(i).copied().flatten(),
            quote.low.get(i).copied().flatten(),
            quote.close.get(i).copied().flatten(),
        ) else {
            continue;
        };

        let timestamp = Utc
            .timestamp_opt(ts, 0)
            .single()
            .ok_or_else(|| Error::Fetch(format!("{symbol}: invalid timestamp {ts}")))?;

        bars.push(Bar {
            timestamp,
            open,
            high,
            low,
            close,
            volume: quote.volume.get(i).copied().flatten().unwrap_or(0.0),
        });
    }

    Ok(bars)
}
