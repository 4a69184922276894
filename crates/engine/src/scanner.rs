use std::sync::Arc;

use tokio::sync::{mpsc, oneshot, RwLock};
use tokio::time::{sleep, sleep_until, Instant};
use tracing::{error, info, warn};

use analysis::{ScanConfig, SignalSynthesizer};
use common::{
    Error, MarketDataSource, Notifier, Result, ScanCommand, ScannerState, Signal, Timeframe,
};

/// Cloneable handle passed to other crates (API surface, main).
#[derive(Clone)]
pub struct ScannerHandle {
    command_tx: mpsc::Sender<ScanCommand>,
    state: Arc<RwLock<ScannerState>>,
}

impl ScannerHandle {
    pub async fn state(&self) -> ScannerState {
        *self.state.read().await
    }

    /// Run one scan cycle now and wait for its dispatched-signal count.
    pub async fn trigger_scan(&self) -> Result<usize> {
        let (reply, rx) = oneshot::channel();
        self.command_tx
            .send(ScanCommand::Trigger { reply })
            .await
            .map_err(|_| Error::Other("scanner is not running".into()))?;
        rx.await
            .map_err(|_| Error::Other("scanner dropped the scan request".into()))?
    }

    /// Ask the scanner to finish any in-flight cycle and stop.
    pub async fn shutdown(&self) {
        let _ = self.command_tx.send(ScanCommand::Shutdown).await;
    }

    pub fn command_sender(&self) -> mpsc::Sender<ScanCommand> {
        self.command_tx.clone()
    }

    pub fn state_handle(&self) -> Arc<RwLock<ScannerState>> {
        self.state.clone()
    }
}

/// The scan orchestrator: sweeps the symbol × timeframe grid on a fixed
/// interval and dispatches emitted signals to the notifier.
///
/// Each scanner owns its lifecycle state, so independent instances can run
/// side by side (e.g. in tests) without touching process-wide flags.
pub struct Scanner {
    config: ScanConfig,
    synthesizer: SignalSynthesizer,
    source: Arc<dyn MarketDataSource>,
    notifier: Arc<dyn Notifier>,
    state: Arc<RwLock<ScannerState>>,
    command_rx: mpsc::Receiver<ScanCommand>,
}

impl Scanner {
    pub fn new(
        config: ScanConfig,
        source: Arc<dyn MarketDataSource>,
        notifier: Arc<dyn Notifier>,
    ) -> (Self, ScannerHandle) {
        let (command_tx, command_rx) = mpsc::channel(32);
        let state = Arc::new(RwLock::new(ScannerState::Idle));

        let handle = ScannerHandle {
            command_tx,
            state: state.clone(),
        };

        let synthesizer = SignalSynthesizer::new(config.params);
        let scanner = Scanner {
            config,
            synthesizer,
            source,
            notifier,
            state,
            command_rx,
        };

        (scanner, handle)
    }

    /// Run the scan loop. Call from `tokio::spawn`.
    ///
    /// The first cycle runs immediately; afterwards the loop sleeps for the
    /// scan interval (or the error cooldown after a failed cycle) while
    /// staying responsive to manual triggers and shutdown. An in-flight
    /// cycle always completes before a shutdown is observed.
    pub async fn run(mut self) {
        info!(
            symbols = self.config.symbols.len(),
            timeframes = self.config.timeframes.len(),
            "Scanner starting"
        );

        if let Err(e) = self.notifier.send_text(&startup_text(&self.config)).await {
            warn!(error = %e, "Failed to send startup notification");
        }

        let mut next_cycle = Instant::now();
        loop {
            tokio::select! {
                _ = sleep_until(next_cycle) => {
                    let delay = match self.run_cycle().await {
                        Ok(count) => {
                            info!(signals = count, "Scan cycle complete");
                            self.config.schedule.scan_interval()
                        }
                        Err(e) => {
                            error!(error = %e, "Scan cycle failed — retrying after cooldown");
                            self.config.schedule.error_cooldown()
                        }
                    };
                    next_cycle = Instant::now() + delay;
                }

                cmd = self.command_rx.recv() => match cmd {
                    Some(ScanCommand::Trigger { reply }) => {
                        // Manual trigger; the scheduled cadence is untouched
                        let _ = reply.send(self.run_cycle().await);
                    }
                    Some(ScanCommand::Shutdown) => {
                        info!("Shutdown requested — stopping scanner");
                        if let Err(e) = self.notifier.send_text(SHUTDOWN_TEXT).await {
                            warn!(error = %e, "Failed to send shutdown notification");
                        }
                        break;
                    }
                    None => {
                        warn!("Scanner command channel closed — stopping");
                        break;
                    }
                },
            }
        }

        *self.state.write().await = ScannerState::Stopped;
    }

    /// One full sweep: analyze every grid cell, then dispatch the collected
    /// signals in grid order. Returns the number actually delivered.
    async fn run_cycle(&mut self) -> Result<usize> {
        *self.state.write().await = ScannerState::Scanning;
        info!("Scan cycle starting");

        let total_cells = self.config.symbols.len() * self.config.timeframes.len();
        let mut failed_cells = 0;
        let mut signals: Vec<Signal> = Vec::new();
        for symbol in &self.config.symbols {
            for &timeframe in &self.config.timeframes {
                match analyze_cell(&*self.source, &self.synthesizer, symbol, timeframe).await {
                    Ok(Some(signal)) => {
                        info!(
                            symbol,
                            timeframe = %timeframe,
                            direction = %signal.direction,
                            "Signal found"
                        );
                        signals.push(signal);
                    }
                    Ok(None) => {}
                    Err(e) => {
                        // One bad cell must not abort the sweep
                        warn!(symbol, timeframe = %timeframe, error = %e, "Cell analysis failed");
                        failed_cells += 1;
                    }
                }
            }
        }

        // Every cell failing means the data source is down, not a market
        // condition; surface it so the loop retries on the short cooldown
        if total_cells > 0 && failed_cells == total_cells {
            *self.state.write().await = ScannerState::Idle;
            return Err(Error::Fetch("every cell in the sweep failed".into()));
        }

        *self.state.write().await = ScannerState::Dispatching;
        let mut dispatched = 0;
        for signal in &signals {
            match self.notifier.send_signal(signal).await {
                Ok(()) => dispatched += 1,
                Err(e) => {
                    // Dropped after one attempt; there is no retry queue
                    warn!(symbol = %signal.symbol, error = %e, "Failed to dispatch signal");
                }
            }
            sleep(self.config.schedule.dispatch_pacing()).await;
        }

        *self.state.write().await = ScannerState::Idle;
        Ok(dispatched)
    }
}

/// Fetch and evaluate one (symbol, timeframe) cell. Fetch failures surface
/// here and are contained by the caller.
async fn analyze_cell(
    source: &dyn MarketDataSource,
    synthesizer: &SignalSynthesizer,
    symbol: &str,
    timeframe: Timeframe,
) -> Result<Option<Signal>> {
    let bars = source.fetch_bars(symbol, timeframe).await?;
    Ok(synthesizer.evaluate(symbol, timeframe, &bars))
}

fn startup_text(config: &ScanConfig) -> String {
    let timeframes: Vec<String> = config.timeframes.iter().map(|t| t.to_string()).collect();
    format!(
        "🤖 <b>Forex signal scanner online!</b>\n\n\
         Watching {} pairs on {}.\n\
         📈 Long setups: uptrend into range support\n\
         📉 Short setups: downtrend into range resistance",
        config.symbols.len(),
        timeframes.join(" and ")
    )
}

const SHUTDOWN_TEXT: &str = "⚠️ <b>Forex signal scanner stopped</b>";
