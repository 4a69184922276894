use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use analysis::ScanConfig;
use common::Config;
use engine::{Scanner, YahooClient};
use telegram_notify::TelegramNotifier;

#[tokio::main]
async fn main() {
    // ── Logging ──────────────────────────────────────────────────────────────
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse().unwrap()))
        .init();

    // ── Config ────────────────────────────────────────────────────────────────
    let cfg = Config::from_env();
    let scan_cfg = ScanConfig::load(&cfg.scanner_config_path);
    info!(
        symbols = scan_cfg.symbols.len(),
        interval_secs = scan_cfg.schedule.scan_interval_secs,
        "RangeBot starting"
    );

    // ── Collaborators ─────────────────────────────────────────────────────────
    let source = Arc::new(YahooClient::new());
    let notifier = Arc::new(TelegramNotifier::new(
        cfg.telegram_token.clone(),
        cfg.telegram_chat_id,
    ));

    // ── Scanner ───────────────────────────────────────────────────────────────
    let (scanner, handle) = Scanner::new(scan_cfg, source, notifier);

    // ── API surface ───────────────────────────────────────────────────────────
    let api_state = api::AppState {
        scanner_state: handle.state_handle(),
        command_tx: handle.command_sender(),
        api_token: cfg.api_token.clone(),
    };

    // ── Spawn tasks ───────────────────────────────────────────────────────────
    let scanner_task = tokio::spawn(scanner.run());
    tokio::spawn(api::serve(api_state, cfg.server_port));

    info!("All subsystems started. Waiting for shutdown signal.");
    tokio::signal::ctrl_c().await.unwrap();

    // Let the scanner finish its cycle and flush the shutdown notification
    info!("Shutdown signal received — stopping scanner.");
    handle.shutdown().await;
    let _ = scanner_task.await;
    info!("Scanner stopped. Exiting.");
}
