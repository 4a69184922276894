/// All configuration loaded from environment variables at startup.
/// Missing required variables cause an immediate panic with a clear message.
///
/// Detector parameters and the symbol list live in the TOML scan config
/// (`analysis::ScanConfig`), not here.
#[derive(Debug, Clone)]
pub struct Config {
    // Telegram
    pub telegram_token: String,
    pub telegram_chat_id: i64,

    // HTTP service surface
    pub api_token: String,
    pub server_port: u16,

    // Scan config file path
    pub scanner_config_path: String,
}

impl Config {
    /// Load all configuration from environment variables.
    /// Loads `.env` if present. Panics on any missing required variable.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // ignore error if .env not present

        let telegram_chat_id = required_env("TELEGRAM_CHAT_ID")
            .parse::<i64>()
            .unwrap_or_else(|_| {
                panic!("TELEGRAM_CHAT_ID must be a numeric Telegram chat id")
            });

        Config {
            telegram_token: required_env("TELEGRAM_TOKEN"),
            telegram_chat_id,
            api_token: required_env("API_TOKEN"),
            server_port: optional_env("SERVER_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
            scanner_config_path: optional_env("SCANNER_CONFIG_PATH")
                .unwrap_or_else(|| "config/scanner.toml".to_string()),
        }
    }
}

fn required_env(key: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| {
        panic!("Required environment variable '{key}' is not set. Check your .env file.")
    })
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
