use async_trait::async_trait;

use crate::{Result, Signal};

/// Abstraction over the outbound messaging channel.
///
/// `TelegramNotifier` in `crates/telegram` implements this for production.
/// Sends are at-least-once best-effort: a failure is reported to the caller,
/// which logs it and drops the message — there is no retry queue.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send a plain text message. Simple HTML markup (bold, line breaks)
    /// is allowed.
    async fn send_text(&self, text: &str) -> Result<()>;

    /// Format and send one signal.
    async fn send_signal(&self, signal: &Signal) -> Result<()>;
}
