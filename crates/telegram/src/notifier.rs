use async_trait::async_trait;
use teloxide::payloads::SendMessageSetters;
use teloxide::prelude::*;
use teloxide::types::ParseMode;
use tracing::debug;

use common::{Error, Notifier, Result, Signal};

use crate::format::format_signal;

/// Sends scanner notifications to a single Telegram chat.
///
/// Failures are returned to the caller, which logs them and drops the
/// message — delivery is best-effort by design.
pub struct TelegramNotifier {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramNotifier {
    pub fn new(token: impl Into<String>, chat_id: i64) -> Self {
        Self {
            bot: Bot::new(token.into()),
            chat_id: ChatId(chat_id),
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send_text(&self, text: &str) -> Result<()> {
        self.bot
            .send_message(self.chat_id, text)
            .parse_mode(ParseMode::Html)
            .await
            .map_err(|e| Error::Notify(e.to_string()))?;
        debug!(chars = text.len(), "Telegram message sent");
        Ok(())
    }

    async fn send_signal(&self, signal: &Signal) -> Result<()> {
        self.send_text(&format_signal(signal)).await
    }
}
