pub mod format;
pub mod notifier;

pub use format::format_signal;
pub use notifier::TelegramNotifier;
