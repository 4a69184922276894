use common::{Direction, Signal};

/// Render a signal as a Telegram-ready HTML message.
///
/// Prices print with 5 decimals, which covers both 1.xxxxx majors and
/// 15x.xx JPY pairs. The Yahoo `=X` suffix is stripped from the pair name.
pub fn format_signal(signal: &Signal) -> String {
    let (emoji, direction_emoji, trend_line, action_line) = match signal.direction {
        Direction::Long => (
            "🚀",
            "📈",
            "Uptrend confirmed (rising highs and lows)",
            "Range support touched",
        ),
        Direction::Short => (
            "🔻",
            "📉",
            "Downtrend confirmed (falling highs and lows)",
            "Range resistance touched",
        ),
    };

    format!(
        "{emoji} <b>FOREX SIGNAL - {direction}</b> {emoji}\n\
         \n\
         📊 Pair: <b>{pair}</b>\n\
         ⏰ Timeframe: <b>{timeframe}</b>\n\
         {direction_emoji} Direction: <b>{direction}</b>\n\
         \n\
         💰 Current price: {current:.5}\n\
         🎯 Entry zone: {entry_low:.5} - {entry_high:.5}\n\
         🟢 Target: {target:.5}\n\
         🔴 Stop loss: {stop:.5}\n\
         \n\
         📍 Support: {support:.5}\n\
         📍 Resistance: {resistance:.5}\n\
         \n\
         ✅ Conditions met:\n\
         - {trend_line}\n\
         - Price inside the range\n\
         - {action_line}\n\
         \n\
         ⏰ {timestamp}",
        direction = signal.direction,
        pair = signal.symbol.replace("=X", ""),
        timeframe = signal.timeframe,
        current = signal.current_price,
        entry_low = signal.entry_low,
        entry_high = signal.entry_high,
        target = signal.target,
        stop = signal.stop_loss,
        support = signal.support,
        resistance = signal.resistance,
        timestamp = signal.generated_at.format("%Y-%m-%d %H:%M:%S"),
    )
}
