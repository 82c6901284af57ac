use colored::{ColoredString, Colorize};

use ruledeck_common::AlertLevel;

/// Numeric label color follows the alert level; the same palette paints the
/// bar fill so both cues always agree.
pub fn level_paint(text: &str, level: AlertLevel) -> ColoredString {
    match level {
        AlertLevel::Normal => text.green(),
        AlertLevel::Warning => text.yellow(),
        AlertLevel::Critical => text.red().bold(),
    }
}

/// Fixed-width usage bar, filled proportionally and capped at 100%.
pub fn usage_bar(usage: f64, level: AlertLevel, width: usize) -> String {
    let capped = usage.clamp(0.0, 100.0);
    let filled = ((capped / 100.0) * width as f64).round() as usize;
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(width - filled));
    format!("{}", level_paint(&bar, level))
}

/// UTC wall-clock rendering of an epoch-seconds timestamp.
pub fn format_clock(epoch_secs: i64) -> String {
    let day_secs = epoch_secs.rem_euclid(86_400);
    format!(
        "{:02}:{:02}:{:02} UTC",
        day_secs / 3600,
        (day_secs % 3600) / 60,
        day_secs % 60
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_fill_is_proportional() {
        let bar = usage_bar(50.0, AlertLevel::Normal, 10);
        assert_eq!(bar.matches('█').count(), 5);
        assert_eq!(bar.matches('░').count(), 5);
    }

    #[test]
    fn bar_caps_at_full_width() {
        let bar = usage_bar(250.0, AlertLevel::Critical, 10);
        assert_eq!(bar.matches('█').count(), 10);
        assert_eq!(bar.matches('░').count(), 0);
    }

    #[test]
    fn clock_renders_utc_time_of_day() {
        // 1700000000 = 2023-11-14 22:13:20 UTC
        assert_eq!(format_clock(1_700_000_000), "22:13:20 UTC");
        assert_eq!(format_clock(0), "00:00:00 UTC");
    }
}
