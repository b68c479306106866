//! Display helpers for tooltips and chart axes

use chrono::NaiveTime;

/// Render an app duration: `"45 s"`, `"2 min"`, `"2 min 5s"`
pub fn format_duration(secs: u32) -> String {
    if secs < 60 {
        return format!("{} s", secs);
    }

    let mins = secs / 60;
    let seconds = secs % 60;
    if seconds > 0 {
        format!("{} min {}s", mins, seconds)
    } else {
        format!("{} min", mins)
    }
}

/// Hourly axis label such as `09AM` or `01PM`; `None` for hours past 23
pub fn hour_label(hour: u32) -> Option<String> {
    NaiveTime::from_hms_opt(hour, 0, 0).map(|t| t.format("%I%p").to_string())
}
