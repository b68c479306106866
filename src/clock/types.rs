//! Minute-offset time values and their clock-string form
//!
//! - `parse_clock_string` / `format_minutes`: `"HH:MM"` <-> minutes since midnight
//! - `snap_to_slider`: clamp and round a value onto the slider grid
//! - `TimeRange`: the two-handle interval edited by the selector

use super::error::{ClockError, ClockResult};
use serde::{Deserialize, Serialize};

/// Lower slider bound, 09:00
pub const MIN: u32 = 540;

/// Upper slider bound, 19:00
pub const MAX: u32 = 1140;

/// Slider granularity in minutes
pub const STEP: u32 = 5;

/// Parse an `HH:MM` clock string into minutes since midnight.
///
/// Only the shape is checked: exactly one `:` separating two unsigned
/// integers. Hours and minutes are not range-checked here; interactive
/// adjustment clamps later.
pub fn parse_clock_string(s: &str) -> ClockResult<u32> {
    let format_err = || ClockError::Format(s.to_string());

    let (hours, minutes) = s.split_once(':').ok_or_else(format_err)?;
    if minutes.contains(':') {
        return Err(format_err());
    }

    let hours: u32 = hours.parse().map_err(|_| format_err())?;
    let minutes: u32 = minutes.parse().map_err(|_| format_err())?;

    hours
        .checked_mul(60)
        .and_then(|h| h.checked_add(minutes))
        .ok_or_else(format_err)
}

/// Format minutes since midnight as a zero-padded `HH:MM` string
pub fn format_minutes(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Clamp a value into `[MIN, MAX]` and round it to the nearest `STEP`
/// measured from `MIN`.
pub fn snap_to_slider(minutes: u32) -> u32 {
    if minutes <= MIN {
        return MIN;
    }
    if minutes >= MAX {
        return MAX;
    }

    let steps = (minutes - MIN + STEP / 2) / STEP;
    (MIN + steps * STEP).min(MAX)
}

/// Closed interval of minutes since midnight
///
/// No ordering is enforced: `start > end` is representable so that
/// direct `set_values` calls behave exactly as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeRange {
    /// Left handle, minutes since midnight
    pub start: u32,
    /// Right handle, minutes since midnight
    pub end: u32,
}

impl TimeRange {
    /// Create a range from raw handle values
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Parse both bounds from clock strings
    pub fn parse(start: &str, end: &str) -> ClockResult<Self> {
        Ok(Self {
            start: parse_clock_string(start)?,
            end: parse_clock_string(end)?,
        })
    }

    /// True when the handles are out of order
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    /// Length in minutes; zero for inverted ranges
    pub fn duration_minutes(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// Check whether both handles sit inside `[MIN, MAX]` on the step grid
    pub fn is_on_slider(&self) -> bool {
        [self.start, self.end]
            .iter()
            .all(|&v| (MIN..=MAX).contains(&v) && (v - MIN) % STEP == 0)
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {}",
            format_minutes(self.start),
            format_minutes(self.end)
        )
    }
}
