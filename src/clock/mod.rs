//! Clock Strings and Slider Ranges
//!
//! Times of day are plain minute offsets since midnight. This module
//! converts them to and from zero-padded `HH:MM` strings and defines the
//! bounded interval the range slider works on.
//!
//! ```text
//!   "09:00" ──parse──▶ 540 ──snap/clamp──▶ slider grid [540, 1140] step 5
//!   540 ──format──▶ "09:00"
//! ```

pub mod error;
pub mod types;

pub use error::{ClockError, ClockResult};
pub use types::{
    format_minutes, parse_clock_string, snap_to_slider, TimeRange, MAX, MIN, STEP,
};
