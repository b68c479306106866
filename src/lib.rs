//! # Hourglass
//!
//! Tracked Hours - a productivity dashboard model: an hourly summary and a
//! 5-minute breakdown of categorised usage, plus a selector for manually
//! classifying offline time slots.
//!
//! ## Modules
//!
//! - [`clock`]: `HH:MM` <-> minutes conversion and slider bounds
//! - [`selector`]: the offline-time selector state machine
//! - [`usage`]: usage buckets and the providers that supply them
//! - [`dashboard`]: host view wiring charts to the selector
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust
//! use hourglass::dashboard::Dashboard;
//! use hourglass::selector::{ClassificationLabel, Handle};
//! use hourglass::usage::{FixtureUsageProvider, UsageBucket};
//!
//! let provider = FixtureUsageProvider::new(
//!     vec![],
//!     vec![UsageBucket::new("12:00", 0, 0, 0)],
//! );
//! let mut dashboard = Dashboard::load(&provider).unwrap();
//!
//! assert!(dashboard.click_interval("12:00").unwrap());
//! let selector = dashboard.selector_mut();
//! selector.drag(Handle::End, 12 * 60 + 45).unwrap();
//! selector.set_label(ClassificationLabel::Neutral).unwrap();
//!
//! let request = dashboard.save().unwrap();
//! assert_eq!(request.result.adjusted_time_range.end, "12:45");
//! ```

pub mod clock;
pub mod config;
pub mod dashboard;
pub mod selector;
pub mod usage;

// Re-export top-level types for convenience
pub use clock::{format_minutes, parse_clock_string, ClockError, TimeRange};

pub use selector::{
    AdjustedTimeRange, ClassificationLabel, Handle, SelectionResult, SelectorError,
    SelectorPhase, TimeRangeSelector,
};

pub use usage::{
    AppUsage, FixtureUsageProvider, MockUsageProvider, UsageBucket, UsageError, UsageProvider,
};

pub use dashboard::{ClassificationRequest, Dashboard, DashboardError};

pub use config::{Config, ConfigError, LoggingConfig};
