//! Usage Data
//!
//! Bucketed, categorised usage shown by the dashboard:
//!
//! - **types**: `UsageBucket`, `AppUsage` and the empty-slot predicate
//! - **provider**: the `UsageProvider` seam with mock and fixture sources
//! - **format**: duration and hour-label helpers for display
//! - **error**: error types

pub mod error;
pub mod format;
pub mod provider;
pub mod types;

pub use error::{UsageError, UsageResult};
pub use format::{format_duration, hour_label};
pub use provider::{FixtureUsageProvider, MockUsageProvider, UsageFixture, UsageProvider};
pub use types::{default_app_usage, AppUsage, AppUsageBreakdown, UsageBucket};
