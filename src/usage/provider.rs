//! Usage providers
//!
//! The dashboard never owns its data. It asks a `UsageProvider` once at
//! load time, so tests can hand in fixed buckets while the binary uses
//! generated ones.

use super::error::{UsageError, UsageResult};
use super::format::hour_label;
use super::types::{default_app_usage, UsageBucket};
use crate::clock::{format_minutes, STEP};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// First and last hour shown on both charts
const FIRST_HOUR: u32 = 9;
const LAST_HOUR: u32 = 19;

/// Source of bucketed usage for the dashboard
pub trait UsageProvider {
    /// One bucket per hour
    fn hourly_buckets(&self) -> UsageResult<Vec<UsageBucket>>;

    /// One bucket per 5-minute interval
    fn interval_buckets(&self) -> UsageResult<Vec<UsageBucket>>;
}

/// Demo data: a fixed hourly summary and randomly filled intervals
#[derive(Debug, Clone, Default)]
pub struct MockUsageProvider {
    seed: Option<u64>,
}

impl MockUsageProvider {
    /// Intervals differ on every load
    pub fn new() -> Self {
        Self { seed: None }
    }

    /// Intervals are reproducible for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// (productive, neutral, unproductive) for 09AM through 07PM
const HOURLY_SUMMARY: [(u32, u32, u32); 11] = [
    (60, 20, 20),
    (50, 30, 20),
    (40, 30, 30),
    (30, 20, 50),
    (70, 10, 20),
    (50, 25, 25),
    (60, 20, 20),
    (80, 10, 10),
    (50, 30, 20),
    (40, 30, 30),
    (60, 10, 30),
];

impl UsageProvider for MockUsageProvider {
    fn hourly_buckets(&self) -> UsageResult<Vec<UsageBucket>> {
        Ok((FIRST_HOUR..=LAST_HOUR)
            .zip(HOURLY_SUMMARY.iter())
            .filter_map(|(hour, &(productive, neutral, unproductive))| {
                let label = hour_label(hour)?;
                Some(
                    UsageBucket::new(label, productive, neutral, unproductive)
                        .with_app_usage(default_app_usage()),
                )
            })
            .collect())
    }

    fn interval_buckets(&self) -> UsageResult<Vec<UsageBucket>> {
        let mut rng = self.rng();
        let slots_per_hour = 60 / STEP;
        let mut buckets =
            Vec::with_capacity(((LAST_HOUR - FIRST_HOUR + 1) * slots_per_hour) as usize);

        for hour in FIRST_HOUR..=LAST_HOUR {
            for slot in 0..slots_per_hour {
                let label = format_minutes(hour * 60 + slot * STEP);
                buckets.push(
                    UsageBucket::new(
                        label,
                        rng.gen_range(0..2),
                        rng.gen_range(0..2),
                        rng.gen_range(0..2),
                    )
                    .with_app_usage(default_app_usage()),
                );
            }
        }

        tracing::debug!(
            count = buckets.len(),
            empty = buckets.iter().filter(|b| b.is_empty()).count(),
            "Generated mock interval buckets"
        );

        Ok(buckets)
    }
}

/// On-disk layout for fixture files
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UsageFixture {
    #[serde(default)]
    pub hourly: Vec<UsageBucket>,
    #[serde(default)]
    pub intervals: Vec<UsageBucket>,
}

/// Fixed buckets, from memory or a JSON file
#[derive(Debug, Clone, Default)]
pub struct FixtureUsageProvider {
    fixture: UsageFixture,
}

impl FixtureUsageProvider {
    pub fn new(hourly: Vec<UsageBucket>, intervals: Vec<UsageBucket>) -> Self {
        Self {
            fixture: UsageFixture { hourly, intervals },
        }
    }

    /// Load a fixture file shaped like `{"hourly": [...], "intervals": [...]}`
    pub fn from_json_file(path: &Path) -> UsageResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| UsageError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let fixture: UsageFixture =
            serde_json::from_str(&content).map_err(|e| UsageError::Parse {
                path: path.to_path_buf(),
                error: e.to_string(),
            })?;

        tracing::info!(
            "Loaded usage fixture from {:?} ({} hourly, {} interval buckets)",
            path,
            fixture.hourly.len(),
            fixture.intervals.len()
        );

        Ok(Self { fixture })
    }
}

impl UsageProvider for FixtureUsageProvider {
    fn hourly_buckets(&self) -> UsageResult<Vec<UsageBucket>> {
        Ok(self.fixture.hourly.clone())
    }

    fn interval_buckets(&self) -> UsageResult<Vec<UsageBucket>> {
        Ok(self.fixture.intervals.clone())
    }
}
