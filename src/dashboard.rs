//! Tracked Hours Dashboard
//!
//! Host view composing the hourly summary, the 5-minute breakdown and the
//! offline-time selector. Clicking an empty interval opens the selector;
//! saving dispatches the classification as a structured log record.

use crate::clock::{format_minutes, parse_clock_string, ClockError, STEP};
use crate::selector::{SelectionResult, SelectorError, TimeRangeSelector};
use crate::usage::{UsageBucket, UsageError, UsageProvider};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by the dashboard host
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("No interval bucket at {0}")]
    SlotNotFound(String),

    #[error("Selector error: {0}")]
    Selector(#[from] SelectorError),

    #[error("Invalid slot time: {0}")]
    Clock(#[from] ClockError),

    #[error("Usage data error: {0}")]
    Usage(#[from] UsageError),
}

pub type DashboardResult<T> = Result<T, DashboardError>;

/// A saved classification together with the slot that was clicked
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationRequest {
    #[serde(flatten)]
    pub result: SelectionResult,
    pub selected_slot: String,
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    hourly: Vec<UsageBucket>,
    intervals: Vec<UsageBucket>,
    selector: TimeRangeSelector,
    selected_slot: Option<String>,
}

impl Dashboard {
    /// Load both charts from the provider. Data is fetched once and kept
    /// for the lifetime of the dashboard.
    pub fn load(provider: &dyn UsageProvider) -> DashboardResult<Self> {
        let hourly = provider.hourly_buckets()?;
        let intervals = provider.interval_buckets()?;

        tracing::info!(
            hourly = hourly.len(),
            intervals = intervals.len(),
            "Dashboard loaded"
        );

        Ok(Self {
            hourly,
            intervals,
            selector: TimeRangeSelector::new(),
            selected_slot: None,
        })
    }

    pub fn hourly(&self) -> &[UsageBucket] {
        &self.hourly
    }

    pub fn intervals(&self) -> &[UsageBucket] {
        &self.intervals
    }

    /// Interval buckets eligible for manual classification
    pub fn empty_slots(&self) -> impl Iterator<Item = &UsageBucket> {
        self.intervals.iter().filter(|b| b.is_empty())
    }

    pub fn find_interval(&self, time: &str) -> Option<&UsageBucket> {
        self.intervals.iter().find(|b| b.time == time)
    }

    pub fn find_hourly(&self, time: &str) -> Option<&UsageBucket> {
        self.hourly.iter().find(|b| b.time == time)
    }

    pub fn selector(&self) -> &TimeRangeSelector {
        &self.selector
    }

    pub fn selector_mut(&mut self) -> &mut TimeRangeSelector {
        &mut self.selector
    }

    pub fn selected_slot(&self) -> Option<&str> {
        self.selected_slot.as_deref()
    }

    /// Handle a click on an interval bar.
    ///
    /// Returns `true` when the selector opened. Slots with any recorded
    /// activity are ignored.
    pub fn click_interval(&mut self, time: &str) -> DashboardResult<bool> {
        let bucket = self
            .find_interval(time)
            .ok_or_else(|| DashboardError::SlotNotFound(time.to_string()))?;

        if !bucket.is_empty() {
            tracing::debug!(slot = time, "Ignoring click on slot with recorded activity");
            return Ok(false);
        }

        let end = parse_clock_string(time)?
            .checked_add(STEP)
            .map(format_minutes)
            .ok_or_else(|| ClockError::Format(time.to_string()))?;
        self.selector.open(Some(time), Some(&end))?;
        self.selected_slot = Some(time.to_string());
        Ok(true)
    }

    /// Confirm the open selection, log it, and close the selector
    pub fn save(&mut self) -> DashboardResult<ClassificationRequest> {
        let result = self.selector.confirm()?;
        let request = ClassificationRequest {
            result,
            selected_slot: self.selected_slot.take().unwrap_or_default(),
        };

        tracing::info!(
            label = %request.result.label,
            description = %request.result.description,
            start = %request.result.adjusted_time_range.start,
            end = %request.result.adjusted_time_range.end,
            slot = %request.selected_slot,
            "Time request"
        );

        self.selector.close();
        Ok(request)
    }

    /// Dismiss the selector without saving
    pub fn close(&mut self) {
        self.selector.cancel();
        self.selected_slot = None;
    }
}
