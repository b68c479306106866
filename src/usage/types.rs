//! Core data types for dashboard usage buckets
//!
//! - `UsageBucket`: one bar of the hourly or 5-minute chart
//! - `AppUsage`: time spent in a single app within a category
//! - `AppUsageBreakdown`: per-category app lists shown in tooltips

use crate::selector::ClassificationLabel;
use serde::{Deserialize, Serialize};

/// Time spent in one app, in seconds
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppUsage {
    pub app: String,
    pub duration: u32,
}

impl AppUsage {
    pub fn new(app: impl Into<String>, duration: u32) -> Self {
        Self {
            app: app.into(),
            duration,
        }
    }
}

/// Apps grouped by classification
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppUsageBreakdown {
    #[serde(rename = "Productive", default)]
    pub productive: Vec<AppUsage>,
    #[serde(rename = "Neutral", default)]
    pub neutral: Vec<AppUsage>,
    #[serde(rename = "Unproductive", default)]
    pub unproductive: Vec<AppUsage>,
}

impl AppUsageBreakdown {
    pub fn for_label(&self, label: ClassificationLabel) -> &[AppUsage] {
        match label {
            ClassificationLabel::Productive => &self.productive,
            ClassificationLabel::Neutral => &self.neutral,
            ClassificationLabel::Unproductive => &self.unproductive,
        }
    }
}

/// The breakdown attached to every mock bucket
pub fn default_app_usage() -> AppUsageBreakdown {
    AppUsageBreakdown {
        productive: vec![
            AppUsage::new("stackoverflow.com", 26),
            AppUsage::new("google.com", 60),
            AppUsage::new("chrome", 20),
        ],
        neutral: vec![AppUsage::new("email", 15), AppUsage::new("slack", 10)],
        unproductive: vec![
            AppUsage::new("youtube.com", 45),
            AppUsage::new("facebook.com", 30),
        ],
    }
}

/// One time slot with its per-category amounts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UsageBucket {
    /// Slot label: `09AM` for hourly buckets, `HH:MM` for intervals
    pub time: String,
    #[serde(rename = "Productive")]
    pub productive: u32,
    #[serde(rename = "Neutral")]
    pub neutral: u32,
    #[serde(rename = "Unproductive")]
    pub unproductive: u32,
    #[serde(rename = "appUsage", default)]
    pub app_usage: AppUsageBreakdown,
}

impl UsageBucket {
    pub fn new(
        time: impl Into<String>,
        productive: u32,
        neutral: u32,
        unproductive: u32,
    ) -> Self {
        Self {
            time: time.into(),
            productive,
            neutral,
            unproductive,
            app_usage: AppUsageBreakdown::default(),
        }
    }

    /// Builder: attach an app breakdown
    pub fn with_app_usage(mut self, app_usage: AppUsageBreakdown) -> Self {
        self.app_usage = app_usage;
        self
    }

    /// A slot is empty, and therefore classifiable, when every category is zero
    pub fn is_empty(&self) -> bool {
        self.productive == 0 && self.neutral == 0 && self.unproductive == 0
    }

    pub fn category_total(&self, label: ClassificationLabel) -> u32 {
        match label {
            ClassificationLabel::Productive => self.productive,
            ClassificationLabel::Neutral => self.neutral,
            ClassificationLabel::Unproductive => self.unproductive,
        }
    }

    pub fn total(&self) -> u32 {
        self.productive
            .saturating_add(self.neutral)
            .saturating_add(self.unproductive)
    }

    pub fn apps_for(&self, label: ClassificationLabel) -> &[AppUsage] {
        self.app_usage.for_label(label)
    }
}
