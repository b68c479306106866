//! Classification labels and the confirmed-selection payload

use crate::clock::{format_minutes, TimeRange};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Category a user assigns to an offline slot
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum ClassificationLabel {
    #[default]
    Productive,
    Neutral,
    Unproductive,
}

impl ClassificationLabel {
    /// Get all labels in the order the selector offers them
    pub fn all() -> &'static [ClassificationLabel] {
        &[
            ClassificationLabel::Productive,
            ClassificationLabel::Unproductive,
            ClassificationLabel::Neutral,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ClassificationLabel::Productive => "Productive",
            ClassificationLabel::Neutral => "Neutral",
            ClassificationLabel::Unproductive => "Unproductive",
        }
    }
}

impl std::fmt::Display for ClassificationLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClassificationLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "productive" => Ok(ClassificationLabel::Productive),
            "neutral" => Ok(ClassificationLabel::Neutral),
            "unproductive" => Ok(ClassificationLabel::Unproductive),
            other => Err(format!(
                "unknown label '{}' (expected productive, neutral or unproductive)",
                other
            )),
        }
    }
}

/// A time range in clock-string form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdjustedTimeRange {
    pub start: String,
    pub end: String,
}

impl From<TimeRange> for AdjustedTimeRange {
    fn from(range: TimeRange) -> Self {
        Self {
            start: format_minutes(range.start),
            end: format_minutes(range.end),
        }
    }
}

/// Record handed to the host when the user confirms a selection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SelectionResult {
    pub label: ClassificationLabel,
    pub description: String,
    pub adjusted_time_range: AdjustedTimeRange,
}

/// Which slider thumb is being dragged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    Start,
    End,
}
