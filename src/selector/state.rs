use super::error::{SelectorError, SelectorResult};
use super::types::{ClassificationLabel, Handle, SelectionResult};
use crate::clock::{parse_clock_string, snap_to_slider, ClockResult, TimeRange};
use serde::{Deserialize, Serialize};

const DEFAULT_START: &str = "09:00";
const DEFAULT_END: &str = "09:05";

/// Build the initial range from an optional host seed.
///
/// Each bound falls back independently when absent or empty. The result is
/// not snapped onto the slider grid; that happens on the first drag.
pub fn initialize_range(start: Option<&str>, end: Option<&str>) -> ClockResult<TimeRange> {
    let start = start.filter(|s| !s.is_empty()).unwrap_or(DEFAULT_START);
    let end = end.filter(|s| !s.is_empty()).unwrap_or(DEFAULT_END);

    Ok(TimeRange::new(
        parse_clock_string(start)?,
        parse_clock_string(end)?,
    ))
}

/// Snapshot a range into the payload delivered to the host
pub fn confirm(
    range: &TimeRange,
    label: ClassificationLabel,
    description: impl Into<String>,
) -> SelectionResult {
    SelectionResult {
        label,
        description: description.into(),
        adjusted_time_range: (*range).into(),
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SelectorPhase {
    Closed,
    Open,
}

/// In-progress edits of an open selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub range: TimeRange,
    pub label: ClassificationLabel,
    pub description: String,
}

impl Selection {
    fn seeded(range: TimeRange) -> Self {
        Self {
            range,
            label: ClassificationLabel::default(),
            description: String::new(),
        }
    }

    /// Build the result from the current edits without changing them
    pub fn confirm(&self) -> SelectionResult {
        confirm(&self.range, self.label, self.description.clone())
    }
}

/// The offline-time selector state machine
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TimeRangeSelector {
    #[default]
    Closed,
    Open(Selection),
}

impl TimeRangeSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SelectorPhase {
        match self {
            TimeRangeSelector::Closed => SelectorPhase::Closed,
            TimeRangeSelector::Open(_) => SelectorPhase::Open,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, TimeRangeSelector::Open(_))
    }

    pub fn selection(&self) -> Option<&Selection> {
        match self {
            TimeRangeSelector::Open(selection) => Some(selection),
            TimeRangeSelector::Closed => None,
        }
    }

    /// Current interval, if open
    pub fn range(&self) -> Option<TimeRange> {
        self.selection().map(|s| s.range)
    }

    fn selection_mut(&mut self) -> SelectorResult<&mut Selection> {
        match self {
            TimeRangeSelector::Open(selection) => Ok(selection),
            TimeRangeSelector::Closed => Err(SelectorError::NotOpen),
        }
    }

    /// Open (or reopen) the selector seeded from the host range.
    ///
    /// Label and description always start fresh. On a parse failure the
    /// selector keeps its previous state.
    pub fn open(&mut self, start: Option<&str>, end: Option<&str>) -> SelectorResult<TimeRange> {
        let range = initialize_range(start, end)?;
        tracing::debug!(%range, "Opening time-range selector");
        *self = TimeRangeSelector::Open(Selection::seeded(range));
        Ok(range)
    }

    /// Replace the interval verbatim.
    ///
    /// Neither clamped nor reordered: an inverted pair stays inverted.
    pub fn set_values(&mut self, start: u32, end: u32) -> SelectorResult<()> {
        let selection = self.selection_mut()?;
        selection.range = TimeRange::new(start, end);
        if selection.range.is_inverted() {
            tracing::warn!(start, end, "Selector range set with start after end");
        }
        Ok(())
    }

    /// Move one thumb as the slider would.
    ///
    /// The value is snapped to the step grid inside `[MIN, MAX]` and cannot
    /// pass the other thumb, which is itself snapped onto the grid.
    pub fn drag(&mut self, handle: Handle, value: u32) -> SelectorResult<TimeRange> {
        let selection = self.selection_mut()?;
        let value = snap_to_slider(value);
        let current = selection.range;

        selection.range = match handle {
            Handle::Start => {
                let end = snap_to_slider(current.end);
                TimeRange::new(value.min(end), end)
            }
            Handle::End => {
                let start = snap_to_slider(current.start);
                TimeRange::new(start, value.max(start))
            }
        };

        tracing::trace!(?handle, range = %selection.range, "Selector thumb moved");
        Ok(selection.range)
    }

    pub fn set_label(&mut self, label: ClassificationLabel) -> SelectorResult<()> {
        self.selection_mut()?.label = label;
        Ok(())
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> SelectorResult<()> {
        self.selection_mut()?.description = description.into();
        Ok(())
    }

    /// Produce the result for the current edits. The selector stays open;
    /// the host closes it once the result has been dispatched.
    pub fn confirm(&self) -> SelectorResult<SelectionResult> {
        self.selection()
            .map(Selection::confirm)
            .ok_or(SelectorError::NotOpen)
    }

    /// Discard all edits without producing a result
    pub fn cancel(&mut self) {
        if self.is_open() {
            tracing::debug!("Selector cancelled");
        }
        *self = TimeRangeSelector::Closed;
    }

    /// Close after a successful save
    pub fn close(&mut self) {
        *self = TimeRangeSelector::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{ClockError, MAX, MIN};

    fn open_at(start: &str, end: &str) -> TimeRangeSelector {
        let mut selector = TimeRangeSelector::new();
        selector.open(Some(start), Some(end)).unwrap();
        selector
    }

    #[test]
    fn test_default_seed() {
        assert_eq!(initialize_range(None, None).unwrap(), TimeRange::new(540, 545));
        assert_eq!(
            initialize_range(Some(""), Some("")).unwrap(),
            TimeRange::new(540, 545)
        );
    }

    #[test]
    fn test_seed_defaults_each_bound() {
        assert_eq!(
            initialize_range(Some("10:00"), None).unwrap(),
            TimeRange::new(600, 545)
        );
        assert_eq!(
            initialize_range(None, Some("11:00")).unwrap(),
            TimeRange::new(540, 660)
        );
    }

    #[test]
    fn test_seed_is_not_clamped() {
        let range = initialize_range(Some("19:30"), Some("19:35")).unwrap();
        assert_eq!(range, TimeRange::new(1170, 1175));
    }

    #[test]
    fn test_seed_format_error() {
        let err = initialize_range(Some("nine"), None).unwrap_err();
        assert_eq!(err, ClockError::Format("nine".to_string()));
    }

    #[test]
    fn test_confirm_payload() {
        let result = confirm(
            &TimeRange::new(600, 630),
            ClassificationLabel::Unproductive,
            "lunch",
        );
        assert_eq!(result.label, ClassificationLabel::Unproductive);
        assert_eq!(result.description, "lunch");
        assert_eq!(result.adjusted_time_range.start, "10:00");
        assert_eq!(result.adjusted_time_range.end, "10:30");
    }

    #[test]
    fn test_starts_closed() {
        let selector = TimeRangeSelector::new();
        assert_eq!(selector.phase(), SelectorPhase::Closed);
        assert!(selector.range().is_none());
        assert_eq!(selector.confirm(), Err(SelectorError::NotOpen));
    }

    #[test]
    fn test_editing_requires_open() {
        let mut selector = TimeRangeSelector::new();
        assert_eq!(selector.set_values(600, 630), Err(SelectorError::NotOpen));
        assert_eq!(selector.drag(Handle::Start, 600), Err(SelectorError::NotOpen));
        assert_eq!(
            selector.set_label(ClassificationLabel::Neutral),
            Err(SelectorError::NotOpen)
        );
        assert_eq!(selector.set_description("x"), Err(SelectorError::NotOpen));
    }

    #[test]
    fn test_confirm_through_selector() {
        let mut selector = open_at("10:00", "10:05");
        selector.set_values(600, 630).unwrap();
        selector.set_label(ClassificationLabel::Unproductive).unwrap();
        selector.set_description("lunch").unwrap();

        let result = selector.confirm().unwrap();
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            serde_json::json!({
                "label": "Unproductive",
                "description": "lunch",
                "adjustedTimeRange": { "start": "10:00", "end": "10:30" }
            })
        );

        // Confirm leaves state untouched
        assert!(selector.is_open());
        assert_eq!(selector.range(), Some(TimeRange::new(600, 630)));

        selector.close();
        assert_eq!(selector.phase(), SelectorPhase::Closed);
    }

    #[test]
    fn test_cancel_discards_edits() {
        let mut selector = open_at("10:00", "10:05");
        selector.set_values(700, 800).unwrap();
        selector.set_label(ClassificationLabel::Neutral).unwrap();
        selector.set_description("meeting").unwrap();

        selector.cancel();
        assert_eq!(selector, TimeRangeSelector::Closed);
        assert_eq!(selector.confirm(), Err(SelectorError::NotOpen));

        selector.open(None, None).unwrap();
        let selection = selector.selection().unwrap();
        assert_eq!(selection.range, TimeRange::new(540, 545));
        assert_eq!(selection.label, ClassificationLabel::Productive);
        assert!(selection.description.is_empty());
    }

    #[test]
    fn test_reopen_reseeds() {
        let mut selector = open_at("10:00", "10:05");
        selector.set_description("stale").unwrap();
        selector.open(Some("11:00"), Some("11:05")).unwrap();

        let selection = selector.selection().unwrap();
        assert_eq!(selection.range, TimeRange::new(660, 665));
        assert!(selection.description.is_empty());
    }

    #[test]
    fn test_open_failure_keeps_state() {
        let mut selector = open_at("10:00", "10:05");
        assert!(selector.open(Some("bad"), None).is_err());
        assert_eq!(selector.range(), Some(TimeRange::new(600, 605)));
    }

    #[test]
    fn test_set_values_does_not_clamp_or_reorder() {
        let mut selector = open_at("10:00", "10:05");

        selector.set_values(700, 600).unwrap();
        let range = selector.range().unwrap();
        assert_eq!(range, TimeRange::new(700, 600));
        assert!(range.is_inverted());

        selector.set_values(100, 2000).unwrap();
        assert_eq!(selector.range(), Some(TimeRange::new(100, 2000)));

        let result = selector.confirm().unwrap();
        assert_eq!(result.adjusted_time_range.start, "01:40");
        assert_eq!(result.adjusted_time_range.end, "33:20");
    }

    #[test]
    fn test_drag_clamps_to_bounds() {
        let mut selector = open_at("10:00", "10:05");

        let range = selector.drag(Handle::End, 5000).unwrap();
        assert_eq!(range.end, MAX);

        let range = selector.drag(Handle::Start, 0).unwrap();
        assert_eq!(range.start, MIN);
        assert_eq!(range, TimeRange::new(MIN, MAX));
    }

    #[test]
    fn test_drag_snaps_to_step() {
        let mut selector = open_at("10:00", "10:05");
        assert_eq!(selector.drag(Handle::End, 632).unwrap(), TimeRange::new(600, 630));
        assert_eq!(selector.drag(Handle::Start, 613).unwrap(), TimeRange::new(615, 630));
    }

    #[test]
    fn test_drag_cannot_cross() {
        let mut selector = open_at("10:00", "10:30");
        assert_eq!(selector.drag(Handle::Start, 700).unwrap(), TimeRange::new(630, 630));

        let mut selector = open_at("10:00", "10:30");
        assert_eq!(selector.drag(Handle::End, 550).unwrap(), TimeRange::new(600, 600));
    }

    #[test]
    fn test_first_drag_snaps_unclamped_seed() {
        let mut selector = open_at("19:30", "19:35");
        let range = selector.drag(Handle::Start, 1100).unwrap();
        assert_eq!(range, TimeRange::new(1100, MAX));
        assert!(range.is_on_slider());
    }
}
