//! Time-Range Selector
//!
//! The modal used to classify offline time. It is modelled as an explicit
//! state object so it can be driven and tested without any UI:
//!
//! ```text
//!   Closed ──open(seed)──▶ Open(editing) ──cancel──────────▶ Closed
//!                               │
//!                               └──confirm ─▶ SelectionResult, host close ─▶ Closed
//! ```
//!
//! # Example
//!
//! ```rust
//! use hourglass::selector::{ClassificationLabel, Handle, TimeRangeSelector};
//!
//! let mut selector = TimeRangeSelector::new();
//! selector.open(Some("10:00"), Some("10:05")).unwrap();
//! selector.drag(Handle::End, 630).unwrap();
//! selector.set_label(ClassificationLabel::Unproductive).unwrap();
//! selector.set_description("lunch").unwrap();
//!
//! let result = selector.confirm().unwrap();
//! assert_eq!(result.adjusted_time_range.end, "10:30");
//! selector.close();
//! ```

pub mod error;
pub mod state;
pub mod types;

pub use error::{SelectorError, SelectorResult};
pub use state::{confirm, initialize_range, Selection, SelectorPhase, TimeRangeSelector};
pub use types::{AdjustedTimeRange, ClassificationLabel, Handle, SelectionResult};
