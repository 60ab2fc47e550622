//! Convenient re-exports for common use.
//!
//! ```
//! use checklist::prelude::*;
//! ```

pub use crate::error::{Error, Result};
pub use crate::widgets::{
    Checklist, ChecklistConfig, ChecklistView, Descriptor, FilterOn, FilterRow, ItemFilter,
    ItemFilterConfig, Key, ToggleGroup, ToggleGroupConfig, ToggleItem,
};
pub use checklist_core::{ConnectionId, Signal};
