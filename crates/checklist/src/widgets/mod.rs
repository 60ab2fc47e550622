//! Checklist widgets.
//!
//! - [`ToggleGroup`]: checked state and count for a fixed set of toggles
//! - [`ItemFilter`]: case-insensitive prefix search over a row collection
//! - [`Checklist`]: the two combined into a titled, searchable,
//!   summarized list

mod checklist;
mod descriptor;
mod item_filter;
mod toggle_group;
mod view;

pub use checklist::{Checklist, ChecklistConfig};
pub use descriptor::{ChecklistRow, Descriptor};
pub use item_filter::{
    FilterOn, FilterRow, ItemFilter, ItemFilterConfig, Key, SearchBox, TextRow, matches_prefix,
};
pub use toggle_group::{CheckboxInput, ToggleGroup, ToggleGroupConfig, ToggleItem};
pub use view::{
    BodyView, ChecklistView, FooterView, FrameView, HeaderView, RowView, SearchView, SummaryView,
};
