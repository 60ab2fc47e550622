//! Headless render model for [`Checklist`](super::Checklist).
//!
//! A [`ChecklistView`] is a plain snapshot of the regions a presentation layer
//! should draw. It holds no references back into the widget and serializes to
//! JSON for hosts that render elsewhere.

use serde::Serialize;

/// Every region of a rendered checklist. Optional regions are `None` when
/// the configuration hides them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecklistView {
    pub frame: FrameView,
    pub header: Option<HeaderView>,
    pub search: Option<SearchView>,
    pub body: BodyView,
    pub summary: Option<SummaryView>,
    pub footer: Option<FooterView>,
}

impl ChecklistView {
    /// Serialize the view to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`](crate::Error::Config) if serialization fails.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// The outer frame wrapping all regions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameView {
    /// Element id, `{id}-frame`.
    pub id: String,
    /// The frame class followed by state classes (`readonly`, none-checked).
    pub classes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderView {
    pub class: String,
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchView {
    pub class: String,
    /// Displayed text, which is the placeholder while idle.
    pub text: String,
    pub color: String,
}

/// The list of visible rows, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BodyView {
    pub class: String,
    pub rows: Vec<RowView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    pub value: String,
    pub label: String,
    pub tip: Option<String>,
    pub title: Option<String>,
    /// Label class reflecting the checked state.
    pub class: String,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryView {
    pub class: String,
    /// `"{count} selected"`.
    pub text: String,
}

/// The select all/none links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterView {
    pub class: String,
    pub all_label: String,
    pub none_label: String,
}
