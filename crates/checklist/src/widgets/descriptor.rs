//! Checkbox descriptors consumed by [`Checklist`](super::Checklist).

use serde::{Deserialize, Serialize};

use super::item_filter::FilterRow;
use crate::error::{Error, Result};

/// One selectable item as supplied by the host.
///
/// Only `value` is required; the label defaults to the value.
///
/// ```
/// use checklist::widgets::Descriptor;
///
/// let items = Descriptor::list_from_json(
///     r#"[{"value": "23", "label": "Robert Smith", "tip": "A nice guy"},
///         {"value": "24", "checked": true}]"#,
/// ).unwrap();
/// assert_eq!(items[0].label_text(), "Robert Smith");
/// assert_eq!(items[1].label_text(), "24");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Descriptor {
    /// Identifier reported for checked items.
    pub value: String,
    /// Display label.
    pub label: Option<String>,
    /// Tooltip attached to the label.
    pub tip: Option<String>,
    /// Title of the row.
    pub title: Option<String>,
    /// Initial checked state.
    #[serde(default)]
    pub checked: bool,
}

impl Descriptor {
    /// Create a descriptor with just a value.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    /// Parse a JSON array of descriptors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for malformed JSON or a missing `value`.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the label using builder pattern.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the tooltip using builder pattern.
    pub fn with_tip(mut self, tip: impl Into<String>) -> Self {
        self.tip = Some(tip.into());
        self
    }

    /// Set the row title using builder pattern.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the initial checked state using builder pattern.
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// The label to display, falling back to the value.
    pub fn label_text(&self) -> &str {
        self.label
            .as_deref()
            .filter(|label| !label.is_empty())
            .unwrap_or(&self.value)
    }
}

/// A row of a checklist body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistRow {
    /// Index of the row's item in the toggle group.
    pub(crate) index: usize,
    pub(crate) value: String,
    pub(crate) label: String,
    pub(crate) tip: Option<String>,
    pub(crate) title: Option<String>,
}

impl ChecklistRow {
    /// Build the row for the descriptor at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingValue`] if the descriptor's value is blank.
    pub(crate) fn from_descriptor(index: usize, descriptor: &Descriptor) -> Result<Self> {
        if descriptor.value.trim().is_empty() {
            return Err(Error::MissingValue { index });
        }
        Ok(Self {
            index,
            value: descriptor.value.clone(),
            label: descriptor.label_text().to_string(),
            tip: descriptor.tip.clone().filter(|tip| !tip.is_empty()),
            title: descriptor.title.clone().filter(|title| !title.is_empty()),
        })
    }

    /// Index of the row's item in the toggle group.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The item value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The label text.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The tooltip, if any.
    pub fn tip(&self) -> Option<&str> {
        self.tip.as_deref()
    }

    /// The row title, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

impl FilterRow for ChecklistRow {
    fn value(&self) -> Option<&str> {
        Some(&self.value)
    }

    // The tooltip marker carries no text, so the row text is the label.
    fn text(&self) -> &str {
        &self.label
    }

    fn label(&self) -> Option<&str> {
        Some(&self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_falls_back_to_value() {
        assert_eq!(Descriptor::new("42").label_text(), "42");
        assert_eq!(Descriptor::new("42").with_label("").label_text(), "42");
        assert_eq!(Descriptor::new("42").with_label("Ann").label_text(), "Ann");
    }

    #[test]
    fn test_blank_value_is_rejected() {
        let err = ChecklistRow::from_descriptor(3, &Descriptor::new("  ")).unwrap_err();
        assert!(matches!(err, Error::MissingValue { index: 3 }));
    }

    #[test]
    fn test_missing_value_in_json_is_rejected() {
        let err = Descriptor::list_from_json(r#"[{"label": "Ann"}]"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_row_from_descriptor() {
        let descriptor = Descriptor::new("23")
            .with_label("Robert Smith")
            .with_tip("A nice guy")
            .with_title("");
        let row = ChecklistRow::from_descriptor(0, &descriptor).unwrap();

        assert_eq!(row.value(), "23");
        assert_eq!(row.label(), "Robert Smith");
        assert_eq!(row.tip(), Some("A nice guy"));
        assert_eq!(row.title(), None);
        assert_eq!(FilterRow::text(&row), "Robert Smith");
    }
}
