//! Toggle group implementation for replaced checkboxes.
//!
//! This module provides [`ToggleGroup`], a non-visual coordinator that owns
//! the checked state of a fixed set of label/checkbox pairs and keeps a
//! running count of checked items.
//!
//! # Example
//!
//! ```
//! use checklist::widgets::{ToggleGroup, ToggleGroupConfig, ToggleItem};
//!
//! let mut group = ToggleGroup::new(
//!     [
//!         ToggleItem::new("1", false),
//!         ToggleItem::new("42", true),
//!         ToggleItem::new("7", false),
//!     ],
//!     ToggleGroupConfig::default(),
//! );
//! assert_eq!(group.checked_count(), 1);
//!
//! group.count_changed.connect(|&count| {
//!     println!("{count} selected");
//! });
//!
//! group.set_checked(["1", "7"]);
//! assert_eq!(group.checked_values(), vec!["1", "7"]);
//! ```

use std::collections::HashSet;

use checklist_core::Signal;
use checklist_core::logging::targets;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Class names and behavior flags for a [`ToggleGroup`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToggleGroupConfig {
    /// Class an input must carry to be replaced by [`ToggleGroup::replace`].
    pub check_class: String,
    /// Class assigned to the labels of checked items.
    pub on_class: String,
    /// Class assigned to the labels of unchecked items.
    pub off_class: String,
    /// Class assigned to the container while no item is checked.
    pub none_class: String,
    /// When true, user clicks do not change any item.
    pub readonly: bool,
}

impl Default for ToggleGroupConfig {
    fn default() -> Self {
        Self {
            check_class: "checkreplace".to_string(),
            on_class: "check".to_string(),
            off_class: "uncheck".to_string(),
            none_class: "nonechecked".to_string(),
            readonly: false,
        }
    }
}

impl ToggleGroupConfig {
    /// Set read-only mode using builder pattern.
    pub fn with_readonly(mut self, readonly: bool) -> Self {
        self.readonly = readonly;
        self
    }

    /// Set the class required on replaceable inputs using builder pattern.
    pub fn with_check_class(mut self, class: impl Into<String>) -> Self {
        self.check_class = class.into();
        self
    }

    /// Set the checked/unchecked label classes using builder pattern.
    pub fn with_state_classes(mut self, on: impl Into<String>, off: impl Into<String>) -> Self {
        self.on_class = on.into();
        self.off_class = off.into();
        self
    }

    /// Set the "nothing checked" container class using builder pattern.
    pub fn with_none_class(mut self, class: impl Into<String>) -> Self {
        self.none_class = class.into();
        self
    }
}

/// A raw checkbox as found in the host document, before replacement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckboxInput {
    /// The checkbox value.
    pub value: String,
    /// Whether the checkbox is initially checked.
    pub checked: bool,
    /// Text of the label preceding the checkbox, if any.
    pub label: Option<String>,
    /// Classes carried by the checkbox.
    pub classes: Vec<String>,
}

impl CheckboxInput {
    /// Create an input with a value and no label or classes.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    /// Set the initial checked state using builder pattern.
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Set the preceding label using builder pattern.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Add a class using builder pattern.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// One binary item in a [`ToggleGroup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleItem {
    value: String,
    label: Option<String>,
    checked: bool,
    /// Supplied by the presentation layer; consulted by `check_all(true)`.
    visible: bool,
}

impl ToggleItem {
    /// Create a visible item with a value and initial state.
    pub fn new(value: impl Into<String>, checked: bool) -> Self {
        Self {
            value: value.into(),
            label: None,
            checked,
            visible: true,
        }
    }

    /// Set the display label using builder pattern.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// The item's stable identifier.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The display label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Whether the item is checked.
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Whether the presentation layer currently shows this item.
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// A non-visual coordinator for a fixed set of binary toggles.
///
/// `ToggleGroup` owns the checked state of its items. The checked count is
/// maintained by every mutating operation and always equals the number of
/// checked items.
///
/// # Read-only Mode
///
/// When the group is read-only, the user-interaction entry points
/// ([`click`](Self::click) and [`toggle`](Self::toggle)) leave items
/// unchanged. Bulk operations are programmatic and still apply.
///
/// # Signals
///
/// - `count_changed(usize)`: Emitted exactly once after every public
///   mutating operation completes, with the new checked count. Slots run
///   synchronously and must not call back into the same group.
pub struct ToggleGroup {
    items: Vec<ToggleItem>,
    checked_count: usize,
    config: ToggleGroupConfig,

    /// Signal emitted with the checked count after each state change.
    pub count_changed: Signal<usize>,
}

impl ToggleGroup {
    /// Create a group over the given items.
    pub fn new(items: impl IntoIterator<Item = ToggleItem>, config: ToggleGroupConfig) -> Self {
        let items: Vec<ToggleItem> = items.into_iter().collect();
        let checked_count = items.iter().filter(|item| item.checked).count();
        tracing::debug!(
            target: targets::TOGGLE,
            items = items.len(),
            checked_count,
            readonly = config.readonly,
            "toggle group created"
        );
        Self {
            items,
            checked_count,
            config,
            count_changed: Signal::new(),
        }
    }

    /// Create a group by replacing raw checkbox inputs.
    ///
    /// Only inputs that carry the configured `check_class` and have a label
    /// become members; all other inputs are left alone.
    pub fn replace(
        inputs: impl IntoIterator<Item = CheckboxInput>,
        config: ToggleGroupConfig,
    ) -> Self {
        let items: Vec<ToggleItem> = inputs
            .into_iter()
            .filter(|input| input.has_class(&config.check_class))
            .filter_map(|input| {
                let label = input.label?;
                Some(ToggleItem::new(input.value, input.checked).with_label(label))
            })
            .collect();
        Self::new(items, config)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// The group's configuration.
    pub fn config(&self) -> &ToggleGroupConfig {
        &self.config
    }

    /// Whether user interaction is disabled.
    pub fn is_readonly(&self) -> bool {
        self.config.readonly
    }

    /// Number of items in the group.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the group has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All items, in construction order.
    pub fn items(&self) -> &[ToggleItem] {
        &self.items
    }

    /// The item at `index`, if any.
    pub fn item(&self, index: usize) -> Option<&ToggleItem> {
        self.items.get(index)
    }

    /// The number of checked items.
    pub fn checked_count(&self) -> usize {
        self.checked_count
    }

    /// Whether no item is checked.
    pub fn is_none_checked(&self) -> bool {
        self.checked_count == 0
    }

    /// Values of the checked items, in construction order.
    pub fn checked_values(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter(|item| item.checked)
            .map(ToggleItem::value)
            .collect()
    }

    // =========================================================================
    // Presentation State
    // =========================================================================

    /// The label class for the item at `index`: `on_class` when checked,
    /// `off_class` otherwise.
    pub fn label_class(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(|item| {
            if item.checked {
                self.config.on_class.as_str()
            } else {
                self.config.off_class.as_str()
            }
        })
    }

    /// Classes the container should carry for the current state.
    pub fn container_classes(&self) -> Vec<&str> {
        let mut classes = Vec::new();
        if self.config.readonly {
            classes.push("readonly");
        }
        if self.is_none_checked() {
            classes.push(self.config.none_class.as_str());
        }
        classes
    }

    /// Record whether the presentation layer shows the item at `index`.
    pub fn set_visible(&mut self, index: usize, visible: bool) -> Result<()> {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })?;
        item.visible = visible;
        Ok(())
    }

    /// Replace the visibility of every item at once.
    ///
    /// `visible` is indexed like the items; missing entries count as hidden.
    pub fn set_visibility(&mut self, visible: &[bool]) {
        for (index, item) in self.items.iter_mut().enumerate() {
            item.visible = visible.get(index).copied().unwrap_or(false);
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Flip the item at `index`, returning its new checked state.
    ///
    /// # Errors
    ///
    /// - [`Error::IndexOutOfRange`] if `index` is not an item.
    /// - [`Error::ReadOnly`] if the group is read-only.
    pub fn toggle(&mut self, index: usize) -> Result<bool> {
        let len = self.items.len();
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }
        if self.config.readonly {
            return Err(Error::ReadOnly);
        }

        let item = &mut self.items[index];
        item.checked = !item.checked;
        let checked = item.checked;
        if checked {
            self.checked_count += 1;
        } else {
            self.checked_count -= 1;
        }

        tracing::debug!(target: targets::TOGGLE, index, checked, "item toggled");
        self.notify();
        Ok(checked)
    }

    /// Handle a user click on the item at `index`.
    ///
    /// Clicks on a read-only group or outside the item list are ignored.
    pub fn click(&mut self, index: usize) {
        if let Err(err) = self.toggle(index) {
            tracing::debug!(target: targets::TOGGLE, index, %err, "click ignored");
        }
    }

    /// Check every item, or only the visible ones when `visible_only` is set.
    ///
    /// Hidden items keep their current state when `visible_only` is set.
    pub fn check_all(&mut self, visible_only: bool) {
        for item in &mut self.items {
            if !visible_only || item.visible {
                item.checked = true;
            }
        }
        self.recount();
        tracing::debug!(
            target: targets::TOGGLE,
            visible_only,
            checked_count = self.checked_count,
            "checked all"
        );
        self.notify();
    }

    /// Uncheck every item.
    pub fn check_none(&mut self) {
        for item in &mut self.items {
            item.checked = false;
        }
        self.checked_count = 0;
        tracing::debug!(target: targets::TOGGLE, "checked none");
        self.notify();
    }

    /// Check exactly the items whose value is in `values`.
    ///
    /// Every other item is unchecked. Values that match no item are ignored,
    /// and duplicates are harmless.
    pub fn set_checked<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let wanted: Vec<S> = values.into_iter().collect();
        let wanted: HashSet<&str> = wanted.iter().map(AsRef::as_ref).collect();

        for item in &mut self.items {
            item.checked = wanted.contains(item.value.as_str());
        }
        self.recount();
        tracing::debug!(
            target: targets::TOGGLE,
            requested = wanted.len(),
            checked_count = self.checked_count,
            "set checked values"
        );
        self.notify();
    }

    fn recount(&mut self) {
        self.checked_count = self.items.iter().filter(|item| item.checked).count();
    }

    fn notify(&self) {
        debug_assert_eq!(
            self.checked_count,
            self.items.iter().filter(|item| item.checked).count()
        );
        self.count_changed.emit(self.checked_count);
    }
}

impl std::fmt::Debug for ToggleGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToggleGroup")
            .field("items", &self.items)
            .field("checked_count", &self.checked_count)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

// Ensure ToggleGroup is Send + Sync
static_assertions::assert_impl_all!(ToggleGroup: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::sync::Arc;

    fn group(states: &[(&str, bool)]) -> ToggleGroup {
        ToggleGroup::new(
            states
                .iter()
                .map(|&(value, checked)| ToggleItem::new(value, checked)),
            ToggleGroupConfig::default(),
        )
    }

    fn record(group: &ToggleGroup) -> Arc<Mutex<Vec<usize>>> {
        let events = Arc::new(Mutex::new(Vec::new()));
        let events_clone = events.clone();
        group.count_changed.connect(move |&count| {
            events_clone.lock().push(count);
        });
        events
    }

    fn actual_count(group: &ToggleGroup) -> usize {
        group.items().iter().filter(|item| item.is_checked()).count()
    }

    #[test]
    fn test_initial_count() {
        let group = group(&[("1", true), ("2", false), ("3", true)]);
        assert_eq!(group.checked_count(), 2);
        assert_eq!(group.len(), 3);
        assert!(!group.is_none_checked());
    }

    #[test]
    fn test_toggle() {
        let mut group = group(&[("1", false), ("2", false)]);
        let events = record(&group);

        assert!(group.toggle(0).unwrap());
        assert_eq!(group.checked_count(), 1);
        assert!(!group.toggle(0).unwrap());
        assert_eq!(group.checked_count(), 0);

        assert_eq!(*events.lock(), vec![1, 0]);
    }

    #[test]
    fn test_toggle_out_of_range() {
        let mut group = group(&[("1", false)]);
        let events = record(&group);

        let err = group.toggle(5).unwrap_err();
        assert!(matches!(err, Error::IndexOutOfRange { index: 5, len: 1 }));
        assert!(events.lock().is_empty());
    }

    #[test]
    fn test_readonly_blocks_clicks_not_bulk_operations() {
        let mut group = ToggleGroup::new(
            [ToggleItem::new("1", false), ToggleItem::new("2", false)],
            ToggleGroupConfig::default().with_readonly(true),
        );
        let events = record(&group);

        assert!(matches!(group.toggle(0), Err(Error::ReadOnly)));
        group.click(0);
        assert_eq!(group.checked_count(), 0);
        assert!(events.lock().is_empty());

        group.set_checked(["2"]);
        assert_eq!(group.checked_values(), vec!["2"]);
        assert_eq!(*events.lock(), vec![1]);
    }

    #[test]
    fn test_click_out_of_range_is_ignored() {
        let mut group = group(&[("1", false)]);
        let events = record(&group);
        group.click(3);
        assert_eq!(group.checked_count(), 0);
        assert!(events.lock().is_empty());
    }

    #[test]
    fn test_check_all_then_none() {
        let mut group = group(&[("1", false), ("2", true), ("3", false)]);
        let events = record(&group);

        group.check_all(false);
        assert_eq!(group.checked_count(), 3);
        group.check_none();
        assert_eq!(group.checked_count(), 0);
        assert!(group.items().iter().all(|item| !item.is_checked()));

        // One notification per call
        assert_eq!(*events.lock(), vec![3, 0]);
    }

    #[test]
    fn test_check_all_visible_only() {
        let mut group = group(&[("1", false), ("2", true), ("3", false)]);
        group.set_visibility(&[true, false, false]);

        group.check_all(true);
        // Item 2 is hidden but stays checked, item 3 stays unchecked
        assert_eq!(group.checked_values(), vec!["1", "2"]);
        assert_eq!(group.checked_count(), 2);
    }

    #[test]
    fn test_set_visible_out_of_range() {
        let mut group = group(&[("1", false)]);
        assert!(group.set_visible(0, false).is_ok());
        assert!(!group.item(0).unwrap().is_visible());
        assert!(group.set_visible(1, false).is_err());
    }

    #[test]
    fn test_set_checked_is_idempotent() {
        let mut group = group(&[("1", true), ("42", false), ("7", false)]);
        let events = record(&group);

        group.set_checked(["42", "42", "missing"]);
        let once: Vec<bool> = group.items().iter().map(ToggleItem::is_checked).collect();
        group.set_checked(["42", "42", "missing"]);
        let twice: Vec<bool> = group.items().iter().map(ToggleItem::is_checked).collect();

        assert_eq!(once, vec![false, true, false]);
        assert_eq!(once, twice);
        assert_eq!(*events.lock(), vec![1, 1]);
    }

    #[test]
    fn test_count_invariant_over_random_operations() {
        const VALUES: [&str; 6] = ["a", "b", "c", "d", "e", "f"];

        for seed in 0..16 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut group = group(&VALUES.map(|value| (value, rng.gen_bool(0.5))));
            let events = record(&group);

            for _ in 0..200 {
                let before: Vec<bool> = group.items().iter().map(ToggleItem::is_checked).collect();
                let emitted = events.lock().len();

                match rng.gen_range(0..6) {
                    0 => {
                        let visible: Vec<bool> =
                            (0..VALUES.len()).map(|_| rng.gen_bool(0.5)).collect();
                        group.set_visibility(&visible);
                        assert_eq!(events.lock().len(), emitted);
                        continue;
                    }
                    // May fall outside the items
                    1 => group.click(rng.gen_range(0..VALUES.len() + 2)),
                    2 => {
                        group.check_all(true);
                        for (item, was_checked) in group.items().iter().zip(&before) {
                            let expected = *was_checked || item.is_visible();
                            assert_eq!(item.is_checked(), expected, "seed {seed}");
                        }
                    }
                    3 => group.check_all(false),
                    4 => group.check_none(),
                    _ => {
                        let picked: Vec<&str> = VALUES
                            .iter()
                            .copied()
                            .filter(|_| rng.gen_bool(0.3))
                            .collect();
                        group.set_checked(picked);
                    }
                }

                assert_eq!(group.checked_count(), actual_count(&group), "seed {seed}");
                let events = events.lock();
                if events.len() > emitted {
                    assert_eq!(events.len(), emitted + 1, "seed {seed}");
                    assert_eq!(events.last().copied(), Some(group.checked_count()));
                }
            }
        }
    }

    #[test]
    fn test_presentation_classes() {
        let mut group = group(&[("1", false), ("2", true)]);
        assert_eq!(group.label_class(0), Some("uncheck"));
        assert_eq!(group.label_class(1), Some("check"));
        assert_eq!(group.label_class(2), None);
        assert!(group.container_classes().is_empty());

        group.check_none();
        assert_eq!(group.container_classes(), vec!["nonechecked"]);

        let readonly = ToggleGroup::new(
            [ToggleItem::new("1", true)],
            ToggleGroupConfig::default().with_readonly(true),
        );
        assert_eq!(readonly.container_classes(), vec!["readonly"]);
    }

    #[test]
    fn test_replace_only_marked_inputs_with_labels() {
        let group = ToggleGroup::replace(
            [
                CheckboxInput::new("1")
                    .with_label("One")
                    .with_class("checkreplace"),
                CheckboxInput::new("2").with_label("Two"),
                CheckboxInput::new("3").with_class("checkreplace"),
                CheckboxInput::new("4")
                    .with_label("Four")
                    .with_class("checkreplace")
                    .with_checked(true),
            ],
            ToggleGroupConfig::default(),
        );

        let values: Vec<&str> = group.items().iter().map(ToggleItem::value).collect();
        assert_eq!(values, vec!["1", "4"]);
        assert_eq!(group.item(1).unwrap().label(), Some("Four"));
        assert_eq!(group.checked_count(), 1);
    }

    #[test]
    fn test_config_deserialize_defaults() {
        let config: ToggleGroupConfig =
            serde_json::from_str(r#"{"readonly": true, "on_class": "on"}"#).unwrap();
        assert!(config.readonly);
        assert_eq!(config.on_class, "on");
        assert_eq!(config.off_class, "uncheck");
        assert_eq!(config.check_class, "checkreplace");
    }
}
