//! Checklist widget implementation.
//!
//! This module provides [`Checklist`], a composite widget that assembles a
//! [`ToggleGroup`] and an [`ItemFilter`] into a titled, searchable list of
//! selectable items with a live "N selected" summary and select-all/none
//! footer actions.
//!
//! # Example
//!
//! ```
//! use checklist::widgets::{Checklist, ChecklistConfig, Descriptor};
//!
//! let mut list = Checklist::new(
//!     [
//!         Descriptor::new("1").with_label("Bill Johnson"),
//!         Descriptor::new("42").with_label("Mark Jones"),
//!         Descriptor::new("7").with_label("Billy Jean"),
//!     ],
//!     ChecklistConfig::default().with_title("Users"),
//! )
//! .unwrap()
//! .with_on_check(|count| println!("{count} selected"));
//!
//! list.set_checked(["42"]);
//! assert_eq!(list.summary_text(), "1 selected");
//! assert_eq!(list.checked_values(), vec!["42"]);
//! ```

use std::fmt;
use std::sync::Arc;

use checklist_core::logging::targets;
use checklist_core::{ConnectionId, Property, Signal};
use serde::{Deserialize, Serialize};

use super::descriptor::{ChecklistRow, Descriptor};
use super::item_filter::{FilterOn, ItemFilter, ItemFilterConfig, Key};
use super::toggle_group::{ToggleGroup, ToggleGroupConfig, ToggleItem};
use super::view::{
    BodyView, ChecklistView, FooterView, FrameView, HeaderView, RowView, SearchView, SummaryView,
};
use crate::error::Result;

/// Which regions a [`Checklist`] shows, and how they are named.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChecklistConfig {
    /// Identifier of the host element; the frame is named `{id}-frame`.
    pub id: String,
    /// Text shown in the header.
    pub title: Option<String>,
    /// Prefix for the class names of the generated regions.
    pub prefix: String,
    /// Show the header region.
    pub header: bool,
    /// Show the search box.
    pub search: bool,
    /// Show the "N selected" summary. Never shown when read-only.
    pub summary: bool,
    /// Show the select all/none footer. Never shown when read-only.
    pub footer: bool,
    /// Disable user changes to the checked state.
    pub readonly: bool,
}

impl Default for ChecklistConfig {
    fn default() -> Self {
        Self {
            id: "checklist".to_string(),
            title: None,
            prefix: "checklist-".to_string(),
            header: true,
            search: true,
            summary: true,
            footer: true,
            readonly: false,
        }
    }
}

impl ChecklistConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`](crate::Error::Config) for malformed JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the host element id using builder pattern.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the header title using builder pattern.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the class name prefix using builder pattern.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Choose which optional regions are shown using builder pattern.
    pub fn with_regions(mut self, header: bool, search: bool, summary: bool, footer: bool) -> Self {
        self.header = header;
        self.search = search;
        self.summary = summary;
        self.footer = footer;
        self
    }

    /// Set read-only mode using builder pattern.
    pub fn with_readonly(mut self, readonly: bool) -> Self {
        self.readonly = readonly;
        self
    }

    /// Whether the summary region is shown.
    pub fn shows_summary(&self) -> bool {
        self.summary && !self.readonly
    }

    /// Whether the footer region is shown.
    pub fn shows_footer(&self) -> bool {
        self.footer && !self.readonly
    }

    fn class(&self, region: &str) -> String {
        format!("{}{}", self.prefix, region)
    }
}

fn summary_text(count: usize) -> String {
    format!("{count} selected")
}

/// A searchable, summarized list of selectable items.
///
/// `Checklist` owns one [`ToggleGroup`] holding the checked state and one
/// [`ItemFilter`] holding the row order and visibility. Checked state is
/// independent of visibility: filtering hides rows without unchecking them,
/// and [`checked_values`](Self::checked_values) always reports every checked
/// item.
///
/// # Signals
///
/// - `count_changed(usize)`: Emitted after the summary is updated, once per
///   change of the checked state.
pub struct Checklist {
    config: ChecklistConfig,
    group: ToggleGroup,
    filter: ItemFilter<ChecklistRow>,
    summary: Arc<Property<String>>,
    count_changed: Arc<Signal<usize>>,
}

impl Checklist {
    /// Build a checklist with one row per descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingValue`](crate::Error::MissingValue) if any
    /// descriptor has a blank value.
    pub fn new(
        descriptors: impl IntoIterator<Item = Descriptor>,
        config: ChecklistConfig,
    ) -> Result<Self> {
        let descriptors: Vec<Descriptor> = descriptors.into_iter().collect();
        let rows = descriptors
            .iter()
            .enumerate()
            .map(|(index, descriptor)| ChecklistRow::from_descriptor(index, descriptor))
            .collect::<Result<Vec<_>>>()?;

        let items = descriptors.iter().map(|descriptor| {
            ToggleItem::new(descriptor.value.clone(), descriptor.checked)
                .with_label(descriptor.label_text())
        });
        let group = ToggleGroup::new(
            items,
            ToggleGroupConfig::default().with_readonly(config.readonly),
        );

        let summary = Arc::new(Property::new(summary_text(group.checked_count())));
        let count_changed = Arc::new(Signal::new());
        {
            let summary = summary.clone();
            let count_changed = count_changed.clone();
            group.count_changed.connect(move |&count| {
                if summary.set(summary_text(count)) {
                    tracing::trace!(target: targets::WIDGET, count, "summary updated");
                }
                count_changed.emit(count);
            });
        }

        let filter = ItemFilter::new(
            rows,
            ItemFilterConfig::default()
                .with_filter_on(FilterOn::Label)
                .with_search_box(config.search),
        );

        tracing::debug!(
            target: targets::WIDGET,
            id = %config.id,
            items = group.len(),
            checked = group.checked_count(),
            readonly = config.readonly,
            "checklist created"
        );

        Ok(Self {
            config,
            group,
            filter,
            summary,
            count_changed,
        })
    }

    /// Build a checklist from a JSON array of descriptors.
    ///
    /// # Errors
    ///
    /// Fails on malformed JSON or a descriptor without a value.
    pub fn from_json(descriptors: &str, config: ChecklistConfig) -> Result<Self> {
        Self::new(Descriptor::list_from_json(descriptors)?, config)
    }

    /// Forward every change of the checked count to `on_check`.
    pub fn with_on_check<F>(self, on_check: F) -> Self
    where
        F: Fn(usize) + Send + Sync + 'static,
    {
        self.on_check(on_check);
        self
    }

    /// Subscribe to changes of the checked count.
    ///
    /// Returns the connection id, for use with
    /// [`count_changed`](Self::count_changed)`().disconnect(id)`.
    pub fn on_check<F>(&self, on_check: F) -> ConnectionId
    where
        F: Fn(usize) + Send + Sync + 'static,
    {
        self.count_changed.connect(move |&count| on_check(count))
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// The checklist's configuration.
    pub fn config(&self) -> &ChecklistConfig {
        &self.config
    }

    /// The signal emitted with the checked count after each change.
    pub fn count_changed(&self) -> &Signal<usize> {
        &self.count_changed
    }

    /// The toggle group holding the checked state.
    pub fn group(&self) -> &ToggleGroup {
        &self.group
    }

    /// The filter holding row order and visibility.
    pub fn filter(&self) -> &ItemFilter<ChecklistRow> {
        &self.filter
    }

    /// Values of every checked item, visible or not, in construction order.
    pub fn checked_values(&self) -> Vec<&str> {
        self.group.checked_values()
    }

    /// The number of checked items.
    pub fn checked_count(&self) -> usize {
        self.group.checked_count()
    }

    /// The summary text as of the last change notification.
    pub fn summary_text(&self) -> String {
        self.summary.get()
    }

    /// The rows in display order; only visible rows are included.
    pub fn visible_rows(&self) -> impl Iterator<Item = &ChecklistRow> + '_ {
        self.filter.visible_rows()
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Check exactly the items whose value is in `values`.
    pub fn set_checked<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.group.set_checked(values);
    }

    /// Handle a user click on the item at `index` (construction order).
    pub fn click(&mut self, index: usize) {
        self.group.click(index);
    }

    /// Handle a user click on the row showing `value`.
    pub fn click_value(&mut self, value: &str) {
        match self.group.items().iter().position(|item| item.value() == value) {
            Some(index) => self.group.click(index),
            None => tracing::debug!(target: targets::WIDGET, value, "click on unknown value ignored"),
        }
    }

    /// The footer's "All" action: check every item, shown or hidden.
    pub fn select_all(&mut self) {
        if !self.config.shows_footer() {
            tracing::debug!(target: targets::WIDGET, "select all without footer ignored");
            return;
        }
        self.group.check_all(false);
    }

    /// The footer's "None" action: uncheck every item.
    pub fn select_none(&mut self) {
        if !self.config.shows_footer() {
            tracing::debug!(target: targets::WIDGET, "select none without footer ignored");
            return;
        }
        self.group.check_none();
    }

    /// Move the shown checked rows above the shown unchecked rows.
    ///
    /// Both groups keep their previous relative order. The next search,
    /// including [`clear_filter`](Self::clear_filter), shows rows in their
    /// original order again.
    pub fn bubble_checked(&mut self) {
        let group = &self.group;
        self.filter.stable_partition(|row| {
            group.item(row.index()).is_some_and(ToggleItem::is_checked)
        });
        tracing::debug!(
            target: targets::WIDGET,
            checked = self.group.checked_count(),
            "bubbled checked rows"
        );
    }

    // =========================================================================
    // Searching
    // =========================================================================

    /// Show only rows whose label starts with `query`.
    ///
    /// The search box, if shown, displays `query`.
    pub fn search(&mut self, query: &str) {
        self.filter.search(query);
        self.sync_visibility();
    }

    /// Clear any active search, showing every row.
    pub fn clear_filter(&mut self) {
        self.filter.clear_search();
        self.sync_visibility();
    }

    /// Handle a key-up in the search box, whose text is now `text`.
    pub fn key_up(&mut self, key: Key, text: &str) {
        self.filter.key_up(key, text);
        self.sync_visibility();
    }

    /// Handle a click in the search box.
    pub fn search_click(&mut self) {
        self.filter.click_search_box();
        self.sync_visibility();
    }

    /// Handle the search box losing focus.
    pub fn search_blur(&mut self) {
        self.filter.blur_search_box();
    }

    fn sync_visibility(&mut self) {
        let mut visible = vec![false; self.group.len()];
        for row in self.filter.visible_rows() {
            visible[row.index()] = true;
        }
        self.group.set_visibility(&visible);
    }

    // =========================================================================
    // Presentation
    // =========================================================================

    /// Snapshot the regions a presentation layer should draw.
    pub fn render(&self) -> ChecklistView {
        let config = &self.config;

        let mut frame_classes = vec![config.class("frame")];
        frame_classes.extend(self.group.container_classes().into_iter().map(String::from));

        let rows = self
            .filter
            .visible_rows()
            .map(|row| {
                let checked = self
                    .group
                    .item(row.index())
                    .is_some_and(ToggleItem::is_checked);
                RowView {
                    value: row.value().to_string(),
                    label: row.label().to_string(),
                    tip: row.tip().map(String::from),
                    title: row.title().map(String::from),
                    class: self
                        .group
                        .label_class(row.index())
                        .unwrap_or_default()
                        .to_string(),
                    checked,
                }
            })
            .collect();

        ChecklistView {
            frame: FrameView {
                id: format!("{}-frame", config.id),
                classes: frame_classes,
            },
            header: config.header.then(|| HeaderView {
                class: config.class("header"),
                title: config.title.clone(),
            }),
            search: self.filter.search_box().map(|search_box| SearchView {
                class: config.class("search"),
                text: search_box.text().to_string(),
                color: search_box.color().to_string(),
            }),
            body: BodyView {
                class: config.class("body"),
                rows,
            },
            summary: config.shows_summary().then(|| SummaryView {
                class: config.class("summary"),
                text: self.summary.get(),
            }),
            footer: config.shows_footer().then(|| FooterView {
                class: config.class("footer"),
                all_label: "All".to_string(),
                none_label: "None".to_string(),
            }),
        }
    }
}

impl fmt::Debug for Checklist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Checklist")
            .field("config", &self.config)
            .field("group", &self.group)
            .field("filter", &self.filter)
            .field("summary", &self.summary)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(Checklist: Send, Sync);
