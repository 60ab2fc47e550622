//! Search-driven filtering for a fixed collection of rows.
//!
//! [`ItemFilter`] owns a sequence of rows and shows exactly those whose
//! extracted key starts with the current query, compared case-insensitively.
//! The visible list is rebuilt from scratch on every query change, so the same
//! query always yields the same rows in the same order.
//!
//! # Example
//!
//! ```
//! use checklist::widgets::{FilterOn, ItemFilter, ItemFilterConfig, TextRow};
//!
//! let rows = ["Bill Johnson", "Mark Jones", "Billy Jean"].map(TextRow::new);
//! let mut filter = ItemFilter::new(rows, ItemFilterConfig::default().with_filter_on(FilterOn::Text));
//!
//! filter.search("bil");
//! let names: Vec<&str> = filter.visible_rows().map(|row| row.text()).collect();
//! assert_eq!(names, vec!["Bill Johnson", "Billy Jean"]);
//!
//! filter.clear_search();
//! assert_eq!(filter.visible_len(), 3);
//! ```

use std::fmt;
use std::str::FromStr;

use checklist_core::Signal;
use checklist_core::logging::targets;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Which part of a row the filter matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FilterOn {
    /// The row's associated value.
    Value,
    /// The row's full display text.
    #[default]
    Text,
    /// The text of the row's first label.
    Label,
}

impl FilterOn {
    /// The configuration name of this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOn::Value => "value",
            FilterOn::Text => "text",
            FilterOn::Label => "label",
        }
    }

    /// Extract this mode's key from a row. Missing parts extract as `""`.
    pub fn extract<'a, R: FilterRow>(&self, row: &'a R) -> &'a str {
        match self {
            FilterOn::Value => row.value().unwrap_or_default(),
            FilterOn::Text => row.text(),
            FilterOn::Label => row.label().unwrap_or_default(),
        }
    }
}

impl FromStr for FilterOn {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "value" => Ok(FilterOn::Value),
            "text" => Ok(FilterOn::Text),
            "label" => Ok(FilterOn::Label),
            other => Err(Error::unsupported_filter_mode(other)),
        }
    }
}

impl TryFrom<String> for FilterOn {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<FilterOn> for String {
    fn from(mode: FilterOn) -> Self {
        mode.as_str().to_string()
    }
}

impl fmt::Display for FilterOn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A row the filter can extract keys from.
pub trait FilterRow {
    /// The row's associated value, if it has one.
    fn value(&self) -> Option<&str>;

    /// The row's full display text.
    fn text(&self) -> &str;

    /// The text of the row's first label, if it has one.
    fn label(&self) -> Option<&str>;
}

/// A plain text row, for lists without values or labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRow {
    text: String,
}

impl TextRow {
    /// Create a row from its display text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The row's display text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl FilterRow for TextRow {
    fn value(&self) -> Option<&str> {
        None
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn label(&self) -> Option<&str> {
        None
    }
}

/// Returns `true` if `key` starts with `query`, ignoring case.
///
/// Every character of the query is literal; there is no pattern syntax.
pub fn matches_prefix(key: &str, query: &str) -> bool {
    let mut key_chars = key.chars().flat_map(char::to_lowercase);
    query
        .chars()
        .flat_map(char::to_lowercase)
        .all(|q| key_chars.next() == Some(q))
}

/// Keys reported by the host's search box on key-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// The Shift modifier, which never changes the query.
    Shift,
    /// A printable character.
    Char(char),
    /// Backspace or Delete.
    Erase,
    /// Any other key.
    Other,
}

/// Configuration for an [`ItemFilter`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemFilterConfig {
    /// Which part of each row is matched.
    pub filter_on: FilterOn,
    /// Whether a search box is wired to the filter.
    pub search_box: bool,
    /// Text shown in the idle, empty search box.
    pub placeholder: String,
    /// Search text color while idle.
    pub idle_color: String,
    /// Search text color while the user is typing.
    pub active_color: String,
}

impl Default for ItemFilterConfig {
    fn default() -> Self {
        Self {
            filter_on: FilterOn::Text,
            search_box: true,
            placeholder: "search".to_string(),
            idle_color: "#999".to_string(),
            active_color: "#000".to_string(),
        }
    }
}

impl ItemFilterConfig {
    /// Parse a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Fails on malformed JSON and on an unsupported `filter_on` mode.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the extraction mode using builder pattern.
    pub fn with_filter_on(mut self, filter_on: FilterOn) -> Self {
        self.filter_on = filter_on;
        self
    }

    /// Enable or disable the search box using builder pattern.
    pub fn with_search_box(mut self, search_box: bool) -> Self {
        self.search_box = search_box;
        self
    }

    /// Set the idle and active search text colors using builder pattern.
    pub fn with_colors(mut self, idle: impl Into<String>, active: impl Into<String>) -> Self {
        self.idle_color = idle.into();
        self.active_color = active.into();
        self
    }
}

/// State of the text input that drives an [`ItemFilter`].
///
/// While idle and empty the box shows its placeholder in the idle color.
/// Clicking it clears the text and switches to the active color; leaving it
/// empty restores the placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBox {
    text: String,
    showing_placeholder: bool,
    active: bool,
    placeholder: String,
    idle_color: String,
    active_color: String,
}

impl SearchBox {
    fn new(config: &ItemFilterConfig) -> Self {
        Self {
            text: config.placeholder.clone(),
            showing_placeholder: true,
            active: false,
            placeholder: config.placeholder.clone(),
            idle_color: config.idle_color.clone(),
            active_color: config.active_color.clone(),
        }
    }

    /// The text currently displayed in the box.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The query typed by the user; empty while the placeholder is shown.
    pub fn query(&self) -> &str {
        if self.showing_placeholder { "" } else { &self.text }
    }

    /// The current text color.
    pub fn color(&self) -> &str {
        if self.active {
            &self.active_color
        } else {
            &self.idle_color
        }
    }

    /// Whether the placeholder is displayed.
    pub fn is_showing_placeholder(&self) -> bool {
        self.showing_placeholder
    }

    fn activate(&mut self) {
        self.active = true;
        self.showing_placeholder = false;
        self.text.clear();
    }

    fn blur(&mut self) {
        if self.query().is_empty() {
            self.active = false;
            self.showing_placeholder = true;
            self.text = self.placeholder.clone();
        }
    }

    /// Display `query` as if typed. An empty query on an idle box shows the
    /// placeholder instead.
    fn show_query(&mut self, query: &str) {
        if self.query() == query {
            return;
        }
        if query.is_empty() && !self.active {
            self.showing_placeholder = true;
            self.text = self.placeholder.clone();
        } else {
            self.set_text(query);
        }
    }

    fn set_text(&mut self, text: &str) {
        self.showing_placeholder = false;
        self.text = text.to_string();
    }

    fn clear(&mut self) {
        self.showing_placeholder = false;
        self.text.clear();
    }
}

/// Shows the rows whose key starts with the current query.
///
/// Rows are never created or destroyed by the filter, only shown or hidden.
/// Rows keep their construction order. Every rebuild lists the matching rows
/// in that order, so an empty query always restores the full sequence.
///
/// # Signals
///
/// - `filter_changed(usize)`: Emitted with the number of visible rows after
///   every rebuild.
pub struct ItemFilter<R> {
    rows: Vec<R>,
    /// Positions into `rows` of the visible rows, in display order.
    visible: Vec<usize>,
    query: String,
    search_box: Option<SearchBox>,
    config: ItemFilterConfig,

    /// Signal emitted with the visible row count after each rebuild.
    pub filter_changed: Signal<usize>,
}

impl<R: FilterRow> ItemFilter<R> {
    /// Create a filter over `rows` with every row visible.
    pub fn new(rows: impl IntoIterator<Item = R>, config: ItemFilterConfig) -> Self {
        let rows: Vec<R> = rows.into_iter().collect();
        let visible = (0..rows.len()).collect();
        let search_box = config.search_box.then(|| SearchBox::new(&config));
        tracing::debug!(
            target: targets::FILTER,
            rows = rows.len(),
            filter_on = %config.filter_on,
            search_box = search_box.is_some(),
            "item filter created"
        );
        Self {
            rows,
            visible,
            query: String::new(),
            search_box,
            config,
            filter_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// The filter's configuration.
    pub fn config(&self) -> &ItemFilterConfig {
        &self.config
    }

    /// The current query; empty means every row is shown.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The search box state, if the filter has one.
    pub fn search_box(&self) -> Option<&SearchBox> {
        self.search_box.as_ref()
    }

    /// All rows, in construction order.
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Positions of the visible rows within [`rows`](Self::rows), in display
    /// order. Ascending unless reordered by
    /// [`stable_partition`](Self::stable_partition).
    pub fn visible_positions(&self) -> &[usize] {
        &self.visible
    }

    /// The visible rows, in order.
    pub fn visible_rows(&self) -> impl Iterator<Item = &R> + '_ {
        self.visible.iter().map(|&pos| &self.rows[pos])
    }

    /// Number of visible rows.
    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Whether the row at `position` is visible.
    pub fn is_visible(&self, position: usize) -> bool {
        self.visible.contains(&position)
    }

    // =========================================================================
    // Searching
    // =========================================================================

    /// Show exactly the rows whose key starts with `query`.
    ///
    /// A search box, if present, is updated to display `query`.
    pub fn search(&mut self, query: &str) {
        if let Some(search_box) = &mut self.search_box {
            search_box.show_query(query);
        }
        self.query = query.to_string();
        self.rebuild();
    }

    /// Clear the query and the search box, showing every row.
    pub fn clear_search(&mut self) {
        if let Some(search_box) = &mut self.search_box {
            search_box.clear();
        }
        self.search("");
    }

    /// Handle a key-up in the search box, whose text is now `text`.
    ///
    /// The Shift key is ignored. Without a search box this does nothing.
    pub fn key_up(&mut self, key: Key, text: &str) {
        if key == Key::Shift {
            return;
        }
        let Some(search_box) = &mut self.search_box else {
            tracing::trace!(target: targets::FILTER, "key-up without search box ignored");
            return;
        };
        search_box.set_text(text);
        self.search(text);
    }

    /// Handle a click in the search box.
    ///
    /// The box is emptied and switches to the active color. The query follows
    /// the box, so every row is shown again.
    pub fn click_search_box(&mut self) {
        let Some(search_box) = &mut self.search_box else {
            return;
        };
        search_box.activate();
        if !self.query.is_empty() {
            self.search("");
        }
    }

    /// Handle the search box losing focus.
    ///
    /// An empty box shows its placeholder again in the idle color.
    pub fn blur_search_box(&mut self) {
        if let Some(search_box) = &mut self.search_box {
            search_box.blur();
        }
    }

    // =========================================================================
    // Reordering
    // =========================================================================

    /// Reorder the visible rows so those matching `pred` come first.
    ///
    /// Both groups keep their previous relative order. The order is for
    /// display only: the next search lists rows in construction order again.
    pub fn stable_partition<F>(&mut self, pred: F)
    where
        F: Fn(&R) -> bool,
    {
        let rows = &self.rows;
        let (mut front, back): (Vec<usize>, Vec<usize>) =
            self.visible.iter().partition(|&&pos| pred(&rows[pos]));
        let moved = front.len();
        front.extend(back);
        self.visible = front;
        tracing::debug!(target: targets::FILTER, moved, "visible rows partitioned");
    }

    fn rebuild(&mut self) {
        let filter_on = self.config.filter_on;
        self.visible = if self.query.is_empty() {
            (0..self.rows.len()).collect()
        } else {
            self.rows
                .iter()
                .enumerate()
                .filter(|(_, row)| matches_prefix(filter_on.extract(*row), &self.query))
                .map(|(pos, _)| pos)
                .collect()
        };

        tracing::debug!(
            target: targets::FILTER,
            query = %self.query,
            visible = self.visible.len(),
            total = self.rows.len(),
            "list rebuilt"
        );
        self.filter_changed.emit(self.visible.len());
    }
}

impl<R: fmt::Debug> fmt::Debug for ItemFilter<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemFilter")
            .field("rows", &self.rows)
            .field("visible", &self.visible)
            .field("query", &self.query)
            .field("search_box", &self.search_box)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(ItemFilter<TextRow>: Send, Sync);
