//! Headless checklist widgets.
//!
//! This crate provides three cooperating widgets whose state is held in plain
//! Rust values, with presentation layers subscribing to their signals:
//!
//! - [`ToggleGroup`](widgets::ToggleGroup) replaces checkboxes with styled
//!   toggles and tracks how many are checked
//! - [`ItemFilter`](widgets::ItemFilter) shows only the rows whose key starts
//!   with a search query
//! - [`Checklist`](widgets::Checklist) combines both into a titled,
//!   searchable list with an "N selected" summary and select all/none actions
//!
//! All operations run synchronously on the caller's thread. Signal slots run
//! inside the mutating call and must not call back into the same widget.
//!
//! # Example
//!
//! ```
//! use checklist::prelude::*;
//!
//! let mut list = Checklist::from_json(
//!     r#"[{"value": "1", "label": "Bill Johnson"},
//!         {"value": "42", "label": "Mark Jones"},
//!         {"value": "7", "label": "Billy Jean"}]"#,
//!     ChecklistConfig::default().with_title("Users"),
//! )?;
//!
//! list.search("bil");
//! list.select_all();
//! assert_eq!(list.render().summary.unwrap().text, "3 selected");
//! # Ok::<(), checklist::Error>(())
//! ```

mod error;
pub mod prelude;
pub mod widgets;

pub use checklist_core::{ConnectionGuard, ConnectionId, Property, Signal};
pub use error::{Error, Result};
