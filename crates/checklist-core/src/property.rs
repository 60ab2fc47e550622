//! Property system for checklist widgets.
//!
//! Properties hold widget state that presentation layers read back, such as
//! the rendered summary text or the current search query. A property does not
//! notify by itself: `set()` reports whether the value changed, and the owning
//! widget emits its signal when it did.
//!
//! # Example
//!
//! ```
//! use checklist_core::{Property, Signal};
//!
//! struct Summary {
//!     text: Property<String>,
//!     text_changed: Signal<String>,
//! }
//!
//! impl Summary {
//!     fn update(&self, count: usize) {
//!         let text = format!("{count} selected");
//!         if self.text.set(text.clone()) {
//!             self.text_changed.emit(text);
//!         }
//!     }
//! }
//!
//! let summary = Summary {
//!     text: Property::new("0 selected".to_string()),
//!     text_changed: Signal::new(),
//! };
//! summary.update(2);
//! assert_eq!(summary.text.get(), "2 selected");
//! ```

use std::fmt;

use parking_lot::RwLock;

/// A value cell with change detection.
///
/// `Property<T>` uses interior mutability with `RwLock` and is `Send + Sync`
/// when `T` is, so it can be shared with signal slots through an `Arc`.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Get the current value.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Set the value, returning `true` if the value changed.
    ///
    /// If the new value equals the current one, nothing is written.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current != value {
            *current = value;
            true
        } else {
            false
        }
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &self.get())
            .finish()
    }
}

static_assertions::assert_impl_all!(Property<String>: Send, Sync);
