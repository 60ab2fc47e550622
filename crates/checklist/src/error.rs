//! Error types for the checklist widgets.

/// Result type alias for widget operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or driving the widgets.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The item filter was asked to extract a key it does not know.
    #[error("Cannot filter on '{mode}' (expected one of: value, text, label)")]
    UnsupportedFilterMode { mode: String },

    /// An item index outside the widget's item list.
    #[error("Item index {index} out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    /// A user-interaction operation on a read-only widget.
    #[error("Widget is read-only")]
    ReadOnly,

    /// A checkbox descriptor without a value.
    #[error("Descriptor {index} has no value")]
    MissingValue { index: usize },

    /// Malformed JSON configuration or descriptor list.
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl Error {
    /// Create an unsupported filter mode error.
    pub fn unsupported_filter_mode(mode: impl Into<String>) -> Self {
        Self::UnsupportedFilterMode { mode: mode.into() }
    }
}
