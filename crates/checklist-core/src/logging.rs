//! Logging facilities for checklist widgets.
//!
//! The widgets are instrumented with the `tracing` crate. Nothing is printed
//! unless the application installs a subscriber:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("checklist=debug")
//!         .init();
//!
//!     // Build and drive widgets...
//! }
//! ```
//!
//! Use the constants in [`targets`] to filter by subsystem, for example
//! `RUST_LOG=checklist::filter=trace`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "checklist_core::signal";
    /// Toggle group target (check state changes).
    pub const TOGGLE: &str = "checklist::toggle";
    /// Item filter target (search and list rebuilds).
    pub const FILTER: &str = "checklist::filter";
    /// Checklist composite widget target.
    pub const WIDGET: &str = "checklist::widget";
}

/// Install a compact `tracing` subscriber for tests.
///
/// Honors `RUST_LOG`; safe to call from many tests since repeated
/// installation attempts are ignored.
#[cfg(test)]
pub(crate) fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
