//! Core systems for checklist widgets.
//!
//! This crate provides the foundational pieces shared by the widgets in the
//! `checklist` crate:
//!
//! - **Signal/Slot System**: Type-safe, synchronous observer notifications
//! - **Property System**: Value cells with change detection
//! - **Logging**: `tracing` targets for each subsystem
//!
//! # Signal/Slot Example
//!
//! ```
//! use checklist_core::Signal;
//!
//! let count_changed = Signal::<usize>::new();
//!
//! let conn_id = count_changed.connect(|count| {
//!     println!("{count} selected");
//! });
//!
//! count_changed.emit(2);
//! count_changed.disconnect(conn_id);
//! ```

pub mod logging;
pub mod property;
pub mod signal;

pub use property::Property;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
