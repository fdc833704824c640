//! Slot assignment controller
//!
//! Owns the caller's slot list for its lifetime, turns pin clicks into
//! bind/unbind operations and keeps the catalog and cursor in sync.
//! All operations are synchronous and run to completion.

pub mod assignment;
pub mod events;

pub use assignment::SlotAssignmentController;
pub use events::{ClickOutcome, ControllerState, IgnoreReason, RefreshReport, UnboundSlot};
