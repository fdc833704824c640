//! Board-agnostic pin allocation engine
//!
//! This crate contains the allocation logic for assigning logical
//! connection slots to the signal pins of a two-row hardware header.
//! It does not depend on a particular board revision:
//!
//! - Pin descriptor types (signal, power, ground, reserved pins)
//! - Pin catalog builder (two physical rows with per-pin view state)
//! - Slot assignment controller (click handling, allocation cursor)
//! - Engine configuration
//! - Collaborator traits for fetching pin usage snapshots
//! - Refresh session with stale response detection

#![no_std]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;
pub mod pins;
pub mod session;
pub mod slots;
pub mod traits;

pub use catalog::{build_catalog, PinRows, PinView};
pub use config::EngineConfig;
pub use controller::{ClickOutcome, ControllerState, IgnoreReason, RefreshReport, SlotAssignmentController};
pub use error::{EngineError, InvariantViolation};
pub use pins::{PinDescriptor, PinKind, PinUsage, SignalInfo, SignalName};
pub use session::{PinSession, RefreshOutcome, RefreshTicket};
pub use slots::{Cursor, Slot};
pub use traits::{PinUsageSource, TransportError};
