//! Board support for the pin allocation engine
//!
//! Everything the engine deliberately does not know about:
//!
//! - Header layout templates per Raspberry Pi board revision
//! - Custom header descriptions in TOML
//! - Registry of signals claimed by other owners
//! - Assembly of pin usage snapshots from a layout and the registry
//! - Binary wire format for snapshots (postcard)
//! - In-memory [`PinUsageSource`](pinmap_core::PinUsageSource)

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod layout;
pub mod registry;
pub mod revision;
pub mod source;
pub mod templates;
pub mod description;
pub mod usage;
pub mod wire;

pub use layout::{HeaderLayout, LayoutError, PinLabel};
pub use registry::{ClaimError, ClaimRegistry};
pub use revision::{session_layout, BoardRevision};
pub use source::BoardSource;
pub use description::parse_layout;
pub use usage::pin_usage;
pub use wire::{decode_usage, encode_usage, WireError};
