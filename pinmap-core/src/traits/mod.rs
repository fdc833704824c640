//! Collaborator traits
//!
//! These traits define the interface between the allocation engine and
//! whatever serves pin usage data (RPC backend, board registry, mocks).

pub mod source;

pub use source::{PinUsageSource, TransportError};
