//! Pin descriptor types
//!
//! Immutable snapshot of a header's physical pins, as supplied by the
//! caller. The engine only reads these.

pub mod descriptor;

pub use descriptor::*;
