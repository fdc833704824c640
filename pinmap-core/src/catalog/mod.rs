//! Pin catalog
//!
//! Turns a pin usage snapshot plus the slot list into two physical header
//! rows annotated with selection and exclusivity state. The catalog is
//! always rebuilt from scratch, never patched.

pub mod builder;
pub mod palette;
pub mod view;

pub use builder::{build_catalog, selection_index, SelectionIndex};
pub use palette::{slot_color, PALETTE};
pub use view::{PinRow, PinRows, PinView};
