//! Logical connection slots and the allocation cursor

pub mod cursor;
pub mod slot;

pub use cursor::{find_next_unfilled, Cursor, ALL_CONFIGURED_LABEL};
pub use slot::{Slot, MAX_LABEL_LEN};
