//! Allocation cursor
//!
//! Points at the earliest slot without a bound pin. Binding always targets
//! this slot, so slots fill in declaration order whatever order the pins
//! are clicked in.

use super::slot::Slot;

/// Cursor label once every slot has a pin
pub const ALL_CONFIGURED_LABEL: &str = "All GPIOs are configured";

/// Next slot to configure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Cursor {
    /// Index of the first unfilled slot
    At(usize),
    /// All slots are filled
    #[default]
    None,
}

impl Cursor {
    /// Get the slot index, if any
    pub fn index(&self) -> Option<usize> {
        match self {
            Cursor::At(index) => Some(*index),
            Cursor::None => None,
        }
    }

    /// Check if every slot is filled
    pub fn is_none(&self) -> bool {
        matches!(self, Cursor::None)
    }
}

/// Scan slots in order for the first one without a bound pin
pub fn find_next_unfilled(slots: &[Slot]) -> Cursor {
    slots
        .iter()
        .position(Slot::is_unfilled)
        .map_or(Cursor::None, Cursor::At)
}
