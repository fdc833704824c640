//! Per-pin view state

use heapless::Vec;
use rgb::RGB8;

use crate::pins::{OwnerName, PinKind, SignalName, MAX_PINS};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One header row, ordered for display
pub type PinRow = Vec<PinView, MAX_PINS>;

/// Derived display state of one physical pin
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinView {
    /// Physical pin number
    pub pin: u8,
    /// Pin type
    pub kind: PinKind,
    /// Signal name (signal pins only)
    pub signal: Option<SignalName>,
    /// Claiming owner from the snapshot, for display
    pub owner: Option<OwnerName>,
    /// Claimed by another owner; never clickable
    pub assigned_by_other: bool,
    /// Bound to one of the current slots
    pub selected: bool,
    /// Color of the owning slot (selected pins only)
    pub color: Option<RGB8>,
}

impl PinView {
    /// Create the fixed view of a power, ground or reserved pin
    pub fn fixed(pin: u8, kind: PinKind) -> Self {
        Self {
            pin,
            kind,
            signal: None,
            owner: None,
            assigned_by_other: false,
            selected: false,
            color: None,
        }
    }

    /// Check if a click on this pin can change anything
    pub fn is_clickable(&self) -> bool {
        self.kind.is_selectable() && !self.assigned_by_other
    }

    /// Get the signal name
    pub fn signal_name(&self) -> Option<&str> {
        self.signal.as_deref()
    }
}

/// The two physical header rows
///
/// Row A holds the odd-numbered pins (pin 1 side), row B the even ones.
/// Both rows run from the highest pin number down.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinRows {
    /// Odd-numbered pins, descending
    pub row_a: PinRow,
    /// Even-numbered pins, descending
    pub row_b: PinRow,
}

impl PinRows {
    /// Find a pin by physical number
    pub fn find(&self, pin: u8) -> Option<&PinView> {
        self.iter().find(|view| view.pin == pin)
    }

    /// Find the pin carrying `signal`
    pub fn find_signal(&self, signal: &str) -> Option<&PinView> {
        self.iter().find(|view| view.signal_name() == Some(signal))
    }

    /// Iterate over every pin, row A first
    pub fn iter(&self) -> impl Iterator<Item = &PinView> {
        self.row_a.iter().chain(self.row_b.iter())
    }

    /// Number of pins bound to a slot
    pub fn selected_count(&self) -> usize {
        self.iter().filter(|view| view.selected).count()
    }

    /// Total number of pins
    pub fn len(&self) -> usize {
        self.row_a.len() + self.row_b.len()
    }

    /// Check if both rows are empty
    pub fn is_empty(&self) -> bool {
        self.row_a.is_empty() && self.row_b.is_empty()
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for PinView {
    fn format(&self, fmt: defmt::Formatter) {
        match (self.signal_name(), self.color) {
            (Some(name), Some(color)) => defmt::write!(
                fmt,
                "PinView {{ pin: {}, signal: {}, selected: {}, rgb: ({}, {}, {}) }}",
                self.pin,
                name,
                self.selected,
                color.r,
                color.g,
                color.b
            ),
            (Some(name), None) => defmt::write!(
                fmt,
                "PinView {{ pin: {}, signal: {}, assigned: {} }}",
                self.pin,
                name,
                self.assigned_by_other
            ),
            (None, _) => defmt::write!(fmt, "PinView {{ pin: {}, kind: {} }}", self.pin, self.kind),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PinRows {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "PinRows {{ row_a: {} pins, row_b: {} pins, selected: {} }}",
            self.row_a.len(),
            self.row_b.len(),
            self.selected_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_pin_not_clickable() {
        let view = PinView::fixed(6, PinKind::Ground);
        assert!(!view.is_clickable());
        assert!(!view.selected);
        assert!(view.color.is_none());
    }

    #[test]
    fn test_claimed_signal_not_clickable() {
        let mut view = PinView::fixed(12, PinKind::Signal);
        view.signal = SignalName::try_from("GPIO18").ok();
        assert!(view.is_clickable());

        view.assigned_by_other = true;
        assert!(!view.is_clickable());
    }
}
