//! Slot definition

use heapless::String;

use crate::pins::SignalName;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum slot label length
pub const MAX_LABEL_LEN: usize = 32;

/// A logical connection point that must be bound to one signal pin
///
/// Slot order is meaningful: it decides the display color and which
/// unfilled slot receives the next bound pin.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Slot {
    /// Display name (e.g., "sensor pin 1")
    pub label: String<MAX_LABEL_LEN>,
    /// Signal bound to this slot, if any
    pub bound_pin: Option<SignalName>,
}

impl Slot {
    /// Create an unfilled slot
    ///
    /// Labels longer than [`MAX_LABEL_LEN`] are truncated.
    pub fn new(label: &str) -> Self {
        Self {
            label: truncated(label),
            bound_pin: None,
        }
    }

    /// Create a slot already bound to `signal`
    ///
    /// Returns `None` if the signal name does not fit.
    pub fn bound(label: &str, signal: &str) -> Option<Self> {
        Some(Self {
            label: truncated(label),
            bound_pin: Some(SignalName::try_from(signal).ok()?),
        })
    }

    /// Check if the slot has no bound pin
    pub fn is_unfilled(&self) -> bool {
        self.bound_pin.is_none()
    }

    /// Get the bound signal name
    pub fn bound_signal(&self) -> Option<&str> {
        self.bound_pin.as_deref()
    }
}

/// Copy as much of `label` as fits, on a char boundary
fn truncated(label: &str) -> String<MAX_LABEL_LEN> {
    let mut out = String::new();
    for c in label.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

/// Count slots with a bound pin
pub fn count_bound(slots: &[Slot]) -> usize {
    slots.iter().filter(|s| !s.is_unfilled()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_slot_is_unfilled() {
        let slot = Slot::new("wire");
        assert_eq!(slot.label.as_str(), "wire");
        assert!(slot.is_unfilled());
        assert_eq!(slot.bound_signal(), None);
    }

    #[test]
    fn test_bound_slot() {
        let slot = Slot::bound("data", "GPIO4").unwrap();
        assert!(!slot.is_unfilled());
        assert_eq!(slot.bound_signal(), Some("GPIO4"));
    }

    #[test]
    fn test_long_label_truncated() {
        let slot = Slot::new("a label that is much longer than the slot allows");
        assert_eq!(slot.label.len(), MAX_LABEL_LEN);
    }

    #[test]
    fn test_count_bound() {
        let slots = [
            Slot::bound("a", "GPIO4").unwrap(),
            Slot::new("b"),
            Slot::bound("c", "GPIO17").unwrap(),
        ];
        assert_eq!(count_bound(&slots), 2);
    }
}
