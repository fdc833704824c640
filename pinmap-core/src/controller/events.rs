//! Controller outcomes and states

use heapless::Vec;

use crate::pins::{SignalName, MAX_PINS};

/// Why a click changed nothing
///
/// These are expected user input, not failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IgnoreReason {
    /// Controller is display only
    Readonly,
    /// Power, ground or reserved pin
    NotSignal,
    /// Pin is claimed by another owner
    ClaimedElsewhere,
    /// Every slot already has a pin
    Oversubscribed,
}

/// Result of a pin click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClickOutcome {
    /// Pin bound to the slot at the cursor
    Bound {
        /// Slot index
        slot: usize,
        /// Physical pin number
        pin: u8,
    },
    /// Pin released from its owning slot
    Unbound {
        /// Slot index
        slot: usize,
        /// Physical pin number
        pin: u8,
    },
    /// Click had no effect
    Ignored(IgnoreReason),
}

impl ClickOutcome {
    /// Check if the click changed a slot
    pub fn is_mutation(&self) -> bool {
        !matches!(self, ClickOutcome::Ignored(_))
    }
}

/// Controller macro-state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControllerState {
    /// At least one slot is unfilled; binds and unbinds accepted
    AcceptingInput,
    /// Every slot is filled; only unbinds have an effect
    FullyConfigured,
}

/// Slot released because its pin left the snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnboundSlot {
    /// Slot index
    pub slot: usize,
    /// Signal the slot was bound to
    pub signal: SignalName,
}

/// Result of installing a refreshed snapshot
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RefreshReport {
    /// Slots automatically unbound, in slot order
    pub unbound: Vec<UnboundSlot, MAX_PINS>,
}

impl RefreshReport {
    /// Check if no slot lost its pin
    pub fn is_clean(&self) -> bool {
        self.unbound.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_mutation() {
        assert!(ClickOutcome::Bound { slot: 0, pin: 12 }.is_mutation());
        assert!(ClickOutcome::Unbound { slot: 0, pin: 12 }.is_mutation());
        assert!(!ClickOutcome::Ignored(IgnoreReason::Readonly).is_mutation());
    }

    #[test]
    fn test_empty_report_is_clean() {
        assert!(RefreshReport::default().is_clean());
    }
}
