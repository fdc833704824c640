//! Engine error types
//!
//! Click rule outcomes (readonly, claimed pins, oversubscription) are not
//! errors; see [`crate::controller::ClickOutcome`].

use crate::traits::TransportError;

/// Internal consistency failures
///
/// These indicate a programming error. The failing operation is aborted
/// and the previously built state is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InvariantViolation {
    /// Tracked assigned count differs from the slot list
    AssignedCountMismatch {
        /// Count kept by the controller
        tracked: usize,
        /// Count found by scanning the slots
        actual: usize,
    },
    /// Click on a pin number absent from the catalog
    UnknownPin(u8),
    /// Selected pin has no owning slot
    MissingOwner(u8),
    /// Free capacity reported but no unfilled slot found
    MissingCursor,
    /// A bounded container overflowed
    CapacityExceeded,
}

/// Errors surfaced to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EngineError {
    /// Snapshot or revision fetch failed; previous state retained
    TransportFailure(TransportError),
    /// Internal consistency failure
    InvariantViolation(InvariantViolation),
}

impl From<TransportError> for EngineError {
    fn from(e: TransportError) -> Self {
        EngineError::TransportFailure(e)
    }
}

impl From<InvariantViolation> for EngineError {
    fn from(e: InvariantViolation) -> Self {
        EngineError::InvariantViolation(e)
    }
}

impl core::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InvariantViolation::AssignedCountMismatch { tracked, actual } => {
                write!(f, "assigned count {} does not match {} bound slots", tracked, actual)
            }
            InvariantViolation::UnknownPin(pin) => write!(f, "pin {} is not in the catalog", pin),
            InvariantViolation::MissingOwner(pin) => write!(f, "selected pin {} has no owning slot", pin),
            InvariantViolation::MissingCursor => write!(f, "no unfilled slot despite free capacity"),
            InvariantViolation::CapacityExceeded => write!(f, "pin capacity exceeded"),
        }
    }
}

impl core::fmt::Display for EngineError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EngineError::TransportFailure(e) => write!(f, "transport failure: {}", e),
            EngineError::InvariantViolation(e) => write!(f, "invariant violation: {}", e),
        }
    }
}
