//! Physical pin descriptors and pin usage snapshots

use heapless::{FnvIndexMap, String};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum physical pins per header (power of two, required by the index map)
pub const MAX_PINS: usize = 64;

/// Maximum signal name length (e.g. "GPIO12")
pub const MAX_SIGNAL_NAME_LEN: usize = 16;

/// Maximum claiming owner name length
pub const MAX_OWNER_LEN: usize = 32;

/// Stable signal identifier, e.g. "GPIO12"
pub type SignalName = String<MAX_SIGNAL_NAME_LEN>;

/// Name of the entity claiming a signal pin
pub type OwnerName = String<MAX_OWNER_LEN>;

/// Pin usage snapshot: physical pin number to descriptor
pub type PinUsage = FnvIndexMap<u8, PinDescriptor, MAX_PINS>;

/// Physical pin type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PinKind {
    /// General purpose I/O pin
    Signal,
    /// 5V power rail
    Power5v,
    /// 3.3V power rail
    Power3v3,
    /// Ground
    Ground,
    /// Reserved / do not connect
    Reserved,
}

impl PinKind {
    /// Check if pins of this kind can be assigned to a slot
    pub fn is_selectable(&self) -> bool {
        matches!(self, PinKind::Signal)
    }
}

/// Signal pin details
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SignalInfo {
    /// Signal name (e.g., "GPIO17")
    pub name: SignalName,
    /// Pin is already claimed by another owner
    pub claimed_elsewhere: bool,
    /// Owner holding the claim, when known
    pub owner: Option<OwnerName>,
}

impl SignalInfo {
    /// Create an unclaimed signal
    ///
    /// Returns `None` if the name does not fit in [`MAX_SIGNAL_NAME_LEN`].
    pub fn free(name: &str) -> Option<Self> {
        Some(Self {
            name: SignalName::try_from(name).ok()?,
            claimed_elsewhere: false,
            owner: None,
        })
    }

    /// Create a signal claimed by `owner`
    ///
    /// Returns `None` if the name or owner is too long.
    pub fn claimed(name: &str, owner: &str) -> Option<Self> {
        Some(Self {
            name: SignalName::try_from(name).ok()?,
            claimed_elsewhere: true,
            owner: Some(OwnerName::try_from(owner).ok()?),
        })
    }
}

/// Descriptor for one physical header pin
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PinDescriptor {
    /// General purpose signal pin
    Signal(SignalInfo),
    /// 5V power pin
    Power5v,
    /// 3.3V power pin
    Power3v3,
    /// Ground pin
    Ground,
    /// Reserved / do-not-connect pin
    Reserved,
}

impl PinDescriptor {
    /// Get the pin type
    pub fn kind(&self) -> PinKind {
        match self {
            PinDescriptor::Signal(_) => PinKind::Signal,
            PinDescriptor::Power5v => PinKind::Power5v,
            PinDescriptor::Power3v3 => PinKind::Power3v3,
            PinDescriptor::Ground => PinKind::Ground,
            PinDescriptor::Reserved => PinKind::Reserved,
        }
    }

    /// Get signal details if this is a signal pin
    pub fn signal(&self) -> Option<&SignalInfo> {
        match self {
            PinDescriptor::Signal(info) => Some(info),
            _ => None,
        }
    }

    /// Get the signal name if this is a signal pin
    pub fn signal_name(&self) -> Option<&str> {
        self.signal().map(|s| s.name.as_str())
    }
}

/// Check whether a snapshot still exposes `signal` as a signal pin
pub fn has_signal(usage: &PinUsage, signal: &str) -> bool {
    usage
        .values()
        .any(|desc| desc.signal_name() == Some(signal))
}
