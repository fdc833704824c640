//! Signal claim registry
//!
//! Tracks which owner (device, driver, service) holds each signal of a
//! header layout. The allocation engine sees these claims as
//! "claimed elsewhere" pins.

use heapless::FnvIndexMap;
use pinmap_core::pins::{OwnerName, SignalName, MAX_PINS};

use crate::layout::{HeaderLayout, LayoutError};

/// Errors from claiming a signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClaimError {
    /// Signal does not exist on this header
    UnknownSignal,
    /// Signal is held by a different owner
    AlreadyClaimed,
    /// Owner name does not fit in [`pinmap_core::pins::MAX_OWNER_LEN`]
    OwnerTooLong,
}

impl core::fmt::Display for ClaimError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            ClaimError::UnknownSignal => "unknown signal",
            ClaimError::AlreadyClaimed => "signal already claimed",
            ClaimError::OwnerTooLong => "owner name too long",
        };
        f.write_str(msg)
    }
}

/// Claims over the signals of one header layout
#[derive(Debug, Clone, Default)]
pub struct ClaimRegistry {
    /// Every signal of the layout, with its current owner
    claims: FnvIndexMap<SignalName, Option<OwnerName>, MAX_PINS>,
}

impl ClaimRegistry {
    /// Create a registry with every signal of `layout` unclaimed
    pub fn new(layout: &HeaderLayout) -> Result<Self, LayoutError> {
        let mut claims = FnvIndexMap::new();
        for (_, name) in layout.signals() {
            let name = SignalName::try_from(name).map_err(|_| LayoutError::InvalidLabel)?;
            claims
                .insert(name, None)
                .map_err(|_| LayoutError::TooManyPins)?;
        }
        Ok(Self { claims })
    }

    /// Claim a signal for `owner`
    ///
    /// Claiming a signal the same owner already holds succeeds.
    pub fn claim(&mut self, signal: &str, owner: &str) -> Result<(), ClaimError> {
        let owner = OwnerName::try_from(owner).map_err(|_| ClaimError::OwnerTooLong)?;
        let key = SignalName::try_from(signal).map_err(|_| ClaimError::UnknownSignal)?;
        let held = self.claims.get_mut(&key).ok_or(ClaimError::UnknownSignal)?;

        if let Some(current) = held.as_ref() {
            return if *current == owner {
                Ok(())
            } else {
                Err(ClaimError::AlreadyClaimed)
            };
        }
        *held = Some(owner);
        Ok(())
    }

    /// Release a signal
    ///
    /// Returns the previous owner, if any.
    pub fn release(&mut self, signal: &str) -> Option<OwnerName> {
        let key = SignalName::try_from(signal).ok()?;
        self.claims.get_mut(&key)?.take()
    }

    /// Release every signal held by `owner`
    ///
    /// Returns how many signals were released.
    pub fn release_owner(&mut self, owner: &str) -> usize {
        let mut released = 0;
        for (_, held) in self.claims.iter_mut() {
            if held.as_deref() == Some(owner) {
                *held = None;
                released += 1;
            }
        }
        released
    }

    /// Get the owner of a signal
    pub fn owner_of(&self, signal: &str) -> Option<&str> {
        let key = SignalName::try_from(signal).ok()?;
        self.claims.get(&key)?.as_deref()
    }

    /// Iterate `(signal, owner)` for claimed signals
    pub fn claimed(&self) -> impl Iterator<Item = (&str, &str)> {
        self.claims
            .iter()
            .filter_map(|(name, held)| held.as_deref().map(|owner| (name.as_str(), owner)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> HeaderLayout {
        HeaderLayout::from_table("test", &[(1, "3.3V"), (7, "GPIO4"), (11, "GPIO17"), (12, "GPIO18")]).unwrap()
    }

    #[test]
    fn test_claim_and_release() {
        let mut registry = ClaimRegistry::new(&layout()).unwrap();
        registry.claim("GPIO18", "onewire").unwrap();
        assert_eq!(registry.owner_of("GPIO18"), Some("onewire"));
        assert_eq!(registry.owner_of("GPIO17"), None);

        let previous = registry.release("GPIO18");
        assert_eq!(previous.as_deref(), Some("onewire"));
        assert_eq!(registry.owner_of("GPIO18"), None);
        assert!(registry.release("GPIO18").is_none());
    }

    #[test]
    fn test_claim_unknown_signal() {
        let mut registry = ClaimRegistry::new(&layout()).unwrap();
        assert_eq!(registry.claim("GPIO2", "i2c"), Err(ClaimError::UnknownSignal));
    }

    #[test]
    fn test_overlong_signal_is_unknown() {
        let mut registry = ClaimRegistry::new(&layout()).unwrap();
        assert_eq!(registry.claim("GPIO_WITH_A_VERY_LONG_NAME", "i2c"), Err(ClaimError::UnknownSignal));
        assert_eq!(registry.owner_of("GPIO_WITH_A_VERY_LONG_NAME"), None);
        assert!(registry.release("GPIO_WITH_A_VERY_LONG_NAME").is_none());
    }

    #[test]
    fn test_registry_tracks_every_layout_signal() {
        let registry = ClaimRegistry::new(&layout()).unwrap();
        assert_eq!(registry.claims.len(), 3);
        assert!(registry.claims.values().all(Option::is_none));
    }

    #[test]
    fn test_claim_conflict() {
        let mut registry = ClaimRegistry::new(&layout()).unwrap();
        registry.claim("GPIO4", "sensor").unwrap();
        assert_eq!(registry.claim("GPIO4", "sensor"), Ok(()));
        assert_eq!(registry.claim("GPIO4", "relay"), Err(ClaimError::AlreadyClaimed));
        assert_eq!(registry.owner_of("GPIO4"), Some("sensor"));
    }

    #[test]
    fn test_release_owner() {
        let mut registry = ClaimRegistry::new(&layout()).unwrap();
        registry.claim("GPIO4", "relay").unwrap();
        registry.claim("GPIO17", "relay").unwrap();
        registry.claim("GPIO18", "onewire").unwrap();

        assert_eq!(registry.release_owner("relay"), 2);
        assert_eq!(registry.claimed().count(), 1);
        assert_eq!(registry.claimed().next(), Some(("GPIO18", "onewire")));
    }
}
