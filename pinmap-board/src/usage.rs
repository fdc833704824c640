//! Pin usage snapshot assembly

use pinmap_core::pins::{PinDescriptor, PinUsage, SignalInfo};

use crate::layout::{HeaderLayout, LayoutError};
use crate::registry::ClaimRegistry;

/// Combine a layout with the current claims into a usage snapshot
///
/// Signals held in `registry` come out as claimed elsewhere, carrying
/// their owner. Everything else is copied from the layout.
pub fn pin_usage(layout: &HeaderLayout, registry: &ClaimRegistry) -> Result<PinUsage, LayoutError> {
    let mut usage = PinUsage::new();
    for (pin, label) in layout.pins() {
        let claim = label
            .signal_name()
            .and_then(|name| registry.owner_of(name).map(|owner| (name, owner)));
        let descriptor = match claim {
            Some((name, owner)) => {
                PinDescriptor::Signal(SignalInfo::claimed(name, owner).ok_or(LayoutError::InvalidLabel)?)
            }
            None => label.descriptor(),
        };
        usage
            .insert(pin, descriptor)
            .map_err(|_| LayoutError::TooManyPins)?;
    }
    Ok(usage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::revision::BoardRevision;
    use pinmap_core::pins::PinKind;

    #[test]
    fn test_unclaimed_usage() {
        let layout = BoardRevision::Rev2.layout().unwrap();
        let registry = ClaimRegistry::new(&layout).unwrap();
        let usage = pin_usage(&layout, &registry).unwrap();

        assert_eq!(usage.len(), 26);
        assert_eq!(usage.get(&1).map(|d| d.kind()), Some(PinKind::Power3v3));
        assert_eq!(usage.get(&2).map(|d| d.kind()), Some(PinKind::Power5v));
        assert_eq!(usage.get(&6).map(|d| d.kind()), Some(PinKind::Ground));
        assert_eq!(usage.get(&12).and_then(|d| d.signal_name()), Some("GPIO18"));
        assert!(usage.values().filter_map(|d| d.signal()).all(|s| !s.claimed_elsewhere));
    }

    #[test]
    fn test_claims_marked() {
        let layout = BoardRevision::Rev3.layout().unwrap();
        let mut registry = ClaimRegistry::new(&layout).unwrap();
        registry.claim("GPIO4", "onewire").unwrap();
        let usage = pin_usage(&layout, &registry).unwrap();

        let info = usage.get(&7).and_then(|d| d.signal()).unwrap();
        assert!(info.claimed_elsewhere);
        assert_eq!(info.owner.as_deref(), Some("onewire"));
        assert_eq!(usage.get(&27).map(|d| d.kind()), Some(PinKind::Reserved));

        let claimed = usage
            .values()
            .filter_map(|d| d.signal())
            .filter(|s| s.claimed_elsewhere)
            .count();
        assert_eq!(claimed, 1);
    }
}
