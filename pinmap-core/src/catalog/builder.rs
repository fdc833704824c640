//! Catalog builder

use heapless::{FnvIndexMap, Vec};

use super::palette::slot_color;
use super::view::{PinRows, PinView};
use crate::error::InvariantViolation;
use crate::pins::{PinDescriptor, PinKind, PinUsage, SignalInfo, SignalName, MAX_PINS};
use crate::slots::Slot;

/// Signal name to index of the slot bound to it
pub type SelectionIndex = FnvIndexMap<SignalName, usize, MAX_PINS>;

/// Index the slot list by bound signal
///
/// When two slots name the same signal the earlier slot owns it.
pub fn selection_index(slots: &[Slot]) -> Result<SelectionIndex, InvariantViolation> {
    let mut index = SelectionIndex::new();
    for (i, slot) in slots.iter().enumerate() {
        let Some(signal) = &slot.bound_pin else {
            continue;
        };
        if index.contains_key(signal) {
            continue;
        }
        index
            .insert(signal.clone(), i)
            .map_err(|_| InvariantViolation::CapacityExceeded)?;
    }
    Ok(index)
}

/// Build the two header rows from a snapshot and the slot list
///
/// Odd pins land in row A, even pins in row B, each row ordered from the
/// highest pin number down. Slot ownership always wins over a "claimed
/// elsewhere" flag in the snapshot: such a pin is shown selected, in the
/// owning slot's color.
///
/// Pure: identical inputs always give identical rows.
pub fn build_catalog(usage: &PinUsage, slots: &[Slot]) -> Result<PinRows, InvariantViolation> {
    let owners = selection_index(slots)?;
    build_rows(usage, &owners)
}

/// Build the header rows against an already computed selection index
pub(crate) fn build_rows(usage: &PinUsage, owners: &SelectionIndex) -> Result<PinRows, InvariantViolation> {
    let mut numbers: Vec<u8, MAX_PINS> = Vec::new();
    for &pin in usage.keys() {
        numbers
            .push(pin)
            .map_err(|_| InvariantViolation::CapacityExceeded)?;
    }
    numbers.sort_unstable();

    let mut rows = PinRows::default();
    for &pin in numbers.iter().rev() {
        let Some(desc) = usage.get(&pin) else {
            continue;
        };
        let view = pin_view(pin, desc, owners);
        let row = if pin % 2 == 1 {
            &mut rows.row_a
        } else {
            &mut rows.row_b
        };
        row.push(view)
            .map_err(|_| InvariantViolation::CapacityExceeded)?;
    }

    Ok(rows)
}

fn pin_view(pin: u8, desc: &PinDescriptor, owners: &SelectionIndex) -> PinView {
    match desc {
        PinDescriptor::Signal(info) => signal_view(pin, info, owners.get(&info.name).copied()),
        other => PinView::fixed(pin, other.kind()),
    }
}

fn signal_view(pin: u8, info: &SignalInfo, owning_slot: Option<usize>) -> PinView {
    let mut view = PinView {
        pin,
        kind: PinKind::Signal,
        signal: Some(info.name.clone()),
        owner: info.owner.clone(),
        assigned_by_other: info.claimed_elsewhere,
        selected: false,
        color: None,
    };

    // The claim on a pin bound to one of our slots is our own
    if let Some(slot) = owning_slot {
        view.assigned_by_other = false;
        view.selected = true;
        view.color = Some(slot_color(slot));
    }

    view
}
