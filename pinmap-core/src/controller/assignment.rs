//! Slot assignment controller implementation

use super::events::{ClickOutcome, ControllerState, IgnoreReason, RefreshReport, UnboundSlot};
use crate::catalog::builder::{build_rows, selection_index, SelectionIndex};
use crate::catalog::{PinRow, PinRows, PinView};
use crate::config::EngineConfig;
use crate::error::InvariantViolation;
use crate::pins::{has_signal, PinUsage, SignalName};
use crate::slots::cursor::{find_next_unfilled, Cursor, ALL_CONFIGURED_LABEL};
use crate::slots::slot::{count_bound, Slot};

/// Assigns signal pins to the caller's slots
///
/// The controller holds the only mutable borrow of the slot list, so
/// `bound_pin` fields cannot change behind its back. Every mutation
/// rebuilds the catalog from the current snapshot and recomputes the
/// cursor; fallible steps run before anything is committed, so a failed
/// operation leaves the previous state in place.
pub struct SlotAssignmentController<'s> {
    /// Caller's slots, mutated in place
    slots: &'s mut [Slot],
    /// Last successfully installed snapshot
    usage: PinUsage,
    /// Engine configuration
    config: EngineConfig,
    /// Derived header rows
    rows: PinRows,
    /// Signal name to owning slot
    selected: SelectionIndex,
    /// Number of slots with a bound pin
    assigned_count: usize,
    /// Upper bound on simultaneously selected pins
    max_selectable: usize,
    /// Next slot to configure
    cursor: Cursor,
}

impl<'s> SlotAssignmentController<'s> {
    /// Create a controller over `slots`
    ///
    /// Slots that are already bound count toward the assigned tally and
    /// show their pins as selected.
    pub fn initialize(
        slots: &'s mut [Slot],
        usage: PinUsage,
        config: EngineConfig,
    ) -> Result<Self, InvariantViolation> {
        let mut controller = Self {
            slots,
            usage,
            config,
            rows: PinRows::default(),
            selected: SelectionIndex::new(),
            assigned_count: 0,
            max_selectable: 0,
            cursor: Cursor::None,
        };
        controller.reset()?;

        info!(
            "Pin controller ready: {} slots, {} assigned, {} pins",
            controller.max_selectable,
            controller.assigned_count,
            controller.rows.len()
        );
        Ok(controller)
    }

    /// Handle a click on physical pin `pin`
    ///
    /// Illegal clicks are absorbed and reported as
    /// [`ClickOutcome::Ignored`]. Only a pin number missing from the
    /// catalog is an error.
    pub fn handle_click(&mut self, pin: u8) -> Result<ClickOutcome, InvariantViolation> {
        if self.config.readonly {
            debug!("Ignoring click on pin {}: readonly", pin);
            return Ok(ClickOutcome::Ignored(IgnoreReason::Readonly));
        }

        let view = self
            .rows
            .find(pin)
            .ok_or(InvariantViolation::UnknownPin(pin))?;
        let Some(signal) = view.signal.clone() else {
            return Ok(ClickOutcome::Ignored(IgnoreReason::NotSignal));
        };
        if view.assigned_by_other {
            debug!("Ignoring click on pin {}: claimed elsewhere", pin);
            return Ok(ClickOutcome::Ignored(IgnoreReason::ClaimedElsewhere));
        }

        if view.selected {
            let slot = self
                .selected
                .get(&signal)
                .copied()
                .ok_or(InvariantViolation::MissingOwner(pin))?;
            self.set_binding(slot, None)?;
            info!("Unbound {} from slot {}", signal, slot);
            return Ok(ClickOutcome::Unbound { slot, pin });
        }

        if self.assigned_count >= self.max_selectable {
            debug!("Ignoring click on pin {}: all slots filled", pin);
            return Ok(ClickOutcome::Ignored(IgnoreReason::Oversubscribed));
        }

        let slot = self.cursor.index().ok_or(InvariantViolation::MissingCursor)?;
        self.set_binding(slot, Some(signal.clone()))?;
        info!("Bound {} to slot {}", signal, slot);
        Ok(ClickOutcome::Bound { slot, pin })
    }

    /// Install a refreshed pin usage snapshot
    ///
    /// Bindings are kept, except for slots whose signal no longer exists
    /// in the new snapshot: those are unbound and listed in the report.
    pub fn replace_usage(&mut self, usage: PinUsage) -> Result<RefreshReport, InvariantViolation> {
        let mut report = RefreshReport::default();
        for (slot, entry) in self.slots.iter().enumerate() {
            let Some(signal) = &entry.bound_pin else {
                continue;
            };
            if !has_signal(&usage, signal) {
                report
                    .unbound
                    .push(UnboundSlot {
                        slot,
                        signal: signal.clone(),
                    })
                    .map_err(|_| InvariantViolation::CapacityExceeded)?;
            }
        }

        let previous_usage = core::mem::replace(&mut self.usage, usage);
        let previous_count = self.assigned_count;
        for lost in &report.unbound {
            self.slots[lost.slot].bound_pin = None;
            self.assigned_count -= 1;
        }

        if let Err(e) = self.rebuild() {
            for lost in &report.unbound {
                self.slots[lost.slot].bound_pin = Some(lost.signal.clone());
            }
            self.assigned_count = previous_count;
            self.usage = previous_usage;
            return Err(e);
        }

        for lost in &report.unbound {
            warn!("Slot {} lost {}: pin left the snapshot", lost.slot, lost.signal);
        }
        Ok(report)
    }

    /// Swap in a new slot list
    ///
    /// Equivalent to a fresh [`initialize`](Self::initialize) with the
    /// current snapshot and configuration. Returns the previous slot list.
    pub fn replace_slots(&mut self, slots: &'s mut [Slot]) -> Result<&'s mut [Slot], InvariantViolation> {
        let previous = core::mem::replace(&mut self.slots, slots);
        if let Err(e) = self.reset() {
            self.slots = previous;
            return Err(e);
        }
        Ok(previous)
    }

    /// Point the cursor at the first unfilled slot
    pub fn recompute_cursor(&mut self) {
        self.cursor = find_next_unfilled(self.slots);
    }

    /// Verify the assigned tally against the slot list
    ///
    /// A mismatch is a programming error and panics in debug builds.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        check_count(self.assigned_count, self.slots)
    }

    /// Get both header rows
    pub fn rows(&self) -> &PinRows {
        &self.rows
    }

    /// Get row A (odd pins, descending)
    pub fn row_a(&self) -> &PinRow {
        &self.rows.row_a
    }

    /// Get row B (even pins, descending)
    pub fn row_b(&self) -> &PinRow {
        &self.rows.row_b
    }

    /// Look up one pin's view state
    pub fn pin(&self, pin: u8) -> Option<&PinView> {
        self.rows.find(pin)
    }

    /// Get the allocation cursor
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Label of the slot to configure next
    pub fn cursor_label(&self) -> &str {
        match self.cursor {
            Cursor::At(index) => self.slots[index].label.as_str(),
            Cursor::None => ALL_CONFIGURED_LABEL,
        }
    }

    /// Number of slots with a bound pin
    pub fn assigned_count(&self) -> usize {
        self.assigned_count
    }

    /// Maximum number of simultaneously selected pins
    pub fn max_selectable(&self) -> usize {
        self.max_selectable
    }

    /// Get the controller macro-state
    pub fn state(&self) -> ControllerState {
        if self.cursor.is_none() {
            ControllerState::FullyConfigured
        } else {
            ControllerState::AcceptingInput
        }
    }

    /// Read the slot list
    pub fn slots(&self) -> &[Slot] {
        self.slots
    }

    /// Get the installed snapshot
    pub fn usage(&self) -> &PinUsage {
        &self.usage
    }

    /// Get the engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Release the slot list
    pub fn into_slots(self) -> &'s mut [Slot] {
        self.slots
    }

    /// Recount bound slots and rebuild all derived state
    fn reset(&mut self) -> Result<(), InvariantViolation> {
        let previous = (self.max_selectable, self.assigned_count);
        self.max_selectable = self.slots.len();
        self.assigned_count = count_bound(self.slots);
        if let Err(e) = self.rebuild() {
            (self.max_selectable, self.assigned_count) = previous;
            return Err(e);
        }
        Ok(())
    }

    /// Set one slot's binding, rolling back if the rebuild fails
    fn set_binding(&mut self, slot: usize, value: Option<SignalName>) -> Result<(), InvariantViolation> {
        let tracked = self.assigned_count;
        let previous = core::mem::replace(&mut self.slots[slot].bound_pin, value);
        self.assigned_count = match (previous.is_some(), self.slots[slot].bound_pin.is_some()) {
            (false, true) => tracked + 1,
            (true, false) => tracked - 1,
            _ => tracked,
        };

        if let Err(e) = self.rebuild() {
            self.slots[slot].bound_pin = previous;
            self.assigned_count = tracked;
            return Err(e);
        }
        Ok(())
    }

    /// Rebuild the catalog, selection index and cursor
    ///
    /// Nothing is committed unless every step succeeds.
    fn rebuild(&mut self) -> Result<(), InvariantViolation> {
        check_count(self.assigned_count, self.slots)?;
        let selected = selection_index(self.slots)?;
        let rows = build_rows(&self.usage, &selected)?;

        self.rows = rows;
        self.selected = selected;
        self.recompute_cursor();
        Ok(())
    }
}

fn check_count(tracked: usize, slots: &[Slot]) -> Result<(), InvariantViolation> {
    let actual = count_bound(slots);
    debug_assert_eq!(tracked, actual, "assigned count out of sync with slots");
    if tracked != actual {
        return Err(InvariantViolation::AssignedCountMismatch { tracked, actual });
    }
    Ok(())
}
