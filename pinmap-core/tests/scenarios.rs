//! End-to-end allocation scenarios
//!
//! These run on the host against the public API only.

use pinmap_core::slots::ALL_CONFIGURED_LABEL;
use pinmap_core::{
    ClickOutcome, ControllerState, Cursor, EngineConfig, IgnoreReason, PinDescriptor, PinUsage,
    SignalInfo, Slot, SlotAssignmentController,
};

fn free(name: &str) -> PinDescriptor {
    PinDescriptor::Signal(SignalInfo::free(name).unwrap())
}

#[test]
fn test_two_slots_fill_and_release() {
    let mut usage = PinUsage::new();
    usage.insert(12, free("GPIO12")).unwrap();
    usage.insert(13, free("GPIO13")).unwrap();

    let mut slots = vec![Slot::new("A"), Slot::new("B")];
    {
        let mut ctl = SlotAssignmentController::initialize(&mut slots, usage, EngineConfig::new()).unwrap();

        ctl.handle_click(12).unwrap();
        assert_eq!(ctl.slots()[0].bound_signal(), Some("GPIO12"));
        assert_eq!(ctl.cursor(), Cursor::At(1));
        assert_eq!(ctl.cursor_label(), "B");

        ctl.handle_click(13).unwrap();
        assert_eq!(ctl.slots()[1].bound_signal(), Some("GPIO13"));
        assert_eq!(ctl.cursor(), Cursor::None);
        assert_eq!(ctl.cursor_label(), ALL_CONFIGURED_LABEL);
        assert_eq!(ctl.assigned_count(), 2);

        ctl.handle_click(12).unwrap();
        assert!(ctl.slots()[0].is_unfilled());
        assert_eq!(ctl.cursor(), Cursor::At(0));
        assert_eq!(ctl.assigned_count(), 1);
    }

    // Caller reads the mutated slot list back
    assert_eq!(slots[0].bound_pin, None);
    assert_eq!(slots[1].bound_signal(), Some("GPIO13"));
}

#[test]
fn test_claimed_pin_click_changes_nothing() {
    let mut usage = PinUsage::new();
    usage
        .insert(5, PinDescriptor::Signal(SignalInfo::claimed("GPIO3", "lirc").unwrap()))
        .unwrap();

    let mut slots = vec![Slot::new("A")];
    let mut ctl = SlotAssignmentController::initialize(&mut slots, usage, EngineConfig::new()).unwrap();
    let rows = ctl.rows().clone();

    assert_eq!(
        ctl.handle_click(5).unwrap(),
        ClickOutcome::Ignored(IgnoreReason::ClaimedElsewhere)
    );
    assert_eq!(ctl.rows(), &rows);
    assert_eq!(ctl.assigned_count(), 0);
    assert_eq!(ctl.cursor(), Cursor::At(0));
    assert!(ctl.slots()[0].is_unfilled());
}

#[test]
fn test_readonly_click_changes_nothing() {
    let mut usage = PinUsage::new();
    usage.insert(12, free("GPIO12")).unwrap();
    usage.insert(14, PinDescriptor::Ground).unwrap();

    let mut slots = vec![Slot::new("A"), Slot::bound("B", "GPIO12").unwrap()];
    let mut ctl = SlotAssignmentController::initialize(&mut slots, usage, EngineConfig::readonly()).unwrap();

    for pin in [12, 14] {
        assert_eq!(
            ctl.handle_click(pin).unwrap(),
            ClickOutcome::Ignored(IgnoreReason::Readonly)
        );
    }
    assert_eq!(ctl.slots()[1].bound_signal(), Some("GPIO12"));
    assert_eq!(ctl.assigned_count(), 1);
}

#[test]
fn test_fully_configured_still_unbinds() {
    let mut usage = PinUsage::new();
    usage.insert(11, free("GPIO17")).unwrap();
    usage.insert(12, free("GPIO18")).unwrap();

    let mut slots = vec![Slot::bound("A", "GPIO17").unwrap()];
    let mut ctl = SlotAssignmentController::initialize(&mut slots, usage, EngineConfig::new()).unwrap();
    assert_eq!(ctl.state(), ControllerState::FullyConfigured);

    assert_eq!(
        ctl.handle_click(12).unwrap(),
        ClickOutcome::Ignored(IgnoreReason::Oversubscribed)
    );
    assert_eq!(ctl.handle_click(11).unwrap(), ClickOutcome::Unbound { slot: 0, pin: 11 });
    assert_eq!(ctl.state(), ControllerState::AcceptingInput);
}
