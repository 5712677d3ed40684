use prompt_overlay::lock::{LockController, LockState};
use prompt_overlay::winstyle::{WindowStyle, WS_EX_TRANSPARENT};

#[path = "mock_style.rs"]
mod mock_style;
use mock_style::MockWindowStyle;

fn click_through(style: &MockWindowStyle) -> bool {
    style.ex_style() & WS_EX_TRANSPARENT != 0
}

#[test]
fn toggle_flips_the_click_through_bit() {
    let mut style = MockWindowStyle::default();
    let mut lock = LockController::new(false);

    assert!(lock.toggle(&mut style));
    assert_eq!(lock.state(), LockState::Locked);
    assert!(click_through(&style));

    assert!(!lock.toggle(&mut style));
    assert_eq!(lock.state(), LockState::Unlocked);
    assert!(!click_through(&style));
}

#[test]
fn apply_restores_a_saved_lock() {
    let mut style = MockWindowStyle::default();
    let lock = LockController::new(true);
    lock.apply(&mut style);
    assert!(click_through(&style));
}

#[test]
fn quick_edit_is_a_no_op_while_unlocked() {
    let mut style = MockWindowStyle::default();
    let mut lock = LockController::new(false);

    assert!(!lock.quick_edit(&mut style));
    assert_eq!(lock.state(), LockState::Unlocked);
    assert!(!click_through(&style));
}

#[test]
fn quick_edit_unlocks_until_focus_is_lost() {
    let mut style = MockWindowStyle::default();
    let mut lock = LockController::new(true);
    lock.apply(&mut style);

    assert!(lock.quick_edit(&mut style));
    assert_eq!(lock.state(), LockState::QuickEdit);
    assert!(!click_through(&style));
    // Unlocked for editing, but a crash here must restart unlocked.
    assert!(!lock.persisted_locked());

    assert!(lock.on_focus_lost(&mut style));
    assert_eq!(lock.state(), LockState::Locked);
    assert!(click_through(&style));
    assert!(lock.persisted_locked());
}

#[test]
fn repeated_quick_edit_arms_a_single_observer() {
    let mut style = MockWindowStyle::default();
    let mut lock = LockController::new(true);

    assert!(lock.quick_edit(&mut style));
    assert!(lock.quick_edit(&mut style));

    // One focus loss fully settles the state machine.
    assert!(lock.on_focus_lost(&mut style));
    assert!(!lock.on_focus_lost(&mut style));
    assert_eq!(lock.state(), LockState::Locked);
}

#[test]
fn focus_loss_outside_quick_edit_changes_nothing() {
    let mut style = MockWindowStyle::default();
    let mut lock = LockController::new(false);
    assert!(!lock.on_focus_lost(&mut style));
    assert_eq!(lock.state(), LockState::Unlocked);
}

#[test]
fn toggle_from_quick_edit_unlocks_and_disarms() {
    let mut style = MockWindowStyle::default();
    let mut lock = LockController::new(true);
    lock.quick_edit(&mut style);

    assert!(!lock.toggle(&mut style));
    assert_eq!(lock.state(), LockState::Unlocked);
    assert!(!lock.on_focus_lost(&mut style));
}

#[test]
fn emergency_unlock_works_from_any_locked_state() {
    let mut style = MockWindowStyle::default();

    let mut lock = LockController::new(true);
    lock.apply(&mut style);
    assert!(lock.emergency_unlock(&mut style));
    assert_eq!(lock.state(), LockState::Unlocked);
    assert!(!click_through(&style));

    let mut lock = LockController::new(true);
    lock.quick_edit(&mut style);
    assert!(lock.emergency_unlock(&mut style));
    assert_eq!(lock.state(), LockState::Unlocked);

    let mut lock = LockController::new(false);
    assert!(!lock.emergency_unlock(&mut style));
}
