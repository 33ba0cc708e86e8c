//! Unit tests for the step transition.

use tick_stepper::motion::RELEASED;
use tick_stepper::{MotionState, MotionStatus, Phase};

/// Test that each tick outputs the mask held before the transition.
#[test]
fn test_output_precedes_transition() {
    let mut state = MotionState::new();
    assert!(state.command_cw(1));

    let before = state.step_mask();
    let out = state.advance_one_step();
    assert_eq!(Some(out), Phase::from_mask(before).map(Phase::levels));
    assert_eq!(state.status(), MotionStatus::Stopped);

    assert_eq!(state.advance_one_step(), RELEASED);
}

/// Test a full electrical cycle returns to the starting phase.
#[test]
fn test_full_cycle_wraps() {
    let mut state = MotionState::new();
    state.command_cw(9);

    let mut masks = Vec::new();
    for _ in 0..8 {
        masks.push(state.step_mask());
        state.advance_one_step();
    }

    assert_eq!(masks, [1, 2, 4, 8, 16, 32, 64, 128]);
    assert_eq!(state.step_mask(), 1);
}

/// Test that a limit stop coinciding with the setpoint keeps a valid saved phase.
#[test]
fn test_limit_and_setpoint_same_tick() {
    let mut state = MotionState::new();
    assert!(state.set_limits(3, -3));
    assert!(state.command_cw(3));
    for _ in 0..3 {
        state.advance_one_step();
    }

    assert!(state.is_stopped());
    assert_eq!(state.position(), 3);
    assert_eq!(state.last_mask().count_ones(), 1);
}
