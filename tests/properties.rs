//! Property tests for the step transition.

use proptest::prelude::*;

use tick_stepper::MotionState;

#[derive(Debug, Clone)]
enum Command {
    Cw(i32),
    Ccw(i32),
    To(i32),
    Off,
    Tick(u8),
}

fn command() -> impl Strategy<Value = Command> {
    prop_oneof![
        (-5i32..200).prop_map(Command::Cw),
        (-5i32..200).prop_map(Command::Ccw),
        (-300i32..300).prop_map(Command::To),
        Just(Command::Off),
        (1u8..40).prop_map(Command::Tick),
    ]
}

fn apply(state: &mut MotionState, command: &Command) {
    match *command {
        Command::Cw(steps) => {
            state.command_cw(steps);
        }
        Command::Ccw(steps) => {
            state.command_ccw(steps);
        }
        Command::To(target) => {
            state.command_to(target);
        }
        Command::Off => state.cancel(),
        Command::Tick(_) => {}
    }
}

proptest! {
    #[test]
    fn position_stays_within_limits(
        ccw in -150i32..0,
        cw in 1i32..150,
        commands in proptest::collection::vec(command(), 1..60),
    ) {
        let mut state = MotionState::new();
        prop_assert!(state.set_limits(cw, ccw));

        for command in &commands {
            apply(&mut state, command);
            if let Command::Tick(n) = *command {
                for _ in 0..n {
                    state.advance_one_step();
                    prop_assert!(state.position() <= cw);
                    prop_assert!(state.position() >= ccw);
                }
            }
        }
    }

    #[test]
    fn mask_is_zero_when_stopped_and_one_hot_when_moving(
        commands in proptest::collection::vec(command(), 1..60),
    ) {
        let mut state = MotionState::new();

        for command in &commands {
            apply(&mut state, command);
            let ticks = match *command {
                Command::Tick(n) => n,
                _ => 1,
            };
            for _ in 0..ticks {
                state.advance_one_step();
                if state.is_stopped() {
                    prop_assert_eq!(state.step_mask(), 0);
                } else {
                    prop_assert_eq!(state.step_mask().count_ones(), 1);
                }
                prop_assert_eq!(state.last_mask().count_ones(), 1);
            }
        }
    }

    #[test]
    fn move_to_is_monotonic_and_exact(target in -500i32..500) {
        prop_assume!(target != 0);
        let mut state = MotionState::new();
        prop_assert!(state.command_to(target));

        let step = if target > 0 { 1 } else { -1 };
        let mut previous = state.position();
        let mut ticks = 0;
        while !state.is_stopped() {
            state.advance_one_step();
            prop_assert_eq!(state.position(), previous + step);
            previous = state.position();
            ticks += 1;
        }

        prop_assert_eq!(state.position(), target);
        prop_assert_eq!(ticks, target.abs());
        prop_assert_eq!(state.steps_left(), 0);
    }

    #[test]
    fn degree_round_trip(degrees in 0i32..720, spr in 1u16..5000) {
        let steps = tick_stepper::config::degrees_to_steps(degrees, spr);
        let mut state = MotionState::new();
        state.command_cw(steps);
        for _ in 0..steps {
            state.advance_one_step();
        }
        state.command_ccw(steps);
        for _ in 0..steps {
            state.advance_one_step();
        }

        prop_assert_eq!(state.position(), 0);
        prop_assert!(state.is_stopped());
    }
}
