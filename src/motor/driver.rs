//! Stepper controller.
//!
//! Foreground commands and the tick handler share one [`MotionState`] through a
//! `critical_section::Mutex`, so every multi-field update is atomic with respect
//! to the timer interrupt.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::config::{degrees_to_steps, steps_to_degrees, Rpm, TravelLimits};
use crate::error::Result;

use super::coils::CoilOutput;
use super::state::{MotionState, MotionStatus};
use super::tick::{TickPeriod, TickSource};

/// Interrupt-driven stepper controller.
///
/// All methods take `&self`: keep the controller in a `static` (or a
/// `StaticCell`) and call [`on_tick`](Self::on_tick) from the timer interrupt
/// while `main` issues commands. Commands never block and never fail; a
/// command that is not valid in the current state is ignored.
///
/// # Example
///
/// ```rust,ignore
/// static STEPPER: StaticCell<StepperController<Coils>> = StaticCell::new();
///
/// let stepper = STEPPER.init(StepperController::init(coils, 4096, 12, &mut timer));
///
/// // In the timer interrupt:
/// let _ = stepper.on_tick();
///
/// // In main:
/// stepper.move_degrees_cw(90);
/// while !stepper.is_ready() {}
/// ```
pub struct StepperController<C>
where
    C: CoilOutput,
{
    /// State shared with the tick handler.
    state: Mutex<RefCell<MotionState>>,

    /// Coil outputs, written only by the tick handler.
    coils: Mutex<RefCell<C>>,

    /// Steps per output revolution, fixed at init.
    steps_per_revolution: u16,

    /// Clamped speed, fixed at init.
    rpm: Rpm,
}

impl<C> StepperController<C>
where
    C: CoilOutput,
{
    /// Create a stopped controller at position 0 without arming a timer.
    ///
    /// `rpm` is clamped to `[6, 23]`; a `steps_per_revolution` of 0 is raised to 1.
    pub fn new(coils: C, steps_per_revolution: u16, rpm: u16) -> Self {
        let clamped = Rpm::clamped(rpm);
        if !Rpm::in_range(rpm) {
            warn!("rpm {} out of range, clamped to {}", rpm, clamped.value());
        }

        let steps_per_revolution = if steps_per_revolution == 0 {
            warn!("steps per revolution is 0, using 1");
            1
        } else {
            steps_per_revolution
        };

        Self {
            state: Mutex::new(RefCell::new(MotionState::new())),
            coils: Mutex::new(RefCell::new(coils)),
            steps_per_revolution,
            rpm: clamped,
        }
    }

    /// Create the controller and program `ticker` with its step period.
    pub fn init<T: TickSource>(
        coils: C,
        steps_per_revolution: u16,
        rpm: u16,
        ticker: &mut T,
    ) -> Self {
        let controller = Self::new(coils, steps_per_revolution, rpm);
        controller.start(ticker);
        controller
    }

    /// Program `ticker` with this controller's step period.
    pub fn start<T: TickSource>(&self, ticker: &mut T) {
        let period = self.tick_period();
        debug!(
            "stepper ticking every {} us ({} rpm, {} spr)",
            period.as_micros(),
            self.rpm.value(),
            self.steps_per_revolution
        );
        ticker.arm(period);
    }

    /// Tick handler. Call once per [`tick_period`](Self::tick_period).
    ///
    /// Drives the coils for the current phase, then advances position and phase.
    /// The state advances even if a coil write fails; the error is reported afterwards.
    pub fn on_tick(&self) -> Result<()> {
        critical_section::with(|cs| {
            let levels = self.state.borrow_ref_mut(cs).advance_one_step();
            self.coils.borrow_ref_mut(cs).energize(levels)
        })
    }

    /// Move `steps` clockwise, clamped to the CW limit.
    ///
    /// Ignored if the clamped target is not ahead of the current position.
    pub fn move_cw(&self, steps: i32) {
        if self.update(|state| state.command_cw(steps)) {
            debug!("move cw {} steps", steps);
        } else {
            trace!("move cw {} steps ignored", steps);
        }
    }

    /// Move `steps` counter-clockwise, clamped to the CCW limit.
    ///
    /// Ignored if the clamped target is not behind the current position.
    pub fn move_ccw(&self, steps: i32) {
        if self.update(|state| state.command_ccw(steps)) {
            debug!("move ccw {} steps", steps);
        } else {
            trace!("move ccw {} steps ignored", steps);
        }
    }

    /// Move `degrees` clockwise (converted with truncation toward zero).
    pub fn move_degrees_cw(&self, degrees: i32) {
        self.move_cw(self.degrees_to_steps(degrees));
    }

    /// Move `degrees` counter-clockwise (converted with truncation toward zero).
    pub fn move_degrees_ccw(&self, degrees: i32) {
        self.move_ccw(self.degrees_to_steps(degrees));
    }

    /// Move to an absolute step position.
    ///
    /// Ignored while moving, or unless `target` lies strictly inside the limits.
    pub fn move_to(&self, target: i32) {
        if self.update(|state| state.command_to(target)) {
            debug!("move to {}", target);
        } else {
            trace!("move to {} ignored", target);
        }
    }

    /// Move to an absolute angle in degrees.
    pub fn move_to_degree(&self, degrees: i32) {
        self.move_to(self.degrees_to_steps(degrees));
    }

    /// Stop at the current position.
    ///
    /// Takes effect on the next tick, which drives the current phase once more
    /// and then releases the coils.
    pub fn off(&self) {
        self.update(MotionState::cancel);
        debug!("stop requested");
    }

    /// Move one step clockwise.
    pub fn step_cw(&self) {
        self.move_cw(1);
    }

    /// Move one step counter-clockwise.
    pub fn step_ccw(&self) {
        self.move_ccw(1);
    }

    /// Set the virtual limit switches in steps.
    ///
    /// Ignored while moving or unless `cw > ccw`.
    pub fn set_limits(&self, cw: i32, ccw: i32) {
        if self.update(|state| state.set_limits(cw, ccw)) {
            debug!("limits set to [{}, {}]", ccw, cw);
        } else {
            trace!("limits [{}, {}] ignored", ccw, cw);
        }
    }

    /// Set the virtual limit switches in degrees.
    pub fn set_limits_degree(&self, cw: i32, ccw: i32) {
        self.set_limits(self.degrees_to_steps(cw), self.degrees_to_steps(ccw));
    }

    /// Make the current position the origin. Ignored while moving.
    pub fn reset_position(&self) {
        if self.update(MotionState::reset_position) {
            debug!("position reset");
        } else {
            trace!("position reset ignored");
        }
    }

    /// Current position in steps.
    pub fn position(&self) -> i32 {
        self.read(MotionState::position)
    }

    /// Current position in whole degrees (truncated toward zero).
    pub fn position_degrees(&self) -> i32 {
        steps_to_degrees(self.position(), self.steps_per_revolution)
    }

    /// Target position in steps.
    pub fn setpoint(&self) -> i32 {
        self.read(MotionState::setpoint)
    }

    /// Speed in revolutions per minute, after clamping.
    pub fn rpm(&self) -> u16 {
        self.rpm.value()
    }

    /// Steps per revolution.
    pub fn spr(&self) -> u16 {
        self.steps_per_revolution
    }

    /// Steps remaining in the current move.
    pub fn steps_left(&self) -> u32 {
        self.read(MotionState::steps_left)
    }

    /// Whether the motor is stopped.
    pub fn is_ready(&self) -> bool {
        self.read(MotionState::is_stopped)
    }

    /// Logical motor state.
    pub fn status(&self) -> MotionStatus {
        self.read(MotionState::status)
    }

    /// Active one-hot step mask, 0 when stopped.
    pub fn step_mask(&self) -> u8 {
        self.read(MotionState::step_mask)
    }

    /// Active travel limits.
    pub fn limits(&self) -> TravelLimits {
        self.read(MotionState::limits)
    }

    /// Consistent copy of the whole motion state.
    pub fn snapshot(&self) -> MotionState {
        self.read(MotionState::clone)
    }

    /// Interval between ticks for the configured speed.
    pub fn tick_period(&self) -> TickPeriod {
        TickPeriod::from_speed(self.rpm, self.steps_per_revolution)
    }

    /// Tear down the controller and return the coil outputs.
    pub fn release(self) -> C {
        self.coils.into_inner().into_inner()
    }

    fn degrees_to_steps(&self, degrees: i32) -> i32 {
        degrees_to_steps(degrees, self.steps_per_revolution)
    }

    fn update<R>(&self, f: impl FnOnce(&mut MotionState) -> R) -> R {
        critical_section::with(|cs| f(&mut self.state.borrow_ref_mut(cs)))
    }

    fn read<R>(&self, f: impl FnOnce(&MotionState) -> R) -> R {
        critical_section::with(|cs| f(&self.state.borrow_ref(cs)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, MotorError};
    use crate::motion::{CoilLevels, Phase, RELEASED};

    #[derive(Default)]
    struct Recorder {
        writes: Vec<CoilLevels>,
        fail: bool,
    }

    impl CoilOutput for Recorder {
        fn energize(&mut self, levels: CoilLevels) -> Result<()> {
            self.writes.push(levels);
            if self.fail {
                Err(MotorError::PinError.into())
            } else {
                Ok(())
            }
        }
    }

    #[derive(Default)]
    struct Ticker {
        armed: Option<TickPeriod>,
    }

    impl TickSource for Ticker {
        fn arm(&mut self, period: TickPeriod) {
            self.armed = Some(period);
        }
    }

    #[test]
    fn test_init_clamps_rpm_and_arms_timer() {
        let mut ticker = Ticker::default();
        let stepper = StepperController::init(Recorder::default(), 4096, 40, &mut ticker);

        assert_eq!(stepper.rpm(), 23);
        assert_eq!(stepper.spr(), 4096);
        assert_eq!(ticker.armed, Some(stepper.tick_period()));
        assert_eq!(stepper.tick_period().as_micros(), 636);
        assert!(stepper.is_ready());
        assert_eq!(stepper.position(), 0);
    }

    #[test]
    fn test_zero_spr_raised_to_one() {
        let stepper = StepperController::new(Recorder::default(), 0, 10);
        assert_eq!(stepper.spr(), 1);
    }

    #[test]
    fn test_ticks_drive_coils_before_advancing() {
        let stepper = StepperController::new(Recorder::default(), 4096, 10);
        stepper.move_cw(2);

        for _ in 0..3 {
            stepper.on_tick().unwrap();
        }

        let coils = stepper.release();
        assert_eq!(
            coils.writes,
            [Phase::new(0).levels(), Phase::new(1).levels(), RELEASED]
        );
    }

    #[test]
    fn test_pin_failure_still_advances() {
        let recorder = Recorder {
            fail: true,
            ..Recorder::default()
        };
        let stepper = StepperController::new(recorder, 200, 10);
        stepper.move_ccw(1);

        assert_eq!(stepper.on_tick(), Err(Error::Motor(MotorError::PinError)));
        assert_eq!(stepper.position(), -1);
        assert!(stepper.is_ready());
    }

    #[test]
    fn test_degree_commands_truncate() {
        let stepper = StepperController::new(Recorder::default(), 200, 10);
        stepper.move_degrees_cw(10); // 5.55 -> 5 steps
        assert_eq!(stepper.setpoint(), 5);

        for _ in 0..5 {
            stepper.on_tick().unwrap();
        }
        assert_eq!(stepper.position_degrees(), 9); // 5 * 360 / 200 = 9
    }
}
