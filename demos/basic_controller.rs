//! Basic controller example.
//!
//! Runs a controller on the host: a background thread stands in for the timer
//! interrupt and calls `on_tick()` at the computed period, while `main` issues
//! commands and polls for completion.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tick_stepper::{CoilPins, StepperController, TickPeriod, TickSource};

/// Output pin that only remembers its level.
struct MockPin {
    state: bool,
}

impl MockPin {
    fn new() -> Self {
        Self { state: false }
    }
}

impl embedded_hal::digital::OutputPin for MockPin {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.state = true;
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.state = false;
        Ok(())
    }
}

impl embedded_hal::digital::ErrorType for MockPin {
    type Error = core::convert::Infallible;
}

/// Timer stand-in that records the armed period for the tick thread.
#[derive(Default)]
struct HostTimer {
    period: Option<TickPeriod>,
}

impl TickSource for HostTimer {
    fn arm(&mut self, period: TickPeriod) {
        self.period = Some(period);
    }
}

fn main() {
    println!("=== Basic Controller Example ===\n");

    let coils = CoilPins::new(MockPin::new(), MockPin::new(), MockPin::new(), MockPin::new());
    let mut timer = HostTimer::default();

    // 28BYJ-48 in half-step mode; 30 rpm is clamped to 23.
    let stepper = StepperController::init(coils, 4096, 30, &mut timer);
    let period = timer.period.expect("timer armed by init");

    println!("rpm: {} (requested 30)", stepper.rpm());
    println!("tick period: {} us", period.as_micros());

    stepper.set_limits_degree(180, -180);
    let limits = stepper.limits();
    println!("limits: [{}, {}] steps\n", limits.ccw(), limits.cw());

    let running = AtomicBool::new(true);

    std::thread::scope(|scope| {
        scope.spawn(|| {
            while running.load(Ordering::Relaxed) {
                if stepper.on_tick().is_err() {
                    eprintln!("coil write failed");
                }
                std::thread::sleep(Duration::from_nanos(period.as_nanos()));
            }
        });

        for degrees in [90, -45, 170, 0] {
            stepper.move_to_degree(degrees);
            println!(
                "move to {:>4} deg: setpoint {} steps, {} left",
                degrees,
                stepper.setpoint(),
                stepper.steps_left()
            );
            while !stepper.is_ready() {
                std::thread::sleep(Duration::from_millis(10));
            }
            println!(
                "  reached {} steps ({} deg), state {}",
                stepper.position(),
                stepper.position_degrees(),
                stepper.status().name()
            );
        }

        // Past the CW limit: clamped to 180 degrees.
        stepper.move_degrees_cw(400);
        println!("\nmove 400 deg cw: setpoint clamped to {} steps", stepper.setpoint());
        std::thread::sleep(Duration::from_millis(200));
        stepper.off();
        std::thread::sleep(Duration::from_millis(10));
        println!(
            "stopped early at {} steps, ready: {}",
            stepper.position(),
            stepper.is_ready()
        );

        running.store(false, Ordering::Relaxed);
    });

    let (in1, in2, in3, in4) = stepper.release().release();
    println!(
        "\nfinal coil levels: {} {} {} {}",
        in1.state as u8, in2.state as u8, in3.state as u8, in4.state as u8
    );
}
