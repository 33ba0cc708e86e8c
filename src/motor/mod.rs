//! Motor module for tick-stepper.
//!
//! Provides the motion state machine, the interrupt-driven controller, and the
//! coil output and tick source adapters.

mod builder;
mod coils;
mod driver;
pub mod state;
mod tick;

pub use builder::StepperControllerBuilder;
pub use coils::{CoilOutput, CoilPins};
pub use driver::StepperController;
pub use state::{MotionState, MotionStatus};
pub use tick::{TickPeriod, TickSource};
