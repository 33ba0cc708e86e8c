//! Unit test harness for tick-stepper.
//!
//! This module organizes unit tests for each component of the library.

mod config_parsing;
mod config_validation;
mod motion_state;
