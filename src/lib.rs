//! Control-loop core for a small multirotor autopilot.
//!
//! The crate owns the per-cycle orchestration of a flight controller: sensor
//! intake, the arming/failsafe state machine, the stabilization → hover →
//! mixing chain and the ground-station telemetry relay. Everything that
//! touches hardware or decodes a protocol lives behind the traits in
//! [`hw_abstraction`]; the core never depends on a concrete board, receiver
//! or mixer.
//!
//! The caller drives the loop by invoking [`flight::FlightCore::update`] at
//! a fixed rate. The core itself never sleeps, spins or blocks.

#![no_std]

// Export the logging macros for either defmt or log
#[macro_use]
pub mod logging;

pub mod arming;
pub mod consts;
pub mod errors;
pub mod flight;
pub mod hw_abstraction;
pub mod serial;
pub mod sync;
pub mod types;

// Re-exported for implementors
pub use heapless;
pub use nalgebra;

pub use flight::FlightCore;
