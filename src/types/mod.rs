pub mod config;
pub mod control;
pub mod events;
pub mod state;
pub mod status;

pub use config::FlightConfig;
pub use control::Demands;
pub use events::FlightEvent;
pub use state::VehicleState;
pub use status::{ArmState, ArmingBlocker, DisarmReason};
