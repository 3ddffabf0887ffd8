use serde::{Deserialize, Serialize};

use super::status::{ArmState, DisarmReason};

/// Structured observability events emitted by the orchestrator.
///
/// Events replace the direct console writes of classic firmwares: they can
/// be redirected, sampled or dropped without touching control logic. The
/// hook is optional and never affects behavior.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FlightEvent {
    /// Final throttle demand of a gyro cycle, after stabilization and hover.
    ThrottleSample(f32),
    /// The arming state machine changed state.
    ArmStateChanged(ArmState),
    /// The vehicle disarmed, with the reason.
    Disarmed(DisarmReason),
}

/// Observability hook installed at construction time.
pub type EventHook = fn(&FlightEvent);
