//! Collaborator contracts consumed by the control core.
//!
//! Every trait here is the boundary to a swappable implementation: a
//! hardware board, a simulated one, a radio receiver, a control law. The
//! orchestrator depends only on these contracts, never on their internals.
//! All methods are non-blocking; sensor polls answer "is fresh data
//! available" with `Option`/`bool` and return immediately.

use nalgebra::UnitQuaternion;

use crate::types::control::Demands;
use crate::types::state::VehicleState;

/// Board-level sensor and serial access.
///
/// A fresh sample is data not yet consumed by the orchestrator; each poll
/// must report a given sample at most once. Interrupt-driven capture has to
/// hand data off through a single-writer buffer (see [`crate::sync::Fresh`])
/// before these polls observe it.
pub trait Board {
    /// Fresh angular rates in radians per second, if available.
    fn get_gyrometer(&mut self) -> Option<[f32; 3]>;

    /// Fresh orientation estimate, if available.
    fn get_orientation(&mut self) -> Option<UnitQuaternion<f32>>;

    /// Fresh linear acceleration in g, if available.
    fn get_accelerometer(&mut self) -> Option<[f32; 3]>;

    /// Fresh pressure sample in Pascal, if available.
    fn get_barometer(&mut self) -> Option<f32>;

    /// Number of inbound serial bytes currently buffered.
    fn serial_available_bytes(&self) -> usize;

    /// Read one buffered inbound byte. Only called after
    /// [`Board::serial_available_bytes`] reported it.
    fn serial_read_byte(&mut self) -> u8;

    /// Queue one outbound serial byte.
    fn serial_write_byte(&mut self, byte: u8);

    /// Drive the arming status indicator (LED or similar).
    fn show_armed_status(&mut self, armed: bool);
}

/// Transmitter/receiver decoding, produces the raw demand vector.
pub trait Receiver {
    fn init(&mut self);

    /// Poll for a fresh demand frame. `headless_yaw_offset` is the current
    /// yaw relative to the yaw captured at arming, for headless mode.
    /// Returns `false` when no fresh frame arrived; previous demands then
    /// carry over.
    fn poll_demands(&mut self, headless_yaw_offset: f32) -> bool;

    /// Demand vector from the most recent fresh frame.
    fn demands(&self) -> Demands;

    fn throttle_is_down(&self) -> bool;

    /// Pilot gesture requesting to arm.
    fn arming(&self) -> bool;

    /// Pilot gesture requesting to disarm.
    fn disarming(&self) -> bool;

    /// Whether the transmitter link is lost.
    fn lost_signal(&self) -> bool;

    /// Whether the pilot selected hover (position hold) mode.
    fn in_hover_mode(&self) -> bool;
}

/// Inner-loop attitude/rate control law.
pub trait Stabilizer {
    /// Push the latest attitude estimate, for angle-based gain terms.
    fn update_euler_angles(&mut self, angles: [f32; 3]);

    /// Push the latest raw pilot demands.
    fn update_demands(&mut self, demands: &Demands);

    /// Reset integral accumulators (anti-windup while grounded).
    fn reset_integral(&mut self);

    /// Correct `demands` using the current angular rates.
    fn modify_demands(&mut self, rates: [f32; 3], demands: &mut Demands);

    /// Maximum attitude angle (radians) at which arming is safe.
    fn max_arming_angle(&self) -> f32 {
        crate::consts::DEFAULT_MAX_ARMING_ANGLE
    }
}

/// Outer-loop position/altitude hold control law. Optional collaborator;
/// presence is fixed when the core is constructed.
pub trait HoverControl {
    /// Correct `demands` using the estimated vehicle state.
    fn modify_demands(&mut self, state: &VehicleState, demands: &mut Demands);
}

/// Marker for a core built without a hover controller.
pub struct NoHover;

impl HoverControl for NoHover {
    fn modify_demands(&mut self, _state: &VehicleState, _demands: &mut Demands) {}
}

/// Maps a demand vector to per-motor commands. The orchestrator never
/// writes raw actuator values; these three entry points are the only way
/// motors are driven.
pub trait Mixer {
    /// Drive motors from the final demand vector. Only called while armed.
    fn run_armed(&mut self, demands: &Demands);

    /// Disarmed bench-test mode, lets a ground station exercise motors.
    fn run_disarmed(&mut self);

    /// Force all motors off immediately.
    fn cut_motors(&mut self);
}

/// Streaming request/response codec for ground-station communication,
/// layered over the raw serial byte stream. Framing is entirely internal
/// to the implementation; the core only moves bytes.
pub trait TelemetryProtocol {
    /// Feed one inbound byte to the codec.
    fn update(&mut self, byte: u8);

    /// Number of response bytes queued for output.
    fn available_bytes(&self) -> usize;

    /// Read one queued response byte. Only called after
    /// [`TelemetryProtocol::available_bytes`] reported it.
    fn read_byte(&mut self) -> u8;
}
