//! Arming/failsafe state machine.
//!
//! Three states: `Disarmed`, `Armed` and `Failsafe`. The machine is the
//! single authority over arming; no other code path may set the vehicle
//! armed. `Failsafe` is entered only from `Armed` on signal loss, is sticky
//! within a flight, and clears on an explicit disarm gesture received on a
//! fresh receiver frame (a fresh frame implies the link has recovered).

use num_traits::Float as _;

use crate::consts::{AXIS_PITCH, AXIS_ROLL, AXIS_YAW};
use crate::errors::FlightError;
use crate::types::status::{ArmState, ArmingBlocker};

#[derive(Debug)]
pub struct ArmingStateMachine {
    state: ArmState,
    yaw_initial: f32,
}

impl ArmingStateMachine {
    pub const fn new() -> Self {
        ArmingStateMachine {
            state: ArmState::Disarmed,
            yaw_initial: 0.,
        }
    }

    pub fn state(&self) -> ArmState {
        self.state
    }

    pub fn is_armed(&self) -> bool {
        self.state == ArmState::Armed
    }

    pub fn in_failsafe(&self) -> bool {
        self.state == ArmState::Failsafe
    }

    /// Yaw angle captured at the most recent successful arm transition.
    /// Reference for headless mode; overwritten on every arm.
    pub fn yaw_initial(&self) -> f32 {
        self.yaw_initial
    }

    /// Attempt the `Disarmed` → `Armed` transition. This is the single
    /// choke point for all arming preconditions: not already armed, no
    /// latched failsafe, and roll/pitch within the safe arming angle.
    ///
    /// On success the current yaw is captured as the headless reference.
    /// On rejection the state is unchanged and the returned blocker flags
    /// name every failed precondition.
    pub fn request_arm(
        &mut self,
        euler_angles: &[f32; 3],
        max_arming_angle: f32,
    ) -> Result<(), FlightError> {
        let mut blocker = ArmingBlocker::empty();

        blocker.set(ArmingBlocker::ALREADY_ARMED, self.state == ArmState::Armed);
        blocker.set(ArmingBlocker::FAILSAFE, self.state == ArmState::Failsafe);
        blocker.set(
            ArmingBlocker::HIGH_ROLL,
            euler_angles[AXIS_ROLL].abs() >= max_arming_angle,
        );
        blocker.set(
            ArmingBlocker::HIGH_PITCH,
            euler_angles[AXIS_PITCH].abs() >= max_arming_angle,
        );

        if !blocker.is_empty() {
            return Err(FlightError::ArmingBlocked(blocker));
        }

        self.state = ArmState::Armed;
        self.yaw_initial = euler_angles[AXIS_YAW];
        Ok(())
    }

    /// Disarm gesture. `Armed` → `Disarmed`, and `Failsafe` → `Disarmed`
    /// (clearing the latch). Returns whether the state changed.
    pub fn request_disarm(&mut self) -> bool {
        match self.state {
            ArmState::Disarmed => false,
            ArmState::Armed => {
                self.state = ArmState::Disarmed;
                true
            }
            ArmState::Failsafe => {
                info!("arming: failsafe cleared by disarm gesture");
                self.state = ArmState::Disarmed;
                true
            }
        }
    }

    /// Signal loss observed while armed. `Armed` → `Failsafe`; in any other
    /// state this is a no-op. Returns whether the transition happened, in
    /// which case the caller must cut motors.
    pub fn signal_lost(&mut self) -> bool {
        if self.state == ArmState::Armed {
            self.state = ArmState::Failsafe;
            true
        } else {
            false
        }
    }
}

impl Default for ArmingStateMachine {
    fn default() -> Self {
        Self::new()
    }
}
