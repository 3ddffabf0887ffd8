//! Flight-control orchestrator.
//!
//! [`FlightCore`] owns the vehicle state and the arming/failsafe state
//! machine, and runs one fixed-shape control cycle per [`FlightCore::update`]
//! call: gyro check → orientation check → receiver check → barometer check →
//! accelerometer check. Failsafe is re-evaluated synchronously inside the
//! gyro step, the telemetry relay runs inside the orientation step. The
//! caller is responsible for cadence; the core never sleeps or blocks.

use crate::arming::ArmingStateMachine;
use crate::consts::AXIS_YAW;
use crate::errors::{ConfigError, FlightError};
use crate::hw_abstraction::{Board, HoverControl, Mixer, NoHover, Receiver, Stabilizer, TelemetryProtocol};
use crate::types::config::FlightConfig;
use crate::types::events::{EventHook, FlightEvent};
use crate::types::state::VehicleState;
use crate::types::status::{ArmState, DisarmReason};

pub struct FlightCore<B, R, S, M, T, H = NoHover> {
    board: B,
    receiver: R,
    stabilizer: S,
    mixer: M,
    telemetry: T,
    hover: Option<H>,

    state: VehicleState,
    arming: ArmingStateMachine,

    /// Last value reported to the board status indicator. The notification
    /// is edge triggered, one call per transition.
    reported_armed: Option<bool>,

    hook: Option<EventHook>,
}

impl<B, R, S, M, T> FlightCore<B, R, S, M, T, NoHover>
where
    B: Board,
    R: Receiver,
    S: Stabilizer,
    M: Mixer,
    T: TelemetryProtocol,
{
    /// Build a core without a hover controller. Validates the configuration
    /// and the stabilizer's arming angle, and initializes the receiver.
    pub fn new(
        board: B,
        mut receiver: R,
        stabilizer: S,
        mixer: M,
        telemetry: T,
        config: FlightConfig,
    ) -> Result<Self, FlightError> {
        if let Err(err) = config.validate() {
            error!("flight: rejecting configuration: {}", err);
            return Err(err.into());
        }
        if !(stabilizer.max_arming_angle() > 0.) {
            error!("flight: stabilizer reports a non-positive arming angle");
            return Err(ConfigError::NonPositiveArmingAngle.into());
        }

        receiver.init();

        Ok(FlightCore {
            board,
            receiver,
            stabilizer,
            mixer,
            telemetry,
            hover: None,
            state: VehicleState::new(config.baro_ground_samples),
            arming: ArmingStateMachine::new(),
            reported_armed: None,
            hook: None,
        })
    }

    /// Attach a hover controller. Presence is fixed from here on; the
    /// per-cycle hover step only runs when one was attached.
    pub fn with_hover<H>(self, hover: H) -> FlightCore<B, R, S, M, T, H>
    where
        H: HoverControl,
    {
        FlightCore {
            board: self.board,
            receiver: self.receiver,
            stabilizer: self.stabilizer,
            mixer: self.mixer,
            telemetry: self.telemetry,
            hover: Some(hover),
            state: self.state,
            arming: self.arming,
            reported_armed: self.reported_armed,
            hook: self.hook,
        }
    }
}

impl<B, R, S, M, T, H> FlightCore<B, R, S, M, T, H>
where
    B: Board,
    R: Receiver,
    S: Stabilizer,
    M: Mixer,
    T: TelemetryProtocol,
    H: HoverControl,
{
    /// Install the observability hook.
    pub fn with_event_hook(mut self, hook: EventHook) -> Self {
        self.hook = Some(hook);
        self
    }

    /// Run one control cycle. Each sensor stream is consumed at most once,
    /// and only when the board reports fresh data.
    pub fn update(&mut self) {
        self.check_gyrometer();
        self.check_orientation();
        self.check_receiver();
        self.check_barometer();
        self.check_accelerometer();
    }

    pub fn state(&self) -> &VehicleState {
        &self.state
    }

    pub fn arm_state(&self) -> ArmState {
        self.arming.state()
    }

    pub fn is_armed(&self) -> bool {
        self.arming.is_armed()
    }

    /// Board access for the owning adapter, e.g. to feed serial queues
    /// between cycles.
    pub fn board_mut(&mut self) -> &mut B {
        &mut self.board
    }

    pub fn receiver_mut(&mut self) -> &mut R {
        &mut self.receiver
    }

    pub fn stabilizer_mut(&mut self) -> &mut S {
        &mut self.stabilizer
    }

    pub fn mixer_mut(&mut self) -> &mut M {
        &mut self.mixer
    }

    pub fn telemetry_mut(&mut self) -> &mut T {
        &mut self.telemetry
    }

    /// Gyro step: state update, stabilization, optional hover correction,
    /// failsafe evaluation and, when allowed, armed mixing.
    fn check_gyrometer(&mut self) {
        let Some(rates) = self.board.get_gyrometer() else {
            return;
        };

        self.state.update_gyrometer(rates);

        // Seed the working demands from the last receiver read
        let mut demands = self.receiver.demands();
        self.stabilizer.modify_demands(rates, &mut demands);

        if let Some(hover) = self.hover.as_mut() {
            if self.receiver.in_hover_mode() {
                hover.modify_demands(&self.state, &mut demands);
            }
        }

        trace!("flight: throttle demand {}", demands.throttle);
        self.emit(FlightEvent::ThrottleSample(demands.throttle));

        // Failsafe is synchronized to the gyro cadence
        self.check_failsafe();

        if self.arming.is_armed() && !self.arming.in_failsafe() && !self.receiver.throttle_is_down()
        {
            self.mixer.run_armed(&demands);
        }
    }

    /// Orientation step: Euler update, attitude push into the stabilizer,
    /// and the telemetry relay. Telemetry is synchronized to the orientation
    /// cadence, the natural reference frame for ground-station reporting.
    fn check_orientation(&mut self) {
        let Some(orientation) = self.board.get_orientation() else {
            return;
        };

        self.state.update_orientation(orientation);
        self.stabilizer.update_euler_angles(self.state.euler_angles);
        self.relay_telemetry();
    }

    /// Receiver step: demand acquisition and the arming transitions. Skipped
    /// entirely when no fresh frame arrived; receiver state carries over.
    fn check_receiver(&mut self) {
        let yaw_offset = self.state.euler_angles[AXIS_YAW] - self.arming.yaw_initial();
        if !self.receiver.poll_demands(yaw_offset) {
            return;
        }

        let raw_demands = self.receiver.demands();
        self.stabilizer.update_demands(&raw_demands);

        // When landed, reset the integral accumulators
        if self.receiver.throttle_is_down() {
            self.stabilizer.reset_integral();
        }

        if self.receiver.disarming() && self.arming.request_disarm() {
            self.state.armed = false;
            info!("flight: disarmed by pilot command");
            self.emit(FlightEvent::Disarmed(DisarmReason::UserCommand));
            self.emit(FlightEvent::ArmStateChanged(ArmState::Disarmed));
        }

        if !self.arming.is_armed() && self.receiver.arming() {
            let max_angle = self.stabilizer.max_arming_angle();
            match self.arming.request_arm(&self.state.euler_angles, max_angle) {
                Ok(()) => {
                    self.state.armed = true;
                    info!("flight: armed, yaw reference {}", self.arming.yaw_initial());
                    self.emit(FlightEvent::ArmStateChanged(ArmState::Armed));
                }
                Err(err) => {
                    warn!("flight: {}", err);
                }
            }
        }

        // Redundant safety cut, independent of the gyro step's decision
        if self.arming.is_armed() && self.receiver.throttle_is_down() {
            self.mixer.cut_motors();
        }

        self.report_armed_status();
    }

    /// Barometer step: opportunistic altitude update, no control-law
    /// dependency in the core.
    fn check_barometer(&mut self) {
        if let Some(pressure) = self.board.get_barometer() {
            self.state.update_barometer(pressure);
        }
    }

    /// Accelerometer step: opportunistic state update, consumed by the
    /// estimation collaborators rather than the core.
    fn check_accelerometer(&mut self) {
        if let Some(accel) = self.board.get_accelerometer() {
            self.state.update_accelerometer(accel);
        }
    }

    /// Signal loss while armed forces the motors off and latches the sticky
    /// failsafe. The only path into `Failsafe`.
    fn check_failsafe(&mut self) {
        if self.arming.is_armed() && self.receiver.lost_signal() {
            self.mixer.cut_motors();
            self.arming.signal_lost();
            self.state.armed = false;
            warn!("flight: receiver signal lost, failsafe latched");
            self.emit(FlightEvent::Disarmed(DisarmReason::SignalLoss));
            self.emit(FlightEvent::ArmStateChanged(ArmState::Failsafe));
            self.report_armed_status();
        }
    }

    /// Drain inbound serial bytes into the protocol handler and queued
    /// response bytes back out, both bounded by the counts observed at
    /// entry. While disarmed, give the mixer its bench-test slot.
    fn relay_telemetry(&mut self) {
        for _ in 0..self.board.serial_available_bytes() {
            let byte = self.board.serial_read_byte();
            self.telemetry.update(byte);
        }

        for _ in 0..self.telemetry.available_bytes() {
            let byte = self.telemetry.read_byte();
            self.board.serial_write_byte(byte);
        }

        // Support motor testing from the ground station
        if !self.arming.is_armed() {
            self.mixer.run_disarmed();
        }
    }

    fn report_armed_status(&mut self) {
        let armed = self.arming.is_armed();
        if self.reported_armed != Some(armed) {
            self.board.show_armed_status(armed);
            self.reported_armed = Some(armed);
        }
    }

    fn emit(&self, event: FlightEvent) {
        if let Some(hook) = self.hook {
            hook(&event);
        }
    }
}
