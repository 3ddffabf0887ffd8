use nalgebra::UnitQuaternion;
use num_traits::Float as _;
use serde::{Deserialize, Serialize};

use crate::consts::SEA_LEVEL_PRESSURE_PA;

/// Estimated vehicle state, owned by the orchestrator and mutated by the
/// per-cycle sensor checks. Constructed once at startup and process-scoped.
///
/// The `armed` flag mirrors the arming state machine so that collaborators
/// reading the state (hover controller, telemetry) see it; only the
/// orchestrator writes it.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VehicleState {
    /// Roll, pitch, yaw in radians, from the latest orientation estimate.
    pub euler_angles: [f32; 3],
    /// Last gyrometer sample, radians per second.
    pub angular_rates: [f32; 3],
    /// Last accelerometer sample, in g.
    pub acceleration: [f32; 3],
    /// Pressure-derived altitude above the ground reference, meters.
    pub altitude: f32,
    /// Whether the vehicle is armed. Read-only mirror of the state machine.
    pub armed: bool,

    baro: BaroEstimator,
}

impl VehicleState {
    pub fn new(ground_samples: u8) -> Self {
        VehicleState {
            euler_angles: [0.; 3],
            angular_rates: [0.; 3],
            acceleration: [0.; 3],
            altitude: 0.,
            armed: false,
            baro: BaroEstimator::new(ground_samples),
        }
    }

    /// Update the Euler angles from a fresh orientation estimate.
    pub fn update_orientation(&mut self, orientation: UnitQuaternion<f32>) {
        let (roll, pitch, yaw) = orientation.euler_angles();
        self.euler_angles = [roll, pitch, yaw];
    }

    /// Update the angular rates from a fresh gyrometer sample.
    pub fn update_gyrometer(&mut self, rates: [f32; 3]) {
        self.angular_rates = rates;
    }

    /// Update the linear acceleration from a fresh accelerometer sample.
    pub fn update_accelerometer(&mut self, accel: [f32; 3]) {
        self.acceleration = accel;
    }

    /// Update the altitude estimate from a fresh pressure sample (Pascal).
    pub fn update_barometer(&mut self, pressure: f32) {
        self.altitude = self.baro.update(pressure);
    }
}

/// Barometric altitude estimator. The first `ground_samples` fresh pressure
/// samples are averaged into a ground reference; afterwards each sample maps
/// to altitude above that reference through the standard barometric formula.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
struct BaroEstimator {
    ground_samples: u8,
    sample_count: u8,
    pressure_sum: f32,
    ground_pressure: Option<f32>,
}

impl BaroEstimator {
    fn new(ground_samples: u8) -> Self {
        BaroEstimator {
            ground_samples,
            sample_count: 0,
            pressure_sum: 0.,
            ground_pressure: None,
        }
    }

    fn update(&mut self, pressure: f32) -> f32 {
        let Some(ground) = self.ground_pressure else {
            self.pressure_sum += pressure;
            self.sample_count += 1;
            if self.sample_count >= self.ground_samples {
                let ground = self.pressure_sum / self.sample_count as f32;
                debug!("baro: ground reference established at {} Pa", ground);
                self.ground_pressure = Some(ground);
            }
            return 0.;
        };

        altitude_above(pressure, ground)
    }
}

/// Barometric formula, altitude of `pressure` above the `reference`
/// pressure, in meters.
fn altitude_above(pressure: f32, reference: f32) -> f32 {
    // Scale height form of the international standard atmosphere
    let msl = |p: f32| 44_330.8 * (1. - (p / SEA_LEVEL_PRESSURE_PA).powf(0.190_263));
    msl(pressure) - msl(reference)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::UnitQuaternion;

    use super::*;

    #[test]
    fn orientation_to_euler() {
        let mut state = VehicleState::new(1);
        let quat = UnitQuaternion::from_euler_angles(0.1, -0.2, 1.5);
        state.update_orientation(quat);

        assert_relative_eq!(state.euler_angles[0], 0.1, epsilon = 1e-5);
        assert_relative_eq!(state.euler_angles[1], -0.2, epsilon = 1e-5);
        assert_relative_eq!(state.euler_angles[2], 1.5, epsilon = 1e-5);
    }

    #[test]
    fn altitude_zero_until_ground_reference() {
        let mut state = VehicleState::new(3);

        state.update_barometer(101_000.);
        state.update_barometer(101_000.);
        assert_eq!(state.altitude, 0.);

        // Third sample completes the reference, still on the ground
        state.update_barometer(101_000.);
        assert_eq!(state.altitude, 0.);
    }

    #[test]
    fn altitude_rises_with_falling_pressure() {
        let mut state = VehicleState::new(1);
        state.update_barometer(101_000.);

        // Roughly -12 Pa per meter near sea level
        state.update_barometer(101_000. - 120.);
        assert_relative_eq!(state.altitude, 10.0, epsilon = 0.5);
    }

    #[test]
    fn gyro_and_accel_updates_are_stored() {
        let mut state = VehicleState::new(1);
        state.update_gyrometer([0.1, 0.2, 0.3]);
        state.update_accelerometer([0., 0., 1.]);

        assert_eq!(state.angular_rates, [0.1, 0.2, 0.3]);
        assert_eq!(state.acceleration, [0., 0., 1.]);
    }
}
