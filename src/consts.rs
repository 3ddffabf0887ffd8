//! Shared constants for the control core.

/// Index of the roll axis in attitude and rate arrays.
pub const AXIS_ROLL: usize = 0;
/// Index of the pitch axis in attitude and rate arrays.
pub const AXIS_PITCH: usize = 1;
/// Index of the yaw axis in attitude and rate arrays.
pub const AXIS_YAW: usize = 2;

/// Default maximum attitude angle (radians) at which arming is still
/// considered safe, roughly 25 degrees.
pub const DEFAULT_MAX_ARMING_ANGLE: f32 = 0.436_332_3;

/// Standard sea-level pressure in Pascal, reference for the barometric
/// altitude formula.
pub const SEA_LEVEL_PRESSURE_PA: f32 = 101_325.0;

/// Default number of pressure samples averaged into the ground reference.
pub const DEFAULT_BARO_GROUND_SAMPLES: u8 = 20;
