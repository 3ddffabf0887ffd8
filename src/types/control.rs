use serde::{Deserialize, Serialize};

/// Normalized pilot/autonomy command on the five control axes. In order the
/// cyclic axes roll, pitch and yaw are in `[-1, 1]`, throttle is in
/// `[0, 1]` and `aux` carries the auxiliary channel.
///
/// A fresh vector is produced by the receiver each cycle and flows by value
/// through the stabilizer → hover → mixer chain; only the raw
/// receiver-origin copy is retained between cycles (by the receiver).
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Demands {
    pub roll: f32,
    pub pitch: f32,
    pub yaw: f32,
    pub throttle: f32,
    pub aux: f32,
}

impl Demands {
    pub fn new(roll: f32, pitch: f32, yaw: f32, throttle: f32) -> Self {
        Demands {
            roll,
            pitch,
            yaw,
            throttle,
            aux: 0.,
        }
    }

    pub fn roll_pitch_yaw(&self) -> [f32; 3] {
        [self.roll, self.pitch, self.yaw]
    }
}
