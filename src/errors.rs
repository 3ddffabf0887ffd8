use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::status::ArmingBlocker;

#[non_exhaustive]
#[derive(Error, Debug, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FlightError {
    #[error("Arming rejected: {0:?}")]
    ArmingBlocked(ArmingBlocker),
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

#[non_exhaustive]
#[derive(Error, Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    #[error("Barometric ground sample count must be nonzero.")]
    ZeroGroundSamples,
    #[error("Maximum arming angle must be positive.")]
    NonPositiveArmingAngle,
}
