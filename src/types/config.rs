use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_BARO_GROUND_SAMPLES;
use crate::errors::ConfigError;

/// Static configuration of the control core.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FlightConfig {
    /// Number of pressure samples averaged into the barometric ground
    /// reference. Must be nonzero.
    pub baro_ground_samples: u8,
}

impl Default for FlightConfig {
    fn default() -> Self {
        FlightConfig {
            baro_ground_samples: DEFAULT_BARO_GROUND_SAMPLES,
        }
    }
}

impl FlightConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.baro_ground_samples == 0 {
            return Err(ConfigError::ZeroGroundSamples);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(FlightConfig::default().validate(), Ok(()));
    }

    #[test]
    fn zero_ground_samples_rejected() {
        let config = FlightConfig {
            baro_ground_samples: 0,
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroGroundSamples));
    }
}
