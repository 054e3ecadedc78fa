//! Conversion from catalog records to runtime spacecraft.

use spacesim_config::{ShipConfig, ShipPropulsionConfig};
use spacesim_propulsion::{PropulsionMode, Spacecraft};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VehicleError {
    #[error("ship '{0}' uses a propulsion type that is not supported")]
    UnsupportedPropulsion(String),
}

/// Convert a `ShipConfig` into the runtime `Spacecraft` representation.
pub fn from_config(config: &ShipConfig) -> Result<Spacecraft, VehicleError> {
    let propulsion = match &config.propulsion {
        ShipPropulsionConfig::Sublight { speed_km_s } => PropulsionMode::Sublight {
            speed_km_s: *speed_km_s,
        },
        ShipPropulsionConfig::Warp {
            light_speed_multiple,
            maximum_warp_factor,
        } => PropulsionMode::Warp {
            light_speed_multiple: *light_speed_multiple,
            maximum_warp_factor: *maximum_warp_factor,
        },
        ShipPropulsionConfig::Unsupported => {
            return Err(VehicleError::UnsupportedPropulsion(config.name.clone()));
        }
    };

    Ok(Spacecraft {
        name: config.name.clone(),
        propulsion,
    })
}
