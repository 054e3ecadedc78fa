//! Propulsion mode descriptors and spacecraft cruise speeds.

use rust_decimal::Decimal;
use spacesim_core::units::speed_of_light_kms;

/// How a ship reaches its cruise speed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropulsionMode {
    /// Conventional drive with a fixed cruise speed.
    Sublight { speed_km_s: Decimal },
    /// Drive rated as a multiple of the speed of light.
    Warp {
        light_speed_multiple: Decimal,
        maximum_warp_factor: u32,
    },
}

/// A named ship from the spacecraft table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spacecraft {
    pub name: String,
    pub propulsion: PropulsionMode,
}

impl Spacecraft {
    /// Cruise speed in km/s. Warp ships cruise at their multiple of c; `None` when that
    /// product does not fit a `Decimal`.
    pub fn cruise_speed_km_s(&self) -> Option<Decimal> {
        match &self.propulsion {
            PropulsionMode::Sublight { speed_km_s } => Some(*speed_km_s),
            PropulsionMode::Warp {
                light_speed_multiple,
                ..
            } => light_speed_multiple.checked_mul(speed_of_light_kms()),
        }
    }

    pub fn maximum_warp_factor(&self) -> Option<u32> {
        match self.propulsion {
            PropulsionMode::Warp {
                maximum_warp_factor,
                ..
            } => Some(maximum_warp_factor),
            PropulsionMode::Sublight { .. } => None,
        }
    }
}
