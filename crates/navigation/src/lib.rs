//! Navigation crate: the immutable planet/ship catalog and the arithmetic built on it.

pub mod calc;
pub mod catalog;
pub mod vehicle;

pub use calc::{
    calculate_distance, calculate_transmission_delay, convert_to_au, present_planet, travel_time,
};
pub use catalog::{Catalog, CatalogError, Planet, REFERENCE_PLANET};
pub use spacesim_propulsion::{PropulsionMode, Spacecraft};

use thiserror::Error;

/// Errors surfaced to the user by navigation queries.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("ship '{0}' not found")]
    UnknownShip(String),
    #[error("planet '{0}' not found")]
    UnknownPlanet(String),
    #[error("{quantity} for '{subject}' is out of range")]
    OutOfRange {
        quantity: &'static str,
        subject: String,
    },
}
