//! Distance, unit-conversion, travel-time, and transmission-delay arithmetic.
//!
//! Planet lookups here are permissive: an unknown name resolves to a default distance
//! instead of failing. Only the spacecraft lookup is strict.

use rust_decimal::Decimal;
use spacesim_core::decimal::divide;
use spacesim_core::notation::normalized_eng_string;
use spacesim_core::units::speed_of_light_kms;

use crate::NavigationError;
use crate::catalog::{Catalog, REFERENCE_PLANET};

/// Signed distance from `start` to `end` in km.
pub fn calculate_distance(start: Decimal, end: Decimal) -> Decimal {
    end - start
}

/// Distance from the Sun in astronomical units, taking Earth's distance as 1 AU.
/// Unknown planets come out as 0 AU.
pub fn convert_to_au(catalog: &Catalog, planet: &str) -> Result<Decimal, NavigationError> {
    let distance = catalog.distance_or(planet, Decimal::ZERO);
    let reference = catalog.distance_or(REFERENCE_PLANET, Decimal::ONE);
    divide(distance, reference).ok_or_else(|| NavigationError::OutOfRange {
        quantity: "distance in AU",
        subject: planet.to_string(),
    })
}

/// Seconds needed for `ship` to cover the distance between two planets at cruise speed.
///
/// An unknown start planet resolves to 1 km and an unknown destination to 0 km.
pub fn travel_time(
    catalog: &Catalog,
    ship: &str,
    start_planet: &str,
    destination_planet: &str,
) -> Result<Decimal, NavigationError> {
    let craft = catalog.ship(ship)?;
    let distance = calculate_distance(
        catalog.distance_or(start_planet, Decimal::ONE),
        catalog.distance_or(destination_planet, Decimal::ZERO),
    );
    craft
        .cruise_speed_km_s()
        .and_then(|speed| divide(distance, speed))
        .ok_or_else(|| NavigationError::OutOfRange {
            quantity: "travel time",
            subject: craft.name.clone(),
        })
}

/// One-way light delay in seconds between Earth and `planet`.
pub fn calculate_transmission_delay(
    catalog: &Catalog,
    planet: &str,
) -> Result<Decimal, NavigationError> {
    let distance = calculate_distance(
        catalog.distance_or(REFERENCE_PLANET, Decimal::ONE),
        catalog.distance_or(planet, Decimal::ZERO),
    );
    divide(distance, speed_of_light_kms()).ok_or_else(|| NavigationError::OutOfRange {
        quantity: "transmission delay",
        subject: planet.to_string(),
    })
}

/// `"<planet> - <distance>"` with the distance normalized into engineering notation.
pub fn present_planet(catalog: &Catalog, planet: &str) -> String {
    let distance = catalog.distance_or(planet, Decimal::ZERO);
    format!("{planet} - {}", normalized_eng_string(distance))
}
