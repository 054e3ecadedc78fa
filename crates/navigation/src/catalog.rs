//! Read-only planet and spacecraft tables.

use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

use rust_decimal::Decimal;
use spacesim_config::{self as config, ConfigError, PlanetConfig, ShipConfig};
use spacesim_propulsion::Spacecraft;
use thiserror::Error;

use crate::NavigationError;
use crate::vehicle::{self, VehicleError};

/// Planet every "distance from Earth" calculation is measured against.
pub const REFERENCE_PLANET: &str = "Earth";

/// A planet and its distance from the Sun.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Planet {
    pub name: String,
    pub distance_km: Decimal,
}

/// Errors raised while building a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Vehicle(#[from] VehicleError),
    #[error("planet '{0}' is listed more than once")]
    DuplicatePlanet(String),
    #[error("ship '{0}' is listed more than once")]
    DuplicateShip(String),
    #[error("planet catalog must contain 'Earth' with a positive distance")]
    MissingReference,
    #[error("planet '{0}' has a negative distance")]
    NegativeDistance(String),
    #[error("ship '{0}' must have a positive cruise speed")]
    NonPositiveSpeed(String),
    #[error("cruise speed of ship '{0}' is too large to represent")]
    UnrepresentableSpeed(String),
}

/// Planet distance table and spacecraft table. Never mutated once built.
#[derive(Debug, Clone)]
pub struct Catalog {
    planets: Vec<Planet>,
    ships: Vec<Spacecraft>,
}

static BUILTIN: OnceLock<Catalog> = OnceLock::new();

impl Catalog {
    /// The catalog compiled into the binary, parsed on first use.
    pub fn builtin() -> Result<&'static Catalog, CatalogError> {
        if let Some(catalog) = BUILTIN.get() {
            return Ok(catalog);
        }
        let parsed = Self::parse_builtin()?;
        Ok(BUILTIN.get_or_init(|| parsed))
    }

    fn parse_builtin() -> Result<Self, CatalogError> {
        Self::from_configs(config::builtin_planets()?, &config::builtin_ships()?)
    }

    /// Read `planets` and `ships` catalogs (TOML or YAML) from `dir`.
    pub fn load_dir<P: AsRef<Path>>(dir: P) -> Result<Self, CatalogError> {
        let dir = dir.as_ref();
        let planets = config::load_planets(config::find_catalog(dir, "planets")?)?;
        let ships = config::load_ships(config::find_catalog(dir, "ships")?)?;
        let catalog = Self::from_configs(planets, &ships)?;
        log::info!(
            "loaded {} planets and {} ships from {}",
            catalog.planets.len(),
            catalog.ships.len(),
            dir.display()
        );
        Ok(catalog)
    }

    /// Validate catalog records and keep them in their listed order.
    pub fn from_configs(
        planets: Vec<PlanetConfig>,
        ships: &[ShipConfig],
    ) -> Result<Self, CatalogError> {
        validate_planets(&planets)?;
        let mut seen = HashSet::new();
        let mut craft = Vec::with_capacity(ships.len());
        for ship in ships {
            if !seen.insert(ship.name.as_str()) {
                return Err(CatalogError::DuplicateShip(ship.name.clone()));
            }
            let spacecraft = vehicle::from_config(ship)?;
            let speed = spacecraft
                .cruise_speed_km_s()
                .ok_or_else(|| CatalogError::UnrepresentableSpeed(ship.name.clone()))?;
            if speed <= Decimal::ZERO {
                return Err(CatalogError::NonPositiveSpeed(ship.name.clone()));
            }
            craft.push(spacecraft);
        }

        Ok(Self {
            planets: planets
                .into_iter()
                .map(|p| Planet {
                    name: p.name,
                    distance_km: p.distance_km,
                })
                .collect(),
            ships: craft,
        })
    }

    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn ships(&self) -> &[Spacecraft] {
        &self.ships
    }

    pub fn ship_names(&self) -> impl Iterator<Item = &str> {
        self.ships.iter().map(|s| s.name.as_str())
    }

    pub fn contains_planet(&self, name: &str) -> bool {
        self.planet_distance(name).is_some()
    }

    pub fn planet_distance(&self, name: &str) -> Option<Decimal> {
        self.planets
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.distance_km)
    }

    /// Permissive lookup: unknown planets resolve to `default`.
    pub fn distance_or(&self, name: &str, default: Decimal) -> Decimal {
        self.planet_distance(name).unwrap_or(default)
    }

    /// Strict lookup: travel cannot proceed without a known ship.
    pub fn ship(&self, name: &str) -> Result<&Spacecraft, NavigationError> {
        self.ships
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| NavigationError::UnknownShip(name.to_string()))
    }
}

fn validate_planets(planets: &[PlanetConfig]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for planet in planets {
        if !seen.insert(planet.name.as_str()) {
            return Err(CatalogError::DuplicatePlanet(planet.name.clone()));
        }
        if planet.distance_km < Decimal::ZERO {
            return Err(CatalogError::NegativeDistance(planet.name.clone()));
        }
    }
    let reference_ok = planets
        .iter()
        .any(|p| p.name == REFERENCE_PLANET && p.distance_km > Decimal::ZERO);
    if !reference_ok {
        return Err(CatalogError::MissingReference);
    }
    Ok(())
}
