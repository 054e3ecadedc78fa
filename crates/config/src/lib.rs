//! Catalog models and loaders for the Space Travel Simulator.

use std::fs::File;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Planet catalog shipped with the simulator.
pub const BUILTIN_PLANETS: &str = include_str!("../catalog/planets.toml");
/// Ship catalog shipped with the simulator.
pub const BUILTIN_SHIPS: &str = include_str!("../catalog/ships.toml");

/// A planet and its distance from the Sun.
#[derive(Debug, Deserialize, Clone)]
pub struct PlanetConfig {
    pub name: String,
    #[serde(deserialize_with = "decimal_literal")]
    pub distance_km: Decimal,
}

/// Ship entry parsed from a catalog.
#[derive(Debug, Deserialize, Clone)]
pub struct ShipConfig {
    pub name: String,
    pub propulsion: ShipPropulsionConfig,
}

/// Propulsion configuration in ship catalogs.
#[derive(Debug, Deserialize, Clone)]
#[serde(tag = "type")]
pub enum ShipPropulsionConfig {
    #[serde(rename = "sublight")]
    Sublight {
        #[serde(deserialize_with = "decimal_literal")]
        speed_km_s: Decimal,
    },
    #[serde(rename = "warp")]
    Warp {
        #[serde(deserialize_with = "decimal_literal")]
        light_speed_multiple: Decimal,
        maximum_warp_factor: u32,
    },
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Deserialize)]
struct PlanetTable {
    #[serde(default)]
    planet: Vec<PlanetConfig>,
}

#[derive(Debug, Deserialize)]
struct ShipTable {
    #[serde(default)]
    ship: Vec<ShipConfig>,
}

/// Errors that can occur while loading catalog files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("no `{stem}` catalog (.toml, .yaml, .yml) in {}", dir.display())]
    MissingCatalog { dir: PathBuf, stem: &'static str },
}

/// Parse the built-in planet catalog.
pub fn builtin_planets() -> Result<Vec<PlanetConfig>, ConfigError> {
    Ok(toml::from_str::<PlanetTable>(BUILTIN_PLANETS)?.planet)
}

/// Parse the built-in ship catalog.
pub fn builtin_ships() -> Result<Vec<ShipConfig>, ConfigError> {
    Ok(toml::from_str::<ShipTable>(BUILTIN_SHIPS)?.ship)
}

/// Load planets from a TOML (`[[planet]]` tables) or YAML (list) file.
pub fn load_planets<P: AsRef<Path>>(path: P) -> Result<Vec<PlanetConfig>, ConfigError> {
    let path = path.as_ref();
    if is_toml(path) {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str::<PlanetTable>(&contents)?.planet)
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

/// Load ships from a TOML (`[[ship]]` tables) or YAML (list) file.
pub fn load_ships<P: AsRef<Path>>(path: P) -> Result<Vec<ShipConfig>, ConfigError> {
    let path = path.as_ref();
    if is_toml(path) {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str::<ShipTable>(&contents)?.ship)
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

/// Locate `<stem>.toml`, `<stem>.yaml`, or `<stem>.yml` inside `dir`, in that order.
pub fn find_catalog(dir: &Path, stem: &'static str) -> Result<PathBuf, ConfigError> {
    ["toml", "yaml", "yml"]
        .iter()
        .map(|ext| dir.join(format!("{stem}.{ext}")))
        .find(|path| path.is_file())
        .ok_or_else(|| ConfigError::MissingCatalog {
            dir: dir.to_path_buf(),
            stem,
        })
}

fn is_toml(path: &Path) -> bool {
    path.extension().map(|ext| ext == "toml").unwrap_or(false)
}

/// Decimal literal given either as a string (`"35e6"`, `"11.19"`) or an integer.
fn decimal_literal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Literal {
        Text(String),
        Integer(i64),
    }

    match Literal::deserialize(deserializer)? {
        Literal::Text(text) => {
            spacesim_core::decimal::parse(&text).map_err(serde::de::Error::custom)
        }
        Literal::Integer(value) => Ok(Decimal::from(value)),
    }
}
