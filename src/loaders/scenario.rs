use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::builder::GridConfig;
use crate::types::{DEFAULT_ALTITUDE, DEFAULT_SAFETY_MARGIN, GridError};

/// Run description for the CLI: which obstacle file to rasterize, and the
/// slice parameters to rasterize it at.
#[derive(Debug, Deserialize)]
pub struct Scenario {
    /// Obstacle file, absolute or relative to the scenario file's directory.
    pub data: String,
    #[serde(default = "default_altitude")]
    pub altitude: f32,
    #[serde(
        default = "default_safety_margin",
        deserialize_with = "deserialize_margin"
    )]
    pub safety_margin: f32,
}

impl Scenario {
    #[inline]
    pub fn config(&self) -> GridConfig {
        GridConfig::new(self.altitude, self.safety_margin)
    }
}

fn default_altitude() -> f32 {
    DEFAULT_ALTITUDE
}

fn default_safety_margin() -> f32 {
    DEFAULT_SAFETY_MARGIN
}

fn deserialize_margin<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = f32::deserialize(deserializer)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(serde::de::Error::custom("safety_margin must be non-negative"))
    }
}

pub fn load_scenario(yaml_path: impl AsRef<Path>) -> Result<Scenario, GridError> {
    let yaml_str = std::fs::read_to_string(yaml_path)?;
    let scenario: Scenario = serde_yaml::from_str(&yaml_str)?;
    Ok(scenario)
}

/// Resolve the scenario's `data` entry against the scenario file's parent
/// directory. Absolute paths pass through.
pub fn resolve_data_path(yaml_path: &Path, data_ref: &str) -> PathBuf {
    let data_path = PathBuf::from(data_ref);
    if data_path.is_absolute() {
        return data_path;
    }

    match yaml_path.parent() {
        Some(parent) => parent.join(data_path),
        None => data_path,
    }
}
