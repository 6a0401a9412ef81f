// src/config.rs

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, fs, path::Path, str::FromStr};

/// Lithology written into every row when the input has no lithology-like column.
pub const DEFAULT_LITHOLOGY: &str = "sandstone";

/// Units the numeric input columns are declared in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    /// Depth in feet, permeability in millidarcy, temperature in Fahrenheit.
    Imperial,
}

impl FromStr for UnitSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" => Ok(Self::Metric),
            "imperial" => Ok(Self::Imperial),
            other => Err(format!(
                "unknown unit system '{other}' (expected metric or imperial)"
            )),
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        })
    }
}

/// What to do when more than one original column matches the same canonical field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// The last matching column in header order takes the canonical name.
    #[default]
    LastWins,
    /// Fail the load.
    Reject,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    pub default_lithology: String,
    pub collision_policy: CollisionPolicy,
    pub delimiter: char,
    pub units: UnitSystem,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            default_lithology: DEFAULT_LITHOLOGY.to_string(),
            collision_policy: CollisionPolicy::default(),
            delimiter: ',',
            units: UnitSystem::default(),
        }
    }
}

impl LoaderConfig {
    /// Read a YAML config; keys that are absent keep their defaults.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: LoaderConfig = serde_yaml::from_str(&text)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.delimiter.is_ascii(),
            "delimiter must be a single ASCII character, got {:?}",
            self.delimiter
        );
        ensure!(
            !self.default_lithology.trim().is_empty(),
            "default_lithology must not be empty"
        );
        Ok(())
    }

    pub(crate) fn delimiter_byte(&self) -> u8 {
        // validate() guarantees ASCII; anything else falls back to comma
        u8::try_from(self.delimiter).unwrap_or(b',')
    }
}
