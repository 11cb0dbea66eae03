//! CLI configuration file.
//!
//! An optional TOML file supplies defaults so a builder who always uses the
//! same boom and wire doesn't have to repeat them:
//!
//! ```toml
//! preset = "metal-bonded"
//! driven = "straight"
//! units = "imperial"
//! wire_diameter_mm = 2.5
//! elements = 11
//! ```
//!
//! Precedence: command-line flag, then config file, then built-in default.

use std::fs;
use std::path::{Path, PathBuf};

use antenna_core::{ConstructionPreset, ElementStyle};
use clap::ValueEnum;
use serde::Deserialize;

use crate::error::CliError;

/// Default Yagi element count when neither flag nor file sets one
pub const DEFAULT_ELEMENTS: u32 = 9;

/// Default Moxon wire diameter (mm), roughly 12 AWG
pub const DEFAULT_WIRE_DIAMETER_MM: f64 = 2.0;

/// Length units for table output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Millimeters
    #[default]
    Metric,
    /// Inches
    Imperial,
}

/// Values read from the config file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub preset: Option<ConstructionPreset>,
    pub driven: Option<ElementStyle>,
    pub units: Option<UnitSystem>,
    pub wire_diameter_mm: Option<f64>,
    pub elements: Option<u32>,
}

impl CliConfig {
    /// Load from `path`, or return the empty config when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, CliError> {
        let Some(path) = path else {
            return Ok(CliConfig::default());
        };
        let text = fs::read_to_string(path).map_err(|source| CliError::Io {
            path: PathBuf::from(path),
            source,
        })?;
        let config = Self::parse(&text).map_err(|source| CliError::Config {
            path: PathBuf::from(path),
            source,
        })?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Parse TOML text
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn preset_or(&self, flag: Option<ConstructionPreset>) -> ConstructionPreset {
        flag.or(self.preset).unwrap_or_default()
    }

    pub fn driven_or(&self, flag: Option<ElementStyle>) -> ElementStyle {
        flag.or(self.driven).unwrap_or_default()
    }

    pub fn units_or(&self, flag: Option<UnitSystem>) -> UnitSystem {
        flag.or(self.units).unwrap_or_default()
    }

    pub fn wire_diameter_or(&self, flag: Option<f64>) -> f64 {
        flag.or(self.wire_diameter_mm)
            .unwrap_or(DEFAULT_WIRE_DIAMETER_MM)
    }

    pub fn elements_or(&self, flag: Option<u32>) -> u32 {
        flag.or(self.elements).unwrap_or(DEFAULT_ELEMENTS)
    }
}
