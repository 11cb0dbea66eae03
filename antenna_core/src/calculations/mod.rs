//! # Antenna Design Calculations
//!
//! Each engine follows the same pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Design` - Design results (JSON-serializable, immutable value)
//! - `design(&input) -> Result<*Design, DesignError>` - Pure function
//!
//! Engines hold no state. The same input always yields the same output,
//! so they are safe to call from any thread, as often as a slider moves.
//!
//! ## Available Calculations
//!
//! - [`yagi`] - DL6WU long-boom Yagi-Uda
//! - [`moxon`] - Moxon rectangle

pub mod moxon;
pub mod yagi;

use serde::{Deserialize, Serialize};

use crate::errors::DesignResult;

// Re-export commonly used types
pub use moxon::{MoxonDesign, MoxonInput};
pub use yagi::{ElementKind, ElementSpec, YagiDesign, YagiInput};

/// Design a Yagi. See [`yagi::design`].
pub fn design_yagi(input: &YagiInput) -> DesignResult<YagiDesign> {
    yagi::design(input)
}

/// Design a Moxon rectangle. See [`moxon::design`].
pub fn design_moxon(input: &MoxonInput) -> DesignResult<MoxonDesign> {
    moxon::design(input)
}

/// Enum wrapper for all design requests.
///
/// Lets a front-end submit heterogeneous requests in one JSON document:
///
/// ```json
/// [
///   { "type": "Yagi", "frequency_mhz": 144.3, "element_count": 7 },
///   { "type": "Moxon", "frequency_mhz": 50.15, "wire_diameter_mm": 2.5 }
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DesignRequest {
    /// Yagi-Uda design request
    Yagi(YagiInput),
    /// Moxon rectangle design request
    Moxon(MoxonInput),
}

impl DesignRequest {
    /// Get the antenna type as a string
    pub fn kind(&self) -> &'static str {
        match self {
            DesignRequest::Yagi(_) => "Yagi",
            DesignRequest::Moxon(_) => "Moxon",
        }
    }

    /// Design frequency of the request
    pub fn frequency_mhz(&self) -> f64 {
        match self {
            DesignRequest::Yagi(input) => input.frequency_mhz,
            DesignRequest::Moxon(input) => input.frequency_mhz,
        }
    }

    /// Run the matching engine
    pub fn run(&self) -> DesignResult<DesignOutput> {
        match self {
            DesignRequest::Yagi(input) => yagi::design(input).map(DesignOutput::Yagi),
            DesignRequest::Moxon(input) => moxon::design(input).map(DesignOutput::Moxon),
        }
    }
}

/// Enum wrapper for all design results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DesignOutput {
    /// Yagi-Uda design
    Yagi(YagiDesign),
    /// Moxon rectangle design
    Moxon(MoxonDesign),
}

impl DesignOutput {
    /// Free-space wavelength the design was scaled from (mm)
    pub fn wavelength_mm(&self) -> f64 {
        match self {
            DesignOutput::Yagi(design) => design.wavelength_mm,
            DesignOutput::Moxon(design) => design.wavelength_mm,
        }
    }
}

/// Parse a JSON array of requests.
pub fn parse_requests(json: &str) -> DesignResult<Vec<DesignRequest>> {
    Ok(serde_json::from_str(json)?)
}
