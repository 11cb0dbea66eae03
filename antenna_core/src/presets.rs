//! Construction presets and driven element styles
//!
//! How the elements are fixed to the boom changes their resonant length.
//! Each preset carries one correction factor applied to every element:
//!
//! `cut_length = 2 · half_length · correction_factor`
//!
//! Elements bonded straight through a metal boom come out shortest; a
//! non-conductive boom leaves the tabulated length untouched.

use serde::{Deserialize, Serialize};

use crate::errors::{DesignError, DesignResult};

/// Correction factor for elements bonded directly to a metal boom
pub const METAL_BONDED_FACTOR: f64 = 0.970;

/// Correction factor for elements insulated from a metal boom
pub const METAL_INSULATED_FACTOR: f64 = 0.990;

/// Correction factor for a non-conductive (PVC) boom
pub const PVC_BOOM_FACTOR: f64 = 1.000;

/// How elements are mounted on the boom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConstructionPreset {
    /// Elements pass through and contact a conductive boom
    MetalBonded,
    /// Elements pass through a conductive boom in insulating bushings
    #[default]
    MetalInsulated,
    /// Non-conductive boom
    PvcBoom,
}

impl ConstructionPreset {
    /// All presets, shortest cut length first
    pub const ALL: [ConstructionPreset; 3] = [
        ConstructionPreset::MetalBonded,
        ConstructionPreset::MetalInsulated,
        ConstructionPreset::PvcBoom,
    ];

    /// Element length multiplier for this mounting
    pub fn correction_factor(&self) -> f64 {
        match self {
            ConstructionPreset::MetalBonded => METAL_BONDED_FACTOR,
            ConstructionPreset::MetalInsulated => METAL_INSULATED_FACTOR,
            ConstructionPreset::PvcBoom => PVC_BOOM_FACTOR,
        }
    }

    /// Kebab-case code as used in JSON and on the command line
    pub fn code(&self) -> &'static str {
        match self {
            ConstructionPreset::MetalBonded => "metal-bonded",
            ConstructionPreset::MetalInsulated => "metal-insulated",
            ConstructionPreset::PvcBoom => "pvc-boom",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ConstructionPreset::MetalBonded => "Metal boom, bonded elements",
            ConstructionPreset::MetalInsulated => "Metal boom, insulated elements",
            ConstructionPreset::PvcBoom => "PVC boom",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> DesignResult<Self> {
        match s.to_lowercase().replace([' ', '_'], "-").as_str() {
            "metal-bonded" | "bonded" => Ok(ConstructionPreset::MetalBonded),
            "metal-insulated" | "insulated" => Ok(ConstructionPreset::MetalInsulated),
            "pvc-boom" | "pvc" | "non-conductive" => Ok(ConstructionPreset::PvcBoom),
            _ => Err(DesignError::unknown_option("construction preset", s)),
        }
    }
}

impl std::fmt::Display for ConstructionPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Element construction.
///
/// Parasitic elements are always plain straight rods. The driven element is
/// either a folded dipole (one continuous loop, no feed gap) or a straight
/// dipole split at the centre with a small feed gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementStyle {
    /// Split dipole with a centre feed gap
    Straight,
    /// Folded dipole, no gap
    #[default]
    Folded,
}

impl ElementStyle {
    /// All styles for UI selection
    pub const ALL: [ElementStyle; 2] = [ElementStyle::Straight, ElementStyle::Folded];

    /// Kebab-case code as used in JSON and on the command line
    pub fn code(&self) -> &'static str {
        match self {
            ElementStyle::Straight => "straight",
            ElementStyle::Folded => "folded",
        }
    }

    /// Whether this style has a feed gap
    pub fn has_feed_gap(&self) -> bool {
        matches!(self, ElementStyle::Straight)
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> DesignResult<Self> {
        match s.to_lowercase().trim() {
            "straight" | "split" | "dipole" => Ok(ElementStyle::Straight),
            "folded" | "folded-dipole" | "folded_dipole" => Ok(ElementStyle::Folded),
            _ => Err(DesignError::unknown_option("driven element style", s)),
        }
    }
}

impl std::fmt::Display for ElementStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
