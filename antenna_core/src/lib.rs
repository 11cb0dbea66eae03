//! # antenna_core - Antenna Design Calculation Engine
//!
//! `antenna_core` turns operating parameters into physical antenna
//! dimensions. It covers two designs:
//!
//! - **Yagi-Uda** (DL6WU long-boom): element positions, spacings, cut lengths
//!   and a gain estimate from frequency, element count and boom construction
//! - **Moxon rectangle**: the five A–E dimensions and wire lengths from
//!   frequency and wire diameter
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Deterministic**: Same input, bit-identical output
//! - **JSON-First**: All inputs and outputs implement Serialize/Deserialize
//! - **Rich Errors**: Every rejection names the field and the violated rule
//!
//! ## Quick Start
//!
//! ```rust
//! use antenna_core::{design_moxon, design_yagi, MoxonInput, YagiInput};
//!
//! let yagi = design_yagi(&YagiInput::new(144.3, 5)).unwrap();
//! assert_eq!(yagi.elements.len(), 5);
//!
//! let moxon = design_moxon(&MoxonInput { frequency_mhz: 28.5, wire_diameter_mm: 2.0 }).unwrap();
//! let json = serde_json::to_string_pretty(&moxon).unwrap();
//! assert!(json.contains("a_mm"));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The Yagi and Moxon engines
//! - [`equations`] - Speed of light, empirical tables and formulas
//! - [`presets`] - Boom construction presets and element styles
//! - [`bands`] - Amateur band design frequencies
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod bands;
pub mod calculations;
pub mod equations;
pub mod errors;
pub mod presets;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use bands::AmateurBand;
pub use calculations::{
    design_moxon, design_yagi, DesignOutput, DesignRequest, ElementKind, ElementSpec, MoxonDesign,
    MoxonInput, YagiDesign, YagiInput,
};
pub use errors::{DesignError, DesignResult, InputField, Violation};
pub use presets::{ConstructionPreset, ElementStyle};
