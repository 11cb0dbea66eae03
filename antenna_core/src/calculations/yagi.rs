//! # Yagi-Uda Design (DL6WU Long-Boom)
//!
//! Turns a frequency, an element count and a construction preset into a
//! complete cutting list: positions along the boom, spacings, tabulated
//! half-lengths and corrected cut lengths, plus a gain estimate.
//!
//! ## Assumptions
//!
//! - Element diameter near 0.005λ (the tables are tabulated for it)
//! - One reflector, one driven element, 1 to 28 directors
//! - Reflector sits at position 0; positions increase toward the front
//! - Driven element defaults to a folded dipole with no feed gap
//!
//! ## Example
//!
//! ```rust
//! use antenna_core::calculations::yagi::{design, YagiInput};
//! use antenna_core::presets::{ConstructionPreset, ElementStyle};
//!
//! let input = YagiInput {
//!     frequency_mhz: 144.3,
//!     element_count: 9,
//!     construction_preset: ConstructionPreset::MetalInsulated,
//!     driven_element: ElementStyle::Folded,
//! };
//!
//! let yagi = design(&input).unwrap();
//!
//! assert_eq!(yagi.elements.len(), 9);
//! assert_eq!(yagi.elements[0].name, "REF");
//! println!("Boom: {:.0} mm, gain {:.1} dBi", yagi.total_boom_length_mm, yagi.estimated_gain_dbi);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::dl6wu::{
    director_length, director_spacing, estimated_gain_dbi, DRIVEN_ELEMENT_LENGTH,
    DRIVEN_ELEMENT_SPACING, FEED_GAP, REFLECTOR_LENGTH,
};
use crate::equations::wavelength::{
    to_wavelengths, wavelength_mm, MAX_FREQUENCY_MHZ, MIN_FREQUENCY_MHZ,
};
use crate::errors::{require_in_range, require_positive, DesignError, DesignResult, InputField};
use crate::presets::{ConstructionPreset, ElementStyle};
use crate::units::Millimeters;

/// Fewest elements accepted: reflector, driven element, one director
pub const MIN_ELEMENTS: u32 = 3;

/// Most elements accepted
pub const MAX_ELEMENTS: u32 = 30;

/// Input parameters for a Yagi design.
///
/// ## JSON Example
///
/// ```json
/// {
///   "frequency_mhz": 144.3,
///   "element_count": 9,
///   "construction_preset": "metal-bonded",
///   "driven_element": "straight"
/// }
/// ```
///
/// `construction_preset` defaults to `metal-insulated` and `driven_element`
/// to `folded` when omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YagiInput {
    /// Design frequency in MHz
    pub frequency_mhz: f64,

    /// Total elements: reflector + driven element + directors
    pub element_count: u32,

    /// How the elements are mounted on the boom
    #[serde(default)]
    pub construction_preset: ConstructionPreset,

    /// Driven element construction
    #[serde(default)]
    pub driven_element: ElementStyle,
}

impl YagiInput {
    /// Input with default preset and driven element style
    pub fn new(frequency_mhz: f64, element_count: u32) -> Self {
        YagiInput {
            frequency_mhz,
            element_count,
            construction_preset: ConstructionPreset::default(),
            driven_element: ElementStyle::default(),
        }
    }

    /// Builder-style preset override
    pub fn with_preset(mut self, preset: ConstructionPreset) -> Self {
        self.construction_preset = preset;
        self
    }

    /// Builder-style driven element override
    pub fn with_driven_element(mut self, style: ElementStyle) -> Self {
        self.driven_element = style;
        self
    }

    /// Validate input parameters.
    pub fn validate(&self) -> DesignResult<()> {
        require_positive(InputField::FrequencyMhz, self.frequency_mhz)?;
        require_in_range(
            InputField::FrequencyMhz,
            self.frequency_mhz,
            MIN_FREQUENCY_MHZ,
            MAX_FREQUENCY_MHZ,
        )?;
        if !(MIN_ELEMENTS..=MAX_ELEMENTS).contains(&self.element_count) {
            return Err(DesignError::out_of_range(
                InputField::ElementCount,
                self.element_count,
                MIN_ELEMENTS as f64,
                MAX_ELEMENTS as f64,
            ));
        }
        Ok(())
    }

    /// Number of directors (element count minus reflector and DE)
    pub fn director_count(&self) -> u32 {
        self.element_count.saturating_sub(2)
    }
}

/// Role of an element on the boom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    /// Reflector
    #[serde(rename = "REF")]
    Reflector,
    /// Driven element
    #[serde(rename = "DE")]
    DrivenElement,
    /// Director
    #[serde(rename = "DIR")]
    Director,
}

impl ElementKind {
    /// Short code ("REF", "DE", "DIR")
    pub fn code(&self) -> &'static str {
        match self {
            ElementKind::Reflector => "REF",
            ElementKind::DrivenElement => "DE",
            ElementKind::Director => "DIR",
        }
    }
}

/// One row of the cutting list.
///
/// ## JSON Example
///
/// ```json
/// {
///   "name": "D1",
///   "kind": "DIR",
///   "position_mm": 571.3,
///   "spacing_mm": 155.8,
///   "half_length_mm": 465.4,
///   "cut_length_mm": 921.4,
///   "style": "straight",
///   "gap_mm": null
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementSpec {
    /// "REF", "DE", "D1", "D2", ...
    pub name: String,

    /// Element role
    pub kind: ElementKind,

    /// Distance from the reflector (mm)
    pub position_mm: f64,

    /// Distance from the previous element (mm), 0 for the reflector
    pub spacing_mm: f64,

    /// Half of the tabulated (uncorrected) full length (mm)
    pub half_length_mm: f64,

    /// Length to cut after construction correction (mm)
    pub cut_length_mm: f64,

    /// Element construction; only the driven element can be folded
    pub style: ElementStyle,

    /// Centre feed gap (mm), straight driven element only
    pub gap_mm: Option<f64>,
}

impl ElementSpec {
    /// Short note for tabular display
    pub fn note(&self) -> String {
        match (self.kind, self.gap_mm) {
            (ElementKind::Reflector, _) => "reflector".to_string(),
            (ElementKind::DrivenElement, Some(gap)) => {
                format!("split dipole, {:.1} mm feed gap", gap)
            }
            (ElementKind::DrivenElement, None) => "folded dipole".to_string(),
            (ElementKind::Director, _) => "director".to_string(),
        }
    }

    /// Cut length as a typed length
    pub fn cut_length(&self) -> Millimeters {
        Millimeters(self.cut_length_mm)
    }
}

/// Results from a Yagi design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YagiDesign {
    /// Elements from back to front: REF, DE, D1..Dn
    pub elements: Vec<ElementSpec>,

    /// Boom length from reflector to last director (mm)
    pub total_boom_length_mm: f64,

    /// Estimated forward gain (dBi)
    pub estimated_gain_dbi: f64,

    /// Design frequency (MHz)
    pub frequency_mhz: f64,

    /// Free-space wavelength at the design frequency (mm)
    pub wavelength_mm: f64,

    /// Boom length in wavelengths
    pub boom_length_wavelengths: f64,

    /// Construction preset the cut lengths were corrected for
    pub construction_preset: ConstructionPreset,

    /// Correction factor applied to every cut length
    pub correction_factor: f64,
}

impl YagiDesign {
    /// The reflector (always the first element)
    pub fn reflector(&self) -> &ElementSpec {
        &self.elements[0]
    }

    /// The driven element (always the second element)
    pub fn driven_element(&self) -> &ElementSpec {
        &self.elements[1]
    }

    /// Directors, nearest the driven element first
    pub fn directors(&self) -> &[ElementSpec] {
        &self.elements[2..]
    }

    /// Look up an element by name ("REF", "DE", "D3", ...)
    pub fn element(&self, name: &str) -> Option<&ElementSpec> {
        self.elements.iter().find(|e| e.name == name)
    }

    /// Boom length as a typed length
    pub fn boom_length(&self) -> Millimeters {
        Millimeters(self.total_boom_length_mm)
    }
}

/// Tracks the running boom position while elements are laid out.
struct BoomLayout {
    wavelength_mm: f64,
    correction_factor: f64,
    position_mm: f64,
    elements: Vec<ElementSpec>,
}

impl BoomLayout {
    fn new(wavelength_mm: f64, correction_factor: f64, capacity: usize) -> Self {
        BoomLayout {
            wavelength_mm,
            correction_factor,
            position_mm: 0.0,
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Put the reflector at the origin of the boom.
    fn start(&mut self, full_length: f64) {
        self.push(
            "REF".to_string(),
            ElementKind::Reflector,
            0.0,
            full_length,
            ElementStyle::Straight,
        );
    }

    /// Place the next element `spacing` wavelengths in front of the last one.
    fn place(
        &mut self,
        name: String,
        kind: ElementKind,
        spacing: f64,
        full_length: f64,
        style: ElementStyle,
    ) {
        let spacing_mm = spacing * self.wavelength_mm;
        self.push(name, kind, spacing_mm, full_length, style);
    }

    fn push(
        &mut self,
        name: String,
        kind: ElementKind,
        spacing_mm: f64,
        full_length: f64,
        style: ElementStyle,
    ) {
        self.position_mm += spacing_mm;

        let half_length_mm = full_length * self.wavelength_mm / 2.0;
        let gap_mm = (kind == ElementKind::DrivenElement && style.has_feed_gap())
            .then(|| FEED_GAP * self.wavelength_mm);

        self.elements.push(ElementSpec {
            name,
            kind,
            position_mm: self.position_mm,
            spacing_mm,
            half_length_mm,
            cut_length_mm: half_length_mm * 2.0 * self.correction_factor,
            style,
            gap_mm,
        });
    }
}

/// Design a DL6WU long-boom Yagi.
///
/// # Arguments
///
/// * `input` - Frequency, element count and construction options
///
/// # Returns
///
/// * `Ok(YagiDesign)` - Complete cutting list
/// * `Err(DesignError::InvalidInput)` - Frequency not positive/finite or
///   outside 1 kHz..=1 THz, or element count outside 3..=30
pub fn design(input: &YagiInput) -> DesignResult<YagiDesign> {
    input.validate()?;

    let wavelength = wavelength_mm(input.frequency_mhz);
    let correction_factor = input.construction_preset.correction_factor();
    let mut layout = BoomLayout::new(wavelength, correction_factor, input.element_count as usize);

    layout.start(REFLECTOR_LENGTH);
    layout.place(
        "DE".to_string(),
        ElementKind::DrivenElement,
        DRIVEN_ELEMENT_SPACING,
        DRIVEN_ELEMENT_LENGTH,
        input.driven_element,
    );
    for n in 1..=input.director_count() as usize {
        layout.place(
            format!("D{}", n),
            ElementKind::Director,
            director_spacing(n),
            director_length(n),
            ElementStyle::Straight,
        );
    }

    let total_boom_length_mm = layout.position_mm;
    let boom_length_wavelengths = to_wavelengths(total_boom_length_mm, wavelength);

    Ok(YagiDesign {
        elements: layout.elements,
        total_boom_length_mm,
        estimated_gain_dbi: estimated_gain_dbi(boom_length_wavelengths),
        frequency_mhz: input.frequency_mhz,
        wavelength_mm: wavelength,
        boom_length_wavelengths,
        construction_preset: input.construction_preset,
        correction_factor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_meter_yagi(element_count: u32) -> YagiInput {
        YagiInput::new(144.3, element_count)
    }

    fn assert_close(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() < tol,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_three_element_layout() {
        let yagi = design(&two_meter_yagi(3)).unwrap();
        let names: Vec<&str> = yagi.elements.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["REF", "DE", "D1"]);

        // λ = 2077.56 mm
        assert_eq!(yagi.reflector().position_mm, 0.0);
        assert_eq!(yagi.reflector().spacing_mm, 0.0);
        assert_close(yagi.driven_element().position_mm, 415.51, 0.01);
        assert_close(yagi.directors()[0].position_mm, 571.33, 0.01);
        assert_eq!(yagi.total_boom_length_mm, yagi.directors()[0].position_mm);
    }

    #[test]
    fn test_three_element_gain() {
        let yagi = design(&two_meter_yagi(3)).unwrap();
        assert!(yagi.estimated_gain_dbi >= 7.0 && yagi.estimated_gain_dbi <= 9.0);
        assert_close(yagi.estimated_gain_dbi, 7.875, 0.001);
    }

    #[test]
    fn test_golden_cut_lengths() {
        let yagi = design(&two_meter_yagi(3).with_preset(ConstructionPreset::MetalBonded)).unwrap();
        assert_close(yagi.reflector().half_length_mm, 500.69, 0.01);
        // D1: 0.448λ · 0.970
        assert_close(yagi.directors()[0].cut_length_mm, 902.83, 0.01);
    }

    #[test]
    fn test_nine_element_boom() {
        let yagi = design(&two_meter_yagi(9)).unwrap();
        assert_eq!(yagi.directors().len(), 7);
        assert_close(yagi.boom_length_wavelengths, 1.815, 1e-9);
        assert_close(yagi.total_boom_length_mm, 3770.78, 0.01);
    }

    #[test]
    fn test_spacing_matches_positions() {
        let yagi = design(&two_meter_yagi(20)).unwrap();
        for pair in yagi.elements.windows(2) {
            assert!(pair[1].position_mm > pair[0].position_mm);
            assert_close(pair[1].spacing_mm, pair[1].position_mm - pair[0].position_mm, 1e-9);
        }
    }

    #[test]
    fn test_director_lengths_shrink() {
        let yagi = design(&two_meter_yagi(30)).unwrap();
        for pair in yagi.directors().windows(2) {
            assert!(pair[1].half_length_mm <= pair[0].half_length_mm);
        }
        assert!(yagi.reflector().half_length_mm > yagi.driven_element().half_length_mm);
    }

    #[test]
    fn test_longest_boom() {
        let yagi = design(&two_meter_yagi(MAX_ELEMENTS)).unwrap();
        assert_close(yagi.boom_length_wavelengths, 10.015, 1e-9);
        assert!(yagi.estimated_gain_dbi <= 20.0);
    }

    #[test]
    fn test_preset_ordering() {
        let cut = |preset| {
            design(&two_meter_yagi(5).with_preset(preset))
                .unwrap()
                .driven_element()
                .cut_length_mm
        };
        let bonded = cut(ConstructionPreset::MetalBonded);
        let insulated = cut(ConstructionPreset::MetalInsulated);
        let pvc = cut(ConstructionPreset::PvcBoom);
        assert!(bonded < insulated && insulated < pvc);
    }

    #[test]
    fn test_preset_does_not_move_elements() {
        let bonded = design(&two_meter_yagi(7).with_preset(ConstructionPreset::MetalBonded)).unwrap();
        let pvc = design(&two_meter_yagi(7).with_preset(ConstructionPreset::PvcBoom)).unwrap();
        assert_eq!(bonded.total_boom_length_mm, pvc.total_boom_length_mm);
        assert_eq!(bonded.estimated_gain_dbi, pvc.estimated_gain_dbi);
    }

    #[test]
    fn test_driven_element_styles() {
        let folded = design(&two_meter_yagi(4)).unwrap();
        assert_eq!(folded.driven_element().style, ElementStyle::Folded);
        assert_eq!(folded.driven_element().gap_mm, None);
        assert_eq!(folded.driven_element().note(), "folded dipole");

        let straight =
            design(&two_meter_yagi(4).with_driven_element(ElementStyle::Straight)).unwrap();
        let gap = straight.driven_element().gap_mm.unwrap();
        assert_close(gap, 10.39, 0.01);
        assert_eq!(straight.driven_element().note(), "split dipole, 10.4 mm feed gap");

        // Parasitic elements never carry a gap
        assert!(straight
            .elements
            .iter()
            .filter(|e| e.kind != ElementKind::DrivenElement)
            .all(|e| e.gap_mm.is_none() && e.style == ElementStyle::Straight));
    }

    #[test]
    fn test_element_lookup() {
        let yagi = design(&two_meter_yagi(6)).unwrap();
        assert_eq!(yagi.element("D4").unwrap().kind, ElementKind::Director);
        assert!(yagi.element("D5").is_none());
    }

    #[test]
    fn test_invalid_frequency() {
        for frequency_mhz in [0.0, -144.0, f64::NAN, f64::INFINITY] {
            let err = design(&YagiInput::new(frequency_mhz, 5)).unwrap_err();
            assert_eq!(err.field(), Some(InputField::FrequencyMhz));
        }
    }

    #[test]
    fn test_frequency_outside_supported_range() {
        for frequency_mhz in [1e-310, MIN_FREQUENCY_MHZ / 2.0, MAX_FREQUENCY_MHZ * 2.0] {
            let err = design(&YagiInput::new(frequency_mhz, 5)).unwrap_err();
            assert!(matches!(
                err,
                DesignError::InvalidInput {
                    field: InputField::FrequencyMhz,
                    violation: crate::errors::Violation::OutOfRange { .. },
                    ..
                }
            ));
        }
        for frequency_mhz in [MIN_FREQUENCY_MHZ, MAX_FREQUENCY_MHZ] {
            let yagi = design(&YagiInput::new(frequency_mhz, MAX_ELEMENTS)).unwrap();
            assert_eq!(yagi.reflector().position_mm, 0.0);
            assert!(yagi.total_boom_length_mm.is_finite());
            assert!(yagi.total_boom_length_mm > 0.0);
            assert!((7.0..=20.0).contains(&yagi.estimated_gain_dbi));
        }
    }

    #[test]
    fn test_invalid_element_count() {
        for count in [0, 2, MAX_ELEMENTS + 1] {
            let err = design(&two_meter_yagi(count)).unwrap_err();
            assert_eq!(err.field(), Some(InputField::ElementCount));
        }
        assert!(design(&two_meter_yagi(MIN_ELEMENTS)).is_ok());
        assert!(design(&two_meter_yagi(MAX_ELEMENTS)).is_ok());
    }

    #[test]
    fn test_input_defaults_from_json() {
        let input: YagiInput =
            serde_json::from_str(r#"{ "frequency_mhz": 432.1, "element_count": 12 }"#).unwrap();
        assert_eq!(input.construction_preset, ConstructionPreset::MetalInsulated);
        assert_eq!(input.driven_element, ElementStyle::Folded);
    }

    #[test]
    fn test_serialization() {
        let yagi = design(&two_meter_yagi(5)).unwrap();
        let json = serde_json::to_string_pretty(&yagi).unwrap();
        assert!(json.contains("\"kind\": \"DIR\""));
        let roundtrip: YagiDesign = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.elements.len(), 5);
        assert_eq!(roundtrip.elements[1].name, "DE");
        assert_eq!(roundtrip.construction_preset, yagi.construction_preset);
        assert!((roundtrip.total_boom_length_mm - yagi.total_boom_length_mm).abs() < 1e-9);
    }
}
