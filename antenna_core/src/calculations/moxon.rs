//! # Moxon Rectangle Design
//!
//! Computes the five characteristic Moxon dimensions A–E as fixed fractions
//! of a wavelength, plus the two wire lengths to cut, shortened for wire
//! thickness.
//!
//! ## Assumptions
//!
//! - Bare round wire, free space
//! - A–E are geometric and do not depend on wire diameter
//! - Only the cut wire lengths carry the diameter correction
//!
//! ## Example
//!
//! ```rust
//! use antenna_core::calculations::moxon::{design, MoxonInput};
//!
//! let moxon = design(&MoxonInput { frequency_mhz: 144.3, wire_diameter_mm: 2.0 }).unwrap();
//!
//! assert!((moxon.a_mm - 779.09).abs() < 0.01);
//! assert!(moxon.wire_length_driven_mm < moxon.a_mm + 2.0 * moxon.b_mm);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::moxon::{
    driven_wire_length, end_correction_factor, reflector_wire_length, RATIO_A, RATIO_B, RATIO_C,
    RATIO_D, RATIO_E,
};
use crate::equations::wavelength::{
    to_wavelengths, wavelength_mm, MAX_FREQUENCY_MHZ, MIN_FREQUENCY_MHZ,
};
use crate::errors::{require_in_range, require_positive, DesignResult, InputField};

/// Input parameters for a Moxon rectangle.
///
/// ## JSON Example
///
/// ```json
/// {
///   "frequency_mhz": 144.3,
///   "wire_diameter_mm": 2.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoxonInput {
    /// Design frequency in MHz
    pub frequency_mhz: f64,

    /// Wire (or tube) diameter in mm
    pub wire_diameter_mm: f64,
}

impl MoxonInput {
    /// Validate input parameters.
    pub fn validate(&self) -> DesignResult<()> {
        require_positive(InputField::FrequencyMhz, self.frequency_mhz)?;
        require_in_range(
            InputField::FrequencyMhz,
            self.frequency_mhz,
            MIN_FREQUENCY_MHZ,
            MAX_FREQUENCY_MHZ,
        )?;
        require_positive(InputField::WireDiameterMm, self.wire_diameter_mm)?;
        Ok(())
    }
}

/// Results from a Moxon design. All lengths in mm.
///
/// ## JSON Example
///
/// ```json
/// {
///   "a_mm": 779.1,
///   "b_mm": 120.5,
///   "c_mm": 139.2,
///   "d_mm": 120.5,
///   "e_mm": 380.2,
///   "wire_length_driven_mm": 1008.4,
///   "wire_length_reflector_mm": 1008.4,
///   "frequency_mhz": 144.3,
///   "wire_diameter_mm": 2.0,
///   "wavelength_mm": 2077.6,
///   "diameter_wavelengths": 0.00096,
///   "end_correction_factor": 0.9886
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoxonDesign {
    /// Rectangle width
    pub a_mm: f64,
    /// Driven element tail
    pub b_mm: f64,
    /// Gap between tails
    pub c_mm: f64,
    /// Reflector tail
    pub d_mm: f64,
    /// Overall depth
    pub e_mm: f64,
    /// Driven element wire to cut (corrected A + 2B)
    pub wire_length_driven_mm: f64,
    /// Reflector wire to cut (corrected A + 2D)
    pub wire_length_reflector_mm: f64,
    /// Design frequency (MHz)
    pub frequency_mhz: f64,
    /// Wire diameter the lengths were corrected for
    pub wire_diameter_mm: f64,
    /// Free-space wavelength at the design frequency
    pub wavelength_mm: f64,
    /// Wire diameter as a fraction of λ
    pub diameter_wavelengths: f64,
    /// Multiplier applied to the geometric wire lengths
    pub end_correction_factor: f64,
}

impl MoxonDesign {
    /// Labelled A–E rows for tabular display
    pub fn dimensions(&self) -> [(&'static str, f64); 5] {
        [
            ("A", self.a_mm),
            ("B", self.b_mm),
            ("C", self.c_mm),
            ("D", self.d_mm),
            ("E", self.e_mm),
        ]
    }
}

/// Design a Moxon rectangle.
///
/// # Returns
///
/// * `Ok(MoxonDesign)` - Dimensions and wire lengths
/// * `Err(DesignError::InvalidInput)` - Frequency or wire diameter not
///   positive/finite, or frequency outside 1 kHz..=1 THz
pub fn design(input: &MoxonInput) -> DesignResult<MoxonDesign> {
    input.validate()?;

    let wavelength = wavelength_mm(input.frequency_mhz);
    let a = wavelength * RATIO_A;
    let b = wavelength * RATIO_B;
    let c = wavelength * RATIO_C;
    let d = wavelength * RATIO_D;
    let e = wavelength * RATIO_E;

    let diameter_wavelengths = to_wavelengths(input.wire_diameter_mm, wavelength);
    let correction = end_correction_factor(diameter_wavelengths);

    Ok(MoxonDesign {
        a_mm: a,
        b_mm: b,
        c_mm: c,
        d_mm: d,
        e_mm: e,
        wire_length_driven_mm: driven_wire_length(a, b) * correction,
        wire_length_reflector_mm: reflector_wire_length(a, b, c, e) * correction,
        frequency_mhz: input.frequency_mhz,
        wire_diameter_mm: input.wire_diameter_mm,
        wavelength_mm: wavelength,
        diameter_wavelengths,
        end_correction_factor: correction,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{DesignError, Violation};

    fn two_meter_moxon() -> MoxonInput {
        MoxonInput {
            frequency_mhz: 144.3,
            wire_diameter_mm: 2.0,
        }
    }

    #[test]
    fn test_two_meter_dimensions() {
        let moxon = design(&two_meter_moxon()).unwrap();
        let expected = [779.09, 120.50, 139.20, 120.50, 380.19];
        for ((label, actual), expected) in moxon.dimensions().iter().zip(expected) {
            assert!((actual - expected).abs() < 0.01, "{label}: {actual}");
        }
    }

    #[test]
    fn test_ratios_exact() {
        let moxon = design(&MoxonInput {
            frequency_mhz: 28.5,
            wire_diameter_mm: 4.0,
        })
        .unwrap();
        let lambda = wavelength_mm(28.5);
        assert!((moxon.a_mm / lambda - 0.375).abs() < 1e-12);
        assert!((moxon.b_mm / lambda - 0.058).abs() < 1e-12);
        assert!((moxon.c_mm / lambda - 0.067).abs() < 1e-12);
        assert!((moxon.d_mm / lambda - 0.058).abs() < 1e-12);
        assert!((moxon.e_mm / lambda - 0.183).abs() < 1e-12);
    }

    #[test]
    fn test_golden_wire_lengths() {
        let moxon = design(&two_meter_moxon()).unwrap();
        // 0.491λ = 1020.08 mm, × 0.98858
        assert!((moxon.wire_length_driven_mm - 1008.43).abs() < 0.01);
        assert!((moxon.wire_length_reflector_mm - moxon.wire_length_driven_mm).abs() < 1e-9);
    }

    #[test]
    fn test_thicker_wire_is_shorter() {
        let thin = design(&two_meter_moxon()).unwrap();
        let thick = design(&MoxonInput {
            wire_diameter_mm: 12.0,
            ..two_meter_moxon()
        })
        .unwrap();
        assert!(thick.wire_length_driven_mm < thin.wire_length_driven_mm);
        assert!(thick.wire_length_reflector_mm < thin.wire_length_reflector_mm);
        // Geometry is untouched
        assert_eq!(thick.a_mm, thin.a_mm);
        assert_eq!(thick.e_mm, thin.e_mm);
    }

    #[test]
    fn test_invalid_frequency() {
        let err = design(&MoxonInput {
            frequency_mhz: -1.0,
            ..two_meter_moxon()
        })
        .unwrap_err();
        assert_eq!(err.field(), Some(InputField::FrequencyMhz));
    }

    #[test]
    fn test_invalid_wire_diameter() {
        let err = design(&MoxonInput {
            wire_diameter_mm: 0.0,
            ..two_meter_moxon()
        })
        .unwrap_err();
        assert!(matches!(
            err,
            DesignError::InvalidInput {
                field: InputField::WireDiameterMm,
                violation: Violation::NotPositive,
                ..
            }
        ));
        let err = design(&MoxonInput {
            wire_diameter_mm: f64::NAN,
            ..two_meter_moxon()
        })
        .unwrap_err();
        assert_eq!(err.field(), Some(InputField::WireDiameterMm));
    }

    #[test]
    fn test_frequency_outside_supported_range() {
        for frequency_mhz in [1e-310, MAX_FREQUENCY_MHZ * 10.0] {
            let err = design(&MoxonInput {
                frequency_mhz,
                ..two_meter_moxon()
            })
            .unwrap_err();
            assert!(matches!(
                err,
                DesignError::InvalidInput {
                    field: InputField::FrequencyMhz,
                    violation: Violation::OutOfRange { .. },
                    ..
                }
            ));
        }
        let lowest = design(&MoxonInput {
            frequency_mhz: MIN_FREQUENCY_MHZ,
            ..two_meter_moxon()
        })
        .unwrap();
        assert!(lowest.a_mm.is_finite());
        assert!(lowest.wire_length_reflector_mm.is_finite());
    }

    #[test]
    fn test_frequency_checked_first() {
        let err = design(&MoxonInput {
            frequency_mhz: 0.0,
            wire_diameter_mm: 0.0,
        })
        .unwrap_err();
        assert_eq!(err.field(), Some(InputField::FrequencyMhz));
    }
}
