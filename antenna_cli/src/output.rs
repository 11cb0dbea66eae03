//! Plain-text rendering of design results.

use std::fmt;

use antenna_core::units::{Feet, Inches, Meters, Millimeters};
use antenna_core::{AmateurBand, MoxonDesign, YagiDesign};

use crate::config::UnitSystem;

const RULE: &str = "═══════════════════════════════════════════════════════════════════════";

/// Format a length in the chosen unit system
pub fn length(mm: f64, units: UnitSystem) -> String {
    match units {
        UnitSystem::Metric => format!("{:.1} mm", mm),
        UnitSystem::Imperial => {
            let inches: Inches = Millimeters(mm).into();
            format!("{:.2} in", inches.0)
        }
    }
}

/// Format a boom length: meters, or feet and inches
pub fn boom_length(boom: Millimeters, units: UnitSystem) -> String {
    match units {
        UnitSystem::Metric => {
            let meters: Meters = boom.into();
            format!("{:.3} m", meters.0)
        }
        UnitSystem::Imperial => {
            let feet: Feet = Inches::from(boom).into();
            let (whole, rest) = feet.feet_and_inches();
            format!("{} ft {:.1} in", whole, rest.0)
        }
    }
}

/// Yagi cutting list
pub struct YagiTable<'a> {
    pub yagi: &'a YagiDesign,
    pub units: UnitSystem,
}

impl fmt::Display for YagiTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let yagi = self.yagi;
        let units = self.units;
        let boom_wavelengths = yagi
            .boom_length()
            .in_wavelengths(Millimeters(yagi.wavelength_mm));

        writeln!(f, "{}", RULE)?;
        writeln!(
            f,
            "  YAGI {} ELEMENTS @ {:.3} MHz",
            yagi.elements.len(),
            yagi.frequency_mhz
        )?;
        writeln!(f, "{}", RULE)?;
        writeln!(f, "  Wavelength: {}", length(yagi.wavelength_mm, units))?;
        writeln!(
            f,
            "  Boom:       {} ({:.3} λ)",
            boom_length(yagi.boom_length(), units),
            boom_wavelengths.0
        )?;
        writeln!(f, "  Gain:       {:.1} dBi (estimated)", yagi.estimated_gain_dbi)?;
        writeln!(
            f,
            "  Mounting:   {} (x{:.3})",
            yagi.construction_preset, yagi.correction_factor
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "  {:<5} {:>13} {:>13} {:>13} {:>13}  {}",
            "Elem", "Position", "Spacing", "Half-length", "Cut length", "Notes"
        )?;
        for element in &yagi.elements {
            writeln!(
                f,
                "  {:<5} {:>13} {:>13} {:>13} {:>13}  {}",
                element.name,
                length(element.position_mm, units),
                length(element.spacing_mm, units),
                length(element.half_length_mm, units),
                length(element.cut_length_mm, units),
                element.note()
            )?;
        }
        writeln!(f, "{}", RULE)
    }
}

/// Moxon dimensions and wire lengths
pub struct MoxonTable<'a> {
    pub moxon: &'a MoxonDesign,
    pub units: UnitSystem,
}

impl fmt::Display for MoxonTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let moxon = self.moxon;
        let units = self.units;

        writeln!(f, "{}", RULE)?;
        writeln!(
            f,
            "  MOXON RECTANGLE @ {:.3} MHz, {} wire",
            moxon.frequency_mhz,
            length(moxon.wire_diameter_mm, units)
        )?;
        writeln!(f, "{}", RULE)?;
        writeln!(f, "  Wavelength: {}", length(moxon.wavelength_mm, units))?;
        writeln!(f)?;
        for (label, value) in moxon.dimensions() {
            writeln!(f, "  {}  {:>13}", label, length(value, units))?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "  Driven wire:    {}",
            length(moxon.wire_length_driven_mm, units)
        )?;
        writeln!(
            f,
            "  Reflector wire: {}",
            length(moxon.wire_length_reflector_mm, units)
        )?;
        writeln!(
            f,
            "  End correction: x{:.4} (d = {:.5} λ)",
            moxon.end_correction_factor, moxon.diameter_wavelengths
        )?;
        writeln!(f, "{}", RULE)
    }
}

/// Band presets and their design frequencies
pub struct BandTable;

impl fmt::Display for BandTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  {:<6} {:>10}", "Band", "MHz")?;
        for band in AmateurBand::ALL {
            writeln!(
                f,
                "  {:<6} {:>10.3}",
                band.code(),
                band.design_frequency_mhz()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use antenna_core::{design_moxon, design_yagi, MoxonInput, YagiInput};

    #[test]
    fn test_length_units() {
        assert_eq!(length(254.0, UnitSystem::Metric), "254.0 mm");
        assert_eq!(length(254.0, UnitSystem::Imperial), "10.00 in");
    }

    #[test]
    fn test_boom_length_units() {
        // 12 ft 6 in
        let boom = Millimeters(3810.0);
        assert_eq!(boom_length(boom, UnitSystem::Metric), "3.810 m");
        assert_eq!(boom_length(boom, UnitSystem::Imperial), "12 ft 6.0 in");
    }

    #[test]
    fn test_yagi_table_rows() {
        let yagi = design_yagi(&YagiInput::new(144.3, 4)).unwrap();
        let text = YagiTable {
            yagi: &yagi,
            units: UnitSystem::Metric,
        }
        .to_string();
        assert!(text.contains("YAGI 4 ELEMENTS @ 144.300 MHz"));
        assert!(text.contains("folded dipole"));
        assert!(text.lines().any(|line| line.trim_start().starts_with("D2 ")));
    }

    #[test]
    fn test_yagi_boom_line() {
        // 9 elements on 2m: 3770.78 mm, 1.815 λ
        let yagi = design_yagi(&YagiInput::new(144.3, 9)).unwrap();
        let metric = YagiTable {
            yagi: &yagi,
            units: UnitSystem::Metric,
        }
        .to_string();
        assert!(metric.contains("Boom:       3.771 m (1.815 λ)"));

        let imperial = YagiTable {
            yagi: &yagi,
            units: UnitSystem::Imperial,
        }
        .to_string();
        assert!(imperial.contains("Boom:       12 ft 4.5 in"));
    }

    #[test]
    fn test_moxon_table_rows() {
        let moxon = design_moxon(&MoxonInput {
            frequency_mhz: 144.3,
            wire_diameter_mm: 2.0,
        })
        .unwrap();
        let text = MoxonTable {
            moxon: &moxon,
            units: UnitSystem::Metric,
        }
        .to_string();
        assert!(text.contains("779.1 mm"));
        assert!(text.contains("Reflector wire"));
    }

    #[test]
    fn test_band_list() {
        let text = BandTable.to_string();
        assert!(text.contains("70cm"));
        assert!(text.contains("144.300"));
    }
}
