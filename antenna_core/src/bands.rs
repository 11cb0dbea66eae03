//! Amateur band presets
//!
//! Design-centre frequencies for the bands people usually build Yagis and
//! Moxons for. Centres sit in the weak-signal/SSB segment where a
//! directional antenna is most likely to be used.

use serde::{Deserialize, Serialize};

use crate::errors::{DesignError, DesignResult};

/// Amateur radio bands with a default design frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AmateurBand {
    /// 20 meters
    #[serde(rename = "20m")]
    M20,
    /// 17 meters
    #[serde(rename = "17m")]
    M17,
    /// 15 meters
    #[serde(rename = "15m")]
    M15,
    /// 12 meters
    #[serde(rename = "12m")]
    M12,
    /// 10 meters
    #[serde(rename = "10m")]
    M10,
    /// 6 meters
    #[serde(rename = "6m")]
    M6,
    /// 4 meters
    #[serde(rename = "4m")]
    M4,
    /// 2 meters
    #[serde(rename = "2m")]
    M2,
    /// 1.25 meters
    #[serde(rename = "1.25m")]
    M1_25,
    /// 70 centimeters
    #[serde(rename = "70cm")]
    Cm70,
    /// 23 centimeters
    #[serde(rename = "23cm")]
    Cm23,
}

impl AmateurBand {
    /// All bands, lowest frequency first
    pub const ALL: [AmateurBand; 11] = [
        AmateurBand::M20,
        AmateurBand::M17,
        AmateurBand::M15,
        AmateurBand::M12,
        AmateurBand::M10,
        AmateurBand::M6,
        AmateurBand::M4,
        AmateurBand::M2,
        AmateurBand::M1_25,
        AmateurBand::Cm70,
        AmateurBand::Cm23,
    ];

    /// Short band name ("2m", "70cm", ...)
    pub fn code(&self) -> &'static str {
        match self {
            AmateurBand::M20 => "20m",
            AmateurBand::M17 => "17m",
            AmateurBand::M15 => "15m",
            AmateurBand::M12 => "12m",
            AmateurBand::M10 => "10m",
            AmateurBand::M6 => "6m",
            AmateurBand::M4 => "4m",
            AmateurBand::M2 => "2m",
            AmateurBand::M1_25 => "1.25m",
            AmateurBand::Cm70 => "70cm",
            AmateurBand::Cm23 => "23cm",
        }
    }

    /// Default design frequency in MHz
    pub fn design_frequency_mhz(&self) -> f64 {
        match self {
            AmateurBand::M20 => 14.175,
            AmateurBand::M17 => 18.118,
            AmateurBand::M15 => 21.225,
            AmateurBand::M12 => 24.94,
            AmateurBand::M10 => 28.5,
            AmateurBand::M6 => 50.15,
            AmateurBand::M4 => 70.2,
            AmateurBand::M2 => 144.3,
            AmateurBand::M1_25 => 222.1,
            AmateurBand::Cm70 => 432.1,
            AmateurBand::Cm23 => 1296.1,
        }
    }

    /// Parse from common string representations ("2m", "2 M", "70CM", "70")
    pub fn from_str_flexible(s: &str) -> DesignResult<Self> {
        let normalized = s.to_lowercase().replace([' ', '_'], "");
        AmateurBand::ALL
            .iter()
            .copied()
            .find(|band| {
                let code = band.code();
                normalized == code || code.trim_end_matches(char::is_alphabetic) == normalized
            })
            .ok_or_else(|| DesignError::unknown_band(s))
    }
}

impl std::fmt::Display for AmateurBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} MHz)", self.code(), self.design_frequency_mhz())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands_ascending() {
        for pair in AmateurBand::ALL.windows(2) {
            assert!(pair[0].design_frequency_mhz() < pair[1].design_frequency_mhz());
        }
    }

    #[test]
    fn test_parse_band() {
        assert_eq!(AmateurBand::from_str_flexible("2m").unwrap(), AmateurBand::M2);
        assert_eq!(AmateurBand::from_str_flexible("70 CM").unwrap(), AmateurBand::Cm70);
        assert_eq!(AmateurBand::from_str_flexible("1.25m").unwrap(), AmateurBand::M1_25);
        // bare numbers are unambiguous
        assert_eq!(AmateurBand::from_str_flexible("70").unwrap(), AmateurBand::Cm70);
        assert_eq!(AmateurBand::from_str_flexible("6").unwrap(), AmateurBand::M6);
    }

    #[test]
    fn test_unknown_band() {
        let err = AmateurBand::from_str_flexible("3cm").unwrap_err();
        assert_eq!(err, DesignError::unknown_band("3cm"));
    }

    #[test]
    fn test_band_serialization() {
        let json = serde_json::to_string(&AmateurBand::Cm70).unwrap();
        assert_eq!(json, "\"70cm\"");
    }
}
