//! # Error Types
//!
//! Structured error types for antenna_core. Every failure names the input
//! field that was rejected and why, so a front-end can map it straight onto
//! a validation message next to the offending control.
//!
//! ## Example
//!
//! ```rust
//! use antenna_core::errors::{DesignError, DesignResult, InputField};
//!
//! fn validate_frequency(frequency_mhz: f64) -> DesignResult<()> {
//!     if frequency_mhz <= 0.0 {
//!         return Err(DesignError::not_positive(InputField::FrequencyMhz, frequency_mhz));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_frequency(-1.0).is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for antenna_core operations
pub type DesignResult<T> = Result<T, DesignError>;

/// Input fields that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    /// Operating frequency (MHz)
    FrequencyMhz,
    /// Total Yagi element count
    ElementCount,
    /// Moxon wire diameter (mm)
    WireDiameterMm,
}

impl InputField {
    /// Field name as it appears in JSON input
    pub fn name(&self) -> &'static str {
        match self {
            InputField::FrequencyMhz => "frequency_mhz",
            InputField::ElementCount => "element_count",
            InputField::WireDiameterMm => "wire_diameter_mm",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// Value is zero or negative
    NotPositive,
    /// Value is NaN or infinite
    NotFinite,
    /// Value lies outside the supported range (inclusive bounds)
    OutOfRange { min: f64, max: f64 },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::NotPositive => f.write_str("must be positive"),
            Violation::NotFinite => f.write_str("must be a finite number"),
            Violation::OutOfRange { min, max } => {
                write!(f, "must be between {} and {}", min, max)
            }
        }
    }
}

/// Structured error type for design operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum DesignError {
    /// An input value failed validation. No partial result is produced.
    #[error("Invalid input for '{field}': {value} {violation}")]
    InvalidInput {
        field: InputField,
        value: String,
        violation: Violation,
    },

    /// Band name could not be resolved
    #[error("Unknown band: {name}")]
    UnknownBand { name: String },

    /// A named option (preset, driven element style) could not be parsed
    #[error("Unknown {kind}: {value}")]
    UnknownOption { kind: String, value: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl DesignError {
    /// Create an InvalidInput error for a zero or negative value
    pub fn not_positive(field: InputField, value: impl ToString) -> Self {
        DesignError::InvalidInput {
            field,
            value: value.to_string(),
            violation: Violation::NotPositive,
        }
    }

    /// Create an InvalidInput error for NaN or infinite input
    pub fn not_finite(field: InputField, value: impl ToString) -> Self {
        DesignError::InvalidInput {
            field,
            value: value.to_string(),
            violation: Violation::NotFinite,
        }
    }

    /// Create an InvalidInput error for a value outside `[min, max]`
    pub fn out_of_range(field: InputField, value: impl ToString, min: f64, max: f64) -> Self {
        DesignError::InvalidInput {
            field,
            value: value.to_string(),
            violation: Violation::OutOfRange { min, max },
        }
    }

    /// Create an UnknownBand error
    pub fn unknown_band(name: impl Into<String>) -> Self {
        DesignError::UnknownBand { name: name.into() }
    }

    /// Create an UnknownOption error
    pub fn unknown_option(kind: impl Into<String>, value: impl Into<String>) -> Self {
        DesignError::UnknownOption {
            kind: kind.into(),
            value: value.into(),
        }
    }

    /// The rejected field, if this is an input validation error
    pub fn field(&self) -> Option<InputField> {
        match self {
            DesignError::InvalidInput { field, .. } => Some(*field),
            _ => None,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            DesignError::InvalidInput { .. } => "INVALID_INPUT",
            DesignError::UnknownBand { .. } => "UNKNOWN_BAND",
            DesignError::UnknownOption { .. } => "UNKNOWN_OPTION",
            DesignError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for DesignError {
    fn from(err: serde_json::Error) -> Self {
        DesignError::SerializationError {
            reason: err.to_string(),
        }
    }
}

/// Reject NaN/infinite and non-positive values for `field`.
pub(crate) fn require_positive(field: InputField, value: f64) -> DesignResult<()> {
    if !value.is_finite() {
        return Err(DesignError::not_finite(field, value));
    }
    if value <= 0.0 {
        return Err(DesignError::not_positive(field, value));
    }
    Ok(())
}

/// Reject values outside the inclusive range `[min, max]` for `field`.
pub(crate) fn require_in_range(
    field: InputField,
    value: f64,
    min: f64,
    max: f64,
) -> DesignResult<()> {
    if !(min..=max).contains(&value) {
        return Err(DesignError::out_of_range(field, value, min, max));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = DesignError::not_positive(InputField::FrequencyMhz, -5.0);
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: DesignError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_json_shape() {
        let error = DesignError::out_of_range(InputField::ElementCount, 31, 3.0, 30.0);
        let value = serde_json::to_value(&error).unwrap();
        assert_eq!(value["type"], "InvalidInput");
        assert_eq!(value["details"]["field"], "element_count");
        assert_eq!(value["details"]["violation"]["kind"], "out_of_range");
        assert_eq!(value["details"]["violation"]["max"], 30.0);
    }

    #[test]
    fn test_error_display() {
        let error = DesignError::not_positive(InputField::WireDiameterMm, 0.0);
        assert_eq!(error.to_string(), "Invalid input for 'wire_diameter_mm': 0 must be positive");
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(DesignError::unknown_band("3cm").error_code(), "UNKNOWN_BAND");
        assert_eq!(
            DesignError::not_finite(InputField::FrequencyMhz, f64::NAN).error_code(),
            "INVALID_INPUT"
        );
        assert_eq!(
            DesignError::unknown_option("preset", "wood").field(),
            None
        );
    }

    #[test]
    fn test_require_positive() {
        assert!(require_positive(InputField::FrequencyMhz, 144.3).is_ok());
        assert_eq!(
            require_positive(InputField::FrequencyMhz, f64::INFINITY)
                .unwrap_err()
                .field(),
            Some(InputField::FrequencyMhz)
        );
        assert!(matches!(
            require_positive(InputField::FrequencyMhz, 0.0),
            Err(DesignError::InvalidInput { violation: Violation::NotPositive, .. })
        ));
    }

    #[test]
    fn test_require_in_range() {
        assert!(require_in_range(InputField::FrequencyMhz, 1.0, 1.0, 2.0).is_ok());
        assert!(require_in_range(InputField::FrequencyMhz, 2.0, 1.0, 2.0).is_ok());
        assert!(matches!(
            require_in_range(InputField::FrequencyMhz, 1e-310, 1e-3, 1e6),
            Err(DesignError::InvalidInput {
                field: InputField::FrequencyMhz,
                violation: Violation::OutOfRange { .. },
                ..
            })
        ));
    }
}
