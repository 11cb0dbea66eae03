//! # Unit Types
//!
//! Type-safe wrappers for the handful of units an antenna builder deals with.
//! These are plain f64 newtypes so JSON stays clean (just numbers).
//!
//! ## Conventions
//!
//! The engines work in SI-derived units internally:
//! - Length: millimeters (mm) - what gets marked on the tape measure
//! - Electrical length: wavelengths (λ)
//!
//! Imperial conversions are provided for builders who cut in inches.
//!
//! ## Example
//!
//! ```rust
//! use antenna_core::units::{Inches, Millimeters};
//!
//! let boom = Millimeters(254.0);
//! let boom_in: Inches = boom.into();
//! assert!((boom_in.0 - 10.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Millimeters per inch (exact by definition)
pub const MM_PER_INCH: f64 = 25.4;

// ============================================================================
// Length Units
// ============================================================================

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Electrical length in free-space wavelengths
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Wavelengths(pub f64);

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

impl From<Millimeters> for Inches {
    fn from(mm: Millimeters) -> Self {
        Inches(mm.0 / MM_PER_INCH)
    }
}

impl From<Inches> for Millimeters {
    fn from(inches: Inches) -> Self {
        Millimeters(inches.0 * MM_PER_INCH)
    }
}

impl From<Feet> for Inches {
    fn from(ft: Feet) -> Self {
        Inches(ft.0 * 12.0)
    }
}

impl From<Inches> for Feet {
    fn from(inches: Inches) -> Self {
        Feet(inches.0 / 12.0)
    }
}

impl Millimeters {
    /// Express this length as a fraction of `wavelength`
    pub fn in_wavelengths(self, wavelength: Millimeters) -> Wavelengths {
        Wavelengths(self.0 / wavelength.0)
    }
}

impl Feet {
    /// Split into whole feet and the remaining inches
    pub fn feet_and_inches(self) -> (f64, Inches) {
        let whole = self.0.floor();
        (whole, Inches((self.0 - whole) * 12.0))
    }
}

// ============================================================================
// Arithmetic Implementations
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }
    };
}

impl_arithmetic!(Millimeters);
impl_arithmetic!(Meters);
impl_arithmetic!(Inches);
impl_arithmetic!(Feet);
impl_arithmetic!(Wavelengths);
