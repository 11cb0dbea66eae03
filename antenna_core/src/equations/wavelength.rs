//! # Free-Space Wavelength
//!
//! Every length the engines produce is a fraction of the free-space
//! wavelength, so this is the one place the speed of light appears.
//!
//! ## Unit Algebra
//!
//! ```text
//! λ [mm] = c [km/s] / f [MHz]
//! ```
//!
//! (10³ m/s divided by 10⁶ 1/s leaves 10⁻³ m.)

/// Speed of light in vacuum, km/s (exact SI value)
pub const SPEED_OF_LIGHT_KM_S: f64 = 299_792.458;

/// Lowest accepted design frequency, MHz (1 kHz)
///
/// Every output stays a finite multiple of λ between these bounds.
pub const MIN_FREQUENCY_MHZ: f64 = 1.0e-3;

/// Highest accepted design frequency, MHz (1 THz)
pub const MAX_FREQUENCY_MHZ: f64 = 1.0e6;

/// Free-space wavelength in millimeters
///
/// # Example
/// ```rust
/// use antenna_core::equations::wavelength::wavelength_mm;
///
/// // 2m band calling frequency
/// let lambda = wavelength_mm(144.3);
/// assert!((lambda - 2077.56).abs() < 0.01);
/// ```
#[inline]
pub fn wavelength_mm(frequency_mhz: f64) -> f64 {
    SPEED_OF_LIGHT_KM_S / frequency_mhz
}

/// Convert a physical length to wavelengths
#[inline]
pub fn to_wavelengths(length_mm: f64, wavelength_mm: f64) -> f64 {
    length_mm / wavelength_mm
}
