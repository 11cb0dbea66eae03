//! # Moxon Rectangle Proportions
//!
//! Fixed wavelength fractions for the five characteristic Moxon dimensions,
//! plus the wire-diameter end correction applied to cut wire lengths.
//!
//! ```text
//!            A
//!   ┌─────────────────┐  ─┬─
//!   │  driven element │   B
//!   ╵                 ╵  ─┼─
//!                          C   (gap between tips)
//!   ╷                 ╷  ─┼─
//!   │    reflector    │   D
//!   └─────────────────┘  ─┴─
//!   E = B + C + D (overall depth)
//! ```
//!
//! ## References
//!
//! - L. B. Cebik (W4RNL), "Moxon Rectangles", Antennas for Two Meters
//! - L. Moxon (G6XN), HF Antennas for All Locations, 2nd ed.

/// Width of the rectangle (λ)
pub const RATIO_A: f64 = 0.375;

/// Driven element tail length (λ)
pub const RATIO_B: f64 = 0.058;

/// Gap between driven and reflector tails (λ)
pub const RATIO_C: f64 = 0.067;

/// Reflector tail length (λ)
pub const RATIO_D: f64 = 0.058;

/// Overall depth of the rectangle (λ)
pub const RATIO_E: f64 = 0.183;

/// End-correction slope against diameter-to-wavelength ratio.
///
/// `factor = 1 / (1 + K · d/λ)`. At K = 12, 2 mm wire on 2m shortens the
/// wires by about 1.1%.
pub const END_CORRECTION_K: f64 = 12.0;

/// Wire-diameter end correction factor
///
/// Continuous and strictly decreasing in `diameter_wavelengths`,
/// equal to 1.0 for a vanishingly thin wire.
///
/// # Example
/// ```rust
/// use antenna_core::equations::moxon::end_correction_factor;
///
/// let thin = end_correction_factor(0.0005);
/// let thick = end_correction_factor(0.005);
/// assert!(thick < thin && thin < 1.0);
/// ```
#[inline]
pub fn end_correction_factor(diameter_wavelengths: f64) -> f64 {
    1.0 / (1.0 + END_CORRECTION_K * diameter_wavelengths)
}

/// Geometric driven-element wire length before correction: A + 2B
#[inline]
pub fn driven_wire_length(a: f64, b: f64) -> f64 {
    a + 2.0 * b
}

/// Geometric reflector wire length before correction: A + 2(E - B - C)
///
/// The reflector tails are whatever depth remains once the driven tails
/// and the gap are taken out of E, so this equals A + 2D.
#[inline]
pub fn reflector_wire_length(a: f64, b: f64, c: f64, e: f64) -> f64 {
    a + 2.0 * (e - b - c)
}
