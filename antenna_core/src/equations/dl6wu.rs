//! # DL6WU Long-Boom Yagi Tables
//!
//! Empirical spacing and length data for the DL6WU long-boom Yagi family,
//! with construction correction in the VK5DJ manner. All values are
//! fractions of the free-space wavelength λ.
//!
//! The tables are data, not algorithm: the engine in
//! [`crate::calculations::yagi`] only ever calls the lookup helpers below,
//! so retuning a coefficient never touches control flow.
//!
//! ## Geometry
//!
//! ```text
//!   REF      DE    D1     D2       D3         D4  ...
//!    |       |     |      |        |          |
//!    |<-0.2λ>|<s1->|<-s2->|<--s3-->|<---s4--->|
//!    0
//! ```
//!
//! Director spacings `s1, s2, ...` grow with director number and settle
//! at [`DIRECTOR_SPACING_ASYMPTOTE`]. Director lengths shrink with
//! director number and settle at [`DIRECTOR_LENGTH_ASYMPTOTE`].
//!
//! ## References
//!
//! - G. Hoch (DL6WU), "More Gain with Yagi Antennas", VHF Communications 4/1977
//! - G. Hoch (DL6WU), "Extremely Long Yagi Antennas", VHF Communications 3/1982

// =============================================================================
// ELEMENT SPACINGS
// =============================================================================

/// Reflector to driven element spacing (λ)
pub const DRIVEN_ELEMENT_SPACING: f64 = 0.200;

/// Spacing in front of each director, indexed by director number - 1.
///
/// Entry 0 is DE → D1, entry 1 is D1 → D2, and so on.
pub const DIRECTOR_SPACINGS: [f64; 13] = [
    0.075, 0.180, 0.215, 0.250, 0.280, 0.300, 0.315, 0.330, 0.345, 0.360, 0.375, 0.390, 0.400,
];

/// Spacing used for every director beyond the table (λ)
pub const DIRECTOR_SPACING_ASYMPTOTE: f64 = 0.400;

// =============================================================================
// ELEMENT LENGTHS (full, uncorrected)
// Tabulated for an element diameter near 0.005λ
// =============================================================================

/// Reflector full length (λ). Does not depend on element count.
pub const REFLECTOR_LENGTH: f64 = 0.482;

/// Driven element full length (λ), tip to tip for a straight dipole or
/// end to end for a folded dipole
pub const DRIVEN_ELEMENT_LENGTH: f64 = 0.473;

/// Director full length, indexed by director number - 1
pub const DIRECTOR_LENGTHS: [f64; 12] = [
    0.448, 0.440, 0.434, 0.429, 0.425, 0.422, 0.419, 0.417, 0.415, 0.413, 0.412, 0.411,
];

/// Director full length used beyond the table (λ)
pub const DIRECTOR_LENGTH_ASYMPTOTE: f64 = 0.410;

/// Feed gap at the centre of a straight driven element (λ)
pub const FEED_GAP: f64 = 0.005;

// =============================================================================
// GAIN CURVE
// G(dBi) = GAIN_AT_ONE_WAVELENGTH + GAIN_SLOPE_PER_DECADE · log10(L/λ)
// =============================================================================

/// Gain of a 1λ boom (dBi)
pub const GAIN_AT_ONE_WAVELENGTH: f64 = 11.8;

/// Gain added per tenfold increase in boom length (dB)
pub const GAIN_SLOPE_PER_DECADE: f64 = 7.0;

/// Lower clamp for the gain estimate (dBi)
pub const GAIN_MIN_DBI: f64 = 7.0;

/// Upper clamp for the gain estimate (dBi)
pub const GAIN_MAX_DBI: f64 = 20.0;

/// Spacing in front of director `n` (1-based), in wavelengths
///
/// # Example
/// ```rust
/// use antenna_core::equations::dl6wu::{director_spacing, DIRECTOR_SPACING_ASYMPTOTE};
///
/// assert_eq!(director_spacing(1), 0.075);
/// assert_eq!(director_spacing(40), DIRECTOR_SPACING_ASYMPTOTE);
/// ```
pub fn director_spacing(n: usize) -> f64 {
    debug_assert!(n >= 1, "directors are numbered from 1");
    DIRECTOR_SPACINGS
        .get(n.saturating_sub(1))
        .copied()
        .unwrap_or(DIRECTOR_SPACING_ASYMPTOTE)
}

/// Full length of director `n` (1-based), in wavelengths
pub fn director_length(n: usize) -> f64 {
    debug_assert!(n >= 1, "directors are numbered from 1");
    DIRECTOR_LENGTHS
        .get(n.saturating_sub(1))
        .copied()
        .unwrap_or(DIRECTOR_LENGTH_ASYMPTOTE)
}

/// Estimated forward gain for a boom of `boom_wavelengths`
///
/// Monotonically non-decreasing and concave in boom length, clamped to
/// [`GAIN_MIN_DBI`]..=[`GAIN_MAX_DBI`].
///
/// # Example
/// ```rust
/// use antenna_core::equations::dl6wu::estimated_gain_dbi;
///
/// assert!((estimated_gain_dbi(1.0) - 11.8).abs() < 1e-12);
/// assert!(estimated_gain_dbi(2.0) > estimated_gain_dbi(1.0));
/// ```
pub fn estimated_gain_dbi(boom_wavelengths: f64) -> f64 {
    if boom_wavelengths <= 0.0 {
        return GAIN_MIN_DBI;
    }
    let gain = GAIN_AT_ONE_WAVELENGTH + GAIN_SLOPE_PER_DECADE * boom_wavelengths.log10();
    gain.clamp(GAIN_MIN_DBI, GAIN_MAX_DBI)
}
