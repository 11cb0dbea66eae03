//! # Antenna Equations and Tables
//!
//! All physical constants, empirical tables and closed-form formulas used by
//! the design engines live here. Keeping them in one place means:
//! - Coefficients can be checked against the published sources directly
//! - Tables can be retuned without touching engine control flow
//! - Both engines share one speed-of-light constant
//!
//! ## Modules
//!
//! - [`wavelength`] - Speed of light and free-space wavelength
//! - [`dl6wu`] - DL6WU long-boom Yagi spacing/length tables and gain curve
//! - [`moxon`] - Moxon rectangle ratios and wire end correction

pub mod dl6wu;
pub mod moxon;
pub mod wavelength;

pub use dl6wu::{director_length, director_spacing, estimated_gain_dbi};
pub use moxon::end_correction_factor;
pub use wavelength::{
    to_wavelengths, wavelength_mm, MAX_FREQUENCY_MHZ, MIN_FREQUENCY_MHZ, SPEED_OF_LIGHT_KM_S,
};
