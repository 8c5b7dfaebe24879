//! Spectral radiance of an ideal blackbody (Planck's law).
//!
//! ```text
//! I(λ, T) = 2πhc² / λ⁵ · 1 / (e^(hc / λkT) − 1)
//! ```

use crate::error::{ColourError, Result};

/// Planck constant (J·s).
pub const PLANCK: f64 = 6.6260689633e-34;
/// Boltzmann constant (J/K).
pub const BOLTZMANN: f64 = 1.380650424e-23;
/// Speed of light (m/s), rounded as in the historical radiance tables.
pub const SPEED_OF_LIGHT: f64 = 2.99792e8;

const NANOMETRE: f64 = 1e-9;

/// Spectral radiance at `wavelength_nm` for a blackbody at `kelvin`.
///
/// Inputs are not validated up front. Evaluation fails where the
/// arithmetic does: a zero wavelength or temperature divides by zero, and a
/// very small `λT` overflows the exponential, and a NaN input yields
/// [`ColourError::NonFinite`]. Any other input, including a negative one,
/// returns whatever finite value the formula yields.
pub fn spectral_radiance(wavelength_nm: f64, kelvin: f64) -> Result<f64> {
    let wavelength = wavelength_nm * NANOMETRE;
    let division_by_zero = || ColourError::DivisionByZero {
        wavelength: wavelength_nm,
        temperature: kelvin,
    };

    let lambda5 = wavelength.powi(5);
    if lambda5 == 0.0 {
        return Err(division_by_zero());
    }
    let p1 = (2.0 * std::f64::consts::PI * PLANCK * SPEED_OF_LIGHT.powi(2)) / lambda5;

    let divisor = wavelength * BOLTZMANN * kelvin;
    if divisor == 0.0 {
        return Err(division_by_zero());
    }
    let exp = ((PLANCK * SPEED_OF_LIGHT) / divisor).exp();
    if exp.is_infinite() {
        return Err(ColourError::Overflow {
            wavelength: wavelength_nm,
            temperature: kelvin,
        });
    }
    let denominator = exp - 1.0;
    if denominator == 0.0 {
        return Err(division_by_zero());
    }

    let radiance = p1 / denominator;
    if !radiance.is_finite() {
        return Err(ColourError::NonFinite {
            wavelength: wavelength_nm,
            temperature: kelvin,
        });
    }
    Ok(radiance)
}
