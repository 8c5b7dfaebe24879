//! Planckian locus approximation.
//!
//! Cubic spline fit of the blackbody locus in CIE xy, valid from 1667 K to
//! 25000 K.
//!
//! # Reference
//! Kim et al. (2002) — Design of advanced color temperature control system
//! for HDTV applications

use std::ops::RangeInclusive;

use crate::error::{ColourError, Result};

/// Temperatures accepted by [`locus`].
pub const LOCUS_RANGE: RangeInclusive<f64> = 1667.0..=25000.0;

/// One piece of a piecewise cubic: a closed temperature range and the
/// coefficients of `a·v³ + b·v² + c·v + d`.
#[derive(Debug, Clone)]
pub struct Segment {
    pub kelvin: RangeInclusive<f64>,
    pub coefficients: [f64; 4],
}

impl Segment {
    fn eval(&self, v: f64) -> f64 {
        let [a, b, c, d] = self.coefficients;
        a.mul_add(v, b).mul_add(v, c).mul_add(v, d)
    }
}

// Segments are listed in ascending order and neighbours share their
// boundary temperature; the first match wins, so a shared boundary always
// evaluates the lower segment.

/// x as a cubic in 10³/T.
#[rustfmt::skip]
pub static X_SEGMENTS: [Segment; 2] = [
    Segment { kelvin: 1667.0..=4000.0,  coefficients: [-0.2661239, -0.2343580, 0.8776956, 0.179910] },
    Segment { kelvin: 4000.0..=25000.0, coefficients: [-3.0258469,  2.107379,  0.2226347, 0.240390] },
];

/// y as a cubic in x.
#[rustfmt::skip]
pub static Y_SEGMENTS: [Segment; 3] = [
    Segment { kelvin: 1667.0..=2222.0,  coefficients: [-1.1063814, -1.34811020, 2.18555832, -0.20219683] },
    Segment { kelvin: 2222.0..=4000.0,  coefficients: [-0.9549476, -1.37418593, 2.09137015, -0.16748867] },
    Segment { kelvin: 4000.0..=25000.0, coefficients: [ 3.0817580, -5.87338670, 3.75112997, -0.37001483] },
];

/// Select the first segment whose range contains `kelvin`.
pub fn select(segments: &[Segment], kelvin: f64) -> Result<&Segment> {
    segments
        .iter()
        .find(|s| s.kelvin.contains(&kelvin))
        .ok_or(ColourError::TemperatureOutOfRange(kelvin))
}

/// Chromaticity (x, y) of a blackbody radiator at `kelvin`.
///
/// Fails outside [1667, 25000] K.
pub fn locus(kelvin: f64) -> Result<(f64, f64)> {
    let x_segment = select(&X_SEGMENTS, kelvin)?;
    let y_segment = select(&Y_SEGMENTS, kelvin)?;
    tracing::trace!(
        kelvin,
        x_range = ?x_segment.kelvin,
        y_range = ?y_segment.kelvin,
        "planckian locus segments"
    );

    let x = x_segment.eval(1e3 / kelvin);
    let y = y_segment.eval(x);
    Ok((x, y))
}
