//! 3x3 colour matrix for linear colour space conversions.

use glam::{DMat3, DVec3};

use crate::error::{ColourError, Result};

/// XYZ (D65) to linear sRGB, row-major (Lindbloom).
#[rustfmt::skip]
pub const XYZ_TO_LINEAR_SRGB: [f64; 9] = [
    3.2404542, -1.5371385, -0.4985314,
    -0.9692660, 1.8760108, 0.0415560,
    0.0556434, -0.2040259, 1.0572252,
];

/// A fixed 3x3 linear operator built from nine row-major coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColourMatrix(DMat3);

impl ColourMatrix {
    /// Build a matrix from row-major coefficients.
    ///
    /// Fails unless exactly nine coefficients are supplied.
    pub fn from_coefficients(coefficients: &[f64]) -> Result<Self> {
        let rows: [f64; 9] = coefficients
            .try_into()
            .map_err(|_| ColourError::CoefficientCount(coefficients.len()))?;
        // glam is column-major.
        Ok(Self(DMat3::from_cols_array(&rows).transpose()))
    }

    /// The XYZ to linear sRGB matrix.
    pub fn xyz_to_linear_srgb() -> Self {
        Self(DMat3::from_cols_array(&XYZ_TO_LINEAR_SRGB).transpose())
    }

    /// Apply this matrix to a 3-component vector.
    pub fn apply(&self, v: [f64; 3]) -> [f64; 3] {
        (self.0 * DVec3::from_array(v)).to_array()
    }
}
