//! CIE XYZ tristimulus readings and the representations derived from them.
//!
//! Every view is recomputed on request from the held (X, Y, Z); nothing is
//! cached.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::matrix::ColourMatrix;
use super::transfer::{LabTransfer, SrgbTransfer, TransferFunction};
use super::white::ReferenceWhite;
use crate::config::{ConversionConfig, FormulaMode};
use crate::error::{ColourError, Result};
use crate::temperature::cct::{CctEstimator, McCamy};

/// A CIE 1931 XYZ reading on the 0–100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tristimulus {
    #[serde(rename = "X")]
    pub x: f64,
    #[serde(rename = "Y")]
    pub y: f64,
    #[serde(rename = "Z")]
    pub z: f64,
}

/// CIE xyY: chromaticity plus luminance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Chromaticity {
    pub x: f64,
    pub y: f64,
    /// Luminance, carried over unchanged from the reading.
    pub luminance: f64,
}

/// CIE L*a*b* relative to a reference white.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

/// Gamma-encoded sRGB. Not clamped; out-of-gamut readings leave [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Tristimulus {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Project onto the xy chromaticity plane.
    ///
    /// Fails when X + Y + Z is zero.
    pub fn to_xyy(&self) -> Result<Chromaticity> {
        let sum = self.x + self.y + self.z;
        if sum == 0.0 {
            return Err(ColourError::ZeroSum(*self));
        }
        Ok(Chromaticity {
            x: self.x / sum,
            y: self.y / sum,
            luminance: self.y,
        })
    }

    /// CIELAB against `white`, using the corrected cube root.
    pub fn to_cielab(&self, white: ReferenceWhite) -> Lab {
        self.to_cielab_with(white, FormulaMode::Corrected)
    }

    /// CIELAB against `white` with an explicit formula mode.
    pub fn to_cielab_with(&self, white: ReferenceWhite, mode: FormulaMode) -> Lab {
        let f = LabTransfer(mode);
        let [xn, yn, zn] = white.xyz().map(|c| c * 100.0);

        let fx = f.to_encoded(self.x / xn);
        let fy = f.to_encoded(self.y / yn);
        let fz = f.to_encoded(self.z / zn);

        Lab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }

    /// sRGB using the corrected encoding.
    pub fn to_srgb(&self) -> Result<Srgb> {
        self.to_srgb_with(FormulaMode::Corrected)
    }

    /// sRGB with an explicit formula mode.
    ///
    /// The reading is first scaled so its largest component is 1, which
    /// discards absolute luminance. Fails when that component is zero.
    pub fn to_srgb_with(&self, mode: FormulaMode) -> Result<Srgb> {
        let max = self.x.max(self.y).max(self.z);
        if max == 0.0 {
            return Err(ColourError::ZeroMaximum(*self));
        }
        let normalised = self.to_array().map(|c| c / max);

        let encode = SrgbTransfer(mode);
        let [r, g, b] = ColourMatrix::xyz_to_linear_srgb()
            .apply(normalised)
            .map(|c| encode.to_encoded(c));
        Ok(Srgb { r, g, b })
    }

    /// Correlated colour temperature using [`McCamy`].
    pub fn cct(&self) -> Result<f64> {
        self.cct_with(&McCamy)
    }

    /// Correlated colour temperature using an injected estimator.
    pub fn cct_with(&self, estimator: &dyn CctEstimator) -> Result<f64> {
        estimator.estimate(*self)
    }

    /// Human-readable report with the default estimator and corrected sRGB.
    pub fn summary(&self) -> Result<Summary> {
        self.summary_with(&McCamy, &ConversionConfig::standard())
    }

    /// Human-readable report.
    ///
    /// Chromaticity and sRGB failures propagate. A CCT failure is rendered
    /// as its message instead.
    pub fn summary_with(
        &self,
        estimator: &dyn CctEstimator,
        config: &ConversionConfig,
    ) -> Result<Summary> {
        let chromaticity = self.to_xyy()?;
        let cct = self.cct_with(estimator).map_err(|e| {
            tracing::debug!("CCT unavailable for summary: {e}");
            e.to_string()
        });
        let srgb = self.to_srgb_with(config.formula)?;
        Ok(Summary {
            xyz: *self,
            chromaticity,
            cct,
            srgb,
        })
    }
}

impl From<[f64; 3]> for Tristimulus {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl fmt::Display for Tristimulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "XYZ({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Textual report of a reading and its derived values.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub xyz: Tristimulus,
    pub chromaticity: Chromaticity,
    /// The temperature in Kelvin, or the reason none could be estimated.
    pub cct: Result<f64, String>,
    pub srgb: Srgb,
}

struct Column(f64);

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>7.4}", self.0)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Tristimulus { x, y, z } = self.xyz;
        let c = self.chromaticity;
        let Srgb { r, g, b } = self.srgb;

        writeln!(f, "X, Y, Z : {}, {}, {}", Column(x), Column(y), Column(z))?;
        writeln!(
            f,
            "x, y, Y : {}, {}, {}",
            Column(c.x),
            Column(c.y),
            Column(c.luminance)
        )?;
        match &self.cct {
            Ok(kelvin) => writeln!(f, "CCT (K) : {}", Column(*kelvin))?,
            Err(reason) => writeln!(f, "CCT (K) : {reason}")?,
        }
        write!(f, "sRGB    : {}, {}, {}", Column(r), Column(g), Column(b))
    }
}
