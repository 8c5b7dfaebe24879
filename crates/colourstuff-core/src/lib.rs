//! Colourstuff Core: colour science for tristimulus probe readings.
//!
//! Conversions from CIE XYZ to xyY, CIELAB and sRGB, the Planckian locus,
//! blackbody spectral radiance, correlated colour temperature, and ΔE.
//! No I/O; every operation is a pure function of its inputs.

pub mod colour_space;
pub mod config;
pub mod difference;
pub mod error;
pub mod source;
pub mod temperature;

// Re-exports for convenience.
pub use colour_space::matrix::ColourMatrix;
pub use colour_space::white::ReferenceWhite;
pub use colour_space::xyz::{Chromaticity, Lab, Srgb, Summary, Tristimulus};
pub use config::{ConversionConfig, FormulaMode};
pub use difference::{delta_e, delta_e_with};
pub use error::{ColourError, ErrorKind, Result};
pub use source::ReadingSource;
pub use temperature::blackbody::spectral_radiance;
pub use temperature::cct::{CctEstimator, HernandezAndres, McCamy};
pub use temperature::locus::locus;
