//! Error type shared by every colour computation in the crate.

use crate::colour_space::xyz::Tristimulus;

/// Broad classification of a [`ColourError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input lies outside the domain of the transform.
    Domain,
    /// A value could not be constructed from the supplied parts.
    Construction,
    /// The arithmetic itself failed while evaluating a formula.
    Numeric,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColourError {
    #[error("temperature {0} K out of range (should be between 1667 K and 25000 K)")]
    TemperatureOutOfRange(f64),
    #[error("chromaticity is undefined for {0}: X + Y + Z is zero")]
    ZeroSum(Tristimulus),
    #[error("cannot normalise {0}: largest component is zero")]
    ZeroMaximum(Tristimulus),
    #[error("no correlated colour temperature for {xyz}: {reason}")]
    NoCorrelatedTemperature { xyz: Tristimulus, reason: String },
    #[error("unknown reference white: {0}")]
    UnknownReferenceWhite(String),
    #[error("should have 9 matrix coefficients, have {0}")]
    CoefficientCount(usize),
    #[error("division by zero evaluating Planck's law at {wavelength} nm, {temperature} K")]
    DivisionByZero { wavelength: f64, temperature: f64 },
    #[error("exponential overflow evaluating Planck's law at {wavelength} nm, {temperature} K")]
    Overflow { wavelength: f64, temperature: f64 },
    #[error("Planck's law has no finite value at {wavelength} nm, {temperature} K")]
    NonFinite { wavelength: f64, temperature: f64 },
}

impl ColourError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TemperatureOutOfRange(_)
            | Self::ZeroSum(_)
            | Self::ZeroMaximum(_)
            | Self::NoCorrelatedTemperature { .. }
            | Self::UnknownReferenceWhite(_) => ErrorKind::Domain,
            Self::CoefficientCount(_) => ErrorKind::Construction,
            Self::DivisionByZero { .. } | Self::Overflow { .. } | Self::NonFinite { .. } => {
                ErrorKind::Numeric
            }
        }
    }
}

pub type Result<T, E = ColourError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds_classify_variants() {
        assert_eq!(ColourError::TemperatureOutOfRange(1000.0).kind(), ErrorKind::Domain);
        assert_eq!(ColourError::CoefficientCount(8).kind(), ErrorKind::Construction);
        assert_eq!(
            ColourError::Overflow { wavelength: 10.0, temperature: 100.0 }.kind(),
            ErrorKind::Numeric
        );
    }

    #[test]
    fn test_out_of_range_message_names_valid_range() {
        let msg = ColourError::TemperatureOutOfRange(25001.0).to_string();
        assert!(msg.contains("25001"));
        assert!(msg.contains("between 1667 K and 25000 K"));
    }
}
