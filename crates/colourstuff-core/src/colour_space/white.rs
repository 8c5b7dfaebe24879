//! Reference white points for CIELAB conversion.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColourError;

/// Named reference white.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReferenceWhite {
    D55,
    #[default]
    D65,
}

/// Reference white tristimulus values normalised so Y = 1.
///
/// # Reference
/// Lindbloom, Bruce J. — XYZ to Lab
static REFERENCE_WHITES: [(ReferenceWhite, [f64; 3]); 2] = [
    (ReferenceWhite::D55, [0.95682, 1.00000, 0.92149]),
    (ReferenceWhite::D65, [0.95047, 1.00000, 1.08883]),
];

impl ReferenceWhite {
    /// Every white in the table.
    pub fn all() -> impl Iterator<Item = Self> {
        REFERENCE_WHITES.iter().map(|(white, _)| *white)
    }

    /// The (Xn, Yn, Zn) triple with Yn = 1.
    pub fn xyz(self) -> [f64; 3] {
        // Table rows follow declaration order.
        REFERENCE_WHITES[self as usize].1
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::D55 => "D55",
            Self::D65 => "D65",
        }
    }
}

impl fmt::Display for ReferenceWhite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReferenceWhite {
    type Err = ColourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .find(|white| white.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ColourError::UnknownReferenceWhite(s.to_string()))
    }
}
