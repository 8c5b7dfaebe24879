//! Correlated colour temperature estimation.
//!
//! Estimators are pluggable: anything implementing [`CctEstimator`] can be
//! handed to [`Tristimulus::cct_with`], including a plain closure over
//! `(X, Y, Z)`.

use super::locus::{LOCUS_RANGE, locus};
use crate::colour_space::xyz::{Chromaticity, Tristimulus};
use crate::error::{ColourError, Result};

/// Readings farther than this from the locus point at their estimated
/// temperature (Euclidean distance in xy) have no meaningful CCT.
pub const MAX_LOCUS_DISTANCE: f64 = 0.05;

/// Estimates a correlated colour temperature in Kelvin.
pub trait CctEstimator: Send + Sync {
    fn estimate(&self, xyz: Tristimulus) -> Result<f64>;
}

impl<F> CctEstimator for F
where
    F: Fn(f64, f64, f64) -> Result<f64> + Send + Sync,
{
    fn estimate(&self, xyz: Tristimulus) -> Result<f64> {
        self(xyz.x, xyz.y, xyz.z)
    }
}

fn reject(xyz: Tristimulus, reason: impl Into<String>) -> ColourError {
    ColourError::NoCorrelatedTemperature {
        xyz,
        reason: reason.into(),
    }
}

fn chromaticity(xyz: Tristimulus) -> Result<Chromaticity> {
    xyz.to_xyy().map_err(|_| reject(xyz, "chromaticity is undefined"))
}

/// Accept `kelvin` only if it is finite, inside the locus domain, and the
/// reading lies close to the locus there.
fn check_estimate(xyz: Tristimulus, c: Chromaticity, kelvin: f64) -> Result<f64> {
    if !kelvin.is_finite() {
        return Err(reject(xyz, "estimate is not finite"));
    }
    if !LOCUS_RANGE.contains(&kelvin) {
        return Err(reject(
            xyz,
            format!("estimate {kelvin:.0} K is outside 1667 K to 25000 K"),
        ));
    }
    let (lx, ly) = locus(kelvin)?;
    let distance = (c.x - lx).hypot(c.y - ly);
    if distance > MAX_LOCUS_DISTANCE {
        return Err(reject(
            xyz,
            format!("chromaticity is {distance:.4} from the Planckian locus"),
        ));
    }
    tracing::trace!(kelvin, distance, "cct estimate accepted");
    Ok(kelvin)
}

/// McCamy's cubic approximation.
///
/// ```text
/// n   = (x − 0.3320) / (0.1858 − y)
/// CCT = 449n³ + 3525n² + 6823.3n + 5520.33
/// ```
///
/// # Reference
/// McCamy, C. S. (1992) — Correlated color temperature as an explicit
/// function of chromaticity coordinates
#[derive(Debug, Clone, Copy, Default)]
pub struct McCamy;

impl CctEstimator for McCamy {
    fn estimate(&self, xyz: Tristimulus) -> Result<f64> {
        let c = chromaticity(xyz)?;
        let denominator = 0.1858 - c.y;
        if denominator == 0.0 {
            return Err(reject(xyz, "epicentre slope is vertical"));
        }
        let n = (c.x - 0.3320) / denominator;
        let kelvin = 449.0_f64.mul_add(n, 3525.0).mul_add(n, 6823.3).mul_add(n, 5520.33);
        check_estimate(xyz, c, kelvin)
    }
}

/// Exponential fit by Hernández-Andrés, Lee and Romero.
///
/// ```text
/// n   = (x − xe) / (y − ye)
/// CCT = A0 + A1·exp(−n/t1) + A2·exp(−n/t2) + A3·exp(−n/t3)
/// ```
///
/// The low parameter set covers 3000–50000 K; estimates above 50000 K are
/// recomputed with the high set.
///
/// # Reference
/// Hernández-Andrés et al. (1999) — Calculating correlated color
/// temperatures across the entire gamut of daylight and skylight
/// chromaticities
#[derive(Debug, Clone, Copy, Default)]
pub struct HernandezAndres;

struct ExpFit {
    xe: f64,
    ye: f64,
    a0: f64,
    terms: [(f64, f64); 3],
}

impl ExpFit {
    const LOW: Self = Self {
        xe: 0.3366,
        ye: 0.1735,
        a0: -949.86315,
        terms: [(6253.80338, 0.92159), (28.70599, 0.20039), (0.00004, 0.07125)],
    };
    const HIGH: Self = Self {
        xe: 0.3356,
        ye: 0.1691,
        a0: 36284.48953,
        terms: [(0.00228, 0.07861), (5.4535e-36, 0.01543), (0.0, 1.0)],
    };

    fn eval(&self, c: Chromaticity) -> Option<f64> {
        let denominator = c.y - self.ye;
        if denominator == 0.0 {
            return None;
        }
        let n = (c.x - self.xe) / denominator;
        Some(
            self.terms
                .iter()
                .fold(self.a0, |acc, (a, t)| acc + a * (-n / t).exp()),
        )
    }
}

impl CctEstimator for HernandezAndres {
    fn estimate(&self, xyz: Tristimulus) -> Result<f64> {
        let c = chromaticity(xyz)?;
        let mut kelvin = ExpFit::LOW
            .eval(c)
            .ok_or_else(|| reject(xyz, "epicentre slope is vertical"))?;
        if kelvin > 50_000.0 {
            kelvin = ExpFit::HIGH
                .eval(c)
                .ok_or_else(|| reject(xyz, "epicentre slope is vertical"))?;
        }
        check_estimate(xyz, c, kelvin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const D65: Tristimulus = Tristimulus::new(95.047, 100.0, 108.883);

    fn from_xy(x: f64, y: f64) -> Tristimulus {
        Tristimulus::new(x / y * 50.0, 50.0, (1.0 - x - y) / y * 50.0)
    }

    #[test]
    fn test_mccamy_d65_is_about_6504k() {
        let t = McCamy.estimate(D65).unwrap();
        assert!((t - 6503.46).abs() < 0.01, "{t}");
    }

    #[test]
    fn test_hernandez_andres_d65_is_about_6500k() {
        let t = HernandezAndres.estimate(D65).unwrap();
        assert!((t - 6504.0).abs() < 30.0, "{t}");
    }

    #[test]
    fn test_estimators_recover_locus_temperatures() {
        let estimators: [(&str, &dyn CctEstimator); 2] =
            [("mccamy", &McCamy), ("hernandez-andres", &HernandezAndres)];
        for kelvin in [3000.0, 4500.0, 5500.0, 7500.0, 10000.0] {
            let (x, y) = locus(kelvin).unwrap();
            let xyz = from_xy(x, y);
            for (name, estimator) in estimators {
                let t = estimator.estimate(xyz).unwrap();
                assert!(
                    (t - kelvin).abs() / kelvin < 0.02,
                    "{name}: {t} K for locus point at {kelvin} K"
                );
            }
        }
    }

    #[test]
    fn test_zero_reading_has_no_cct() {
        let err = McCamy.estimate(Tristimulus::new(0.0, 0.0, 0.0)).unwrap_err();
        assert!(matches!(err, ColourError::NoCorrelatedTemperature { .. }));
    }

    #[test]
    fn test_saturated_green_is_too_far_from_locus() {
        let err = McCamy.estimate(from_xy(0.3, 0.6)).unwrap_err();
        match err {
            ColourError::NoCorrelatedTemperature { reason, .. } => {
                assert!(reason.contains("from the Planckian locus"), "{reason}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_deep_red_is_rejected() {
        assert!(McCamy.estimate(from_xy(0.68, 0.31)).is_err());
    }

    #[test]
    fn test_closure_is_an_estimator() {
        let double_y = |_x: f64, y: f64, _z: f64| -> Result<f64> { Ok(y * 2.0) };
        assert_eq!(double_y.estimate(Tristimulus::new(1.0, 2.0, 3.0)), Ok(4.0));
    }
}
