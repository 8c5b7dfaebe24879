//! Colour difference (CIE76 ΔE*ab).

use crate::colour_space::xyz::{Lab, Tristimulus};
use crate::config::ConversionConfig;

/// ΔE between two readings in CIELAB (D65, corrected cube root).
pub fn delta_e(a: &Tristimulus, b: &Tristimulus) -> f64 {
    delta_e_with(a, b, &ConversionConfig::standard())
}

/// ΔE between two readings using the configured white and formula mode.
pub fn delta_e_with(a: &Tristimulus, b: &Tristimulus, config: &ConversionConfig) -> f64 {
    let lab = |xyz: &Tristimulus| xyz.to_cielab_with(config.reference_white, config.formula);
    lab_distance(lab(a), lab(b))
}

/// Euclidean distance between two CIELAB colours.
pub fn lab_distance(first: Lab, second: Lab) -> f64 {
    let dl = second.l - first.l;
    let da = second.a - first.a;
    let db = second.b - first.b;
    (dl * dl + da * da + db * db).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour_space::white::ReferenceWhite;
    use crate::config::FormulaMode;

    const EPSILON: f64 = 1e-9;

    fn samples() -> [Tristimulus; 4] {
        [
            Tristimulus::new(95.047, 100.0, 108.883),
            Tristimulus::new(41.24, 21.26, 1.93),
            Tristimulus::new(18.05, 7.22, 95.05),
            Tristimulus::new(0.5, 0.4, 0.3),
        ]
    }

    #[test]
    fn test_self_difference_is_zero() {
        for a in samples() {
            assert!(delta_e(&a, &a).abs() < EPSILON);
        }
    }

    #[test]
    fn test_difference_is_symmetric() {
        for a in samples() {
            for b in samples() {
                assert_eq!(delta_e(&a, &b), delta_e(&b, &a));
            }
        }
    }

    #[test]
    fn test_white_to_black_is_lightness_100() {
        let white = Tristimulus::new(95.047, 100.0, 108.883);
        let black = Tristimulus::new(0.0, 0.0, 0.0);
        assert!((delta_e(&white, &black) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_lab_distance_is_euclidean() {
        let a = Lab { l: 50.0, a: 0.0, b: 0.0 };
        let b = Lab { l: 53.0, a: 4.0, b: 0.0 };
        assert!((lab_distance(a, b) - 5.0).abs() < EPSILON);
    }

    #[test]
    fn test_config_selects_white_and_mode() {
        let a = Tristimulus::new(95.047, 100.0, 108.883);
        let b = Tristimulus::new(50.0, 50.0, 50.0);
        let corrected = delta_e(&a, &b);
        let literal = delta_e_with(
            &a,
            &b,
            &ConversionConfig {
                reference_white: ReferenceWhite::D65,
                formula: FormulaMode::Literal,
            },
        );
        let d55 = delta_e_with(
            &a,
            &b,
            &ConversionConfig {
                reference_white: ReferenceWhite::D55,
                formula: FormulaMode::Corrected,
            },
        );
        assert!((corrected - literal).abs() > 1.0);
        assert!((corrected - d55).abs() > 1e-3);
    }
}
