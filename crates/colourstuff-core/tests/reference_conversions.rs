//! Cross-checks against the `palette` crate and published reference values.
//!
//! Run with: `cargo test -p colourstuff-core`

use colourstuff_core::{
    ColourError, ErrorKind, FormulaMode, ReferenceWhite, Tristimulus, delta_e, locus,
    spectral_radiance,
};
use palette::white_point::D65;
use palette::Xyz;
use palette::convert::FromColorUnclamped;

/// Readings on the 0–100 scale, all in gamut or close to it.
fn readings() -> Vec<Tristimulus> {
    vec![
        Tristimulus::new(95.047, 100.0, 108.883),
        Tristimulus::new(41.24, 21.26, 1.93),
        Tristimulus::new(35.76, 71.52, 11.92),
        Tristimulus::new(18.05, 7.22, 95.05),
        Tristimulus::new(20.0, 21.0, 22.0),
        Tristimulus::new(0.4, 0.42, 0.45),
    ]
}

#[test]
fn test_cielab_matches_palette() {
    for xyz in readings() {
        let ours = xyz.to_cielab(ReferenceWhite::D65);
        let scaled = Xyz::<D65, f64>::new(xyz.x / 100.0, xyz.y / 100.0, xyz.z / 100.0);
        let oracle: palette::Lab<D65, f64> = palette::Lab::from_color_unclamped(scaled);
        assert!((ours.l - oracle.l).abs() < 1e-6, "{xyz}: L {} vs {}", ours.l, oracle.l);
        assert!((ours.a - oracle.a).abs() < 1e-6, "{xyz}: a {} vs {}", ours.a, oracle.a);
        assert!((ours.b - oracle.b).abs() < 1e-6, "{xyz}: b {} vs {}", ours.b, oracle.b);
    }
}

#[test]
fn test_srgb_matches_palette_after_normalisation() {
    for xyz in readings() {
        let ours = xyz.to_srgb().unwrap();
        let max = xyz.x.max(xyz.y).max(xyz.z);
        let normalised = Xyz::<D65, f64>::new(xyz.x / max, xyz.y / max, xyz.z / max);
        let oracle: palette::Srgb<f64> = palette::Srgb::from_color_unclamped(normalised);
        assert!((ours.r - oracle.red).abs() < 1e-3, "{xyz}: r {} vs {}", ours.r, oracle.red);
        assert!((ours.g - oracle.green).abs() < 1e-3, "{xyz}: g {} vs {}", ours.g, oracle.green);
        assert!((ours.b - oracle.blue).abs() < 1e-3, "{xyz}: b {} vs {}", ours.b, oracle.blue);
    }
}

#[test]
fn test_literal_mode_differs_from_corrected_mode() {
    let xyz = Tristimulus::new(20.0, 21.0, 22.0);
    let corrected = xyz.to_cielab_with(ReferenceWhite::D65, FormulaMode::Corrected);
    let literal = xyz.to_cielab_with(ReferenceWhite::D65, FormulaMode::Literal);
    assert!((corrected.l - literal.l).abs() > 1.0);

    let corrected = xyz.to_srgb_with(FormulaMode::Corrected).unwrap();
    let literal = xyz.to_srgb_with(FormulaMode::Literal).unwrap();
    assert!((corrected.g - literal.g).abs() > 0.1);
}

#[test]
fn test_locus_feeds_back_into_cct() {
    for kelvin in [2500.0, 4000.0, 6500.0, 9000.0] {
        let (x, y) = locus(kelvin).unwrap();
        let xyz = Tristimulus::new(x / y * 100.0, 100.0, (1.0 - x - y) / y * 100.0);
        let cct = xyz.cct().unwrap();
        assert!((cct - kelvin).abs() / kelvin < 0.02, "{cct} K vs {kelvin} K");
    }
}

#[test]
fn test_error_kinds_across_operations() {
    assert_eq!(locus(1666.0).unwrap_err().kind(), ErrorKind::Domain);
    assert_eq!(
        Tristimulus::new(0.0, 0.0, 0.0).to_xyy().unwrap_err().kind(),
        ErrorKind::Domain
    );
    assert_eq!(
        colourstuff_core::ColourMatrix::from_coefficients(&[1.0; 10])
            .unwrap_err()
            .kind(),
        ErrorKind::Construction
    );
    assert_eq!(
        spectral_radiance(0.0, 5600.0).unwrap_err().kind(),
        ErrorKind::Numeric
    );
    assert!(matches!(
        "D75".parse::<ReferenceWhite>(),
        Err(ColourError::UnknownReferenceWhite(_))
    ));
}

#[test]
fn test_delta_e_of_near_identical_readings_is_small() {
    let a = Tristimulus::new(20.0, 21.0, 22.0);
    let b = Tristimulus::new(20.01, 21.0, 22.0);
    let d = delta_e(&a, &b);
    assert!(d > 0.0 && d < 0.1, "{d}");
}

#[test]
fn test_values_serialize_for_reporting() {
    let lab = Tristimulus::new(95.047, 100.0, 108.883).to_cielab(ReferenceWhite::D65);
    let json = serde_json::to_value(lab).unwrap();
    assert!((json["l"].as_f64().unwrap() - 100.0).abs() < 1e-9);
}
