//! Non-linear transfer functions used by the derived colour views.
//!
//! Both curves come in two flavours selected by [`FormulaMode`]:
//! the published form, and the historical form whose exponent was applied
//! as a division.

use crate::config::FormulaMode;

/// Trait for a one-way encoding of a linear component.
pub trait TransferFunction: Send + Sync {
    /// Convert from linear to the encoded domain.
    fn to_encoded(&self, linear: f64) -> f64;
}

// ---------------------------------------------------------------------------
// CIELAB companding
// ---------------------------------------------------------------------------

/// CIELAB transfer function `f(t)`.
///
/// ```text
/// t >  (6/29)^3 → t^(1/3)                 (Corrected)
///                 t / 3                   (Literal)
/// t <= (6/29)^3 → (1/3)(29/6)^2 t + 4/29
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LabTransfer(pub FormulaMode);

impl LabTransfer {
    /// (6/29)^3
    pub const EPSILON: f64 = 216.0 / 24389.0;
    /// (1/3)(29/6)^2
    const SLOPE: f64 = 841.0 / 108.0;
    const OFFSET: f64 = 4.0 / 29.0;
}

impl TransferFunction for LabTransfer {
    fn to_encoded(&self, t: f64) -> f64 {
        if t > Self::EPSILON {
            match self.0 {
                FormulaMode::Corrected => t.cbrt(),
                FormulaMode::Literal => t / 3.0,
            }
        } else {
            Self::SLOPE * t + Self::OFFSET
        }
    }
}

// ---------------------------------------------------------------------------
// sRGB (IEC 61966-2-1)
// ---------------------------------------------------------------------------

/// sRGB encoding.
///
/// ```text
/// Corrected: L <= 0.0031308 → L × 12.92
///            L >  0.0031308 → 1.055 × L^(1/2.4) − 0.055
///
/// Literal:   L <= 0.0031308 → L
///            L >  0.0031308 → 1.055 × L / 2.4 − 0.055
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SrgbTransfer(pub FormulaMode);

impl SrgbTransfer {
    pub const THRESHOLD: f64 = 0.0031308;
}

impl TransferFunction for SrgbTransfer {
    fn to_encoded(&self, linear: f64) -> f64 {
        match (self.0, linear <= Self::THRESHOLD) {
            (FormulaMode::Corrected, true) => linear * 12.92,
            (FormulaMode::Corrected, false) => 1.055 * linear.powf(1.0 / 2.4) - 0.055,
            (FormulaMode::Literal, true) => linear,
            (FormulaMode::Literal, false) => 1.055 * linear / 2.4 - 0.055,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_lab_corrected_takes_cube_root() {
        let tf = LabTransfer(FormulaMode::Corrected);
        assert!((tf.to_encoded(1.0) - 1.0).abs() < EPSILON);
        assert!((tf.to_encoded(0.125) - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_lab_literal_divides_by_three() {
        let tf = LabTransfer(FormulaMode::Literal);
        assert!((tf.to_encoded(0.9) - 0.3).abs() < EPSILON);
    }

    #[test]
    fn test_lab_linear_branch_is_shared() {
        let t = 0.001;
        let corrected = LabTransfer(FormulaMode::Corrected).to_encoded(t);
        let literal = LabTransfer(FormulaMode::Literal).to_encoded(t);
        assert_eq!(corrected, literal);
        assert!((corrected - (841.0 / 108.0 * t + 4.0 / 29.0)).abs() < EPSILON);
    }

    #[test]
    fn test_lab_corrected_is_continuous_at_threshold() {
        let tf = LabTransfer(FormulaMode::Corrected);
        let below = tf.to_encoded(LabTransfer::EPSILON);
        let above = tf.to_encoded(LabTransfer::EPSILON + 1e-12);
        assert!((below - above).abs() < 1e-6, "{below} vs {above}");
        assert!((below - 6.0 / 29.0).abs() < 1e-9);
    }

    #[test]
    fn test_srgb_corrected_known_values() {
        let tf = SrgbTransfer(FormulaMode::Corrected);
        assert!((tf.to_encoded(0.0)).abs() < EPSILON);
        assert!((tf.to_encoded(1.0) - 1.0).abs() < EPSILON);
        // Linear 0.214 is mid-grey in sRGB.
        assert!((tf.to_encoded(0.214041) - 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_srgb_literal_reproduces_division() {
        let tf = SrgbTransfer(FormulaMode::Literal);
        assert_eq!(tf.to_encoded(0.002), 0.002);
        assert!((tf.to_encoded(1.0) - (1.055 / 2.4 - 0.055)).abs() < EPSILON);
    }

    #[test]
    fn test_srgb_threshold_belongs_to_linear_segment() {
        let tf = SrgbTransfer(FormulaMode::Corrected);
        let at = tf.to_encoded(SrgbTransfer::THRESHOLD);
        assert!((at - SrgbTransfer::THRESHOLD * 12.92).abs() < EPSILON);
    }
}
