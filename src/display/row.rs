// src/display/row.rs

use crate::core::BAR_SCALE;
use num_complex::Complex;

/// One derived line of the state table.
///
/// Magnitude, direction and probability are computed from the amplitude
/// after its real and imaginary parts have been rounded. The bar is sized
/// from the unrounded magnitude.
#[derive(Debug, Clone, PartialEq)]
pub struct StateRow {
    /// Basis index `k`.
    pub outcome: usize,
    /// `k` in binary, zero-padded to the qubit count.
    pub binary_label: String,
    /// Amplitude with both parts rounded.
    pub amplitude: Complex<f64>,
    pub magnitude: f64,
    /// Phase in degrees within `(-180, 180]`; `None` when the magnitude is zero.
    pub direction: Option<f64>,
    /// Glyph count, `floor(|a| * 24)` on the unrounded amplitude, capped at 24.
    pub bar_len: usize,
    pub probability: f64,
}

impl StateRow {
    pub(crate) fn derive(outcome: usize, amplitude: Complex<f64>, num_qubits: usize, decimals: usize) -> Self {
        let rounded = Complex::new(round_to(amplitude.re, decimals), round_to(amplitude.im, decimals));
        let magnitude = round_to(rounded.norm(), decimals);

        let direction = (magnitude > 0.0).then(|| {
            let degrees = round_to(rounded.im.atan2(rounded.re).to_degrees(), 2);
            if degrees <= -180.0 { degrees + 360.0 } else { degrees }
        });

        Self {
            outcome,
            binary_label: format!("{:0width$b}", outcome, width = num_qubits),
            amplitude: rounded,
            magnitude,
            direction,
            bar_len: bar_len(amplitude.norm()),
            probability: round_to(rounded.norm_sqr(), decimals),
        }
    }

    /// ` 0.7071 + i0.0000`: a space stands in for a non-negative sign.
    pub fn amplitude_text(&self, decimals: usize) -> String {
        let re = self.amplitude.re;
        let im = self.amplitude.im;
        format!(
            "{}{:.d$} {} i{:.d$}",
            if re >= 0.0 { ' ' } else { '-' },
            re.abs(),
            if im >= 0.0 { '+' } else { '-' },
            im.abs(),
            d = decimals
        )
    }

    pub fn magnitude_text(&self, decimals: usize) -> String {
        format!("{:.d$}", self.magnitude, d = decimals)
    }

    /// Right-aligned degrees with a `°` suffix, or empty for zero rows.
    pub fn direction_text(&self) -> String {
        match self.direction {
            Some(degrees) => format!("{:>7.2}\u{00b0}", degrees),
            None => String::new(),
        }
    }

    pub fn bar_text(&self, symbol: char) -> String {
        std::iter::repeat_n(symbol, self.bar_len).collect()
    }

    pub fn probability_text(&self, decimals: usize) -> String {
        format!("{:.d$}", self.probability, d = decimals)
    }
}

fn bar_len(norm: f64) -> usize {
    let scaled = (norm * BAR_SCALE as f64).floor();
    if scaled.is_nan() { 0 } else { scaled.min(BAR_SCALE as f64) as usize }
}

/// Rounds half away from zero to `decimals` places; negative zero becomes `+0`.
pub(crate) fn round_to(value: f64, decimals: usize) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale + 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_1_SQRT_2;

    #[test]
    fn test_round_to_clears_negative_zero() {
        let r = round_to(-1e-9, 4);
        assert_eq!(r, 0.0);
        assert!(r.is_sign_positive());
    }

    #[test]
    fn test_bell_amplitude_row() {
        let row = StateRow::derive(3, Complex::new(FRAC_1_SQRT_2, 0.0), 2, 4);
        assert_eq!(row.binary_label, "11");
        assert_eq!(row.amplitude_text(4), " 0.7071 + i0.0000");
        assert_eq!(row.magnitude_text(4), "0.7071");
        assert_eq!(row.direction_text(), "   0.00\u{00b0}");
        assert_eq!(row.probability_text(4), "0.5000");
        assert_eq!(row.bar_len, 16);
    }

    #[test]
    fn test_zero_row_has_no_direction() {
        let row = StateRow::derive(1, Complex::new(0.0, -1e-7), 2, 4);
        assert_eq!(row.direction, None);
        assert_eq!(row.direction_text(), "");
        assert_eq!(row.amplitude_text(4), " 0.0000 + i0.0000");
    }

    #[test]
    fn test_negative_real_points_to_180() {
        // im rounds to -0.0 and must not flip the phase to -180
        let row = StateRow::derive(0, Complex::new(-0.5, -1e-9), 1, 4);
        assert_eq!(row.direction, Some(180.0));
        assert_eq!(row.direction_text(), " 180.00\u{00b0}");
        assert_eq!(row.amplitude_text(4), "-0.5000 + i0.0000");
    }

    #[test]
    fn test_negative_imaginary_direction() {
        let row = StateRow::derive(0, Complex::new(0.0, -0.5), 1, 3);
        assert_eq!(row.direction, Some(-90.0));
        assert_eq!(row.direction_text(), " -90.00\u{00b0}");
        assert_eq!(row.amplitude_text(3), " 0.000 - i0.500");
    }

    #[test]
    fn test_half_magnitude_bar() {
        let row = StateRow::derive(0, Complex::new(0.0, 0.5), 1, 4);
        assert_eq!(row.bar_len, 12);
        assert_eq!(row.bar_text('#'), "############");
    }

    #[test]
    fn test_bar_uses_unrounded_magnitude() {
        // rounds to 1 at zero decimals, bar still follows 0.7071
        let row = StateRow::derive(0, Complex::new(FRAC_1_SQRT_2, 0.0), 1, 0);
        assert_eq!(row.magnitude, 1.0);
        assert_eq!(row.bar_len, 16);

        // just below the 12-glyph boundary
        let row = StateRow::derive(0, Complex::new(0.49999, 0.0), 1, 4);
        assert_eq!(row.magnitude_text(4), "0.5000");
        assert_eq!(row.bar_len, 11);
    }

    #[test]
    fn test_bar_is_capped_at_full_scale() {
        assert_eq!(StateRow::derive(0, Complex::new(1e19, 0.0), 1, 4).bar_len, BAR_SCALE);
        assert_eq!(StateRow::derive(0, Complex::new(1.5, 0.0), 1, 4).bar_len, BAR_SCALE);
        assert_eq!(bar_len(f64::INFINITY), BAR_SCALE);
        assert_eq!(bar_len(f64::NAN), 0);
    }
}
