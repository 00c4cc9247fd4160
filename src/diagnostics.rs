//! Human-readable dumps of lattice matrices.

use std::fmt::Write;

use crate::error::{SimError, SimResult};
use crate::simulation::Matrix;

/// Rounding factors addressed by selector 0..=4
const PRECISION_FACTORS: [f64; 5] = [1.0, 10.0, 100.0, 1000.0, 10000.0];

/// Round every entry to the precision named by `selector`
/// (0 = units, 1 = tenths, ... 4 = ten-thousandths).
///
/// Halves round towards +inf, so `-0.125` at hundredths becomes `-0.12`.
pub fn quantize(matrix: &Matrix, selector: usize) -> SimResult<Matrix> {
    let factor = *PRECISION_FACTORS
        .get(selector)
        .ok_or(SimError::InvalidPrecisionSelector(selector))?;
    Ok(matrix.map(|value| round_half_up(value * factor) / factor))
}

/// Nearest integer, halves towards +inf. Negative inputs that round to zero
/// keep their sign.
fn round_half_up(x: f64) -> f64 {
    let rounded = (x + 0.5).floor();
    if rounded == 0.0 && x.is_sign_negative() {
        -0.0
    } else {
        rounded
    }
}

/// `name:` header followed by one tab-separated line per row, two decimals each
pub fn format_matrix(matrix: &Matrix, name: &str) -> String {
    let mut out = format!("{}:\n", name);
    for i in 0..matrix.rows() {
        for value in matrix.row(i) {
            // Negative zero prints as plain zero
            let value = if *value == 0.0 { 0.0 } else { *value };
            // Writing into a String cannot fail
            let _ = write!(out, "{:.2}\t", value);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantize_each_selector() {
        let m = Matrix::from_rows(&[vec![1.23456, -0.98762]]).unwrap();
        let expected = [
            [1.0, -1.0],
            [1.2, -1.0],
            [1.23, -0.99],
            [1.235, -0.988],
            [1.2346, -0.9876],
        ];
        for (selector, row) in expected.iter().enumerate() {
            let q = quantize(&m, selector).unwrap();
            for (got, want) in q.row(0).iter().zip(row) {
                assert!(
                    (got - want).abs() < 1e-12,
                    "selector {}: got {}, want {}",
                    selector,
                    got,
                    want
                );
            }
        }
    }

    #[test]
    fn test_quantize_rounds_halves_up() {
        let m = Matrix::from_rows(&[vec![-0.125, -2.5, 0.125, 2.5]]).unwrap();

        let hundredths = quantize(&m, 2).unwrap();
        assert_eq!(hundredths.row(0)[0], -0.12);
        assert_eq!(hundredths.row(0)[2], 0.13);

        let units = quantize(&m, 0).unwrap();
        assert_eq!(units.row(0), &[0.0, -2.0, 0.0, 3.0]);
    }

    #[test]
    fn test_quantize_keeps_negative_zero() {
        let m = Matrix::from_rows(&[vec![-0.3, -0.0, 0.0]]).unwrap();
        let q = quantize(&m, 0).unwrap();
        assert!(q.row(0)[0] == 0.0 && q.row(0)[0].is_sign_negative());
        assert!(q.row(0)[1].is_sign_negative());
        assert!(q.row(0)[2].is_sign_positive());
        assert_eq!(format_matrix(&q, "z"), "z:\n0.00\t0.00\t0.00\t\n");
    }

    #[test]
    fn test_unsupported_selector_rejected() {
        let m = Matrix::zeros(2, 2);
        assert_eq!(
            quantize(&m, 5).unwrap_err(),
            SimError::InvalidPrecisionSelector(5)
        );
    }

    #[test]
    fn test_format_matrix() {
        let m = Matrix::from_rows(&[vec![1.0, -0.5], vec![0.25, 3.0]]).unwrap();
        assert_eq!(
            format_matrix(&m, "state"),
            "state:\n1.00\t-0.50\t\n0.25\t3.00\t\n"
        );
    }
}
