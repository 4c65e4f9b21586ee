use num_complex::Complex64;
use std::f64::consts::SQRT_2;

use super::daubechies_table::daubechies_table;
use crate::constants::{
    MAX_GENERATOR_ORDER, MAX_ROOT_ITERATIONS, MAX_TABULATED_DAUBECHIES_ORDER,
    ROOT_ACCEPT_TOLERANCE, ROOT_TOLERANCE,
};
use crate::error::{FilterError, Result};

/// Standard Daubechies scaling filter with `order` vanishing moments
///
/// Orders up to 38 come from the compiled-in tables; orders up to
/// `MAX_GENERATOR_ORDER` are generated by [`generate_daubechies`].
///
/// Returns `2 * order` coefficients in ascending index order starting at 0
/// (`h_0 = 0.4829...` for order 2).
///
/// # Errors
/// Returns `FilterError::InvalidOrder` for order 0 or an order above
/// `MAX_GENERATOR_ORDER`, and `FilterError::FilterDesign` if generation fails
pub fn daubechies_scaling_filter(order: usize) -> Result<Vec<f64>> {
    if let Some(taps) = daubechies_table(order) {
        return Ok(taps.to_vec());
    }
    generate_daubechies(order)
}

/// Daubechies scaling filter by spectral factorization
///
/// The roots of `Q(y) = sum_{k<p} C(p-1+k, k) y^k` are mapped through
/// `y = (2 - z - 1/z) / 4` onto the root inside the unit circle, combined
/// with the `(1 + z)^p` factor, and the result is scaled so the coefficients
/// sum to `sqrt(2)`.
///
/// # Errors
/// Returns `FilterError::InvalidOrder` unless `1 <= order <= MAX_GENERATOR_ORDER`,
/// checked before anything is allocated, and `FilterError::FilterDesign` if the
/// root iteration diverges or does not converge
pub fn generate_daubechies(order: usize) -> Result<Vec<f64>> {
    if order == 0 || order > MAX_GENERATOR_ORDER {
        return Err(FilterError::InvalidOrder {
            order: i32::try_from(order).unwrap_or(i32::MAX),
            reason: format!(
                "Daubechies filters are available for orders 1..={}",
                MAX_GENERATOR_ORDER
            ),
        });
    }
    if order > MAX_TABULATED_DAUBECHIES_ORDER {
        log::warn!(
            "Generating Daubechies filter of order {}; generated filters are accurate to about 1e-9",
            order
        );
    }

    // Coefficients of the polynomial in z, lowest power first.
    let mut poly = vec![Complex64::new(1.0, 0.0)];
    for _ in 0..order {
        multiply_by_linear(&mut poly, Complex64::new(-1.0, 0.0));
    }

    for y in polynomial_roots(&daubechies_polynomial(order))? {
        let b = 1.0 - 2.0 * y;
        let s = (b * b - 1.0).sqrt();
        let (z1, z2) = (b + s, b - s);
        let inner = if z1.norm() < z2.norm() { z1 } else { z2 };
        multiply_by_linear(&mut poly, inner);
    }

    // Highest power first gives the classic Daubechies ordering.
    let taps: Vec<f64> = poly.iter().rev().map(|c| c.re).collect();
    let sum: f64 = taps.iter().sum();
    if !sum.is_finite() || sum.abs() < f64::EPSILON {
        return Err(FilterError::FilterDesign(format!(
            "degenerate Daubechies filter of order {}",
            order
        )));
    }
    let scale = SQRT_2 / sum;
    let taps: Vec<f64> = taps.into_iter().map(|h| h * scale).collect();
    if taps.iter().any(|h| !h.is_finite()) {
        return Err(FilterError::FilterDesign(format!(
            "non-finite coefficient in Daubechies filter of order {}",
            order
        )));
    }

    log::trace!("Generated Daubechies filter of order {}", order);
    Ok(taps)
}

/// `Q(y) = sum_{k<p} C(p-1+k, k) y^k`, lowest power first
fn daubechies_polynomial(order: usize) -> Vec<f64> {
    let mut coeffs = Vec::with_capacity(order);
    let mut binom = 1.0f64;
    coeffs.push(binom);
    for k in 1..order {
        binom *= (order - 1 + k) as f64 / k as f64;
        coeffs.push(binom);
    }
    coeffs
}

/// Multiply `poly` (lowest power first) by `(z - root)` in place
fn multiply_by_linear(poly: &mut Vec<Complex64>, root: Complex64) {
    poly.push(Complex64::new(0.0, 0.0));
    for i in (0..poly.len()).rev() {
        let lower = if i > 0 { poly[i - 1] } else { Complex64::new(0.0, 0.0) };
        poly[i] = lower - root * poly[i];
    }
}

/// All complex roots of a real polynomial (lowest power first) by
/// Durand-Kerner iteration
fn polynomial_roots(coeffs: &[f64]) -> Result<Vec<Complex64>> {
    let degree = coeffs.len().saturating_sub(1);
    if degree == 0 {
        return Ok(Vec::new());
    }

    let lead = coeffs[degree];
    let monic: Vec<f64> = coeffs.iter().map(|c| c / lead).collect();

    let seed = Complex64::new(0.4, 0.9);
    let mut roots: Vec<Complex64> = (0..degree).map(|i| seed.powu(i as u32)).collect();

    let mut step = f64::INFINITY;
    for _ in 0..MAX_ROOT_ITERATIONS {
        step = 0.0;
        for i in 0..degree {
            let z = roots[i];
            let value = monic
                .iter()
                .rev()
                .fold(Complex64::new(0.0, 0.0), |acc, &c| acc * z + c);
            let denom = roots
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .fold(Complex64::new(1.0, 0.0), |acc, (_, &r)| acc * (z - r));
            let delta = value / denom;
            let next = z - delta;
            if !delta.is_finite() || !next.is_finite() {
                return Err(FilterError::FilterDesign(format!(
                    "root iteration diverged for degree {}",
                    degree
                )));
            }
            roots[i] = next;
            step = step.max(delta.norm() / next.norm().max(1.0));
        }
        if step <= ROOT_TOLERANCE {
            return Ok(roots);
        }
    }

    if step <= ROOT_ACCEPT_TOLERANCE {
        log::debug!(
            "Root iteration stalled at relative step {:.3e} for degree {}",
            step,
            degree
        );
        return Ok(roots);
    }

    Err(FilterError::FilterDesign(format!(
        "root iteration did not converge for degree {} (last step {:.3e})",
        degree, step
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_haar() {
        let h = daubechies_scaling_filter(1).unwrap();
        assert_eq!(h.len(), 2);
        assert_abs_diff_eq!(h[0], std::f64::consts::FRAC_1_SQRT_2, epsilon = 1e-15);
        assert_abs_diff_eq!(h[1], std::f64::consts::FRAC_1_SQRT_2, epsilon = 1e-15);
    }

    #[test]
    fn test_order_two_closed_form() {
        let s3 = 3.0f64.sqrt();
        let d = 4.0 * SQRT_2;
        let expected = [(1.0 + s3) / d, (3.0 + s3) / d, (3.0 - s3) / d, (1.0 - s3) / d];

        let h = daubechies_scaling_filter(2).unwrap();
        for (got, want) in h.iter().zip(expected.iter()) {
            assert_abs_diff_eq!(got, want, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_order_three_reference_values() {
        let expected = [
            0.3326705529500826,
            0.8068915093110925,
            0.4598775021184915,
            -0.1350110200102545,
            -0.0854412738820267,
            0.0352262918857095,
        ];
        let h = daubechies_scaling_filter(3).unwrap();
        for (got, want) in h.iter().zip(expected.iter()) {
            assert_abs_diff_eq!(got, want, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_orthonormality_and_moments() {
        for order in 1..=12 {
            let h = daubechies_scaling_filter(order).unwrap();
            let n = h.len();
            assert_eq!(n, 2 * order);

            let sum: f64 = h.iter().sum();
            assert_abs_diff_eq!(sum, SQRT_2, epsilon = 1e-10);

            let energy: f64 = h.iter().map(|x| x * x).sum();
            assert_abs_diff_eq!(energy, 1.0, epsilon = 1e-10);

            for shift in 1..order {
                let dot: f64 = (0..n - 2 * shift).map(|k| h[k] * h[k + 2 * shift]).sum();
                assert_abs_diff_eq!(dot, 0.0, epsilon = 1e-10);
            }

            // Wavelet filter g_k = (-1)^k h_{n-1-k} annihilates polynomials
            // up to degree order - 1.
            for degree in 0..order as i32 {
                let moment: f64 = (0..n)
                    .map(|k| {
                        let sign = if k % 2 == 0 { 1.0 } else { -1.0 };
                        sign * h[n - 1 - k] * (k as f64).powi(degree)
                    })
                    .sum();
                let scale = (n as f64).powi(degree);
                assert_abs_diff_eq!(moment / scale, 0.0, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_order_zero_rejected() {
        assert!(matches!(
            daubechies_scaling_filter(0),
            Err(FilterError::InvalidOrder { order: 0, .. })
        ));
    }

    #[test]
    fn test_generator_matches_tables() {
        for order in 1..=MAX_TABULATED_DAUBECHIES_ORDER {
            let table = daubechies_table(order).unwrap();
            let generated = generate_daubechies(order).unwrap();
            let epsilon = if order <= 20 { 1e-11 } else { 1e-6 };
            for (got, want) in generated.iter().zip(table.iter()) {
                assert_abs_diff_eq!(got, want, epsilon = epsilon);
            }
        }
    }

    #[test]
    fn test_generator_working_range() {
        for order in MAX_TABULATED_DAUBECHIES_ORDER + 1..=MAX_GENERATOR_ORDER {
            let h = daubechies_scaling_filter(order).unwrap();
            let n = h.len();
            assert_eq!(n, 2 * order);
            assert!(h.iter().all(|x| x.is_finite()));
            assert_abs_diff_eq!(h.iter().sum::<f64>(), SQRT_2, epsilon = 1e-10);
            for shift in 0..order {
                let dot: f64 = (0..n - 2 * shift).map(|k| h[k] * h[k + 2 * shift]).sum();
                let expected = if shift == 0 { 1.0 } else { 0.0 };
                assert_abs_diff_eq!(dot, expected, epsilon = 1e-7);
            }
        }
    }

    #[test]
    fn test_orders_above_generator_range_rejected() {
        for order in [MAX_GENERATOR_ORDER + 1, 200, i32::MAX as usize, usize::MAX] {
            assert!(matches!(
                daubechies_scaling_filter(order),
                Err(FilterError::InvalidOrder { .. })
            ));
        }
        assert!(matches!(
            daubechies_scaling_filter(usize::MAX),
            Err(FilterError::InvalidOrder { order: i32::MAX, .. })
        ));
    }

    #[test]
    fn test_non_finite_roots_fail() {
        assert!(matches!(
            polynomial_roots(&[f64::NAN, 1.0, 1.0]),
            Err(FilterError::FilterDesign(_))
        ));
        assert!(matches!(
            polynomial_roots(&[1.0, 1.0, 0.0]),
            Err(FilterError::FilterDesign(_))
        ));
    }

    #[test]
    fn test_daubechies_polynomial() {
        assert_eq!(daubechies_polynomial(1), vec![1.0]);
        assert_eq!(daubechies_polynomial(3), vec![1.0, 3.0, 6.0]);
        assert_eq!(daubechies_polynomial(4), vec![1.0, 4.0, 10.0, 20.0]);
    }

    #[test]
    fn test_polynomial_roots_quadratic() {
        // z^2 - 3z + 2 = (z - 1)(z - 2)
        let mut roots = polynomial_roots(&[2.0, -3.0, 1.0]).unwrap();
        roots.sort_by(|a, b| a.re.total_cmp(&b.re));
        assert_abs_diff_eq!(roots[0].re, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(roots[1].re, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(roots[0].im, 0.0, epsilon = 1e-12);
    }
}
