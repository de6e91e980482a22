//! Struve functions of order 0 and 1
use super::bessel_y01;
use std::f64::consts::PI;

/// Above this argument `H - Y` is evaluated asymptotically.
const SERIES_LIMIT: f64 = 20.0;

/// Power series `sum_k (-1)^k (x/2)^(2k+nu+1) / (Gamma(k+3/2) Gamma(k+nu+3/2))`.
fn series(nu: f64, first_term: f64, x: f64) -> f64 {
    let h2 = 0.25 * x * x;
    let mut term = first_term;
    let mut sum = term;
    for k in 0..200 {
        let k = k as f64;
        term *= -h2 / ((k + 1.5) * (k + nu + 1.5));
        sum += term;
        if k > 1.0 && term.abs() < 1e-17 * sum.abs().max(1.0) {
            break;
        }
    }
    sum
}

/// Asymptotic expansion of `H_nu(x) - Y_nu(x)`, truncated at its smallest term.
fn difference_asymptotic(nu: f64, first_term: f64, x: f64) -> f64 {
    let ratio = (2.0 / x) * (2.0 / x);
    let mut term = first_term;
    let mut sum = term;
    let mut previous = term.abs();
    for k in 0..100 {
        let k = k as f64;
        term *= (k + 0.5) * (nu - 0.5 - k) * ratio;
        if term.abs() >= previous {
            break;
        }
        previous = term.abs();
        sum += term;
        if term.abs() < 1e-17 {
            break;
        }
    }
    sum
}

/// Struve functions `(H0(x), H1(x))` for `x > 0`.
pub fn struve_h01(x: f64) -> (f64, f64) {
    if x <= SERIES_LIMIT {
        let h = 0.5 * x;
        // Gamma(3/2)^2 = pi/4 and Gamma(3/2) Gamma(5/2) = 3 pi/8
        (
            series(0.0, h * 4.0 / PI, x),
            series(1.0, h * h * 8.0 / (3.0 * PI), x),
        )
    } else {
        let (y0, y1) = bessel_y01(x);
        (
            y0 + difference_asymptotic(0.0, 2.0 / (PI * x), x),
            y1 + difference_asymptotic(1.0, 2.0 / PI, x),
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_struve_small_argument() {
        let (h0, h1) = struve_h01(1.0);
        assert_abs_diff_eq!(h0, 0.5686566270482879, epsilon = 1e-14);
        assert_abs_diff_eq!(h1, 0.1984573362019444, epsilon = 1e-14);
    }

    #[test]
    fn test_struve_moderate_argument() {
        let (h0, _) = struve_h01(5.0);
        assert_abs_diff_eq!(h0, -0.18521681577668478, epsilon = 1e-12);
    }

    #[test]
    fn test_series_meets_asymptotic() {
        let x = SERIES_LIMIT;
        let (y0, y1) = bessel_y01(x);
        let (h0, h1) = struve_h01(x);
        assert_abs_diff_eq!(
            h0 - y0,
            difference_asymptotic(0.0, 2.0 / (PI * x), x),
            epsilon = 1e-8
        );
        assert_abs_diff_eq!(
            h1 - y1,
            difference_asymptotic(1.0, 2.0 / PI, x),
            epsilon = 1e-8
        );
    }
}
