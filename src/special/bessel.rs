//! Bessel functions of integer order 0 and 1
use super::EULER_GAMMA;
use std::f64::consts::PI;

/// Above this argument the Hankel asymptotic expansion is used.
const SERIES_LIMIT: f64 = 12.0;
const MAX_TERMS: usize = 300;

fn j01_series(x: f64) -> (f64, f64) {
    let q = 0.25 * x * x;
    let mut t0 = 1.0;
    let mut t1 = 0.5 * x;
    let mut j0 = t0;
    let mut j1 = t1;
    for k in 1..MAX_TERMS {
        let k = k as f64;
        t0 *= -q / (k * k);
        t1 *= -q / (k * (k + 1.0));
        j0 += t0;
        j1 += t1;
        if k > 3.0 && t0.abs() < 1e-17 && t1.abs() < 1e-17 {
            break;
        }
    }
    (j0, j1)
}

fn y01_series(x: f64) -> (f64, f64) {
    let q = 0.25 * x * x;
    let (j0, j1) = j01_series(x);
    let l = (0.5 * x).ln() + EULER_GAMMA;

    // Partial harmonic sums H_k multiply the terms of both series.
    let mut t0 = 1.0;
    let mut h = 0.0;
    let mut s0 = 0.0;
    let mut t1 = 0.5 * x;
    let mut s1 = t1;
    for k in 1..MAX_TERMS {
        let kf = k as f64;
        t0 *= -q / (kf * kf);
        h += 1.0 / kf;
        s0 -= t0 * h;
        t1 *= -q / (kf * (kf + 1.0));
        let h1 = h + 1.0 / (kf + 1.0);
        s1 += t1 * (h + h1);
        if k > 3 && (t0 * h).abs() < 1e-17 && (t1 * h1).abs() < 1e-17 {
            break;
        }
    }
    let y0 = 2.0 / PI * (l * j0 + s0);
    let y1 = 2.0 / PI * l * j1 - 2.0 / (PI * x) - s1 / PI;
    (y0, y1)
}

/// Hankel expansion of `(J_nu(x), Y_nu(x))` for large `x`.
fn hankel_asymptotic(nu: f64, x: f64) -> (f64, f64) {
    let mu = 4.0 * nu * nu;
    let mut p = 1.0;
    let mut q = 0.0;
    let mut term = 1.0;
    let mut previous = f64::MAX;
    for k in 1..60 {
        let odd = (2 * k - 1) as f64;
        term *= (mu - odd * odd) / (k as f64 * 8.0 * x);
        if term.abs() > previous {
            break;
        }
        previous = term.abs();
        let signed = if (k / 2) % 2 == 0 { term } else { -term };
        if k % 2 == 1 {
            q += signed;
        } else {
            p += signed;
        }
        if term.abs() < 1e-17 {
            break;
        }
    }
    let chi = x - (0.5 * nu + 0.25) * PI;
    let a = (2.0 / (PI * x)).sqrt();
    (
        a * (p * chi.cos() - q * chi.sin()),
        a * (p * chi.sin() + q * chi.cos()),
    )
}

/// Bessel functions of the second kind `(Y0(x), Y1(x))` for `x > 0`.
pub fn bessel_y01(x: f64) -> (f64, f64) {
    if x <= SERIES_LIMIT {
        y01_series(x)
    } else {
        (hankel_asymptotic(0.0, x).1, hankel_asymptotic(1.0, x).1)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_j01() {
        let (j0, j1) = j01_series(1.0);
        assert_abs_diff_eq!(j0, 0.7651976865579666, epsilon = 1e-15);
        assert_abs_diff_eq!(j1, 0.4400505857449335, epsilon = 1e-15);
    }

    #[test]
    fn test_y01() {
        let (y0, y1) = bessel_y01(1.0);
        assert_abs_diff_eq!(y0, 0.08825696421567696, epsilon = 1e-14);
        assert_abs_diff_eq!(y1, -0.7812128213002887, epsilon = 1e-14);

        let (y0, y1) = bessel_y01(10.0);
        assert_abs_diff_eq!(y0, 0.05567116728359939, epsilon = 1e-12);
        assert_abs_diff_eq!(y1, 0.24901542420695388, epsilon = 1e-12);
    }

    #[test]
    fn test_series_meets_asymptotic() {
        let (s0, s1) = y01_series(SERIES_LIMIT);
        let a0 = hankel_asymptotic(0.0, SERIES_LIMIT).1;
        let a1 = hankel_asymptotic(1.0, SERIES_LIMIT).1;
        assert_abs_diff_eq!(s0, a0, epsilon = 1e-10);
        assert_abs_diff_eq!(s1, a1, epsilon = 1e-10);
    }
}
