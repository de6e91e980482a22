//! Exponential integrals in exponentially scaled form
use super::EULER_GAMMA;
use crate::types::c64;
use std::f64::consts::PI;

/// Above this argument `exp(-x) Ei(x)` is summed asymptotically.
const EI_ASYMPTOTIC_LIMIT: f64 = 40.0;

/// `exp(-x) Ei(x)` for `x > 0`.
///
/// Small and moderate arguments use the convergent power series, large
/// arguments the 24-term asymptotic series. The two paths are never mixed.
pub fn exp_ei(x: f64) -> f64 {
    if x > EI_ASYMPTOTIC_LIMIT {
        let mut term = 1.0;
        let mut sum = 1.0;
        for k in 1..24 {
            term *= k as f64 / x;
            sum += term;
        }
        sum / x
    } else {
        let mut t = 1.0;
        let mut sum = 0.0;
        for k in 1..500 {
            let k = k as f64;
            t *= x / k;
            sum += t / k;
            if t / k < 1e-17 * sum {
                break;
            }
        }
        (-x).exp() * (EULER_GAMMA + x.ln() + sum)
    }
}

/// `exp(w) E1(w)` for complex `w != 0`.
///
/// The scaled form stays finite where `E1` alone would overflow or underflow.
/// On the negative real axis the branch with `Im w = +0` is returned.
pub fn exp_e1(w: c64) -> c64 {
    let modulus = w.norm();
    let use_series =
        modulus <= 5.0 || (w.re < -2.0 * w.im.abs() && modulus < EI_ASYMPTOTIC_LIMIT);
    if use_series {
        let mut term = c64::new(1.0, 0.0);
        let mut sum = term;
        for k in 1..=500 {
            let k = k as f64;
            term = -term * k * w / ((k + 1.0) * (k + 1.0));
            sum += term;
            if term.norm() <= sum.norm() * 1e-15 {
                break;
            }
        }
        let e1 = -EULER_GAMMA - w.ln() + w * sum;
        w.exp() * e1
    } else {
        // Continued fraction, evaluated as a series of convergent differences.
        let mut d = 1.0 / w;
        let mut delta = d;
        let mut value = delta;
        for k in 1..=500 {
            let kf = k as f64;
            d = 1.0 / (d * kf + 1.0);
            delta *= d - 1.0;
            value += delta;
            d = 1.0 / (d * kf + w);
            delta *= w * d - 1.0;
            value += delta;
            if k > 20 && delta.norm() <= value.norm() * 1e-15 {
                break;
            }
        }
        if w.re <= 0.0 && w.im == 0.0 {
            value -= c64::new(0.0, PI) * w.exp();
        }
        value
    }
}
