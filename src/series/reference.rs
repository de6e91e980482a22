//! Reference values by direct quadrature
use super::SeriesValue;
use crate::quadrature::adaptive_gauss_kronrod;
use crate::special::{bessel_y01, struve_h01};
use std::f64::consts::PI;

const TOLERANCE: f64 = 1e-13;

/// Evaluate the series function from its integral definition.
///
/// Far slower than [super::series_expansion]; meant for validating the
/// expansions. Requires `x > 0`.
pub fn reference_value(x: f64, y: f64) -> SeriesValue {
    let x2 = x * x;
    let ey = (-y).exp();
    let (h0, h1) = struve_h01(x);
    let (y0, y1) = bessel_y01(x);
    let bessel_y2 = 2.0 / x * y1 - y0;
    let struve_h2 = 2.0 / x * h1 - h0 + 2.0 * x / (3.0 * PI);
    let phy0 = PI * ey * (h0 + y0);
    let phy1 = PI * ey * (h1 + y1);
    let phy2 = PI * ey * (struve_h2 + bessel_y2);

    let integral =
        adaptive_gauss_kronrod(|t| (t - y).exp() / (x2 + t * t).sqrt(), 0.0, y, TOLERANCE);
    let f = -2.0 * integral - phy0;
    let fx = 2.0
        * x
        * adaptive_gauss_kronrod(|t| (t - y).exp() * (x2 + t * t).powf(-1.5), 0.0, y, TOLERANCE)
        - 2.0 * ey
        + phy1;
    let fxx = 2.0
        * adaptive_gauss_kronrod(
            |t| (t - y).exp() * (x2 + t * t).powf(-2.5) * (t * t - 2.0 * x2),
            0.0,
            y,
            TOLERANCE,
        )
        + ey * x / 3.0
        + 0.5 * (phy0 - phy2);
    SeriesValue { f, fx, fxx }
}
