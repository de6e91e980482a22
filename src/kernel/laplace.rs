//! Laplace kernel
use super::KernelValue;
use crate::boundary::Element;
use crate::traits::GreenFunction;
use crate::types::Point;
use std::f64::consts::PI;

/// The free-space Laplace Green's function `G = ln(r) / (2 pi)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LaplaceGreenFunction;

impl LaplaceGreenFunction {
    /// Create the kernel
    pub fn new() -> Self {
        Self
    }
}

impl GreenFunction for LaplaceGreenFunction {
    type T = f64;

    fn eval(&self, field: Point, source: Point) -> KernelValue<f64> {
        KernelValue::logarithm(field, source, 0.5 / PI)
    }

    fn log_scale(&self) -> f64 {
        0.5 / PI
    }

    fn eval_regular(&self, _field: Point, _source: Point) -> KernelValue<f64> {
        KernelValue::zero()
    }
}

fn x_log_r(x: f64, r: f64) -> f64 {
    if r == 0.0 {
        0.0
    } else {
        x * r.ln()
    }
}

/// Exact single- and double-layer integrals of the Laplace kernel over
/// `element` seen from `point`.
///
/// Returns `(g, q)` with the same conventions as the quadrature-based
/// influence coefficients. On the element itself `q` is the principal value
/// `0` and `g` tends to `(a / pi)(ln a - 1)`, `a` being the half length.
pub fn laplace_analytic_coefficients(element: &Element, point: Point) -> (f64, f64) {
    let a = element.half_length();
    let [x, y] = element.local_coordinates(point);
    let r1 = (x - a).hypot(y);
    let r2 = (x + a).hypot(y);
    let t1 = y.atan2(x - a);
    let t2 = y.atan2(x + a);
    let on_line = y.abs() <= 1e-14 * a;

    let angle = if on_line { 0.0 } else { t1 - t2 };
    let g = (y * angle - x_log_r(x - a, r1) + x_log_r(x + a, r2) - 2.0 * a) / (2.0 * PI);
    let q = -angle / (2.0 * PI);
    (g, q)
}
