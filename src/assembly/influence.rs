//! Influence coefficients of a single element
use crate::boundary::Element;
use crate::quadrature::NumericalQuadratureDefinition;
use crate::traits::GreenFunction;
use crate::types::{BemScalar, Point};
use itertools::izip;
use nalgebra::ComplexField;

/// Integrals of a kernel over one element, seen from one point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InfluenceCoefficients<T> {
    /// Single-layer coefficient `int G ds`
    pub g: T,
    /// Double-layer coefficient `int dG/dn ds`
    pub q: T,
    /// Gradient of `g` with respect to the point
    pub grad_g: [T; 2],
    /// Gradient of `q` with respect to the point
    pub grad_q: [T; 2],
}

impl<T: BemScalar> InfluenceCoefficients<T> {
    fn zero() -> Self {
        Self {
            g: T::zero(),
            q: T::zero(),
            grad_g: [T::zero(); 2],
            grad_q: [T::zero(); 2],
        }
    }

    fn scale(&mut self, factor: f64) {
        self.g = self.g.scale(factor);
        self.q = self.q.scale(factor);
        for a in 0..2 {
            self.grad_g[a] = self.grad_g[a].scale(factor);
            self.grad_q[a] = self.grad_q[a].scale(factor);
        }
    }
}

/// Integrate `eval` over `element` and collect the four coefficients.
///
/// The kernel is evaluated with the quadrature point as field point and the
/// collocation point as source point. Kernels are symmetric, so the normal
/// derivative at the element is the field gradient and the gradient at the
/// collocation point is the source gradient.
fn integrate<T: BemScalar>(
    element: &Element,
    rule: &NumericalQuadratureDefinition,
    eval: impl Fn(Point) -> crate::kernel::KernelValue<T>,
) -> InfluenceCoefficients<T> {
    let a = element.half_length();
    let n = element.normal();
    let mut result = InfluenceCoefficients::zero();
    for (p, w) in izip!(&rule.points, &rule.weights) {
        let v = eval(element.global_point(a * p));
        result.g += v.value.scale(*w);
        result.q += (v.gradient[0].scale(n.x) + v.gradient[1].scale(n.z)).scale(*w);
        for b in 0..2 {
            result.grad_g[b] += v.source_gradient[b].scale(*w);
            result.grad_q[b] += (v.mixed[0][b].scale(n.x) + v.mixed[1][b].scale(n.z)).scale(*w);
        }
    }
    result.scale(a);
    result
}

/// Influence coefficients of `element` at a point off the element.
pub fn influence_coefficients<K: GreenFunction>(
    kernel: &K,
    element: &Element,
    point: Point,
    rule: &NumericalQuadratureDefinition,
) -> InfluenceCoefficients<K::T> {
    integrate(element, rule, |y| kernel.eval(y, point))
}

/// Influence coefficients of `element` at its own midpoint.
///
/// The regular part of the kernel is integrated numerically and the
/// logarithmic part `c ln r` exactly: `c L (ln(L/2) - 1)` for `g`, zero for
/// `q` on a straight element. The gradients only contain the regular part.
pub fn self_influence_coefficients<K: GreenFunction>(
    kernel: &K,
    element: &Element,
    rule: &NumericalQuadratureDefinition,
) -> InfluenceCoefficients<K::T> {
    let midpoint = element.midpoint();
    let mut result = integrate(element, rule, |y| kernel.eval_regular(y, midpoint));
    let length = element.length();
    result.g += K::T::from_real(kernel.log_scale() * length * ((0.5 * length).ln() - 1.0));
    result
}
