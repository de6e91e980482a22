//! Green's functions
mod free_surface;
mod laplace;

pub use free_surface::FreeSurfaceGreenFunction;
pub use laplace::{laplace_analytic_coefficients, LaplaceGreenFunction};

use crate::types::{BemScalar, Point};

/// Value of a Green's function and its derivatives at a pair of points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernelValue<T> {
    /// Kernel value
    pub value: T,
    /// Gradient with respect to the field point
    pub gradient: [T; 2],
    /// Hessian with respect to the field point
    pub hessian: [[T; 2]; 2],
    /// Gradient with respect to the source point
    pub source_gradient: [T; 2],
    /// `mixed[a][b]`: second derivative with respect to `field[a]` and `source[b]`
    pub mixed: [[T; 2]; 2],
}

impl KernelValue<f64> {
    /// `scale * ln |field - source|` and its derivatives.
    pub fn logarithm(field: Point, source: Point, scale: f64) -> Self {
        let d = field - source;
        let r2 = d.dot(&d);
        let r4 = r2 * r2;
        let gradient = [scale * d.x / r2, scale * d.z / r2];
        let hxx = scale * (d.z * d.z - d.x * d.x) / r4;
        let hxz = -2.0 * scale * d.x * d.z / r4;
        Self {
            value: 0.5 * scale * r2.ln(),
            gradient,
            hessian: [[hxx, hxz], [hxz, -hxx]],
            source_gradient: [-gradient[0], -gradient[1]],
            mixed: [[-hxx, -hxz], [-hxz, hxx]],
        }
    }
}

impl<T: BemScalar> KernelValue<T> {
    /// All values zero.
    pub fn zero() -> Self {
        let z = T::zero();
        Self {
            value: z,
            gradient: [z; 2],
            hessian: [[z; 2]; 2],
            source_gradient: [z; 2],
            mixed: [[z; 2]; 2],
        }
    }

    pub(crate) fn subtract_real(&mut self, other: &KernelValue<f64>) {
        self.value -= T::from_real(other.value);
        for a in 0..2 {
            self.gradient[a] -= T::from_real(other.gradient[a]);
            self.source_gradient[a] -= T::from_real(other.source_gradient[a]);
            for b in 0..2 {
                self.hessian[a][b] -= T::from_real(other.hessian[a][b]);
                self.mixed[a][b] -= T::from_real(other.mixed[a][b]);
            }
        }
    }
}
