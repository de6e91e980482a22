//! Trait definitions
use crate::kernel::KernelValue;
use crate::types::{BemScalar, Point};

/// A two-dimensional Green's function with a logarithmic singularity.
///
/// Near coincident points every kernel behaves like `c ln r`, where `c` is
/// [GreenFunction::log_scale]. The jump of the double-layer potential and the
/// representation formula both scale with `c`.
pub trait GreenFunction: Sync {
    /// Scalar type of kernel values.
    type T: BemScalar;

    /// Evaluate the kernel and its derivatives.
    ///
    /// `gradient` and `hessian` are derivatives with respect to `field`,
    /// `source_gradient` is the derivative with respect to `source` and
    /// `mixed[a][b]` is the derivative with respect to `field[a]` and
    /// `source[b]`.
    fn eval(&self, field: Point, source: Point) -> KernelValue<Self::T>;

    /// Coefficient of the `ln r` singularity.
    fn log_scale(&self) -> f64;

    /// Evaluate the kernel with `c ln r` and its derivatives removed.
    fn eval_regular(&self, field: Point, source: Point) -> KernelValue<Self::T> {
        let mut value = self.eval(field, source);
        let singular = KernelValue::<f64>::logarithm(field, source, self.log_scale());
        value.subtract_real(&singular);
        value
    }
}
