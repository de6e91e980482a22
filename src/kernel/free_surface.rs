//! Infinite-depth free-surface kernel
use super::KernelValue;
use crate::special::exp_e1;
use crate::traits::GreenFunction;
use crate::types::{c64, BemError, Point, Result};
use std::f64::consts::PI;

/// Above this value of `K |x_f - x_s|` the far-field form of the value is used.
const NEAR_FIELD_LIMIT: f64 = 1.0;

fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Green's function of the linearised free-surface problem in deep water.
///
/// The kernel behaves like `ln r` near the source, is harmonic in `z < 0` and
/// satisfies `dG/dz - K G = 0` on `z = 0` with `K = omega^2 / g`. Its
/// imaginary part radiates outgoing waves.
#[derive(Debug, Clone, Copy)]
pub struct FreeSurfaceGreenFunction {
    omega: f64,
    gravity: f64,
    wavenumber: f64,
}

impl FreeSurfaceGreenFunction {
    /// Create the kernel for the angular frequency `omega`.
    pub fn new(omega: f64, gravity: f64) -> Result<Self> {
        let wavenumber = omega * omega / gravity;
        if !wavenumber.is_finite() || wavenumber <= 0.0 || omega <= 0.0 {
            return Err(BemError::InvalidInput(format!(
                "frequency {omega} and gravity {gravity} do not give a positive wavenumber"
            )));
        }
        Ok(Self {
            omega,
            gravity,
            wavenumber,
        })
    }

    /// Angular frequency
    pub fn omega(&self) -> f64 {
        self.omega
    }

    /// Acceleration of gravity
    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    /// Deep-water wavenumber `K = omega^2 / g`
    pub fn wavenumber(&self) -> f64 {
        self.wavenumber
    }

    /// Wavelength `2 pi / K`
    pub fn wavelength(&self) -> f64 {
        2.0 * PI / self.wavenumber
    }

    /// Value, field gradient and field Hessian.
    ///
    /// With `r` the distance to the source, `r'` the distance to its image
    /// above the free surface and `h = |x_f - x_s|`, the kernel is
    /// `ln(r / r') - 2 Re[exp(-w) E1(-w)] - 2 pi i exp(-w)` where
    /// `w = K (|z_f + z_s| - i h)`.
    fn eval_field(&self, field: Point, source: Point) -> (c64, [c64; 2], [[c64; 2]; 2]) {
        let k = self.wavenumber;
        let dx = field.x - source.x;
        let dz = field.z - source.z;
        let h = dx.abs();
        let depth = dz.abs();
        let image_depth = (field.z + source.z).abs();
        let sx = sign(dx);
        let sz = sign(dz);

        let h2 = h * h;
        let rr = h2 + depth * depth;
        let rr_image = h2 + image_depth * image_depth;

        let w = c64::new(k * image_depth, -k * h);
        let wave = (-w).exp() * (2.0 * PI);
        let scaled_e1 = exp_e1(-w);
        let first = scaled_e1 + 1.0 / w;
        let second = first + 1.0 / (w * w);
        let i = c64::new(0.0, 1.0);

        let value = if k * h <= NEAR_FIELD_LIMIT {
            // Split the logarithms so that neither cancels against ln|w|.
            let near = (k * rr.sqrt()).ln() + (k * rr_image.sqrt()).ln();
            c64::from(near - 2.0 * (scaled_e1.re + w.norm().ln())) - i * wave
        } else {
            c64::from(0.5 * (rr / rr_image).ln() - 2.0 * scaled_e1.re) - i * wave
        };

        let gx = (wave * k + (h / rr - h / rr_image + 2.0 * k * first.im)) * sx;
        let gz = c64::from(sz * depth / rr + image_depth / rr_image - 2.0 * k * first.re)
            - i * wave * k;
        let gxx = c64::from(
            (depth * depth - h2) / (rr * rr)
                + (h2 - image_depth * image_depth) / (rr_image * rr_image)
                + 2.0 * k * k * second.re,
        ) + i * wave * k * k;
        let gxz = -(c64::from(
            2.0 * h * (sz * depth / (rr * rr) + image_depth / (rr_image * rr_image))
                - 2.0 * k * k * second.im,
        ) - wave * k * k)
            * sx;

        (value, [gx, gz], [[gxx, gxz], [gxz, -gxx]])
    }
}

impl GreenFunction for FreeSurfaceGreenFunction {
    type T = c64;

    fn eval(&self, field: Point, source: Point) -> KernelValue<c64> {
        let (value, gradient, hessian) = self.eval_field(field, source);

        // The ln r1 part is antisymmetric under exchange of field and source,
        // the rest depends on x_f - x_s and z_f + z_s only.
        let log = KernelValue::logarithm(field, source, 1.0);
        let sigma = [-1.0, 1.0];
        let mut source_gradient = [c64::new(0.0, 0.0); 2];
        let mut mixed = [[c64::new(0.0, 0.0); 2]; 2];
        for a in 0..2 {
            source_gradient[a] =
                (gradient[a] - log.gradient[a]) * sigma[a] + log.source_gradient[a];
            for b in 0..2 {
                mixed[a][b] = (hessian[a][b] - log.hessian[a][b]) * sigma[b] + log.mixed[a][b];
            }
        }

        KernelValue {
            value,
            gradient,
            hessian,
            source_gradient,
            mixed,
        }
    }

    fn log_scale(&self) -> f64 {
        1.0
    }
}
