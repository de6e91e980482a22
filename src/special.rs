//! Special functions needed by the free-surface kernels
mod bessel;
mod expint;
mod struve;

pub use bessel::bessel_y01;
pub use expint::{exp_e1, exp_ei};
pub use struve::struve_h01;

/// Euler-Mascheroni constant
pub const EULER_GAMMA: f64 = 0.577_215_664_901_532_9;

/// `(H0(x) + Y0(x), H1(x) + Y1(x))`
pub fn struve_plus_bessel(x: f64) -> (f64, f64) {
    let (h0, h1) = struve_h01(x);
    let (y0, y1) = bessel_y01(x);
    (h0 + y0, h1 + y1)
}
