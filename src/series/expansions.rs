//! The four series expansions
use super::SeriesValue;
use crate::special::{bessel_y01, exp_ei, struve_plus_bessel};
use std::f64::consts::PI;

/// Small-`x` expansion around the vertical axis. Finite at `x = 0`.
pub(super) fn sem1(x: f64, y: f64, terms: usize) -> SeriesValue {
    let eey = exp_ei(y);
    let yi = 1.0 / y;
    let q = 0.25 * x * x;
    let mut d = -1.0;
    let mut tn = 1.0;
    let (mut s1, mut s2, mut s3) = (0.0, 0.0, 0.0);
    for n in 1..=terms {
        let nf = n as f64;
        tn *= -q / (nf * nf);
        if n > 1 {
            d *= -q / (nf * nf);
        }
        // sum_{m=1}^{2n} (m-1)! / y^m
        let mut tm = yi;
        let mut sm = yi;
        for m in 2..=2 * n {
            tm *= (m - 1) as f64 * yi;
            sm += tm;
        }
        sm -= eey;
        s1 += tn * sm;
        s2 += nf * d * sm;
        s3 += nf * (2.0 * nf - 1.0) * d * sm;
    }
    SeriesValue {
        f: 2.0 * (s1 - eey),
        fx: x * s2,
        fxx: s3,
    }
}

/// Expansion in powers of `y` for moderate arguments.
pub(super) fn sem2(x: f64, y: f64, terms: usize) -> SeriesValue {
    let r = x.hypot(y);
    let xi = 1.0 / x;
    let rxi = r * xi;
    let rxi2 = rxi * xi;
    let yxiri = y * xi / r;
    let x2 = x * x;
    let ey = (-y).exp();
    let (y0, y1) = bessel_y01(x);
    let py0 = PI * ey * y0;
    let py1 = PI * ey * y1;

    // Hypergeometric terms 2F1(1/2, -n/2; 3/2; r^2/x^2) of the expansion, by recurrence:
    // t_n = (y^n/n! - x^2 t_(n-2)/(n-1)) / (n+1)
    let log_term = if y > 0.0 { ((r + y) / x).ln() } else { 0.0 };
    let mut t_prev = 1.0;
    let mut t_curr = 0.5 * y - 0.5 * x2 / r * log_term;
    let mut u = y;
    let mut s1 = 1.0 + 2.0 * t_curr;
    let mut s2 = 1.0 + t_curr;
    let mut s3 = t_curr;
    for n in 2..=terms {
        let nf = n as f64;
        u *= y / nf;
        let t_next = (u - x2 * t_prev / (nf - 1.0)) / (nf + 1.0);
        s1 += (nf + 1.0) * t_next;
        s2 += t_next;
        s3 += nf * t_next;
        t_prev = t_curr;
        t_curr = t_next;
    }

    SeriesValue {
        f: -py0 + 2.0 * rxi2 * (ey * s1 - 1.0),
        fx: py1 + 2.0 * (yxiri - rxi * ey * s2),
        fxx: py0 - py1 * xi
            + 2.0 * (yxiri * xi * (y * y / (r * r) - 2.0 + y) - rxi2 * ey * s3),
    }
}

/// Asymptotic expansion in `1/x` for large `x` near the surface. Finite at `y = 0`.
pub(super) fn sem3(x: f64, y: f64, terms: usize) -> SeriesValue {
    let xi = 1.0 / x;
    let xi2 = xi * xi;
    let y2 = y * y;
    let ey = (-y).exp();
    let oy = 1.0 - ey;
    let (hy0, hy1) = struve_plus_bessel(x);
    let phy0 = PI * ey * hy0;
    let phy1 = PI * ey * hy1;

    let mut tn = 1.0;
    let mut y2n = 1.0;
    let mut y_odd = y;
    let mut cn = oy;
    let (mut s1, mut s2, mut s3) = (0.0, 0.0, 0.0);
    for n in 1..=terms {
        let dn = 2.0 * n as f64;
        tn *= -0.5 * xi2 * (dn - 1.0) / n as f64;
        y2n *= y2;
        if n > 1 {
            y_odd *= y2;
        }
        cn = y2n - dn * y_odd + dn * (dn - 1.0) * cn;
        let c1 = tn * cn;
        let c2 = (dn + 1.0) * c1;
        let c3 = (dn + 2.0) * c2;
        s1 += c1;
        s2 += c2;
        s3 += c3;
    }

    SeriesValue {
        f: -phy0 - 2.0 * xi * (oy + s1),
        fx: phy1 - 2.0 * ey + 2.0 * xi2 * (oy + s2),
        fxx: phy0 - xi * phy1 - 2.0 * xi2 * xi * (2.0 * oy + s3),
    }
}

/// Asymptotic expansion in `1/r` for large `x` away from the surface.
pub(super) fn sem4(x: f64, y: f64, terms: usize) -> SeriesValue {
    let x2 = x * x;
    let r2 = x2 + y * y;
    let r = r2.sqrt();
    let ri3 = 1.0 / (r2 * r);
    let x2ri2 = x2 / r2;
    let hyr = 0.5 * y * y / r2;
    let yi = 1.0 / y;
    let yi2 = yi * yi;
    let ey = (-y).exp();
    let oy = 1.0 - ey;
    let (hy0, hy1) = struve_plus_bessel(x);
    let phy0 = PI * ey * hy0;
    let phy1 = PI * ey * hy1;

    let mut tn = -hyr;
    let mut sign = 1.0;
    let mut b0 = oy * yi;
    let mut b1 = yi * ((1.0 - 2.0 * yi2) * ey - 2.0 * (yi - yi2));
    let mut s1 = tn * b1;
    let mut s2 = 3.0 * s1;
    let mut s3 = s2 * (1.0 - 5.0 * x2ri2);
    for n in 2..=terms {
        let dn = 2.0 * n as f64;
        tn *= -hyr * (dn - 1.0) / n as f64;
        sign = -sign;
        let bn = sign * ey * yi + yi2 * dn * ((dn - 1.0) * b1 + (dn - 2.0) * b0);
        b0 = b1;
        b1 = bn;
        let c1 = tn * bn;
        let c2 = c1 * (dn + 1.0);
        let c3 = c2 * (1.0 - (dn + 3.0) * x2ri2);
        s1 += c1;
        s2 += c2;
        s3 += c3;
    }

    SeriesValue {
        f: -phy0 - 2.0 / r * (oy + y * s1),
        fx: phy1 - 2.0 * ey + 2.0 * x * ri3 * (oy + y * s2),
        fxx: phy0 - phy1 / x + 2.0 * ri3 * (oy * (1.0 - 3.0 * x2ri2) + y * s3),
    }
}
