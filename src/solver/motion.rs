//! Equations of motion of a floating body
use super::solve_dense;
use crate::types::{c64, BemError, Result};
use nalgebra::{DMatrix, DVector};

/// Complex motion amplitudes `xi` of a body in regular waves.
///
/// Solves `[-omega^2 (M + A) - i omega B + C] xi = F`, where `M` is the
/// inertia matrix, `A` the added mass, `B` the radiation damping, `C` the
/// hydrostatic stiffness and `F` the exciting force.
pub fn motion_response(
    mass: &DMatrix<f64>,
    stiffness: &DMatrix<f64>,
    added_mass: &DMatrix<f64>,
    damping: &DMatrix<f64>,
    forces: &DVector<c64>,
    omega: f64,
) -> Result<DVector<c64>> {
    let n = forces.len();
    for (name, m) in [
        ("mass", mass),
        ("stiffness", stiffness),
        ("added mass", added_mass),
        ("damping", damping),
    ] {
        if m.shape() != (n, n) {
            return Err(BemError::InvalidInput(format!(
                "{name} matrix is {}x{}, expected {n}x{n}",
                m.nrows(),
                m.ncols()
            )));
        }
    }
    let matrix = DMatrix::from_fn(n, n, |i, j| {
        c64::new(
            -omega * omega * (mass[(i, j)] + added_mass[(i, j)]) + stiffness[(i, j)],
            -omega * damping[(i, j)],
        )
    });
    let rhs = DMatrix::from_column_slice(n, 1, forces.as_slice());
    Ok(solve_dense(matrix, &rhs)?.column(0).into_owned())
}
