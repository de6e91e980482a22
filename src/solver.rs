//! Boundary-value problems and eigenproblems on assembled operators
mod laplace;
mod motion;
mod rankine;
mod sloshing;
mod solution;
mod wave;

pub use laplace::{BoundaryCondition, LaplaceProblem};
pub use motion::motion_response;
pub use rankine::{RankineRadiationProblem, RankineRadiationSolution};
pub use sloshing::{SloshingMode, SloshingModes, SloshingProblem};
pub use solution::{BoundarySolution, FieldValue};
pub use wave::{
    DiffractionProblem, DiffractionSolution, IncidentWave, RadiationProblem, RadiationSolution,
};

use crate::types::{BemError, BemScalar, Result};
use nalgebra::DMatrix;

/// Systems whose smallest pivot falls below this fraction of the largest are
/// treated as singular.
const SINGULAR_TOLERANCE: f64 = 1e-13;

/// Solve `matrix * x = rhs` by LU decomposition with partial pivoting.
pub(crate) fn solve_dense<T: BemScalar>(
    matrix: DMatrix<T>,
    rhs: &DMatrix<T>,
) -> Result<DMatrix<T>> {
    let n = matrix.nrows();
    if matrix.ncols() != n || rhs.nrows() != n {
        return Err(BemError::InvalidInput(format!(
            "cannot solve a {}x{} system with {} right-hand side rows",
            n,
            matrix.ncols(),
            rhs.nrows()
        )));
    }
    let lu = matrix.lu();
    let pivots = lu.u().diagonal().map(|d| d.modulus());
    let largest = pivots.iter().copied().fold(0.0, f64::max);
    let smallest = pivots.iter().copied().fold(f64::INFINITY, f64::min);
    if pivots.iter().any(|p| !p.is_finite()) || smallest <= SINGULAR_TOLERANCE * largest {
        return Err(BemError::SingularMatrix(format!(
            "smallest pivot {smallest:e}, largest pivot {largest:e}"
        )));
    }
    lu.solve(rhs)
        .ok_or_else(|| BemError::SingularMatrix("LU solve failed".to_string()))
}
