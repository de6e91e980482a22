//! Natural sloshing modes of a tank
use super::solve_dense;
use crate::assembly::BoundaryOperator;
use crate::boundary::Region;
use crate::kernel::LaplaceGreenFunction;
use crate::types::{BemError, Result, WaveParameters};
use log::{debug, info, warn};
use nalgebra::linalg::Schur;
use nalgebra::{DMatrix, DVector};

const SCHUR_TOLERANCE: f64 = 1e-12;
const SCHUR_MAX_ITERATIONS: usize = 10_000;
const INVERSE_ITERATIONS: usize = 10;
const IMAGINARY_TOLERANCE: f64 = 1e-6;

/// One natural mode of the free surface.
#[derive(Debug, Clone)]
pub struct SloshingMode {
    eigenvalue: f64,
    frequency: f64,
    free_surface_potential: DVector<f64>,
    potential: DVector<f64>,
}

impl SloshingMode {
    /// Eigenvalue `omega^2 / g`
    pub fn eigenvalue(&self) -> f64 {
        self.eigenvalue
    }

    /// Natural frequency
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Mode shape on the free-surface elements, scaled so that its largest
    /// entry is one.
    pub fn free_surface_potential(&self) -> &DVector<f64> {
        &self.free_surface_potential
    }

    /// Mode shape on every element of the boundary
    pub fn potential(&self) -> &DVector<f64> {
        &self.potential
    }
}

/// Sloshing modes sorted by increasing frequency.
#[derive(Debug, Clone)]
pub struct SloshingModes {
    modes: Vec<SloshingMode>,
}

impl SloshingModes {
    /// Modes
    pub fn modes(&self) -> &[SloshingMode] {
        &self.modes
    }

    /// Eigenvalues `omega^2 / g`
    pub fn eigenvalues(&self) -> Vec<f64> {
        self.modes.iter().map(|m| m.eigenvalue).collect()
    }

    /// Natural frequencies
    pub fn frequencies(&self) -> Vec<f64> {
        self.modes.iter().map(|m| m.frequency).collect()
    }

    /// Number of modes
    pub fn len(&self) -> usize {
        self.modes.len()
    }

    /// True if there are no modes
    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }
}

/// Eigenproblem `q = (omega^2 / g) phi` on the free surface of a closed tank.
///
/// Every element that is not tagged [Region::FreeSurface] is treated as a
/// rigid wall with zero normal flux.
pub struct SloshingProblem<'a> {
    operator: &'a BoundaryOperator<'a, LaplaceGreenFunction>,
    params: WaveParameters,
    rigid: Vec<usize>,
    free: Vec<usize>,
}

impl<'a> SloshingProblem<'a> {
    /// Create the problem.
    pub fn new(
        operator: &'a BoundaryOperator<'a, LaplaceGreenFunction>,
        params: WaveParameters,
    ) -> Result<Self> {
        if params.gravity.is_nan() || params.gravity <= 0.0 {
            return Err(BemError::InvalidInput(format!(
                "gravity must be positive, got {}",
                params.gravity
            )));
        }
        let boundary = operator.boundary();
        let (free, rigid): (Vec<usize>, Vec<usize>) = (0..boundary.number_of_elements())
            .partition(|i| boundary.region(*i) == Region::FreeSurface);
        if free.is_empty() {
            return Err(BemError::InvalidInput(
                "the boundary has no free-surface elements".to_string(),
            ));
        }
        if rigid.is_empty() {
            return Err(BemError::InvalidInput(
                "the boundary has no rigid elements".to_string(),
            ));
        }
        Ok(Self {
            operator,
            params,
            rigid,
            free,
        })
    }

    /// Indices of the free-surface elements, in the order of mode vectors
    pub fn free_surface_elements(&self) -> &[usize] {
        &self.free
    }

    /// Solve `A X = -Q_f` with `A = [Q_r | -G_f]`.
    ///
    /// The first rows of `X` map free-surface potential to rigid-wall
    /// potential, the remaining rows map it to free-surface flux.
    fn transfer(&self) -> Result<DMatrix<f64>> {
        let g = self.operator.g();
        let q = self.operator.q();
        let n = self.operator.dim();
        let nr = self.rigid.len();

        let matrix = DMatrix::from_fn(n, n, |i, c| {
            if c < nr {
                q[(i, self.rigid[c])]
            } else {
                -g[(i, self.free[c - nr])]
            }
        });
        let rhs = DMatrix::from_fn(n, self.free.len(), |i, c| -q[(i, self.free[c])]);
        solve_dense(matrix, &rhs)
    }

    /// Compute all modes except the trivial constant one.
    pub fn solve(&self) -> Result<SloshingModes> {
        let nr = self.rigid.len();
        let nf = self.free.len();
        let x = self.transfer()?;
        let t1 = x.rows(nr, nf).into_owned();

        let eigenvalues = real_eigenvalues(t1.clone())?;
        debug!("Dropping constant mode with eigenvalue {:e}", eigenvalues[0]);

        let rigid_transfer = x.rows(0, nr).into_owned();
        let modes = eigenvalues
            .iter()
            .skip(1)
            .map(|&s| {
                let eigenvalue = if s < 0.0 {
                    warn!("Clamping negative sloshing eigenvalue {s:e} to zero");
                    0.0
                } else {
                    s
                };
                let free_surface_potential = inverse_iteration(&t1, s)?;
                let rigid_potential = &rigid_transfer * &free_surface_potential;
                let mut potential = DVector::zeros(nr + nf);
                for (c, &i) in self.rigid.iter().enumerate() {
                    potential[i] = rigid_potential[c];
                }
                for (c, &i) in self.free.iter().enumerate() {
                    potential[i] = free_surface_potential[c];
                }
                Ok(SloshingMode {
                    eigenvalue,
                    frequency: (self.params.gravity * eigenvalue).sqrt(),
                    free_surface_potential,
                    potential,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        info!(
            "Found {} sloshing modes on {nf} free-surface elements",
            modes.len()
        );
        Ok(SloshingModes { modes })
    }
}

/// Eigenvalues of `matrix` in increasing order.
///
/// Sloshing eigenvalues are real. A complex pair means the discretisation
/// cannot be trusted and is reported as an error.
fn real_eigenvalues(matrix: DMatrix<f64>) -> Result<Vec<f64>> {
    let schur = Schur::try_new(matrix, SCHUR_TOLERANCE, SCHUR_MAX_ITERATIONS).ok_or_else(|| {
        BemError::EigenSolver(format!(
            "Schur decomposition did not converge in {SCHUR_MAX_ITERATIONS} iterations"
        ))
    })?;
    let mut eigenvalues = schur
        .complex_eigenvalues()
        .iter()
        .map(|s| {
            if s.im.abs() > IMAGINARY_TOLERANCE * s.re.abs().max(1.0) {
                Err(BemError::EigenSolver(format!(
                    "complex sloshing eigenvalue {} + {}i",
                    s.re, s.im
                )))
            } else {
                Ok(s.re)
            }
        })
        .collect::<Result<Vec<_>>>()?;
    eigenvalues.sort_by(|a, b| a.total_cmp(b));
    Ok(eigenvalues)
}

/// Eigenvector of `matrix` for the eigenvalue closest to `eigenvalue`.
fn inverse_iteration(matrix: &DMatrix<f64>, eigenvalue: f64) -> Result<DVector<f64>> {
    let n = matrix.nrows();
    let shift = eigenvalue + 1e-8 * eigenvalue.abs().max(1.0);
    let lu = (matrix - DMatrix::identity(n, n) * shift).lu();
    // A start vector without symmetry, so antisymmetric modes are reached
    let mut v = DVector::from_fn(n, |i, _| 1.0 + i as f64 / n as f64);
    for _ in 0..INVERSE_ITERATIONS {
        v = lu.solve(&v).ok_or_else(|| {
            BemError::EigenSolver(format!("inverse iteration failed at eigenvalue {eigenvalue}"))
        })?;
        let largest = v.iter().copied().fold(0.0, |m: f64, x| {
            if x.abs() > m.abs() {
                x
            } else {
                m
            }
        });
        if largest == 0.0 || !largest.is_finite() {
            return Err(BemError::EigenSolver(format!(
                "inverse iteration diverged at eigenvalue {eigenvalue}"
            )));
        }
        v /= largest;
    }
    Ok(v)
}
