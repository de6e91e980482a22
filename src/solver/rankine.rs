//! Radiation in a truncated fluid domain with the plain Laplace kernel
use super::solve_dense;
use super::wave::body_forces;
use crate::assembly::BoundaryOperator;
use crate::boundary::Region;
use crate::kernel::LaplaceGreenFunction;
use crate::types::{c64, BemError, Result, WaveParameters};
use log::{debug, info};
use nalgebra::DMatrix;
use std::f64::consts::PI;

type LaplaceOperator<'a> = BoundaryOperator<'a, LaplaceGreenFunction>;

/// Radiation problem on a closed, truncated fluid domain.
///
/// The Laplace kernel knows nothing about waves, so the boundary carries them:
/// `dphi/dn = K phi` on the [Region::FreeSurface], the radiation condition
/// `dphi/dn = i K phi` on the truncation [Region::Wall]s, a rigid
/// [Region::Bottom] and `dphi/dn = -i omega n_i` on the body for each degree
/// of freedom. The walls must be far enough from the body for the radiated
/// wave to be plane, and deep enough for it to have decayed at the bottom.
pub struct RankineRadiationProblem<'a> {
    operator: &'a LaplaceOperator<'a>,
    omega: f64,
    params: WaveParameters,
    fluxes: DMatrix<c64>,
}

impl<'a> RankineRadiationProblem<'a> {
    /// Set up the problem at angular frequency `omega`.
    pub fn new(
        operator: &'a LaplaceOperator<'a>,
        omega: f64,
        params: WaveParameters,
    ) -> Result<Self> {
        if !omega.is_finite() || omega <= 0.0 {
            return Err(BemError::InvalidInput(format!(
                "frequency must be positive, got {omega}"
            )));
        }
        if !params.gravity.is_finite() || params.gravity <= 0.0 {
            return Err(BemError::InvalidInput(format!(
                "gravity must be positive, got {}",
                params.gravity
            )));
        }
        if params.density.is_nan() || params.density <= 0.0 {
            return Err(BemError::InvalidInput(format!(
                "density must be positive, got {}",
                params.density
            )));
        }

        let boundary = operator.boundary();
        if !boundary.is_closed() {
            return Err(BemError::InvalidInput(
                "a truncated domain must be closed".to_string(),
            ));
        }
        if boundary.count(Region::Lid) > 0 {
            return Err(BemError::InvalidInput(
                "lid elements lie outside a truncated domain".to_string(),
            ));
        }
        for region in [Region::Body, Region::FreeSurface, Region::Wall] {
            if boundary.count(region) == 0 {
                return Err(BemError::InvalidInput(format!(
                    "a truncated domain needs {region:?} elements"
                )));
            }
        }
        if boundary.number_of_dofs() == 0 {
            return Err(BemError::InvalidInput(
                "the boundary has no degrees of freedom".to_string(),
            ));
        }

        let fluxes = DMatrix::from_fn(
            boundary.number_of_elements(),
            boundary.number_of_dofs(),
            |i, k| {
                if boundary.region(i) == Region::Body {
                    c64::new(0.0, -omega * boundary.dofs()[k].1[i])
                } else {
                    c64::new(0.0, 0.0)
                }
            },
        );
        Ok(Self {
            operator,
            omega,
            params,
            fluxes,
        })
    }

    /// Deep-water wavenumber `K = omega^2 / g`
    pub fn wavenumber(&self) -> f64 {
        self.omega * self.omega / self.params.gravity
    }

    /// Prescribed body fluxes, one column per degree of freedom
    pub fn fluxes(&self) -> &DMatrix<c64> {
        &self.fluxes
    }

    /// `Q - K G_f - i K G_w`: the columns of free-surface and wall elements
    /// absorb their flux conditions.
    pub fn system_matrix(&self) -> DMatrix<c64> {
        let boundary = self.operator.boundary();
        let g = self.operator.g();
        let q = self.operator.q();
        let k = self.wavenumber();
        let n = self.operator.dim();
        DMatrix::from_fn(n, n, |i, j| match boundary.region(j) {
            Region::FreeSurface => c64::new(q[(i, j)] - k * g[(i, j)], 0.0),
            Region::Wall => c64::new(q[(i, j)], -k * g[(i, j)]),
            _ => c64::new(q[(i, j)], 0.0),
        })
    }

    /// Solve for the potential of every degree of freedom.
    pub fn solve(&self) -> Result<RankineRadiationSolution<'a>> {
        let boundary = self.operator.boundary();
        let rhs = self.operator.g().map(|g| c64::new(g, 0.0)) * &self.fluxes;
        let phi = solve_dense(self.system_matrix(), &rhs)?;

        let mut forces = DMatrix::<c64>::zeros(boundary.number_of_dofs(), phi.ncols());
        for k in 0..phi.ncols() {
            let potential = phi.column(k).into_owned();
            let column = body_forces(
                boundary,
                self.omega,
                self.params.density,
                potential.as_slice(),
            );
            forces.set_column(k, &column);
        }
        info!(
            "Solved truncated-domain radiation problem at omega = {} on {} elements",
            self.omega,
            boundary.number_of_elements()
        );
        Ok(RankineRadiationSolution {
            operator: self.operator,
            omega: self.omega,
            gravity: self.params.gravity,
            phi,
            forces,
        })
    }
}

/// Radiation potentials and hydrodynamic coefficients in a truncated domain.
pub struct RankineRadiationSolution<'a> {
    operator: &'a LaplaceOperator<'a>,
    omega: f64,
    gravity: f64,
    phi: DMatrix<c64>,
    forces: DMatrix<c64>,
}

impl<'a> RankineRadiationSolution<'a> {
    /// Names of the degrees of freedom, in the order of matrix rows and columns
    pub fn dof_names(&self) -> Vec<&str> {
        self.operator
            .boundary()
            .dofs()
            .iter()
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Index of a named degree of freedom
    pub fn dof_index(&self, name: &str) -> Option<usize> {
        self.operator
            .boundary()
            .dofs()
            .iter()
            .position(|(n, _)| n == name)
    }

    /// Potential on every element, one column per degree of freedom
    pub fn potentials(&self) -> &DMatrix<c64> {
        &self.phi
    }

    /// Complex force matrix `f[(i, j)]`: force in `i` due to unit velocity amplitude in `j`
    pub fn force_coefficients(&self) -> &DMatrix<c64> {
        &self.forces
    }

    /// Added mass `Re f / omega^2`
    pub fn added_mass(&self) -> DMatrix<f64> {
        let omega = self.omega;
        self.forces.map(|f| f.re / (omega * omega))
    }

    /// Radiation damping `Im f / omega`
    pub fn damping(&self) -> DMatrix<f64> {
        let omega = self.omega;
        self.forces.map(|f| f.im / omega)
    }

    /// Mean amplitude `|omega phi / g|` of the radiated wave over the
    /// free-surface elements more than one wavelength beyond the body, for
    /// motion in degree of freedom `k`.
    ///
    /// Returns `None` when the domain ends before that.
    pub fn wave_amplitude(&self, k: usize) -> Option<f64> {
        let boundary = self.operator.boundary();
        let extent = boundary
            .indices(Region::Body)
            .iter()
            .map(|&j| {
                let e = boundary.element(j);
                e.start().x.abs().max(e.end().x.abs())
            })
            .fold(0.0, f64::max);
        let wavelength = 2.0 * PI * self.gravity / (self.omega * self.omega);
        let far = boundary
            .indices(Region::FreeSurface)
            .into_iter()
            .filter(|&j| boundary.element(j).midpoint().x.abs() > extent + wavelength)
            .collect::<Vec<_>>();
        if far.is_empty() {
            return None;
        }
        debug!(
            "Averaging the radiated wave over {} free-surface elements",
            far.len()
        );
        let scale = self.omega / self.gravity;
        let total = far
            .iter()
            .map(|&j| self.phi[(j, k)].norm() * scale)
            .sum::<f64>();
        Some(total / far.len() as f64)
    }
}
