//! Radiation and diffraction of linear waves by floating bodies
use super::{solve_dense, BoundarySolution};
use crate::assembly::BoundaryOperator;
use crate::boundary::{Boundary, Region};
use crate::kernel::FreeSurfaceGreenFunction;
use crate::types::{c64, BemError, Point, Result, WaveParameters};
use log::{debug, info};
use nalgebra::{DMatrix, DVector};

type WaveOperator<'a> = BoundaryOperator<'a, FreeSurfaceGreenFunction>;

/// Regular deep-water wave of unit amplitude travelling towards `-x`.
///
/// The potential is `i (g / omega) exp(K (z + i x))`.
#[derive(Debug, Clone, Copy)]
pub struct IncidentWave {
    omega: f64,
    gravity: f64,
    wavenumber: f64,
}

impl IncidentWave {
    /// Incident wave at the frequency of `kernel`.
    pub fn new(kernel: &FreeSurfaceGreenFunction) -> Self {
        Self {
            omega: kernel.omega(),
            gravity: kernel.gravity(),
            wavenumber: kernel.wavenumber(),
        }
    }

    fn exponential(&self, p: Point) -> c64 {
        c64::new(self.wavenumber * p.z, self.wavenumber * p.x).exp()
    }

    /// Potential
    pub fn potential(&self, p: Point) -> c64 {
        c64::new(0.0, self.gravity / self.omega) * self.exponential(p)
    }

    /// Gradient of the potential
    pub fn gradient(&self, p: Point) -> [c64; 2] {
        let e = self.exponential(p);
        [e * -self.omega, e * c64::new(0.0, self.omega)]
    }
}

fn check_parameters(operator: &WaveOperator, params: &WaveParameters) -> Result<()> {
    let gravity = operator.kernel().gravity();
    if (gravity - params.gravity).abs() > 1e-12 * gravity {
        return Err(BemError::Mismatch(format!(
            "kernel uses gravity {gravity}, problem uses {}",
            params.gravity
        )));
    }
    if params.density.is_nan() || params.density <= 0.0 {
        return Err(BemError::InvalidInput(format!(
            "density must be positive, got {}",
            params.density
        )));
    }
    Ok(())
}

/// Pressure force `i omega rho sum_body phi n_i L` on every degree of freedom.
pub(super) fn body_forces(
    boundary: &Boundary,
    omega: f64,
    density: f64,
    phi: &[c64],
) -> DVector<c64> {
    let factor = c64::new(0.0, omega * density);
    DVector::from_iterator(
        boundary.number_of_dofs(),
        boundary.dofs().iter().map(|(_, normal)| {
            boundary
                .elements()
                .iter()
                .enumerate()
                .filter(|(j, _)| boundary.region(*j) == Region::Body)
                .map(|(j, e)| phi[j] * normal[j] * e.length())
                .sum::<c64>()
                * factor
        }),
    )
}

/// Radiation problem: the body oscillates in each of its degrees of freedom.
pub struct RadiationProblem<'a> {
    operator: &'a WaveOperator<'a>,
    params: WaveParameters,
    fluxes: DMatrix<c64>,
}

impl<'a> RadiationProblem<'a> {
    /// Build the boundary conditions `q = -i omega n_i` on the body.
    pub fn new(operator: &'a WaveOperator<'a>, params: WaveParameters) -> Result<Self> {
        check_parameters(operator, &params)?;
        let boundary = operator.boundary();
        if boundary.number_of_dofs() == 0 {
            return Err(BemError::InvalidInput(
                "the boundary has no degrees of freedom".to_string(),
            ));
        }
        let omega = operator.kernel().omega();
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
            params,
            fluxes,
        })
    }

    /// Prescribed fluxes, one column per degree of freedom
    pub fn fluxes(&self) -> &DMatrix<c64> {
        &self.fluxes
    }

    /// Solve `Q phi = G q` for every degree of freedom.
    pub fn solve(&self) -> Result<RadiationSolution<'a>> {
        let rhs = self.operator.g() * &self.fluxes;
        let phi = solve_dense(self.operator.q().clone(), &rhs)?;
        let boundary = self.operator.boundary();
        let kernel = self.operator.kernel();

        let solutions = (0..phi.ncols())
            .map(|k| {
                BoundarySolution::new(
                    self.operator,
                    phi.column(k).into_owned(),
                    self.fluxes.column(k).into_owned(),
                )
            })
            .collect::<Result<Vec<_>>>()?;

        let mut forces = DMatrix::<c64>::zeros(boundary.number_of_dofs(), phi.ncols());
        for (k, solution) in solutions.iter().enumerate() {
            let column = body_forces(
                boundary,
                kernel.omega(),
                self.params.density,
                solution.phi().as_slice(),
            );
            forces.set_column(k, &column);
        }
        info!(
            "Solved radiation problem at omega = {} with {} degrees of freedom",
            kernel.omega(),
            phi.ncols()
        );
        Ok(RadiationSolution {
            operator: self.operator,
            solutions,
            forces,
        })
    }
}

/// Radiation potentials and hydrodynamic coefficients.
pub struct RadiationSolution<'a> {
    operator: &'a WaveOperator<'a>,
    solutions: Vec<BoundarySolution<'a, FreeSurfaceGreenFunction>>,
    forces: DMatrix<c64>,
}

impl<'a> RadiationSolution<'a> {
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

    /// Solution for the motion in degree of freedom `k`
    pub fn solution(&self, k: usize) -> &BoundarySolution<'a, FreeSurfaceGreenFunction> {
        &self.solutions[k]
    }

    /// All solutions
    pub fn solutions(&self) -> &[BoundarySolution<'a, FreeSurfaceGreenFunction>] {
        &self.solutions
    }

    /// Complex force matrix `f[(i, j)]`: force in `i` due to unit velocity amplitude in `j`
    pub fn force_coefficients(&self) -> &DMatrix<c64> {
        &self.forces
    }

    /// Added mass `Re f / omega^2`
    pub fn added_mass(&self) -> DMatrix<f64> {
        let omega = self.operator.kernel().omega();
        self.forces.map(|f| f.re / (omega * omega))
    }

    /// Radiation damping `Im f / omega`
    pub fn damping(&self) -> DMatrix<f64> {
        let omega = self.operator.kernel().omega();
        self.forces.map(|f| f.im / omega)
    }

    /// Amplitude of the radiated wave at `(x, 0)` for motion in degree of freedom `k`.
    pub fn wave_amplitude_at(&self, k: usize, x: f64) -> f64 {
        let kernel = self.operator.kernel();
        let value = self.solutions[k].evaluate(&[Point::new(x, 0.0)]);
        debug!("Radiated potential at x = {x}: {}", value[0].potential);
        (c64::new(0.0, 1.0) * value[0].potential).norm() * kernel.omega() / kernel.gravity()
    }

    /// Amplitude of the radiated wave two wavelengths from the origin.
    pub fn wave_amplitude(&self, k: usize) -> f64 {
        self.wave_amplitude_at(k, 2.0 * self.operator.kernel().wavelength())
    }
}

/// Diffraction problem: the body is held fixed in an incident wave.
pub struct DiffractionProblem<'a> {
    operator: &'a WaveOperator<'a>,
    params: WaveParameters,
    incident: IncidentWave,
    fluxes: DVector<c64>,
}

impl<'a> DiffractionProblem<'a> {
    /// Build the boundary conditions `q = -grad(phi_0) . n` on the body.
    pub fn new(operator: &'a WaveOperator<'a>, params: WaveParameters) -> Result<Self> {
        check_parameters(operator, &params)?;
        let incident = IncidentWave::new(operator.kernel());
        let boundary = operator.boundary();
        let fluxes = DVector::from_iterator(
            boundary.number_of_elements(),
            boundary.elements().iter().zip(boundary.regions()).map(|(e, r)| {
                if *r == Region::Body {
                    let [gx, gz] = incident.gradient(e.midpoint());
                    let n = e.normal();
                    -(gx * n.x + gz * n.z)
                } else {
                    c64::new(0.0, 0.0)
                }
            }),
        );
        Ok(Self {
            operator,
            params,
            incident,
            fluxes,
        })
    }

    /// Incident wave
    pub fn incident(&self) -> &IncidentWave {
        &self.incident
    }

    /// Solve for the diffracted potential and the exciting forces.
    pub fn solve(&self) -> Result<DiffractionSolution<'a>> {
        let fluxes = DMatrix::from_column_slice(self.fluxes.len(), 1, self.fluxes.as_slice());
        let rhs = self.operator.g() * fluxes;
        let phi = solve_dense(self.operator.q().clone(), &rhs)?;
        let boundary = self.operator.boundary();
        let kernel = self.operator.kernel();

        let diffracted =
            BoundarySolution::new(self.operator, phi.column(0).into_owned(), self.fluxes.clone())?;
        let total = DVector::from_iterator(
            boundary.number_of_elements(),
            boundary
                .elements()
                .iter()
                .zip(diffracted.phi().iter())
                .map(|(e, phi)| self.incident.potential(e.midpoint()) + phi),
        );
        let forces = body_forces(boundary, kernel.omega(), self.params.density, total.as_slice());
        info!("Solved diffraction problem at omega = {}", kernel.omega());
        Ok(DiffractionSolution {
            incident: self.incident,
            diffracted,
            total,
            forces,
        })
    }
}

/// Diffracted potential and exciting forces.
pub struct DiffractionSolution<'a> {
    incident: IncidentWave,
    diffracted: BoundarySolution<'a, FreeSurfaceGreenFunction>,
    total: DVector<c64>,
    forces: DVector<c64>,
}

impl<'a> DiffractionSolution<'a> {
    /// Incident wave
    pub fn incident(&self) -> &IncidentWave {
        &self.incident
    }

    /// Diffracted part of the solution
    pub fn diffracted(&self) -> &BoundarySolution<'a, FreeSurfaceGreenFunction> {
        &self.diffracted
    }

    /// Incident plus diffracted potential on each element
    pub fn total_potential(&self) -> &DVector<c64> {
        &self.total
    }

    /// Exciting force on each degree of freedom
    pub fn exciting_forces(&self) -> &DVector<c64> {
        &self.forces
    }
}
