//! Laplace problems with mixed boundary conditions
use super::{solve_dense, BoundarySolution};
use crate::assembly::BoundaryOperator;
use crate::kernel::LaplaceGreenFunction;
use crate::types::{BemError, Result};
use log::info;
use nalgebra::{DMatrix, DVector};

/// Condition prescribed on one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundaryCondition {
    /// Known potential, unknown flux
    Potential(f64),
    /// Known normal flux, unknown potential
    Flux(f64),
}

/// A Laplace problem with one boundary condition per element.
pub struct LaplaceProblem<'a> {
    operator: &'a BoundaryOperator<'a, LaplaceGreenFunction>,
    conditions: Vec<BoundaryCondition>,
}

impl<'a> LaplaceProblem<'a> {
    /// Create the problem.
    pub fn new(
        operator: &'a BoundaryOperator<'a, LaplaceGreenFunction>,
        conditions: Vec<BoundaryCondition>,
    ) -> Result<Self> {
        if conditions.len() != operator.dim() {
            return Err(BemError::InvalidInput(format!(
                "{} boundary conditions for {} elements",
                conditions.len(),
                operator.dim()
            )));
        }
        Ok(Self {
            operator,
            conditions,
        })
    }

    /// Boundary conditions
    pub fn conditions(&self) -> &[BoundaryCondition] {
        &self.conditions
    }

    /// Solve `Q phi = G q` for the unknown half of each element's data.
    pub fn solve(&self) -> Result<BoundarySolution<'a, LaplaceGreenFunction>> {
        let g = self.operator.g();
        let q = self.operator.q();
        let n = self.operator.dim();

        // Column j multiplies the unknown on element j.
        let mut matrix = DMatrix::<f64>::zeros(n, n);
        let mut rhs = DMatrix::<f64>::zeros(n, 1);
        for (j, condition) in self.conditions.iter().enumerate() {
            match *condition {
                BoundaryCondition::Potential(value) => {
                    matrix.set_column(j, &(-g.column(j)));
                    rhs.column_mut(0).axpy(-value, &q.column(j), 1.0);
                }
                BoundaryCondition::Flux(value) => {
                    matrix.set_column(j, &q.column(j));
                    rhs.column_mut(0).axpy(value, &g.column(j), 1.0);
                }
            }
        }
        let unknowns = solve_dense(matrix, &rhs)?;

        let mut phi = DVector::<f64>::zeros(n);
        let mut flux = DVector::<f64>::zeros(n);
        for (j, condition) in self.conditions.iter().enumerate() {
            match *condition {
                BoundaryCondition::Potential(value) => {
                    phi[j] = value;
                    flux[j] = unknowns[(j, 0)];
                }
                BoundaryCondition::Flux(value) => {
                    phi[j] = unknowns[(j, 0)];
                    flux[j] = value;
                }
            }
        }
        info!("Solved Laplace problem with {n} elements");
        BoundarySolution::new(self.operator, phi, flux)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::assembly::AssemblyOptions;
    use crate::shapes::unit_square;
    use crate::types::Point;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_linear_potential() {
        // u = x is reproduced from its potential on the vertical sides and its
        // flux on the horizontal ones.
        let boundary = unit_square(10).unwrap();
        let op = BoundaryOperator::assemble(
            &boundary,
            LaplaceGreenFunction,
            &AssemblyOptions::default(),
        )
        .unwrap();
        let conditions = boundary
            .elements()
            .iter()
            .map(|e| {
                let m = e.midpoint();
                if e.normal().x.abs() > 0.5 {
                    BoundaryCondition::Potential(m.x)
                } else {
                    BoundaryCondition::Flux(0.0)
                }
            })
            .collect();
        let solution = LaplaceProblem::new(&op, conditions).unwrap().solve().unwrap();
        for (e, (phi, q)) in boundary
            .elements()
            .iter()
            .zip(solution.phi().iter().zip(solution.q().iter()))
        {
            assert_abs_diff_eq!(*phi, e.midpoint().x, epsilon = 5e-3);
            assert_abs_diff_eq!(*q, e.normal().x, epsilon = 0.1);
        }
        let inside = solution.evaluate(&[Point::new(0.3, 0.6)]);
        assert_abs_diff_eq!(inside[0].potential, 0.3, epsilon = 1e-3);
        assert_abs_diff_eq!(inside[0].gradient[0], 1.0, epsilon = 1e-2);
        assert_abs_diff_eq!(inside[0].gradient[1], 0.0, epsilon = 1e-2);
    }

    #[test]
    fn test_wrong_number_of_conditions() {
        let boundary = unit_square(2).unwrap();
        let op = BoundaryOperator::assemble(
            &boundary,
            LaplaceGreenFunction,
            &AssemblyOptions::default(),
        )
        .unwrap();
        assert!(LaplaceProblem::new(&op, vec![BoundaryCondition::Flux(0.0)]).is_err());
    }
}
