//! Boundary solutions and their evaluation in the domain
use crate::assembly::{same_instance, BoundaryOperator};
use crate::traits::GreenFunction;
use crate::types::{BemError, Point, Result};
use nalgebra::{ComplexField, DVector};
use num::Zero;
use rayon::prelude::*;
use std::f64::consts::PI;

/// Potential and velocity at a point in the domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldValue<T> {
    /// Potential
    pub potential: T,
    /// Gradient of the potential
    pub gradient: [T; 2],
}

impl<T: Zero + Copy> FieldValue<T> {
    fn zero() -> Self {
        Self {
            potential: T::zero(),
            gradient: [T::zero(); 2],
        }
    }
}

/// Potential and normal flux on every element of a boundary.
pub struct BoundarySolution<'a, K: GreenFunction> {
    operator: &'a BoundaryOperator<'a, K>,
    phi: DVector<K::T>,
    q: DVector<K::T>,
}

impl<'a, K: GreenFunction> BoundarySolution<'a, K> {
    /// Create a solution from element potentials and fluxes.
    pub fn new(
        operator: &'a BoundaryOperator<'a, K>,
        phi: DVector<K::T>,
        q: DVector<K::T>,
    ) -> Result<Self> {
        let n = operator.dim();
        if phi.len() != n || q.len() != n {
            return Err(BemError::InvalidInput(format!(
                "solution has {} potentials and {} fluxes for {} elements",
                phi.len(),
                q.len(),
                n
            )));
        }
        Ok(Self { operator, phi, q })
    }

    /// Operator the solution belongs to
    pub fn operator(&self) -> &'a BoundaryOperator<'a, K> {
        self.operator
    }

    /// Potential on each element
    pub fn phi(&self) -> &DVector<K::T> {
        &self.phi
    }

    /// Normal flux on each element
    pub fn q(&self) -> &DVector<K::T> {
        &self.q
    }

    /// Sum of two solutions of the same operator.
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        if !same_instance(self.operator, other.operator) {
            return Err(BemError::Mismatch(
                "solutions belong to different operators".to_string(),
            ));
        }
        Ok(Self {
            operator: self.operator,
            phi: &self.phi + &other.phi,
            q: &self.q + &other.q,
        })
    }

    /// Solution multiplied by `factor`.
    pub fn scale(&self, factor: K::T) -> Self {
        Self {
            operator: self.operator,
            phi: &self.phi * factor,
            q: &self.q * factor,
        }
    }

    /// Evaluate potential and gradient at points in the domain.
    ///
    /// Influence coefficients are computed afresh for every point. Points on
    /// the boundary itself are not supported.
    pub fn evaluate(&self, points: &[Point]) -> Vec<FieldValue<K::T>> {
        let factor = 1.0 / (2.0 * PI * self.operator.kernel().log_scale());
        points
            .par_iter()
            .map(|point| {
                let row = self.operator.influence_row(*point);
                let mut value = FieldValue::<K::T>::zero();
                for (c, (phi, q)) in row.iter().zip(self.phi.iter().zip(self.q.iter())) {
                    value.potential += c.q * *phi - c.g * *q;
                    for b in 0..2 {
                        value.gradient[b] += c.grad_q[b] * *phi - c.grad_g[b] * *q;
                    }
                }
                value.potential = value.potential.scale(factor);
                for b in 0..2 {
                    value.gradient[b] = value.gradient[b].scale(factor);
                }
                value
            })
            .collect()
    }
}
