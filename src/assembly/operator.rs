//! Dense influence matrices of a boundary
use super::influence::{influence_coefficients, self_influence_coefficients, InfluenceCoefficients};
use super::options::AssemblyOptions;
use crate::boundary::{Boundary, Region};
use crate::quadrature::{gauss_legendre_rule, NumericalQuadratureDefinition};
use crate::traits::GreenFunction;
use crate::types::{BemError, Point, Result};
use log::debug;
use nalgebra::{ComplexField, DMatrix};
use rayon::prelude::*;
use std::f64::consts::PI;

/// Abscissae closer than this to the element midpoint coincide with the
/// collocation point.
const MIDPOINT_TOLERANCE: f64 = 1e-12;

/// Jump of the double-layer potential at a collocation point, in units of the
/// kernel's logarithmic scale.
pub fn jump(region: Region) -> f64 {
    match region {
        Region::Lid => 2.0 * PI,
        _ => -PI,
    }
}

/// The single-layer matrix `G` and double-layer matrix `Q` of a boundary.
///
/// `G[(i, j)]` and `Q[(i, j)]` are the influence coefficients of element `j`
/// at the midpoint of element `i`. The diagonal of `Q` includes the jump of
/// the double-layer potential. The matrices are immutable once assembled; a
/// different kernel (for example a new frequency) needs a new operator.
pub struct BoundaryOperator<'a, K: GreenFunction> {
    boundary: &'a Boundary,
    kernel: K,
    rule: NumericalQuadratureDefinition,
    g: DMatrix<K::T>,
    q: DMatrix<K::T>,
}

impl<'a, K: GreenFunction> BoundaryOperator<'a, K> {
    /// Assemble `G` and `Q`.
    ///
    /// The self terms integrate the regular part of the kernel at the
    /// collocation point, so rules with an abscissa at the element midpoint
    /// (an odd number of points) are rejected.
    pub fn assemble(boundary: &'a Boundary, kernel: K, options: &AssemblyOptions) -> Result<Self> {
        let rule = gauss_legendre_rule(options.quadrature_points())?;
        if rule.points.iter().any(|p| p.abs() < MIDPOINT_TOLERANCE) {
            return Err(BemError::InvalidInput(format!(
                "the {}-point rule samples the element midpoint",
                rule.npoints
            )));
        }
        let n = boundary.number_of_elements();
        debug!(
            "Assembling {n}x{n} influence matrices with {} quadrature points",
            rule.npoints
        );

        let row = |i: usize| -> Vec<InfluenceCoefficients<K::T>> {
            let point = boundary.element(i).midpoint();
            boundary
                .elements()
                .iter()
                .enumerate()
                .map(|(j, element)| {
                    if i == j {
                        self_influence_coefficients(&kernel, element, &rule)
                    } else {
                        influence_coefficients(&kernel, element, point, &rule)
                    }
                })
                .collect()
        };
        let rows: Vec<_> = if options.parallel() {
            (0..n).into_par_iter().map(row).collect()
        } else {
            (0..n).map(row).collect()
        };

        let g = DMatrix::from_fn(n, n, |i, j| rows[i][j].g);
        let mut q = DMatrix::from_fn(n, n, |i, j| rows[i][j].q);
        let c = kernel.log_scale();
        for (i, region) in boundary.regions().iter().enumerate() {
            q[(i, i)] += K::T::from_real(jump(*region) * c);
        }

        Ok(Self {
            boundary,
            kernel,
            rule,
            g,
            q,
        })
    }

    /// The boundary
    pub fn boundary(&self) -> &'a Boundary {
        self.boundary
    }

    /// The kernel
    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    /// Single-layer matrix
    pub fn g(&self) -> &DMatrix<K::T> {
        &self.g
    }

    /// Double-layer matrix, jump included
    pub fn q(&self) -> &DMatrix<K::T> {
        &self.q
    }

    /// Number of elements
    pub fn dim(&self) -> usize {
        self.g.nrows()
    }

    /// Influence coefficients of every element at a point off the boundary.
    pub fn influence_row(&self, point: Point) -> Vec<InfluenceCoefficients<K::T>> {
        self.boundary
            .elements()
            .iter()
            .map(|element| influence_coefficients(&self.kernel, element, point, &self.rule))
            .collect()
    }
}
