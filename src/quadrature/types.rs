//! Type definitions.

/// Quadrature error
#[derive(thiserror::Error, Debug)]
pub enum QuadratureError {
    /// Rule not found
    #[error("No Gauss-Legendre rule with {0} points")]
    RuleNotFound(usize),
}

/// Definition of a numerical quadrature rule on the reference interval `[-1, 1]`.
#[derive(Debug, Clone)]
pub struct NumericalQuadratureDefinition {
    /// Highest polynomial degree integrated exactly.
    pub order: usize,

    /// The number of points of the quadrature rule.
    pub npoints: usize,

    /// The weights of the quadrature rule.
    pub weights: Vec<f64>,

    /// The abscissae of the quadrature rule.
    pub points: Vec<f64>,
}
