//! Types specific to fsbem

use crate::quadrature::QuadratureError;
use nalgebra::ComplexField;
use std::ops::{Add, Mul, Neg, Sub};

pub use cauchy::c64;

/// Scalar type of influence matrices and boundary solutions.
///
/// Laplace problems are assembled in `f64`, free-surface problems in [c64].
pub trait BemScalar: ComplexField<RealField = f64> + Copy + Send + Sync {}

impl<T: ComplexField<RealField = f64> + Copy + Send + Sync> BemScalar for T {}

/// A point (x, z) in the vertical plane. `z` points upwards and the mean
/// free surface is `z = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub z: f64,
}

impl Point {
    /// Create a point
    pub const fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }

    /// Euclidean norm of the position vector
    pub fn norm(&self) -> f64 {
        self.x.hypot(self.z)
    }

    /// Dot product
    pub fn dot(&self, other: &Point) -> f64 {
        self.x * other.x + self.z * other.z
    }

    /// Distance to another point
    pub fn distance(&self, other: &Point) -> f64 {
        (*self - *other).norm()
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.z + rhs.z)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.z - rhs.z)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.z * rhs)
    }
}

impl Neg for Point {
    type Output = Point;
    fn neg(self) -> Point {
        Point::new(-self.x, -self.z)
    }
}

/// Physical constants of a wave problem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveParameters {
    /// Acceleration of gravity
    pub gravity: f64,
    /// Fluid density
    pub density: f64,
}

impl Default for WaveParameters {
    fn default() -> Self {
        Self {
            gravity: 9.81,
            density: 1.0,
        }
    }
}

/// Generic error type
#[derive(thiserror::Error, Debug)]
pub enum BemError {
    /// The system matrix is singular or numerically singular.
    #[error("Singular system matrix: {0}")]
    SingularMatrix(String),
    /// The eigenvalue decomposition did not converge.
    #[error("Eigenvalue solver error: {0}")]
    EigenSolver(String),
    /// Two solutions cannot be combined.
    #[error("Mismatched operands: {0}")]
    Mismatch(String),
    /// Invalid input data.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// No quadrature rule with the requested number of points.
    #[error(transparent)]
    Quadrature(#[from] QuadratureError),
}

/// Result type
pub type Result<T> = std::result::Result<T, BemError>;

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_point_arithmetic() {
        let a = Point::new(1.0, -2.0);
        let b = Point::new(4.0, 2.0);
        assert_eq!(b - a, Point::new(3.0, 4.0));
        assert_relative_eq!((b - a).norm(), 5.0);
        assert_relative_eq!(a.dot(&b), 0.0);
        assert_eq!(-a * 2.0, Point::new(-2.0, 4.0));
        assert_relative_eq!(a.distance(&b), 5.0);
    }
}
