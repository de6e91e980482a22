//! Straight boundary elements
use crate::types::{BemError, Point, Result};

/// A directed straight segment of the boundary.
///
/// The unit normal is the unit tangent rotated by -90 degrees. For a domain
/// lying to the left of the traversal direction it points out of the domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element {
    start: Point,
    end: Point,
    midpoint: Point,
    length: f64,
    tangent: Point,
    normal: Point,
}

impl Element {
    /// Create an element from its two endpoints.
    pub fn new(start: Point, end: Point) -> Result<Self> {
        let d = end - start;
        let length = d.norm();
        if !length.is_finite() || length <= 0.0 {
            return Err(BemError::InvalidInput(format!(
                "element from ({}, {}) to ({}, {}) has no length",
                start.x, start.z, end.x, end.z
            )));
        }
        let tangent = d * (1.0 / length);
        Ok(Self {
            start,
            end,
            midpoint: (start + end) * 0.5,
            length,
            tangent,
            normal: Point::new(tangent.z, -tangent.x),
        })
    }

    /// First endpoint
    pub fn start(&self) -> Point {
        self.start
    }

    /// Second endpoint
    pub fn end(&self) -> Point {
        self.end
    }

    /// Midpoint, used as the collocation point of the element
    pub fn midpoint(&self) -> Point {
        self.midpoint
    }

    /// Length
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Half of the length
    pub fn half_length(&self) -> f64 {
        0.5 * self.length
    }

    /// Unit tangent pointing from start to end
    pub fn tangent(&self) -> Point {
        self.tangent
    }

    /// Unit normal
    pub fn normal(&self) -> Point {
        self.normal
    }

    /// Map a local abscissa `s` (measured along the tangent from the midpoint,
    /// `-L/2 <= s <= L/2`) to global coordinates.
    pub fn global_point(&self, s: f64) -> Point {
        self.midpoint + self.tangent * s
    }

    /// Express a global point in the local frame of the element: the first
    /// coordinate runs along the tangent, the second along the normal.
    pub fn local_coordinates(&self, point: Point) -> [f64; 2] {
        let d = point - self.midpoint;
        [d.dot(&self.tangent), d.dot(&self.normal)]
    }
}
