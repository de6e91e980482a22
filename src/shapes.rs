//! Definition of various test shapes.
use crate::boundary::{Boundary, DegreeOfFreedom, Region};
use crate::types::{BemError, Point, Result};
use nalgebra::{DMatrix, DVector};
use std::f64::consts::PI;

/// Coordinates smaller than this are snapped to zero, so that vertices that
/// should lie on the free surface do.
const SNAP: f64 = 1e-14;

fn snap(x: f64) -> f64 {
    if x.abs() < SNAP {
        0.0
    } else {
        x
    }
}

/// Points `start + (end - start) * i / n` for `i = 0..=n`.
fn segment(start: Point, end: Point, n: usize) -> Vec<Point> {
    (0..=n)
        .map(|i| start + (end - start) * (i as f64 / n as f64))
        .collect()
}

/// Sway, heave and roll about the origin.
fn add_rigid_body_dofs(boundary: &mut Boundary) {
    boundary.add_degree_of_freedom(DegreeOfFreedom::Sway);
    boundary.add_degree_of_freedom(DegreeOfFreedom::Heave);
    boundary.add_degree_of_freedom(DegreeOfFreedom::Roll {
        center: Point::new(0.0, 0.0),
    });
}

/// Create a rectangular tank of width `width` and still-water depth `depth`.
///
/// The boundary runs counter-clockwise from the top of the left wall: `ny`
/// elements down the left wall, `nx` along the bottom, `ny` up the right wall
/// and `nz` back along the free surface. The tank is centred on `x = 0` with
/// its free surface at `z = 0`.
pub fn rectangular_tank(
    width: f64,
    depth: f64,
    nx: usize,
    ny: usize,
    nz: usize,
) -> Result<Boundary> {
    if width <= 0.0 || depth <= 0.0 || nx == 0 || ny == 0 || nz == 0 {
        return Err(BemError::InvalidInput(format!(
            "invalid tank {width}x{depth} with {nx}, {ny}, {nz} elements"
        )));
    }
    let top_left = Point::new(-0.5 * width, 0.0);
    let bottom_left = Point::new(-0.5 * width, -depth);
    let bottom_right = Point::new(0.5 * width, -depth);
    let top_right = Point::new(0.5 * width, 0.0);
    Boundary::from_chains(&[
        (segment(top_left, bottom_left, ny), Region::Wall),
        (segment(bottom_left, bottom_right, nx), Region::Bottom),
        (segment(bottom_right, top_right, ny), Region::Wall),
        (segment(top_right, top_left, nz), Region::FreeSurface),
    ])
}

/// Create the unit square `[0, 1] x [0, 1]` with `n` elements per side.
///
/// The boundary runs counter-clockwise from the origin. The bottom side is
/// tagged [Region::Bottom], the top side [Region::FreeSurface] and the
/// vertical sides [Region::Wall].
pub fn unit_square(n: usize) -> Result<Boundary> {
    if n == 0 {
        return Err(BemError::InvalidInput(
            "the unit square needs at least one element per side".to_string(),
        ));
    }
    let corners = [
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(0.0, 1.0),
    ];
    let regions = [Region::Bottom, Region::Wall, Region::FreeSurface, Region::Wall];
    let chains = (0..4)
        .map(|k| (segment(corners[k], corners[(k + 1) % 4], n), regions[k]))
        .collect::<Vec<_>>();
    Boundary::from_chains(&chains)
}

/// A half-immersed circular cylinder floating in the free surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingCylinder {
    /// Radius
    pub radius: f64,
    /// Number of elements on the wetted surface
    pub elements: usize,
    /// Close the body with a lid on `z = 0`
    pub lid: bool,
}

impl FloatingCylinder {
    /// Cylinder without a lid.
    pub fn new(radius: f64, elements: usize) -> Self {
        Self {
            radius,
            elements,
            lid: false,
        }
    }

    /// Same cylinder with or without a lid.
    pub fn with_lid(self, lid: bool) -> Self {
        Self { lid, ..self }
    }

    /// Number of lid elements, chosen so that they are no longer than the
    /// elements of the wetted surface.
    pub fn lid_elements(&self) -> usize {
        if self.lid {
            ((2.0 * self.elements as f64 / PI).floor() as usize).max(1)
        } else {
            0
        }
    }

    /// Displaced mass per unit length
    pub fn mass(&self, density: f64) -> f64 {
        0.5 * density * PI * self.radius * self.radius
    }

    /// Boundary with sway, heave and roll (about the origin) degrees of
    /// freedom.
    ///
    /// The wetted surface runs from `(R, 0)` through `(0, -R)` to `(-R, 0)`.
    /// The lid, if any, continues from `(-R, 0)` back to `(R, 0)`.
    pub fn boundary(&self) -> Result<Boundary> {
        self.check()?;
        let mut chains = vec![(self.hull(), Region::Body)];
        if self.lid {
            chains.push((
                segment(
                    Point::new(-self.radius, 0.0),
                    Point::new(self.radius, 0.0),
                    self.lid_elements(),
                ),
                Region::Lid,
            ));
        }
        let mut boundary = Boundary::from_chains(&chains)?;
        add_rigid_body_dofs(&mut boundary);
        Ok(boundary)
    }

    /// Cylinder in a closed, truncated fluid domain of half width
    /// `half_width` and depth `depth`, for the plain Laplace kernel.
    ///
    /// Starting at `(-R, 0)` the boundary runs along the free surface to
    /// `x = -half_width`, down a [Region::Wall], along the [Region::Bottom],
    /// up the far wall, back along the free surface to `(R, 0)` and around the
    /// wetted surface. The free surface, walls and bottom are divided
    /// uniformly into elements no longer than `element_size`.
    pub fn truncated_domain(
        &self,
        half_width: f64,
        depth: f64,
        element_size: f64,
    ) -> Result<Boundary> {
        self.check()?;
        if self.lid {
            return Err(BemError::InvalidInput(
                "a truncated domain has no interior lid".to_string(),
            ));
        }
        let r = self.radius;
        if half_width.is_nan()
            || half_width <= r
            || depth.is_nan()
            || depth <= r
            || !element_size.is_finite()
            || element_size <= 0.0
        {
            return Err(BemError::InvalidInput(format!(
                "invalid truncated domain {half_width}x{depth} with element size {element_size}"
            )));
        }
        let count = |length: f64| (length / element_size).ceil() as usize;
        let nf = count(half_width - r);
        let nd = count(depth);
        let nb = count(2.0 * half_width);

        let surface_left = Point::new(-half_width, 0.0);
        let bottom_left = Point::new(-half_width, -depth);
        let bottom_right = Point::new(half_width, -depth);
        let surface_right = Point::new(half_width, 0.0);
        let mut boundary = Boundary::from_chains(&[
            (
                segment(Point::new(-r, 0.0), surface_left, nf),
                Region::FreeSurface,
            ),
            (segment(surface_left, bottom_left, nd), Region::Wall),
            (segment(bottom_left, bottom_right, nb), Region::Bottom),
            (segment(bottom_right, surface_right, nd), Region::Wall),
            (
                segment(surface_right, Point::new(r, 0.0), nf),
                Region::FreeSurface,
            ),
            (self.hull(), Region::Body),
        ])?;
        add_rigid_body_dofs(&mut boundary);
        Ok(boundary)
    }

    fn check(&self) -> Result<()> {
        if self.radius.is_nan() || self.radius <= 0.0 || self.elements < 2 {
            return Err(BemError::InvalidInput(format!(
                "invalid cylinder of radius {} with {} elements",
                self.radius, self.elements
            )));
        }
        Ok(())
    }

    /// Wetted surface from `(R, 0)` through `(0, -R)` to `(-R, 0)`.
    fn hull(&self) -> Vec<Point> {
        let n = self.elements;
        (0..=n)
            .map(|i| {
                let t = -PI * i as f64 / n as f64;
                Point::new(snap(self.radius * t.cos()), snap(self.radius * t.sin()))
            })
            .collect()
    }

    /// Rigid-body inertia matrix in sway, heave and roll order.
    ///
    /// The roll inertia is that of a uniform disc, `m R^2 / 2`.
    pub fn inertia_matrix(&self, density: f64) -> DMatrix<f64> {
        let m = self.mass(density);
        DMatrix::from_diagonal(&DVector::from_vec(vec![
            m,
            m,
            0.5 * m * self.radius * self.radius,
        ]))
    }

    /// Hydrostatic stiffness matrix in sway, heave and roll order.
    ///
    /// Only heave has a restoring force, `2 R rho g`.
    pub fn stiffness_matrix(&self, density: f64, gravity: f64) -> DMatrix<f64> {
        let mut c = DMatrix::zeros(3, 3);
        c[(1, 1)] = 2.0 * self.radius * density * gravity;
        c
    }
}
