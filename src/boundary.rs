//! Boundaries made of straight elements
mod element;

pub use element::Element;

use crate::types::{BemError, Point, Result};
use log::debug;

/// Region an element belongs to.
///
/// Every element carries exactly one region, so region masks always partition
/// the element indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Mean free surface
    FreeSurface,
    /// Vertical side walls ("depth" sides of a tank or truncated domain)
    Wall,
    /// Sea or tank bottom
    Bottom,
    /// Wetted surface of a floating body
    Body,
    /// Interior lid closing a body at the free surface
    Lid,
}

/// Rigid-body degrees of freedom of a floating body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DegreeOfFreedom {
    /// Horizontal translation
    Sway,
    /// Vertical translation
    Heave,
    /// Rotation about `center`
    Roll {
        /// Centre of rotation
        center: Point,
    },
}

impl DegreeOfFreedom {
    /// Name under which the generalised normal is stored.
    pub fn name(&self) -> &'static str {
        match self {
            DegreeOfFreedom::Sway => "sway",
            DegreeOfFreedom::Heave => "heave",
            DegreeOfFreedom::Roll { .. } => "roll",
        }
    }

    /// Generalised normal component of this motion on an element.
    pub fn generalised_normal(&self, element: &Element) -> f64 {
        let n = element.normal();
        match self {
            DegreeOfFreedom::Sway => n.x,
            DegreeOfFreedom::Heave => n.z,
            DegreeOfFreedom::Roll { center } => {
                let r = element.midpoint() - *center;
                r.x * n.z - r.z * n.x
            }
        }
    }
}

/// An ordered chain of elements with one region tag per element.
#[derive(Debug, Clone)]
pub struct Boundary {
    elements: Vec<Element>,
    regions: Vec<Region>,
    dofs: Vec<(String, Vec<f64>)>,
}

impl Boundary {
    /// Create a boundary from `n + 1` vertices and `n` region tags.
    ///
    /// Element `i` runs from `vertices[i]` to `vertices[i + 1]`. A closed
    /// polygon repeats its first vertex at the end.
    pub fn new(vertices: &[Point], regions: &[Region]) -> Result<Self> {
        if vertices.len() < 2 {
            return Err(BemError::InvalidInput(
                "a boundary needs at least two vertices".to_string(),
            ));
        }
        if regions.len() + 1 != vertices.len() {
            return Err(BemError::InvalidInput(format!(
                "{} vertices need {} region tags, got {}",
                vertices.len(),
                vertices.len() - 1,
                regions.len()
            )));
        }
        let elements = vertices
            .windows(2)
            .map(|v| Element::new(v[0], v[1]))
            .collect::<Result<Vec<_>>>()?;
        debug!("Created boundary with {} elements", elements.len());
        Ok(Self {
            elements,
            regions: regions.to_vec(),
            dofs: vec![],
        })
    }

    /// Concatenate chains of vertices, one region per chain.
    ///
    /// Consecutive chains share their joining vertex: the last vertex of a
    /// chain must equal the first vertex of the next one.
    pub fn from_chains(chains: &[(Vec<Point>, Region)]) -> Result<Self> {
        let mut vertices = Vec::<Point>::new();
        let mut regions = Vec::<Region>::new();
        for (chain, region) in chains {
            if chain.len() < 2 {
                return Err(BemError::InvalidInput(
                    "a chain needs at least two vertices".to_string(),
                ));
            }
            let skip = match vertices.last() {
                Some(last) if last.distance(&chain[0]) <= 1e-12 * (1.0 + last.norm()) => 1,
                Some(_) => {
                    return Err(BemError::InvalidInput(
                        "consecutive chains are not connected".to_string(),
                    ))
                }
                None => 0,
            };
            vertices.extend(chain.iter().skip(skip));
            regions.extend(std::iter::repeat(*region).take(chain.len() - 1));
        }
        Boundary::new(&vertices, &regions)
    }

    /// Number of elements
    pub fn number_of_elements(&self) -> usize {
        self.elements.len()
    }

    /// Elements
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Element `i`
    pub fn element(&self, i: usize) -> &Element {
        &self.elements[i]
    }

    /// Region tags
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Region of element `i`
    pub fn region(&self, i: usize) -> Region {
        self.regions[i]
    }

    /// Element midpoints
    pub fn midpoints(&self) -> Vec<Point> {
        self.elements.iter().map(|e| e.midpoint()).collect()
    }

    /// Element unit normals
    pub fn normals(&self) -> Vec<Point> {
        self.elements.iter().map(|e| e.normal()).collect()
    }

    /// Element lengths
    pub fn lengths(&self) -> Vec<f64> {
        self.elements.iter().map(|e| e.length()).collect()
    }

    /// Total length of the boundary
    pub fn perimeter(&self) -> f64 {
        self.elements.iter().map(|e| e.length()).sum()
    }

    /// Mask of the elements in `region`
    pub fn region_mask(&self, region: Region) -> Vec<bool> {
        self.regions.iter().map(|r| *r == region).collect()
    }

    /// Indices of the elements in `region`
    pub fn indices(&self, region: Region) -> Vec<usize> {
        self.regions
            .iter()
            .enumerate()
            .filter(|(_, r)| **r == region)
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of elements in `region`
    pub fn count(&self, region: Region) -> usize {
        self.regions.iter().filter(|r| **r == region).count()
    }

    /// Check whether the last vertex coincides with the first one.
    pub fn is_closed(&self) -> bool {
        let first = self.elements[0].start();
        let last = self.elements[self.elements.len() - 1].end();
        first.distance(&last) <= 1e-12 * self.perimeter()
    }

    /// Add a rigid-body degree of freedom.
    ///
    /// The generalised normal is evaluated on [Region::Body] elements and is
    /// zero elsewhere. An existing degree of freedom with the same name is
    /// replaced.
    pub fn add_degree_of_freedom(&mut self, dof: DegreeOfFreedom) {
        let values = self
            .elements
            .iter()
            .zip(&self.regions)
            .map(|(e, r)| {
                if *r == Region::Body {
                    dof.generalised_normal(e)
                } else {
                    0.0
                }
            })
            .collect();
        self.insert_dof(dof.name().to_string(), values);
    }

    /// Add a degree of freedom from per-element generalised normal velocities.
    pub fn add_custom_dof(&mut self, name: &str, values: Vec<f64>) -> Result<()> {
        if values.len() != self.elements.len() {
            return Err(BemError::InvalidInput(format!(
                "degree of freedom '{}' has {} values for {} elements",
                name,
                values.len(),
                self.elements.len()
            )));
        }
        self.insert_dof(name.trim().to_lowercase(), values);
        Ok(())
    }

    fn insert_dof(&mut self, name: String, values: Vec<f64>) {
        if let Some(entry) = self.dofs.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = values;
        } else {
            self.dofs.push((name, values));
        }
    }

    /// Degrees of freedom in insertion order
    pub fn dofs(&self) -> &[(String, Vec<f64>)] {
        &self.dofs
    }

    /// Generalised normal of a named degree of freedom
    pub fn dof(&self, name: &str) -> Option<&[f64]> {
        self.dofs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_slice())
    }

    /// Number of degrees of freedom
    pub fn number_of_dofs(&self) -> usize {
        self.dofs.len()
    }
}
