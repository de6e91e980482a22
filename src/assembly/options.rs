//! Assembly options

/// Options for assembling influence matrices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblyOptions {
    /// Number of Gauss-Legendre points per element
    quadrature_points: usize,
    /// Assemble rows in parallel
    parallel: bool,
}

impl Default for AssemblyOptions {
    fn default() -> Self {
        Self {
            quadrature_points: 4,
            parallel: true,
        }
    }
}

impl AssemblyOptions {
    /// Number of Gauss-Legendre points per element
    pub fn quadrature_points(&self) -> usize {
        self.quadrature_points
    }

    /// Set the number of Gauss-Legendre points per element
    pub fn set_quadrature_points(&mut self, npoints: usize) {
        self.quadrature_points = npoints;
    }

    /// Whether rows are assembled in parallel
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Enable or disable parallel assembly
    pub fn set_parallel(&mut self, parallel: bool) {
        self.parallel = parallel;
    }
}
