//! fsbem
//!
//! Boundary element method for two-dimensional potential flow, with the
//! infinite-depth linear free-surface Green's function for wave problems and
//! the plain logarithmic kernel for tanks and general Laplace problems.
#![cfg_attr(feature = "strict", deny(warnings))]
#![warn(missing_docs)]

#[macro_use]
extern crate lazy_static;

pub mod assembly;
pub mod boundary;
pub mod kernel;
pub mod quadrature;
pub mod series;
pub mod shapes;
pub mod solver;
pub mod special;
pub mod traits;
pub mod types;
