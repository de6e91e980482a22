//! Assembly of influence coefficients and matrices
mod common;
mod influence;
mod operator;
mod options;

pub(crate) use common::same_instance;
pub use influence::{influence_coefficients, self_influence_coefficients, InfluenceCoefficients};
pub use operator::{jump, BoundaryOperator};
pub use options::AssemblyOptions;
