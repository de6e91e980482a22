//! Quadrature rules
mod adaptive;
mod gauss_legendre;
pub mod types;

pub use adaptive::adaptive_gauss_kronrod;
pub use gauss_legendre::{available_rules, gauss_legendre_rule};
pub use types::{NumericalQuadratureDefinition, QuadratureError};
