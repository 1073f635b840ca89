//! Column model elements

mod discretization;
mod support;

pub use discretization::Discretization;
pub use support::BoundaryCondition;
