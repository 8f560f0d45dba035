//! Boundary and range types for version constraints

mod boundary;
mod operator;
mod version_constraint;

pub use boundary::{Boundary, BoundaryError};
pub use operator::{InvalidOperatorError, Operator};
pub use version_constraint::{ConstraintError, VersionConstraint};
