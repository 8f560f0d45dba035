//! Version range algebra for security advisories
//!
//! Turns the affected version ranges of security advisories into the minimal
//! set of Composer conflict rules per package.

pub mod advisory;
pub mod component;
pub mod conflicts;
pub mod constraint;
pub mod document;
pub mod error;
mod version;

pub use advisory::Advisory;
pub use component::Component;
pub use conflicts::{build_components, build_conflicts};
pub use constraint::{Boundary, BoundaryError, ConstraintError, Operator, VersionConstraint};
pub use document::{AdvisoryData, AdvisoryFormat, BranchData, LoadOptions, Manifest};
pub use error::{AdvisoryError, DocumentError, Result};
pub use version::{Version, VersionError};
