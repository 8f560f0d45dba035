//! Per-package aggregation of advisory ranges

use crate::advisory::Advisory;
use crate::constraint::{ConstraintError, VersionConstraint};

/// A package together with every advisory that references it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    name: String,
    advisories: Vec<Advisory>,
}

impl Component {
    pub fn new(name: impl Into<String>, advisories: Vec<Advisory>) -> Self {
        Self {
            name: name.into(),
            advisories,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn advisories(&self) -> &[Advisory] {
        &self.advisories
    }

    /// Collect all branch constraints and merge them until no two of them can be merged.
    ///
    /// Complex constraints never merge, so the list is reduced pairwise rather
    /// than sorted and swept. Every merge shortens the list, which bounds the loop.
    pub fn deduplicated_constraints(&self) -> Result<Vec<VersionConstraint>, ConstraintError> {
        let mut constraints: Vec<VersionConstraint> = self
            .advisories
            .iter()
            .flat_map(|advisory| advisory.constraints().iter().cloned())
            .collect();

        while let Some((i, j)) = find_mergeable_pair(&constraints) {
            let other = constraints.remove(j);
            let merged = constraints[i].merge_with(&other)?;

            log::trace!(
                "{}: merged \"{}\" and \"{}\" into \"{}\"",
                self.name,
                constraints[i],
                other,
                merged
            );

            constraints[i] = merged;
        }

        Ok(constraints)
    }

    /// The conflict rule for this package: the deduplicated ranges joined with `|`.
    ///
    /// Constraints rendering to an empty string are dropped. An empty result
    /// means there is nothing to conflict with.
    pub fn conflict_constraint(&self) -> Result<String, ConstraintError> {
        Ok(self
            .deduplicated_constraints()?
            .iter()
            .map(VersionConstraint::as_string)
            .filter(|constraint| !constraint.is_empty())
            .collect::<Vec<_>>()
            .join("|"))
    }
}

/// First pair `(i, j)` with `i < j` that can be merged
fn find_mergeable_pair(constraints: &[VersionConstraint]) -> Option<(usize, usize)> {
    for (i, left) in constraints.iter().enumerate() {
        for (j, right) in constraints.iter().enumerate().skip(i + 1) {
            if left.can_merge_with(right) {
                return Some((i, j));
            }
        }
    }
    None
}
