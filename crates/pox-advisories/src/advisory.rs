//! A single security advisory

use crate::constraint::VersionConstraint;
use crate::document::AdvisoryData;

const COMPOSER_REFERENCE_PREFIX: &str = "composer://";

/// One vulnerability record: a package name plus one affected range per branch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advisory {
    component_name: String,
    branch_constraints: Vec<VersionConstraint>,
}

impl Advisory {
    pub fn new(component_name: impl Into<String>, branch_constraints: Vec<VersionConstraint>) -> Self {
        Self {
            component_name: component_name.into(),
            branch_constraints,
        }
    }

    /// Build an advisory from its decoded document.
    ///
    /// Each branch's versions are joined with `,` and parsed as one constraint.
    pub fn from_data(data: AdvisoryData) -> Self {
        let component_name = data
            .reference
            .strip_prefix(COMPOSER_REFERENCE_PREFIX)
            .unwrap_or(data.reference.as_str())
            .to_string();

        let branch_constraints = data
            .branches
            .values()
            .map(|branch| VersionConstraint::parse(&branch.versions.join(",")))
            .collect();

        Self::new(component_name, branch_constraints)
    }

    pub fn component_name(&self) -> &str {
        &self.component_name
    }

    pub fn constraints(&self) -> &[VersionConstraint] {
        &self.branch_constraints
    }

    /// All branch constraints joined with `|`, `None` when that is empty
    pub fn constraint(&self) -> Option<String> {
        let constraint = self
            .branch_constraints
            .iter()
            .map(VersionConstraint::as_string)
            .collect::<Vec<_>>()
            .join("|");

        if constraint.is_empty() {
            None
        } else {
            Some(constraint)
        }
    }
}

impl From<AdvisoryData> for Advisory {
    fn from(data: AdvisoryData) -> Self {
        Advisory::from_data(data)
    }
}
