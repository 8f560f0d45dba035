//! Version range constraints
//!
//! Only ranges like `>=1.2.3,<4.5.6`, `<1.2` or `>1.2` are understood. Anything
//! else is kept verbatim as a complex constraint that never compares with
//! anything, itself included.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::fmt;
use thiserror::Error;

use super::{Boundary, Operator};
use crate::version::Version;

lazy_static! {
    static ref CLOSED_RANGE_RE: Regex = Regex::new(
        r"^>(=?)(?-u:\s)*((?:[0-9]+\.)*[0-9]+)(?-u:\s)*,(?-u:\s)*<(=?)(?-u:\s)*((?:[0-9]+\.)*[0-9]+)$"
    )
    .unwrap();
    static ref LEFT_OPEN_RANGE_RE: Regex =
        Regex::new(r"^<(=?)(?-u:\s)*((?:[0-9]+\.)*[0-9]+)$").unwrap();
    static ref RIGHT_OPEN_RANGE_RE: Regex =
        Regex::new(r"^>(=?)(?-u:\s)*((?:[0-9]+\.)*[0-9]+)$").unwrap();
}

/// Error type for constraint operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstraintError {
    #[error("Cannot merge version constraint \"{left}\" with version constraint \"{right}\"")]
    CannotMerge { left: String, right: String },
}

/// A parsed version range
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VersionConstraint {
    /// At most one lower (`>`/`>=`) and one upper (`<`/`<=`) boundary
    Simple {
        lower: Option<Boundary>,
        upper: Option<Boundary>,
    },
    /// A constraint string that could not be decomposed into boundaries
    Complex(String),
}

impl VersionConstraint {
    /// Parse a constraint string. Unrecognized input becomes a complex constraint.
    pub fn parse(constraint: &str) -> Self {
        Self::parse_simple(constraint)
            .unwrap_or_else(|| VersionConstraint::Complex(constraint.to_string()))
    }

    fn parse_simple(constraint: &str) -> Option<Self> {
        if let Some(caps) = CLOSED_RANGE_RE.captures(constraint) {
            return Some(VersionConstraint::Simple {
                lower: Some(boundary(&caps, 1, 2, Operator::lower)?),
                upper: Some(boundary(&caps, 3, 4, Operator::upper)?),
            });
        }

        if let Some(caps) = LEFT_OPEN_RANGE_RE.captures(constraint) {
            return Some(VersionConstraint::Simple {
                lower: None,
                upper: Some(boundary(&caps, 1, 2, Operator::upper)?),
            });
        }

        if let Some(caps) = RIGHT_OPEN_RANGE_RE.captures(constraint) {
            return Some(VersionConstraint::Simple {
                lower: Some(boundary(&caps, 1, 2, Operator::lower)?),
                upper: None,
            });
        }

        None
    }

    /// Check if this constraint is made of plain boundaries
    pub fn is_simple(&self) -> bool {
        matches!(self, VersionConstraint::Simple { .. })
    }

    /// Get the normalized constraint string.
    ///
    /// Complex constraints return their original text, simple ones are rebuilt
    /// from their boundaries.
    pub fn as_string(&self) -> String {
        match self {
            VersionConstraint::Complex(raw) => raw.clone(),
            VersionConstraint::Simple { lower, upper } => [lower, upper]
                .into_iter()
                .flatten()
                .map(Boundary::as_string)
                .collect::<Vec<_>>()
                .join(","),
        }
    }

    /// Get the lower boundary, `None` if unbound or complex
    pub fn lower_boundary(&self) -> Option<&Boundary> {
        match self {
            VersionConstraint::Simple { lower, .. } => lower.as_ref(),
            VersionConstraint::Complex(_) => None,
        }
    }

    /// Get the upper boundary, `None` if unbound or complex
    pub fn upper_boundary(&self) -> Option<&Boundary> {
        match self {
            VersionConstraint::Simple { upper, .. } => upper.as_ref(),
            VersionConstraint::Complex(_) => None,
        }
    }

    /// Get the lower bound, `None` if unbound or complex
    pub fn lower_bound(&self) -> Option<&Version> {
        self.lower_boundary().map(Boundary::version)
    }

    /// Get the upper bound, `None` if unbound or complex
    pub fn upper_bound(&self) -> Option<&Version> {
        self.upper_boundary().map(Boundary::version)
    }

    /// Check if the lower bound version itself matches. False when there is no lower bound.
    pub fn is_lower_bound_included(&self) -> bool {
        self.lower_boundary().is_some_and(Boundary::limit_included)
    }

    /// Check if the upper bound version itself matches. False when there is no upper bound.
    pub fn is_upper_bound_included(&self) -> bool {
        self.upper_boundary().is_some_and(Boundary::limit_included)
    }

    /// Check if every version matched by `other` is also matched by this constraint.
    ///
    /// Always false when either side is complex.
    pub fn contains(&self, other: &VersionConstraint) -> bool {
        self.is_simple()
            && other.is_simple()
            && self.contains_lower_bound(other.lower_boundary())
            && self.contains_upper_bound(other.upper_boundary())
    }

    fn contains_lower_bound(&self, other_lower: Option<&Boundary>) -> bool {
        let Some(lower) = self.lower_boundary() else {
            return true;
        };
        let Some(other_lower) = other_lower else {
            return false;
        };

        if lower.limit_included() == other_lower.limit_included() || lower.limit_included() {
            return other_lower.version().is_greater_or_equal_than(lower.version());
        }

        other_lower.version().is_greater_than(lower.version())
    }

    fn contains_upper_bound(&self, other_upper: Option<&Boundary>) -> bool {
        let Some(upper) = self.upper_boundary() else {
            return true;
        };
        let Some(other_upper) = other_upper else {
            return false;
        };

        if upper.limit_included() == other_upper.limit_included() || upper.limit_included() {
            return upper.version().is_greater_or_equal_than(other_upper.version());
        }

        upper.version().is_greater_than(other_upper.version())
    }

    /// Check if this constraint partially overlaps `other`.
    ///
    /// Containment is not overlap. The check is not symmetric: a complex
    /// constraint never overlaps a simple one, so callers test both directions.
    pub fn overlaps_with(&self, other: &VersionConstraint) -> bool {
        if !self.is_simple() && other.is_simple() {
            return false;
        }

        if self.contains(other) || other.contains(self) {
            return false;
        }

        self.strictly_contains_other_bound(other.lower_bound())
            ^ self.strictly_contains_other_bound(other.upper_bound())
    }

    /// Check if `bound` lies strictly between this constraint's own bounds
    fn strictly_contains_other_bound(&self, bound: Option<&Version>) -> bool {
        let (VersionConstraint::Simple { lower, upper }, Some(bound)) = (self, bound) else {
            return false;
        };

        let above_lower = lower
            .as_ref()
            .map_or(true, |lower| bound.is_greater_than(lower.version()));
        let below_upper = upper
            .as_ref()
            .map_or(true, |upper| upper.version().is_greater_than(bound));

        above_lower && below_upper
    }

    /// Check if the two constraints can be replaced by a single one
    pub fn can_merge_with(&self, other: &VersionConstraint) -> bool {
        self.contains(other)
            || other.contains(self)
            || self.overlaps_with(other)
            || other.overlaps_with(self)
    }

    /// Merge with another constraint into one matching the union of both.
    ///
    /// Fails with [`ConstraintError::CannotMerge`] unless
    /// [`can_merge_with`](Self::can_merge_with) holds.
    pub fn merge_with(&self, other: &VersionConstraint) -> Result<VersionConstraint, ConstraintError> {
        if self.contains(other) {
            return Ok(self.clone());
        }

        if other.contains(self) {
            return Ok(other.clone());
        }

        if self.overlaps_with(other) {
            return self.merge_with_overlapping(other);
        }

        if other.overlaps_with(self) {
            return other.merge_with_overlapping(self);
        }

        Err(self.cannot_merge(other))
    }

    fn merge_with_overlapping(&self, other: &VersionConstraint) -> Result<VersionConstraint, ConstraintError> {
        if !self.overlaps_with(other) {
            return Err(self.cannot_merge(other));
        }

        let (lower, upper) = if self.strictly_contains_other_bound(other.lower_bound()) {
            (self.lower_boundary(), other.upper_boundary())
        } else {
            (other.lower_boundary(), self.upper_boundary())
        };

        Ok(VersionConstraint::Simple {
            lower: lower.cloned(),
            upper: upper.cloned(),
        })
    }

    fn cannot_merge(&self, other: &VersionConstraint) -> ConstraintError {
        ConstraintError::CannotMerge {
            left: self.as_string(),
            right: other.as_string(),
        }
    }
}

fn boundary(
    caps: &Captures<'_>,
    inclusive_group: usize,
    version_group: usize,
    operator: fn(bool) -> Operator,
) -> Option<Boundary> {
    let version = Version::parse(&caps[version_group]).ok()?;
    Some(Boundary::new(operator(!caps[inclusive_group].is_empty()), version))
}

impl From<&str> for VersionConstraint {
    fn from(constraint: &str) -> Self {
        VersionConstraint::parse(constraint)
    }
}

impl fmt::Display for VersionConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
