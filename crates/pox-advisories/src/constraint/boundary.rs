//! Boundary type for range endpoints

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::Operator;
use crate::version::{Version, VersionError};

lazy_static! {
    static ref BOUNDARY_RE: Regex = Regex::new(r"^(<=|<|=|>=|>)(?-u:\s)*((?:[0-9]+\.)*[0-9]+)$").unwrap();
}

/// Error type for boundary parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoundaryError {
    #[error("The given string \"{0}\" is not a valid boundary")]
    InvalidBoundaryFormat(String),
    #[error(transparent)]
    Version(#[from] VersionError),
}

/// A one-sided inequality such as `>=1.2.3`, used as a range endpoint
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Boundary {
    operator: Operator,
    version: Version,
}

impl Boundary {
    /// Create a new boundary
    pub fn new(operator: Operator, version: Version) -> Self {
        Boundary { operator, version }
    }

    /// Parse a boundary string
    pub fn parse(boundary: &str) -> Result<Self, BoundaryError> {
        let caps = BOUNDARY_RE
            .captures(boundary)
            .ok_or_else(|| BoundaryError::InvalidBoundaryFormat(boundary.to_string()))?;

        let operator = Operator::from_str(&caps[1])
            .map_err(|_| BoundaryError::InvalidBoundaryFormat(boundary.to_string()))?;

        Ok(Boundary::new(operator, Version::parse(&caps[2])?))
    }

    /// Get the operator
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Get the version
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Check if the version itself satisfies this boundary
    pub fn limit_included(&self) -> bool {
        self.operator.is_inclusive()
    }

    /// Check if the two boundaries meet at the same version with complementary inclusivity.
    ///
    /// `<1` is adjacent to `=1` and `>=1`, `<=1` and `=1` are adjacent to `>1`.
    pub fn adjacent_to(&self, other: &Boundary) -> bool {
        if !self.version.equal_to(&other.version) {
            return false;
        }

        is_adjacent_pair(self.operator, other.operator)
            || is_adjacent_pair(other.operator, self.operator)
    }

    /// Get the normalized string representation
    pub fn as_string(&self) -> String {
        format!("{}{}", self.operator.as_str(), self.version)
    }
}

fn is_adjacent_pair(left: Operator, right: Operator) -> bool {
    use Operator::*;

    matches!(
        (left, right),
        (LessThanOrEqual, GreaterThan)
            | (LessThan, Equal)
            | (LessThan, GreaterThanOrEqual)
            | (Equal, GreaterThan)
    )
}

impl FromStr for Boundary {
    type Err = BoundaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Boundary::parse(s)
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn b(s: &str) -> Boundary {
        Boundary::parse(s).unwrap()
    }

    #[test]
    fn test_rejects_invalid_boundaries() {
        for input in [
            "", "foo", "1", "1.2.3", "1.2.3=", "1.2.3<=", "1.2.3<", "1.2.3>", "1.2.3>=", "<", ">",
            "<=", ">=", "=", "==", "><", "<>", "=>", "=<", "=>1.2", "=<1.2", "1.2", " <1.2",
            "<1.2 ", "<1a",
        ] {
            assert_eq!(
                Boundary::parse(input),
                Err(BoundaryError::InvalidBoundaryFormat(input.to_string())),
                "parsing {:?}",
                input
            );
        }
    }

    #[test]
    fn test_rejects_non_ascii_input() {
        for input in ["<\u{661}\u{662}", ">=1.\u{663}", "<\u{a0}1", ">\u{2003}1.2", "=\u{ff11}"] {
            assert_eq!(
                Boundary::parse(input),
                Err(BoundaryError::InvalidBoundaryFormat(input.to_string())),
                "parsing {:?}",
                input
            );
        }
    }

    #[test]
    fn test_normalizes_boundary_string() {
        for (input, expected) in [
            (">1.2.3", ">1.2.3"),
            (">=1.2.3", ">=1.2.3"),
            ("=1.2.3", "=1.2.3"),
            ("<=1.2.3", "<=1.2.3"),
            ("<1.2.3", "<1.2.3"),
            (">1.2.3.0", ">1.2.3"),
            ("<=1.2.3.0", "<=1.2.3"),
            (">1.0", ">1"),
            ("=1.0", "=1"),
            ("<1.0", "<1"),
            (">  1.2.3", ">1.2.3"),
            (">=  1.2.3", ">=1.2.3"),
            ("=  1.2.3", "=1.2.3"),
            ("<=  1.2.3", "<=1.2.3"),
            ("<  1.2.3", "<1.2.3"),
            ("<\t1.2.3", "<1.2.3"),
            (">=\r\n1.2.3", ">=1.2.3"),
        ] {
            assert_eq!(b(input).as_string(), expected, "parsing {:?}", input);
            assert_eq!(b(input).to_string(), expected);
        }
    }

    #[test]
    fn test_limit_included() {
        assert!(!b("<1").limit_included());
        assert!(b("<=1").limit_included());
        assert!(b("=1").limit_included());
        assert!(b(">=1").limit_included());
        assert!(!b(">1").limit_included());
    }

    #[test]
    fn test_adjacent_boundaries() {
        for (left, right) in [("<1", "=1"), ("<1", ">=1"), ("<=1", ">1"), ("=1", ">1"), ("<1.0", ">=1")] {
            assert!(b(left).adjacent_to(&b(right)), "{} adjacent to {}", left, right);
            assert!(b(right).adjacent_to(&b(left)), "{} adjacent to {}", right, left);
        }
    }

    #[test]
    fn test_non_adjacent_boundaries() {
        for (left, right) in [
            ("<1", "<1"),
            ("<1", "<=1"),
            ("<=1", "<=1"),
            ("<=1", ">=1"),
            ("=1", "=1"),
            ("=1", "<=1"),
            ("=1", ">=1"),
            ("<1", "=1.1"),
            ("<1", ">=1.1"),
            ("<=1", ">1.1"),
            ("=1", ">1.1"),
        ] {
            assert!(!b(left).adjacent_to(&b(right)), "{} not adjacent to {}", left, right);
            assert!(!b(right).adjacent_to(&b(left)), "{} not adjacent to {}", right, left);
        }
    }
}
