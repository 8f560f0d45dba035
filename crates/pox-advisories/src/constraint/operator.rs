//! Operator types for range boundaries

use std::fmt;
use thiserror::Error;

/// Comparison operators a boundary can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Less than (<)
    LessThan,
    /// Less than or equal (<=)
    LessThanOrEqual,
    /// Equal (=)
    Equal,
    /// Greater than or equal (>=)
    GreaterThanOrEqual,
    /// Greater than (>)
    GreaterThan,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid operator: {0}")]
pub struct InvalidOperatorError(pub String);

impl Operator {
    /// Parse operator from string
    pub fn from_str(s: &str) -> Result<Self, InvalidOperatorError> {
        match s {
            "<" => Ok(Operator::LessThan),
            "<=" => Ok(Operator::LessThanOrEqual),
            "=" => Ok(Operator::Equal),
            ">=" => Ok(Operator::GreaterThanOrEqual),
            ">" => Ok(Operator::GreaterThan),
            _ => Err(InvalidOperatorError(s.to_string())),
        }
    }

    /// Get the string representation of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::LessThan => "<",
            Operator::LessThanOrEqual => "<=",
            Operator::Equal => "=",
            Operator::GreaterThanOrEqual => ">=",
            Operator::GreaterThan => ">",
        }
    }

    /// Whether the version the operator is attached to satisfies the bound itself
    pub fn is_inclusive(&self) -> bool {
        matches!(
            self,
            Operator::LessThanOrEqual | Operator::Equal | Operator::GreaterThanOrEqual
        )
    }

    /// Lower bound operator with the given inclusivity
    pub fn lower(inclusive: bool) -> Self {
        if inclusive {
            Operator::GreaterThanOrEqual
        } else {
            Operator::GreaterThan
        }
    }

    /// Upper bound operator with the given inclusivity
    pub fn upper(inclusive: bool) -> Self {
        if inclusive {
            Operator::LessThanOrEqual
        } else {
            Operator::LessThan
        }
    }

    /// Get all supported operators
    pub fn supported_operators() -> &'static [&'static str] {
        &["<", "<=", "=", ">=", ">"]
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for op in Operator::supported_operators() {
            assert_eq!(Operator::from_str(op).unwrap().as_str(), *op);
        }
    }

    #[test]
    fn test_rejects_unknown() {
        for op in ["", "==", "!=", "<>", "=>", "=<", "~", "^"] {
            assert_eq!(Operator::from_str(op), Err(InvalidOperatorError(op.to_string())));
        }
    }

    #[test]
    fn test_is_inclusive() {
        assert!(!Operator::LessThan.is_inclusive());
        assert!(Operator::LessThanOrEqual.is_inclusive());
        assert!(Operator::Equal.is_inclusive());
        assert!(Operator::GreaterThanOrEqual.is_inclusive());
        assert!(!Operator::GreaterThan.is_inclusive());
    }

    #[test]
    fn test_lower_and_upper() {
        assert_eq!(Operator::lower(true), Operator::GreaterThanOrEqual);
        assert_eq!(Operator::lower(false), Operator::GreaterThan);
        assert_eq!(Operator::upper(true), Operator::LessThanOrEqual);
        assert_eq!(Operator::upper(false), Operator::LessThan);
    }
}
