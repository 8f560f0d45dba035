//! Numeric dot-separated versions such as `1.0`, `1.0.0.0` or `2.0.1.3.2`

use lazy_static::lazy_static;
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

lazy_static! {
    static ref VERSION_RE: Regex = Regex::new(r"^(?:[0-9]+\.)*[0-9]+$").unwrap();
}

/// Error type for version parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("Given version \"{0}\" is not a valid version string")]
    InvalidVersionFormat(String),
}

/// A simple numeric version.
///
/// Trailing zero components are dropped on construction, so `1`, `1.0` and
/// `1.0.0` are the same value. A bare `0` keeps its single component.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    numbers: Vec<u64>,
}

impl Version {
    /// Parse a version string
    pub fn parse(version: &str) -> Result<Self, VersionError> {
        if !VERSION_RE.is_match(version) {
            return Err(VersionError::InvalidVersionFormat(version.to_string()));
        }

        let numbers = version
            .split('.')
            .map(|part| part.parse::<u64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| VersionError::InvalidVersionFormat(version.to_string()))?;

        Ok(Version {
            numbers: remove_trailing_zeroes(numbers),
        })
    }

    /// Get the normalized version numbers
    pub fn components(&self) -> &[u64] {
        &self.numbers
    }

    /// Check if this version equals the other one
    pub fn equal_to(&self, other: &Version) -> bool {
        self == other
    }

    /// Check if this version is strictly greater than the other one
    pub fn is_greater_than(&self, other: &Version) -> bool {
        self.cmp(other) == Ordering::Greater
    }

    /// Check if this version is greater than or equal to the other one
    pub fn is_greater_or_equal_than(&self, other: &Version) -> bool {
        self.cmp(other) != Ordering::Less
    }

    /// Get the normalized string representation
    pub fn as_string(&self) -> String {
        self.numbers
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(".")
    }
}

fn remove_trailing_zeroes(mut numbers: Vec<u64>) -> Vec<u64> {
    while numbers.len() > 1 && numbers.last() == Some(&0) {
        numbers.pop();
    }
    numbers
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let max_len = std::cmp::max(self.numbers.len(), other.numbers.len());
        for i in 0..max_len {
            let a = self.numbers.get(i).copied().unwrap_or(0);
            let b = other.numbers.get(i).copied().unwrap_or(0);
            match a.cmp(&b) {
                Ordering::Equal => continue,
                ordering => return ordering,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
