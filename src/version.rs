//! Version string validation.
//!
//! Only the shape of the string is checked: three dot-separated digit runs,
//! optionally followed by a hyphen and a pre-release tag made of ASCII
//! letters, digits and dots. Leading zeros and magnitudes are not inspected.

use crate::error::{BumpError, Result};
use regex::Regex;
use std::fmt;

const VERSION_PATTERN: &str = r"^\d+\.\d+\.\d+(-[A-Za-z0-9.]+)?$";

/// A validated `MAJOR.MINOR.PATCH[-PRERELEASE]` version string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version(String);

impl Version {
    /// Validates `input` and wraps it.
    ///
    /// # Errors
    ///
    /// - `InvalidVersion`: `input` does not match the version pattern
    ///
    /// # Examples
    ///
    /// ```
    /// # use bump_version::version::Version;
    /// let version = Version::parse("1.2.3-beta.1").unwrap();
    /// assert_eq!(version.as_str(), "1.2.3-beta.1");
    ///
    /// assert!(Version::parse("v1.2.3").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let pattern = Regex::new(VERSION_PATTERN)?;

        if !pattern.is_match(input) {
            return Err(BumpError::InvalidVersion(input.to_string()));
        }

        Ok(Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Version {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
