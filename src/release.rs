//! MATLAB release names (R2019a, R2023b, ...)
//!
//! A release is a 4-digit year plus an `a`/`b` half-year suffix. Releases
//! are totally ordered by year first, then half, so the newest media
//! directory can be picked with a plain `max()`.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::InstallError;

static RELEASE_RE: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"^R(\d{4})([ab])$").unwrap()
});

/// Half-year suffix of a release name
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Half {
    A,
    B,
}

impl fmt::Display for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Half::A => write!(f, "a"),
            Half::B => write!(f, "b"),
        }
    }
}

/// A parsed MATLAB release name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Release {
    pub year: u16,
    pub half: Half,
}

impl Release {
    /// Parse a directory name into a release, if it follows the naming scheme
    pub fn parse(name: &str) -> Option<Self> {
        let caps = RELEASE_RE.captures(name)?;
        let year = caps.get(1)?.as_str().parse().ok()?;
        let half = match caps.get(2)?.as_str() {
            "a" => Half::A,
            _ => Half::B,
        };
        Some(Release { year, half })
    }
}

impl FromStr for Release {
    type Err = InstallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Release::parse(s).ok_or_else(|| InstallError::InvalidRelease {
            name: s.to_string(),
        })
    }
}

impl Ord for Release {
    fn cmp(&self, other: &Self) -> Ordering {
        self.year
            .cmp(&other.year)
            .then(self.half.cmp(&other.half))
    }
}

impl PartialOrd for Release {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Release {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}{}", self.year, self.half)
    }
}
