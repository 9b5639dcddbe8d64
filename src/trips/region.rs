use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Region filter applied to the trips collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    #[default]
    All,
    Europe,
    America,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown region '{0}' (expected all, europe or america)")]
pub struct RegionParseError(pub String);

impl Region {
    pub const ALL: [Region; 3] = [Region::All, Region::Europe, Region::America];

    /// Value of the `loc` query parameter, if the region filters at all.
    pub fn query_value(self) -> Option<&'static str> {
        match self {
            Region::All => None,
            Region::Europe => Some("europe"),
            Region::America => Some("america"),
        }
    }

    /// Label of the filter control.
    pub fn label(self) -> &'static str {
        match self {
            Region::All => "All Trips",
            Region::Europe => "European Trips",
            Region::America => "American Trips",
        }
    }

    pub fn next(self) -> Region {
        match self {
            Region::All => Region::Europe,
            Region::Europe => Region::America,
            Region::America => Region::All,
        }
    }

    /// Collection URL for this region under `base_url`.
    pub fn endpoint(self, base_url: &str) -> String {
        let base = base_url.trim_end_matches('/');
        match self.query_value() {
            Some(loc) => format!("{}/trips?loc={}", base, loc),
            None => format!("{}/trips", base),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.query_value().unwrap_or("all"))
    }
}

impl FromStr for Region {
    type Err = RegionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Region::All),
            "europe" => Ok(Region::Europe),
            "america" => Ok(Region::America),
            other => Err(RegionParseError(other.to_string())),
        }
    }
}
