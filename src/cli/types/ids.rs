//! ID types for players and teams.

use crate::error::{DashError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Player identifier.
///
/// The CFBD API sends player ids as numbers on some endpoints and as
/// numeric strings on others, so deserialization accepts both.
///
/// # Examples
///
/// ```rust
/// use sports_dash::PlayerId;
///
/// let id: PlayerId = serde_json::from_str("\"4432577\"").unwrap();
/// assert_eq!(id, PlayerId::new(4432577));
/// assert_eq!(id.to_string(), "4432577");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

impl<'de> Deserialize<'de> for PlayerId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Num(u64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Num(n) => Ok(Self(n)),
            Raw::Text(s) => s
                .trim()
                .parse()
                .map(Self)
                .map_err(serde::de::Error::custom),
        }
    }
}

/// Team identifier used by football-data.org.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(pub u32);

impl TeamId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TeamId {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// football-data.org competition code, e.g. `PL`, `BL1`, `CL`.
///
/// ```rust
/// use sports_dash::CompetitionCode;
///
/// let code: CompetitionCode = "pl".parse().unwrap();
/// assert_eq!(code.as_str(), "PL");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompetitionCode(String);

impl CompetitionCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CompetitionCode {
    fn default() -> Self {
        Self("PL".to_string())
    }
}

impl fmt::Display for CompetitionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CompetitionCode {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self> {
        let code = s.trim().to_ascii_uppercase();
        if (2..=4).contains(&code.len()) && code.chars().all(|c| c.is_ascii_alphanumeric()) {
            Ok(Self(code))
        } else {
            Err(DashError::InvalidArgument {
                message: format!("competition code must be 2-4 letters or digits, got {s:?}"),
            })
        }
    }
}
