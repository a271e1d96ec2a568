//! Season years.

use crate::error::{DashError, Result};
use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Season year, e.g. `2023` for the 2023 college football season or the
/// 2023/24 soccer season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    /// Earliest season the dashboard accepts.
    pub const MIN: u16 = 2000;

    pub fn new(year: u16) -> Self {
        Self(year)
    }

    /// Validating constructor: `MIN..=latest().as_u16()`.
    pub fn try_new(year: u16) -> Result<Self> {
        let max = Self::latest().as_u16();
        if (Self::MIN..=max).contains(&year) {
            Ok(Self(year))
        } else {
            Err(DashError::InvalidSeason {
                year,
                min: Self::MIN,
                max,
            })
        }
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// The most recent season that has started.
    ///
    /// Seasons kick off in August, so before then the previous year is used.
    pub fn latest() -> Self {
        let today = Local::now().date_naive();
        Self::for_date(today.year(), today.month())
    }

    pub fn for_date(year: i32, month: u32) -> Self {
        let year = if month >= 8 { year } else { year - 1 };
        Self(year.clamp(Self::MIN as i32, u16::MAX as i32) as u16)
    }

    /// Step by `delta` years, staying inside the accepted range.
    pub fn shifted(&self, delta: i32) -> Self {
        let max = Self::latest().as_u16() as i32;
        let year = (self.0 as i32 + delta).clamp(Self::MIN as i32, max);
        Self(year as u16)
    }
}

impl Default for Season {
    fn default() -> Self {
        Self::latest()
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_new(s.trim().parse()?)
    }
}
