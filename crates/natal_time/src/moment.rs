//! The resolved birth instant.
//!
//! `BirthMoment` is the only time value that crosses crate boundaries.
//! Once produced it carries no civil-time ambiguity: it is an absolute UTC
//! instant with derived Julian Date views for the astronomical code.

use std::fmt::{Display, Formatter};

use chrono::{DateTime, Datelike, Duration, SecondsFormat, Timelike, Utc};
use serde::Serialize;

use crate::delta_t::delta_t_seconds;
use crate::julian::{SECONDS_PER_DAY, UNIX_EPOCH_JD, jd_to_centuries};

/// An absolute UTC instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct BirthMoment {
    utc: DateTime<Utc>,
}

impl BirthMoment {
    pub fn from_utc(utc: DateTime<Utc>) -> Self {
        Self { utc }
    }

    /// The instant as a chrono UTC timestamp.
    pub fn utc(&self) -> DateTime<Utc> {
        self.utc
    }

    /// Julian Date on the UTC time scale.
    pub fn jd_utc(&self) -> f64 {
        let secs = self.utc.timestamp() as f64
            + f64::from(self.utc.timestamp_subsec_nanos()) * 1e-9;
        UNIX_EPOCH_JD + secs / SECONDS_PER_DAY
    }

    /// Julian Date on the UT1 time scale.
    ///
    /// UT1 is taken equal to UTC; |UT1 − UTC| < 0.9 s by IERS convention.
    pub fn jd_ut(&self) -> f64 {
        self.jd_utc()
    }

    /// Fractional calendar year, used to look up ΔT.
    pub fn decimal_year(&self) -> f64 {
        let year = self.utc.year();
        let days_in_year = if self.utc.date_naive().leap_year() {
            366.0
        } else {
            365.0
        };
        let day_seconds = f64::from(self.utc.num_seconds_from_midnight());
        let elapsed_days = f64::from(self.utc.ordinal0()) + day_seconds / SECONDS_PER_DAY;
        f64::from(year) + elapsed_days / days_in_year
    }

    /// ΔT = TT − UT in seconds at this instant.
    pub fn delta_t_seconds(&self) -> f64 {
        delta_t_seconds(self.decimal_year())
    }

    /// Julian Date on the Terrestrial Time scale (ephemeris time).
    pub fn jd_tt(&self) -> f64 {
        self.jd_ut() + self.delta_t_seconds() / SECONDS_PER_DAY
    }

    /// Julian centuries of TT since J2000.0.
    pub fn centuries_tt(&self) -> f64 {
        jd_to_centuries(self.jd_tt())
    }

    /// A new moment shifted by `delta`, or `None` on calendar overflow.
    pub fn offset_by(&self, delta: Duration) -> Option<Self> {
        self.utc.checked_add_signed(delta).map(Self::from_utc)
    }
}

impl From<DateTime<Utc>> for BirthMoment {
    fn from(utc: DateTime<Utc>) -> Self {
        Self::from_utc(utc)
    }
}

impl Display for BirthMoment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.utc.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}
