//! Error types for civil time resolution.

use std::fmt::{Display, Formatter};

use chrono::NaiveDateTime;
use serde::Serialize;
use thiserror::Error;

/// A required civil input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CivilField {
    Date,
    Time,
}

impl Display for CivilField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Date => f.write_str("date"),
            Self::Time => f.write_str("time"),
        }
    }
}

/// Errors from resolving a civil date/time/zone into a UTC instant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// A required date or time was absent or blank.
    #[error("missing civil {0}")]
    MissingField(CivilField),
    /// The date string is not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    /// The time string is not a valid `HH:MM` or `HH:MM:SS` clock time.
    #[error("invalid time '{0}', expected HH:MM or HH:MM:SS")]
    InvalidTime(String),
    /// The zone identifier is not in the tz database.
    #[error("unknown time zone '{0}'")]
    UnknownZone(String),
    /// The local time falls in a gap (e.g. spring-forward) of the zone.
    #[error("local time {local} does not exist in {zone}")]
    NonexistentLocalTime { local: NaiveDateTime, zone: String },
    /// The local time occurs twice (e.g. fall-back) in the zone.
    #[error("local time {local} is ambiguous in {zone}")]
    AmbiguousLocalTime { local: NaiveDateTime, zone: String },
}
