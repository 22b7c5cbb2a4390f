//! Error taxonomy for chart computation.

use natal_ephemeris::{CoordinateError, EphemerisError};
use natal_time::{CivilField, TimeError};
use thiserror::Error;

/// Errors from computing a chart. A failed request never yields a partial chart.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// A required civil date or time was not supplied.
    #[error("missing required field: {0}")]
    MissingField(CivilField),
    /// Latitude, longitude or elevation outside its domain.
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(#[from] CoordinateError),
    /// The civil date, time or zone could not be resolved to one instant.
    #[error("invalid temporal input: {0}")]
    InvalidTemporalInput(TimeError),
    /// The ascendant is undefined at a geographic pole.
    #[error("ascendant undefined at latitude {latitude_deg}°")]
    DegenerateGeometry { latitude_deg: f64 },
    /// The ephemeris provider could not supply a position.
    #[error("ephemeris unavailable: {0}")]
    EphemerisUnavailable(#[from] EphemerisError),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<TimeError> for ChartError {
    fn from(e: TimeError) -> Self {
        match e {
            TimeError::MissingField(field) => Self::MissingField(field),
            other => Self::InvalidTemporalInput(other),
        }
    }
}
