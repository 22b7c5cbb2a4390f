//! Error types for observer validation and ephemeris queries.

use thiserror::Error;

use crate::body::CelestialBody;

/// An observer coordinate outside its valid domain.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum CoordinateError {
    #[error("latitude {0}° outside [-90, 90]")]
    Latitude(f64),
    #[error("longitude {0}° outside [-180, 180]")]
    Longitude(f64),
    #[error("elevation {0} m is not a finite number")]
    Elevation(f64),
}

/// Errors from an ephemeris provider or the position adapter.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The instant lies outside the provider's supported span.
    #[error("{body} requested at JD(TT) {jd_tt:.5}, outside provider range {start:.1}..{end:.1}")]
    OutOfRange {
        body: CelestialBody,
        jd_tt: f64,
        start: f64,
        end: f64,
    },
    /// The provider returned NaN or infinity.
    #[error("provider returned non-finite longitude {value} for {body}")]
    InvalidOutput { body: CelestialBody, value: f64 },
    /// The retrograde sampling step is not in (0, 48] hours.
    #[error("retrograde step of {0} h outside (0, 48]")]
    InvalidStep(f64),
    /// Provider-specific failure.
    #[error("{provider}: {message}")]
    Provider { provider: String, message: String },
}
