//! Geographic observer location.

use serde::{Deserialize, Serialize};

use crate::error::CoordinateError;

/// Observer position on the Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObserverLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Height above mean sea level in metres.
    pub elevation_m: f64,
}

impl ObserverLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64, elevation_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            elevation_m,
        }
    }

    /// Reject non-finite or out-of-range coordinates.
    pub fn validate(&self) -> Result<(), CoordinateError> {
        if !self.latitude_deg.is_finite() || self.latitude_deg.abs() > 90.0 {
            return Err(CoordinateError::Latitude(self.latitude_deg));
        }
        if !self.longitude_deg.is_finite() || self.longitude_deg.abs() > 180.0 {
            return Err(CoordinateError::Longitude(self.longitude_deg));
        }
        if !self.elevation_m.is_finite() {
            return Err(CoordinateError::Elevation(self.elevation_m));
        }
        Ok(())
    }

    /// True at either geographic pole, where the horizon is parallel to the equator.
    pub fn is_polar(&self) -> bool {
        self.latitude_deg.abs() == 90.0
    }

    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Longitude in radians (east positive).
    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}
