//! Built-in analytic ephemeris.
//!
//! Closed-form theories for every catalog body, good to a few arcminutes
//! (Sun and Moon to seconds of arc) within 1800–2050. Positions are
//! geocentric; the observer's location is not used (topocentric parallax
//! is below 0.01° for every body except the Moon).

pub mod kepler;
pub mod moon;
pub mod nodes;
pub mod sun;

use natal_frames::{nutation_iau2000b, precess_longitude_from_j2000};
use natal_time::{BirthMoment, jd_to_centuries};

use crate::body::CelestialBody;
use crate::error::EphemerisError;
use crate::observer::ObserverLocation;
use crate::provider::EphemerisProvider;

pub use nodes::NodeMode;

/// First supported instant, 1800-01-01 00:00 TT.
pub const RANGE_START_JD_TT: f64 = 2_378_496.5;

/// End of the supported span, 2051-01-01 00:00 TT (exclusive).
pub const RANGE_END_JD_TT: f64 = 2_470_172.5;

/// Analytic provider for the whole body catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalyticEphemeris {
    node_mode: NodeMode,
}

impl AnalyticEphemeris {
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose mean or true ascending node.
    pub fn with_node_mode(node_mode: NodeMode) -> Self {
        Self { node_mode }
    }

    pub fn node_mode(&self) -> NodeMode {
        self.node_mode
    }

    /// Apparent longitude of `body` at a TT Julian Date, degrees [0, 360).
    pub fn longitude_at_jd_tt(
        &self,
        body: CelestialBody,
        jd_tt: f64,
    ) -> Result<f64, EphemerisError> {
        if !(RANGE_START_JD_TT..RANGE_END_JD_TT).contains(&jd_tt) {
            return Err(EphemerisError::OutOfRange {
                body,
                jd_tt,
                start: RANGE_START_JD_TT,
                end: RANGE_END_JD_TT,
            });
        }
        let t = jd_to_centuries(jd_tt);

        let lon = match body {
            CelestialBody::Sun => sun::apparent_longitude_deg(t),
            CelestialBody::Moon => moon::apparent_longitude_deg(t, nutation_iau2000b(t).dpsi_deg()),
            CelestialBody::NorthNode => nodes::ascending_node_deg(t, self.node_mode),
            planet => {
                let elements = kepler::elements(planet).ok_or_else(|| EphemerisError::Provider {
                    provider: self.name().to_string(),
                    message: format!("no orbital elements for {planet}"),
                })?;
                let j2000 = kepler::geocentric_j2000(elements, jd_tt);
                precess_longitude_from_j2000(j2000.lon_deg, t) + nutation_iau2000b(t).dpsi_deg()
            }
        };
        Ok(natal_frames::normalize_deg(lon))
    }
}

impl EphemerisProvider for AnalyticEphemeris {
    fn name(&self) -> &str {
        "analytic"
    }

    fn longitude(
        &self,
        body: CelestialBody,
        moment: &BirthMoment,
        _observer: &ObserverLocation,
    ) -> Result<f64, EphemerisError> {
        self.longitude_at_jd_tt(body, moment.jd_tt())
    }
}
