//! The ephemeris provider contract.

use natal_time::BirthMoment;

use crate::body::CelestialBody;
use crate::error::EphemerisError;
use crate::observer::ObserverLocation;

/// Source of geocentric tropical ecliptic longitudes.
///
/// Longitudes are degrees referred to the true equinox of date. Any value
/// is accepted; the adapter normalizes to [0, 360) and rejects non-finite
/// output. Implementations must be deterministic: the same query always
/// returns the same value.
pub trait EphemerisProvider: Send + Sync {
    /// Short identifier used in logs and error messages.
    fn name(&self) -> &str;

    /// Ecliptic longitude of `body` at `moment` for `observer`.
    fn longitude(
        &self,
        body: CelestialBody,
        moment: &BirthMoment,
        observer: &ObserverLocation,
    ) -> Result<f64, EphemerisError>;
}

impl<P: EphemerisProvider + ?Sized> EphemerisProvider for &P {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn longitude(
        &self,
        body: CelestialBody,
        moment: &BirthMoment,
        observer: &ObserverLocation,
    ) -> Result<f64, EphemerisError> {
        (**self).longitude(body, moment, observer)
    }
}

impl<P: EphemerisProvider + ?Sized> EphemerisProvider for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn longitude(
        &self,
        body: CelestialBody,
        moment: &BirthMoment,
        observer: &ObserverLocation,
    ) -> Result<f64, EphemerisError> {
        (**self).longitude(body, moment, observer)
    }
}
