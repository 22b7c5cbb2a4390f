//! Ephemeris Adapter: per-body longitudes and retrograde flags.
//!
//! Retrograde motion is detected by sampling the provider a second time a
//! short step after the birth instant and checking the sign of the wrapped
//! longitude difference. A step of a few hours resolves every station
//! except within minutes of the turn.

use chrono::Duration;
use log::{debug, trace};
use natal_frames::{normalize_deg, wrap_signed_deg};
use natal_time::BirthMoment;
use serde::Serialize;

use crate::body::CelestialBody;
use crate::error::EphemerisError;
use crate::observer::ObserverLocation;
use crate::provider::EphemerisProvider;

/// Default retrograde sampling step, hours.
pub const DEFAULT_RETROGRADE_STEP_HOURS: f64 = 6.0;

/// Largest accepted retrograde sampling step, hours.
pub const MAX_RETROGRADE_STEP_HOURS: f64 = 48.0;

/// A body's longitude and direction of apparent motion at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyPosition {
    pub body: CelestialBody,
    /// Tropical ecliptic longitude in degrees, [0, 360).
    pub longitude_deg: f64,
    pub retrograde: bool,
}

/// Convert a step in hours to a [`Duration`], rejecting values outside (0, 48].
pub fn retrograde_step(hours: f64) -> Result<Duration, EphemerisError> {
    if !hours.is_finite() || hours <= 0.0 || hours > MAX_RETROGRADE_STEP_HOURS {
        return Err(EphemerisError::InvalidStep(hours));
    }
    let millis = (hours * 3_600_000.0).round() as i64;
    if millis == 0 {
        return Err(EphemerisError::InvalidStep(hours));
    }
    Ok(Duration::milliseconds(millis))
}

/// Positions of `bodies` at `moment`, in the order given.
///
/// Luminaries are never flagged retrograde and skip the second sample.
/// When the look-ahead sample falls outside the provider's range, the
/// direction of motion is taken from a sample one step earlier instead.
pub fn positions_at<P: EphemerisProvider + ?Sized>(
    provider: &P,
    moment: &BirthMoment,
    observer: &ObserverLocation,
    bodies: &[CelestialBody],
    step: Duration,
) -> Result<Vec<BodyPosition>, EphemerisError> {
    let step_hours = step.num_milliseconds() as f64 / 3_600_000.0;
    if step <= Duration::zero() || step_hours > MAX_RETROGRADE_STEP_HOURS {
        return Err(EphemerisError::InvalidStep(step_hours));
    }
    let later = moment
        .offset_by(step)
        .ok_or(EphemerisError::InvalidStep(step_hours))?;

    debug!(
        provider = provider.name(),
        moment:% = moment,
        bodies = bodies.len(),
        step_hours = step_hours;
        "sampling ephemeris"
    );

    bodies
        .iter()
        .map(|&body| {
            let longitude_deg = sample(provider, body, moment, observer)?;
            let retrograde = if body.is_luminary() {
                false
            } else {
                is_retrograde(provider, body, moment, &later, observer, longitude_deg, step)?
            };
            trace!(
                body:% = body,
                longitude_deg = longitude_deg,
                retrograde = retrograde;
                "body position"
            );
            Ok(BodyPosition {
                body,
                longitude_deg,
                retrograde,
            })
        })
        .collect()
}

fn is_retrograde<P: EphemerisProvider + ?Sized>(
    provider: &P,
    body: CelestialBody,
    moment: &BirthMoment,
    later: &BirthMoment,
    observer: &ObserverLocation,
    longitude_deg: f64,
    step: Duration,
) -> Result<bool, EphemerisError> {
    match sample(provider, body, later, observer) {
        Ok(next) => Ok(wrap_signed_deg(next - longitude_deg) < 0.0),
        Err(EphemerisError::OutOfRange { .. }) => {
            debug!(
                body:% = body,
                moment:% = moment;
                "look-ahead out of range, sampling backward"
            );
            let earlier = moment.offset_by(-step).ok_or(EphemerisError::InvalidStep(
                step.num_milliseconds() as f64 / 3_600_000.0,
            ))?;
            let previous = sample(provider, body, &earlier, observer)?;
            Ok(wrap_signed_deg(longitude_deg - previous) < 0.0)
        }
        Err(e) => Err(e),
    }
}

fn sample<P: EphemerisProvider + ?Sized>(
    provider: &P,
    body: CelestialBody,
    moment: &BirthMoment,
    observer: &ObserverLocation,
) -> Result<f64, EphemerisError> {
    let value = provider.longitude(body, moment, observer)?;
    if !value.is_finite() {
        return Err(EphemerisError::InvalidOutput { body, value });
    }
    Ok(normalize_deg(value))
}
