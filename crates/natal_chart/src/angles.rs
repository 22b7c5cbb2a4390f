//! Angle Calculator: local sidereal time, ascendant and midheaven.
//!
//! θ is the local apparent sidereal time (GAST + east longitude), ε the
//! true obliquity of date and φ the geographic latitude.
//!
//! MC  = atan2(sin θ, cos θ · cos ε)
//! ASC = atan2(cos θ, −(sin θ · cos ε + tan φ · sin ε))
//!
//! Sources: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 13;
//! Montenbruck & Pfleger, "Astronomy on the Personal Computer", §3.

use std::f64::consts::TAU;

use log::debug;
use natal_ephemeris::ObserverLocation;
use natal_frames::{nutation_iau2000b, true_obliquity_rad};
use natal_time::{BirthMoment, apparent_sidereal_time_rad, gmst_rad, local_sidereal_time_rad};
use serde::Serialize;

use crate::error::ChartError;

/// The chart's angular points, degrees [0, 360).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Angles {
    /// Ecliptic point rising on the eastern horizon.
    pub ascendant_deg: f64,
    /// Ecliptic point culminating on the upper meridian.
    pub midheaven_deg: f64,
    /// Local apparent sidereal time (RAMC).
    pub sidereal_time_deg: f64,
}

impl Angles {
    pub fn descendant_deg(&self) -> f64 {
        natal_frames::normalize_deg(self.ascendant_deg + 180.0)
    }

    pub fn imum_coeli_deg(&self) -> f64 {
        natal_frames::normalize_deg(self.midheaven_deg + 180.0)
    }
}

/// Midheaven longitude in radians [0, 2π).
pub fn midheaven_rad(lst_rad: f64, obliquity_rad: f64) -> f64 {
    f64::atan2(lst_rad.sin(), lst_rad.cos() * obliquity_rad.cos()).rem_euclid(TAU)
}

/// Ascendant longitude in radians [0, 2π).
///
/// The formula yields one of the two ecliptic-horizon intersections. The
/// result is checked against the hour angle of the point and replaced by
/// its antipode when it lies west of the meridian, which happens only
/// inside the polar circles. `lat_rad` must not be ±π/2.
pub fn ascendant_rad(lst_rad: f64, obliquity_rad: f64, lat_rad: f64) -> f64 {
    let (sin_e, cos_e) = obliquity_rad.sin_cos();
    let asc = f64::atan2(
        lst_rad.cos(),
        -(lst_rad.sin() * cos_e + lat_rad.tan() * sin_e),
    );

    // Hour angle of the ecliptic point: rising points have H in (π, 2π).
    let ra = f64::atan2(asc.sin() * cos_e, asc.cos());
    let hour_angle = lst_rad - ra;
    let asc = if hour_angle.sin() >= 0.0 { asc + TAU / 2.0 } else { asc };
    asc.rem_euclid(TAU)
}

/// Angles for a given sidereal time, obliquity and latitude (all radians).
pub fn angles_from_sidereal_time(lst_rad: f64, obliquity_rad: f64, lat_rad: f64) -> Angles {
    Angles {
        ascendant_deg: natal_frames::normalize_deg(
            ascendant_rad(lst_rad, obliquity_rad, lat_rad).to_degrees(),
        ),
        midheaven_deg: natal_frames::normalize_deg(
            midheaven_rad(lst_rad, obliquity_rad).to_degrees(),
        ),
        sidereal_time_deg: natal_frames::normalize_deg(lst_rad.to_degrees()),
    }
}

/// Local apparent sidereal time and true obliquity at `moment`, radians.
pub fn sidereal_frame(moment: &BirthMoment, observer: &ObserverLocation) -> (f64, f64) {
    let t = moment.centuries_tt();
    let nutation = nutation_iau2000b(t);
    let obliquity = true_obliquity_rad(t, &nutation);
    let gast = apparent_sidereal_time_rad(
        gmst_rad(moment.jd_ut()),
        nutation.equation_of_equinoxes_rad(obliquity),
    );
    (local_sidereal_time_rad(gast, observer.longitude_rad()), obliquity)
}

/// Ascendant, midheaven and sidereal time for an instant and place.
///
/// The ascendant is undefined at the poles, where every ecliptic point
/// circles the horizon without rising.
pub fn angles(moment: &BirthMoment, observer: &ObserverLocation) -> Result<Angles, ChartError> {
    if observer.is_polar() {
        return Err(ChartError::DegenerateGeometry {
            latitude_deg: observer.latitude_deg,
        });
    }
    let (lst, obliquity) = sidereal_frame(moment, observer);
    let out = angles_from_sidereal_time(lst, obliquity, observer.latitude_rad());
    debug!(
        lst_deg = out.sidereal_time_deg,
        asc_deg = out.ascendant_deg,
        mc_deg = out.midheaven_deg;
        "computed angles"
    );
    Ok(out)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    const EPS_J2000: f64 = 0.409_092_600_600_583; // 23.4392794° in radians

    #[test]
    fn mc_equals_lst_at_equinoxes_and_solstices() {
        for lst_deg in [0.0_f64, 90.0, 180.0, 270.0] {
            let mc = midheaven_rad(lst_deg.to_radians(), EPS_J2000).to_degrees();
            let diff = (mc - lst_deg).rem_euclid(360.0);
            assert!(diff < 1e-9 || diff > 360.0 - 1e-9, "LST {lst_deg}: MC {mc}");
        }
    }

    #[test]
    fn ascendant_on_equator_at_zero_lst() {
        // Vernal point culminating: the summer solstice point (90°) rises.
        let asc = ascendant_rad(0.0, EPS_J2000, 0.0).to_degrees();
        assert!((asc - 90.0).abs() < 1e-9, "asc = {asc}");
    }

    #[test]
    fn ascendant_on_equator_at_lst_180() {
        let asc = ascendant_rad(std::f64::consts::PI, EPS_J2000, 0.0).to_degrees();
        assert!((asc - 270.0).abs() < 1e-9, "asc = {asc}");
    }

    #[test]
    fn ascendant_leads_midheaven_by_less_than_half_turn() {
        for lat in [-80.0_f64, -66.0, -45.0, 0.0, 30.0, 51.5, 66.0, 75.0, 89.0] {
            for step in 0..72 {
                let lst = f64::from(step * 5).to_radians();
                let a = angles_from_sidereal_time(lst, EPS_J2000, lat.to_radians());
                let lead = (a.ascendant_deg - a.midheaven_deg).rem_euclid(360.0);
                assert!(lead > 0.0 && lead < 180.0, "lat {lat} lst {}: lead {lead}", step * 5);
            }
        }
    }

    #[test]
    fn descendant_and_ic_are_opposite() {
        let a = Angles {
            ascendant_deg: 200.0,
            midheaven_deg: 350.0,
            sidereal_time_deg: 0.0,
        };
        assert_eq!(a.descendant_deg(), 20.0);
        assert_eq!(a.imum_coeli_deg(), 170.0);
    }

    #[test]
    fn polar_latitude_is_degenerate() {
        let m = BirthMoment::from_utc(Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap());
        for lat in [90.0, -90.0] {
            let err = angles(&m, &ObserverLocation::new(lat, 0.0, 0.0)).unwrap_err();
            assert_eq!(err, ChartError::DegenerateGeometry { latitude_deg: lat });
        }
    }

    #[test]
    fn greenwich_sidereal_time_at_j2000_midnight() {
        // GAST 2000-01-01 0h UT ≈ 6h39m52s = 99.967°
        let m = BirthMoment::from_utc(Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap());
        let a = angles(&m, &ObserverLocation::new(51.5, 0.0, 0.0)).unwrap();
        assert!((a.sidereal_time_deg - 99.967).abs() < 0.01, "{}", a.sidereal_time_deg);
    }

    #[test]
    fn east_longitude_advances_sidereal_time() {
        let m = BirthMoment::from_utc(Utc.with_ymd_and_hms(1990, 6, 15, 12, 30, 0).unwrap());
        let g = angles(&m, &ObserverLocation::new(48.0, 0.0, 0.0)).unwrap();
        let e = angles(&m, &ObserverLocation::new(48.0, 15.0, 0.0)).unwrap();
        let diff = (e.sidereal_time_deg - g.sidereal_time_deg).rem_euclid(360.0);
        assert!((diff - 15.0).abs() < 1e-9, "diff = {diff}");
    }
}
