//! Analytic provider against published positions.
//!
//! Reference longitudes: Meeus worked examples (TD) and the geocentric
//! apparent positions for 2000-01-01 12:00 TT from the Astronomical Almanac.

use chrono::{TimeZone, Utc};
use natal_ephemeris::{
    AnalyticEphemeris, CATALOG, CelestialBody, EphemerisError, EphemerisProvider,
    ObserverLocation, positions_at, retrograde_step,
};
use natal_time::BirthMoment;

fn angular_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> BirthMoment {
    BirthMoment::from_utc(Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap())
}

fn greenwich() -> ObserverLocation {
    ObserverLocation::new(51.4769, 0.0, 46.0)
}

#[test]
fn j2000_positions_match_almanac() {
    let eph = AnalyticEphemeris::new();
    let expected = [
        (CelestialBody::Sun, 280.37, 0.02),
        (CelestialBody::Moon, 223.32, 0.05),
        (CelestialBody::Mercury, 271.89, 0.5),
        (CelestialBody::Venus, 241.57, 0.5),
        (CelestialBody::Mars, 327.96, 0.5),
        (CelestialBody::Jupiter, 25.25, 0.5),
        (CelestialBody::Saturn, 40.40, 0.5),
        (CelestialBody::Uranus, 314.81, 0.5),
        (CelestialBody::Neptune, 303.19, 0.5),
        (CelestialBody::Pluto, 251.45, 0.5),
    ];
    for (body, lon, tol) in expected {
        let got = eph.longitude_at_jd_tt(body, 2_451_545.0).unwrap();
        assert!(
            angular_distance(got, lon) < tol,
            "{body}: got {got:.4}°, expected {lon}° ± {tol}"
        );
    }
}

#[test]
fn venus_meeus_example_33a() {
    // 1992 December 20, 0h TD: apparent λ = 313.08102°
    let got = AnalyticEphemeris::new()
        .longitude_at_jd_tt(CelestialBody::Venus, 2_448_976.5)
        .unwrap();
    assert!(angular_distance(got, 313.08102) < 0.05, "λ♀ = {got}");
}

#[test]
fn sun_meeus_example_25a() {
    let got = AnalyticEphemeris::new()
        .longitude_at_jd_tt(CelestialBody::Sun, 2_448_908.5)
        .unwrap();
    assert!(angular_distance(got, 199.90895) < 0.01, "λ☉ = {got}");
}

#[test]
fn moon_meeus_example_47a() {
    let got = AnalyticEphemeris::new()
        .longitude_at_jd_tt(CelestialBody::Moon, 2_448_724.5)
        .unwrap();
    assert!(angular_distance(got, 133.167265) < 0.01, "λ☾ = {got}");
}

#[test]
fn mercury_retrograde_march_2000() {
    // Mercury was retrograde from 2000-02-21 to 2000-03-14.
    let step = retrograde_step(6.0).unwrap();
    let out = positions_at(
        &AnalyticEphemeris::new(),
        &utc(2000, 3, 1, 0, 0),
        &greenwich(),
        &[CelestialBody::Mercury],
        step,
    )
    .unwrap();
    assert!(out[0].retrograde, "{out:?}");
}

#[test]
fn mars_retrograde_august_2003() {
    let step = retrograde_step(6.0).unwrap();
    let out = positions_at(
        &AnalyticEphemeris::new(),
        &utc(2003, 8, 15, 0, 0),
        &greenwich(),
        &[CelestialBody::Mars],
        step,
    )
    .unwrap();
    assert!(out[0].retrograde, "{out:?}");
}

#[test]
fn mean_node_always_retrograde() {
    let step = retrograde_step(6.0).unwrap();
    for year in [1850, 1920, 1990, 2040] {
        let out = positions_at(
            &AnalyticEphemeris::new(),
            &utc(year, 6, 1, 12, 0),
            &greenwich(),
            &[CelestialBody::NorthNode],
            step,
        )
        .unwrap();
        assert!(out[0].retrograde, "{year}: {out:?}");
    }
}

#[test]
fn luminaries_never_retrograde() {
    let step = retrograde_step(24.0).unwrap();
    for year in (1800..2050).step_by(17) {
        let out = positions_at(
            &AnalyticEphemeris::new(),
            &utc(year, 3, 15, 6, 0),
            &greenwich(),
            &CATALOG,
            step,
        )
        .unwrap();
        assert!(!out[0].retrograde && !out[1].retrograde, "{year}");
    }
}

#[test]
fn before_1800_is_out_of_range() {
    let err = AnalyticEphemeris::new()
        .longitude(CelestialBody::Sun, &utc(1750, 1, 1, 0, 0), &greenwich())
        .unwrap_err();
    assert!(matches!(err, EphemerisError::OutOfRange { .. }), "{err}");
}

#[test]
fn provider_usable_through_trait_object() {
    let boxed: Box<dyn EphemerisProvider> = Box::new(AnalyticEphemeris::new());
    let step = retrograde_step(6.0).unwrap();
    let moment = utc(1990, 6, 15, 12, 30);
    let out = positions_at(&boxed, &moment, &greenwich(), &CATALOG, step).unwrap();
    assert_eq!(out.len(), CATALOG.len());
    assert_eq!(boxed.name(), "analytic");
}

#[test]
fn retrograde_flags_available_in_last_hour_of_range() {
    let eph = AnalyticEphemeris::new();
    let step = retrograde_step(48.0).unwrap();
    let out = positions_at(&eph, &utc(2050, 12, 31, 23, 0), &greenwich(), &CATALOG, step).unwrap();
    assert_eq!(out.len(), CATALOG.len());
    assert!(!out[0].retrograde);
}
