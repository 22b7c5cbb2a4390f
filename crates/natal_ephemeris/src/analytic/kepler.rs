//! Geocentric planetary longitudes from mean Keplerian elements.
//!
//! Elements and rates: Standish, "Keplerian Elements for Approximate
//! Positions of the Major Planets" (JPL SSD), Table 1, fitted to DE405 over
//! 1800–2050. Heliocentric positions are in the J2000 ecliptic frame; the
//! geocentric vector is taken from the Earth-Moon barycentre with one
//! light-time iteration and first-order annual aberration.
//!
//! Errors stay within a few arcminutes for every planet across the fit span
//! (Jupiter and Saturn worst, at about 0.2°).

use std::f64::consts::PI;

use natal_frames::{EclipticCoords, cartesian_to_spherical, normalize_deg};

use crate::body::CelestialBody;

/// Light travel time per astronomical unit, days.
const LIGHT_TIME_DAYS_PER_AU: f64 = 0.005_775_518_3;

/// Constant of annual aberration κ, degrees.
const ABERRATION_DEG: f64 = 20.495_52 / 3600.0;

/// Mean orbital elements at J2000 (`[0]`) and their rates per Julian century (`[1]`).
///
/// Each row: `[a (AU), e, I (deg), L (deg), ϖ (deg), Ω (deg)]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    pub epoch: [f64; 6],
    pub rate: [f64; 6],
}

#[rustfmt::skip]
const MERCURY: OrbitalElements = OrbitalElements {
    epoch: [ 0.38709927, 0.20563593,  7.00497902, 252.25032350,  77.45779628,  48.33076593],
    rate:  [ 0.00000037, 0.00001906, -0.00594749, 149472.67411175, 0.16047689, -0.12534081],
};

#[rustfmt::skip]
const VENUS: OrbitalElements = OrbitalElements {
    epoch: [ 0.72333566, 0.00677672,  3.39467605, 181.97909950, 131.60246718,  76.67984255],
    rate:  [ 0.00000390, -0.00004107, -0.00078890, 58517.81538729, 0.00268329, -0.27769418],
};

#[rustfmt::skip]
const EARTH_MOON_BARYCENTRE: OrbitalElements = OrbitalElements {
    epoch: [ 1.00000261, 0.01671123, -0.00001531, 100.46457166, 102.93768193, 0.0],
    rate:  [ 0.00000562, -0.00004392, -0.01294668, 35999.37244981, 0.32327364, 0.0],
};

#[rustfmt::skip]
const MARS: OrbitalElements = OrbitalElements {
    epoch: [ 1.52371034, 0.09339410,  1.84969142,  -4.55343205, -23.94362959,  49.55953891],
    rate:  [ 0.00001847, 0.00007882, -0.00813131, 19140.30268499, 0.44441088, -0.29257343],
};

#[rustfmt::skip]
const JUPITER: OrbitalElements = OrbitalElements {
    epoch: [ 5.20288700, 0.04838624,  1.30439695,  34.39644051,  14.72847983, 100.47390909],
    rate:  [-0.00011607, -0.00013253, -0.00183714, 3034.74612775, 0.21252668, 0.20469106],
};

#[rustfmt::skip]
const SATURN: OrbitalElements = OrbitalElements {
    epoch: [ 9.53667594, 0.05386179,  2.48599187,  49.95424423,  92.59887831, 113.66242448],
    rate:  [-0.00125060, -0.00050991, 0.00193609, 1222.49362201, -0.41897216, -0.28867794],
};

#[rustfmt::skip]
const URANUS: OrbitalElements = OrbitalElements {
    epoch: [19.18916464, 0.04725744,  0.77263783, 313.23810451, 170.95427630,  74.01692503],
    rate:  [-0.00196176, -0.00004397, -0.00242939, 428.48202785, 0.40805281, 0.04240589],
};

#[rustfmt::skip]
const NEPTUNE: OrbitalElements = OrbitalElements {
    epoch: [30.06992276, 0.00859048,  1.77004347, -55.12002969,  44.96476227, 131.78422574],
    rate:  [ 0.00026291, 0.00005105, 0.00035372, 218.45945325, -0.32241464, -0.00508664],
};

#[rustfmt::skip]
const PLUTO: OrbitalElements = OrbitalElements {
    epoch: [39.48211675, 0.24882730, 17.14001206, 238.92903833, 224.06891629, 110.30393684],
    rate:  [-0.00031596, 0.00005170, 0.00004818, 145.20780515, -0.04062942, -0.01183482],
};

/// Element set for a planet; `None` for the Sun, Moon and lunar node.
pub const fn elements(body: CelestialBody) -> Option<&'static OrbitalElements> {
    match body {
        CelestialBody::Mercury => Some(&MERCURY),
        CelestialBody::Venus => Some(&VENUS),
        CelestialBody::Mars => Some(&MARS),
        CelestialBody::Jupiter => Some(&JUPITER),
        CelestialBody::Saturn => Some(&SATURN),
        CelestialBody::Uranus => Some(&URANUS),
        CelestialBody::Neptune => Some(&NEPTUNE),
        CelestialBody::Pluto => Some(&PLUTO),
        CelestialBody::Sun | CelestialBody::Moon | CelestialBody::NorthNode => None,
    }
}

/// Solve Kepler's equation E − e·sin E = M by Newton iteration (radians).
pub fn solve_kepler(mean_anomaly: f64, e: f64) -> f64 {
    let mut ecc_anomaly = mean_anomaly + e * mean_anomaly.sin();
    for _ in 0..30 {
        let delta = (ecc_anomaly - e * ecc_anomaly.sin() - mean_anomaly)
            / (1.0 - e * ecc_anomaly.cos());
        ecc_anomaly -= delta;
        if delta.abs() < 1e-14 {
            break;
        }
    }
    ecc_anomaly
}

/// Heliocentric position in the J2000 ecliptic frame, AU.
pub fn heliocentric_position(elements: &OrbitalElements, jd_tt: f64) -> [f64; 3] {
    let t = (jd_tt - natal_time::J2000_JD) / natal_time::DAYS_PER_JULIAN_CENTURY;
    let [a, e, incl, mean_lon, peri, node] =
        std::array::from_fn(|k| elements.epoch[k] + elements.rate[k] * t);

    let arg_peri = (peri - node).to_radians();
    // Mean anomaly reduced to (−π, π] for fast Newton convergence.
    let m = (mean_lon - peri).to_radians();
    let m = m.sin().atan2(m.cos());
    let ecc = solve_kepler(m, e);

    let x_orb = a * (ecc.cos() - e);
    let y_orb = a * (1.0 - e * e).sqrt() * ecc.sin();

    let (sw, cw) = arg_peri.sin_cos();
    let (sn, cn) = node.to_radians().sin_cos();
    let (si, ci) = incl.to_radians().sin_cos();

    [
        (cw * cn - sw * sn * ci) * x_orb + (-sw * cn - cw * sn * ci) * y_orb,
        (cw * sn + sw * cn * ci) * x_orb + (-sw * sn + cw * cn * ci) * y_orb,
        (sw * si) * x_orb + (cw * si) * y_orb,
    ]
}

/// Apparent geocentric ecliptic coordinates, J2000 frame (before precession).
///
/// Light-time corrected and aberrated; longitude in [0, 360).
pub fn geocentric_j2000(elements: &OrbitalElements, jd_tt: f64) -> EclipticCoords {
    let earth = heliocentric_position(&EARTH_MOON_BARYCENTRE, jd_tt);

    let geocentric = |jd: f64| {
        let p = heliocentric_position(elements, jd);
        [p[0] - earth[0], p[1] - earth[1], p[2] - earth[2]]
    };

    let first = cartesian_to_spherical(&geocentric(jd_tt));
    let mut coords = cartesian_to_spherical(&geocentric(
        jd_tt - first.distance * LIGHT_TIME_DAYS_PER_AU,
    ));

    let sun_lon = (earth[1].atan2(earth[0]) + PI).to_degrees();
    let lat = coords.lat_deg.to_radians();
    coords.lon_deg = normalize_deg(
        coords.lon_deg - ABERRATION_DEG * (sun_lon - coords.lon_deg).to_radians().cos() / lat.cos(),
    );
    coords
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kepler_circular_orbit_is_identity() {
        assert!((solve_kepler(1.234, 0.0) - 1.234).abs() < 1e-15);
    }

    #[test]
    fn kepler_equation_satisfied() {
        for &(m, e) in &[(0.3, 0.2), (-2.9, 0.25), (3.0, 0.0934)] {
            let ecc = solve_kepler(m, e);
            assert!((ecc - e * ecc.sin() - m).abs() < 1e-12, "M={m} e={e}");
        }
    }

    #[test]
    fn earth_distance_about_one_au() {
        let p = heliocentric_position(&EARTH_MOON_BARYCENTRE, natal_time::J2000_JD);
        let r = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
        // Perihelion is in early January.
        assert!((r - 0.9833).abs() < 0.001, "r = {r}");
    }

    #[test]
    fn only_planets_have_elements() {
        assert!(elements(CelestialBody::Sun).is_none());
        assert!(elements(CelestialBody::Moon).is_none());
        assert!(elements(CelestialBody::NorthNode).is_none());
        assert!(elements(CelestialBody::Pluto).is_some());
    }

    #[test]
    fn outer_planets_barely_move_per_day() {
        let a = geocentric_j2000(&NEPTUNE, 2_451_545.0).lon_deg;
        let b = geocentric_j2000(&NEPTUNE, 2_451_546.0).lon_deg;
        assert!((b - a).abs() < 0.05, "Neptune moved {}°", b - a);
    }
}
