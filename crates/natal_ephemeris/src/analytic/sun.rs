//! Apparent geocentric longitude of the Sun.
//!
//! Low-precision theory from Meeus, *Astronomical Algorithms* (2nd ed.),
//! Chapter 25: geometric mean longitude plus equation of centre, corrected
//! for aberration and the principal nutation term. Accurate to about 0.01°.

use natal_frames::normalize_deg;

/// Apparent longitude of the Sun in degrees [0, 360).
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn apparent_longitude_deg(t: f64) -> f64 {
    let t2 = t * t;
    let mean_longitude = 280.46646 + 36000.76983 * t + 0.0003032 * t2;
    let m = (357.52911 + 35999.05029 * t - 0.0001537 * t2).to_radians();

    let centre = (1.914602 - 0.004817 * t - 0.000014 * t2) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();

    let omega = (125.04 - 1934.136 * t).to_radians();
    normalize_deg(mean_longitude + centre - 0.00569 - 0.00478 * omega.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_25a() {
        // 1992 October 13, 0h TD: λ = 199.90895°
        let t = (2_448_908.5 - 2_451_545.0) / 36_525.0;
        let lon = apparent_longitude_deg(t);
        assert!((lon - 199.90895).abs() < 0.001, "λ☉ = {lon}");
    }

    #[test]
    fn near_winter_solstice_at_j2000() {
        let lon = apparent_longitude_deg(0.0);
        assert!((lon - 280.37).abs() < 0.01, "λ☉ = {lon}");
    }

    #[test]
    fn advances_about_one_degree_per_day() {
        let day = 1.0 / 36_525.0;
        let step = apparent_longitude_deg(day) - apparent_longitude_deg(0.0);
        assert!((step - 1.019).abs() < 0.01, "daily motion = {step}");
    }
}
