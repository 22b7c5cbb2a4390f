//! Apparent geocentric longitude of the Moon.
//!
//! Periodic series from Meeus, *Astronomical Algorithms* (2nd ed.),
//! Chapter 47 (Table 47.A, longitude column) with the Venus, Jupiter and
//! Earth-flattening additive terms. Accuracy about 10″ in longitude.

use natal_frames::normalize_deg;

/// Longitude terms: `[D, M, M', F, Σl coefficient in 1e-6 degree]`.
#[rustfmt::skip]
static LONGITUDE_TERMS: [[i32; 5]; 59] = [
    // D   M   M'  F      Σl
    [  0,  0,  1,  0,  6_288_774],
    [  2,  0, -1,  0,  1_274_027],
    [  2,  0,  0,  0,    658_314],
    [  0,  0,  2,  0,    213_618],
    [  0,  1,  0,  0,   -185_116],
    [  0,  0,  0,  2,   -114_332],
    [  2,  0, -2,  0,     58_793],
    [  2, -1, -1,  0,     57_066],
    [  2,  0,  1,  0,     53_322],
    [  2, -1,  0,  0,     45_758],
    [  0,  1, -1,  0,    -40_923],
    [  1,  0,  0,  0,    -34_720],
    [  0,  1,  1,  0,    -30_383],
    [  2,  0,  0, -2,     15_327],
    [  0,  0,  1,  2,    -12_528],
    [  0,  0,  1, -2,     10_980],
    [  4,  0, -1,  0,     10_675],
    [  0,  0,  3,  0,     10_034],
    [  4,  0, -2,  0,      8_548],
    [  2,  1, -1,  0,     -7_888],
    [  2,  1,  0,  0,     -6_766],
    [  1,  0, -1,  0,     -5_163],
    [  1,  1,  0,  0,      4_987],
    [  2, -1,  1,  0,      4_036],
    [  2,  0,  2,  0,      3_994],
    [  4,  0,  0,  0,      3_861],
    [  2,  0, -3,  0,      3_665],
    [  0,  1, -2,  0,     -2_689],
    [  2,  0, -1,  2,     -2_602],
    [  2, -1, -2,  0,      2_390],
    [  1,  0,  1,  0,     -2_348],
    [  2, -2,  0,  0,      2_236],
    [  0,  1,  2,  0,     -2_120],
    [  0,  2,  0,  0,     -2_069],
    [  2, -2, -1,  0,      2_048],
    [  2,  0,  1, -2,     -1_773],
    [  2,  0,  0,  2,     -1_595],
    [  4, -1, -1,  0,      1_215],
    [  0,  0,  2,  2,     -1_110],
    [  3,  0, -1,  0,       -892],
    [  2,  1,  1,  0,       -810],
    [  4, -1, -2,  0,        759],
    [  0,  2, -1,  0,       -713],
    [  2,  2, -1,  0,       -700],
    [  2,  1, -2,  0,        691],
    [  2, -1,  0, -2,        596],
    [  4,  0,  1,  0,        549],
    [  0,  0,  4,  0,        537],
    [  4, -1,  0,  0,        520],
    [  1,  0, -2,  0,       -487],
    [  2,  1,  0, -2,       -399],
    [  0,  0,  2, -2,       -381],
    [  1,  1,  1,  0,        351],
    [  3,  0, -2,  0,       -340],
    [  4,  0, -3,  0,        330],
    [  2, -1,  2,  0,        327],
    [  0,  2,  1,  0,       -323],
    [  1,  1, -1,  0,        299],
    [  0,  0,  3, -2,        294],
];

/// Mean lunar arguments in degrees: `[L', D, M, M', F]`.
fn mean_arguments(t: f64) -> [f64; 5] {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let mean_longitude =
        218.3164477 + 481267.88123421 * t - 0.0015786 * t2 + t3 / 538_841.0 - t4 / 65_194_000.0;
    let elongation =
        297.8501921 + 445267.1114034 * t - 0.0018819 * t2 + t3 / 545_868.0 - t4 / 113_065_000.0;
    let sun_anomaly = 357.5291092 + 35999.0502909 * t - 0.0001536 * t2 + t3 / 24_490_000.0;
    let moon_anomaly =
        134.9633964 + 477198.8675055 * t + 0.0087414 * t2 + t3 / 69_699.0 - t4 / 14_712_000.0;
    let latitude_arg =
        93.2720950 + 483202.0175233 * t - 0.0036539 * t2 - t3 / 3_526_000.0 + t4 / 863_310_000.0;

    [
        mean_longitude,
        elongation,
        sun_anomaly,
        moon_anomaly,
        latitude_arg,
    ]
}

/// Geometric longitude of the Moon, mean equinox of date, degrees [0, 360).
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn geometric_longitude_deg(t: f64) -> f64 {
    let [lp, d, m, mp, f] = mean_arguments(t);
    // Decreasing eccentricity of the Earth's orbit.
    let e = 1.0 - 0.002516 * t - 0.0000074 * t * t;

    let periodic: f64 = LONGITUDE_TERMS
        .iter()
        .map(|row| {
            let arg = f64::from(row[0]) * d
                + f64::from(row[1]) * m
                + f64::from(row[2]) * mp
                + f64::from(row[3]) * f;
            let scale = match row[1].abs() {
                1 => e,
                2 => e * e,
                _ => 1.0,
            };
            f64::from(row[4]) * scale * arg.to_radians().sin()
        })
        .sum();

    let a1 = 119.75 + 131.849 * t;
    let a2 = 53.09 + 479264.290 * t;
    let additive = 3958.0 * a1.to_radians().sin()
        + 1962.0 * (lp - f).to_radians().sin()
        + 318.0 * a2.to_radians().sin();

    normalize_deg(lp + (periodic + additive) * 1e-6)
}

/// Apparent longitude: geometric longitude plus nutation in longitude.
pub fn apparent_longitude_deg(t: f64, dpsi_deg: f64) -> f64 {
    normalize_deg(geometric_longitude_deg(t) + dpsi_deg)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t_of(jd: f64) -> f64 {
        (jd - 2_451_545.0) / 36_525.0
    }

    #[test]
    fn meeus_example_47a_geometric() {
        // 1992 April 12, 0h TD: λ = 133.162655°
        let lon = geometric_longitude_deg(t_of(2_448_724.5));
        assert!((lon - 133.162655).abs() < 0.001, "λ☾ = {lon}");
    }

    #[test]
    fn meeus_example_47a_apparent() {
        // Δψ = +0.004610°, apparent λ = 133.167265°
        let lon = apparent_longitude_deg(t_of(2_448_724.5), 0.004610);
        assert!((lon - 133.167265).abs() < 0.001, "λ☾ = {lon}");
    }

    #[test]
    fn daily_motion_in_expected_band() {
        for k in 0..30 {
            let jd = 2_451_545.0 + f64::from(k);
            let a = geometric_longitude_deg(t_of(jd));
            let b = geometric_longitude_deg(t_of(jd + 1.0));
            let motion = (b - a).rem_euclid(360.0);
            assert!((11.5..15.5).contains(&motion), "day {k}: {motion}°");
        }
    }
}
