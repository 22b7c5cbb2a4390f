//! ΔT = TT − UT, the accumulated drift of Earth rotation against atomic time.
//!
//! Piecewise polynomials from Espenak & Meeus, "Five Millennium Canon of
//! Solar Eclipses" (NASA/TP-2006-214141), as published on the NASA eclipse
//! web site. Public domain (US Government work product).
//!
//! Accuracy is a few tenths of a second across 1900–2000 and degrades to
//! minutes in the remote past; far future values are extrapolations.

/// ΔT in seconds for a decimal year (e.g. 1990.45).
pub fn delta_t_seconds(year: f64) -> f64 {
    let y = year;
    if y < -500.0 {
        let u = (y - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u
    } else if y < 500.0 {
        let u = y / 100.0;
        poly(
            u,
            &[
                10583.6,
                -1014.41,
                33.78311,
                -5.952053,
                -0.1798452,
                0.022174192,
                0.0090316521,
            ],
        )
    } else if y < 1600.0 {
        let u = (y - 1000.0) / 100.0;
        poly(
            u,
            &[
                1574.2,
                -556.01,
                71.23472,
                0.319781,
                -0.8503463,
                -0.005050998,
                0.0083572073,
            ],
        )
    } else if y < 1700.0 {
        let t = y - 1600.0;
        poly(t, &[120.0, -0.9808, -0.01532, 1.0 / 7129.0])
    } else if y < 1800.0 {
        let t = y - 1700.0;
        poly(t, &[8.83, 0.1603, -0.0059285, 0.00013336, -1.0 / 1_174_000.0])
    } else if y < 1860.0 {
        let t = y - 1800.0;
        poly(
            t,
            &[
                13.72,
                -0.332447,
                0.0068612,
                0.0041116,
                -0.00037436,
                0.0000121272,
                -0.0000001699,
                0.000000000875,
            ],
        )
    } else if y < 1900.0 {
        let t = y - 1860.0;
        poly(
            t,
            &[7.62, 0.5737, -0.251754, 0.01680668, -0.0004473624, 1.0 / 233_174.0],
        )
    } else if y < 1920.0 {
        let t = y - 1900.0;
        poly(t, &[-2.79, 1.494119, -0.0598939, 0.0061966, -0.000197])
    } else if y < 1941.0 {
        let t = y - 1920.0;
        poly(t, &[21.20, 0.84493, -0.076100, 0.0020936])
    } else if y < 1961.0 {
        let t = y - 1950.0;
        poly(t, &[29.07, 0.407, -1.0 / 233.0, 1.0 / 2547.0])
    } else if y < 1986.0 {
        let t = y - 1975.0;
        poly(t, &[45.45, 1.067, -1.0 / 260.0, -1.0 / 718.0])
    } else if y < 2005.0 {
        let t = y - 2000.0;
        poly(
            t,
            &[63.86, 0.3345, -0.060374, 0.0017275, 0.000651814, 0.00002373599],
        )
    } else if y < 2050.0 {
        let t = y - 2000.0;
        poly(t, &[62.92, 0.32217, 0.005589])
    } else if y < 2150.0 {
        let u = (y - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u - 0.5628 * (2150.0 - y)
    } else {
        let u = (y - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u
    }
}

/// Horner evaluation, coefficients in ascending power order.
fn poly(x: f64, coeffs: &[f64]) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, c| acc * x + c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_2000() {
        let dt = delta_t_seconds(2000.0);
        assert!((dt - 63.86).abs() < 1e-9, "ΔT(2000) = {dt}");
    }

    #[test]
    fn year_1990_close_to_observed() {
        // Observed ΔT in mid-1990 was about 56.9 s.
        let dt = delta_t_seconds(1990.5);
        assert!((dt - 56.9).abs() < 0.5, "ΔT(1990.5) = {dt}");
    }

    #[test]
    fn year_1900_close_to_observed() {
        let dt = delta_t_seconds(1900.0);
        assert!((dt + 2.79).abs() < 1e-9, "ΔT(1900) = {dt}");
    }

    #[test]
    fn continuous_across_2005_boundary() {
        let before = delta_t_seconds(2004.999_999);
        let after = delta_t_seconds(2005.0);
        assert!((before - after).abs() < 0.5, "{before} vs {after}");
    }

    #[test]
    fn remote_past_is_large_and_positive() {
        assert!(delta_t_seconds(0.0) > 10_000.0);
        assert!(delta_t_seconds(-1000.0) > 20_000.0);
    }

    #[test]
    fn horner_matches_direct_sum() {
        let x: f64 = 1.7;
        let direct = 1.0 + 2.0 * x + 3.0 * x * x;
        assert!((poly(x, &[1.0, 2.0, 3.0]) - direct).abs() < 1e-12);
    }
}
