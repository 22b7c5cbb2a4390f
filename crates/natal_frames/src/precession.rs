//! IAU 2006 general precession in ecliptic longitude.
//!
//! p_A is the accumulated westward drift of the equinox along the ecliptic
//! since J2000.0. Adding it to a J2000 ecliptic longitude gives the
//! longitude referred to the mean equinox of date, neglecting the slow
//! motion of the ecliptic itself (below 0.5″ per century near the ecliptic).
//!
//! Source: Capitaine, Wallace & Chapront 2003, A&A 412, 567 (Table 1).

use crate::angle::normalize_deg;

/// General precession in longitude p_A, arcseconds.
///
/// `t` = Julian centuries of TT since J2000.0. About 5028.80″ per century.
pub fn general_precession_longitude_arcsec(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    5028.796195 * t + 1.1054348 * t2 + 0.00007964 * t3 - 0.000023857 * t4 - 0.0000000383 * t5
}

/// General precession in longitude p_A, degrees.
pub fn general_precession_longitude_deg(t: f64) -> f64 {
    general_precession_longitude_arcsec(t) / 3600.0
}

/// Refer a J2000 ecliptic longitude to the mean equinox of date.
///
/// Result in [0, 360).
pub fn precess_longitude_from_j2000(lon_j2000_deg: f64, t: f64) -> f64 {
    normalize_deg(lon_j2000_deg + general_precession_longitude_deg(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_at_j2000() {
        assert_eq!(general_precession_longitude_arcsec(0.0), 0.0);
    }

    #[test]
    fn one_century() {
        let p = general_precession_longitude_arcsec(1.0);
        assert!((p - 5029.90).abs() < 1.0, "p_A(1.0) = {p}");
    }

    #[test]
    fn annual_rate() {
        let p = general_precession_longitude_arcsec(0.01);
        assert!((p - 50.29).abs() < 0.1, "p_A(0.01) = {p}");
    }

    #[test]
    fn earlier_epochs_precess_backwards() {
        assert!(general_precession_longitude_arcsec(-1.0) < 0.0);
        let lon = precess_longitude_from_j2000(0.1, -0.1);
        assert!(lon > 359.0, "lon = {lon}");
    }

    #[test]
    fn precessed_longitude_wraps() {
        let lon = precess_longitude_from_j2000(359.9, 0.5);
        assert!((lon - (359.9 + general_precession_longitude_deg(0.5) - 360.0)).abs() < 1e-9);
    }
}
