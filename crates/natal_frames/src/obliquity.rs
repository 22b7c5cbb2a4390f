//! Obliquity of the ecliptic.
//!
//! Mean obliquity from the IAU 2006 precession model (Capitaine et al.
//! 2003, Eq. 39; IERS Conventions 2010, Eq. 5.40). True obliquity adds the
//! nutation in obliquity Δε.

use crate::angle::ARCSEC_TO_RAD;
use crate::nutation::Nutation;

/// Mean obliquity at J2000.0, arcseconds.
pub const OBLIQUITY_J2000_ARCSEC: f64 = 84_381.406;

/// IAU 2006 mean obliquity ε_A in arcseconds.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn mean_obliquity_arcsec(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    OBLIQUITY_J2000_ARCSEC - 46.836769 * t - 0.0001831 * t2 + 0.00200340 * t3
        - 0.000000576 * t4
        - 0.0000000434 * t5
}

/// IAU 2006 mean obliquity ε_A in radians.
pub fn mean_obliquity_rad(t: f64) -> f64 {
    mean_obliquity_arcsec(t) * ARCSEC_TO_RAD
}

/// True obliquity ε = ε_A + Δε in radians.
pub fn true_obliquity_rad(t: f64, nutation: &Nutation) -> f64 {
    (mean_obliquity_arcsec(t) + nutation.deps_arcsec) * ARCSEC_TO_RAD
}
