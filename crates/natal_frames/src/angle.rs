//! Angle units and wrapping.

use std::f64::consts::PI;

/// Arcseconds to radians: 1″ = π / (180 × 3600).
pub const ARCSEC_TO_RAD: f64 = PI / 648_000.0;

/// Normalize an angle to [0, 360) degrees.
///
/// Inputs within one ulp below a multiple of 360 map to 0, never to 360.
pub fn normalize_deg(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

/// Wrap an angular difference into (−180, 180] degrees.
pub fn wrap_signed_deg(deg: f64) -> f64 {
    let r = normalize_deg(deg);
    if r > 180.0 { r - 360.0 } else { r }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_identity_in_range() {
        assert_eq!(normalize_deg(45.0), 45.0);
        assert_eq!(normalize_deg(0.0), 0.0);
    }

    #[test]
    fn normalize_full_turn_is_zero() {
        assert_eq!(normalize_deg(360.0), 0.0);
        assert_eq!(normalize_deg(-360.0), 0.0);
    }

    #[test]
    fn normalize_negative() {
        assert!((normalize_deg(-10.0) - 350.0).abs() < 1e-12);
        assert!((normalize_deg(-370.0) - 350.0).abs() < 1e-10);
    }

    #[test]
    fn normalize_tiny_negative_stays_below_360() {
        let r = normalize_deg(-1e-15);
        assert!((0.0..360.0).contains(&r), "r = {r}");
    }

    #[test]
    fn normalize_large() {
        assert!((normalize_deg(730.0) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn wrap_signed_across_aries() {
        assert!((wrap_signed_deg(1.0 - 359.0) - 2.0).abs() < 1e-12);
        assert!((wrap_signed_deg(359.0 - 1.0) + 2.0).abs() < 1e-12);
    }

    #[test]
    fn wrap_signed_half_turn_is_positive() {
        assert_eq!(wrap_signed_deg(180.0), 180.0);
        assert_eq!(wrap_signed_deg(-180.0), 180.0);
    }

    #[test]
    fn arcsec_constant() {
        assert!((3600.0 * ARCSEC_TO_RAD - 1.0_f64.to_radians()).abs() < 1e-18);
    }
}
