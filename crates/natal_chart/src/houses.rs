//! Equal-house division.
//!
//! Cusp 1 is the ascendant; each following cusp lies 30 degrees further
//! along the ecliptic, wrapping at 360.

use natal_frames::normalize_deg;
use serde::Serialize;

/// Number of houses.
pub const HOUSE_COUNT: usize = 12;

/// Arc spanned by each equal house, degrees.
pub const HOUSE_SPAN_DEG: f64 = 30.0;

/// One house cusp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HouseCusp {
    /// House number 1..=12.
    pub index: u8,
    /// Ecliptic longitude of the cusp, degrees [0, 360).
    pub longitude_deg: f64,
}

/// Twelve equal-house cusps starting at `ascendant_deg`.
///
/// Each cusp is stepped from the previous one, so
/// `cusp[n + 1] == normalize_deg(cusp[n] + 30)` holds exactly.
pub fn houses(ascendant_deg: f64) -> [HouseCusp; HOUSE_COUNT] {
    let mut longitude_deg = normalize_deg(ascendant_deg);
    std::array::from_fn(|i| {
        if i > 0 {
            longitude_deg = normalize_deg(longitude_deg + HOUSE_SPAN_DEG);
        }
        HouseCusp {
            index: i as u8 + 1,
            longitude_deg,
        }
    })
}

/// House number (1..=12) containing `longitude_deg`.
///
/// Each house spans [cusp, next cusp); a longitude exactly on a cusp
/// belongs to the house that cusp opens.
pub fn house_of(longitude_deg: f64, cusps: &[HouseCusp; HOUSE_COUNT]) -> u8 {
    let offset = normalize_deg(longitude_deg - cusps[0].longitude_deg);
    ((offset / HOUSE_SPAN_DEG).floor() as u8).min(HOUSE_COUNT as u8 - 1) + 1
}
