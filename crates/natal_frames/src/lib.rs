//! Reference-frame helpers for ecliptic-of-date computations.
//!
//! Provides nutation (IAU 2000B), mean and true obliquity (IAU 2006),
//! general precession in longitude, Cartesian → spherical conversion and
//! angle wrapping.

pub mod angle;
pub mod nutation;
pub mod obliquity;
pub mod precession;
pub mod spherical;

pub use angle::{ARCSEC_TO_RAD, normalize_deg, wrap_signed_deg};
pub use nutation::{Nutation, fundamental_arguments, nutation_iau2000b};
pub use obliquity::{
    OBLIQUITY_J2000_ARCSEC, mean_obliquity_arcsec, mean_obliquity_rad, true_obliquity_rad,
};
pub use precession::{
    general_precession_longitude_arcsec, general_precession_longitude_deg,
    precess_longitude_from_j2000,
};
pub use spherical::{EclipticCoords, cartesian_to_spherical};
