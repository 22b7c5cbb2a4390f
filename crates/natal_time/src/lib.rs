//! Civil time resolution and astronomical time scales.
//!
//! This crate provides:
//! - The Time Resolver: civil date + time + IANA zone → UTC instant
//! - [`BirthMoment`], the resolved instant with Julian Date views
//! - Julian Date ↔ calendar conversions
//! - ΔT (TT − UT) from the Espenak–Meeus polynomials
//! - Earth Rotation Angle, GMST, GAST and local sidereal time

pub mod delta_t;
pub mod error;
pub mod julian;
pub mod moment;
pub mod resolver;
pub mod sidereal;

pub use delta_t::delta_t_seconds;
pub use error::{CivilField, TimeError};
pub use julian::{
    DAYS_PER_JULIAN_CENTURY, J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar,
    jd_to_centuries,
};
pub use moment::BirthMoment;
pub use resolver::{resolve, resolve_civil};
pub use sidereal::{
    apparent_sidereal_time_rad, earth_rotation_angle_rad, gmst_rad, local_sidereal_time_rad,
};

/// Re-exported so callers can build [`resolve_civil`] inputs without a direct dependency.
pub use chrono_tz::Tz;
