//! Ephemeris layer for natal charts.
//!
//! - [`CelestialBody`] catalog and rendering order
//! - [`ObserverLocation`] with coordinate validation
//! - [`EphemerisProvider`], the contract every position source implements
//! - [`AnalyticEphemeris`], the built-in closed-form provider
//! - [`positions_at`], the adapter producing longitudes and retrograde flags

pub mod adapter;
pub mod analytic;
pub mod body;
pub mod error;
pub mod observer;
pub mod provider;

pub use adapter::{
    BodyPosition, DEFAULT_RETROGRADE_STEP_HOURS, MAX_RETROGRADE_STEP_HOURS, positions_at,
    retrograde_step,
};
pub use analytic::{AnalyticEphemeris, NodeMode};
pub use body::{CATALOG, CelestialBody, PLANETS};
pub use error::{CoordinateError, EphemerisError};
pub use observer::ObserverLocation;
pub use provider::EphemerisProvider;
