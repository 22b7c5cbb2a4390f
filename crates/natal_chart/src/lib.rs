//! Natal chart computation.
//!
//! Turns civil birth data and a location into a [`Chart`]: tropical body
//! longitudes with retrograde flags, ascendant and midheaven, and twelve
//! equal-house cusps, each placed in the zodiac.
//!
//! ```no_run
//! use natal_chart::{ChartRequest, compute_chart};
//!
//! let request = ChartRequest::new("1990-06-15", "14:30", "Europe/Paris", 48.8566, 2.3522, 0.0);
//! let chart = compute_chart(&request)?;
//! println!("ascendant: {}", chart.angles.ascendant.placement);
//! # Ok::<(), natal_chart::ChartError>(())
//! ```

pub mod angles;
pub mod chart;
pub mod config;
pub mod engine;
pub mod error;
pub mod houses;
pub mod zodiac;

pub use angles::{Angles, angles};
pub use chart::{Chart, ChartAngles, ChartBody, ChartHouse, PlacedPoint, assemble};
pub use config::ChartConfig;
pub use engine::{ChartEngine, ChartRequest, compute_chart};
pub use error::ChartError;
pub use houses::{HOUSE_COUNT, HouseCusp, house_of, houses};
pub use zodiac::{ALL_SIGNS, Dms, Element, Modality, ZodiacPlacement, ZodiacSign, placement};
