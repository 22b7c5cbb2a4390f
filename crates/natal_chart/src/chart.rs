//! Chart Assembler: the structured result handed to consumers.

use natal_ephemeris::{BodyPosition, CelestialBody};
use natal_time::BirthMoment;
use serde::Serialize;

use crate::angles::Angles;
use crate::houses::{HOUSE_COUNT, HouseCusp, house_of};
use crate::zodiac::{ZodiacPlacement, placement};

/// An ecliptic point with its zodiac placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlacedPoint {
    pub longitude_deg: f64,
    pub placement: ZodiacPlacement,
}

impl PlacedPoint {
    pub fn new(longitude_deg: f64) -> Self {
        Self {
            longitude_deg,
            placement: placement(longitude_deg),
        }
    }
}

/// Ascendant and midheaven with placements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartAngles {
    pub ascendant: PlacedPoint,
    pub midheaven: PlacedPoint,
    pub sidereal_time_deg: f64,
}

/// A body's position, placement and house.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartBody {
    #[serde(flatten)]
    pub position: BodyPosition,
    pub placement: ZodiacPlacement,
    /// House 1..=12 the body falls in.
    pub house: u8,
}

/// A house cusp with its placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartHouse {
    #[serde(flatten)]
    pub cusp: HouseCusp,
    pub placement: ZodiacPlacement,
}

/// A complete natal chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub moment: BirthMoment,
    pub angles: ChartAngles,
    /// Bodies in catalog order.
    pub bodies: Vec<ChartBody>,
    /// Houses 1..=12 in ascending order.
    pub houses: [ChartHouse; HOUSE_COUNT],
}

impl Chart {
    pub fn body(&self, body: CelestialBody) -> Option<&ChartBody> {
        self.bodies.iter().find(|b| b.position.body == body)
    }

    pub fn ascendant_deg(&self) -> f64 {
        self.angles.ascendant.longitude_deg
    }

    pub fn midheaven_deg(&self) -> f64 {
        self.angles.midheaven.longitude_deg
    }
}

/// Combine the computed pieces into a [`Chart`].
///
/// Positions keep the order they are given in.
pub fn assemble(
    moment: BirthMoment,
    angles: &Angles,
    positions: &[BodyPosition],
    cusps: &[HouseCusp; HOUSE_COUNT],
) -> Chart {
    let bodies = positions
        .iter()
        .map(|&position| ChartBody {
            position,
            placement: placement(position.longitude_deg),
            house: house_of(position.longitude_deg, cusps),
        })
        .collect();

    Chart {
        moment,
        angles: ChartAngles {
            ascendant: PlacedPoint::new(angles.ascendant_deg),
            midheaven: PlacedPoint::new(angles.midheaven_deg),
            sidereal_time_deg: angles.sidereal_time_deg,
        },
        bodies,
        houses: cusps.map(|cusp| ChartHouse {
            cusp,
            placement: placement(cusp.longitude_deg),
        }),
    }
}
