//! The chart consumer interface.
//!
//! [`ChartEngine::compute`] runs the whole pipeline for one request:
//! field presence, coordinates, time resolution, polar geometry, ephemeris,
//! angles, houses and assembly, stopping at the first failure.

use log::{debug, info};
use natal_ephemeris::{AnalyticEphemeris, EphemerisProvider, ObserverLocation, positions_at};
use natal_time::resolver::require_present;
use natal_time::{CivilField, resolve};
use serde::{Deserialize, Serialize};

use crate::angles::angles;
use crate::chart::{Chart, assemble};
use crate::config::ChartConfig;
use crate::error::ChartError;
use crate::houses::houses;

/// Raw birth data as supplied by a caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRequest {
    /// Civil date, `YYYY-MM-DD`.
    pub date: Option<String>,
    /// Civil time, `HH:MM` or `HH:MM:SS`.
    pub time: Option<String>,
    /// IANA zone identifier, e.g. `Europe/Paris`.
    pub zone: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Metres above sea level.
    #[serde(default)]
    pub elevation: f64,
}

impl ChartRequest {
    pub fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        zone: impl Into<String>,
        latitude: f64,
        longitude: f64,
        elevation: f64,
    ) -> Self {
        Self {
            date: Some(date.into()),
            time: Some(time.into()),
            zone: zone.into(),
            latitude,
            longitude,
            elevation,
        }
    }

    pub fn observer(&self) -> ObserverLocation {
        ObserverLocation::new(self.latitude, self.longitude, self.elevation)
    }
}

/// Computes charts against an ephemeris provider.
#[derive(Debug, Clone)]
pub struct ChartEngine<P = AnalyticEphemeris> {
    provider: P,
    config: ChartConfig,
}

impl ChartEngine<AnalyticEphemeris> {
    /// Engine backed by the analytic provider, node mode taken from `config`.
    pub fn analytic(config: ChartConfig) -> Result<Self, ChartError> {
        Self::new(AnalyticEphemeris::with_node_mode(config.node_mode), config)
    }
}

impl Default for ChartEngine<AnalyticEphemeris> {
    fn default() -> Self {
        Self {
            provider: AnalyticEphemeris::new(),
            config: ChartConfig::default(),
        }
    }
}

impl<P: EphemerisProvider> ChartEngine<P> {
    /// Engine over an already configured provider.
    ///
    /// `config.node_mode` is not applied here: the provider keeps its own
    /// node setting. Use [`ChartEngine::analytic`] to have the analytic
    /// provider built from the config.
    pub fn new(provider: P, config: ChartConfig) -> Result<Self, ChartError> {
        config.validate()?;
        Ok(Self { provider, config })
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Compute a chart for `request`.
    pub fn compute(&self, request: &ChartRequest) -> Result<Chart, ChartError> {
        require_present(request.date.as_deref(), CivilField::Date)?;
        require_present(request.time.as_deref(), CivilField::Time)?;

        let observer = request.observer();
        observer.validate()?;

        let moment = resolve(request.date.as_deref(), request.time.as_deref(), &request.zone)?;

        if observer.is_polar() {
            return Err(ChartError::DegenerateGeometry {
                latitude_deg: observer.latitude_deg,
            });
        }

        let step = self.config.retrograde_step()?;
        let positions = positions_at(
            &self.provider,
            &moment,
            &observer,
            self.config.bodies(),
            step,
        )?;
        debug!(count = positions.len(); "body positions ready");

        let angles = angles(&moment, &observer)?;
        let cusps = houses(angles.ascendant_deg);
        let chart = assemble(moment, &angles, &positions, &cusps);

        info!(
            moment:% = moment,
            provider = self.provider.name(),
            asc_deg = chart.ascendant_deg();
            "chart computed"
        );
        Ok(chart)
    }
}

/// Compute a chart with the analytic provider and default settings.
pub fn compute_chart(request: &ChartRequest) -> Result<Chart, ChartError> {
    ChartEngine::default().compute(request)
}
