//! Chart computation settings.

use chrono::Duration;
use natal_ephemeris::{
    CATALOG, CelestialBody, DEFAULT_RETROGRADE_STEP_HOURS, NodeMode, PLANETS, retrograde_step,
};
use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Settings for chart computation, loadable from TOML.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Sampling step for retrograde detection, hours in (0, 48].
    pub retrograde_step_hours: f64,

    /// Track the ascending lunar node alongside the planets.
    pub include_lunar_nodes: bool,

    /// Mean or true node for the analytic provider.
    ///
    /// Read only by [`ChartEngine::analytic`](crate::ChartEngine::analytic).
    pub node_mode: NodeMode,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            retrograde_step_hours: DEFAULT_RETROGRADE_STEP_HOURS,
            include_lunar_nodes: true,
            node_mode: NodeMode::Mean,
        }
    }
}

impl ChartConfig {
    pub fn validate(&self) -> Result<(), ChartError> {
        self.retrograde_step().map(|_| ())
    }

    /// The retrograde step as a duration.
    pub fn retrograde_step(&self) -> Result<Duration, ChartError> {
        retrograde_step(self.retrograde_step_hours)
            .map_err(|e| ChartError::InvalidConfig(e.to_string()))
    }

    /// Bodies to place in the chart, in rendering order.
    pub fn bodies(&self) -> &'static [CelestialBody] {
        if self.include_lunar_nodes {
            &CATALOG
        } else {
            &PLANETS
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = ChartConfig::default();
        assert_eq!(c.retrograde_step_hours, 6.0);
        assert!(c.include_lunar_nodes);
        assert_eq!(c.node_mode, NodeMode::Mean);
        assert!(c.validate().is_ok());
        assert_eq!(c.retrograde_step().unwrap(), Duration::hours(6));
    }

    #[test]
    fn bodies_follow_node_flag() {
        let mut c = ChartConfig::default();
        assert_eq!(c.bodies().len(), 11);
        c.include_lunar_nodes = false;
        assert_eq!(c.bodies(), &PLANETS[..]);
    }

    #[test]
    fn rejects_bad_step() {
        for hours in [0.0, -3.0, 49.0, f64::INFINITY] {
            let c = ChartConfig {
                retrograde_step_hours: hours,
                ..ChartConfig::default()
            };
            assert!(matches!(c.validate(), Err(ChartError::InvalidConfig(_))), "{hours}");
        }
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let c: ChartConfig = toml::from_str("node_mode = \"true\"").unwrap();
        assert_eq!(c.node_mode, NodeMode::True);
        assert_eq!(c.retrograde_step_hours, 6.0);
        assert!(c.include_lunar_nodes);
    }

    #[test]
    fn full_toml() {
        let c: ChartConfig = toml::from_str(
            "retrograde_step_hours = 12.0\ninclude_lunar_nodes = false\nnode_mode = \"mean\"",
        )
        .unwrap();
        assert_eq!(c.retrograde_step_hours, 12.0);
        assert!(!c.include_lunar_nodes);
    }
}
