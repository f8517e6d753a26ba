//! Static per-unit readings supplied to each dashboard tile

use serde::{Deserialize, Serialize};

use crate::error::{Result, TelemetryError};

/// A snapshot of one skid's gauges, immutable for the tile's lifetime.
///
/// This struct is the seam a live data feed would fill in; today the values
/// come from the hard-coded sample fleet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitReading {
    pub title: String,
    /// Reservoir fill, percent (0-100)
    pub tank_level: f64,
    /// Instantaneous flow, L/hr
    pub actual_flow_rate: f64,
    /// Commanded flow, L/hr
    pub target_flow: f64,
    /// Pressure differential across the skid, bar
    pub pressure_delta: f64,
    /// Pump stroke frequency
    pub strokes_per_min: u32,
    /// Whether the skid has an active alarm condition
    #[serde(default)]
    pub has_fault: bool,
}

impl UnitReading {
    /// Check the reading for values a sane sensor cannot produce.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("tank level", self.tank_level),
            ("actual flow rate", self.actual_flow_rate),
            ("target flow", self.target_flow),
            ("pressure delta", self.pressure_delta),
        ] {
            if !value.is_finite() {
                return Err(TelemetryError::NonFinite {
                    unit: self.title.clone(),
                    field,
                });
            }
        }

        if !(0.0..=100.0).contains(&self.tank_level) {
            return Err(TelemetryError::TankLevelOutOfRange {
                unit: self.title.clone(),
                value: self.tank_level,
            });
        }

        for (field, value) in [
            ("actual flow rate", self.actual_flow_rate),
            ("target flow", self.target_flow),
        ] {
            if value < 0.0 {
                return Err(TelemetryError::NegativeRate {
                    unit: self.title.clone(),
                    field,
                    value,
                });
            }
        }

        Ok(())
    }

    /// Normalize a malformed reading instead of rendering it as-is.
    ///
    /// Non-finite gauges are zeroed, tank level is clamped into 0-100 and
    /// negative flow rates are floored at zero. Logs a warning whenever a
    /// value had to change.
    pub fn clamped(mut self) -> Self {
        if self.validate().is_ok() {
            return self;
        }

        for value in [
            &mut self.tank_level,
            &mut self.actual_flow_rate,
            &mut self.target_flow,
            &mut self.pressure_delta,
        ] {
            if !value.is_finite() {
                *value = 0.0;
            }
        }
        self.tank_level = self.tank_level.clamp(0.0, 100.0);
        self.actual_flow_rate = self.actual_flow_rate.max(0.0);
        self.target_flow = self.target_flow.max(0.0);

        log::warn!("Clamped out-of-range reading for '{}'", self.title);
        self
    }
}
