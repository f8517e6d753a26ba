//! Synthetic flow-rate history behind the tile chart

use std::time::Duration;

use chrono::{DateTime, Local, TimeDelta};
use rand::Rng;

/// Number of points in a flow series
pub const SERIES_LEN: usize = 30;

/// Minutes between consecutive points
pub const POINT_SPACING_MINUTES: i64 = 10;

/// Flow values are drawn uniformly from this half-open range, L/hr
pub const FLOW_RANGE: std::ops::Range<f64> = 3.5..4.5;

/// Wall-clock period between in-place regenerations while a chart is open
pub const REFRESH_PERIOD: Duration = Duration::from_secs(600);

/// One labelled sample in a flow series
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    /// Sample time, localized HH:MM (24-hour)
    pub label: String,
    /// Flow rate, L/hr
    pub value: f64,
}

/// A fixed-length window of synthetic flow readings, newest point = "now"
#[derive(Debug, Clone, PartialEq)]
pub struct FlowSeries {
    points: Vec<SeriesPoint>,
}

impl FlowSeries {
    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.value)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.points.iter().map(|p| p.label.as_str())
    }
}

/// Generates fixed-length windows of synthetic flow readings.
///
/// Each call is an independent draw; the data is cosmetic and intentionally
/// not reproducible. The oldest point sits 290 minutes behind `now` so the
/// newest lands on `now` itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlowSampler;

impl FlowSampler {
    /// Generate a series ending at `now`, drawing from the thread rng.
    pub fn generate_at(now: DateTime<Local>) -> FlowSeries {
        Self::generate_with(&mut rand::rng(), now)
    }

    /// Generate with an explicit rng. Deterministic given a seeded rng.
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Local>) -> FlowSeries {
        let start = now - TimeDelta::minutes(POINT_SPACING_MINUTES * (SERIES_LEN as i64 - 1));
        let points = (0..SERIES_LEN)
            .map(|i| {
                let at = start + TimeDelta::minutes(POINT_SPACING_MINUTES * i as i64);
                SeriesPoint {
                    label: at.format("%H:%M").to_string(),
                    value: rng.random_range(FLOW_RANGE),
                }
            })
            .collect();
        FlowSeries { points }
    }
}
