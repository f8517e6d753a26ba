//! BDD step definitions for flow series generation

use chrono::{DateTime, Local, TimeDelta, TimeZone};
use cucumber::{given, then};

use skid_telemetry::series::{FlowSampler, FLOW_RANGE};

use crate::world::TileWorld;

fn parse_local_hm(hm: &str) -> DateTime<Local> {
    let (h, m) = hm.split_once(':').expect("time must be HH:MM");
    Local
        .with_ymd_and_hms(2026, 8, 7, h.parse().unwrap(), m.parse().unwrap(), 0)
        .unwrap()
}

#[given(expr = "a flow series generated at local time {string}")]
fn generate_series(world: &mut TileWorld, hm: String) {
    let now = parse_local_hm(&hm);
    world.series = Some(FlowSampler::generate_at(now));
    world.generated_at = Some(now);
}

#[then(expr = "it has exactly {int} points")]
fn has_points(world: &mut TileWorld, expected: u64) {
    let series = world.series.as_ref().expect("series not generated");
    assert_eq!(series.points().len() as u64, expected);
}

#[then(expr = "its labels run from {string} to {string}")]
fn labels_run(world: &mut TileWorld, first: String, last: String) {
    let series = world.series.as_ref().expect("series not generated");
    assert_eq!(series.points().first().unwrap().label, first);
    assert_eq!(series.points().last().unwrap().label, last);
}

#[then(expr = "consecutive labels are {int} minutes apart")]
fn labels_spaced(world: &mut TileWorld, minutes: i64) {
    let series = world.series.as_ref().expect("series not generated");
    let now = world.generated_at.expect("generation time not recorded");
    let len = series.points().len() as i64;
    for (i, point) in series.points().iter().enumerate() {
        let expected = (now - TimeDelta::minutes(minutes * (len - 1 - i as i64)))
            .format("%H:%M")
            .to_string();
        assert_eq!(point.label, expected, "label {} out of step", i);
    }
}

#[then("every value lies within the flow band")]
fn values_in_band(world: &mut TileWorld) {
    let series = world.series.as_ref().expect("series not generated");
    for point in series.points() {
        assert!(
            FLOW_RANGE.contains(&point.value),
            "value {} outside {:?}",
            point.value,
            FLOW_RANGE
        );
    }
}
