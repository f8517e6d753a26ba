//! BDD step definitions for tile display state

use cucumber::{given, then, when};

use skid_telemetry::fleet::sample_fleet;
use skid_telemetry::tile::{ChartCommand, SkidStatus, TileState};

use crate::world::TileWorld;

fn tile(world: &mut TileWorld) -> &mut TileState {
    world.tile.as_mut().expect("tile not constructed")
}

fn timer_balance(commands: &[ChartCommand]) -> i32 {
    commands
        .iter()
        .map(|c| match c {
            ChartCommand::Arm => 1,
            ChartCommand::Disarm => -1,
        })
        .sum()
}

#[given(expr = "the sample reading for {string}")]
fn sample_reading(world: &mut TileWorld, title: String) {
    let reading = sample_fleet()
        .into_iter()
        .find(|r| r.title == title)
        .unwrap_or_else(|| panic!("no sample skid named '{}'", title));
    world.reading = Some(reading);
}

#[given("a tile constructed from the reading")]
fn given_tile(world: &mut TileWorld) {
    construct_tile(world);
}

#[when("a tile is constructed from the reading")]
fn when_tile(world: &mut TileWorld) {
    construct_tile(world);
}

fn construct_tile(world: &mut TileWorld) {
    let reading = world.reading.as_ref().expect("reading not set");
    world.tile = Some(TileState::new(reading));
    world.commands.clear();
}

#[when("the fault toggle is clicked")]
fn click_fault_toggle(world: &mut TileWorld) {
    tile(world).toggle_fault_panel();
}

#[when("the chart toggle is clicked")]
fn click_chart_toggle(world: &mut TileWorld) {
    let command = tile(world).toggle_chart();
    world.commands.push(command);
}

#[when(expr = "the chart toggle is clicked {int} times")]
fn click_chart_toggle_n(world: &mut TileWorld, clicks: u64) {
    for _ in 0..clicks {
        let command = tile(world).toggle_chart();
        world.commands.push(command);
    }
}

#[when("the tile is torn down")]
fn tear_down(world: &mut TileWorld) {
    if let Some(command) = tile(world).teardown() {
        world.commands.push(command);
    }
}

#[then(expr = "the status reads {string}")]
fn status_reads(world: &mut TileWorld, expected: String) {
    let reading = world.reading.as_ref().expect("reading not set");
    assert_eq!(SkidStatus::of(reading).to_string(), expected);
}

#[then("the fault toggle is offered")]
fn fault_toggle_offered(world: &mut TileWorld) {
    assert!(tile(world).offers_fault_toggle());
}

#[then("the fault toggle is absent")]
fn fault_toggle_absent(world: &mut TileWorld) {
    assert!(!tile(world).offers_fault_toggle());
}

#[then("the fault panel is open")]
fn fault_panel_open(world: &mut TileWorld) {
    assert!(tile(world).fault_panel_open);
}

#[then("the fault panel is closed")]
fn fault_panel_closed(world: &mut TileWorld) {
    assert!(!tile(world).fault_panel_open);
}

#[then(expr = "the fault button reads {string}")]
fn fault_button_reads(world: &mut TileWorld, expected: String) {
    assert_eq!(tile(world).fault_button_label(), expected);
}

#[then("the chart is shown")]
fn chart_shown(world: &mut TileWorld) {
    assert!(tile(world).chart_open);
}

#[then("the chart is hidden")]
fn chart_hidden(world: &mut TileWorld) {
    assert!(!tile(world).chart_open);
}

#[then("the secondary metrics are shown")]
fn secondary_metrics_shown(world: &mut TileWorld) {
    assert!(tile(world).shows_secondary_metrics());
}

#[then("the secondary metrics are hidden")]
fn secondary_metrics_hidden(world: &mut TileWorld) {
    assert!(!tile(world).shows_secondary_metrics());
}

#[then("one refresh timer is armed")]
fn one_timer_armed(world: &mut TileWorld) {
    assert_eq!(timer_balance(&world.commands), 1);
}

#[then("no refresh timer remains armed")]
fn no_timer_armed(world: &mut TileWorld) {
    assert_eq!(timer_balance(&world.commands), 0);
}
