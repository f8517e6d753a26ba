//! BDD step definitions for the skid telemetry crate

pub mod series_steps;
pub mod tile_steps;
