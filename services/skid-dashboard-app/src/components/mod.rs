//! UI components for the skid dashboard

pub mod dashboard_grid;
pub mod flow_chart;
pub mod skid_tile;
pub mod status_badge;
