//! Hard-coded sample fleet
//!
//! Stands in for a live data feed; the shape is exactly `UnitReading`.
//! Tiles are rendered in this order, by position.

use crate::reading::UnitReading;

/// The six demo skids shown on the dashboard, in display order.
pub fn sample_fleet() -> Vec<UnitReading> {
    [
        ("Skid 1", 50.0, 4.49, 4.4, 5.0, 60, false),
        ("Skid 2", 30.0, 4.20, 4.19, 4.0, 55, true),
        ("Skid 3", 70.0, 3.92, 3.9, 6.0, 70, false),
        ("Skid 4", 60.0, 3.82, 3.8, 5.0, 65, true),
        ("Skid 5", 80.0, 4.97, 5.0, 3.0, 75, false),
        ("Skid 6", 45.0, 4.43, 4.4, 4.0, 50, true),
    ]
    .into_iter()
    .map(
        |(title, tank_level, actual_flow_rate, target_flow, pressure_delta, strokes_per_min, has_fault)| {
            UnitReading {
                title: title.to_string(),
                tank_level,
                actual_flow_rate,
                target_flow,
                pressure_delta,
                strokes_per_min,
                has_fault,
            }
        },
    )
    .collect()
}
