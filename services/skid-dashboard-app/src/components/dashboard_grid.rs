//! Responsive grid of skid tiles

use leptos::prelude::*;

use skid_telemetry::fleet::sample_fleet;

use crate::components::skid_tile::SkidTile;

/// Renders one tile per skid in the sample fleet: a single column on
/// narrow viewports, two-up from medium widths. Tiles are keyed by
/// position, which is fine while the list is static.
#[component]
pub fn DashboardGrid() -> impl IntoView {
    let fleet: Vec<_> = sample_fleet()
        .into_iter()
        .map(|reading| reading.clamped())
        .collect();

    view! {
        <div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(380px, 1fr)); gap: 1rem;">
            {fleet
                .into_iter()
                .map(|reading| view! { <SkidTile reading=reading /> })
                .collect::<Vec<_>>()}
        </div>
    }
}
