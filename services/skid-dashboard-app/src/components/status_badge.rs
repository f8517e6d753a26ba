//! Status badge component

use leptos::prelude::*;

use skid_telemetry::tile::SkidStatus;

/// A colored status dot plus label: green "Live" or amber "Fault Detected".
///
/// The `flashing` class hook is only ever true while the unit is faulted;
/// without the `fault-flash` feature nothing drives the phase and the dot
/// stays steady.
#[component]
pub fn StatusBadge(status: SkidStatus, #[prop(into)] flashing: Signal<bool>) -> impl IntoView {
    let color = match status {
        SkidStatus::Live => "#2e7d32",
        SkidStatus::FaultDetected => "#ff8f00",
    };

    let dot_style = format!(
        "display: inline-block; width: 8px; height: 8px; border-radius: 50%; \
         background-color: {};",
        color
    );

    view! {
        <span style="display: inline-flex; align-items: center; gap: 4px; font-size: 0.8em; color: grey;">
            <span class="status-dot" class:flashing=move || flashing.get() style=dot_style></span>
            {status.to_string()}
        </span>
    }
}
