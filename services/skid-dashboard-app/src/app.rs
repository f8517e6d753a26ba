//! Main App component

use crate::components::dashboard_grid::DashboardGrid;
use leptos::prelude::*;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <main style="font-family: system-ui, sans-serif; max-width: 960px; margin: 0 auto; padding: 1rem;">
            <h1>"Skidwatch"</h1>
            <DashboardGrid />
        </main>
    }
}
