//! One dashboard tile per skid
//!
//! Owns the tile's display state, its flow series, and the refresh timer
//! behind the chart view. The timer is armed when the chart opens and
//! cancelled when it closes or the tile unmounts.

use chrono::Local;
use leptos::prelude::*;

use skid_telemetry::series::{FlowSampler, REFRESH_PERIOD};
use skid_telemetry::tile::{ChartCommand, SkidStatus, TileState};
use skid_telemetry::UnitReading;

use crate::components::flow_chart::FlowChart;
use crate::components::status_badge::StatusBadge;
use crate::ticker::RefreshTimer;

#[component]
pub fn SkidTile(reading: UnitReading) -> impl IntoView {
    let status = SkidStatus::of(&reading);
    let state = RwSignal::new(TileState::new(&reading));
    let series = RwSignal::new(FlowSampler::generate_at(Local::now()));
    let timer = StoredValue::new(None::<RefreshTimer>);

    let apply = move |command: ChartCommand| match command {
        ChartCommand::Arm => {
            series.set(FlowSampler::generate_at(Local::now()));
            let armed = RefreshTimer::arm(REFRESH_PERIOD, move || {
                series.set(FlowSampler::generate_at(Local::now()));
            });
            timer.set_value(armed);
        }
        ChartCommand::Disarm => {
            timer.update_value(|slot| {
                if let Some(armed) = slot.take() {
                    armed.cancel();
                }
            });
        }
    };

    // Unmount half of the arm/disarm pairing.
    on_cleanup(move || {
        timer.update_value(|slot| {
            if let Some(armed) = slot.take() {
                armed.cancel();
            }
        });
    });

    #[cfg(feature = "fault-flash")]
    if status == SkidStatus::FaultDetected {
        let flash_timer = StoredValue::new(RefreshTimer::arm(
            std::time::Duration::from_millis(600),
            move || state.update(|s| s.advance_flash()),
        ));
        on_cleanup(move || {
            flash_timer.update_value(|slot| {
                if let Some(armed) = slot.take() {
                    armed.cancel();
                }
            });
        });
    }

    let on_fault_click = move |_| state.update(|s| s.toggle_fault_panel());
    let on_chart_click = move |_| {
        let mut command = None;
        state.update(|s| command = Some(s.toggle_chart()));
        if let Some(command) = command {
            apply(command);
        }
    };

    let title = reading.title.clone();
    let flow_text = format!("{} L/Hr", reading.actual_flow_rate);
    let tank_text = format!("{} %", reading.tank_level);
    let target_text = format!("{} L/Hr", reading.target_flow);
    let pressure_text = format!("{} Bar", reading.pressure_delta);
    let strokes_text = reading.strokes_per_min.to_string();

    view! {
        <section style="position: relative; overflow: hidden; padding: 1rem; text-align: center; background: white; border: 1px solid #dee2e6; border-radius: 0.5rem; box-shadow: 0 1px 3px rgba(0, 0, 0, 0.2);">
            <div style="position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%) rotate(-45deg); color: rgba(0, 0, 0, 0.08); font-size: 4em; font-weight: bold; pointer-events: none; user-select: none;">
                "CONCEPT ONLY"
            </div>

            <header style="display: flex; align-items: center; justify-content: space-between;">
                <div style="display: flex; flex-direction: column; align-items: flex-start; text-align: left;">
                    <h2 style="font-size: 1.55em; margin: 0;">{title}</h2>
                    <StatusBadge
                        status=status
                        flashing=Signal::derive(move || state.with(|s| s.indicator_flashing()))
                    />
                </div>
                <span style="font-size: 1.8em; margin-left: 8px;">{flow_text}</span>
            </header>

            <Show when=move || state.with(|s| s.chart_open)>
                <div style="margin-top: 1rem;">
                    <FlowChart series=series />
                </div>
            </Show>

            <dl style="display: grid; grid-template-columns: 1fr 1fr; gap: 0.25rem; margin: 0.5rem 0 0 0;">
                <dt style="text-align: left;">"Tank Level:"</dt>
                <dd style="text-align: right; margin: 0;">{tank_text}</dd>
                <Show when=move || state.with(|s| s.shows_secondary_metrics())>
                    <dt style="text-align: left;">"Target Flow Rate:"</dt>
                    <dd style="text-align: right; margin: 0;">{target_text.clone()}</dd>
                    <dt style="text-align: left;">"Pressure Delta:"</dt>
                    <dd style="text-align: right; margin: 0;">{pressure_text.clone()}</dd>
                    <dt style="text-align: left;">"Strokes/min:"</dt>
                    <dd style="text-align: right; margin: 0;">{strokes_text.clone()}</dd>
                </Show>
            </dl>

            <footer style="margin-top: 1rem;">
                <Show when=move || state.with(|s| s.offers_fault_toggle())>
                    <button on:click=on_fault_click>
                        {move || state.with(|s| s.fault_button_label())}
                    </button>
                </Show>
                <button on:click=on_chart_click style="margin-left: 8px;">
                    {move || state.with(|s| s.chart_button_label())}
                </button>
                <Show when=move || state.with(|s| s.fault_panel_open)>
                    <p style="color: #c62828; margin: 0.5rem 0 0 0;">
                        "Fault detected: Please check the system for issues."
                    </p>
                </Show>
            </footer>
        </section>
    }
}
