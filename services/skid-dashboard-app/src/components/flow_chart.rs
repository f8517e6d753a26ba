//! Inline SVG line chart of a flow series

use leptos::prelude::*;

use skid_telemetry::series::FlowSeries;

const WIDTH: f64 = 400.0;
const HEIGHT: f64 = 220.0;
const MARGIN_LEFT: f64 = 36.0;
const MARGIN_RIGHT: f64 = 12.0;
const MARGIN_TOP: f64 = 12.0;
const MARGIN_BOTTOM: f64 = 28.0;

/// Fixed y-axis window, L/hr. Matches the gauge scale, not the data band,
/// so the trace reads as a stable band around the target flow.
const Y_MAX: f64 = 5.0;

fn plot_width() -> f64 {
    WIDTH - MARGIN_LEFT - MARGIN_RIGHT
}

fn plot_height() -> f64 {
    HEIGHT - MARGIN_TOP - MARGIN_BOTTOM
}

fn x_at(i: usize, len: usize) -> f64 {
    MARGIN_LEFT + i as f64 / (len - 1).max(1) as f64 * plot_width()
}

fn y_at(value: f64) -> f64 {
    MARGIN_TOP + plot_height() * (1.0 - value.clamp(0.0, Y_MAX) / Y_MAX)
}

/// The `points` attribute for the series polyline.
fn polyline_points(series: &FlowSeries) -> String {
    let len = series.points().len();
    series
        .values()
        .enumerate()
        .map(|(i, v)| format!("{:.1},{:.1}", x_at(i, len), y_at(v)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Line chart of flow rate over time, redrawn whenever the series signal
/// changes.
#[component]
pub fn FlowChart(#[prop(into)] series: Signal<FlowSeries>) -> impl IntoView {
    let points = move || series.with(|s| polyline_points(s));
    let first_label = move || {
        series.with(|s| {
            s.points()
                .first()
                .map(|p| p.label.clone())
                .unwrap_or_default()
        })
    };
    let mid_label = move || {
        series.with(|s| {
            s.points()
                .get(s.points().len() / 2)
                .map(|p| p.label.clone())
                .unwrap_or_default()
        })
    };
    let last_label = move || {
        series.with(|s| {
            s.points()
                .last()
                .map(|p| p.label.clone())
                .unwrap_or_default()
        })
    };

    let axis_bottom = format!("{:.1}", MARGIN_TOP + plot_height());
    let axis_right = format!("{:.1}", WIDTH - MARGIN_RIGHT);
    let tick_x = format!("{:.1}", MARGIN_LEFT - 6.0);

    let y_ticks = (0..=Y_MAX as u32)
        .map(|v| {
            let y = format!("{:.1}", y_at(f64::from(v)) + 3.0);
            view! {
                <text x=tick_x.clone() y=y fill="#888" font-size="10" text-anchor="end">
                    {v.to_string()}
                </text>
            }
        })
        .collect::<Vec<_>>();

    let mid_y = MARGIN_TOP + plot_height() / 2.0;
    let y_title_transform = format!("rotate(-90, 10, {:.1})", mid_y);

    view! {
        <svg
            viewBox=format!("0 0 {} {}", WIDTH, HEIGHT)
            style="width: 100%; height: 220px;"
            role="img"
        >
            <line
                x1=MARGIN_LEFT.to_string()
                y1=MARGIN_TOP.to_string()
                x2=MARGIN_LEFT.to_string()
                y2=axis_bottom.clone()
                stroke="#ccc"
                stroke-width="1"
            />
            <line
                x1=MARGIN_LEFT.to_string()
                y1=axis_bottom.clone()
                x2=axis_right
                y2=axis_bottom.clone()
                stroke="#ccc"
                stroke-width="1"
            />
            {y_ticks}
            <polyline
                points=points
                fill="none"
                stroke="rgba(75, 192, 192, 1)"
                stroke-width="1.5"
            />
            <text
                x=MARGIN_LEFT.to_string()
                y=(HEIGHT - 8.0).to_string()
                fill="#888"
                font-size="10"
                text-anchor="start"
            >
                {first_label}
            </text>
            <text
                x=(WIDTH / 2.0).to_string()
                y=(HEIGHT - 8.0).to_string()
                fill="#888"
                font-size="10"
                text-anchor="middle"
            >
                {mid_label}
            </text>
            <text
                x=(WIDTH - MARGIN_RIGHT).to_string()
                y=(HEIGHT - 8.0).to_string()
                fill="#888"
                font-size="10"
                text-anchor="end"
            >
                {last_label}
            </text>
            <text
                x="10"
                y=format!("{:.1}", mid_y)
                fill="#888"
                font-size="10"
                text-anchor="middle"
                transform=y_title_transform
            >
                "Flow Rate (L/Hr)"
            </text>
        </svg>
    }
}
