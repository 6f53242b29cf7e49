//! Inline-SVG doughnut and line charts.
//!
//! Each component renders one payload; the reports page mounts a fresh
//! instance per response, so a range refresh replaces the chart wholesale
//! instead of mutating it.

use crate::reports::geometry::{
    annular_path, area_path, doughnut_slices, format_value, line_points, points_attr,
    tick_values, value_scale, y_for,
};
use contracts::reports::ChartPayload;
use leptos::prelude::*;

/// Fallback when the payload carries no colors of its own.
const DEFAULT_PALETTE: [&str; 4] = ["#198754", "#0d6efd", "#dc3545", "#ffc107"];

const DOUGHNUT_SIZE: f64 = 240.0;
const DOUGHNUT_R_OUTER: f64 = 100.0;
const DOUGHNUT_R_INNER: f64 = 60.0;

const LINE_PLOT_W: f64 = 560.0;
const LINE_PLOT_H: f64 = 180.0;
const LINE_MARGIN_LEFT: f64 = 56.0;
const LINE_MARGIN_TOP: f64 = 12.0;
const LINE_MARGIN_BOTTOM: f64 = 28.0;

#[component]
#[allow(non_snake_case)]
pub fn DoughnutChart(payload: ChartPayload, #[prop(into)] label: String) -> impl IntoView {
    let dataset = payload.primary().cloned();
    let values = dataset.as_ref().map(|d| d.data.clone()).unwrap_or_default();
    let slices = doughnut_slices(&values);
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();

    let color_for = {
        let background = dataset.as_ref().and_then(|d| d.background_color.clone());
        move |index: usize| -> String {
            background
                .as_ref()
                .and_then(|c| c.slice_color(index))
                .unwrap_or(DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()])
                .to_string()
        }
    };
    let stroke = dataset
        .as_ref()
        .and_then(|d| d.border_color.clone())
        .unwrap_or_else(|| "#343a40".to_string());
    let stroke_width = dataset.as_ref().and_then(|d| d.border_width).unwrap_or(1.0);

    let center = DOUGHNUT_SIZE / 2.0;
    let view_box = format!("0 0 {} {}", DOUGHNUT_SIZE, DOUGHNUT_SIZE);

    let body = if slices.is_empty() {
        view! {
            <text x=center y=center text-anchor="middle" class="chart__empty">
                "No Data"
            </text>
        }
        .into_any()
    } else {
        slices
            .iter()
            .enumerate()
            .map(|(index, slice)| {
                let d = annular_path(center, center, DOUGHNUT_R_OUTER, DOUGHNUT_R_INNER, *slice);
                view! {
                    <path
                        d=d
                        fill=color_for(index)
                        stroke=stroke.clone()
                        stroke-width=stroke_width
                    />
                }
            })
            .collect_view()
            .into_any()
    };

    let legend = payload
        .labels
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let value = values.get(index).copied().unwrap_or(0.0);
            let share = if total > 0.0 { value / total * 100.0 } else { 0.0 };
            let swatch_style = format!("background-color: {};", color_for(index));
            let entry = format!("{} — {} ({:.1}%)", name, format_value(value), share);
            view! {
                <li class="chart-legend__item">
                    <span class="chart-legend__swatch" style=swatch_style></span>
                    <span>{entry}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="chart chart--doughnut">
            <svg viewBox=view_box role="img" aria-label=label>
                {body}
            </svg>
            <ul class="chart-legend">{legend}</ul>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn LineChart(payload: ChartPayload, #[prop(into)] label: String) -> impl IntoView {
    let dataset = payload.primary().cloned();
    let data = dataset.as_ref().map(|d| d.data.clone()).unwrap_or_default();
    let scale = value_scale(&data);
    let points = line_points(&data, LINE_PLOT_W, LINE_PLOT_H);

    let stroke = dataset
        .as_ref()
        .and_then(|d| d.border_color.clone())
        .unwrap_or_else(|| DEFAULT_PALETTE[1].to_string());
    let fill = dataset
        .as_ref()
        .filter(|d| d.fill == Some(true))
        .and_then(|d| {
            d.background_color
                .as_ref()
                .and_then(|c| c.slice_color(0))
                .map(str::to_string)
        });
    let series_label = dataset.and_then(|d| d.label).unwrap_or_default();

    let x_left = LINE_MARGIN_LEFT;
    let x_right = LINE_MARGIN_LEFT + LINE_PLOT_W;
    let plot_bottom = LINE_MARGIN_TOP + LINE_PLOT_H;
    let width = x_right + 12.0;
    let height = plot_bottom + LINE_MARGIN_BOTTOM;
    let view_box = format!("0 0 {} {}", width, height);

    let ticks = tick_values(scale, 5)
        .into_iter()
        .map(|value| {
            let y = LINE_MARGIN_TOP + y_for(scale, value, LINE_PLOT_H);
            let label_x = x_left - 8.0;
            let label_y = y + 4.0;
            view! {
                <g>
                    <line x1=x_left y1=y x2=x_right y2=y class="chart__gridline" />
                    <text x=label_x y=label_y text-anchor="end" class="chart__tick">
                        {format_value(value)}
                    </text>
                </g>
            }
        })
        .collect_view();

    // First and last x labels are enough for a daily series.
    let x_labels = {
        let first = payload.labels.first().cloned();
        let last = if payload.labels.len() > 1 {
            payload.labels.last().cloned()
        } else {
            None
        };
        let base_y = plot_bottom + 18.0;
        view! {
            {first
                .map(|text| {
                    view! {
                        <text x=x_left y=base_y text-anchor="start" class="chart__tick">
                            {text}
                        </text>
                    }
                })}
            {last
                .map(|text| {
                    view! {
                        <text x=x_right y=base_y text-anchor="end" class="chart__tick">
                            {text}
                        </text>
                    }
                })}
        }
    };

    let body = if points.is_empty() {
        let center_x = x_left + LINE_PLOT_W / 2.0;
        let center_y = LINE_MARGIN_TOP + LINE_PLOT_H / 2.0;
        view! {
            <text x=center_x y=center_y text-anchor="middle" class="chart__empty">
                "No Data"
            </text>
        }
        .into_any()
    } else {
        let shifted: Vec<(f64, f64)> = points
            .iter()
            .map(|(x, y)| (x + LINE_MARGIN_LEFT, y + LINE_MARGIN_TOP))
            .collect();
        let area = fill.map(|color| {
            let d = area_path(&shifted, plot_bottom);
            view! { <path d=d fill=color stroke="none" /> }
        });
        let zero_line = (scale.min < 0.0).then(|| {
            let y = LINE_MARGIN_TOP + y_for(scale, 0.0, LINE_PLOT_H);
            view! { <line x1=x_left y1=y x2=x_right y2=y class="chart__zeroline" /> }
        });
        let line = points_attr(&shifted);
        view! {
            {area}
            {zero_line}
            <polyline points=line fill="none" stroke=stroke stroke-width="2" />
        }
        .into_any()
    };

    view! {
        <div class="chart chart--line">
            <svg viewBox=view_box role="img" aria-label=label>
                {ticks}
                {body}
                {x_labels}
            </svg>
            {(!series_label.is_empty())
                .then(|| view! { <div class="chart__series-label">{series_label}</div> })}
        </div>
    }
}
