use dioxus::prelude::*;

use crate::core::{color, format};
use crate::t;

use super::datasets::{BarSeries, ChartModel, Orientation, Slice, TimelineSeries};
use super::geometry::{self, Frame, Scale};
use super::{palette, AnalyticsFeed, ChartSlot, SlotState};

const AXIS: &str = "#94a3b8";
const GRID: &str = "#e2e8f0";
const LABEL: &str = "#64748b";

#[component]
pub fn AnalyticsDashboard(feed: AnalyticsFeed, layout: Vec<ChartSlot>) -> Element {
    if !feed.is_available() {
        return rsx! {
            section { class: "analytics analytics--empty",
                p { class: "analytics__placeholder", {t!("analytics-empty")} }
            }
        };
    }

    let cards: Vec<(ChartSlot, SlotState)> = layout
        .iter()
        .map(|&slot| (slot, feed.slot_state(slot)))
        .filter(|(_, state)| !matches!(state, SlotState::Skipped))
        .collect();

    rsx! {
        section { class: "analytics",
            div { class: "analytics__grid",
                for (slot, state) in cards {
                    ChartCard { key: "{slot.element_id()}", slot, state }
                }
            }
        }
    }
}

#[component]
pub fn ChartCard(slot: ChartSlot, state: SlotState) -> Element {
    let wide = matches!(slot, ChartSlot::Timeline | ChartSlot::Location);
    let class = if wide {
        "analytics-card analytics-card--wide"
    } else {
        "analytics-card"
    };

    let body = match state {
        SlotState::Ready(ChartModel::Line(series)) => rsx! { LineChart { series } },
        SlotState::Ready(ChartModel::Doughnut(slices)) => rsx! { DoughnutChart { slices } },
        SlotState::Ready(ChartModel::Bar(series)) => rsx! { BarChart { series } },
        SlotState::Failed(_) => rsx! {
            div { class: "analytics-card__error",
                p { class: "text-center text-muted", {t!("chart-load-error")} }
            }
        },
        SlotState::Skipped => rsx! {},
    };

    rsx! {
        article { class: "{class}",
            h3 { class: "analytics-card__title", {slot_title(slot)} }
            div { id: "{slot.element_id()}", class: "analytics-card__body", {body} }
        }
    }
}

fn slot_title(slot: ChartSlot) -> String {
    match slot {
        ChartSlot::Timeline => t!("chart-timeline-title"),
        ChartSlot::Device => t!("chart-device-title"),
        ChartSlot::Os => t!("chart-os-title"),
        ChartSlot::Hourly => t!("chart-hourly-title"),
        ChartSlot::Location => t!("chart-location-title"),
    }
}

#[component]
fn LineChart(series: TimelineSeries) -> Element {
    let frame = Frame::new(640.0, 260.0, 44.0);
    let scale = Scale::for_max(series.counts.iter().copied().max().unwrap_or(0));
    let points = geometry::line_points(&frame, &scale, &series.counts);
    let line = geometry::points_attr(&points);
    let area = geometry::area_attr(&frame, &points);
    let fill = color::hex_to_rgba(palette::PRIMARY, 0.2);
    let baseline = frame.baseline();
    let label_y = baseline + 20.0;
    let view_box = frame.view_box();

    // Only a handful of date labels fit under the axis.
    let every = (series.dates.len() / 6).max(1);
    let date_labels: Vec<(f64, String)> = points
        .iter()
        .zip(series.dates.iter())
        .enumerate()
        .filter(|(idx, _)| idx % every == 0)
        .map(|(_, ((x, _), date))| (*x, date.clone()))
        .collect();

    let markers: Vec<(f64, f64, String)> = points
        .iter()
        .zip(series.dates.iter().zip(series.counts.iter()))
        .map(|((x, y), (date, count))| (*x, *y, format!("{date}: {}", format::format_count(*count))))
        .collect();

    rsx! {
        svg { class: "chart chart--line", view_box: "{view_box}", role: "img",
            {value_grid(&frame, &scale)}
            polygon { points: "{area}", fill: "{fill}", stroke: "none" }
            polyline {
                points: "{line}",
                fill: "none",
                stroke: palette::PRIMARY,
                stroke_width: "2",
                stroke_linejoin: "round",
            }
            for (x, y, tip) in markers {
                circle { cx: "{x:.1}", cy: "{y:.1}", r: "3", fill: palette::PRIMARY,
                    title { "{tip}" }
                }
            }
            for (x, date) in date_labels {
                text { x: "{x:.1}", y: "{label_y:.1}", fill: LABEL, font_size: "11", text_anchor: "middle", "{date}" }
            }
        }
    }
}

#[component]
fn DoughnutChart(slices: Vec<Slice>) -> Element {
    let total: u64 = slices.iter().map(|slice| slice.value).sum();
    let (cx, cy, outer, inner) = (100.0, 100.0, 90.0, 56.0);
    let (track_radius, track_width) = ((outer + inner) / 2.0, outer - inner);

    let mut cursor = 0.0;
    let segments: Vec<(String, &'static str, String)> = slices
        .iter()
        .filter(|slice| slice.value > 0 && total > 0)
        .map(|slice| {
            let start = cursor;
            cursor += slice.value as f64 / total as f64;
            (
                geometry::ring_segment(cx, cy, outer, inner, start, cursor),
                slice.color,
                slice.tooltip(),
            )
        })
        .collect();

    rsx! {
        div { class: "chart chart--doughnut",
            svg { view_box: "0 0 200 200", role: "img",
                if segments.is_empty() {
                    circle { cx: "{cx}", cy: "{cy}", r: "{track_radius}", fill: "none", stroke: GRID, stroke_width: "{track_width}" }
                }
                for (d, fill, tip) in segments {
                    path { d, fill, stroke: "#ffffff", stroke_width: "1",
                        title { "{tip}" }
                    }
                }
            }
            ul { class: "chart__legend",
                for slice in slices {
                    li { class: "chart__legend-item", title: "{slice.tooltip()}",
                        span { class: "chart__swatch", style: "background-color: {slice.color}" }
                        span { "{slice.label}" }
                        span { class: "chart__legend-share", "{format::format_percent(slice.share)}" }
                    }
                }
            }
        }
    }
}

#[component]
fn BarChart(series: BarSeries) -> Element {
    let scale = Scale::for_max(series.values.iter().copied().max().unwrap_or(0));
    match series.orientation {
        Orientation::Vertical => vertical_bars(&series, &scale),
        Orientation::Horizontal => horizontal_bars(&series, &scale),
    }
}

fn vertical_bars(series: &BarSeries, scale: &Scale) -> Element {
    let frame = Frame::new(640.0, 260.0, 44.0);
    let slot = frame.plot_width() / series.values.len().max(1) as f64;
    let bar_width = slot * 0.7;
    let label_y = frame.baseline() + 20.0;

    let bars: Vec<(f64, f64, f64, f64, String, Option<String>)> = series
        .values
        .iter()
        .zip(series.labels.iter())
        .enumerate()
        .map(|(idx, (value, label))| {
            let height = scale.ratio(*value) * frame.plot_height();
            let x = frame.left + idx as f64 * slot + (slot - bar_width) / 2.0;
            let y = frame.baseline() - height;
            // 24 hour labels crowd the axis; show every third.
            let axis_label = (idx % 3 == 0).then(|| label.clone());
            let center = x + bar_width / 2.0;
            (x, y, height, center, format!("{label}: {}", format::format_count(*value)), axis_label)
        })
        .collect();

    rsx! {
        svg { class: "chart chart--bar", view_box: "{frame.view_box()}", role: "img",
            {value_grid(&frame, scale)}
            for (x, y, height, center, tip, axis_label) in bars {
                rect { x: "{x:.1}", y: "{y:.1}", width: "{bar_width:.1}", height: "{height:.1}", rx: "3", fill: series.color,
                    title { "{tip}" }
                }
                if let Some(text_label) = axis_label {
                    text { x: "{center:.1}", y: "{label_y:.1}", fill: LABEL, font_size: "11", text_anchor: "middle", "{text_label}" }
                }
            }
        }
    }
}

fn horizontal_bars(series: &BarSeries, scale: &Scale) -> Element {
    let row_height = 32.0;
    let rows = series.values.len().max(1) as f64;
    let frame = Frame::new(640.0, rows * row_height + 52.0, 140.0);
    let bar_height = row_height * 0.6;

    let bars: Vec<(f64, f64, f64, String, String)> = series
        .values
        .iter()
        .zip(series.labels.iter())
        .enumerate()
        .map(|(idx, (value, label))| {
            let y = frame.top + idx as f64 * row_height + (row_height - bar_height) / 2.0;
            let width = scale.ratio(*value) * frame.plot_width();
            (y, width, y + bar_height / 2.0 + 4.0, label.clone(), format!("{label}: {}", format::format_count(*value)))
        })
        .collect();

    let ticks: Vec<(f64, u64)> = scale
        .ticks()
        .into_iter()
        .map(|tick| (frame.left + scale.ratio(tick) * frame.plot_width(), tick))
        .collect();
    let (top, baseline) = (frame.top, frame.baseline());
    let bar_x = frame.left;
    let label_x = frame.left - 8.0;
    let tick_y = baseline + 18.0;

    rsx! {
        svg { class: "chart chart--bar-horizontal", view_box: "{frame.view_box()}", role: "img",
            for (x, tick) in ticks {
                line { x1: "{x:.1}", y1: "{top:.1}", x2: "{x:.1}", y2: "{baseline:.1}", stroke: GRID, stroke_width: "1" }
                text { x: "{x:.1}", y: "{tick_y:.1}", fill: LABEL, font_size: "11", text_anchor: "middle", "{format::format_count(tick)}" }
            }
            for (y, width, text_y, label, tip) in bars {
                text { x: "{label_x:.1}", y: "{text_y:.1}", fill: LABEL, font_size: "12", text_anchor: "end", "{label}" }
                rect { x: "{bar_x:.1}", y: "{y:.1}", width: "{width:.1}", height: "{bar_height:.1}", rx: "3", fill: series.color,
                    title { "{tip}" }
                }
            }
        }
    }
}

/// Horizontal gridlines with value labels on the left axis.
fn value_grid(frame: &Frame, scale: &Scale) -> Element {
    let rows: Vec<(f64, f64, u64)> = scale
        .ticks()
        .into_iter()
        .map(|tick| {
            let y = frame.baseline() - scale.ratio(tick) * frame.plot_height();
            (y, y + 4.0, tick)
        })
        .collect();
    let left = frame.left;
    let right = frame.width - frame.right;
    let label_x = frame.left - 8.0;
    let (top, baseline) = (frame.top, frame.baseline());

    rsx! {
        for (y, text_y, tick) in rows {
            line { x1: "{left:.1}", y1: "{y:.1}", x2: "{right:.1}", y2: "{y:.1}", stroke: GRID, stroke_width: "1" }
            text { x: "{label_x:.1}", y: "{text_y:.1}", fill: LABEL, font_size: "11", text_anchor: "end", "{format::format_count(tick)}" }
        }
        line { x1: "{left:.1}", y1: "{top:.1}", x2: "{left:.1}", y2: "{baseline:.1}", stroke: AXIS, stroke_width: "1" }
    }
}
