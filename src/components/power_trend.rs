use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use gloo::events::EventListener;
use std::fmt::Write;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::components::WidgetProps;
use crate::components::status::{InlineError, Skeleton};
use crate::config::Config;
use crate::hooks::use_energy::use_timeline;
use crate::models::telemetry::{TelemetryPoint, normalize};
use crate::models::ticks::{self, Tick};
use crate::utils::debounce::on_resize_settled;

const HEIGHT: f64 = 260.0;
const PADDING: f64 = 12.0;
const AXIS_HEIGHT: f64 = 20.0;
const Y_TICKS: usize = 4;

/// Maps normalized points into view coordinates.
///
/// Time runs over the data's own extent, power from zero to the peak.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    start: DateTime<Utc>,
    span_ms: f64,
    max_kw: f64,
    width: f64,
    height: f64,
}

impl Scale {
    pub fn fit(points: &[TelemetryPoint], width: f64, height: f64) -> Option<Self> {
        let start = points.first()?.timestamp;
        let end = points.last()?.timestamp;
        let max_kw = points
            .iter()
            .filter_map(|p| p.value)
            .fold(0.0_f64, f64::max);

        Some(Self {
            start,
            span_ms: (end - start).num_milliseconds() as f64,
            max_kw: if max_kw > 0.0 { max_kw } else { 1.0 },
            width,
            height,
        })
    }

    pub fn x(&self, at: DateTime<Utc>) -> f64 {
        if self.span_ms <= 0.0 {
            return 0.0;
        }
        (at - self.start).num_milliseconds() as f64 / self.span_ms * self.width
    }

    pub fn y(&self, kw: f64) -> f64 {
        PADDING + (1.0 - kw / self.max_kw) * (self.height - 2.0 * PADDING)
    }

    fn baseline(&self) -> f64 {
        self.y(0.0)
    }
}

/// Splits the series at gap markers into runs of plotted coordinates.
fn runs(points: &[TelemetryPoint], scale: &Scale) -> Vec<Vec<(f64, f64)>> {
    points
        .split(TelemetryPoint::is_gap)
        .map(|run| {
            run.iter()
                .filter_map(|p| p.value.map(|kw| (scale.x(p.timestamp), scale.y(kw))))
                .collect::<Vec<_>>()
        })
        .filter(|run| !run.is_empty())
        .collect()
}

/// Generates SVG path data for the power line.
///
/// Every gap marker ends the current sub-path, so the line never bridges
/// an outage.
pub fn line_path(points: &[TelemetryPoint], scale: &Scale) -> String {
    let mut path = String::new();

    for run in runs(points, scale) {
        for (i, (x, y)) in run.iter().enumerate() {
            let command = if i == 0 { "M" } else { "L" };
            if !path.is_empty() {
                path.push(' ');
            }
            let _ = write!(path, "{command} {x:.2},{y:.2}");
        }
    }

    path
}

/// Same runs as [`line_path`], each closed down to the zero line for the fill.
pub fn area_path(points: &[TelemetryPoint], scale: &Scale) -> String {
    let baseline = scale.baseline();
    let mut path = String::new();

    for run in runs(points, scale) {
        let (Some(first), Some(last)) = (run.first(), run.last()) else {
            continue;
        };
        if !path.is_empty() {
            path.push(' ');
        }
        let _ = write!(path, "M {:.2},{baseline:.2}", first.0);
        for (x, y) in &run {
            let _ = write!(path, " L {x:.2},{y:.2}");
        }
        let _ = write!(path, " L {:.2},{baseline:.2} Z", last.0);
    }

    path
}

/// Ticks that fall inside the plotted time range, with their x positions.
fn visible_ticks(ticks: &[Tick], scale: &Scale) -> Vec<(f64, String)> {
    ticks
        .iter()
        .map(|tick| (scale.x(tick.at), tick.label.clone()))
        .filter(|(x, _)| (0.0..=scale.width).contains(x))
        .collect()
}

/// Evenly spaced power gridlines from zero to the peak, labelled in kW.
fn y_ticks(scale: &Scale) -> Vec<(f64, String)> {
    (0..=Y_TICKS)
        .map(|i| {
            let kw = scale.max_kw * i as f64 / Y_TICKS as f64;
            (scale.y(kw), format!("{kw:.0} kW"))
        })
        .collect()
}

/// Hover text for one reading: local time, the tags it carries, and its draw.
fn readout_in<Tz>(point: &TelemetryPoint, tz: &Tz) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let kw = point.value?;
    let when = point.timestamp.with_timezone(tz).format("%b %-d, %-I:%M %p");
    let tags: Vec<&str> = [&point.category, &point.period_tag, &point.shift_tag]
        .into_iter()
        .filter_map(|tag| tag.as_deref())
        .filter(|tag| !tag.is_empty())
        .collect();

    Some(if tags.is_empty() {
        format!("{when}\nkW: {kw:.1}")
    } else {
        format!("{when} - {}\nkW: {kw:.1}", tags.join(" · "))
    })
}

/// Invisible hover band around one reading.
#[derive(Debug, Clone, PartialEq)]
struct HoverTarget {
    left: f64,
    width: f64,
    text: String,
}

/// One band per reading, reaching halfway to each neighbour (clipped at gap
/// markers), so the pointer always lands on the nearest reading.
fn hover_targets_in<Tz>(points: &[TelemetryPoint], scale: &Scale, tz: &Tz) -> Vec<HoverTarget>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    points
        .iter()
        .enumerate()
        .filter_map(|(i, point)| {
            let text = readout_in(point, tz)?;
            let x = scale.x(point.timestamp);
            let left = i
                .checked_sub(1)
                .and_then(|j| points.get(j))
                .map_or(0.0, |prev| (scale.x(prev.timestamp) + x) / 2.0);
            let right = points
                .get(i + 1)
                .map_or(scale.width, |next| (x + scale.x(next.timestamp)) / 2.0);

            Some(HoverTarget {
                left,
                width: (right - left).max(1.0),
                text,
            })
        })
        .collect()
}

struct Trend {
    points: Vec<TelemetryPoint>,
    ticks: Vec<Tick>,
}

#[function_component(PowerTrend)]
pub fn power_trend(props: &WidgetProps) -> Html {
    let state = use_timeline(&props.refresh);
    let container_ref = use_node_ref();
    let viewbox_width = use_state(|| 1000.0);

    let trend = use_memo(state.data().cloned(), |samples| {
        samples.as_ref().map(|samples| {
            let raw: Vec<TelemetryPoint> =
                samples.iter().cloned().map(TelemetryPoint::from).collect();
            normalize(&raw, Duration::minutes(Config::GAP_THRESHOLD_MINUTES)).map(|points| {
                let ticks = ticks::plan(&points);
                Trend { points, ticks }
            })
        })
    });

    let plotted = matches!(*trend, Some(Ok(_)));

    {
        let viewbox_width = viewbox_width.clone();

        // The card is only mounted once there is something to plot
        use_effect_with((container_ref.clone(), plotted), move |(container_ref, _)| {
            let listener: Option<EventListener> =
                container_ref.cast::<HtmlElement>().and_then(|container| {
                    let measure = move || {
                        let width = f64::from(container.client_width());
                        if width > 0.0 {
                            viewbox_width.set(width);
                        }
                    };
                    measure();
                    on_resize_settled(Config::RESIZE_DEBOUNCE_MS, measure)
                });

            move || drop(listener)
        });
    }

    let body = match (&*state, &*trend) {
        (_, Some(Err(e))) => {
            return html! { <InlineError title="Power Trend" message={e.to_string()} /> };
        }
        (_, Some(Ok(trend))) if trend.points.is_empty() => {
            html! { <p class="status">{"No readings in this window"}</p> }
        }
        (_, Some(Ok(trend))) => render_trend(trend, *viewbox_width),
        (state, None) if state.is_loading() => {
            return html! { <Skeleton class="skeleton-tall" /> };
        }
        (state, None) => {
            let message = state.error().unwrap_or("No data").to_string();
            return html! { <InlineError title="Power Trend" {message} /> };
        }
    };

    html! {
        <div class="card power-trend" ref={container_ref}>
            <h2>{"Power (kW)"}</h2>
            {body}
        </div>
    }
}

fn render_trend(trend: &Trend, width: f64) -> Html {
    let Some(scale) = Scale::fit(&trend.points, width, HEIGHT) else {
        return Html::default();
    };

    let line = line_path(&trend.points, &scale);
    let area = area_path(&trend.points, &scale);
    let tick_top = format!("{:.2}", HEIGHT);
    let tick_bottom = format!("{:.2}", HEIGHT + 4.0);
    let label_y = format!("{:.2}", HEIGHT + AXIS_HEIGHT - 4.0);
    let viewbox = format!("0 0 {width} {}", HEIGHT + AXIS_HEIGHT);
    let plot_height = format!("{:.2}", HEIGHT);
    let width_attr = format!("{width:.2}");

    html! {
        <svg {viewbox} preserveAspectRatio="none" class="trend-svg">
            { for y_ticks(&scale).into_iter().map(|(y, label)| html! {
                <>
                    <line
                        class="grid-line"
                        x1="0" x2={width_attr.clone()}
                        y1={format!("{y:.2}")} y2={format!("{y:.2}")}
                    />
                    <text class="axis-label" x="4" y={format!("{:.2}", y - 3.0)}>{label}</text>
                </>
            }) }
            <path d={area} class="trend-area" />
            <path
                d={line}
                class="trend-line"
                fill="none"
                stroke-linejoin="round"
                vector-effect="non-scaling-stroke"
            />
            { for visible_ticks(&trend.ticks, &scale).into_iter().map(|(x, label)| html! {
                <>
                    <line
                        class="tick-mark"
                        x1={format!("{x:.2}")} x2={format!("{x:.2}")}
                        y1={tick_top.clone()} y2={tick_bottom.clone()}
                    />
                    <text class="axis-label" x={format!("{x:.2}")} y={label_y.clone()} text-anchor="middle">
                        {label}
                    </text>
                </>
            }) }
            { for hover_targets_in(&trend.points, &scale, &Local).into_iter().map(|target| html! {
                <rect
                    class="hover-target"
                    x={format!("{:.2}", target.left)}
                    y="0"
                    width={format!("{:.2}", target.width)}
                    height={plot_height.clone()}
                >
                    <title>{target.text}</title>
                </rect>
            }) }
        </svg>
    }
}
