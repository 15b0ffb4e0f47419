use chrono::{DateTime, Local, Utc};
use yew::prelude::*;

use crate::components::WidgetProps;
use crate::components::status::{InlineError, Skeleton};
use crate::config::Config;
use crate::hooks::use_endpoint::FetchState;
use crate::hooks::use_energy::use_timeline;
use crate::hooks::use_palette::use_palette;
use crate::models::telemetry::{edge_times, state_segments};

fn local_time(at: DateTime<Utc>, fmt: &str) -> String {
    at.with_timezone(&Local).format(fmt).to_string()
}

/// Operating state over the timeline window as a strip of colored cells.
#[function_component(StateTimeline)]
pub fn state_timeline(props: &WidgetProps) -> Html {
    let state = use_timeline(&props.refresh);
    let palette = use_palette();

    let samples = match &*state {
        FetchState::Loading => return html! { <Skeleton class="skeleton-short" /> },
        FetchState::Error(e) => {
            return html! { <InlineError title="State Timeline" message={e.clone()} /> };
        }
        FetchState::Loaded(samples) => samples,
    };

    let segments = state_segments(samples, Config::TIMELINE_SEGMENTS);
    let width = format!("width: {}%;", 100.0 / segments.len().max(1) as f64);

    html! {
        <div class="card">
            <h2>{"State Timeline"}</h2>
            if segments.is_empty() {
                <p class="status">{"No readings in this window"}</p>
            } else {
                <div class="timeline-strip">
                    { for segments.iter().map(|segment| {
                        let style = format!("{width} background-color: {};", palette.color_of(&segment.state));
                        let title = format!("{}: {}", local_time(segment.at, "%-I:%M %p"), segment.state);
                        html! { <div class="timeline-cell" {style} {title}></div> }
                    }) }
                </div>
                if let Some(edges) = edge_times(samples) {
                    <div class="timeline-axis">
                        { for edges.into_iter().map(|at| html! { <span>{local_time(at, "%-I %p")}</span> }) }
                    </div>
                }
            }
            <div class="legend">
                { for palette.state_legend().into_iter().map(|entry| {
                    let swatch = format!("background-color: {};", entry.color);
                    html! {
                        <span class="legend-item">
                            <span class="swatch" style={swatch}></span>
                            {entry.label}
                        </span>
                    }
                }) }
            </div>
        </div>
    }
}
