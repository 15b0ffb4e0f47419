use chrono::{DateTime, Local};
use yew::prelude::*;

use crate::components::WidgetProps;
use crate::components::status::{InlineError, Skeleton};
use crate::hooks::use_endpoint::FetchState;
use crate::hooks::use_energy::use_current;
use crate::hooks::use_palette::use_palette;
use crate::utils::format::{format_currency, format_kw, format_rate};

/// Live operating state, draw and cost of the separator.
#[function_component(LiveStatus)]
pub fn live_status(props: &WidgetProps) -> Html {
    let state = use_current(&props.refresh);
    let palette = use_palette();
    let updated_at = use_state(|| None::<DateTime<Local>>);

    // Stamp each snapshot as it arrives
    {
        let updated_at = updated_at.clone();
        use_effect_with(state.data().cloned(), move |data| {
            if data.is_some() {
                updated_at.set(Some(Local::now()));
            }
            || ()
        });
    }

    let current = match &*state {
        FetchState::Loading => return html! { <Skeleton class="skeleton-short" /> },
        FetchState::Error(e) => {
            return html! { <InlineError title="Live Status" message={e.clone()} /> };
        }
        FetchState::Loaded(current) => current,
    };

    let dot = format!("background-color: {};", palette.color_of(&current.state));
    let cost_per_hour = format!("{}/hr", format_currency(current.cost_per_hour));
    let amps = format!("{:.1} A", current.amps.unwrap_or(0.0));

    html! {
        <div class="card live-status">
            <div class="card-header">
                <h2>{"Live Status"}</h2>
                if let Some(at) = *updated_at {
                    <span class="card-meta">{"Updated "}{at.format("%-I:%M:%S %p").to_string()}</span>
                }
            </div>
            <div class="live-state">
                <span class="state-dot" style={dot}></span>
                <span class="state-label">{&current.state}</span>
            </div>
            <dl class="live-metrics">
                <div><dt>{"Power"}</dt><dd>{format_kw(current.kw)}</dd></div>
                <div><dt>{"Current"}</dt><dd>{amps}</dd></div>
                <div><dt>{"Cost"}</dt><dd>{cost_per_hour}</dd></div>
                <div><dt>{"TOU Period"}</dt><dd>{&current.tou_period}{" · "}{format_rate(current.tou_rate)}</dd></div>
                <div><dt>{"Shift"}</dt><dd>{&current.shift}</dd></div>
            </dl>
        </div>
    }
}
