use std::rc::Rc;
use yew::prelude::*;

use crate::components::WidgetProps;
use crate::components::chart::Chart;
use crate::components::status::{InlineError, Skeleton};
use crate::hooks::use_endpoint::FetchState;
use crate::hooks::use_energy::use_daily;
use crate::hooks::use_palette::use_palette;
use crate::models::chart::ChartModel;
use crate::utils::format::format_currency;

#[function_component(DailyCost)]
pub fn daily_cost(props: &WidgetProps) -> Html {
    let state = use_daily(&props.refresh);
    let palette = use_palette();

    let bars = use_memo(
        (state.data().cloned(), palette.clone()),
        |(data, palette)| {
            data.as_ref()
                .map(|records| Rc::new(ChartModel::daily_bars(records, palette)))
        },
    );

    match (&*state, &*bars) {
        (FetchState::Loaded(records), Some(bars)) => {
            let total: f64 = records.iter().map(|r| r.total_cost_usd).sum();

            html! {
                <div class="card">
                    <div class="card-header">
                        <h2>{"Daily Cost"}</h2>
                        <span class="card-meta">{format_currency(Some(total))}{" total"}</span>
                    </div>
                    <Chart id="daily-cost-chart" model={bars.clone()} />
                </div>
            }
        }
        (FetchState::Error(e), _) => {
            html! { <InlineError title="Daily Cost" message={e.clone()} /> }
        }
        _ => html! { <Skeleton class="skeleton-tall" /> },
    }
}
