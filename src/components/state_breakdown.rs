use std::rc::Rc;
use yew::prelude::*;

use crate::components::WidgetProps;
use crate::components::aggregation_table::AggregationTable;
use crate::components::chart::Chart;
use crate::components::status::{InlineError, Skeleton};
use crate::hooks::use_endpoint::FetchState;
use crate::hooks::use_energy::use_summary;
use crate::hooks::use_palette::use_palette;
use crate::models::chart::ChartModel;
use crate::models::summary;

/// Cost split by operating state: a pie plus the per-state table.
#[function_component(StateBreakdown)]
pub fn state_breakdown(props: &WidgetProps) -> Html {
    let state = use_summary(&props.refresh);
    let palette = use_palette();

    let view = use_memo(
        (state.data().cloned(), palette.clone()),
        |(data, palette)| {
            data.as_ref().map(|loaded| {
                (
                    Rc::new(ChartModel::state_pie(loaded, palette)),
                    summary::render(loaded, palette).states,
                )
            })
        },
    );

    match (&*state, &*view) {
        (_, Some((pie, rows))) => html! {
            <div class="card">
                <h2>{"Cost by State"}</h2>
                <Chart id="state-cost-chart" model={pie.clone()} />
                <AggregationTable label_heading="State" rows={rows.clone()} with_share={true} />
            </div>
        },
        (FetchState::Error(e), None) => {
            html! { <InlineError title="Cost by State" message={e.clone()} /> }
        }
        _ => html! { <Skeleton class="skeleton-tall" /> },
    }
}
