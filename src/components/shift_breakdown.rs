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

/// Cost per shift stacked by state, with each shift's state rows nested
/// under it in the table.
#[function_component(ShiftBreakdown)]
pub fn shift_breakdown(props: &WidgetProps) -> Html {
    let state = use_summary(&props.refresh);
    let palette = use_palette();

    let view = use_memo(
        (state.data().cloned(), palette.clone()),
        |(data, palette)| {
            data.as_ref().map(|loaded| {
                (
                    Rc::new(ChartModel::shift_bars(loaded, palette)),
                    summary::render(loaded, palette).shifts,
                )
            })
        },
    );

    match (&*state, &*view) {
        (_, Some((bars, rows))) => html! {
            <div class="card">
                <h2>{"Cost by Shift"}</h2>
                <Chart id="shift-cost-chart" model={bars.clone()} />
                <AggregationTable label_heading="Shift" rows={rows.clone()} />
            </div>
        },
        (FetchState::Error(e), None) => {
            html! { <InlineError title="Cost by Shift" message={e.clone()} /> }
        }
        _ => html! { <Skeleton class="skeleton-tall" /> },
    }
}
