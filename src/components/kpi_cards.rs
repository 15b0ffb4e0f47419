use yew::prelude::*;

use crate::components::WidgetProps;
use crate::components::status::{InlineError, Skeleton};
use crate::hooks::use_endpoint::FetchState;
use crate::hooks::use_energy::use_summary;
use crate::utils::format::{format_currency, format_kwh, format_percent};

#[derive(Properties, PartialEq)]
struct KpiCardProps {
    label: AttrValue,
    value: AttrValue,
    #[prop_or_default]
    hint: Option<AttrValue>,
}

#[function_component(KpiCard)]
fn kpi_card(props: &KpiCardProps) -> Html {
    html! {
        <div class="card kpi-card">
            <span class="kpi-label">{&props.label}</span>
            <span class="kpi-value">{&props.value}</span>
            if let Some(hint) = &props.hint {
                <span class="kpi-hint">{hint}</span>
            }
        </div>
    }
}

/// Headline figures for the summary period.
#[function_component(KpiCards)]
pub fn kpi_cards(props: &WidgetProps) -> Html {
    let state = use_summary(&props.refresh);

    match &*state {
        FetchState::Loading => html! { <Skeleton class="skeleton-short" /> },
        FetchState::Error(e) => html! { <InlineError title="Key Figures" message={e.clone()} /> },
        FetchState::Loaded(summary) => {
            let kpis = summary.kpis();
            let period = summary.period.clone().map(AttrValue::from);

            html! {
                <div class="kpi-grid">
                    <KpiCard label="Total Cost" value={format_currency(Some(kpis.total_cost_usd))} hint={period} />
                    <KpiCard label="Total Energy" value={format_kwh(Some(kpis.total_kwh))} />
                    <KpiCard label="Avg Cost / Hour" value={format_currency(Some(kpis.avg_cost_per_hour))} />
                    <KpiCard label="Processing Time" value={format_percent(Some(kpis.processing_pct))} />
                </div>
            }
        }
    }
}
