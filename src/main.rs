use std::rc::Rc;
use yew::prelude::*;

use separator_dashboard::components::{
    DailyCost, Header, KpiCards, LiveStatus, PowerTrend, RateConfigPanel, ShiftBreakdown,
    StateBreakdown, StateTimeline,
};
use separator_dashboard::hooks::use_refresh::use_refresh;
use separator_dashboard::models::palette::StateColorRegistry;

#[function_component(App)]
fn app() -> Html {
    let refresh = use_refresh();
    let palette = use_memo((), |_| StateColorRegistry::standard());

    html! {
        <ContextProvider<Rc<StateColorRegistry>> context={palette}>
            <div class="app-container">
                <Header is_refreshing={refresh.is_pending} on_refresh={refresh.refresh.clone()} />

                <main class="app-main">
                    <section class="row row-status">
                        <LiveStatus refresh={refresh.clone()} />
                        <RateConfigPanel refresh={refresh.clone()} />
                    </section>

                    <KpiCards refresh={refresh.clone()} />

                    <section class="row">
                        <StateBreakdown refresh={refresh.clone()} />
                        <ShiftBreakdown refresh={refresh.clone()} />
                    </section>

                    <PowerTrend refresh={refresh.clone()} />
                    <StateTimeline refresh={refresh.clone()} />
                    <DailyCost refresh={refresh} />
                </main>

                <footer class="app-footer">
                    {"Separator energy monitor · times shown in local time"}
                </footer>
            </div>

            <style>
                {include_str!("style.css")}
            </style>
        </ContextProvider<Rc<StateColorRegistry>>>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
