use chrono::Local;
use gloo_timers::callback::Interval;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub is_refreshing: bool,
    pub on_refresh: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let now = use_state(Local::now);

    {
        let now = now.clone();
        use_effect_with((), move |_| {
            let clock = Interval::new(1_000, move || now.set(Local::now()));
            move || drop(clock)
        });
    }

    let onclick = {
        let on_refresh = props.on_refresh.clone();
        Callback::from(move |_: MouseEvent| on_refresh.emit(()))
    };

    let icon_class = classes!("refresh-icon", props.is_refreshing.then_some("spinning"));

    html! {
        <header class="app-header">
            <div class="header-title">
                <h1>{"Separator Energy"}</h1>
                <span class="header-clock">{now.format("%a %b %-d, %-I:%M:%S %p").to_string()}</span>
            </div>
            <button
                class="refresh-button"
                {onclick}
                disabled={props.is_refreshing}
                title="Refresh all widgets"
            >
                <span class={icon_class}>{"↻"}</span>
                {if props.is_refreshing { "Refreshing" } else { "Refresh" }}
            </button>
        </header>
    }
}
