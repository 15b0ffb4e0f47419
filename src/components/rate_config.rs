use gloo_timers::callback::Timeout;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::WidgetProps;
use crate::components::status::{InlineError, Skeleton};
use crate::config::Config;
use crate::hooks::use_endpoint::FetchState;
use crate::hooks::use_energy::use_rate_config;
use crate::models::rate_config::{ConfigField, RateConfigForm};
use crate::services::api;
use crate::utils::liveness::{Liveness, LivenessToken};

#[derive(Debug, Clone, PartialEq)]
struct Toast {
    success: bool,
    message: String,
}

impl Toast {
    fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[derive(Properties, PartialEq)]
struct FieldProps {
    label: AttrValue,
    field: ConfigField,
    value: AttrValue,
    step: AttrValue,
    on_change: Callback<(ConfigField, String)>,
}

#[function_component(FieldInput)]
fn field_input(props: &FieldProps) -> Html {
    let oninput = {
        let field = props.field;
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit((field, input.value()));
        })
    };

    html! {
        <label class="config-field">
            <span>{&props.label}</span>
            <input type="number" step={props.step.clone()} value={props.value.clone()} {oninput} />
        </label>
    }
}

/// Editable rate and electrical parameters.
///
/// Input is validated locally before it is sent; on success the form shows
/// the values the server accepted.
#[function_component(RateConfigPanel)]
pub fn rate_config_panel(props: &WidgetProps) -> Html {
    let state = use_rate_config(&props.refresh);
    let form = use_state(RateConfigForm::default);
    let saving = use_state(|| false);
    let toast = use_state(|| None::<Toast>);
    let mounted = use_mut_ref(|| None::<LivenessToken>);

    {
        let mounted = mounted.clone();
        use_effect_with((), move |_| {
            let (guard, token) = Liveness::acquire();
            *mounted.borrow_mut() = Some(token);
            move || drop(guard)
        });
    }

    // Reset the inputs whenever a config arrives, fetched or saved
    {
        let form = form.clone();
        use_effect_with(state.data().cloned(), move |config| {
            if let Some(config) = config {
                form.set(RateConfigForm::from(**config));
            }
            || ()
        });
    }

    {
        let toast = toast.clone();
        use_effect_with((*toast).clone(), move |current| {
            let dismiss = current.as_ref().map(|_| {
                Timeout::new(Config::TOAST_DURATION_MS, move || toast.set(None))
            });
            move || drop(dismiss)
        });
    }

    let on_change = {
        let form = form.clone();
        Callback::from(move |(field, value): (ConfigField, String)| {
            let mut next = (*form).clone();
            next.set(field, value);
            form.set(next);
        })
    };

    let on_save = {
        let form = form.clone();
        let saving = saving.clone();
        let toast = toast.clone();
        let state = state.clone();
        let mounted = mounted.clone();

        Callback::from(move |_: MouseEvent| {
            let config = match form.parse() {
                Ok(config) => config,
                Err(e) => {
                    toast.set(Some(Toast::error(e.to_string())));
                    return;
                }
            };

            let Some(alive) = mounted.borrow().clone() else {
                return;
            };

            saving.set(true);
            let saving = saving.clone();
            let toast = toast.clone();
            let state = state.clone();

            spawn_local(async move {
                let result = api::update_config(config).await;
                if !alive.is_live() {
                    return;
                }

                match result {
                    Ok(accepted) => {
                        state.set(FetchState::Loaded(Rc::new(accepted)));
                        toast.set(Some(Toast::success("Settings saved")));
                    }
                    Err(e) => {
                        gloo::console::warn!(&format!("Config save rejected: {e}"));
                        toast.set(Some(Toast::error(e.to_string())));
                    }
                }
                saving.set(false);
            });
        })
    };

    match &*state {
        FetchState::Loading => return html! { <Skeleton class="skeleton-short" /> },
        FetchState::Error(e) => {
            return html! { <InlineError title="Rate Settings" message={e.clone()} /> };
        }
        FetchState::Loaded(_) => {}
    }

    html! {
        <div class="card rate-config">
            <h2>{"Rate Settings"}</h2>
            <div class="config-fields">
                <FieldInput
                    label="Rate ($/kWh)"
                    field={ConfigField::RatePerKwh}
                    value={form.rate_per_kwh.clone()}
                    step="0.01"
                    on_change={on_change.clone()}
                />
                <FieldInput
                    label="Voltage (V)"
                    field={ConfigField::Voltage}
                    value={form.voltage.clone()}
                    step="1"
                    on_change={on_change.clone()}
                />
                <FieldInput
                    label="Power Factor"
                    field={ConfigField::PowerFactor}
                    value={form.power_factor.clone()}
                    step="0.01"
                    {on_change}
                />
                <button class="save-button" onclick={on_save} disabled={*saving}>
                    {if *saving { "Saving..." } else { "Save" }}
                </button>
            </div>
            if let Some(toast) = &*toast {
                <div class={classes!("toast", if toast.success { "toast-success" } else { "toast-error" })}>
                    {&toast.message}
                </div>
            }
        </div>
    }
}
