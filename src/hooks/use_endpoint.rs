use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

use crate::config::Config;
use crate::hooks::use_refresh::RefreshHandle;
use crate::models::error::AppError;
use crate::utils::liveness::Liveness;
use crate::utils::settle::SettleOnce;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, PartialEq, Debug)]
pub enum FetchState<T> {
    Loading,
    Loaded(Rc<T>),
    Error(String),
}

impl<T> FetchState<T> {
    /// Returns true if nothing has settled yet
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// Returns the data if it is loaded
    pub fn data(&self) -> Option<&Rc<T>> {
        match self {
            FetchState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Fetches once per refresh generation and reports the outcome to the barrier.
///
/// The fetch races `FETCH_DEADLINE_MS`; whichever settles first updates the
/// state and reports completion, so each generation is reported exactly once,
/// success or failure. Results arriving after the generation moved on or the
/// widget unmounted are dropped, while the completion report still carries
/// the original token and is discarded by the coordinator.
///
/// The previous data stays on screen until the new fetch settles.
#[hook]
pub fn use_endpoint<T, F, Fut>(refresh: &RefreshHandle, fetch: F) -> UseStateHandle<FetchState<T>>
where
    T: 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<T, AppError>> + 'static,
{
    let state = use_state(|| FetchState::Loading);

    {
        let state = state.clone();
        let on_complete = refresh.complete.clone();

        use_effect_with(refresh.generation, move |generation| {
            let generation = *generation;
            let (guard, mounted) = Liveness::acquire();
            let settle = SettleOnce::new();

            {
                let state = state.clone();
                let on_complete = on_complete.clone();
                let mounted = mounted.clone();
                let settle = settle.clone();

                spawn_local(async move {
                    let result = fetch().await;
                    if !settle.claim() {
                        return; // Deadline already reported this generation
                    }

                    if mounted.is_live() {
                        match result {
                            Ok(data) => state.set(FetchState::Loaded(Rc::new(data))),
                            Err(e) => state.set(FetchState::Error(e.to_string())),
                        }
                    }
                    on_complete.emit(generation);
                });
            }

            spawn_local(async move {
                TimeoutFuture::new(Config::FETCH_DEADLINE_MS).await;
                if !settle.claim() {
                    return;
                }

                if mounted.is_live() {
                    state.set(FetchState::Error(AppError::Timeout.to_string()));
                }
                on_complete.emit(generation);
            });

            move || drop(guard)
        });
    }

    state
}
