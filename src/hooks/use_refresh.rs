use crate::config::Config;
use crate::models::refresh::RefreshCoordinator;
use gloo_timers::callback::Interval;
use gloo_timers::future::TimeoutFuture;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

pub enum RefreshAction {
    Begin(usize),
    Complete(u64),
    Expire(u64),
}

impl Reducible for RefreshCoordinator {
    type Action = RefreshAction;

    // Returning `self` untouched skips the re-render for discarded reports.
    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            RefreshAction::Begin(expected) => {
                if let Err(e) = next.begin(expected) {
                    gloo::console::error!(&format!("Refresh not started: {e}"));
                    return self;
                }
            }
            RefreshAction::Complete(token) => {
                if !next.complete(token) {
                    return self;
                }
            }
            RefreshAction::Expire(token) => match next.expire(token) {
                Some(outstanding) => gloo::console::warn!(&format!(
                    "Refresh {token} released by deadline with {outstanding} widget(s) outstanding"
                )),
                None => return self,
            },
        }

        Rc::new(next)
    }
}

/// Handle passed to every widget taking part in a refresh.
#[derive(Clone, PartialEq)]
pub struct RefreshHandle {
    /// Token of the current generation; widgets re-fetch when it changes.
    pub generation: u64,
    pub is_pending: bool,
    pub refresh: Callback<()>,
    /// Reports one settled fetch, tagged with the generation it was issued for.
    pub complete: Callback<u64>,
}

/// Owns the dashboard's refresh barrier.
///
/// Each generation is force-released after `REFRESH_DEADLINE_MS` if some
/// widget never reports, and a new generation starts every
/// `POLLING_INTERVAL_MS` when auto refresh is enabled.
#[hook]
pub fn use_refresh() -> RefreshHandle {
    let coordinator = use_reducer(RefreshCoordinator::default);
    let generation = coordinator.token();

    // Deadline for the generation just started
    {
        let dispatcher = coordinator.dispatcher();
        use_effect_with(generation, move |generation| {
            let generation = *generation;
            if generation > 0 {
                spawn_local(async move {
                    TimeoutFuture::new(Config::REFRESH_DEADLINE_MS).await;
                    dispatcher.dispatch(RefreshAction::Expire(generation));
                });
            }
            || ()
        });
    }

    // Timer-initiated refresh
    {
        let dispatcher = coordinator.dispatcher();
        use_effect_with((), move |_| {
            let interval = Config::ENABLE_AUTO_REFRESH.then(|| {
                Interval::new(Config::POLLING_INTERVAL_MS, move || {
                    dispatcher.dispatch(RefreshAction::Begin(Config::WIDGET_COUNT));
                })
            });

            move || drop(interval)
        });
    }

    let refresh = use_callback(coordinator.dispatcher(), |(), dispatcher| {
        dispatcher.dispatch(RefreshAction::Begin(Config::WIDGET_COUNT));
    });

    let complete = use_callback(coordinator.dispatcher(), |token: u64, dispatcher| {
        dispatcher.dispatch(RefreshAction::Complete(token));
    });

    RefreshHandle {
        generation,
        is_pending: coordinator.is_pending(),
        refresh,
        complete,
    }
}
