use yew::prelude::*;

use crate::hooks::use_endpoint::{FetchState, use_endpoint};
use crate::hooks::use_refresh::RefreshHandle;
use crate::models::{
    energy::{CurrentMetrics, DailyRecord},
    rate_config::RateConfig,
    summary::EnergySummary,
    telemetry::TimelineSample,
};
use crate::services::api;

#[hook]
pub fn use_current(refresh: &RefreshHandle) -> UseStateHandle<FetchState<CurrentMetrics>> {
    use_endpoint(refresh, api::fetch_current)
}

#[hook]
pub fn use_summary(refresh: &RefreshHandle) -> UseStateHandle<FetchState<EnergySummary>> {
    use_endpoint(refresh, api::fetch_summary)
}

#[hook]
pub fn use_daily(refresh: &RefreshHandle) -> UseStateHandle<FetchState<Vec<DailyRecord>>> {
    use_endpoint(refresh, api::fetch_daily)
}

#[hook]
pub fn use_timeline(refresh: &RefreshHandle) -> UseStateHandle<FetchState<Vec<TimelineSample>>> {
    use_endpoint(refresh, api::fetch_timeline)
}

#[hook]
pub fn use_rate_config(refresh: &RefreshHandle) -> UseStateHandle<FetchState<RateConfig>> {
    use_endpoint(refresh, api::fetch_config)
}
