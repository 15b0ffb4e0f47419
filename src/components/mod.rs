use yew::prelude::*;

use crate::hooks::use_refresh::RefreshHandle;

pub mod aggregation_table;
pub mod chart;
pub mod daily_cost;
pub mod header;
pub mod kpi_cards;
pub mod live_status;
pub mod power_trend;
pub mod rate_config;
pub mod shift_breakdown;
pub mod state_breakdown;
pub mod state_timeline;
pub mod status;

pub use daily_cost::DailyCost;
pub use header::Header;
pub use kpi_cards::KpiCards;
pub use live_status::LiveStatus;
pub use power_trend::PowerTrend;
pub use rate_config::RateConfigPanel;
pub use shift_breakdown::ShiftBreakdown;
pub use state_breakdown::StateBreakdown;
pub use state_timeline::StateTimeline;

/// Props shared by every widget that takes part in the refresh barrier.
#[derive(Properties, PartialEq)]
pub struct WidgetProps {
    pub refresh: RefreshHandle,
}
