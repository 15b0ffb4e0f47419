use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashMap;

/// Body of `GET /energy/current`: live snapshot of the separator.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CurrentMetrics {
    pub amps: Option<f64>,
    pub kw: Option<f64>,
    pub cost_per_hour: Option<f64>,
    pub state: String,
    pub tou_period: String,
    pub tou_rate: Option<f64>,
    pub shift: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DailyStateMetrics {
    pub hours: f64,
    pub kwh: f64,
    pub cost_usd: f64,
}

/// One element of `GET /energy/daily`, keyed by facility-local date.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DailyRecord {
    pub date: String,
    pub total_cost_usd: f64,
    pub total_kwh: f64,
    pub by_state: HashMap<String, DailyStateMetrics>,
}

impl DailyRecord {
    pub fn day(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }

    /// Axis label such as `"Sat Feb 14"`; the raw date when it does not parse.
    pub fn label(&self) -> String {
        self.day()
            .map_or_else(|| self.date.clone(), |d| d.format("%a %b %-d").to_string())
    }

    pub fn state_cost(&self, state: &str) -> f64 {
        self.by_state.get(state).map_or(0.0, |s| s.cost_usd)
    }
}
