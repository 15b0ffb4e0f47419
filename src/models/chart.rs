use super::energy::DailyRecord;
use super::palette::{DisplayColor, StateColorRegistry};
use super::state::{OperatingState, Shift};
use super::summary::EnergySummary;

#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: &'static str,
    pub value: f64,
    pub color: DisplayColor,
}

/// One stack layer: a value per category, drawn in one color.
#[derive(Debug, Clone, PartialEq)]
pub struct StackSeries {
    pub name: &'static str,
    pub color: DisplayColor,
    pub values: Vec<f64>,
}

/// Plain-data description of a chart; the chart component turns it into an
/// ECharts option.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartModel {
    Pie {
        slices: Vec<Slice>,
    },
    StackedBars {
        categories: Vec<String>,
        series: Vec<StackSeries>,
    },
}

impl ChartModel {
    /// Cost share per operating state.
    pub fn state_pie(summary: &EnergySummary, registry: &StateColorRegistry) -> Self {
        let slices = summary
            .state_cost_slices()
            .into_iter()
            .map(|(state, value)| Slice {
                label: state.label(),
                value,
                color: registry.state_color(state),
            })
            .collect();
        ChartModel::Pie { slices }
    }

    /// One bar per shift, stacked by operating-state cost.
    pub fn shift_bars(summary: &EnergySummary, registry: &StateColorRegistry) -> Self {
        let categories = Shift::all().iter().map(|s| s.label().to_string()).collect();
        let series = OperatingState::all()
            .iter()
            .map(|state| StackSeries {
                name: state.label(),
                color: registry.state_color(*state),
                values: Shift::all()
                    .iter()
                    .map(|shift| {
                        summary
                            .by_shift
                            .get(shift.label())
                            .and_then(|s| s.by_state.get(state.label()))
                            .map_or(0.0, |m| m.cost_usd)
                    })
                    .collect(),
            })
            .collect();
        ChartModel::StackedBars { categories, series }
    }

    /// One bar per day, stacked by operating-state cost.
    pub fn daily_bars(records: &[DailyRecord], registry: &StateColorRegistry) -> Self {
        let categories = records.iter().map(DailyRecord::label).collect();
        let series = OperatingState::all()
            .iter()
            .map(|state| StackSeries {
                name: state.label(),
                color: registry.state_color(*state),
                values: records.iter().map(|r| r.state_cost(state.label())).collect(),
            })
            .collect();
        ChartModel::StackedBars { categories, series }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            ChartModel::Pie { slices } => slices.is_empty(),
            ChartModel::StackedBars { categories, .. } => categories.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::energy::DailyStateMetrics;
    use crate::models::summary::{ShiftMetrics, StateMetrics};
    use std::collections::HashMap;

    #[test]
    fn test_shift_bars_zero_fill() {
        let mut by_state = HashMap::new();
        by_state.insert(
            "CIP".to_string(),
            StateMetrics {
                cost_usd: 4.5,
                ..StateMetrics::default()
            },
        );
        let mut by_shift = HashMap::new();
        by_shift.insert(
            "3rd Shift".to_string(),
            ShiftMetrics {
                by_state,
                ..ShiftMetrics::default()
            },
        );
        let summary = EnergySummary {
            by_shift,
            ..EnergySummary::default()
        };

        let ChartModel::StackedBars { categories, series } =
            ChartModel::shift_bars(&summary, &StateColorRegistry::standard())
        else {
            panic!("expected stacked bars");
        };
        assert_eq!(categories, ["1st Shift", "2nd Shift", "3rd Shift"]);
        assert_eq!(series.len(), 4);
        assert_eq!(series[1].name, "CIP");
        assert_eq!(series[1].values, [0.0, 0.0, 4.5]);
        assert_eq!(series[0].values, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_daily_bars_follow_record_order() {
        let mut by_state = HashMap::new();
        by_state.insert(
            "Processing".to_string(),
            DailyStateMetrics {
                cost_usd: 20.0,
                ..DailyStateMetrics::default()
            },
        );
        let records = vec![
            DailyRecord {
                date: "2026-02-14".to_string(),
                by_state,
                ..DailyRecord::default()
            },
            DailyRecord {
                date: "2026-02-15".to_string(),
                ..DailyRecord::default()
            },
        ];

        let ChartModel::StackedBars { categories, series } =
            ChartModel::daily_bars(&records, &StateColorRegistry::standard())
        else {
            panic!("expected stacked bars");
        };
        assert_eq!(categories, ["Sat Feb 14", "Sun Feb 15"]);
        assert_eq!(series[0].values, [20.0, 0.0]);
        assert_eq!(series[0].color.hex(), "#22C55E");
    }

    #[test]
    fn test_empty_pie() {
        let model = ChartModel::state_pie(&EnergySummary::default(), &StateColorRegistry::standard());
        assert!(model.is_empty());
    }
}
