use super::palette::{DisplayColor, StateColorRegistry};
use super::state::{OperatingState, Shift};
use crate::utils::format::{format_currency, format_hours, format_kwh, format_percent};
use serde::Deserialize;
use std::collections::HashMap;

/// Totals for one operating state over the reporting window.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StateMetrics {
    pub hours: f64,
    pub kwh: f64,
    pub cost_usd: f64,
    pub pct_time: f64,
}

/// Totals for one shift, with its own per-state breakdown.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShiftMetrics {
    pub hours: f64,
    pub kwh: f64,
    pub cost_usd: f64,
    pub by_state: HashMap<String, StateMetrics>,
}

/// Body of `GET /energy/summary`. All values are computed server-side.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EnergySummary {
    pub period: Option<String>,
    pub rate_per_kwh: Option<f64>,
    pub total_cost_usd: f64,
    pub total_kwh: f64,
    pub by_state: HashMap<String, StateMetrics>,
    pub by_shift: HashMap<String, ShiftMetrics>,
}

/// Headline figures for the KPI cards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kpis {
    pub total_cost_usd: f64,
    pub total_kwh: f64,
    pub avg_cost_per_hour: f64,
    pub processing_pct: f64,
}

impl EnergySummary {
    pub fn kpis(&self) -> Kpis {
        let total_hours: f64 = self.by_state.values().map(|s| s.hours).sum();
        let avg_cost_per_hour = if total_hours > 0.0 {
            self.total_cost_usd / total_hours
        } else {
            0.0
        };

        Kpis {
            total_cost_usd: self.total_cost_usd,
            total_kwh: self.total_kwh,
            avg_cost_per_hour,
            processing_pct: self
                .by_state
                .get(OperatingState::Processing.label())
                .map_or(0.0, |s| s.pct_time),
        }
    }

    /// Cost per state for the pie chart, canonical order, zero-cost states dropped.
    pub fn state_cost_slices(&self) -> Vec<(OperatingState, f64)> {
        OperatingState::all()
            .iter()
            .filter_map(|state| {
                let cost = self.by_state.get(state.label()).map_or(0.0, |s| s.cost_usd);
                (cost > 0.0).then_some((*state, cost))
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowLabel {
    State(OperatingState),
    Shift(Shift),
    /// A label the server sent that is outside the closed sets.
    Unknown(String),
}

impl RowLabel {
    pub fn text(&self) -> &str {
        match self {
            RowLabel::State(state) => state.label(),
            RowLabel::Shift(shift) => shift.label(),
            RowLabel::Unknown(label) => label,
        }
    }
}

/// One node of the two-level breakdown. Values are copied from the summary
/// as-is; children are not re-summed against their parent.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregationRow {
    pub label: RowLabel,
    pub hours: f64,
    pub energy_kwh: f64,
    pub cost_usd: f64,
    pub pct_of_parent: Option<f64>,
    pub children: Vec<AggregationRow>,
}

impl AggregationRow {
    fn zero(label: RowLabel) -> Self {
        Self {
            label,
            hours: 0.0,
            energy_kwh: 0.0,
            cost_usd: 0.0,
            pct_of_parent: None,
            children: Vec::new(),
        }
    }

    fn from_state(label: RowLabel, metrics: &StateMetrics, with_share: bool) -> Self {
        Self {
            label,
            hours: metrics.hours,
            energy_kwh: metrics.kwh,
            cost_usd: metrics.cost_usd,
            pct_of_parent: with_share.then_some(metrics.pct_time),
            children: Vec::new(),
        }
    }
}

/// Per-state rows: every fixed state in canonical order (zero-filled when
/// absent), then any unknown labels sorted by name.
pub fn state_rows(by_state: &HashMap<String, StateMetrics>, with_share: bool) -> Vec<AggregationRow> {
    let mut rows: Vec<AggregationRow> = OperatingState::all()
        .iter()
        .map(|state| {
            let label = RowLabel::State(*state);
            match by_state.get(state.label()) {
                Some(metrics) => AggregationRow::from_state(label, metrics, with_share),
                None => AggregationRow {
                    pct_of_parent: with_share.then_some(0.0),
                    ..AggregationRow::zero(label)
                },
            }
        })
        .collect();

    rows.extend(
        unknown_labels(by_state, |label| label.parse::<OperatingState>().is_err())
            .into_iter()
            .map(|label| {
                AggregationRow::from_state(
                    RowLabel::Unknown(label.clone()),
                    &by_state[&label],
                    with_share,
                )
            }),
    );
    rows
}

/// Per-shift rows with their per-state children. A shift missing from the
/// summary becomes a zero row without children.
pub fn shift_rows(by_shift: &HashMap<String, ShiftMetrics>) -> Vec<AggregationRow> {
    let shift_row = |label: RowLabel, metrics: &ShiftMetrics| AggregationRow {
        label,
        hours: metrics.hours,
        energy_kwh: metrics.kwh,
        cost_usd: metrics.cost_usd,
        pct_of_parent: None,
        children: state_rows(&metrics.by_state, false),
    };

    let mut rows: Vec<AggregationRow> = Shift::all()
        .iter()
        .map(|shift| match by_shift.get(shift.label()) {
            Some(metrics) => shift_row(RowLabel::Shift(*shift), metrics),
            None => AggregationRow::zero(RowLabel::Shift(*shift)),
        })
        .collect();

    rows.extend(
        unknown_labels(by_shift, |label| label.parse::<Shift>().is_err())
            .into_iter()
            .map(|label| shift_row(RowLabel::Unknown(label.clone()), &by_shift[&label])),
    );
    rows
}

fn unknown_labels<V>(map: &HashMap<String, V>, is_unknown: impl Fn(&str) -> bool) -> Vec<String> {
    let mut labels: Vec<String> = map.keys().filter(|k| is_unknown(k)).cloned().collect();
    labels.sort();
    labels
}

/// A table row with every cell already formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct PresentedRow {
    /// 0 for top-level rows, 1 for rows nested under a parent.
    pub depth: u8,
    pub label: String,
    pub color: DisplayColor,
    pub hours: String,
    pub energy: String,
    pub cost: String,
    pub share: Option<String>,
    pub unknown: bool,
}

/// Flattens rows depth-first, parents before their children.
pub fn present(rows: &[AggregationRow], registry: &StateColorRegistry) -> Vec<PresentedRow> {
    fn walk(
        rows: &[AggregationRow],
        depth: u8,
        registry: &StateColorRegistry,
        out: &mut Vec<PresentedRow>,
    ) {
        for row in rows {
            out.push(PresentedRow {
                depth,
                label: row.label.text().to_string(),
                color: registry.color_of(row.label.text()),
                hours: format_hours(Some(row.hours)),
                energy: format_kwh(Some(row.energy_kwh)),
                cost: format_currency(Some(row.cost_usd)),
                share: row.pct_of_parent.map(|pct| format_percent(Some(pct))),
                unknown: matches!(row.label, RowLabel::Unknown(_)),
            });
            walk(&row.children, depth + 1, registry, out);
        }
    }

    let mut out = Vec::new();
    walk(rows, 0, registry, &mut out);
    out
}

/// Both breakdown tables, ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregationView {
    pub states: Vec<PresentedRow>,
    pub shifts: Vec<PresentedRow>,
}

pub fn render(summary: &EnergySummary, registry: &StateColorRegistry) -> AggregationView {
    AggregationView {
        states: present(&state_rows(&summary.by_state, true), registry),
        shifts: present(&shift_rows(&summary.by_shift), registry),
    }
}
