use super::error::AppError;
use serde::{Deserialize, Serialize};

/// Operating state of the separator, as classified by the aggregation service.
///
/// The set is closed: the server never reports any other label. The variant
/// order is the canonical display order used by every table and chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OperatingState {
    Processing,
    #[serde(rename = "CIP")]
    Cip,
    Idle,
    Shutdown,
}

impl OperatingState {
    /// Returns the label used on the wire and on screen.
    pub fn label(&self) -> &'static str {
        match self {
            OperatingState::Processing => "Processing",
            OperatingState::Cip => "CIP",
            OperatingState::Idle => "Idle",
            OperatingState::Shutdown => "Shutdown",
        }
    }

    /// All states in canonical order.
    pub fn all() -> &'static [OperatingState] {
        &[
            OperatingState::Processing,
            OperatingState::Cip,
            OperatingState::Idle,
            OperatingState::Shutdown,
        ]
    }
}

impl std::fmt::Display for OperatingState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for OperatingState {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OperatingState::all()
            .iter()
            .find(|state| state.label() == s)
            .copied()
            .ok_or_else(|| AppError::DataError(format!("Unknown operating state: {s}")))
    }
}

/// Facility work shift. Shift windows are defined server-side in facility time:
/// 1st 06:00-14:00, 2nd 14:00-22:00, 3rd 22:00-06:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Shift {
    First,
    Second,
    Third,
}

impl Shift {
    pub fn label(&self) -> &'static str {
        match self {
            Shift::First => "1st Shift",
            Shift::Second => "2nd Shift",
            Shift::Third => "3rd Shift",
        }
    }

    /// All shifts in canonical order.
    pub fn all() -> &'static [Shift] {
        &[Shift::First, Shift::Second, Shift::Third]
    }
}

impl std::fmt::Display for Shift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Shift {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1st Shift" => Ok(Shift::First),
            "2nd Shift" => Ok(Shift::Second),
            "3rd Shift" => Ok(Shift::Third),
            _ => Err(AppError::DataError(format!("Unknown shift: {s}"))),
        }
    }
}
