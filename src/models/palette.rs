use super::state::{OperatingState, Shift};

const NEUTRAL: &str = "#6B7280";

/// Opaque display identity for a category. Compared by value, so two
/// registries configured the same way hand out equal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayColor(&'static str);

impl DisplayColor {
    pub const fn new(hex: &'static str) -> Self {
        Self(hex)
    }

    /// Returns the CSS hex code for this color.
    pub const fn hex(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for DisplayColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryColor {
    pub label: &'static str,
    pub color: DisplayColor,
}

/// Fixed label → color mapping shared by the pie chart, bar stacks,
/// timeline strip and every table.
///
/// Lookups never fail: labels outside the configured set resolve to the
/// neutral fallback.
#[derive(Debug, Clone, PartialEq)]
pub struct StateColorRegistry {
    entries: Vec<CategoryColor>,
    fallback: DisplayColor,
}

impl StateColorRegistry {
    pub fn builder() -> StateColorRegistryBuilder {
        StateColorRegistryBuilder::default()
    }

    /// The dashboard palette: four operating states, three shifts.
    pub fn standard() -> Self {
        Self::builder()
            .color(OperatingState::Processing.label(), "#22C55E")
            .color(OperatingState::Cip.label(), "#3B82F6")
            .color(OperatingState::Idle.label(), "#F59E0B")
            .color(OperatingState::Shutdown.label(), "#6B7280")
            .color(Shift::First.label(), "#06B6D4")
            .color(Shift::Second.label(), "#8B5CF6")
            .color(Shift::Third.label(), "#F59E0B")
            .build()
    }

    pub fn color_of(&self, label: &str) -> DisplayColor {
        self.entries
            .iter()
            .find(|entry| entry.label == label)
            .map_or(self.fallback, |entry| entry.color)
    }

    pub fn state_color(&self, state: OperatingState) -> DisplayColor {
        self.color_of(state.label())
    }

    pub fn shift_color(&self, shift: Shift) -> DisplayColor {
        self.color_of(shift.label())
    }

    pub fn fallback(&self) -> DisplayColor {
        self.fallback
    }

    /// Operating-state entries in canonical order, for chart legends.
    pub fn state_legend(&self) -> Vec<CategoryColor> {
        OperatingState::all()
            .iter()
            .map(|state| CategoryColor {
                label: state.label(),
                color: self.state_color(*state),
            })
            .collect()
    }
}

impl Default for StateColorRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, Default)]
pub struct StateColorRegistryBuilder {
    entries: Vec<CategoryColor>,
    fallback: Option<DisplayColor>,
}

impl StateColorRegistryBuilder {
    /// Assigns a color to a label. Assigning the same label twice keeps the
    /// last color, so the built registry holds exactly one entry per label.
    pub fn color(mut self, label: &'static str, hex: &'static str) -> Self {
        let color = DisplayColor::new(hex);
        match self.entries.iter_mut().find(|entry| entry.label == label) {
            Some(entry) => entry.color = color,
            None => self.entries.push(CategoryColor { label, color }),
        }
        self
    }

    /// Sets the color returned for labels outside the configured set.
    pub fn fallback(mut self, hex: &'static str) -> Self {
        self.fallback = Some(DisplayColor::new(hex));
        self
    }

    pub fn build(self) -> StateColorRegistry {
        StateColorRegistry {
            entries: self.entries,
            fallback: self.fallback.unwrap_or(DisplayColor::new(NEUTRAL)),
        }
    }
}
