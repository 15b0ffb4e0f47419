use std::cell::Cell;
use std::rc::Rc;

/// First-wins latch shared by tasks racing to settle the same outcome.
///
/// A fetch and its deadline each hold a clone; only the first to call
/// [`claim`](Self::claim) gets `true` and reports, the loser stays silent.
#[derive(Debug, Clone, Default)]
pub struct SettleOnce {
    settled: Rc<Cell<bool>>,
}

impl SettleOnce {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the outcome settled. Returns true only for the first caller.
    pub fn claim(&self) -> bool {
        !self.settled.replace(true)
    }

    pub fn is_settled(&self) -> bool {
        self.settled.get()
    }
}
