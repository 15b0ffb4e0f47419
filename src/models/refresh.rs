use super::error::AppError;

/// Bookkeeping for one refresh cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RefreshGeneration {
    pub token: u64,
    pub expected_count: usize,
    pub completed_count: usize,
}

/// Fan-out/fan-in barrier over the dashboard widgets.
///
/// `begin` opens a new generation expecting `n` completion reports; the
/// coordinator stays pending until all `n` reports tagged with the current
/// token have arrived, or until [`expire`](Self::expire) force-releases it.
/// Reports tagged with any other token are discarded, so a response from a
/// superseded generation cannot advance the current count.
///
/// Only counts are tracked: a generation where every widget failed releases
/// exactly like one where every widget succeeded.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RefreshCoordinator {
    generation: RefreshGeneration,
    pending: bool,
}

impl RefreshCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new generation and returns its token.
    pub fn begin(&mut self, expected_count: usize) -> Result<u64, AppError> {
        if expected_count == 0 {
            return Err(AppError::InvalidArgument(
                "refresh must expect at least one completion".to_string(),
            ));
        }

        self.generation = RefreshGeneration {
            token: self.generation.token + 1,
            expected_count,
            completed_count: 0,
        };
        self.pending = true;
        Ok(self.generation.token)
    }

    /// Records one completion against `for_token`. Returns whether the report
    /// was counted.
    pub fn complete(&mut self, for_token: u64) -> bool {
        if for_token != self.generation.token || !self.pending {
            return false;
        }

        self.generation.completed_count += 1;
        if self.generation.completed_count == self.generation.expected_count {
            self.pending = false;
        }
        true
    }

    /// Force-releases the current generation if `for_token` is still current
    /// and pending. Returns how many widgets never reported.
    pub fn expire(&mut self, for_token: u64) -> Option<usize> {
        if for_token != self.generation.token || !self.pending {
            return None;
        }

        self.pending = false;
        Some(self.generation.expected_count - self.generation.completed_count)
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn token(&self) -> u64 {
        self.generation.token
    }

    pub fn generation(&self) -> RefreshGeneration {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_coordinator_is_idle() {
        let coordinator = RefreshCoordinator::new();
        assert_eq!(coordinator.token(), 0);
        assert!(!coordinator.is_pending());
    }

    #[test]
    fn test_begin_rejects_zero() {
        let mut coordinator = RefreshCoordinator::new();
        let result = coordinator.begin(0);
        assert!(matches!(result, Err(AppError::InvalidArgument(_))));
        assert_eq!(coordinator.token(), 0);
        assert!(!coordinator.is_pending());
    }

    #[test]
    fn test_begin_resets_count() {
        let mut coordinator = RefreshCoordinator::new();
        let first = coordinator.begin(3).unwrap();
        coordinator.complete(first);
        coordinator.complete(first);

        let second = coordinator.begin(3).unwrap();
        assert_eq!(second, first + 1);
        assert_eq!(coordinator.generation().completed_count, 0);
        assert!(coordinator.is_pending());
    }

    #[test]
    fn test_completion_after_release_is_ignored() {
        let mut coordinator = RefreshCoordinator::new();
        let token = coordinator.begin(1).unwrap();
        assert!(coordinator.complete(token));
        assert!(!coordinator.complete(token));
        assert_eq!(coordinator.generation().completed_count, 1);
    }

    #[test]
    fn test_completion_before_any_refresh_is_ignored() {
        let mut coordinator = RefreshCoordinator::new();
        assert!(!coordinator.complete(0));
        assert_eq!(coordinator.generation().completed_count, 0);
    }

    #[test]
    fn test_expire_reports_outstanding() {
        let mut coordinator = RefreshCoordinator::new();
        let token = coordinator.begin(4).unwrap();
        coordinator.complete(token);

        assert_eq!(coordinator.expire(token), Some(3));
        assert!(!coordinator.is_pending());
        assert_eq!(coordinator.expire(token), None);
    }

    #[test]
    fn test_expire_ignores_stale_token() {
        let mut coordinator = RefreshCoordinator::new();
        let old = coordinator.begin(2).unwrap();
        let current = coordinator.begin(2).unwrap();

        assert_eq!(coordinator.expire(old), None);
        assert!(coordinator.is_pending());
        assert_eq!(coordinator.expire(current), Some(2));
    }
}
