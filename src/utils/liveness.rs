use std::cell::Cell;
use std::rc::Rc;

/// Scoped "still mounted" capability for an in-flight fetch.
///
/// [`Liveness::acquire`] hands out a guard, owned by the effect that issued
/// the fetch, and a token, moved into the async task. Dropping the guard (the
/// effect's cleanup runs on unmount and whenever its dependencies change)
/// invalidates the token, and the task checks it before touching state.
///
/// ```rust,ignore
/// use_effect_with(generation, move |_| {
///     let (guard, token) = Liveness::acquire();
///     spawn_local(async move {
///         let result = fetch().await;
///         if token.is_live() {
///             state.set(result);
///         }
///     });
///     move || drop(guard)
/// });
/// ```
pub struct Liveness;

impl Liveness {
    pub fn acquire() -> (LivenessGuard, LivenessToken) {
        let live = Rc::new(Cell::new(true));
        (LivenessGuard { live: live.clone() }, LivenessToken { live })
    }
}

#[must_use = "dropping the guard immediately invalidates its token"]
pub struct LivenessGuard {
    live: Rc<Cell<bool>>,
}

impl Drop for LivenessGuard {
    fn drop(&mut self) {
        self.live.set(false);
    }
}

#[derive(Clone)]
pub struct LivenessToken {
    live: Rc<Cell<bool>>,
}

impl LivenessToken {
    pub fn is_live(&self) -> bool {
        self.live.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_live_while_guard_held() {
        let (guard, token) = Liveness::acquire();
        let copy = token.clone();
        assert!(token.is_live());

        drop(guard);
        assert!(!token.is_live());
        assert!(!copy.is_live());
    }

    #[test]
    fn test_guards_are_independent() {
        let (first_guard, first) = Liveness::acquire();
        let (_second_guard, second) = Liveness::acquire();

        drop(first_guard);
        assert!(!first.is_live());
        assert!(second.is_live());
    }

    #[test]
    fn test_token_parked_for_later_tasks() {
        use std::cell::RefCell;

        // Component keeps one token and hands clones to each task it spawns
        let slot: Rc<RefCell<Option<LivenessToken>>> = Rc::new(RefCell::new(None));
        let (guard, token) = Liveness::acquire();
        *slot.borrow_mut() = Some(token);

        let in_flight = slot.borrow().clone().unwrap();
        assert!(in_flight.is_live());

        drop(guard);
        assert!(!in_flight.is_live());
        assert!(!slot.borrow().as_ref().unwrap().is_live());
    }
}
