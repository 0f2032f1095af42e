/// Watches a solver as it iterates and may steer it.
///
/// A solver hands each event `E` to its observer and acts on the returned
/// `Option<A>`: `None` continues unchanged, `Some(action)` requests one of the
/// solver's actions (stopping a series early, for instance). This keeps
/// tracing, diagnostics and custom stopping rules out of the solver itself.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` is the
/// observer that never acts.
pub trait Observer<E, A> {
    /// Inspects one event and optionally returns an action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_observer_never_acts() {
        let mut observer = ();
        let action: Option<u8> = observer.observe(&42_usize);
        assert_eq!(action, None);
    }

    #[test]
    fn closure_observer_sees_every_event() {
        let mut seen = Vec::new();
        let mut observer = |event: &usize| {
            seen.push(*event);
            (*event >= 2).then_some("stop")
        };

        assert_eq!(observer.observe(&1), None);
        assert_eq!(observer.observe(&2), Some("stop"));
        assert_eq!(seen, vec![1, 2]);
    }
}
