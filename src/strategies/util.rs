use super::super::interface::*;

// Value of a non-terminal state with no legal actions.
pub(super) fn stalemate_value(opts: &SearchOptions) -> Result<Utility> {
    match opts.stalemate {
        Stalemate::Error => Err(Error::NoLegalActions),
        Stalemate::Value(value) => Ok(value),
    }
}

// The best (value, action) seen so far at a root or maximizing node.
// Only a strictly greater value replaces the current choice, so the first
// action wins ties.
pub(super) struct ValueAction<A> {
    pub(super) value: Utility,
    pub(super) action: Option<A>,
}

impl<A> ValueAction<A> {
    pub(super) fn worst() -> Self {
        Self { value: f64::NEG_INFINITY, action: None }
    }

    pub(super) fn best() -> Self {
        Self { value: f64::INFINITY, action: None }
    }

    pub(super) fn max(&mut self, value: Utility, action: A) -> bool {
        if value > self.value {
            self.value = value;
            self.action = Some(action);
            true
        } else {
            false
        }
    }

    pub(super) fn min(&mut self, value: Utility, action: A) -> bool {
        if value < self.value {
            self.value = value;
            self.action = Some(action);
            true
        } else {
            false
        }
    }

    pub(super) fn into_inner(self) -> (Utility, Option<A>) {
        (self.value, self.action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_action_wins_ties() {
        let mut best = ValueAction::worst();
        assert!(best.max(1.0, 'a'));
        assert!(!best.max(1.0, 'b'));
        assert!(best.max(2.0, 'c'));
        assert_eq!(best.into_inner(), (2.0, Some('c')));

        let mut best = ValueAction::best();
        assert!(best.min(-1.0, 'a'));
        assert!(!best.min(-1.0, 'b'));
        assert_eq!(best.into_inner(), (-1.0, Some('a')));
    }

    #[test]
    fn stalemate_follows_options() {
        assert_eq!(stalemate_value(&SearchOptions::new()), Err(Error::NoLegalActions));
        let opts = SearchOptions::new().with_stalemate_value(0.0);
        assert_eq!(stalemate_value(&opts), Ok(0.0));
        assert_eq!(stalemate_value(&opts.with_stalemate_error()), Err(Error::NoLegalActions));
    }
}
