use itertools::Itertools;

use crate::State;

/// The sequence of states that a [`crate::Dfa`] visits while reading a word, starting with the
/// start state. A run on a word of length `n` visits `n + 1` states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run<'a, Q: State> {
    states: Vec<&'a Q>,
    accepted: bool,
}

impl<'a, Q: State> Run<'a, Q> {
    pub(super) fn new(states: Vec<&'a Q>, accepted: bool) -> Self {
        debug_assert!(!states.is_empty(), "a run always contains the start state");
        Self { states, accepted }
    }

    /// Returns an iterator over the visited states, in order.
    pub fn states(&self) -> impl Iterator<Item = &'a Q> + '_ {
        self.states.iter().copied()
    }

    /// The state in which the run ends.
    pub fn reached(&self) -> &'a Q {
        self.states[self.states.len() - 1]
    }

    /// Whether the run ends in an accepting state.
    pub fn accepted(&self) -> bool {
        self.accepted
    }

    /// Number of symbols consumed.
    pub fn len(&self) -> usize {
        self.states.len() - 1
    }

    /// True if no symbol was consumed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<Q: State> std::fmt::Display for Run<'_, Q> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.states.iter().join(" -> "))
    }
}
