use crate::prelude::*;

/// Helper struct for assembling the declarations of a [`Dfa`] piece by piece. Nothing is
/// checked until [`DfaBuilder::build`] is called, which hands everything to [`Dfa::new`].
///
/// # Example
///
/// We want a DFA with two states `even` and `odd` over the alphabet `['a']` that accepts
/// the words of even length.
/// ```
/// use dfa_sim::prelude::*;
///
/// let dfa: Dfa = DfaBuilder::default()
///     .with_states(["even".to_string(), "odd".to_string()])
///     .with_alphabet(['a'])
///     .with_transitions([
///         ("even".to_string(), 'a', "odd".to_string()),
///         ("odd".to_string(), 'a', "even".to_string()),
///     ])
///     .with_start("even".to_string())
///     .with_accepting(["even".to_string()])
///     .build()
///     .unwrap();
/// assert_eq!(dfa.accepts("aaaa"), Ok(true));
/// ```
#[derive(Clone, Debug)]
pub struct DfaBuilder<Q: State = String, S: Symbol = char> {
    states: Vec<Q>,
    alphabet: Vec<S>,
    transitions: Vec<(Q, S, Q)>,
    start: Option<Q>,
    accepting: Vec<Q>,
}

impl<Q: State, S: Symbol> Default for DfaBuilder<Q, S> {
    fn default() -> Self {
        Self {
            states: vec![],
            alphabet: vec![],
            transitions: vec![],
            start: None,
            accepting: vec![],
        }
    }
}

impl<Q: State, S: Symbol> DfaBuilder<Q, S> {
    /// Adds the given states.
    pub fn with_states<I: IntoIterator<Item = Q>>(mut self, states: I) -> Self {
        self.states.extend(states);
        self
    }

    /// Adds the given symbols to the alphabet.
    pub fn with_alphabet<I: IntoIterator<Item = S>>(mut self, symbols: I) -> Self {
        self.alphabet.extend(symbols);
        self
    }

    /// Adds a single transition.
    pub fn with_transition(mut self, from: Q, symbol: S, to: Q) -> Self {
        self.transitions.push((from, symbol, to));
        self
    }

    /// Adds the given `(source, symbol, target)` triples.
    pub fn with_transitions<I: IntoIterator<Item = (Q, S, Q)>>(mut self, transitions: I) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Sets the start state, replacing any previously set one.
    pub fn with_start(mut self, start: Q) -> Self {
        self.start = Some(start);
        self
    }

    /// Marks the given states as accepting.
    pub fn with_accepting<I: IntoIterator<Item = Q>>(mut self, accepting: I) -> Self {
        self.accepting.extend(accepting);
        self
    }

    /// Validates the collected declarations, see [`Dfa::new`] for the possible errors. Fails
    /// with [`DefinitionError::MissingStart`] if no start state was set.
    pub fn build(self) -> Result<Dfa<Q, S>, DefinitionError<Q, S>> {
        let Some(start) = self.start else {
            return Err(DefinitionError::MissingStart);
        };
        Dfa::new(
            self.states,
            self.alphabet,
            self.transitions,
            start,
            self.accepting,
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn missing_start() {
        let res: Result<Dfa, _> = DfaBuilder::default()
            .with_states(["q0".to_string()])
            .with_alphabet(['a'])
            .build();
        assert_eq!(res, Err(DefinitionError::MissingStart));
    }

    #[test]
    fn single_transitions() {
        let dfa: Dfa<u32, u8> = Dfa::builder()
            .with_states([0, 1])
            .with_alphabet([7, 9])
            .with_transition(0, 7, 1)
            .with_transition(1, 9, 0)
            .with_start(0)
            .with_accepting([1])
            .build()
            .unwrap();
        assert_eq!(dfa.accepts([7u8]), Ok(true));
        assert_eq!(dfa.accepts([7u8, 9]), Ok(false));
        assert_eq!(dfa.missing_transitions(), vec![(0, 9), (1, 7)]);
    }
}
