use std::collections::hash_map::Entry;

use itertools::Itertools;
use tracing::debug;

use crate::{prelude::*, Map, Set};

mod builder;
pub use builder::DfaBuilder;

mod table;

/// A deterministic finite automaton with states of type `Q` over symbols of type `S`.
///
/// Values of this type are always valid: the start state, all accepting states and all
/// endpoints of transitions are declared states, every transition symbol is part of the
/// alphabet, and no two transitions leave the same state on the same symbol. These properties
/// are checked once in [`Dfa::new`] and never again, since a `Dfa` cannot be mutated.
///
/// The transition function may be partial, use [`Dfa::is_complete`] to find out whether it is
/// total. Equality is structural, i.e. two automata are equal if all their components are
/// equal as sets.
#[derive(Clone, Eq, PartialEq)]
pub struct Dfa<Q: State = String, S: Symbol = char> {
    states: Set<Q>,
    alphabet: Set<S>,
    transitions: Map<Q, Map<S, Q>>,
    start: Q,
    accepting: Set<Q>,
}

impl<Q: State, S: Symbol> Dfa<Q, S> {
    /// Validates the given declarations and builds an automaton from them. Repeated states,
    /// symbols or transitions are simply merged.
    ///
    /// # Errors
    /// - [`DefinitionError::UnknownStates`] if an accepting state, a transition endpoint or the
    ///   start state is not among `states`. The checks happen in this order and the error names
    ///   every undeclared state of the first failing check.
    /// - [`DefinitionError::UnknownSymbols`] if a transition uses a symbol outside `alphabet`.
    /// - [`DefinitionError::DuplicateTransition`] if two transitions on the same state and symbol
    ///   lead to different targets.
    pub fn new<I, J, T, F>(
        states: I,
        alphabet: J,
        transitions: T,
        start: Q,
        accepting: F,
    ) -> Result<Self, DefinitionError<Q, S>>
    where
        I: IntoIterator<Item = Q>,
        J: IntoIterator<Item = S>,
        T: IntoIterator<Item = (Q, S, Q)>,
        F: IntoIterator<Item = Q>,
    {
        let states: Set<Q> = states.into_iter().collect();
        let alphabet: Set<S> = alphabet.into_iter().collect();

        let accepting: Set<Q> = accepting.into_iter().collect();
        let unknown = accepting.difference(&states).cloned().sorted().collect_vec();
        if !unknown.is_empty() {
            return Err(DefinitionError::UnknownStates(unknown));
        }

        let transitions = transitions.into_iter().collect_vec();
        let unknown = transitions
            .iter()
            .flat_map(|(p, _, q)| [p, q])
            .filter(|q| !states.contains(*q))
            .unique()
            .cloned()
            .sorted()
            .collect_vec();
        if !unknown.is_empty() {
            return Err(DefinitionError::UnknownStates(unknown));
        }

        let unknown = transitions
            .iter()
            .map(|(_, a, _)| a)
            .filter(|a| !alphabet.contains(*a))
            .unique()
            .cloned()
            .sorted()
            .collect_vec();
        if !unknown.is_empty() {
            return Err(DefinitionError::UnknownSymbols(unknown));
        }

        let mut table: Map<Q, Map<S, Q>> = Map::default();
        for (p, a, q) in transitions {
            match table.entry(p.clone()).or_default().entry(a) {
                Entry::Vacant(slot) => {
                    slot.insert(q);
                }
                Entry::Occupied(slot) if slot.get() != &q => {
                    let existing = slot.get().clone();
                    let targets = if existing < q {
                        (existing, q)
                    } else {
                        (q, existing)
                    };
                    return Err(DefinitionError::DuplicateTransition {
                        state: p,
                        symbol: slot.key().clone(),
                        targets,
                    });
                }
                Entry::Occupied(_) => {}
            }
        }

        if !states.contains(&start) {
            return Err(DefinitionError::UnknownStates(vec![start]));
        }

        let dfa = Self {
            states,
            alphabet,
            transitions: table,
            start,
            accepting,
        };
        debug!(
            "constructed automaton with {} states over {} symbols, {} transitions missing",
            dfa.size(),
            dfa.alphabet.len(),
            dfa.missing_transitions().len()
        );
        Ok(dfa)
    }

    /// Creates a new [`DfaBuilder`].
    pub fn builder() -> DfaBuilder<Q, S> {
        DfaBuilder::default()
    }

    /// Returns the number of states.
    pub fn size(&self) -> usize {
        self.states.len()
    }

    /// Returns an iterator over all states, in no particular order.
    pub fn states(&self) -> impl Iterator<Item = &Q> + '_ {
        self.states.iter()
    }

    /// Returns true if `state` is a declared state.
    pub fn contains_state(&self, state: &Q) -> bool {
        self.states.contains(state)
    }

    /// Returns an iterator over the alphabet, in no particular order.
    pub fn alphabet(&self) -> impl Iterator<Item = &S> + '_ {
        self.alphabet.iter()
    }

    /// Returns true if `symbol` belongs to the alphabet.
    pub fn contains_symbol(&self, symbol: &S) -> bool {
        self.alphabet.contains(symbol)
    }

    /// Gives a reference to the start state.
    pub fn start(&self) -> &Q {
        &self.start
    }

    /// Returns an iterator over the accepting states, in no particular order.
    pub fn accepting(&self) -> impl Iterator<Item = &Q> + '_ {
        self.accepting.iter()
    }

    /// Returns true if `state` is accepting.
    pub fn is_accepting(&self, state: &Q) -> bool {
        self.accepting.contains(state)
    }

    /// Looks up the successor of `state` on `symbol`. Returns `None` if no such transition
    /// exists, which is the case if the transition function is not total or if `state`/`symbol`
    /// are not part of the automaton at all.
    pub fn step(&self, state: &Q, symbol: &S) -> Option<&Q> {
        self.transitions.get(state)?.get(symbol)
    }

    /// Returns all transitions as `(source, symbol, target)` triples, sorted.
    pub fn transitions(&self) -> impl Iterator<Item = (&Q, &S, &Q)> + '_ {
        self.transitions
            .iter()
            .flat_map(|(p, row)| row.iter().map(move |(a, q)| (p, a, q)))
            .sorted()
    }

    /// Returns every pair of state and symbol for which no transition is defined, sorted.
    pub fn missing_transitions(&self) -> Vec<(Q, S)> {
        self.states
            .iter()
            .cartesian_product(self.alphabet.iter())
            .filter(|(q, a)| self.step(q, a).is_none())
            .map(|(q, a)| (q.clone(), a.clone()))
            .sorted()
            .collect()
    }

    /// Returns true if and only if the transition function is total, i.e. there is a
    /// transition for every state and every symbol.
    pub fn is_complete(&self) -> bool {
        self.states
            .iter()
            .all(|q| self.alphabet.iter().all(|a| self.step(q, a).is_some()))
    }

    /// Returns a [`Simulator`] for running words on `self`.
    pub fn simulator(&self) -> Simulator<'_, Q, S> {
        Simulator::new(self)
    }

    /// Returns whether the automaton accepts the given finite word, see [`Simulator::accepts`].
    pub fn accepts<W: FiniteWord<S>>(&self, word: W) -> Result<bool, RunError<Q, S>> {
        self.simulator().accepts(word)
    }

    /// Returns the states sorted, which gives a canonical order for output.
    pub(crate) fn sorted_states(&self) -> Vec<&Q> {
        self.states.iter().sorted().collect()
    }

    /// Returns the alphabet sorted.
    pub(crate) fn sorted_alphabet(&self) -> Vec<&S> {
        self.alphabet.iter().sorted().collect()
    }

    /// Returns the accepting states sorted.
    pub(crate) fn sorted_accepting(&self) -> Vec<&Q> {
        self.accepting.iter().sorted().collect()
    }
}
