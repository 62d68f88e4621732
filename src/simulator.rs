use itertools::Itertools;
use tracing::trace;

use crate::prelude::*;

mod run;
pub use run::Run;

/// Runs finite words on a borrowed [`Dfa`].
///
/// A simulator holds no state of its own between calls, so it is `Copy` and any number of
/// simulators (possibly on different threads) can work on the same automaton at once.
///
/// Every operation first checks that all symbols of the input belong to the alphabet, and only
/// then starts in the start state and follows the transition function one symbol at a time.
/// Processing is a plain loop, so the input length is only bounded by memory.
#[derive(Clone, Copy)]
pub struct Simulator<'a, Q: State = String, S: Symbol = char> {
    dfa: &'a Dfa<Q, S>,
}

impl<'a, Q: State, S: Symbol> Simulator<'a, Q, S> {
    /// Creates a simulator for `dfa`.
    pub fn new(dfa: &'a Dfa<Q, S>) -> Self {
        Self { dfa }
    }

    /// Gives a reference to the simulated automaton.
    pub fn dfa(&self) -> &'a Dfa<Q, S> {
        self.dfa
    }

    /// Returns whether the automaton accepts `word`, i.e. whether the state reached after
    /// consuming all of `word` is accepting. The empty word is accepted if and only if the
    /// start state is accepting.
    ///
    /// # Errors
    /// - [`RunError::UnrecognizedSymbols`] if `word` contains symbols outside the alphabet.
    /// - [`RunError::UndefinedTransition`] if the run reaches a state that has no transition on
    ///   the next symbol.
    pub fn accepts<W: FiniteWord<S>>(&self, word: W) -> Result<bool, RunError<Q, S>> {
        let reached = self.reached(word)?;
        Ok(self.dfa.is_accepting(reached))
    }

    /// Returns the state that is reached after consuming `word` from the start state. Fails in
    /// the same situations as [`Simulator::accepts`].
    pub fn reached<W: FiniteWord<S>>(&self, word: W) -> Result<&'a Q, RunError<Q, S>> {
        self.check_symbols(&word)?;

        let mut current = self.dfa.start();
        for symbol in word.symbols() {
            current = self.successor(current, symbol)?;
        }
        Ok(current)
    }

    /// Computes the complete [`Run`] of `word`, which records every visited state. Fails in
    /// the same situations as [`Simulator::accepts`], no partial run is returned.
    pub fn run<W: FiniteWord<S>>(&self, word: W) -> Result<Run<'a, Q>, RunError<Q, S>> {
        self.check_symbols(&word)?;

        let mut current = self.dfa.start();
        let mut states = Vec::with_capacity(FiniteWord::<S>::len(&word) + 1);
        states.push(current);
        for symbol in word.symbols() {
            current = self.successor(current, symbol)?;
            states.push(current);
        }
        Ok(Run::new(states, self.dfa.is_accepting(current)))
    }

    fn successor(&self, state: &'a Q, symbol: S) -> Result<&'a Q, RunError<Q, S>> {
        match self.dfa.step(state, &symbol) {
            Some(next) => {
                trace!("{state} --{symbol}--> {next}");
                Ok(next)
            }
            None => Err(RunError::UndefinedTransition {
                state: state.clone(),
                symbol,
            }),
        }
    }

    fn check_symbols<W: FiniteWord<S>>(&self, word: &W) -> Result<(), RunError<Q, S>> {
        let unknown = word
            .symbols()
            .filter(|a| !self.dfa.contains_symbol(a))
            .unique()
            .sorted()
            .collect_vec();
        if unknown.is_empty() {
            Ok(())
        } else {
            Err(RunError::UnrecognizedSymbols(unknown))
        }
    }
}

/// Returns whether `dfa` accepts `word`, see [`Simulator::accepts`].
pub fn accepts<Q: State, S: Symbol, W: FiniteWord<S>>(
    dfa: &Dfa<Q, S>,
    word: W,
) -> Result<bool, RunError<Q, S>> {
    Simulator::new(dfa).accepts(word)
}
