//! Library for describing and simulating deterministic finite automata (DFA).
//!
//! A DFA consists of a finite set of states, an alphabet, a transition function mapping pairs of
//! state and symbol to a successor state, one designated start state and a set of accepting states.
//! The central type is [`Dfa`], which can only be obtained through validation: either via
//! [`Dfa::new`], the fluent [`DfaBuilder`] or by parsing the canonical text format (see [`text`]).
//! Once constructed, a [`Dfa`] is immutable and can be shared freely between threads.
//!
//! Running an input on an automaton is the job of the [`Simulator`], which borrows a [`Dfa`] and
//! processes a [`FiniteWord`] one symbol at a time. The transition function need not be total, so
//! a run may get stuck, in which case [`RunError::UndefinedTransition`] is reported.
//!
//! ```
//! use dfa_sim::prelude::*;
//!
//! let dfa: Dfa = Dfa::new(
//!     ["even", "odd"].map(String::from),
//!     ['a'],
//!     [
//!         ("even".to_string(), 'a', "odd".to_string()),
//!         ("odd".to_string(), 'a', "even".to_string()),
//!     ],
//!     "even".to_string(),
//!     ["even".to_string()],
//! )
//! .unwrap();
//!
//! assert_eq!(dfa.accepts("aa"), Ok(true));
//! assert_eq!(dfa.accepts("aaa"), Ok(false));
//! ```
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// The prelude is supposed to make using this package easier. Including everything, i.e.
/// `use dfa_sim::prelude::*;` should be enough to use the package.
pub mod prelude {
    pub use super::{
        definition::{Dfa, DfaBuilder},
        error::{DefinitionError, FormatError, Malformed, MalformedKind, RunError},
        simulator::{accepts, Run, Simulator},
        word::FiniteWord,
        State, Symbol,
    };
}

/// Defines the validated automaton description and ways to construct it.
pub mod definition;
pub use definition::{Dfa, DfaBuilder};

/// Error types for construction, simulation and parsing.
pub mod error;
pub use error::{DefinitionError, FormatError, Malformed, MalformedKind, RunError};

/// Executes the transition function of a [`Dfa`] on finite inputs.
pub mod simulator;
pub use simulator::{accepts, Simulator};

/// Canonical plain text representation of automata.
pub mod text;

/// Module that contains definitions for dealing with finite input words.
pub mod word;
pub use word::FiniteWord;

use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

/// A state is an opaque identifier. Apart from being comparable and printable, no structure
/// is assumed.
pub trait State: Clone + Eq + Ord + Hash + Debug + Display + 'static {}

impl<T: Clone + Eq + Ord + Hash + Debug + Display + 'static> State for T {}

/// A symbol is an atomic token that an automaton consumes, for example a `char`.
pub trait Symbol: Clone + Eq + Ord + Hash + Debug + Display + 'static {}

impl<T: Clone + Eq + Ord + Hash + Debug + Display + 'static> Symbol for T {}

/// Type alias for sets, we use this to hide which type of `HashSet` we are actually using.
pub type Set<S> = fxhash::FxHashSet<S>;
/// Type alias for maps, we use this to hide which type of `HashMap` we are actually using.
pub type Map<K, V> = fxhash::FxHashMap<K, V>;

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    /// Accepts exactly the words over `{0, 1}` that contain three consecutive zeros.
    pub fn three_zeros() -> Dfa {
        DfaBuilder::default()
            .with_states(["q1", "q2", "q3", "q4"].map(String::from))
            .with_alphabet(['0', '1'])
            .with_transitions(
                [
                    ("q1", '0', "q2"),
                    ("q1", '1', "q1"),
                    ("q2", '0', "q3"),
                    ("q2", '1', "q1"),
                    ("q3", '0', "q4"),
                    ("q3", '1', "q1"),
                    ("q4", '0', "q4"),
                    ("q4", '1', "q4"),
                ]
                .map(|(p, a, q)| (p.to_string(), a, q.to_string())),
            )
            .with_start("q1".to_string())
            .with_accepting(["q4".to_string()])
            .build()
            .unwrap()
    }

    #[test]
    fn three_consecutive_zeros() {
        let dfa = three_zeros();
        assert_eq!(dfa.accepts("01000"), Ok(true));
        assert_eq!(dfa.accepts("0101"), Ok(false));
        assert_eq!(dfa.accepts(""), Ok(false));
        assert_eq!(dfa.accepts("000"), Ok(true));
    }
}
