use itertools::Itertools;
use thiserror::Error;

use crate::{State, Symbol};

fn listing<T: std::fmt::Display>(items: &[T]) -> String {
    format!("{{{}}}", items.iter().join(", "))
}

/// Abstracts the reasons why a collection of declarations does not form a valid [`crate::Dfa`].
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum DefinitionError<Q: State, S: Symbol> {
    /// Some state that is referenced as start, accepting or transition endpoint was never
    /// declared. Holds all offending states of the failing check, sorted.
    #[error("states {} not found in set of declared states", listing(.0))]
    UnknownStates(Vec<Q>),
    /// Some transition is labeled with a symbol outside the alphabet.
    #[error("transition symbols {} not found in alphabet", listing(.0))]
    UnknownSymbols(Vec<S>),
    /// Two transitions leave the same state on the same symbol but lead to different targets.
    #[error("conflicting transitions on ({state}, {symbol}): targets {} and {}", .targets.0, .targets.1)]
    DuplicateTransition {
        /// The shared origin.
        state: Q,
        /// The shared symbol.
        symbol: S,
        /// The two distinct targets.
        targets: (Q, Q),
    },
    /// No start state was given to a [`crate::DfaBuilder`].
    #[error("no start state given")]
    MissingStart,
}

/// Errors that are raised while running a word on a [`crate::Dfa`].
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum RunError<Q: State, S: Symbol> {
    /// The input contains symbols that are not part of the alphabet. Holds exactly the set of
    /// such symbols, sorted.
    #[error("attempted to process symbols {} not found in alphabet", listing(.0))]
    UnrecognizedSymbols(Vec<S>),
    /// The run reached a state that has no outgoing transition on the next symbol.
    #[error("no transition defined from state {state} on symbol {symbol}")]
    UndefinedTransition {
        /// The state in which the run got stuck.
        state: Q,
        /// The symbol that could not be consumed.
        symbol: S,
    },
}

/// Describes in which way a text does not follow the canonical grammar.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[allow(missing_docs)]
pub enum MalformedKind {
    #[error("missing `{0}:` section")]
    MissingSection(&'static str),
    #[error("section `{0}:` given more than once")]
    RepeatedSection(String),
    #[error("unknown section `{0}`")]
    UnknownSection(String),
    #[error("line is not part of any section")]
    Stray,
    #[error("state `{0}` declared more than once")]
    DuplicateState(String),
    #[error("symbol `{0}` declared more than once")]
    DuplicateSymbol(String),
    #[error("expected 3 comma separated fields in transition, found {0}")]
    FieldCount(usize),
    #[error("empty name")]
    EmptyName,
    #[error("expected exactly one start state, found {0}")]
    StartCount(usize),
    #[error("could not parse `{0}`")]
    Token(String),
    #[error("name `{0}` cannot be written without changing its meaning")]
    UnrepresentableName(String),
}

/// A text that does not follow the canonical grammar.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("malformed automaton{}: {kind}", .line.map(|l| format!(" at line {l}")).unwrap_or_default())]
pub struct Malformed {
    /// Line on which the problem was detected, 1-based. It is `None` if the problem concerns
    /// the text as a whole (like a missing section).
    pub line: Option<usize>,
    /// What exactly is wrong.
    pub kind: MalformedKind,
}

impl Malformed {
    pub(crate) fn at(line: usize, kind: MalformedKind) -> Self {
        Self {
            line: Some(line),
            kind,
        }
    }

    pub(crate) fn global(kind: MalformedKind) -> Self {
        Self { line: None, kind }
    }
}

/// Errors that can occur when reading an automaton from its text representation.
#[derive(Debug, Error)]
pub enum FormatError<Q: State, S: Symbol> {
    /// The text does not follow the grammar.
    #[error(transparent)]
    Malformed(#[from] Malformed),
    /// The text is well-formed, but the declarations do not describe a valid automaton.
    #[error(transparent)]
    Definition(#[from] DefinitionError<Q, S>),
    /// Reading or writing a file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl<Q: State, S: Symbol> FormatError<Q, S> {
    /// Returns the grammar violation if this is a [`FormatError::Malformed`].
    pub fn malformed(&self) -> Option<&MalformedKind> {
        match self {
            FormatError::Malformed(malformed) => Some(&malformed.kind),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_offenders() {
        let err: DefinitionError<String, char> =
            DefinitionError::UnknownStates(vec!["q7".into(), "q8".into()]);
        assert_eq!(
            err.to_string(),
            "states {q7, q8} not found in set of declared states"
        );

        let err: RunError<String, char> = RunError::UndefinedTransition {
            state: "q1".into(),
            symbol: 'b',
        };
        assert_eq!(
            err.to_string(),
            "no transition defined from state q1 on symbol b"
        );

        let err: FormatError<String, char> = Malformed::at(4, MalformedKind::FieldCount(2)).into();
        assert_eq!(
            err.to_string(),
            "malformed automaton at line 4: expected 3 comma separated fields in transition, found 2"
        );
        assert_eq!(err.malformed(), Some(&MalformedKind::FieldCount(2)));
    }
}
