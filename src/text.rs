//! The canonical text format is line oriented and consists of five sections, which may appear
//! in any order:
//! ```text
//! states: q1,q2,q3       # comma separated, no duplicates
//! alphabet: 0,1          # comma separated, no duplicates
//! start: q1              # exactly one state
//! accept: q3             # comma separated, may be empty
//! transitions:
//! q1,0,q2
//! q2,0,q3
//! ```
//! Everything after a `#` is a comment, blank lines are ignored and whitespace around names is
//! insignificant. Every line that contains a `:` opens a section, the lines following
//! `transitions:` that contain no `:` are `source,symbol,target` triples. The sections `states`,
//! `alphabet` and `start` are required, a missing `accept` or `transitions` section stands for
//! an empty one.
//!
//! Names are read through [`FromStr`], so for a [`Dfa`] over `char` every symbol must be a single
//! character. Since `,`, `:` and `#` are delimiters, they may not occur in names. Writing an
//! automaton whose names are empty, contain a delimiter or a line break, or carry surrounding
//! whitespace fails with [`MalformedKind::UnrepresentableName`].

use std::{fmt::Display, path::Path, str::FromStr};

use itertools::Itertools;
use tracing::{debug, trace};

use crate::{prelude::*, Set};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
enum Section {
    States,
    Alphabet,
    Start,
    Accept,
    Transitions,
}

impl Section {
    const REQUIRED: [Section; 3] = [Section::States, Section::Alphabet, Section::Start];

    fn key(self) -> &'static str {
        match self {
            Section::States => "states",
            Section::Alphabet => "alphabet",
            Section::Start => "start",
            Section::Accept => "accept",
            Section::Transitions => "transitions",
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        [
            Section::States,
            Section::Alphabet,
            Section::Start,
            Section::Accept,
            Section::Transitions,
        ]
        .into_iter()
        .find(|section| section.key() == key)
    }
}

fn parse_name<T: FromStr>(token: &str, line: usize) -> Result<T, Malformed> {
    if token.is_empty() {
        return Err(Malformed::at(line, MalformedKind::EmptyName));
    }
    token
        .parse()
        .map_err(|_| Malformed::at(line, MalformedKind::Token(token.to_string())))
}

/// Parses a comma separated list, an empty `value` gives an empty list. Repeated entries are
/// reported through `duplicate`.
fn parse_list<T: FromStr>(
    value: &str,
    line: usize,
    duplicate: fn(String) -> MalformedKind,
) -> Result<Vec<T>, Malformed> {
    if value.is_empty() {
        return Ok(vec![]);
    }
    let mut seen: Set<&str> = Set::default();
    value
        .split(',')
        .map(str::trim)
        .map(|token| {
            if !token.is_empty() && !seen.insert(token) {
                return Err(Malformed::at(line, duplicate(token.to_string())));
            }
            parse_name(token, line)
        })
        .collect()
}

fn parse_transition<Q: FromStr, S: FromStr>(
    line: &str,
    lineno: usize,
) -> Result<(Q, S, Q), Malformed> {
    let fields = line.split(',').map(str::trim).collect_vec();
    match fields.as_slice() {
        [from, symbol, to] => Ok((
            parse_name(from, lineno)?,
            parse_name(symbol, lineno)?,
            parse_name(to, lineno)?,
        )),
        _ => Err(Malformed::at(lineno, MalformedKind::FieldCount(fields.len()))),
    }
}

fn strip_comment(line: &str) -> &str {
    match line.split_once('#') {
        Some((content, _)) => content,
        None => line,
    }
}

/// Parses an automaton from its canonical text representation, see the [module level
/// documentation](self) for the grammar.
///
/// # Errors
/// [`FormatError::Malformed`] if `text` does not follow the grammar, and
/// [`FormatError::Definition`] if the declarations are rejected by [`Dfa::new`].
pub fn parse<Q, S>(text: &str) -> Result<Dfa<Q, S>, FormatError<Q, S>>
where
    Q: State + FromStr,
    S: Symbol + FromStr,
{
    let mut seen: Set<Section> = Set::default();
    let mut current: Option<Section> = None;

    let mut states: Vec<Q> = vec![];
    let mut alphabet: Vec<S> = vec![];
    let mut start: Option<Q> = None;
    let mut accepting: Vec<Q> = vec![];
    let mut transitions: Vec<(Q, S, Q)> = vec![];

    for (idx, raw) in text.lines().enumerate() {
        let lineno = idx + 1;
        let line = strip_comment(raw).trim();
        if line.is_empty() {
            continue;
        }
        trace!("parsing line {lineno}: {line}");

        let Some((key, value)) = line.split_once(':') else {
            if current == Some(Section::Transitions) {
                transitions.push(parse_transition(line, lineno)?);
                continue;
            }
            return Err(Malformed::at(lineno, MalformedKind::Stray).into());
        };

        let key = key.trim();
        let value = value.trim();
        let Some(section) = Section::from_key(key) else {
            return Err(Malformed::at(lineno, MalformedKind::UnknownSection(key.to_string())).into());
        };
        if !seen.insert(section) {
            return Err(
                Malformed::at(lineno, MalformedKind::RepeatedSection(key.to_string())).into(),
            );
        }
        current = Some(section);

        match section {
            Section::States => {
                states = parse_list(value, lineno, MalformedKind::DuplicateState)?;
            }
            Section::Alphabet => {
                alphabet = parse_list(value, lineno, MalformedKind::DuplicateSymbol)?;
            }
            Section::Accept => {
                accepting = parse_list(value, lineno, MalformedKind::DuplicateState)?;
            }
            Section::Start => {
                let mut given: Vec<Q> = parse_list(value, lineno, MalformedKind::DuplicateState)?;
                if given.len() != 1 {
                    return Err(Malformed::at(lineno, MalformedKind::StartCount(given.len())).into());
                }
                start = given.pop();
            }
            Section::Transitions => {
                if !value.is_empty() {
                    return Err(Malformed::at(lineno, MalformedKind::Token(value.to_string())).into());
                }
            }
        }
    }

    if let Some(missing) = Section::REQUIRED
        .into_iter()
        .find(|section| !seen.contains(section))
    {
        return Err(Malformed::global(MalformedKind::MissingSection(missing.key())).into());
    }
    let Some(start) = start else {
        return Err(Malformed::global(MalformedKind::MissingSection(Section::Start.key())).into());
    };

    debug!(
        "parsed {} states, {} symbols and {} transitions",
        states.len(),
        alphabet.len(),
        transitions.len()
    );
    Ok(Dfa::new(states, alphabet, transitions, start, accepting)?)
}

/// Returns the canonical text representation of `dfa`, the inverse of [`parse`]. Fails with
/// [`MalformedKind::UnrepresentableName`] if a state or symbol could not be read back.
pub fn serialize<Q: State, S: Symbol>(dfa: &Dfa<Q, S>) -> Result<String, Malformed> {
    dfa.to_text()
}

/// Checks that `name` survives a round trip through the grammar: it must be non-empty, free of
/// delimiters and line breaks, and carry no surrounding whitespace.
fn representable<T: Display>(name: &T) -> Result<(), Malformed> {
    let rendered = name.to_string();
    if rendered.is_empty()
        || rendered.trim() != rendered
        || rendered.contains(|c| matches!(c, ',' | ':' | '#' | '\n' | '\r'))
    {
        return Err(Malformed::global(MalformedKind::UnrepresentableName(rendered)));
    }
    Ok(())
}

fn write_section<W: std::fmt::Write, T: Display>(
    w: &mut W,
    section: Section,
    items: &[T],
) -> std::fmt::Result {
    if items.is_empty() {
        writeln!(w, "{}:", section.key())
    } else {
        writeln!(w, "{}: {}", section.key(), items.iter().join(","))
    }
}

impl<Q: State, S: Symbol> Dfa<Q, S> {
    /// Writes the text representation without checking that names can be read back.
    pub(crate) fn write_text_unchecked<W: std::fmt::Write>(&self, w: &mut W) -> std::fmt::Result {
        write_section(w, Section::States, &self.sorted_states())?;
        write_section(w, Section::Alphabet, &self.sorted_alphabet())?;
        write_section(w, Section::Start, &[self.start()])?;
        write_section(w, Section::Accept, &self.sorted_accepting())?;
        writeln!(w, "{}:", Section::Transitions.key())?;
        for (from, symbol, to) in self.transitions() {
            writeln!(w, "{from},{symbol},{to}")?;
        }
        Ok(())
    }

    /// Returns the canonical text representation of `self`. All sets and the transitions are
    /// sorted, so equal automata always produce the same text.
    ///
    /// # Errors
    /// [`MalformedKind::UnrepresentableName`] if the rendering of a state or symbol is empty,
    /// has leading or trailing whitespace, or contains `,`, `:`, `#` or a line break. Such a
    /// name would not parse back to the same automaton.
    pub fn to_text(&self) -> Result<String, Malformed> {
        self.states().try_for_each(representable)?;
        self.alphabet().try_for_each(representable)?;

        let mut out = String::new();
        self.write_text_unchecked(&mut out)
            .expect("writing to a String does not fail");
        trace!("produced text from automaton\n{out}");
        Ok(out)
    }

    /// Writes the canonical text representation of `self` into the file at `path`, replacing
    /// its contents. Nothing is written if [`Dfa::to_text`] fails.
    pub fn write_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), FormatError<Q, S>> {
        std::fs::write(path, self.to_text()?)?;
        Ok(())
    }
}

impl<Q, S> Dfa<Q, S>
where
    Q: State + FromStr,
    S: Symbol + FromStr,
{
    /// Reads an automaton in canonical text representation from the file at `path`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, FormatError<Q, S>> {
        let path = path.as_ref();
        debug!("reading automaton from {}", path.display());
        parse(&std::fs::read_to_string(path)?)
    }
}

impl<Q, S> FromStr for Dfa<Q, S>
where
    Q: State + FromStr,
    S: Symbol + FromStr,
{
    type Err = FormatError<Q, S>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
