use std::fmt::Debug;

use crate::prelude::*;

impl<Q: State, S: Symbol> Dfa<Q, S> {
    /// Returns a string representation of the transition table. Every row corresponds to a
    /// state, the start state is marked with `->` and accepting states with `*`. Undefined
    /// transitions are shown as `-`.
    #[cfg(feature = "table")]
    pub fn build_transition_table(&self) -> String {
        let mut builder = tabled::builder::Builder::default();
        builder.push_record(
            std::iter::once("State".to_string())
                .chain(self.sorted_alphabet().into_iter().map(|a| a.to_string())),
        );
        for state in self.sorted_states() {
            let mut row = vec![self.decorate(state)];
            for symbol in self.sorted_alphabet() {
                row.push(
                    self.step(state, symbol)
                        .map(|q| q.to_string())
                        .unwrap_or_else(|| "-".to_string()),
                );
            }
            builder.push_record(row);
        }

        builder
            .build()
            .with(tabled::settings::Style::rounded())
            .to_string()
    }

    #[cfg(feature = "table")]
    fn decorate(&self, state: &Q) -> String {
        let mut out = String::new();
        if state == self.start() {
            out.push_str("->");
        }
        if self.is_accepting(state) {
            out.push('*');
        }
        out.push_str(&state.to_string());
        out
    }
}

impl<Q: State, S: Symbol> Debug for Dfa<Q, S> {
    #[cfg(feature = "table")]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.build_transition_table())
    }

    #[cfg(not(feature = "table"))]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.write_text_unchecked(f)
    }
}

#[cfg(all(test, feature = "table"))]
mod tests {
    use crate::prelude::*;

    #[test]
    fn transition_table() {
        let dfa: Dfa = "states: a,b\nalphabet: 0,1\nstart: a\naccept: b\ntransitions:\na,0,b\nb,1,a\n"
            .parse()
            .unwrap();
        let table = dfa.build_transition_table();
        let lines = table.lines().collect::<Vec<_>>();
        assert!(lines[1].contains("State"));
        assert!(lines.iter().any(|l| l.contains("->a") && l.contains('b')));
        assert!(lines.iter().any(|l| l.contains("*b") && l.contains('-')));
        assert_eq!(format!("{dfa:?}"), table);
    }
}
