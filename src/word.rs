use crate::Symbol;

/// A finite word is a finite sequence of symbols that can be traversed any number of times.
///
/// Being able to traverse the word more than once allows the [`crate::Simulator`] to check that
/// every symbol belongs to the alphabet before taking a single transition, without having to
/// buffer the input.
pub trait FiniteWord<S: Symbol> {
    /// Returns an iterator over the symbols of the word, in order.
    fn symbols(&self) -> impl Iterator<Item = S> + '_;

    /// Returns the number of symbols in the word.
    fn len(&self) -> usize {
        self.symbols().count()
    }

    /// Returns `true` if the word contains no symbols.
    fn is_empty(&self) -> bool {
        self.symbols().next().is_none()
    }
}

impl FiniteWord<char> for str {
    fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.chars()
    }
}

impl FiniteWord<char> for String {
    fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.chars()
    }
}

impl<S: Symbol> FiniteWord<S> for [S] {
    fn symbols(&self) -> impl Iterator<Item = S> + '_ {
        self.iter().cloned()
    }

    fn len(&self) -> usize {
        <[S]>::len(self)
    }
}

impl<S: Symbol> FiniteWord<S> for Vec<S> {
    fn symbols(&self) -> impl Iterator<Item = S> + '_ {
        self.iter().cloned()
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<S: Symbol, const N: usize> FiniteWord<S> for [S; N] {
    fn symbols(&self) -> impl Iterator<Item = S> + '_ {
        self.iter().cloned()
    }

    fn len(&self) -> usize {
        N
    }
}

impl<S: Symbol, W: FiniteWord<S> + ?Sized> FiniteWord<S> for &W {
    fn symbols(&self) -> impl Iterator<Item = S> + '_ {
        W::symbols(*self)
    }

    fn len(&self) -> usize {
        W::len(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::FiniteWord;

    #[test]
    fn words_from_strings_and_slices() {
        assert_eq!("abc".symbols().collect::<Vec<_>>(), vec!['a', 'b', 'c']);
        assert_eq!(FiniteWord::<char>::len("abc"), 3);
        assert!(FiniteWord::<char>::is_empty(""));

        let tokens = vec!["go".to_string(), "stop".to_string()];
        assert_eq!(FiniteWord::len(&tokens), 2);
        assert_eq!(
            (&tokens).symbols().collect::<Vec<_>>(),
            vec!["go".to_string(), "stop".to_string()]
        );
        assert!(!FiniteWord::is_empty(&[1u8, 2, 3]));
    }
}
