//! Syllable lexicon indexed by first character.

use std::collections::HashMap;

/// The set of valid syllables, bucketed by their first character.
///
/// Buckets keep insertion order and do not deduplicate: a word list with
/// repeated lines simply stores the repeats.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    by_first_char: HashMap<char, Vec<String>>,
    len: usize,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `token` to the bucket of its first character.
    /// Returns `false` (and stores nothing) for an empty token.
    pub fn insert<S: Into<String>>(&mut self, token: S) -> bool {
        let token = token.into();
        let Some(first) = token.chars().next() else {
            return false;
        };
        self.by_first_char.entry(first).or_default().push(token);
        self.len += 1;
        true
    }

    /// True iff the lowercased `token` is a stored syllable.
    pub fn is_valid(&self, token: &str) -> bool {
        let token = token.to_lowercase();
        token
            .chars()
            .next()
            .is_some_and(|first| self.tokens_starting_with(first).contains(&token))
    }

    /// Syllables starting with `first`, in insertion order. Empty when the
    /// character is unknown.
    pub fn tokens_starting_with(&self, first: char) -> &[String] {
        self.by_first_char
            .get(&first)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of stored entries, repeats included.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<S: Into<String>> FromIterator<S> for Lexicon {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut lexicon = Lexicon::new();
        for token in iter {
            lexicon.insert(token);
        }
        lexicon
    }
}
