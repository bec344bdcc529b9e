/*!
checker module

`PinyinChecker` validates and corrects romanized Chinese names against a
fixed syllable vocabulary. It owns two views of the same word list, built in
one pass:

- a `Lexicon` (first character -> syllables) used by the maximum-matching
  segmenters to decide whether a string splits into valid syllables;
- a `MetricTree` over the syllables, searched with radius 1 to find valid
  neighbours of a suspicious two-character window.

`check_name` works in a fixed sequence:

1. normalize: every character outside `[A-Za-z0-9]` becomes a space, then
   trim and lowercase;
2. reject the name unless forward or backward segmentation of the joined
   parts yields at least one valid syllable;
3. a single part is returned unchanged if it already segments into valid
   syllables; otherwise each suspicious position is repaired with one
   substitution or insertion taken from a tree neighbour, and only repairs
   that segment fully are kept;
4. several parts are corrected one by one and recombined depth-first, with
   names longer than `max_name_tokens` pruned.
*/

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use crate::bktree::{DistanceFn, MetricTree};
use crate::config::CheckerConfig;
use crate::distance::str_distance;
use crate::error::{Error, Result};
use crate::lexicon::Lexicon;
use crate::segment::{backward_max_match, forward_max_match};

/// Corrections are single edits.
const RADIUS: usize = 1;

/// Pinyin name checker. Read-only once built, so it can be shared across
/// threads freely; growing the vocabulary needs `&mut self`.
#[derive(Debug)]
pub struct PinyinChecker {
    lexicon: Lexicon,
    tree: MetricTree<String>,
    config: CheckerConfig,
}

impl PinyinChecker {
    /// A checker with an empty vocabulary. Every name is rejected until
    /// words are added.
    pub fn new(config: CheckerConfig) -> Self {
        Self {
            lexicon: Lexicon::new(),
            tree: MetricTree::empty(str_distance::<String> as DistanceFn<String>),
            config,
        }
    }

    /// Build from an iterator of syllables with the default configuration.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_config(CheckerConfig::default(), words)
    }

    /// Build from an iterator of syllables. Blank entries are skipped.
    pub fn with_config<I, S>(config: CheckerConfig, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut checker = Self::new(config);
        for word in words {
            checker.load_word(word.as_ref());
        }
        checker
    }

    /// Build from a compile-time map emitted by `include_syllables!`.
    pub fn from_phf(syllables: &'static phf::Map<char, &'static [&'static str]>) -> Self {
        Self::with_config(
            CheckerConfig::default(),
            syllables.values().flat_map(|words| words.iter().copied()),
        )
    }

    /// Load a vocabulary file with one syllable per line.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_path_with_config(path, CheckerConfig::default())
    }

    /// Load a vocabulary file with one syllable per line.
    ///
    /// Fails with [`Error::MissingResource`] if the file does not exist.
    pub fn from_path_with_config<P: AsRef<Path>>(path: P, config: CheckerConfig) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::MissingResource(path.to_path_buf()));
        }
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), config)
    }

    /// Load a line-oriented vocabulary. Lines are trimmed; blank lines and
    /// `#` comments are skipped, as `include_syllables!` does.
    pub fn from_reader<R: BufRead>(reader: R, config: CheckerConfig) -> Result<Self> {
        let started = Instant::now();
        let mut checker = Self::new(config);
        let mut words = 0usize;
        for line in reader.lines() {
            let line = line?;
            if line.trim_start().starts_with('#') {
                continue;
            }
            if checker.load_word(&line) {
                words += 1;
            }
        }
        tracing::info!(
            words,
            distinct = checker.tree.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "loaded syllable vocabulary"
        );
        Ok(checker)
    }

    /// Add one syllable to both the lexicon and the tree.
    ///
    /// Returns `Ok(false)` if the syllable was already known, and
    /// [`Error::InvalidInput`] if it is empty after trimming.
    pub fn add_word(&mut self, word: &str) -> Result<bool> {
        let word = normalize_word(word);
        if word.is_empty() {
            return Err(Error::invalid_input("cannot add an empty syllable"));
        }
        if !self.tree.insert(word.clone()) {
            return Ok(false);
        }
        self.lexicon.insert(word);
        Ok(true)
    }

    fn load_word(&mut self, raw: &str) -> bool {
        let word = normalize_word(raw);
        if word.is_empty() {
            return false;
        }
        self.lexicon.insert(word.clone());
        self.tree.insert(word);
        true
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn tree(&self) -> &MetricTree<String> {
        &self.tree
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    pub fn segment_forward<'a>(&self, text: &'a str) -> Vec<&'a str> {
        forward_max_match(&self.lexicon, text, self.config.max_token_len)
    }

    pub fn segment_backward<'a>(&self, text: &'a str) -> Vec<&'a str> {
        backward_max_match(&self.lexicon, text, self.config.max_token_len)
    }

    /// True if forward segmentation splits `name` into valid syllables only.
    pub fn is_right_name(&self, name: &str) -> bool {
        let segments = self.segment_forward(name);
        !segments.is_empty() && segments.iter().all(|s| self.lexicon.is_valid(s))
    }

    /// True if either segmentation direction finds at least one valid
    /// syllable in `text`.
    pub fn is_plausible(&self, text: &str) -> bool {
        self.segment_forward(text)
            .into_iter()
            .chain(self.segment_backward(text))
            .any(|s| self.lexicon.is_valid(s))
    }

    /// Correct a raw name.
    ///
    /// Returns every corrected spelling, or an empty list when the input is
    /// too short, does not look like pinyin, or has no valid correction.
    /// Single-part results are sorted; multi-part results come out in
    /// depth-first order over sorted per-part candidates.
    pub fn check_name(&self, raw: &str) -> Vec<String> {
        let name = normalize_name(raw);
        if name.len() < self.config.min_name_len {
            tracing::debug!(name = %name, "name too short");
            return Vec::new();
        }

        let parts: Vec<&str> = name.split_whitespace().collect();
        if !self.is_plausible(&parts.concat()) {
            tracing::debug!(name = %name, "name does not look like pinyin");
            return Vec::new();
        }

        match parts.as_slice() {
            [single] => self.correct_token(single).into_iter().collect(),
            _ => self.correct_parts(&parts),
        }
    }

    /// Candidates for one space-free token. `token` must be normalized
    /// (lowercase ASCII alphanumerics).
    fn correct_token(&self, token: &str) -> BTreeSet<String> {
        debug_assert!(token.is_ascii());

        if self.is_right_name(token) {
            return BTreeSet::from([token.to_string()]);
        }

        let bytes = token.as_bytes();
        let mut names = BTreeSet::new();
        if bytes.len() < 2 {
            return names;
        }

        for (i, &b) in bytes.iter().enumerate() {
            if b.is_ascii_lowercase() && self.window_is_valid(token, i) {
                continue;
            }
            tracing::trace!(token, position = i, "suspicious position");

            let mut neighbours: BTreeSet<&str> = BTreeSet::new();
            if i > 0 {
                neighbours.extend(self.nearby(&token[i - 1..=i]));
            }
            if i + 1 < bytes.len() {
                neighbours.extend(self.nearby(&token[i..=i + 1]));
            }

            for word in neighbours {
                for candidate in repairs(token, i, word) {
                    if self.is_right_name(&candidate) {
                        tracing::trace!(token, candidate = %candidate, "accepted repair");
                        names.insert(candidate);
                    }
                }
            }
        }
        names
    }

    /// Whether the two-character window starting or ending at `i` is a
    /// syllable.
    fn window_is_valid(&self, token: &str, i: usize) -> bool {
        let suffix = i + 1 < token.len() && self.lexicon.is_valid(&token[i..i + 2]);
        let prefix = i > 0 && self.lexicon.is_valid(&token[i - 1..=i]);
        suffix || prefix
    }

    fn nearby(&self, window: &str) -> Vec<&str> {
        self.tree
            .search(&window.to_string(), RADIUS)
            .into_iter()
            .map(String::as_str)
            .collect()
    }

    fn correct_parts(&self, parts: &[&str]) -> Vec<String> {
        let mut choices: Vec<Vec<String>> = Vec::with_capacity(parts.len());
        for &part in parts {
            if self.lexicon.is_valid(part) {
                choices.push(vec![part.to_string()]);
            } else if part.len() > 1 {
                choices.push(self.correct_token(part).into_iter().collect());
            }
        }

        let mut names = Vec::new();
        if choices.is_empty() {
            return names;
        }
        if choices.len() > self.config.max_name_tokens {
            tracing::debug!(
                tokens = choices.len(),
                max = self.config.max_name_tokens,
                "too many name parts"
            );
        }
        let mut current = Vec::with_capacity(choices.len());
        combine(&choices, self.config.max_name_tokens, &mut current, &mut names);
        names
    }
}

/// Vocabulary words are stored trimmed and lowercased, matching the
/// lowercased lookups of [`Lexicon::is_valid`].
fn normalize_word(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Replace every character outside `[A-Za-z0-9]` with a space, trim and
/// lowercase.
pub fn normalize_name(raw: &str) -> String {
    let replaced: String = raw
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
        .collect();
    replaced.trim().to_ascii_lowercase()
}

/// Single-edit repairs of `token` at position `i` suggested by the valid
/// neighbour `word`, whose first two characters are `first` and `second`:
///
/// - `token[i-1] == first`: substitute `token[i]` with `second`;
/// - `token[i+1] == second`: substitute `token[i]` with `first`;
/// - `token[i] == first`: insert `second` after `i`, or else
///   `token[i] == second`: insert `first` before `i`.
fn repairs(token: &str, i: usize, word: &str) -> Vec<String> {
    let mut chars = word.chars();
    let (Some(first), Some(second)) = (chars.next(), chars.next()) else {
        return Vec::new();
    };

    let bytes = token.as_bytes();
    let current = char::from(bytes[i]);
    let mut out = Vec::with_capacity(3);

    if i > 0 && char::from(bytes[i - 1]) == first {
        out.push(splice(token, i, i + 1, second));
    }
    if i + 1 < bytes.len() && char::from(bytes[i + 1]) == second {
        out.push(splice(token, i, i + 1, first));
    }
    if current == first {
        out.push(splice(token, i + 1, i + 1, second));
    } else if current == second {
        out.push(splice(token, i, i, first));
    }
    out
}

/// `token` with `token[start..end]` replaced by `c`.
fn splice(token: &str, start: usize, end: usize, c: char) -> String {
    let mut s = String::with_capacity(token.len() + c.len_utf8());
    s.push_str(&token[..start]);
    s.push(c);
    s.push_str(&token[end..]);
    s
}

/// Depth-first Cartesian product of `choices`, joined with single spaces.
/// `current` is extended and restored around each branch; a branch that
/// would need more than `max_tokens` parts is cut.
fn combine<'a>(
    choices: &'a [Vec<String>],
    max_tokens: usize,
    current: &mut Vec<&'a str>,
    names: &mut Vec<String>,
) {
    let Some((head, tail)) = choices.split_first() else {
        names.push(current.join(" "));
        return;
    };
    if current.len() >= max_tokens {
        return;
    }
    for candidate in head {
        current.push(candidate.as_str());
        combine(tail, max_tokens, current, names);
        current.pop();
    }
}
