//! Maximum-matching segmentation of concatenated syllables.
//!
//! Both segmenters are greedy: they repeatedly take the longest lexicon
//! syllable (up to `max_len` characters) from one end of the remaining text.
//! When no prefix (or suffix) of any length is a syllable, the whole remainder
//! is emitted as one token and segmentation stops, so callers can spot the
//! failure by validating the tokens.
//!
//! The returned tokens borrow from the input and always concatenate back to
//! it, in order.

use crate::lexicon::Lexicon;

/// Longest syllable the segmenters look at in one step.
pub const MAX_TOKEN_LEN: usize = 6;

/// Forward maximum matching: consume the longest valid prefix, repeat.
pub fn forward_max_match<'a>(lexicon: &Lexicon, text: &'a str, max_len: usize) -> Vec<&'a str> {
    let mut tokens = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        // byte offsets just past each of the first `max_len` chars
        let ends: Vec<usize> = rest
            .char_indices()
            .take(max_len)
            .map(|(i, c)| i + c.len_utf8())
            .collect();

        match ends.into_iter().rev().find(|&end| lexicon.is_valid(&rest[..end])) {
            Some(end) => {
                tokens.push(&rest[..end]);
                rest = &rest[end..];
            }
            None => {
                tokens.push(rest);
                break;
            }
        }
    }
    tokens
}

/// Backward maximum matching: consume the longest valid suffix, repeat.
pub fn backward_max_match<'a>(lexicon: &Lexicon, text: &'a str, max_len: usize) -> Vec<&'a str> {
    let mut tokens = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        // suffix start offsets, shortest suffix first
        let starts: Vec<usize> = rest
            .char_indices()
            .rev()
            .take(max_len)
            .map(|(i, _)| i)
            .collect();

        match starts.into_iter().rev().find(|&start| lexicon.is_valid(&rest[start..])) {
            Some(start) => {
                tokens.push(&rest[start..]);
                rest = &rest[..start];
            }
            None => {
                tokens.push(rest);
                break;
            }
        }
    }
    tokens.reverse();
    tokens
}
