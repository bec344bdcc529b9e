//! Tunables for [`PinyinChecker`](crate::PinyinChecker).

use crate::segment::MAX_TOKEN_LEN;

/// Configuration for name checking.
///
/// The search radius is not configurable: candidate reconstruction assumes a
/// single edit, so it is always 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckerConfig {
    /// Window of the maximum-matching segmenters.
    pub max_token_len: usize,
    /// Largest number of space-separated tokens a corrected name may have.
    pub max_name_tokens: usize,
    /// Normalized names shorter than this are rejected.
    pub min_name_len: usize,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            max_token_len: MAX_TOKEN_LEN,
            max_name_tokens: 4,
            min_name_len: 2,
        }
    }
}

impl CheckerConfig {
    pub fn with_max_token_len(mut self, max_token_len: usize) -> Self {
        self.max_token_len = max_token_len;
        self
    }

    pub fn with_max_name_tokens(mut self, max_name_tokens: usize) -> Self {
        self.max_name_tokens = max_name_tokens;
        self
    }

    pub fn with_min_name_len(mut self, min_name_len: usize) -> Self {
        self.min_name_len = min_name_len;
        self
    }
}
