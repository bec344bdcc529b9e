//! Levenshtein edit distance.
//!
//! Insertion, deletion and substitution each cost 1. The function works on
//! `char`s so it never panics on non-ASCII input, although the correction
//! engine only ever feeds it lowercase ASCII.

/// Levenshtein distance between `a` and `b`.
///
/// The implementation is the textbook dynamic programming table of size
/// `(len(a) + 1) x (len(b) + 1)`. Symmetric, zero on equal strings, and it
/// satisfies the triangle inequality, which is what the BK-tree relies on.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let (alen, blen) = (a_chars.len(), b_chars.len());

    if alen == 0 {
        return blen;
    }
    if blen == 0 {
        return alen;
    }

    let mut dp: Vec<Vec<usize>> = vec![vec![0; blen + 1]; alen + 1];

    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=blen {
        dp[0][j] = j;
    }

    for i in 1..=alen {
        for j in 1..=blen {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            dp[i][j] = std::cmp::min(
                std::cmp::min(dp[i - 1][j] + 1, dp[i][j - 1] + 1),
                dp[i - 1][j - 1] + cost,
            );
        }
    }

    dp[alen][blen]
}

/// [`levenshtein`] lifted to any string-like item, so it can serve as the
/// default distance of a `MetricTree<String>`.
pub fn str_distance<S: AsRef<str>>(a: &S, b: &S) -> usize {
    levenshtein(a.as_ref(), b.as_ref())
}
