//! pyspell - fuzzy correction of pinyin names
//!
//! The crate checks romanized Chinese names against a vocabulary of pinyin
//! syllables and proposes single-edit corrections. It is built from:
//!
//! - [`distance`]: Levenshtein edit distance;
//! - [`bktree`]: a generic BK-tree ([`MetricTree`]) for radius search under
//!   any metric;
//! - [`lexicon`]: syllables bucketed by first character;
//! - [`segment`]: forward and backward maximum-matching segmentation;
//! - [`checker`]: [`PinyinChecker`], which ties them together.
//!
//! Examples
//!
//! - Compile-time embedding of the syllable list:
//!
//! ```ignore
//! use pyspell::include_syllables;
//!
//! let checker = include_syllables!("data/syllables.txt");
//! let names = checker.check_name("zhang wie");
//! ```
//!
//! - Runtime construction:
//!
//! ```ignore
//! use pyspell::PinyinChecker;
//!
//! let checker = PinyinChecker::from_path("syllables.txt")?;
//! assert_eq!(checker.check_name("yue"), ["yue"]);
//! ```

pub mod bktree;
pub mod checker;
pub mod config;
pub mod distance;
pub mod error;
pub mod lexicon;
pub mod segment;

/// Re-export commonly used types.
pub use bktree::MetricTree;
pub use checker::{normalize_name, PinyinChecker};
pub use config::CheckerConfig;
pub use distance::levenshtein;
pub use error::{Error, Result};
pub use lexicon::Lexicon;

/// Re-export the compile-time syllable macro from the proc-macro crate.
///
/// The expansion refers to `::phf`, so callers need `phf` among their own
/// dependencies.
pub use pyspell_macros::include_syllables;
