use std::path::PathBuf;

use pyspell::{levenshtein, normalize_name, CheckerConfig, PinyinChecker};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn syllable_file() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/syllables.txt")
}

fn full_checker() -> PinyinChecker {
    PinyinChecker::from_path(syllable_file()).expect("fixture should load")
}

#[test]
fn test_substitutes_digit_in_middle_part() {
    let checker = PinyinChecker::from_words(["yan", "yang", "neng", "an"]);
    assert_eq!(checker.check_name("yan a1 neng"), ["yan an neng"]);
}

#[test]
fn test_valid_name_is_returned_unchanged() {
    let checker = PinyinChecker::from_words(["yue", "yan"]);
    assert_eq!(checker.check_name("yue"), ["yue"]);
    assert_eq!(checker.check_name("YUE"), ["yue"]);
}

#[test]
fn test_single_token_substitution_candidates_are_sorted() {
    let checker = PinyinChecker::from_words(["ma", "li", "ni"]);
    assert_eq!(checker.check_name("maxi"), ["mali", "mani"]);
}

#[test]
fn test_single_token_insertion() {
    let checker = PinyinChecker::from_words(["li", "yang", "ang", "an", "ya"]);
    assert_eq!(checker.check_name("liyng"), ["liang", "liyang"]);
}

#[test]
fn test_name_with_too_many_parts_is_rejected() {
    let checker = PinyinChecker::from_words(["ma", "li", "ni"]);
    assert!(checker.check_name("ma li ni ma li").is_empty());
    assert_eq!(checker.check_name("ma li ni ma"), ["ma li ni ma"]);

    let roomy = PinyinChecker::with_config(
        CheckerConfig::default().with_max_name_tokens(5),
        ["ma", "li", "ni"],
    );
    assert_eq!(roomy.check_name("ma li ni ma li"), ["ma li ni ma li"]);
}

#[test]
fn test_uncorrectable_part_empties_the_name() {
    let checker = PinyinChecker::from_words(["yan", "yang", "neng", "an"]);
    assert!(checker.check_name("yan qx neng").is_empty());
    // a dropped single-character part does not block the rest
    assert_eq!(checker.check_name("yan q neng"), ["yan neng"]);
}

#[test]
fn test_empty_and_punctuation_only_input() {
    let checker = PinyinChecker::from_words(["ma", "li"]);
    assert!(checker.check_name("").is_empty());
    assert!(checker.check_name("!!!").is_empty());
    assert!(checker.check_name("m").is_empty());
}

#[test]
fn test_non_pinyin_input_is_rejected() {
    let checker = full_checker();
    assert!(checker.check_name("1234").is_empty());
}

#[test]
fn test_empty_vocabulary_rejects_everything() {
    let checker = PinyinChecker::new(CheckerConfig::default());
    assert!(checker.tree().is_empty());
    assert!(checker.check_name("zhang wei").is_empty());
}

#[test]
fn test_full_syllable_list() {
    let checker = full_checker();
    assert!(checker.tree().len() > 400);
    assert_eq!(checker.check_name("zhang wei"), ["zhang wei"]);
    assert_eq!(checker.check_name("Zhang-Wei"), ["zhang wei"]);
    assert_eq!(checker.check_name("zhangwei"), ["zhangwei"]);
    assert_eq!(checker.check_name("yue"), ["yue"]);
    assert!(checker.lexicon().is_valid("lve"));
}

#[test]
fn test_corrections_are_valid_single_edits() {
    let checker = full_checker();
    let syllables: Vec<String> = checker.tree().iter().cloned().collect();
    let alphabet = b"abcdefghijklmnopqrstuvwxyz0123456789";
    let mut rng = StdRng::seed_from_u64(11);
    let mut answered = 0;

    for _ in 0..200 {
        let mut name = String::new();
        for _ in 0..rng.random_range(1..=2) {
            name.push_str(&syllables[rng.random_range(0..syllables.len())]);
        }
        let mut bytes = name.into_bytes();
        let at = rng.random_range(0..bytes.len());
        bytes[at] = alphabet[rng.random_range(0..alphabet.len())];
        let typo = String::from_utf8(bytes).unwrap();

        let normalized = normalize_name(&typo);
        let candidates = checker.check_name(&typo);
        if !candidates.is_empty() {
            answered += 1;
        }
        for candidate in candidates {
            assert!(
                checker.is_right_name(&candidate),
                "{typo} -> {candidate} does not segment"
            );
            assert!(
                levenshtein(&normalized, &candidate) <= 1,
                "{typo} -> {candidate} is more than one edit away"
            );
        }
    }
    assert!(answered >= 50, "only {answered} of 200 typos got a correction");
}
