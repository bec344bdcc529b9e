/*!
simple_usage.rs

Shows the two ways to build a `PinyinChecker`:
- at compile time with `include_syllables!`, which embeds the syllable list;
- at runtime from an in-memory word list.

Run with:
    cargo run --example simple_usage

The macro path is relative to the crate root. This demo reuses the syllable
list shipped for the tests.
*/

use pyspell::{include_syllables, CheckerConfig, PinyinChecker};

fn print_corrections(checker: &PinyinChecker, name: &str) {
    let names = checker.check_name(name);
    println!("-- {name:?} ({} corrections) --", names.len());
    for corrected in names {
        println!("  {corrected}");
    }
}

fn compile_time() {
    println!("=== Compile-time syllable list ===");
    let checker = include_syllables!("tests/data/syllables.txt");
    println!(
        "{} syllables, tree depth {}",
        checker.tree().len(),
        checker.tree().depth()
    );

    for name in ["Zhang Wei", "zhangwei", "li n1", "wng fang", "hello"] {
        print_corrections(&checker, name);
    }
}

fn runtime() {
    println!("\n=== Runtime word list ===");
    let config = CheckerConfig::default().with_max_name_tokens(3);
    let mut checker = PinyinChecker::with_config(config, ["yan", "yang", "neng", "an"]);

    print_corrections(&checker, "yan a1 neng");
    print_corrections(&checker, "yue");

    if let Ok(true) = checker.add_word("yue") {
        println!("added \"yue\"");
    }
    print_corrections(&checker, "yue");
}

fn main() {
    println!("pyspell example: compile-time macro and runtime builder\n");

    compile_time();
    runtime();

    println!("\nDone.");
}
