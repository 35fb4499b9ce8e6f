//! Build script to embed the built-in word list
//!
//! Reads the word list file and generates a Rust source file holding the
//! words as one concatenated blob of fixed-length entries.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_blob("data/words.txt", &Path::new(&out_dir).join("builtin.rs"));

    // Rebuild if the word list changes
    println!("cargo:rerun-if-changed=data/words.txt");
}

fn generate_word_blob(input_path: &str, output_path: &Path) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let word_size = words.first().map_or(0, |w| w.len());
    for word in &words {
        assert_eq!(
            word.len(),
            word_size,
            "Inconsistent word length in {input_path}: {word}"
        );
        assert!(
            word.chars().all(|c| c.is_ascii_lowercase()),
            "Non-lowercase word in {input_path}: {word}"
        );
    }

    let blob: String = words.concat();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated built-in word list").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Built-in words, concatenated with no separators").unwrap();
    writeln!(output, "pub const BUILTIN_BLOB: &str = \"{blob}\";").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Length of every built-in word").unwrap();
    writeln!(output, "pub const BUILTIN_WORD_SIZE: usize = {word_size};").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of built-in words").unwrap();
    writeln!(output, "pub const BUILTIN_WORD_COUNT: usize = {count};").unwrap();
}
