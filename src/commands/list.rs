//! The list command: print words, filtered by any supplied hints

use crate::core::{Hint, WordStore};
use anyhow::Result;

/// List every store word consistent with all hints, in sorted order
///
/// With no hints this prints the whole store. An empty result is not an
/// error; it prints a marker line instead.
///
/// # Errors
/// Fails if any hint is malformed (wrong length or unrecognized verdict
/// symbols); nothing is listed in that case.
pub fn run_list(store: &WordStore, hints: &[(String, String)]) -> Result<()> {
    // Validate every hint up front so a bad one aborts before any output
    let hints = hints
        .iter()
        .map(|(word, verdicts)| Hint::new(word, verdicts, store.word_size()))
        .collect::<Result<Vec<Hint>, _>>()?;

    let mut words_displayed = false;
    for word in store.words() {
        if hints.iter().all(|hint| hint.permits(word)) {
            println!("{word}");
            words_displayed = true;
        }
    }

    if !words_displayed {
        println!("<No words matched>");
    }

    Ok(())
}
