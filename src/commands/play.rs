//! The default command: play a game in the terminal

use crate::core::WordStore;
use crate::game::Session;
use anyhow::{Context, Result, bail};

/// Resolve the secret word and run an interactive session
///
/// A supplied secret is lowercased and must have the store's word size;
/// otherwise one is drawn at random from the store.
///
/// # Errors
/// Fails on a wrong-length secret word, an empty store, or terminal I/O
/// errors. Win, loss, and quit are all successful exits.
pub fn run_play(mut store: WordStore, secret_word: Option<String>, no_color: bool) -> Result<()> {
    let secret = match secret_word {
        Some(word) => {
            let word = word.to_lowercase();
            if word.len() != store.word_size() {
                bail!(
                    "Secret word must be {} letters: {word}",
                    store.word_size()
                );
            }
            word
        }
        None => store
            .random_word()
            .context("word list is empty")?
            .to_string(),
    };

    let mut session = Session::new(&store, no_color);
    session.play(&secret)?;
    Ok(())
}
