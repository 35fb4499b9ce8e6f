//! Interactive game session
//!
//! The guessing loop: prompt, validate against the word list, evaluate,
//! render, and settle the game after six guesses. Statistics updates are
//! best-effort and never interrupt play.

use super::letters::LetterStates;
use super::messages;
use crate::core::{Verdicts, WordStore};
use crate::output::render;
use crate::stats::PlayerStats;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, BufRead, Write};

/// How a session ended
///
/// Win and loss are ordinary outcomes, not errors; `Quit` is end-of-input
/// on the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Guessed the secret, with the number of guesses it took
    Won(usize),
    /// Ran out of guesses
    Lost,
    /// Input ended before the game did
    Quit,
}

/// One interactive play-through against a word store
pub struct Session<'a> {
    store: &'a WordStore,
    no_color: bool,
    rng: StdRng,
}

impl<'a> Session<'a> {
    pub const MAX_GUESSES: usize = 6;

    #[must_use]
    pub fn new(store: &'a WordStore, no_color: bool) -> Self {
        Self {
            store,
            no_color,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Run the game loop for the given secret word
    ///
    /// The secret must be lowercase and have the store's word size; the
    /// command layer validates that before calling.
    ///
    /// # Errors
    /// Only terminal I/O failures surface as errors. End-of-input is a
    /// graceful quit, unknown guesses re-prompt without consuming a turn.
    pub fn play(&mut self, secret: &str) -> io::Result<SessionOutcome> {
        let mut stats = PlayerStats::new("", self.store.word_size(), Self::MAX_GUESSES);
        // Missing or unreadable stats just start from zeros
        let _ = stats.load();
        stats.attempt();
        let _ = stats.save();

        let mut letters = LetterStates::new();
        let mut guess_number = 1;
        let stdin = io::stdin();

        loop {
            print!("{guess_number}: ");
            io::stdout().flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                // End of input is a quiet quit, not an error
                return Ok(SessionOutcome::Quit);
            }

            let guess = line.trim().to_lowercase();
            if guess.is_empty() {
                continue;
            }

            // Guesses that are not listed words don't consume a turn
            if !self.store.contains(&guess) {
                println!("Not a word");
                continue;
            }

            let verdicts = Verdicts::evaluate(secret, &guess);
            for (letter, verdict) in guess.bytes().zip(verdicts.iter()) {
                letters.record(letter, verdict);
            }
            render::print_guess_row(&guess, &verdicts, &letters, self.no_color);

            if guess == secret {
                println!("{}", messages::win_exclamatory(guess_number));
                stats.win(guess_number);
                let _ = stats.save();
                render::print_stats_report(&stats, self.no_color, guess_number);
                return Ok(SessionOutcome::Won(guess_number));
            }

            guess_number += 1;
            if guess_number > Self::MAX_GUESSES {
                println!("{}", messages::lose_insult(&mut self.rng));
                println!("The word was: {secret}");
                stats.lose();
                let _ = stats.save();
                render::print_stats_report(&stats, self.no_color, 0);
                return Ok(SessionOutcome::Lost);
            }
        }
    }
}
