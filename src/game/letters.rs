//! Per-letter state tracking for the keyboard display
//!
//! A presentation-only overlay: the best verdict seen for each letter so
//! far in a session. Never consulted by evaluation or filtering.

use crate::core::Verdict;
use rustc_hash::FxHashMap;

/// Map from letter to the best verdict observed for it
#[derive(Debug, Default)]
pub struct LetterStates(FxHashMap<u8, Verdict>);

impl LetterStates {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a verdict for a letter, keeping the better of old and new
    ///
    /// A letter once matched stays matched even if a later guess places it
    /// wrong; mislaid likewise outranks missing.
    pub fn record(&mut self, letter: u8, verdict: Verdict) {
        let entry = self.0.entry(letter).or_insert(Verdict::Unknown);
        if verdict > *entry {
            *entry = verdict;
        }
    }

    /// The best verdict seen for a letter, if it has been guessed at all
    #[must_use]
    pub fn state(&self, letter: u8) -> Option<Verdict> {
        self.0.get(&letter).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unseen_letters_have_no_state() {
        let states = LetterStates::new();
        assert_eq!(states.state(b'a'), None);
    }

    #[test]
    fn records_first_verdict() {
        let mut states = LetterStates::new();
        states.record(b'a', Verdict::Mislaid);
        assert_eq!(states.state(b'a'), Some(Verdict::Mislaid));
    }

    #[test]
    fn upgrades_but_never_downgrades() {
        let mut states = LetterStates::new();
        states.record(b'e', Verdict::Missing);
        states.record(b'e', Verdict::Mislaid);
        assert_eq!(states.state(b'e'), Some(Verdict::Mislaid));

        states.record(b'e', Verdict::Matched);
        assert_eq!(states.state(b'e'), Some(Verdict::Matched));

        // A later worse result must not pull the state back down
        states.record(b'e', Verdict::Missing);
        assert_eq!(states.state(b'e'), Some(Verdict::Matched));
    }
}
