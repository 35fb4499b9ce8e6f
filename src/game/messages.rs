//! Win and loss flavor text

use rand::Rng;

/// The exclamation for a win, keyed to how many guesses it took
#[must_use]
pub fn win_exclamatory(guess_count: usize) -> &'static str {
    match guess_count {
        1 => "Genius!",
        2 => "Magnificent",
        3 => "Impressive",
        4 => "Splendid",
        5 => "Great",
        6 => "Phew",
        _ => "Meh",
    }
}

/// A randomly chosen insult for a loss
///
/// Most rolls land on the plain message; the colorful ones are rare.
pub fn lose_insult<R: Rng>(rng: &mut R) -> &'static str {
    match rng.random_range(0..26) {
        0 => "Wow, that was embarrassing.",
        1 => "At least your head can serve as a hat rack.",
        2 => "Were you dropped on your head as a child?",
        3 => "Stupid is as stupid does.",
        4 => "Don't quit your day job.",
        5 => "You are terrible at this.",
        6 => "Sorry, you suck.",
        _ => "You lose.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn win_text_covers_every_guess_count() {
        for n in 1..=6 {
            assert!(!win_exclamatory(n).is_empty());
        }
        assert_eq!(win_exclamatory(1), "Genius!");
        assert_eq!(win_exclamatory(6), "Phew");
        assert_eq!(win_exclamatory(7), "Meh");
    }

    #[test]
    fn lose_text_is_always_something() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert!(!lose_insult(&mut rng).is_empty());
        }
    }
}
