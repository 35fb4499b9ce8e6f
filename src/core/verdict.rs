//! Guess evaluation and per-letter verdicts
//!
//! A verdict classifies one letter of a guessed word against the secret
//! word. Evaluation is two-pass: exact matches are claimed first, then each
//! remaining guess letter scans the secret for an occurrence not already
//! claimed by an exact match.

use std::fmt;

/// Classification of a single guess letter
///
/// The variants are ordered from least to most informative so that a
/// letter's displayed state can be upgraded but never downgraded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Verdict {
    /// Letter has not been classified yet; transient during evaluation
    Unknown,
    /// Letter is not in the word
    Missing,
    /// Letter is in the word, but in the wrong spot
    Mislaid,
    /// Letter is in the correct spot
    Matched,
}

impl Verdict {
    /// The character used for this verdict in hint strings and plain output
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Matched => '!',
            Self::Mislaid => '~',
            Self::Missing => 'x',
            Self::Unknown => ' ',
        }
    }

    /// Parse a verdict symbol as used in hint strings
    ///
    /// Only the three final verdicts are recognized; `Unknown` never appears
    /// in a finished sequence and is not a valid hint symbol.
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '!' => Some(Self::Matched),
            '~' => Some(Self::Mislaid),
            'x' => Some(Self::Missing),
            _ => None,
        }
    }
}

/// The per-letter verdicts for one whole guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdicts(Vec<Verdict>);

impl Verdicts {
    /// Evaluate `guess` against `secret`
    ///
    /// Both words must have the same length and be lowercase ASCII. The
    /// caller is responsible for confirming the guess is a listed word
    /// first; evaluation itself never consults a word list.
    ///
    /// Pass one marks exact matches. Pass two scans the secret left to
    /// right for each unresolved guess letter, skipping occurrences already
    /// claimed by an exact match: if an unclaimed occurrence exists the
    /// letter is mislaid, otherwise it is missing.
    ///
    /// # Examples
    /// ```
    /// use mordle::core::Verdicts;
    ///
    /// let v = Verdicts::evaluate("crane", "slate");
    /// assert_eq!(v.to_string(), "xx!x!");
    /// ```
    ///
    /// # Panics
    /// Panics in debug mode if the lengths differ.
    #[must_use]
    pub fn evaluate(secret: &str, guess: &str) -> Self {
        debug_assert_eq!(secret.len(), guess.len());

        let secret = secret.as_bytes();
        let guess = guess.as_bytes();
        let n = secret.len();
        let mut result = vec![Verdict::Unknown; n];

        // First pass: exact matches
        // Allow: index needed to compare guess[i] with secret[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..n {
            if guess[i] == secret[i] {
                result[i] = Verdict::Matched;
            }
        }

        // Second pass: everything else
        // Allow: the scan reads result[p] for other positions while i's
        // entry is being decided
        #[allow(clippy::needless_range_loop)]
        for i in 0..n {
            if result[i] != Verdict::Unknown {
                continue;
            }

            let mut offset = 0;
            result[i] = loop {
                // Look for the guessed letter in the secret
                let Some(found) = secret[offset..].iter().position(|&c| c == guess[i]) else {
                    break Verdict::Missing;
                };
                let p = offset + found;

                // The letter is in the word. If this occurrence is already
                // claimed by an exact match, keep scanning past it.
                if result[p] != Verdict::Matched {
                    break Verdict::Mislaid;
                }
                offset = p + 1;
            };
        }

        Self(result)
    }

    /// Parse a verdict string of `!`, `~`, and `x` symbols
    #[must_use]
    pub fn from_symbols(s: &str) -> Option<Self> {
        s.chars()
            .map(Verdict::from_symbol)
            .collect::<Option<Vec<_>>>()
            .map(Self)
    }

    /// True when every position is `Matched`
    #[must_use]
    pub fn is_all_matched(&self) -> bool {
        self.0.iter().all(|&v| v == Verdict::Matched)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the per-position verdicts
    pub fn iter(&self) -> impl Iterator<Item = Verdict> + '_ {
        self.0.iter().copied()
    }
}

impl std::ops::Index<usize> for Verdicts {
    type Output = Verdict;

    fn index(&self, index: usize) -> &Verdict {
        &self.0[index]
    }
}

impl fmt::Display for Verdicts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in &self.0 {
            write!(f, "{}", v.symbol())?;
        }
        Ok(())
    }
}
